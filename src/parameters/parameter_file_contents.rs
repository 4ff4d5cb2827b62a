use std::collections::HashMap;
use std::collections::HashSet;
use std::str::FromStr;

use derive_traits::SectionParameters;
use log::debug;
use serde_yaml::Mapping;
use serde_yaml::Value;

use super::ParameterError;

/// Replaces a single (possibly nested) value of a section. Parsed from
/// strings of the form `section.key.subkey=value` where `value` is
/// any YAML value. Without any keys, the entire section is replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub section: String,
    pub keys: Vec<String>,
    pub value: Value,
}

impl FromStr for Override {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: String| ParameterError::InvalidOverride(s.to_owned(), reason);
        let (path, value) = s
            .split_once('=')
            .ok_or_else(|| invalid("expected section.key=value".into()))?;
        let mut names = path.split('.').map(|name| name.trim().to_owned());
        let section = names.next().unwrap_or_default();
        let keys: Vec<_> = names.collect();
        if section.is_empty() || keys.iter().any(|key| key.is_empty()) {
            return Err(invalid(format!("empty name in \"{}\"", path)));
        }
        let value = serde_yaml::from_str(value).map_err(|e| invalid(e.to_string()))?;
        Ok(Self {
            section,
            keys,
            value,
        })
    }
}

/// The sections of a parameter file. Extracting a section stores the
/// effective values (including defaults and overrides) back, so that
/// [`ParameterFileContents::contents`] describes the parameters that
/// were actually used.
#[derive(Debug, Default)]
pub struct ParameterFileContents {
    sections: HashMap<String, Value>,
    overrides: Vec<Override>,
    extracted: HashSet<String>,
}

fn insert_overrides(value: &mut Value, overrides: &[Override]) {
    for o in overrides.iter() {
        set_sublevel_value_by_keys(value, &o.keys, o.value.clone());
    }
}

/// Constructs a map of the form
/// key1: key2: key3: ... key_n: Value
/// If keys is empty, returns value
fn construct_sub_mapping(keys: &[String], value: Value) -> Value {
    if keys.is_empty() {
        value
    } else {
        let mut map = Mapping::default();
        map.insert(
            Value::String(keys[0].clone()),
            construct_sub_mapping(&keys[1..], value),
        );
        Value::Mapping(map)
    }
}

fn set_sublevel_value_by_keys(value: &mut Value, keys: &[String], target_value: Value) {
    if keys.is_empty() {
        *value = target_value;
        return;
    }
    match value.as_mapping_mut() {
        Some(mapping) => match mapping.get_mut(&keys[0]) {
            Some(sub_value) => set_sublevel_value_by_keys(sub_value, &keys[1..], target_value),
            None => {
                mapping.insert(
                    Value::String(keys[0].clone()),
                    construct_sub_mapping(&keys[1..], target_value),
                );
            }
        },
        None => *value = construct_sub_mapping(keys, target_value),
    }
}

fn extract_from_default<T: SectionParameters>(
    section_name: &str,
    overrides: &[Override],
) -> Result<T, ParameterError> {
    debug!(
        "Parameter section missing for '{}', assuming defaults",
        section_name
    );
    let mut value = Value::Mapping(Mapping::default());
    insert_overrides(&mut value, overrides);
    serde_yaml::from_value::<T>(value.clone()).map_err(|e| {
        let values_overridden = value.as_mapping().map(|m| !m.is_empty()).unwrap_or(true);
        if values_overridden {
            ParameterError::InvalidSection(section_name.to_owned(), e)
        } else {
            ParameterError::MissingSection(section_name.to_owned())
        }
    })
}

fn extract_from_section<T: SectionParameters>(
    section_name: &str,
    overrides: &[Override],
    section_value: &mut Value,
) -> Result<T, ParameterError> {
    insert_overrides(section_value, overrides);
    serde_yaml::from_value(section_value.clone())
        .map_err(|e| ParameterError::InvalidSection(section_name.to_owned(), e))
}

impl ParameterFileContents {
    pub fn new(contents: &str) -> Result<Self, ParameterError> {
        let value: Value = serde_yaml::from_str(contents).map_err(ParameterError::Parse)?;
        let sections = match value {
            Value::Null => HashMap::default(),
            Value::Mapping(mapping) => mapping
                .into_iter()
                .map(|(k, v)| match k {
                    Value::String(name) => Ok((name, v)),
                    _ => Err(ParameterError::NotAMapping),
                })
                .collect::<Result<_, _>>()?,
            _ => return Err(ParameterError::NotAMapping),
        };
        Ok(Self {
            sections,
            ..Default::default()
        })
    }

    pub fn with_overrides(&mut self, overrides: Vec<Override>) -> &mut Self {
        self.overrides = overrides;
        self
    }

    pub fn get_section_names(&self) -> impl Iterator<Item = &String> {
        self.sections.keys()
    }

    /// Names of sections in the file (or in overrides) that were never
    /// extracted, in alphabetical order.
    pub fn unused_section_names(&self) -> Vec<String> {
        let mut unused: Vec<_> = self
            .get_section_names()
            .chain(self.overrides.iter().map(|o| &o.section))
            .filter(|name| !self.extracted.contains(*name))
            .cloned()
            .collect();
        unused.sort();
        unused.dedup();
        unused
    }

    fn get_overrides_for_section<'a>(
        &'a self,
        section_name: &'a str,
    ) -> impl Iterator<Item = Override> + 'a {
        self.overrides
            .iter()
            .filter(move |o| o.section == section_name)
            .cloned()
    }

    /// The sections as a YAML document, sorted by name.
    pub fn contents(&self) -> Result<String, serde_yaml::Error> {
        let mut names: Vec<_> = self.sections.keys().collect();
        names.sort();
        let mut map = Mapping::default();
        for name in names {
            map.insert(Value::String(name.clone()), self.sections[name].clone());
        }
        serde_yaml::to_string(&map)
    }

    pub fn extract_parameter_struct<T: SectionParameters>(&mut self) -> Result<T, ParameterError> {
        let section_name = T::section_name()
            .ok_or_else(|| ParameterError::NotASection(std::any::type_name::<T>()))?;
        let overrides_this_section: Vec<_> =
            self.get_overrides_for_section(section_name).collect();
        let extracted = match self.sections.get_mut(section_name) {
            Some(section_value) => {
                extract_from_section::<T>(section_name, &overrides_this_section, section_value)?
            }
            None => extract_from_default::<T>(section_name, &overrides_this_section)?,
        };
        let value = serde_yaml::to_value(&extracted)
            .map_err(|e| ParameterError::InvalidSection(section_name.to_owned(), e))?;
        self.sections.insert(section_name.to_owned(), value);
        self.extracted.insert(section_name.to_owned());
        Ok(extracted)
    }
}
