//! Traits implemented by the macros in `derive_custom`. They live in
//! a separate crate because a proc-macro crate cannot export
//! ordinary items, and the generated impls need a stable path to
//! refer to.
use serde::Deserialize;
use serde::Serialize;

/// A struct that can be read from one section of the parameter file.
pub trait SectionParameters: Serialize + for<'de> Deserialize<'de> {
    /// The top level key of the section, or `None` for types that
    /// are only used as part of another section.
    fn section_name() -> Option<&'static str>;
}
