use std::collections::HashMap;
use std::time::Duration;
use std::time::Instant;

use linked_hash_map::LinkedHashMap;
use log::warn;
use serde::Serialize;
use serde_yaml::Value;

type Category = String;

#[derive(Debug)]
enum Measurement {
    RunTimes(Vec<Duration>),
    Counts(Vec<usize>),
    Number(usize),
}

impl Measurement {
    fn as_value(&self) -> Result<Value, serde_yaml::Error> {
        match self {
            Measurement::RunTimes(run_times) => serde_yaml::to_value(Statistics::new(run_times)),
            Measurement::Counts(counts) => serde_yaml::to_value(CountStatistics::new(counts)),
            Measurement::Number(num) => serde_yaml::to_value(num),
        }
    }
}

/// Run time statistics in seconds.
#[derive(Serialize)]
struct Statistics {
    average: f64,
    total: f64,
    num_calls: usize,
}

impl Statistics {
    fn new(run_times: &[Duration]) -> Self {
        let total = run_times.iter().sum::<Duration>().as_secs_f64();
        let num_calls = run_times.len();
        Self {
            total,
            average: if num_calls == 0 {
                0.0
            } else {
                total / num_calls as f64
            },
            num_calls,
        }
    }
}

#[derive(Serialize)]
struct CountStatistics {
    average: f64,
    min: usize,
    max: usize,
    total: usize,
    num_samples: usize,
}

impl CountStatistics {
    fn new(counts: &[usize]) -> Self {
        let total: usize = counts.iter().sum();
        let num_samples = counts.len();
        Self {
            average: if num_samples == 0 {
                0.0
            } else {
                total as f64 / num_samples as f64
            },
            min: counts.iter().copied().min().unwrap_or(0),
            max: counts.iter().copied().max().unwrap_or(0),
            total,
            num_samples,
        }
    }
}

/// Collects run times, per-step counts and single numbers under
/// named categories.
#[derive(Default, Debug)]
pub struct Timers {
    results: HashMap<Category, Measurement>,
    timers: HashMap<Category, Instant>,
}

impl Timers {
    pub fn start<N: Into<String>>(&mut self, name: N) {
        self.timers.insert(name.into(), Instant::now());
    }

    /// Records the time since the timer was started and returns it.
    pub fn stop<N: Into<String>>(&mut self, name: N) -> Option<Duration> {
        let name = name.into();
        match self.timers.remove(&name) {
            Some(start) => {
                let elapsed_time = start.elapsed();
                self.record_time(name, elapsed_time);
                Some(elapsed_time)
            }
            None => {
                warn!("Tried to stop timer that was never started: {}", name);
                None
            }
        }
    }

    pub fn record_time<N: Into<String>>(&mut self, name: N, elapsed_time: Duration) {
        let name = name.into();
        match self
            .results
            .entry(name.clone())
            .or_insert(Measurement::RunTimes(vec![]))
        {
            Measurement::RunTimes(run_times) => run_times.push(elapsed_time),
            _ => warn!("Performance category {} is not a run time", name),
        }
    }

    pub fn record_count<N: Into<String>>(&mut self, name: N, count: usize) {
        let name = name.into();
        match self
            .results
            .entry(name.clone())
            .or_insert(Measurement::Counts(vec![]))
        {
            Measurement::Counts(counts) => counts.push(count),
            _ => warn!("Performance category {} is not a count", name),
        }
    }

    pub fn record_number<N: Into<String>>(&mut self, name: N, val: usize) {
        self.results.insert(name.into(), Measurement::Number(val));
    }

    /// The total run time recorded for this category, if any.
    pub fn total<N: Into<String>>(&self, name: N) -> Option<Duration> {
        let name: String = name.into();
        match self.results.get(&name) {
            Some(Measurement::RunTimes(run_times)) => Some(run_times.iter().sum()),
            _ => None,
        }
    }

    pub fn as_output(&self) -> Result<LinkedHashMap<Category, Value>, serde_yaml::Error> {
        let mut names: Vec<_> = self.results.keys().cloned().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| {
                let result = self.results[&name].as_value()?;
                Ok::<_, serde_yaml::Error>((name, result))
            })
            .collect()
    }
}
