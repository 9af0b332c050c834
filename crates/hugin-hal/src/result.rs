//! Execution results and measurement counts.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Measurement counts keyed by bitstring.
///
/// Bitstrings are little-endian: character `i` is the outcome of
/// qubit `i`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Counts(FxHashMap<String, u64>);

impl Counts {
    /// Create an empty counts map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` observations of `bitstring`.
    pub fn insert(&mut self, bitstring: impl Into<String>, count: u64) {
        *self.0.entry(bitstring.into()).or_insert(0) += count;
    }

    /// Get the count for a bitstring (zero if never observed).
    pub fn get(&self, bitstring: &str) -> u64 {
        self.0.get(bitstring).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// The most frequently observed outcome, if any.
    pub fn most_frequent(&self) -> Option<(&str, u64)> {
        self.0
            .iter()
            .max_by_key(|&(_, &count)| count)
            .map(|(bitstring, &count)| (bitstring.as_str(), count))
    }

    /// Iterate over `(bitstring, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no outcomes were observed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Result of executing a circuit on a backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Measurement counts.
    pub counts: Counts,
    /// Number of shots executed.
    pub shots: u32,
    /// Wall-clock execution time in milliseconds, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result from counts and a shot total.
    pub fn new(counts: Counts, shots: u32) -> Self {
        Self {
            counts,
            shots,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    pub fn with_execution_time(mut self, millis: u64) -> Self {
        self.execution_time_ms = Some(millis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_accumulate() {
        let mut counts = Counts::new();
        counts.insert("00", 3);
        counts.insert("11", 5);
        counts.insert("00", 2);

        assert_eq!(counts.get("00"), 5);
        assert_eq!(counts.get("11"), 5);
        assert_eq!(counts.get("01"), 0);
        assert_eq!(counts.total(), 10);
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_most_frequent() {
        let mut counts = Counts::new();
        counts.insert("0", 1);
        counts.insert("1", 99);

        let (bitstring, count) = counts.most_frequent().unwrap();
        assert_eq!(bitstring, "1");
        assert_eq!(count, 99);
    }

    #[test]
    fn test_empty_counts() {
        let counts = Counts::new();
        assert!(counts.is_empty());
        assert!(counts.most_frequent().is_none());
        assert_eq!(counts.total(), 0);
    }
}
