use rand::distr::Alphabetic;
use rand::Rng;
use std::fmt;

const SUFFIX_LEN: usize = 6;

/// Lookup key for one upload record: `<epoch millis>_<6 letters>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphabetic)
            .take(SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self(format!("{}_{}", millis, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
