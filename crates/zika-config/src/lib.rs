use std::env;

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::input::InputConfig;

pub mod dictionary;
pub mod input;

pub use self::dictionary::FetchErrorPolicy;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub input: InputConfig,
}

impl Config {
    /// Build the config from `ZIKA_*` environment variables, falling back to defaults
    pub fn new() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Config::new`] but reads variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Config {
            dictionary: DictionaryConfig::from_lookup(&lookup),
            input: InputConfig::from_lookup(&lookup),
        }
    }
}
