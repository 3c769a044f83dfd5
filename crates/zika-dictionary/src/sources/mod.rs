//! Concrete dictionary sites and the id -> constructor table used to pick one.

mod baidu;
mod zdic;

pub use baidu::BaiduSource;
pub use zdic::ZdicSource;

use crate::error::ConfigError;
use crate::source::DictSource;

type Constructor = fn(Option<&str>) -> Result<Box<dyn DictSource>, ConfigError>;

const SOURCES: &[(&str, Constructor)] = &[
    (zdic::ID, zdic::boxed as Constructor),
    (baidu::ID, baidu::boxed as Constructor),
];

/// Ids accepted by [`build_source`]
pub fn source_ids() -> Vec<&'static str> {
    SOURCES.iter().map(|(id, _)| *id).collect()
}

/// Resolve a configured source id, optionally pointing it at another base URL.
///
/// Nothing is fetched here, so a bad id fails before any network traffic.
pub fn build_source(id: &str, base_url: Option<&str>) -> Result<Box<dyn DictSource>, ConfigError> {
    let wanted = id.trim();
    let (_, constructor) = SOURCES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ConfigError::UnknownSource {
            id: id.to_string(),
            known: source_ids().join(", "),
        })?;

    constructor(base_url)
}
