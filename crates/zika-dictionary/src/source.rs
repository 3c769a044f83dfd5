use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::ConfigError;

/// Joins definition entries inside one card field
pub const DEFINITION_SEPARATOR: &str = "<br>";

/// Placeholder the dictionaries use for the headword inside examples
const PLACEHOLDER: char = '～';

const STROKE_IMAGE_BASE: &str = "https://img.zdic.net/kai/jbh/";

/// One online dictionary: where its pages live and how to read them.
///
/// Extractors return `None` when the page does not have the element they
/// look for. That is an expected outcome, not an error.
pub trait DictSource: Send + Sync {
    /// Identifier used in configuration (`zdic`, `baidu`)
    fn id(&self) -> &'static str;

    /// Page address for `character`
    fn page_url(&self, character: &str) -> Url;

    /// Stroke-order image URL
    fn image(&self, _doc: &Html, character: &str) -> Option<String> {
        stroke_image_url(character)
    }

    fn pinyin(&self, doc: &Html) -> Option<String>;

    /// Pronunciation audio URL
    fn pronounce(&self, doc: &Html) -> Option<String>;

    /// Definitions joined by [`DEFINITION_SEPARATOR`]
    fn definitions(&self, doc: &Html, character: &str) -> Option<String>;
}

/// Stroke-order GIF named after the upper-case hex code point of the first character
pub fn stroke_image_url(character: &str) -> Option<String> {
    character
        .chars()
        .next()
        .map(|c| format!("{STROKE_IMAGE_BASE}{:X}.gif", c as u32))
}

/// Trim a raw definition and put `character` in place of every `～`
pub fn normalize_definition(text: &str, character: &str) -> String {
    text.trim()
        .replace(PLACEHOLDER, character)
        .trim()
        .to_string()
}

pub(crate) fn join_definitions(definitions: Vec<String>) -> Option<String> {
    if definitions.is_empty() {
        return None;
    }
    Some(definitions.join(DEFINITION_SEPARATOR))
}

pub(crate) fn parse_base_url(base_url: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(base_url).map_err(|e| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: "URL cannot carry a path".to_string(),
        });
    }

    Ok(url)
}

/// Parse a selector literal; used to build the per-source `LazyLock` statics
pub(crate) fn selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid selector {css:?}: {e:?}"))
}

/// All text below `element`, concatenated
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}
