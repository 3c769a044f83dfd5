mod error;
mod fetch;
mod page;
mod source;
pub mod sources;

pub use error::{ConfigError, FetchError};
pub use fetch::{Fetcher, HttpFetcher};
pub use page::{DictPage, DictionaryRecord, Field};
pub use source::{DEFINITION_SEPARATOR, DictSource, normalize_definition, stroke_image_url};
pub use sources::{BaiduSource, ZdicSource, build_source, source_ids};

/// Parsed dictionary page
pub use scraper::Html;
/// Page addresses
pub use url::Url;
