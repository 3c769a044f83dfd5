use std::sync::LazyLock;

use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

use crate::error::ConfigError;
use crate::source::{
    DictSource, join_definitions, normalize_definition, parse_base_url, selector, text_of,
};

pub(super) const ID: &str = "zdic";

const DEFAULT_BASE_URL: &str = "https://www.zdic.net/hans/";

/// Bullet glyph in front of the paragraph-style definitions
const BULLET: char = '◎';

static PINYIN: LazyLock<Selector> = LazyLock::new(|| selector("span.dicpy"));
static AUDIO: LazyLock<Selector> =
    LazyLock::new(|| selector(".dicpy > .ptr > .audio_play_button"));
static DEFINITION_LIST: LazyLock<Selector> =
    LazyLock::new(|| selector(".content.definitions.jnr > ol"));
static LIST_ITEM: LazyLock<Selector> = LazyLock::new(|| selector("li"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));

/// 汉典 (zdic.net): one page per character under `/hans/<char>`
#[derive(Debug, Clone)]
pub struct ZdicSource {
    base: Url,
}

impl ZdicSource {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    pub fn with_base_url(base_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base: parse_base_url(base_url)?,
        })
    }
}

pub(super) fn boxed(base_url: Option<&str>) -> Result<Box<dyn DictSource>, ConfigError> {
    let source = match base_url {
        Some(url) => ZdicSource::with_base_url(url)?,
        None => ZdicSource::new()?,
    };
    Ok(Box::new(source))
}

impl DictSource for ZdicSource {
    fn id(&self) -> &'static str {
        ID
    }

    fn page_url(&self, character: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(character);
        }
        url
    }

    fn pinyin(&self, doc: &Html) -> Option<String> {
        let element = doc.select(&PINYIN).next()?;
        let first = element.children().next()?;
        let text = match first.value() {
            Node::Text(text) => (**text).to_string(),
            _ => ElementRef::wrap(first).map(text_of)?,
        };
        text.split_whitespace().next().map(str::to_string)
    }

    fn pronounce(&self, doc: &Html) -> Option<String> {
        let button = doc.select(&AUDIO).next()?;
        let src = button.value().attr("data-src-mp3")?.trim();
        if src.starts_with("//") {
            Some(format!("https:{src}"))
        } else {
            Some(src.to_string())
        }
    }

    fn definitions(&self, doc: &Html, character: &str) -> Option<String> {
        let list = doc.select(&DEFINITION_LIST).next()?;

        let mut definitions: Vec<String> = list
            .select(&LIST_ITEM)
            .map(|li| normalize_definition(&text_of(li), character))
            .collect();

        if definitions.is_empty() {
            definitions = list
                .select(&PARAGRAPH)
                .map(|p| normalize_definition(&text_of(p).replace(BULLET, ""), character))
                .collect();
        }

        let numbered = definitions
            .into_iter()
            .enumerate()
            .map(|(i, definition)| format!("{}. {}", i + 1, definition))
            .collect();
        join_definitions(numbered)
    }
}
