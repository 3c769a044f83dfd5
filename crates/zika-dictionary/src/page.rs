use std::fmt;

use scraper::Html;
use url::Url;

use crate::error::FetchError;
use crate::fetch::Fetcher;
use crate::source::DictSource;

/// The four values a dictionary page can contribute to a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Image,
    Pinyin,
    Pronounce,
    Definitions,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Image,
        Field::Pinyin,
        Field::Pronounce,
        Field::Definitions,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Image => "image",
            Field::Pinyin => "pinyin",
            Field::Pronounce => "pronounce",
            Field::Definitions => "definitions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything one page yielded for one character; any field may be absent
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DictionaryRecord {
    pub image: Option<String>,
    pub pinyin: Option<String>,
    pub pronounce: Option<String>,
    pub definitions: Option<String>,
}

impl DictionaryRecord {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Image => self.image.as_deref(),
            Field::Pinyin => self.pinyin.as_deref(),
            Field::Pronounce => self.pronounce.as_deref(),
            Field::Definitions => self.definitions.as_deref(),
        }
    }

    /// Fields the page did not provide
    pub fn missing(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).is_none())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }
}

/// Dictionary page of a single character.
///
/// The page is fetched on the first field access and the parsed document is
/// kept for the lifetime of this value, so reading all four fields costs one
/// request. A field the page lacks is logged and returned as `None`; only the
/// fetch itself can fail.
pub struct DictPage<'a> {
    source: &'a dyn DictSource,
    fetcher: &'a dyn Fetcher,
    character: String,
    url: Url,
    document: Option<Html>,
}

impl<'a> DictPage<'a> {
    pub fn new(source: &'a dyn DictSource, fetcher: &'a dyn Fetcher, character: &str) -> Self {
        Self {
            source,
            fetcher,
            character: character.to_string(),
            url: source.page_url(character),
            document: None,
        }
    }

    pub fn character(&self) -> &str {
        &self.character
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn is_loaded(&self) -> bool {
        self.document.is_some()
    }

    pub async fn image(&mut self) -> Result<Option<String>, FetchError> {
        self.field(Field::Image).await
    }

    pub async fn pinyin(&mut self) -> Result<Option<String>, FetchError> {
        self.field(Field::Pinyin).await
    }

    pub async fn pronounce(&mut self) -> Result<Option<String>, FetchError> {
        self.field(Field::Pronounce).await
    }

    pub async fn definitions(&mut self) -> Result<Option<String>, FetchError> {
        self.field(Field::Definitions).await
    }

    /// All four fields
    pub async fn record(&mut self) -> Result<DictionaryRecord, FetchError> {
        Ok(DictionaryRecord {
            image: self.image().await?,
            pinyin: self.pinyin().await?,
            pronounce: self.pronounce().await?,
            definitions: self.definitions().await?,
        })
    }

    async fn field(&mut self, field: Field) -> Result<Option<String>, FetchError> {
        self.load().await?;

        let value = self.extract(field);
        if value.is_none() {
            tracing::error!(
                character = %self.character,
                source = self.source.id(),
                url = %self.url,
                %field,
                "Failed to get {} for character \"{}\": {}",
                field,
                self.character,
                self.url
            );
        }
        Ok(value)
    }

    async fn load(&mut self) -> Result<(), FetchError> {
        if self.document.is_none() {
            let body = self.fetcher.fetch(&self.url).await?;
            self.document = Some(Html::parse_document(&body));
        }
        Ok(())
    }

    fn extract(&self, field: Field) -> Option<String> {
        let doc = self.document.as_ref()?;
        let value = match field {
            Field::Image => self.source.image(doc, &self.character),
            Field::Pinyin => self.source.pinyin(doc),
            Field::Pronounce => self.source.pronounce(doc),
            Field::Definitions => self.source.definitions(doc, &self.character),
        };
        value.filter(|v| !v.trim().is_empty())
    }
}
