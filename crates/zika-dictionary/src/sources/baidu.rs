use std::sync::LazyLock;

use scraper::{Html, Selector};
use url::Url;

use crate::error::ConfigError;
use crate::source::{
    DictSource, join_definitions, normalize_definition, parse_base_url, selector, text_of,
};

pub(super) const ID: &str = "baidu";

const DEFAULT_BASE_URL: &str = "https://dict.baidu.com/s";

static PINYIN: LazyLock<Selector> = LazyLock::new(|| selector("#pinyin > span > b"));
static AUDIO: LazyLock<Selector> = LazyLock::new(|| selector(".mp3-play"));
static DEFINITIONS: LazyLock<Selector> =
    LazyLock::new(|| selector("#basicmean-wrapper > .tab-content > dl > dd > p"));

/// 百度汉语: character search page, `s?wd=<char>&ptype=zici`
#[derive(Debug, Clone)]
pub struct BaiduSource {
    base: Url,
}

impl BaiduSource {
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
        Some(url) => BaiduSource::with_base_url(url)?,
        None => BaiduSource::new()?,
    };
    Ok(Box::new(source))
}

impl DictSource for BaiduSource {
    fn id(&self) -> &'static str {
        ID
    }

    fn page_url(&self, character: &str) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("wd", character)
            .append_pair("ptype", "zici");
        url
    }

    fn pinyin(&self, doc: &Html) -> Option<String> {
        doc.select(&PINYIN)
            .next()
            .map(|b| text_of(b).trim().to_string())
    }

    fn pronounce(&self, doc: &Html) -> Option<String> {
        doc.select(&AUDIO)
            .next()?
            .value()
            .attr("url")
            .map(str::to_string)
    }

    fn definitions(&self, doc: &Html, character: &str) -> Option<String> {
        let definitions = doc
            .select(&DEFINITIONS)
            .map(|p| normalize_definition(&text_of(p), character))
            .collect();
        join_definitions(definitions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <div id="pinyin"><span><b>māo</b><a class="mp3-play" url="https://fanyiapp.cdn.bcebos.com/zhdict/mp3/mao1.mp3"></a></span></div>
          <div id="basicmean-wrapper">
            <div class="tab-content">
              <dl><dd>
                <p>～ 是一种动物</p>
                <p>姓。</p>
              </dd></dl>
            </div>
          </div>
        </body></html>
    "#;

    fn source() -> BaiduSource {
        BaiduSource::new().unwrap()
    }

    #[test]
    fn test_page_url_uses_query() {
        assert_eq!(
            source().page_url("猫").as_str(),
            "https://dict.baidu.com/s?wd=%E7%8C%AB&ptype=zici"
        );
    }

    #[test]
    fn test_extracts_all_fields() {
        let doc = Html::parse_document(PAGE);
        let source = source();

        assert_eq!(source.pinyin(&doc).as_deref(), Some("māo"));
        assert_eq!(
            source.pronounce(&doc).as_deref(),
            Some("https://fanyiapp.cdn.bcebos.com/zhdict/mp3/mao1.mp3")
        );
        assert_eq!(
            source.definitions(&doc, "猫").as_deref(),
            Some("猫 是一种动物<br>姓。")
        );
    }

    #[test]
    fn test_missing_structures_yield_none() {
        let doc = Html::parse_document("<html><body></body></html>");
        let source = source();

        assert_eq!(source.pinyin(&doc), None);
        assert_eq!(source.pronounce(&doc), None);
        assert_eq!(source.definitions(&doc, "猫"), None);
    }
}
