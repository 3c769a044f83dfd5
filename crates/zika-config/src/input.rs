use serde::{Deserialize, Serialize};

fn default_chapter_marker() -> String {
    "#".to_string()
}

fn default_separator() -> String {
    "、".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct InputConfig {
    /// Line prefix that starts a new chapter
    #[serde(default = "default_chapter_marker")]
    pub chapter_marker: String,
    /// Glyph between entries on a character/word line
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            chapter_marker: default_chapter_marker(),
            separator: default_separator(),
        }
    }
}

impl InputConfig {
    pub(crate) fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Self {
        let chapter_marker = lookup("ZIKA_CHAPTER_MARKER")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_chapter_marker);
        let separator = lookup("ZIKA_SEPARATOR")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(default_separator);

        Self {
            chapter_marker,
            separator,
        }
    }
}
