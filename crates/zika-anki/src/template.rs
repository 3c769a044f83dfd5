use zika_core::{TagSet, join_tags};
use zika_dictionary::DictionaryRecord;

/// Column separator of character cards
pub const FIELD_DELIMITER: &str = " | ";

/// Column separator of word and sentence cards
pub const LIST_DELIMITER: &str = "|";

/// `tags | entry | pinyin | definitions | image | pronounce`, absent fields left empty
pub fn character_row(entry: &str, tags: &TagSet, record: &DictionaryRecord) -> String {
    let field = |value: &Option<String>| one_line(value.as_deref().unwrap_or_default());

    [
        one_line(&join_tags(tags)),
        one_line(entry),
        field(&record.pinyin),
        field(&record.definitions),
        field(&record.image),
        field(&record.pronounce),
    ]
    .join(FIELD_DELIMITER)
}

/// `entry|tags`
pub fn list_row(entry: &str, tags: &TagSet) -> String {
    format!("{}{}{}", one_line(entry), LIST_DELIMITER, one_line(&join_tags(tags)))
}

/// Line breaks inside a value would split the card over two rows
fn one_line(value: &str) -> String {
    if !value.contains(['\n', '\r']) {
        return value.to_string();
    }
    value
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
