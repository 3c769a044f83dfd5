use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Book+chapter labels of one entry, kept sorted so output is stable
pub type TagSet = BTreeSet<String>;

/// Which kind of card list is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardKind {
    Characters,
    Words,
    Sentences,
}

impl CardKind {
    /// Noun used in progress logs
    pub fn unit(&self) -> &'static str {
        match self {
            CardKind::Characters => "character",
            CardKind::Words => "word",
            CardKind::Sentences => "sentence",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.unit())
    }
}

/// Entries in order of first appearance, each with the tags it was seen under.
///
/// Entries are compared by exact text. An entry only enters the table
/// together with a tag, so no tag set is ever empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryTable {
    entries: Vec<(String, TagSet)>,
    index: HashMap<String, usize>,
}

impl EntryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `entry` under `tag`. Returns true if the entry is new.
    pub fn insert(&mut self, entry: &str, tag: &str) -> bool {
        if let Some(&idx) = self.index.get(entry) {
            self.entries[idx].1.insert(tag.to_string());
            return false;
        }

        self.index.insert(entry.to_string(), self.entries.len());
        self.entries
            .push((entry.to_string(), TagSet::from([tag.to_string()])));
        true
    }

    pub fn get(&self, entry: &str) -> Option<&TagSet> {
        self.index.get(entry).map(|&idx| &self.entries[idx].1)
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.index.contains_key(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TagSet)> {
        self.entries.iter().map(|(entry, tags)| (entry.as_str(), tags))
    }

    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(entry, _)| entry.as_str())
    }
}

/// Space-joined tag list as written in card rows
pub fn join_tags(tags: &TagSet) -> String {
    tags.iter().map(String::as_str).collect::<Vec<_>>().join(" ")
}
