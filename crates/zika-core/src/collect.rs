//! Input scanning: turns chaptered text files into an [`EntryTable`].
//!
//! Every file contributes tags of the form `book + chapter`, where the book is
//! the file stem and the chapter is set by marker lines (`#Chapter 1`).
//! Character and word lists hold several entries per line separated by a
//! delimiter glyph; sentence lists join consecutive lines into one entry and
//! end it at a blank line or a new chapter.

use std::fs;
use std::path::Path;

use crate::error::InputError;
use crate::types::{CardKind, EntryTable};

const BOM: char = '\u{feff}';

/// File stem of `path`, used as the book part of every tag
pub fn book_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .filter(|stem| !stem.is_empty())
}

#[derive(Debug, Clone)]
pub struct Collector {
    kind: CardKind,
    chapter_marker: String,
    separator: String,
}

impl Collector {
    pub fn new(kind: CardKind) -> Self {
        Self {
            kind,
            chapter_marker: "#".to_string(),
            separator: "、".to_string(),
        }
    }

    pub fn with_chapter_marker(mut self, marker: impl Into<String>) -> Self {
        self.chapter_marker = marker.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Scan all files in order into one shared table
    pub fn collect_files<P: AsRef<Path>>(&self, paths: &[P]) -> Result<EntryTable, InputError> {
        let mut table = EntryTable::new();
        for path in paths {
            self.collect_file(&mut table, path.as_ref())?;
        }
        tracing::info!(
            entries = table.len(),
            files = paths.len(),
            "Collected {} {}s",
            table.len(),
            self.kind
        );
        Ok(table)
    }

    /// Scan one file into `table`, returning how many entries it yielded
    pub fn collect_file(&self, table: &mut EntryTable, path: &Path) -> Result<usize, InputError> {
        tracing::info!("Processing input file: {}", path.display());

        let book = book_name(path).ok_or_else(|| InputError::NoBookName(path.to_path_buf()))?;
        let text = fs::read_to_string(path).map_err(|source| InputError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let count = self.collect_text(table, &book, &text);
        if count == 0 {
            tracing::warn!("No {}s found in {}", self.kind, path.display());
        }
        Ok(count)
    }

    /// Scan already loaded text tagged with `book`
    pub fn collect_text(&self, table: &mut EntryTable, book: &str, text: &str) -> usize {
        let text = text.strip_prefix(BOM).unwrap_or(text);
        match self.kind {
            CardKind::Characters | CardKind::Words => self.collect_tokens(table, book, text),
            CardKind::Sentences => self.collect_sentences(table, book, text),
        }
    }

    fn chapter_of<'a>(&self, line: &'a str) -> Option<&'a str> {
        line.strip_prefix(self.chapter_marker.as_str())
            .map(str::trim)
    }

    fn collect_tokens(&self, table: &mut EntryTable, book: &str, text: &str) -> usize {
        let mut chapter = "";
        let mut count = 0;

        for line in text.lines().map(str::trim) {
            if let Some(next) = self.chapter_of(line) {
                chapter = next;
                continue;
            }
            if line.is_empty() {
                continue;
            }

            let tag = format!("{book}{chapter}");
            let tokens: Vec<&str> = line
                .split(self.separator.as_str())
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect();
            let total = tokens.len();

            for (i, token) in tokens.into_iter().enumerate() {
                table.insert(token, &tag);
                count += 1;
                tracing::debug!("Reading {} {}/{}: {} [{}]", self.kind, i + 1, total, token, tag);
            }
        }

        count
    }

    fn collect_sentences(&self, table: &mut EntryTable, book: &str, text: &str) -> usize {
        let mut chapter = "";
        let mut sentence = String::new();
        let mut count = 0;

        let mut flush = |sentence: &mut String, chapter: &str| {
            if sentence.is_empty() {
                return;
            }
            let tag = format!("{book}{chapter}");
            table.insert(sentence, &tag);
            count += 1;
            tracing::debug!("Reading sentence: {} [{}]", sentence, tag);
            sentence.clear();
        };

        for line in text.lines().map(str::trim) {
            if let Some(next) = self.chapter_of(line) {
                flush(&mut sentence, chapter);
                chapter = next;
            } else if line.is_empty() {
                flush(&mut sentence, chapter);
            } else {
                sentence.push_str(line);
            }
        }
        flush(&mut sentence, chapter);

        count
    }
}
