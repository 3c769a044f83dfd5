use std::io::Write;
use std::pin::pin;

use futures_util::{StreamExt, stream};
use zika_config::FetchErrorPolicy;
use zika_core::{CardKind, EntryTable, join_tags};
use zika_dictionary::{DictPage, DictSource, DictionaryRecord, Fetcher};

use crate::error::EmitError;
use crate::template::{character_row, list_row};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EmitStats {
    /// Rows written, one per entry
    pub rows: usize,
    /// Rows with at least one empty dictionary field
    pub incomplete: usize,
    /// Entries whose page could not be fetched (skip policy only)
    pub skipped: usize,
}

/// Writes character cards, looking every character up in a dictionary.
///
/// Up to `concurrency` lookups run at once, but rows are always written in
/// table order.
pub struct CharacterEmitter<'a> {
    source: &'a dyn DictSource,
    fetcher: &'a dyn Fetcher,
    concurrency: usize,
    on_fetch_error: FetchErrorPolicy,
}

impl<'a> CharacterEmitter<'a> {
    pub fn new(source: &'a dyn DictSource, fetcher: &'a dyn Fetcher) -> Self {
        Self {
            source,
            fetcher,
            concurrency: 1,
            on_fetch_error: FetchErrorPolicy::Abort,
        }
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_fetch_error_policy(mut self, policy: FetchErrorPolicy) -> Self {
        self.on_fetch_error = policy;
        self
    }

    pub async fn emit<W: Write>(&self, table: &EntryTable, out: &mut W) -> Result<EmitStats, EmitError> {
        let total = table.len();
        let mut stats = EmitStats::default();

        let lookups = stream::iter(table.iter().enumerate())
            .map(|(i, (entry, tags))| async move {
                tracing::info!(
                    "Processing character {}/{}: {} [{}]",
                    i + 1,
                    total,
                    entry,
                    join_tags(tags)
                );
                let mut page = DictPage::new(self.source, self.fetcher, entry);
                (entry, tags, page.record().await)
            })
            .buffered(self.concurrency);
        let mut lookups = pin!(lookups);

        while let Some((entry, tags, result)) = lookups.next().await {
            let record = match result {
                Ok(record) => record,
                Err(e) => match self.on_fetch_error {
                    FetchErrorPolicy::Abort => {
                        out.flush()?;
                        return Err(EmitError::Fetch {
                            entry: entry.to_string(),
                            source: e,
                        });
                    }
                    FetchErrorPolicy::Skip => {
                        tracing::error!(
                            character = entry,
                            source = self.source.id(),
                            url = e.url(),
                            "Skipping dictionary fields of \"{}\": {}",
                            entry,
                            e
                        );
                        stats.skipped += 1;
                        DictionaryRecord::default()
                    }
                },
            };

            if !record.is_complete() {
                stats.incomplete += 1;
            }
            writeln!(out, "{}", character_row(entry, tags, &record))?;
            stats.rows += 1;
        }

        out.flush()?;
        Ok(stats)
    }
}

/// Writes word or sentence cards, which need no dictionary lookup
pub fn emit_list<W: Write>(table: &EntryTable, kind: CardKind, out: &mut W) -> Result<EmitStats, EmitError> {
    let total = table.len();
    let mut stats = EmitStats::default();

    for (i, (entry, tags)) in table.iter().enumerate() {
        tracing::info!("Processing {} {}/{}: {} [{}]", kind, i + 1, total, entry, join_tags(tags));
        writeln!(out, "{}", list_row(entry, tags))?;
        stats.rows += 1;
    }

    out.flush()?;
    Ok(stats)
}
