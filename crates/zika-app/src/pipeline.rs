use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use zika_anki::{CharacterEmitter, EmitStats, create_output, emit_list};
use zika_config::Config;
use zika_core::{CardKind, Collector, EntryTable};
use zika_dictionary::{HttpFetcher, build_source};

/// One run: which cards, from which files, into which file
#[derive(Debug)]
pub struct Job {
    pub kind: CardKind,
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub config: Config,
}

impl Job {
    pub fn new(
        kind: CardKind,
        inputs: Vec<PathBuf>,
        output: PathBuf,
        config: Config,
    ) -> anyhow::Result<Self> {
        anyhow::ensure!(!inputs.is_empty(), "At least one input file is required");
        anyhow::ensure!(
            config.dictionary.timeout_seconds > 0,
            "Dictionary timeout must be at least one second"
        );
        anyhow::ensure!(
            !config.input.chapter_marker.is_empty(),
            "Chapter marker must not be empty"
        );
        anyhow::ensure!(
            !config.input.separator.is_empty(),
            "Entry separator must not be empty"
        );
        anyhow::ensure!(
            !inputs.contains(&output),
            "Output file {} is also an input",
            output.display()
        );

        Ok(Self {
            kind,
            inputs,
            output,
            config,
        })
    }

    fn collector(&self) -> Collector {
        Collector::new(self.kind)
            .with_chapter_marker(self.config.input.chapter_marker.as_str())
            .with_separator(self.config.input.separator.as_str())
    }

    fn collect(&self) -> anyhow::Result<EntryTable> {
        Ok(self.collector().collect_files(&self.inputs)?)
    }
}

pub async fn run(job: &Job) -> anyhow::Result<EmitStats> {
    match job.kind {
        CardKind::Characters => run_characters(job).await,
        CardKind::Words | CardKind::Sentences => run_list(job),
    }
}

async fn run_characters(job: &Job) -> anyhow::Result<EmitStats> {
    let dictionary = &job.config.dictionary;

    // Resolve the source before touching inputs or the network
    let source = build_source(&dictionary.source, dictionary.base_url.as_deref())?;
    let fetcher = HttpFetcher::new(
        Duration::from_secs(dictionary.timeout_seconds),
        &dictionary.user_agent,
    )?;
    tracing::info!(
        source = source.id(),
        concurrency = dictionary.concurrency,
        "Looking characters up on {}",
        source.id()
    );

    let table = job.collect()?;
    let mut out = create_output(&job.output)
        .with_context(|| format!("Failed to create {}", job.output.display()))?;

    let stats = CharacterEmitter::new(source.as_ref(), &fetcher)
        .with_concurrency(dictionary.concurrency)
        .with_fetch_error_policy(dictionary.on_fetch_error)
        .emit(&table, &mut out)
        .await?;
    Ok(stats)
}

fn run_list(job: &Job) -> anyhow::Result<EmitStats> {
    let table = job.collect()?;
    let mut out = create_output(&job.output)
        .with_context(|| format!("Failed to create {}", job.output.display()))?;

    Ok(emit_list(&table, job.kind, &mut out)?)
}
