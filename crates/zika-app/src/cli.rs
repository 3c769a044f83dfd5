use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use zika_config::{Config, FetchErrorPolicy};
use zika_core::CardKind;

use crate::logging::LogFormat;
use crate::pipeline::Job;

#[derive(Parser)]
#[command(
    name = "zika",
    version,
    about = "Build Anki card lists from chaptered lists of Chinese characters, words and sentences"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// JSON config file; without it settings come from ZIKA_* environment variables
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Character cards with pinyin, definitions, stroke image and audio
    Chars {
        #[command(flatten)]
        paths: Paths,
        #[command(flatten)]
        lookup: LookupArgs,
    },
    /// Word cards: `word|tags`
    Words {
        #[command(flatten)]
        paths: Paths,
    },
    /// Sentence cards: `sentence|tags`
    Sentences {
        #[command(flatten)]
        paths: Paths,
    },
}

#[derive(Args)]
pub struct Paths {
    /// Input files followed by the output file
    #[arg(required = true, num_args = 2.., value_name = "INPUT... OUTPUT")]
    pub paths: Vec<PathBuf>,
}

impl Paths {
    /// Inputs and output. Clap guarantees at least two paths.
    fn split(mut self) -> (Vec<PathBuf>, PathBuf) {
        let output = self.paths.pop().unwrap_or_default();
        (self.paths, output)
    }
}

#[derive(Args, Default)]
pub struct LookupArgs {
    /// Dictionary source (zdic or baidu)
    #[arg(long)]
    pub source: Option<String>,

    /// Max dictionary lookups in flight
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Per-request timeout
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// What to do when a page cannot be fetched (abort or skip)
    #[arg(long)]
    pub on_fetch_error: Option<FetchErrorPolicy>,
}

impl LookupArgs {
    fn apply(self, config: &mut Config) {
        if let Some(source) = self.source {
            config.dictionary.source = source;
        }
        if let Some(concurrency) = self.concurrency {
            config.dictionary.concurrency = usize::from(concurrency);
        }
        if let Some(timeout) = self.timeout {
            config.dictionary.timeout_seconds = timeout;
        }
        if let Some(policy) = self.on_fetch_error {
            config.dictionary.on_fetch_error = policy;
        }
    }
}

impl Commands {
    /// Turn the parsed command into a job, with CLI flags taking precedence over `config`
    pub fn into_job(self, mut config: Config) -> anyhow::Result<Job> {
        let (kind, paths) = match self {
            Commands::Chars { paths, lookup } => {
                lookup.apply(&mut config);
                (CardKind::Characters, paths)
            }
            Commands::Words { paths } => (CardKind::Words, paths),
            Commands::Sentences { paths } => (CardKind::Sentences, paths),
        };
        let (inputs, output) = paths.split();
        Job::new(kind, inputs, output, config)
    }
}
