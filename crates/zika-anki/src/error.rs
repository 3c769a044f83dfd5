use zika_dictionary::FetchError;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("Failed to write cards: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dictionary lookup for \"{entry}\" failed: {source}")]
    Fetch {
        entry: String,
        #[source]
        source: FetchError,
    },
}
