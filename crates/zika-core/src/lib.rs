pub mod collect;
pub mod error;
pub mod types;

pub use collect::{Collector, book_name};
pub use error::InputError;
pub use types::{CardKind, EntryTable, TagSet, join_tags};
