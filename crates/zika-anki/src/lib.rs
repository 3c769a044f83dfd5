mod emit;
mod error;
mod template;
mod writer;

pub use emit::{CharacterEmitter, EmitStats, emit_list};
pub use error::EmitError;
pub use template::{FIELD_DELIMITER, LIST_DELIMITER, character_row, list_row};
pub use writer::create_output;
