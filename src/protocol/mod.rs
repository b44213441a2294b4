//! Text protocol of the soccer server: a flat tokenizer, tagged field lookup,
//! per-message parsers and the outbound command set.

pub mod command;
pub mod message;
pub mod object;
pub mod parser;
pub mod tokenizer;

pub use self::command::Command;
pub use self::message::MessageKind;
pub use self::parser::{parse_init, parse_see, parse_sense};
pub use self::tokenizer::Tokenizer;
