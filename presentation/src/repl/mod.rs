//! Interactive command loop

pub mod parser;
pub mod prompt;
pub mod quiz_repl;
