//! Parsing implementation modules.

mod expressions;
mod functions;
mod parser;
mod statements;
mod types;

pub use parser::{MAX_NESTING_DEPTH, Parser};
