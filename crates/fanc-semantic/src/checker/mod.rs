//! Semantic action implementation modules.

mod actions;
mod control_flow;
mod core;
mod expressions;
mod functions;
mod helpers;
mod program;
mod statements;

pub use self::core::AnalysisContext;
