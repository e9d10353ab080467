//! Evaluation core for a small dynamically-typed scripting language.
//!
//! This crate owns everything downstream of a parsed [`ast::Program`]:
//! the runtime [`value::Value`] domain, lexically scoped
//! [`environment::Environment`]s with closure support, the built-in
//! function registry, and the tree-walking [`eval`] itself. Lexing,
//! parsing, and any REPL/CLI front end are deliberately external
//! collaborators — see [`ast::builder`] for how this crate is exercised
//! without one.

pub mod ast;
pub mod builtins;
pub mod environment;
pub mod errors;
pub mod eval;
pub mod hash_key;
pub mod singletons;
pub mod value;

pub use builtins::{CapturingSink, NullSink, OutputSink, StdoutSink};
pub use environment::Environment;
pub use errors::EvalError;
pub use eval::{eval_program, eval_program_with, EvalOptions};
pub use value::Value;
