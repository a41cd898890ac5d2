//! term-bounce (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_bounce::{core,engine,term,types}`
//! and hosts the binary-facing pieces: command-line parsing, logging setup
//! and signal wiring.

pub use term_bounce_core as core;
pub use term_bounce_engine as engine;
pub use term_bounce_term as term;
pub use term_bounce_types as types;

pub mod cli;
pub mod interrupt;
pub mod logging;
