//! Loop driver: wires the clock, render state, view and terminal together.
//!
//! The runner owns every piece of mutable state and passes it explicitly to
//! each component once per iteration. Stopping is cooperative through a
//! [`CancelToken`].

pub mod cancel;
pub mod runner;

pub use term_bounce_core as core;
pub use term_bounce_term as term;
pub use term_bounce_types as types;

pub use cancel::CancelToken;
pub use runner::{RunConfig, RunSummary, Runner};
