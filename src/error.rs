//! Error types returned by the library.
//!
//! The dominator engine itself has no fallible public entry point: forward
//! analysis aborts via `panic!` on a genuinely corrupt CFG (see the
//! [`crate::dominators`] module docs), and a post-dominator-mode disconnected
//! entry is represented as data (`DominatorResult::is_valid()` returning
//! `false`), not as an error. Control dependence is the one place a caller
//! can hand this crate a value it must reject cleanly: a post-dominator
//! result that never finished validly.

use thiserror::Error;

/// Errors raised by [`crate::control_dependence::build_control_dependence`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControlDependenceError {
    /// The post-dominator result passed in was computed with
    /// `is_valid() == false`. Control dependence is only defined relative to
    /// a complete post-dominator tree.
    #[error(
        "control dependence requires a valid post-dominator result, but the entry block was \
         unreachable from exit"
    )]
    InvalidPostDominators,
}
