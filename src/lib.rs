//! # lt-dominators
//!
//! Dominator and post-dominator analysis for compiler control-flow graphs,
//! via the Lengauer-Tarjan near-linear algorithm.
//!
//! ## Architecture overview
//!
//! ```text
//! ControlFlowGraph (caller-owned) → DFS numbering → Lengauer-Tarjan pass → DominatorResult
//!                                                                               ↓
//!                                                                    ControlDependence
//! ```
//!
//! The crate never owns or constructs a CFG; it consumes one through the
//! narrow [`ControlFlowGraph`] trait and produces small, immutable result
//! types. A single analysis instance computes everything eagerly at
//! construction time — there is no incremental or streaming mode.
//!
//! ## Quick start
//!
//! ```rust
//! use lt_dominators::{build_dominators, BlockId, Mode, SimpleCfg};
//!
//! let mut cfg = SimpleCfg::new(4, BlockId::new(0), BlockId::new(3));
//! cfg.add_edge(BlockId::new(0), BlockId::new(1));
//! cfg.add_edge(BlockId::new(0), BlockId::new(2));
//! cfg.add_edge(BlockId::new(1), BlockId::new(3));
//! cfg.add_edge(BlockId::new(2), BlockId::new(3));
//!
//! let dom = build_dominators(&cfg, Mode::Dominators);
//! assert_eq!(dom.immediate_dominator(BlockId::new(3)), Some(BlockId::new(0)));
//! ```

pub mod cfg;
pub mod control_dependence;
pub mod dominators;
pub mod error;
mod node_info;

pub use cfg::{BlockId, ControlFlowGraph, SimpleCfg};
pub use control_dependence::{build_control_dependence, ControlDependence};
pub use dominators::{build_dominators, DominatorResult, Mode};
pub use error::ControlDependenceError;
