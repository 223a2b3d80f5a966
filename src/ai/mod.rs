//! Computer opponent.
//!
//! A single fixed-priority heuristic (win, block, center, random). The
//! selector is read-only: it proposes an `Action` and the caller applies it
//! through `crate::rules` like any human action.

pub mod heuristic;

pub use heuristic::select_action;
