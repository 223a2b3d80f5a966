//! Presentation-agnostic game driver.
//!
//! - `driver`: `Session`, which owns the authoritative state, turns clicks
//!   into engine calls and runs the computer's turn
//! - `status`: prompt line and per-cell highlight flags for a front end

pub mod driver;
pub mod status;

pub use driver::{ClickOutcome, Session};
pub use status::{CellHint, Status};
