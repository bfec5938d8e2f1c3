//! Cell/district intersection.
//!
//! Classifies one grid cell against one district polygon in three tiers:
//! - corner test: all four corners inside is `Full`
//! - no corner inside: an `n x n` interior sample (plus any district vertex
//!   lying in the cell) decides between `Empty` and the exact path
//! - exact path: the district boundary is clipped to the cell rectangle
//!
//! Only cells straddling a boundary reach the clipper.

mod classify;
mod clip;
mod types;


pub use classify::{classify_grid, intersect_cell};
pub use clip::clip_to_rect;
pub use types::{Coverage, IntersectionResult};
