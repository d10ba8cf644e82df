//! Common type aliases used throughout the engine.

/// Search depth, counted in plies (a pass is a ply).
pub type Depth = u32;

/// Evaluation score, always from the point of view of the side to move.
pub type Score = i32;
