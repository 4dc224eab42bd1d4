/// Grid sampling.
///
/// Defines the plotting window and evaluates an equation at every point of it.
pub mod grid;
/// ASCII rendering.
///
/// Draws the curve where a sampled equation changes sign.
pub mod render;
