/// Numeric conversion helpers.
///
/// Converts between `usize` and `f64` without silent data loss. Used to turn
/// grid extents into point counts and point indices back into coordinates.
pub mod num;
