//! Quality bounds and the single clamp helper every category rule goes through.

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i32 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i32 = 50;

/// Apply `delta` to `quality` and clamp the result into
/// [`MIN_QUALITY`, `MAX_QUALITY`].
///
/// Only the result is clamped: an out-of-range starting value is pulled back
/// into bounds the first time it goes through here. Saturating arithmetic keeps
/// extreme inputs from overflowing.
pub fn adjust(quality: i32, delta: i32) -> i32 {
    quality.saturating_add(delta).clamp(MIN_QUALITY, MAX_QUALITY)
}

/// Returns `true` if `quality` lies within the bounds for ordinary items.
pub fn is_within_bounds(quality: i32) -> bool {
    (MIN_QUALITY..=MAX_QUALITY).contains(&quality)
}
