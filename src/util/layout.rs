//! Pure layout and scroll math functions.
//!
//! These functions have no dependencies on application state and are easily unit tested.

use std::ops::Range;

/// Scroll animation easing factor
pub const SCROLL_EASING: f32 = 0.15;

/// Distance (in points) under which an animation snaps to its target.
pub const SNAP_THRESHOLD: f32 = 0.5;

/// Apply easing to animate scroll offset toward target.
///
/// When the difference is small (< 0.5 points), snaps directly to target
/// to avoid endless tiny animations.
pub fn ease_toward(current: f32, target: f32, easing: f32) -> f32 {
    let diff = target - current;
    if diff.abs() > SNAP_THRESHOLD {
        current + diff * easing
    } else {
        target
    }
}

/// Check if scroll animation is still in progress.
pub fn is_animating(current: f32, target: f32) -> bool {
    (current - target).abs() > SNAP_THRESHOLD
}

/// Round a continuous card position to the nearest index, clamped to `0..count`.
///
/// Positions are expressed in pitches from the first card, so `2.4` is
/// closest to card 2. An empty strip clamps everything to 0.
pub fn nearest_index(position: f32, count: usize) -> usize {
    let last = count.saturating_sub(1);
    let rounded = position.round();
    if !rounded.is_finite() {
        return if rounded > 0.0 { last } else { 0 };
    }
    if rounded <= 0.0 {
        0
    } else {
        (rounded as usize).min(last)
    }
}

/// Determine which cards are visible in the current viewport.
///
/// Cards are laid out at a fixed `pitch`, card `i` starting at content x
/// `i * pitch`. Returns the range of indices that at least partially
/// overlap `[scroll_offset, scroll_offset + viewport_width)`.
pub fn visible_range(
    count: usize,
    pitch: f32,
    item_width: f32,
    scroll_offset: f32,
    viewport_width: f32,
) -> Range<usize> {
    if count == 0 || pitch <= 0.0 {
        return 0..0;
    }

    let view_right = scroll_offset + viewport_width;

    // Card i is visible when i * pitch + item_width > scroll_offset
    // and i * pitch < view_right.
    let first = ((scroll_offset - item_width) / pitch).floor() + 1.0;
    let end = (view_right / pitch).ceil();

    let start = first.max(0.0).min(count as f32) as usize;
    let end = end.max(0.0).min(count as f32) as usize;
    start..end.max(start)
}
