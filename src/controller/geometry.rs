//! Fixed carousel geometry and the pure page/offset/scale math built on it.
//!
//! Offsets follow the scroll-surface convention: content x of card `i` starts
//! at `i * pitch`, and the resting offset for a page is shifted left by the
//! leading inset so that page is centered in the viewport.

use std::ops::Range;

use serde::Serialize;

use super::error::{CarouselError, CarouselResult};
use crate::util::layout;

/// Smallest scale applied to a card far from the viewport center.
pub const MIN_SCALE: f32 = 0.8;

/// Scale lost between the center and the viewport edge.
pub const SCALE_FALLOFF: f32 = 0.2;

/// Extra horizontal stretch added on top of the base scale.
pub const WIDTH_STRETCH: f32 = 0.1;

/// Projection factor for the fast deceleration rate (0.99 per millisecond):
/// a fling at `v` points/second comes to rest `v * 0.099` points further on.
pub const FLING_PROJECTION: f32 = 0.99 / (1.0 - 0.99) / 1000.0;

/// Page count below which every page offset round-trips through `f32`.
pub const MAX_EXACT_PAGES: usize = 1 << 23;

/// Non-uniform scale applied to a card's transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CardScale {
    pub width: f32,
    pub height: f32,
}

impl CardScale {
    /// Scale for a card `distance` points from the viewport center.
    ///
    /// `max_distance` must be positive. The base scale is floored at
    /// [`MIN_SCALE`] so cards hanging past the viewport edge never shrink
    /// further or flip sign.
    pub fn for_distance(distance: f32, max_distance: f32) -> Self {
        let raw = (1.0 - (distance / max_distance) * SCALE_FALLOFF).max(MIN_SCALE);
        Self::from_base(raw)
    }

    fn from_base(base: f32) -> Self {
        Self {
            width: base + WIDTH_STRETCH,
            height: base,
        }
    }

    /// The base scale before the horizontal stretch.
    pub fn base(&self) -> f32 {
        self.height
    }
}

/// Scale for a card centered at `card_center_x` in a viewport of
/// `viewport_width` whose center sits at `viewport_center_x`.
pub fn scale_for_card(
    card_center_x: f32,
    viewport_center_x: f32,
    viewport_width: f32,
) -> CarouselResult<CardScale> {
    if viewport_width <= 0.0 || !viewport_width.is_finite() {
        return Err(CarouselError::InvalidGeometry(format!(
            "viewport width must be positive, got {viewport_width}"
        )));
    }
    let distance = (card_center_x - viewport_center_x).abs();
    Ok(CardScale::for_distance(distance, viewport_width / 2.0))
}

/// Immutable layout constants for one carousel instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CarouselGeometry {
    item_width: f32,
    item_spacing: f32,
    viewport_width: f32,
    item_count: usize,
}

impl CarouselGeometry {
    /// Validate and build a geometry. Pitch and viewport width must be
    /// positive and finite.
    pub fn new(
        item_width: f32,
        item_spacing: f32,
        viewport_width: f32,
        item_count: usize,
    ) -> CarouselResult<Self> {
        let pitch = item_width + item_spacing;
        if pitch <= 0.0 || !pitch.is_finite() {
            return Err(CarouselError::InvalidGeometry(format!(
                "pitch must be positive, got {item_width} + {item_spacing}"
            )));
        }
        if viewport_width <= 0.0 || !viewport_width.is_finite() {
            return Err(CarouselError::InvalidGeometry(format!(
                "viewport width must be positive, got {viewport_width}"
            )));
        }
        Ok(Self {
            item_width,
            item_spacing,
            viewport_width,
            item_count,
        })
    }

    /// Same item layout in a viewport of a different width.
    pub fn with_viewport_width(&self, viewport_width: f32) -> CarouselResult<Self> {
        Self::new(
            self.item_width,
            self.item_spacing,
            viewport_width,
            self.item_count,
        )
    }

    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn item_spacing(&self) -> f32 {
        self.item_spacing
    }

    pub fn viewport_width(&self) -> f32 {
        self.viewport_width
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Center-to-center distance between adjacent cards.
    pub fn pitch(&self) -> f32 {
        self.item_width + self.item_spacing
    }

    /// Space before the first card so it can sit in the middle of the viewport.
    pub fn leading_inset(&self) -> f32 {
        (self.viewport_width - self.item_width) / 2.0
    }

    /// Viewport center in viewport coordinates.
    pub fn viewport_center_x(&self) -> f32 {
        self.viewport_width / 2.0
    }

    /// Offset that centers page `index`, without range checking.
    pub(crate) fn offset_for_index(&self, index: usize) -> f32 {
        (index as f64 * f64::from(self.pitch()) - f64::from(self.leading_inset())) as f32
    }

    /// Scroll offset that centers `page`.
    ///
    /// Offsets are `f32`, so [`page_from_offset`](Self::page_from_offset)
    /// recovers `page` exactly only below [`MAX_EXACT_PAGES`].
    pub fn page_to_offset(&self, page: usize) -> CarouselResult<f32> {
        if page >= self.item_count {
            return Err(CarouselError::OutOfRange {
                page,
                count: self.item_count,
            });
        }
        Ok(self.offset_for_index(page))
    }

    /// Page closest to the viewport center at `offset`, clamped to a valid index.
    pub fn page_from_offset(&self, offset: f32) -> usize {
        let position = (f64::from(offset) + f64::from(self.leading_inset())) / f64::from(self.pitch());
        layout::nearest_index(position.round() as f32, self.item_count)
    }

    /// Resting offset and page nearest to `proposed_offset`.
    pub fn snap(&self, proposed_offset: f32) -> (f32, usize) {
        let page = self.page_from_offset(proposed_offset);
        (self.offset_for_index(page), page)
    }

    /// On-screen center of card `index` when scrolled to `offset`.
    pub fn card_center_x(&self, index: usize, offset: f32) -> f32 {
        index as f32 * self.pitch() + self.item_width / 2.0 - offset
    }

    /// Indices of cards overlapping the viewport at `offset`.
    pub fn visible_range(&self, offset: f32) -> Range<usize> {
        layout::visible_range(
            self.item_count,
            self.pitch(),
            self.item_width,
            offset,
            self.viewport_width,
        )
    }

    /// Scale for card `index` when scrolled to `offset`.
    pub fn card_scale(&self, index: usize, offset: f32) -> CardScale {
        let distance = (self.card_center_x(index, offset) - self.viewport_center_x()).abs();
        CardScale::for_distance(distance, self.viewport_width / 2.0)
    }
}
