use serde::Serialize;

/// Scroll phase of a carousel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ScrollPhase {
    /// At rest; `current_page` is authoritative.
    #[default]
    Idle,
    /// Following the user's finger. No page commit happens here.
    Dragging,
    /// Animating toward `target_offset_x`.
    Settling,
}

/// Mutable scroll bookkeeping for one carousel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarouselState {
    /// Current horizontal scroll offset
    pub scroll_offset_x: f32,
    /// Page shown by the indicator, always a valid index (0 when empty)
    pub current_page: usize,
    /// Current scroll phase
    pub phase: ScrollPhase,
    /// Offset being animated toward while settling
    pub target_offset_x: f32,
}

impl CarouselState {
    /// State at rest on `page`, scrolled to `offset`.
    pub fn at_rest(page: usize, offset: f32) -> Self {
        Self {
            scroll_offset_x: offset,
            current_page: page,
            phase: ScrollPhase::Idle,
            target_offset_x: offset,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.phase == ScrollPhase::Idle
    }
}
