//! Carousel scroll-snapping controller.
//!
//! Owns the item list, the fixed [`CarouselGeometry`] and the mutable
//! [`CarouselState`]. The rendering layer feeds it scroll samples and
//! lifecycle events and reads back offsets, the current page, and per-card
//! scales. Nothing here knows about a rendering surface.

mod error;
mod geometry;
mod state;

use std::ops::Range;

pub use error::{CarouselError, CarouselResult};
pub use geometry::{
    scale_for_card, CardScale, CarouselGeometry, FLING_PROJECTION, MAX_EXACT_PAGES, MIN_SCALE,
    SCALE_FALLOFF, WIDTH_STRETCH,
};
pub use state::{CarouselState, ScrollPhase};

use crate::util::layout;

/// A horizontally scrolling row of cards that snaps to a centered item.
#[derive(Debug, Clone)]
pub struct CarouselController<T> {
    items: Vec<T>,
    geometry: CarouselGeometry,
    state: CarouselState,
}

impl<T> CarouselController<T> {
    /// Create a controller at rest on the first page.
    pub fn new(
        items: Vec<T>,
        item_width: f32,
        item_spacing: f32,
        viewport_width: f32,
    ) -> CarouselResult<Self> {
        let geometry = CarouselGeometry::new(item_width, item_spacing, viewport_width, items.len())?;
        let state = CarouselState::at_rest(0, geometry.offset_for_index(0));
        log::debug!(
            "carousel created: {} items, pitch {}, inset {}",
            items.len(),
            geometry.pitch(),
            geometry.leading_inset()
        );
        Ok(Self {
            items,
            geometry,
            state,
        })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page
    }

    pub fn phase(&self) -> ScrollPhase {
        self.state.phase
    }

    pub fn scroll_offset_x(&self) -> f32 {
        self.state.scroll_offset_x
    }

    /// Snap a proposed resting offset to the nearest page.
    ///
    /// `_velocity` is accepted for callers that pass the fling velocity
    /// along; snapping always picks the nearest pitch multiple. Records the
    /// resulting page as current.
    pub fn compute_snap_target(&mut self, proposed_offset_x: f32, _velocity: f32) -> (f32, usize) {
        let (offset, page) = self.geometry.snap(proposed_offset_x);
        log::trace!("snap {proposed_offset_x} -> page {page} at {offset}");
        self.state.current_page = page;
        (offset, page)
    }

    /// Scroll offset that centers `page`.
    pub fn page_to_offset(&self, page: usize) -> CarouselResult<f32> {
        self.geometry.page_to_offset(page)
    }

    /// Scale for a card at `card_center_x`. See [`scale_for_card`].
    pub fn scale_for_card(
        &self,
        card_center_x: f32,
        viewport_center_x: f32,
        viewport_width: f32,
    ) -> CarouselResult<CardScale> {
        scale_for_card(card_center_x, viewport_center_x, viewport_width)
    }

    /// Page closest to the viewport center at `offset_x`, clamped.
    pub fn page_from_offset(&self, offset_x: f32) -> usize {
        self.geometry.page_from_offset(offset_x)
    }

    /// Reconcile the current page with a resting offset.
    ///
    /// Returns the new page only when it differs from the recorded one, so
    /// callers can skip redundant indicator updates.
    pub fn commit_page_from_offset(&mut self, offset_x: f32) -> Option<usize> {
        let page = self.page_from_offset(offset_x);
        if page == self.state.current_page {
            return None;
        }
        log::debug!("page {} -> {}", self.state.current_page, page);
        self.state.current_page = page;
        Some(page)
    }

    /// Resize the viewport, keeping the current page centered.
    pub fn set_viewport_width(&mut self, viewport_width: f32) -> CarouselResult<()> {
        if (viewport_width - self.geometry.viewport_width()).abs() < f32::EPSILON {
            return Ok(());
        }
        self.geometry = self.geometry.with_viewport_width(viewport_width)?;
        let offset = self.geometry.offset_for_index(self.state.current_page);
        match self.state.phase {
            ScrollPhase::Idle => {
                self.state.scroll_offset_x = offset;
                self.state.target_offset_x = offset;
            }
            ScrollPhase::Settling => self.state.target_offset_x = offset,
            ScrollPhase::Dragging => {}
        }
        Ok(())
    }

    /// Touch-down: start following the pointer. Interrupts any settle.
    pub fn begin_drag(&mut self) {
        if self.state.phase == ScrollPhase::Settling {
            log::trace!("settle interrupted at {}", self.state.scroll_offset_x);
        }
        self.state.phase = ScrollPhase::Dragging;
        self.state.target_offset_x = self.state.scroll_offset_x;
    }

    /// Move the content by `dx` points. Positive `dx` drags the content
    /// right, revealing earlier cards. Ignored unless dragging.
    pub fn drag_by(&mut self, dx: f32) {
        if self.state.phase != ScrollPhase::Dragging {
            return;
        }
        self.state.scroll_offset_x -= dx;
        self.state.target_offset_x = self.state.scroll_offset_x;
    }

    /// Touch-up: project the fling, snap, and start settling.
    ///
    /// `velocity` is the scroll velocity in points per second (positive
    /// moves toward later cards). Returns the snap target.
    pub fn end_drag(&mut self, velocity: f32) -> (f32, usize) {
        let proposed = self.state.scroll_offset_x + velocity * FLING_PROJECTION;
        let (offset, page) = self.compute_snap_target(proposed, velocity);
        self.state.target_offset_x = offset;
        self.state.phase = ScrollPhase::Settling;
        (offset, page)
    }

    /// Animate to `page`, as when the page indicator is tapped.
    pub fn select_page(&mut self, page: usize) -> CarouselResult<f32> {
        let offset = self.page_to_offset(page)?;
        log::debug!("select page {page}");
        self.state.current_page = page;
        self.state.target_offset_x = offset;
        self.state.phase = ScrollPhase::Settling;
        Ok(offset)
    }

    /// Move to `page` immediately, without animating.
    pub fn jump_to_page(&mut self, page: usize) -> CarouselResult<()> {
        let offset = self.page_to_offset(page)?;
        self.state = CarouselState::at_rest(page, offset);
        Ok(())
    }

    /// Advance one animation frame while settling.
    ///
    /// On arrival the offset lands exactly on the target, the phase returns
    /// to idle and the page is reconciled. Returns the new page if it changed.
    ///
    /// `easing` is clamped to `(0, 1]`; zero, negative or NaN lands at once.
    pub fn tick(&mut self, easing: f32) -> Option<usize> {
        if self.state.phase != ScrollPhase::Settling {
            return None;
        }
        let easing = if easing > 0.0 { easing.min(1.0) } else { 1.0 };
        let target = self.state.target_offset_x;
        let next = layout::ease_toward(self.state.scroll_offset_x, target, easing);
        if layout::is_animating(next, target) {
            self.state.scroll_offset_x = next;
            return None;
        }
        self.state.scroll_offset_x = target;
        self.state.phase = ScrollPhase::Idle;
        self.commit_page_from_offset(target)
    }

    /// Whether the carousel is still moving on its own.
    pub fn is_settling(&self) -> bool {
        self.state.phase == ScrollPhase::Settling
    }

    /// Indices of cards overlapping the viewport.
    pub fn visible_cards(&self) -> Range<usize> {
        self.geometry.visible_range(self.state.scroll_offset_x)
    }

    /// On-screen center of card `index` at the current offset.
    pub fn card_center_x(&self, index: usize) -> f32 {
        self.geometry.card_center_x(index, self.state.scroll_offset_x)
    }

    /// Scale for every visible card at the current offset.
    pub fn card_scales(&self) -> Vec<(usize, CardScale)> {
        let offset = self.state.scroll_offset_x;
        self.visible_cards()
            .map(|index| (index, self.geometry.card_scale(index, offset)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo() -> CarouselController<u32> {
        CarouselController::new((0..11).collect(), 300.0, 5.0, 375.0).unwrap()
    }

    /// Run `tick` until the carousel comes to rest, returning the last page change.
    fn settle(carousel: &mut CarouselController<u32>) -> Option<usize> {
        let mut changed = None;
        for _ in 0..1000 {
            if !carousel.is_settling() {
                break;
            }
            if let Some(page) = carousel.tick(layout::SCROLL_EASING) {
                changed = Some(page);
            }
        }
        assert!(!carousel.is_settling(), "carousel never came to rest");
        changed
    }

    #[test]
    fn starts_idle_on_first_page() {
        let carousel = demo();
        assert_eq!(carousel.phase(), ScrollPhase::Idle);
        assert_eq!(carousel.current_page(), 0);
        assert_eq!(carousel.scroll_offset_x(), -37.5);
        assert_eq!(carousel.len(), 11);
    }

    #[test]
    fn rejects_invalid_geometry() {
        let result = CarouselController::new(vec![1, 2, 3], 300.0, 5.0, 0.0);
        assert!(matches!(result, Err(CarouselError::InvalidGeometry(_))));
        let result = CarouselController::new(vec![1, 2, 3], -5.0, 5.0, 375.0);
        assert!(matches!(result, Err(CarouselError::InvalidGeometry(_))));
    }

    #[test]
    fn page_to_offset_scenario() {
        let carousel = demo();
        assert_eq!(carousel.page_to_offset(0), Ok(-37.5));
        assert_eq!(carousel.page_to_offset(5), Ok(1487.5));
        assert_eq!(
            carousel.page_to_offset(11),
            Err(CarouselError::OutOfRange { page: 11, count: 11 })
        );
    }

    #[test]
    fn page_round_trip() {
        let carousel = demo();
        for page in 0..carousel.len() {
            let offset = carousel.page_to_offset(page).unwrap();
            assert_eq!(carousel.page_from_offset(offset), page);
        }
    }

    #[test]
    fn page_from_offset_clamps() {
        let carousel = demo();
        let pitch = carousel.geometry().pitch();
        let inset = carousel.geometry().leading_inset();
        assert_eq!(carousel.page_from_offset(-3.0 * pitch - inset), 0);
        assert_eq!(carousel.page_from_offset(16.0 * pitch - inset), 10);
    }

    #[test]
    fn snap_target_updates_current_page() {
        let mut carousel = demo();
        let (offset, page) = carousel.compute_snap_target(1400.0, 0.0);
        assert_eq!(page, 5);
        assert_eq!(offset, 1487.5);
        assert_eq!(carousel.current_page(), 5);
    }

    #[test]
    fn snap_target_ignores_velocity() {
        let mut carousel = demo();
        let slow = carousel.compute_snap_target(700.0, 0.0);
        let fast = carousel.compute_snap_target(700.0, 5000.0);
        assert_eq!(slow, fast);
    }

    #[test]
    fn snap_target_is_always_a_page_offset() {
        let mut carousel = demo();
        let mut proposed = -1500.0;
        while proposed < 5000.0 {
            let (offset, page) = carousel.compute_snap_target(proposed, 0.0);
            assert_eq!(carousel.page_to_offset(page), Ok(offset));
            proposed += 31.0;
        }
    }

    #[test]
    fn snap_target_clamps_overshoot() {
        let mut carousel = demo();
        assert_eq!(carousel.compute_snap_target(-10_000.0, 0.0), (-37.5, 0));
        let last = carousel.page_to_offset(10).unwrap();
        assert_eq!(carousel.compute_snap_target(99_999.0, 0.0), (last, 10));
    }

    #[test]
    fn commit_only_reports_changes() {
        let mut carousel = demo();
        let offset = carousel.page_to_offset(0).unwrap();
        assert_eq!(carousel.commit_page_from_offset(offset), None);
        let offset = carousel.page_to_offset(3).unwrap();
        assert_eq!(carousel.commit_page_from_offset(offset), Some(3));
        assert_eq!(carousel.commit_page_from_offset(offset), None);
        assert_eq!(carousel.current_page(), 3);
    }

    #[test]
    fn drag_then_release_settles_on_nearest_page() {
        let mut carousel = demo();
        carousel.begin_drag();
        assert_eq!(carousel.phase(), ScrollPhase::Dragging);

        // Drag left by 200 points: 65% of the way to page 1
        carousel.drag_by(-200.0);
        assert_eq!(carousel.scroll_offset_x(), 162.5);
        assert_eq!(carousel.current_page(), 0);

        let (offset, page) = carousel.end_drag(0.0);
        assert_eq!(page, 1);
        assert_eq!(offset, 267.5);
        assert_eq!(carousel.phase(), ScrollPhase::Settling);

        settle(&mut carousel);
        assert_eq!(carousel.phase(), ScrollPhase::Idle);
        assert_eq!(carousel.scroll_offset_x(), 267.5);
        assert_eq!(carousel.current_page(), 1);
    }

    #[test]
    fn fling_projects_past_nearest_page() {
        let mut carousel = demo();
        carousel.begin_drag();
        carousel.drag_by(-100.0);
        // A third of the way to page 1; a 2000 pt/s fling carries ~198 points more
        let (_, page) = carousel.end_drag(2000.0);
        assert_eq!(page, 1);
    }

    #[test]
    fn drag_is_ignored_when_not_dragging() {
        let mut carousel = demo();
        carousel.drag_by(-500.0);
        assert_eq!(carousel.scroll_offset_x(), -37.5);
    }

    #[test]
    fn new_drag_interrupts_settle() {
        let mut carousel = demo();
        carousel.select_page(4).unwrap();
        carousel.tick(layout::SCROLL_EASING);
        let mid_flight = carousel.scroll_offset_x();
        assert!(carousel.is_settling());

        carousel.begin_drag();
        assert_eq!(carousel.phase(), ScrollPhase::Dragging);
        assert_eq!(carousel.scroll_offset_x(), mid_flight);
        assert_eq!(carousel.tick(layout::SCROLL_EASING), None);
        assert_eq!(carousel.scroll_offset_x(), mid_flight);

        // Released mid-flight, the snap is recomputed from where it stopped
        let (offset, page) = carousel.end_drag(0.0);
        assert_eq!(page, carousel.page_from_offset(mid_flight));
        assert_eq!(carousel.page_to_offset(page), Ok(offset));
    }

    #[test]
    fn select_page_goes_straight_to_settling() {
        let mut carousel = demo();
        assert_eq!(carousel.select_page(5), Ok(1487.5));
        assert_eq!(carousel.phase(), ScrollPhase::Settling);
        assert_eq!(carousel.current_page(), 5);

        // Page was already recorded, so arrival reports no change
        assert_eq!(settle(&mut carousel), None);
        assert_eq!(carousel.scroll_offset_x(), 1487.5);
        assert!(carousel.state().is_idle());
    }

    #[test]
    fn select_page_out_of_range_leaves_state_alone() {
        let mut carousel = demo();
        let before = carousel.state().clone();
        assert_eq!(
            carousel.select_page(11),
            Err(CarouselError::OutOfRange { page: 11, count: 11 })
        );
        assert_eq!(carousel.state(), &before);
    }

    #[test]
    fn tick_commits_page_on_arrival() {
        let mut carousel = demo();
        carousel.begin_drag();
        carousel.drag_by(-610.0);
        carousel.end_drag(0.0);
        // Pretend the indicator was out of sync while the surface animated
        carousel.state.current_page = 0;
        assert_eq!(settle(&mut carousel), Some(2));
        assert_eq!(carousel.current_page(), 2);
    }

    #[test]
    fn tick_is_noop_when_idle() {
        let mut carousel = demo();
        assert_eq!(carousel.tick(layout::SCROLL_EASING), None);
        assert_eq!(carousel.scroll_offset_x(), -37.5);
    }

    #[test]
    fn jump_to_page_is_immediate() {
        let mut carousel = demo();
        carousel.jump_to_page(7).unwrap();
        assert!(carousel.state().is_idle());
        assert_eq!(carousel.current_page(), 7);
        assert_eq!(carousel.scroll_offset_x(), carousel.page_to_offset(7).unwrap());
        assert!(carousel.jump_to_page(20).is_err());
    }

    #[test]
    fn resize_keeps_current_page_centered() {
        let mut carousel = demo();
        carousel.jump_to_page(3).unwrap();
        carousel.set_viewport_width(415.0).unwrap();
        assert_eq!(carousel.geometry().leading_inset(), 57.5);
        assert_eq!(carousel.scroll_offset_x(), 3.0 * 305.0 - 57.5);
        assert_eq!(carousel.current_page(), 3);
    }

    #[test]
    fn resize_while_settling_retargets_current_page() {
        let mut carousel = demo();
        carousel.select_page(3).unwrap();
        carousel.tick(layout::SCROLL_EASING);
        assert!(carousel.is_settling());

        carousel.set_viewport_width(415.0).unwrap();
        assert!(carousel.is_settling());
        assert_eq!(carousel.state().target_offset_x, 857.5);

        assert_eq!(settle(&mut carousel), None);
        assert_eq!(carousel.current_page(), 3);
        assert_eq!(carousel.scroll_offset_x(), carousel.page_to_offset(3).unwrap());
        assert_eq!(carousel.scroll_offset_x(), 3.0 * 305.0 - 57.5);
    }

    #[test]
    fn resize_after_release_settles_under_new_inset() {
        let mut carousel = demo();
        carousel.begin_drag();
        carousel.drag_by(-610.0);
        carousel.end_drag(0.0);
        carousel.set_viewport_width(415.0).unwrap();

        settle(&mut carousel);
        assert_eq!(carousel.current_page(), 2);
        assert_eq!(carousel.scroll_offset_x(), 2.0 * 305.0 - 57.5);
    }

    #[test]
    fn resize_while_dragging_leaves_offset_under_pointer() {
        let mut carousel = demo();
        carousel.begin_drag();
        carousel.drag_by(-200.0);
        assert_eq!(carousel.scroll_offset_x(), 162.5);

        carousel.set_viewport_width(415.0).unwrap();
        assert_eq!(carousel.phase(), ScrollPhase::Dragging);
        assert_eq!(carousel.scroll_offset_x(), 162.5);

        // (162.5 + 57.5) / 305 rounds to page 1 under the wider inset
        let (offset, page) = carousel.end_drag(0.0);
        assert_eq!(page, 1);
        assert_eq!(offset, 305.0 - 57.5);
        settle(&mut carousel);
        assert_eq!(carousel.scroll_offset_x(), 247.5);
    }

    #[test]
    fn tick_clamps_easing() {
        for easing in [0.0, -1.0, f32::NAN, 5.0] {
            let mut carousel = demo();
            carousel.select_page(4).unwrap();
            carousel.tick(easing);
            assert!(carousel.state().is_idle(), "easing {easing} did not land");
            assert_eq!(carousel.scroll_offset_x(), carousel.page_to_offset(4).unwrap());
        }
    }

    #[test]
    fn resize_rejects_bad_width() {
        let mut carousel = demo();
        assert!(matches!(
            carousel.set_viewport_width(0.0),
            Err(CarouselError::InvalidGeometry(_))
        ));
        assert_eq!(carousel.geometry().viewport_width(), 375.0);
    }

    #[test]
    fn centered_card_scales() {
        let carousel = demo();
        let scales = carousel.card_scales();
        let indices: Vec<usize> = scales.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 1]);

        let (_, centered) = scales[0];
        assert!((centered.width - 1.1).abs() < 0.001);
        assert!((centered.height - 1.0).abs() < 0.001);

        // Neighbour center is 305 points away, well past half the viewport
        let (_, neighbour) = scales[1];
        assert!((neighbour.height - MIN_SCALE).abs() < 0.001);
    }

    #[test]
    fn scale_for_card_scenarios() {
        let carousel = demo();
        let centered = carousel.scale_for_card(187.5, 187.5, 375.0).unwrap();
        assert!((centered.width - 1.1).abs() < 0.001);
        assert!((centered.height - 1.0).abs() < 0.001);

        let edge = carousel.scale_for_card(0.0, 187.5, 375.0).unwrap();
        assert!((edge.width - 0.9).abs() < 0.001);
        assert!((edge.height - 0.8).abs() < 0.001);

        assert!(matches!(
            carousel.scale_for_card(0.0, 187.5, 0.0),
            Err(CarouselError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn card_center_tracks_scroll() {
        let mut carousel = demo();
        assert_eq!(carousel.card_center_x(0), 187.5);
        carousel.begin_drag();
        carousel.drag_by(-50.0);
        assert_eq!(carousel.card_center_x(0), 137.5);
        assert_eq!(carousel.card_center_x(1), 442.5);
    }

    #[test]
    fn empty_carousel_clamps_to_zero() {
        let mut carousel: CarouselController<u32> =
            CarouselController::new(Vec::new(), 300.0, 5.0, 375.0).unwrap();
        assert!(carousel.is_empty());
        assert_eq!(carousel.page_from_offset(1000.0), 0);
        assert_eq!(
            carousel.page_to_offset(0),
            Err(CarouselError::OutOfRange { page: 0, count: 0 })
        );
        assert_eq!(carousel.compute_snap_target(500.0, 0.0), (-37.5, 0));
        assert!(carousel.visible_cards().is_empty());
    }
}
