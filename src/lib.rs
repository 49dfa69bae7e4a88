//! Horizontally scrolling carousel that snaps to a centered card.
//!
//! [`CarouselController`] holds the scroll-snapping and scaling math with no
//! dependency on a rendering surface. The `carousel` binary wraps it in an
//! egui demo.

pub mod controller;
pub mod palette;
pub mod util;

pub use controller::{
    scale_for_card, CardScale, CarouselController, CarouselError, CarouselGeometry,
    CarouselResult, CarouselState, ScrollPhase,
};
