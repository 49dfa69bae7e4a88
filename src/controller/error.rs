/// Result type for carousel operations
pub type CarouselResult<T> = Result<T, CarouselError>;

/// Contract violations reported by the carousel controller.
///
/// Both variants indicate a caller bug rather than a runtime condition.
/// Scroll overshoot is never an error: snapping and page lookup clamp.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CarouselError {
    #[error("page {page} is out of range for a carousel of {count} items")]
    OutOfRange { page: usize, count: usize },

    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}
