// web_app/behavior/carousel.rs - Banner slide index

use std::num::NonZeroUsize;
use std::time::Duration;

/// Interval between automatic slide advances
pub const AUTOPLAY_PERIOD: Duration = Duration::from_millis(5000);

/// Zero-based index into a fixed, non-empty list of slides.
///
/// The index is always valid: every transition wraps modulo the slide count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    current: usize,
    len: NonZeroUsize,
}

impl Carousel {
    pub fn new(len: NonZeroUsize) -> Self {
        Self { current: 0, len }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.len();
    }

    pub fn previous(&mut self) {
        self.current = (self.current + self.len() - 1) % self.len();
    }

    /// Timer tick; same transition as `next`
    pub fn advance(&mut self) {
        self.next();
    }

    /// Jump straight to slide `index`. Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len() {
            self.current = index;
        } else {
            tracing::warn!(index, len = self.len(), "ignoring out-of-range slide index");
        }
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == index
    }

    /// Horizontal offset of the slide strip, in percent of the viewport width
    pub fn offset_percent(&self) -> i64 {
        -(self.current as i64 * 100)
    }

    pub fn transform(&self) -> String {
        format!("translateX({}%)", self.offset_percent())
    }
}
