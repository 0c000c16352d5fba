//! Frame resolutions.

use std::fmt;

/// The size of a video frame, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    width: u32,
    height: u32,
}

impl Resolution {
    /// Creates a new [`Resolution`].
    ///
    /// # Panics
    ///
    /// This method panics when `width` or `height` are zero.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width != 0 && height != 0,
            "attempted to create a resolution with 0 width or height"
        );
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
