//! Sprocket-hole detection results and the detector seam.

/// Where the perforation sits in the detection region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PerforationResult {
    /// A perforation was found in the region of interest.
    pub found: bool,

    /// Pixels from the region centre to the perforation centre.
    ///
    /// Positive means the film is ahead of centre. Meaningless when
    /// `found` is false.
    pub y_offset: i32,
}

impl PerforationResult {
    /// A perforation at `y_offset`.
    #[inline]
    pub const fn found(y_offset: i32) -> Self {
        Self {
            found: true,
            y_offset,
        }
    }

    /// No usable perforation.
    #[inline]
    pub const fn missing() -> Self {
        Self {
            found: false,
            y_offset: 0,
        }
    }

    /// Offset if a perforation was found.
    #[inline]
    pub fn offset(&self) -> Option<i32> {
        self.found.then_some(self.y_offset)
    }
}

/// Captures a frame and locates its perforation.
///
/// A failed capture reports `PerforationResult::missing()`; the centering
/// loop treats that as "nothing in view" and probes forward.
pub trait PerforationDetector {
    /// Capture and analyse one image.
    fn detect(&mut self) -> PerforationResult;
}

impl<F> PerforationDetector for F
where
    F: FnMut() -> PerforationResult,
{
    fn detect(&mut self) -> PerforationResult {
        self()
    }
}
