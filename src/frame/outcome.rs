//! Result of a centering run.

/// How a bounded centering run ended.
///
/// Neither variant is an error. Motion already made is never undone; a caller
/// that needs a centred frame can retry at a higher level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CentreOutcome {
    /// Perforation inside the dead zone after this many detections.
    Centered(u8),
    /// Attempts ran out with the perforation still outside the dead zone.
    Incomplete(u8),
}

impl CentreOutcome {
    /// Whether the frame ended up centred.
    #[inline]
    pub fn is_centered(self) -> bool {
        matches!(self, CentreOutcome::Centered(_))
    }

    /// Detection calls made.
    #[inline]
    pub fn attempts(self) -> u8 {
        match self {
            CentreOutcome::Centered(n) | CentreOutcome::Incomplete(n) => n,
        }
    }
}
