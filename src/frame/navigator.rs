//! Frame stepping and centering.

use crate::actuator::Actuator;
use crate::config::{validate_centering, CenteringConfig, FrameTransportConfig};
use crate::error::Result;
use crate::motion::{Direction, MotionController};
use crate::motor::Stepper;

use super::outcome::CentreOutcome;
use super::perforation::{PerforationDetector, PerforationResult};

/// Moves film a frame at a time and keeps the perforation centred.
///
/// Borrows the rig's single `MotionController` for as long as it lives, so
/// frame-level and step-level moves can never interleave.
pub struct FrameNavigator<'a, S, R, L, D>
where
    S: Stepper,
    R: Actuator,
    L: Actuator,
    D: PerforationDetector,
{
    transport: &'a mut MotionController<S, R, L>,
    detector: D,
    frame: FrameTransportConfig,
    centering: CenteringConfig,
    /// Detection from the most recent capture.
    last: PerforationResult,
}

impl<'a, S, R, L, D> FrameNavigator<'a, S, R, L, D>
where
    S: Stepper,
    R: Actuator,
    L: Actuator,
    D: PerforationDetector,
{
    /// Create a navigator with no capture recorded yet.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ZeroThreshold` if `max_attempts` or
    /// `probe_divisor` is zero.
    pub fn new(
        transport: &'a mut MotionController<S, R, L>,
        detector: D,
        frame: FrameTransportConfig,
        centering: CenteringConfig,
    ) -> Result<Self> {
        validate_centering(&centering)?;

        Ok(Self {
            transport,
            detector,
            frame,
            centering,
            last: PerforationResult::missing(),
        })
    }

    /// The transport, for moves that are not frame-relative.
    #[inline]
    pub fn transport(&mut self) -> &mut MotionController<S, R, L> {
        &mut *self.transport
    }

    /// Frame pitch in use.
    #[inline]
    pub fn frame_config(&self) -> &FrameTransportConfig {
        &self.frame
    }

    /// Replace the frame pitch, e.g. after recalibration.
    pub fn set_frame_config(&mut self, frame: FrameTransportConfig) {
        self.frame = frame;
    }

    /// Detection from the most recent capture.
    #[inline]
    pub fn last_perforation(&self) -> PerforationResult {
        self.last
    }

    /// Record a detection made outside the navigator.
    pub fn set_last_perforation(&mut self, result: PerforationResult) {
        self.last = result;
    }

    /// Capture, detect, and remember the result.
    pub fn observe(&mut self) -> PerforationResult {
        self.last = self.detector.detect();
        self.last
    }

    /// Forward steps `advance_frame` would command right now.
    pub fn advance_steps(&self) -> u32 {
        self.corrected(self.frame.steps_per_frame_forward, 1)
    }

    /// Backward steps `retreat_frame` would command right now.
    pub fn retreat_steps(&self) -> u32 {
        self.corrected(self.frame.steps_per_frame_back, -1)
    }

    /// Frame pitch plus (`sign` = 1) or minus (`sign` = -1) the drift seen
    /// in the last capture, floored at zero.
    fn corrected(&self, base: u32, sign: i64) -> u32 {
        let correction = match self.last.offset() {
            Some(y) => self.frame.pixels_per_step.steps_for(y) as i64,
            None => 0,
        };
        let steps = base as i64 + sign * correction;
        steps.clamp(0, u32::MAX as i64) as u32
    }

    /// Move forward one frame, compensating the drift seen in the last
    /// capture. Returns the steps commanded.
    pub fn advance_frame(&mut self) -> Result<u32> {
        let steps = self.advance_steps();
        info!("moving {} steps forward", steps);
        self.transport.steps_forward(steps)?;
        Ok(steps)
    }

    /// Move back one frame. Travel is reversed, so the drift correction is
    /// subtracted. Returns the steps commanded.
    pub fn retreat_frame(&mut self) -> Result<u32> {
        let steps = self.retreat_steps();
        info!("moving {} steps back", steps);
        self.transport.steps_back(steps)?;
        Ok(steps)
    }

    /// Nudge the film until the perforation sits inside the dead zone.
    ///
    /// Makes at most `max_attempts` detections. With nothing in view it
    /// probes forward by a fraction of a frame to bring a perforation into
    /// the detection region. Running out of attempts is reported, not raised.
    pub fn centre_frame(&mut self) -> Result<CentreOutcome> {
        info!("centering");
        let dead_zone = self.centering.dead_zone_px as i64;
        let ratio = self.frame.pixels_per_step;

        for attempt in 1..=self.centering.max_attempts {
            let result = self.observe();
            match result.offset() {
                Some(y) if (y as i64) > dead_zone => {
                    self.transport.steps_forward(ratio.steps_for_magnitude(y))?;
                }
                Some(y) if (y as i64) < -dead_zone => {
                    self.transport.steps_back(ratio.steps_for_magnitude(y))?;
                }
                Some(_) => {
                    debug!("centred after {} attempts", attempt);
                    return Ok(CentreOutcome::Centered(attempt));
                }
                None => {
                    let probe = self.frame.steps_per_frame_forward / self.centering.probe_divisor;
                    self.transport.steps_forward(probe)?;
                }
            }
        }

        warn!("not centred after {} attempts", self.centering.max_attempts);
        Ok(CentreOutcome::Incomplete(self.centering.max_attempts))
    }

    /// Wind `frame_count` frames in one bulk move, then centre once.
    pub fn fast_wind(&mut self, frame_count: u32, direction: Direction) -> Result<CentreOutcome> {
        let per_frame = match direction {
            Direction::Forward => self.frame.steps_per_frame_forward,
            Direction::Backward => self.frame.steps_per_frame_back,
        };
        let steps = per_frame.saturating_mul(frame_count);
        info!("fast wind {} frames ({} steps)", frame_count, steps);
        self.transport.steps(direction, steps)?;
        self.centre_frame()
    }
}
