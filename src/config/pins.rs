//! Logical line map of the controller board's IO expander.

use heapless::Vec;
use serde::Deserialize;

/// Number of logical lines on the expander, spares included.
pub const LINE_COUNT: usize = 16;

/// Expander pin offsets for each logical line.
///
/// Addresses are `base + offset`, matching how expander pins are numbered
/// after the chip is registered with the host GPIO layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PinMap {
    /// First logical address of the expander.
    pub base: u16,
    /// Supply-side stepper EN.
    pub m1_enable: u8,
    /// Supply-side stepper STEP.
    pub m1_step: u8,
    /// Supply-side stepper DIR.
    pub m1_dir: u8,
    /// Take-up-side stepper DIR.
    pub m2_dir: u8,
    /// Take-up-side stepper STEP.
    pub m2_step: u8,
    /// Take-up-side stepper EN.
    pub m2_enable: u8,
    /// Supply reel motor.
    pub reel1: u8,
    /// Take-up reel motor.
    pub reel2: u8,
    /// Lamp.
    pub led: u8,
    /// Camera shutter opto-coupler.
    pub shutter: u8,
    /// Camera focus/wake opto-coupler.
    pub focus: u8,
    /// Spare lines, broken out on the board header. Nothing here drives them.
    pub gpio1: u8,
    /// Spare line 2.
    pub gpio2: u8,
    /// Spare line 3.
    pub gpio3: u8,
    /// Spare line 4.
    pub gpio4: u8,
    /// Spare line 5.
    pub gpio5: u8,
}

impl Default for PinMap {
    fn default() -> Self {
        Self {
            base: 100,
            m1_enable: 0,
            m1_step: 1,
            m1_dir: 2,
            m2_dir: 3,
            m2_step: 4,
            m2_enable: 5,
            reel1: 6,
            reel2: 7,
            led: 8,
            shutter: 9,
            focus: 10,
            gpio1: 11,
            gpio2: 12,
            gpio3: 13,
            gpio4: 14,
            gpio5: 15,
        }
    }
}

impl PinMap {
    /// All lines as `(name, offset)` pairs, in board order.
    pub fn lines(&self) -> Vec<(&'static str, u8), LINE_COUNT> {
        let mut lines = Vec::new();
        for entry in [
            ("m1.enable", self.m1_enable),
            ("m1.step", self.m1_step),
            ("m1.dir", self.m1_dir),
            ("m2.dir", self.m2_dir),
            ("m2.step", self.m2_step),
            ("m2.enable", self.m2_enable),
            ("reel1", self.reel1),
            ("reel2", self.reel2),
            ("led", self.led),
            ("shutter", self.shutter),
            ("focus", self.focus),
            ("gpio1", self.gpio1),
            ("gpio2", self.gpio2),
            ("gpio3", self.gpio3),
            ("gpio4", self.gpio4),
            ("gpio5", self.gpio5),
        ] {
            // Capacity equals the array length.
            let _ = lines.push(entry);
        }
        lines
    }

    /// Absolute address of a line offset.
    #[inline]
    pub fn address(&self, offset: u8) -> u16 {
        self.base + offset as u16
    }

    /// Absolute address of a line by name.
    pub fn address_of(&self, name: &str) -> Option<u16> {
        self.lines()
            .iter()
            .find(|(line, _)| *line == name)
            .map(|(_, offset)| self.address(*offset))
    }
}
