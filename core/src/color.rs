use core::fmt;
use rand::Rng;

use crate::*;

/// Tile background color in HSL space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const HUE: core::ops::Range<u16> = 0..360;
    pub const SATURATION: core::ops::Range<u8> = 70..90;
    pub const LIGHTNESS: core::ops::Range<u8> = 50..65;

    /// Bright, saturated color so the black label stays readable.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self {
            hue: rng.random_range(Self::HUE),
            saturation: rng.random_range(Self::SATURATION),
            lightness: rng.random_range(Self::LIGHTNESS),
        }
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({} {}% {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
