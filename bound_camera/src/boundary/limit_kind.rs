/// LimitKind — which side(s) of the camera area a limit constrains.
///
/// TOP/BOTTOM share the vertical bit pair and LEFT/RIGHT the horizontal
/// one, so a corner kind answers true to both axis checks. Opposite
/// directions on the same axis never combine.

use bitflags::bitflags;
use crate::error::Result;
use crate::engine_bail;

bitflags! {
    /// Direction(s) a limit constrains.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LimitKind: u8 {
        /// Caps the top edge (reduces `max.y`)
        const TOP = 0x01;
        /// Floors the bottom edge (raises `min.y`)
        const BOTTOM = 0x02;
        /// Floors the left edge (raises `min.x`)
        const LEFT = 0x04;
        /// Caps the right edge (reduces `max.x`)
        const RIGHT = 0x08;

        const TOP_LEFT = Self::TOP.bits() | Self::LEFT.bits();
        const TOP_RIGHT = Self::TOP.bits() | Self::RIGHT.bits();
        const BOTTOM_LEFT = Self::BOTTOM.bits() | Self::LEFT.bits();
        const BOTTOM_RIGHT = Self::BOTTOM.bits() | Self::RIGHT.bits();
    }
}

impl LimitKind {
    /// Constrains nothing. Valid, contributes to no reduction.
    pub const NONE: Self = Self::empty();

    /// Whether the kind touches the vertical axis (TOP or BOTTOM).
    pub fn is_vertical(self) -> bool {
        self.intersects(Self::TOP | Self::BOTTOM)
    }

    /// Whether the kind touches the horizontal axis (LEFT or RIGHT).
    pub fn is_horizontal(self) -> bool {
        self.intersects(Self::LEFT | Self::RIGHT)
    }

    /// Whether the kind is one of the four corners.
    pub fn is_corner(self) -> bool {
        self.is_vertical() && self.is_horizontal()
    }

    /// False for TOP+BOTTOM or LEFT+RIGHT combinations.
    pub fn is_valid(self) -> bool {
        !self.contains(Self::TOP | Self::BOTTOM) && !self.contains(Self::LEFT | Self::RIGHT)
    }

    /// Reject kinds combining opposite directions.
    pub fn validate(self) -> Result<Self> {
        if !self.is_valid() {
            engine_bail!("boundcam::LimitKind", InvalidLimitKind,
                "{:?} combines opposite directions", self);
        }
        Ok(self)
    }
}

impl Default for LimitKind {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
#[path = "limit_kind_tests.rs"]
mod tests;
