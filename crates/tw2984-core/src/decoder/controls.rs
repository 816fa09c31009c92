//! Image-adjustment controls and their register mapping.
//!
//! Controls are addressed externally by numeric identifier (the V4L2 user
//! control IDs), so hosts can pass framework CIDs straight through. Each
//! control maps to one or two channel-1 registers; saturation is ganged
//! across the U and V chroma gains.

use super::registers;

/// External control identifiers (V4L2 user-class CIDs).
pub mod cid {
    pub const BRIGHTNESS: u32 = 0x0098_0900;
    pub const CONTRAST: u32 = 0x0098_0901;
    pub const SATURATION: u32 = 0x0098_0902;
    pub const HUE: u32 = 0x0098_0903;
}

/// The image-adjustment controls the decoder supports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Brightness,
    Contrast,
    Saturation,
    Hue,
}

/// Legal value range and power-on default of one control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlRange {
    pub min: i32,
    pub max: i32,
    pub default: i32,
}

impl Control {
    /// All supported controls, for host-side control registration.
    pub const ALL: [Control; 4] =
        [Control::Brightness, Control::Contrast, Control::Saturation, Control::Hue];

    /// Resolve an external control identifier, or `None` if the decoder
    /// does not implement it.
    pub fn from_cid(id: u32) -> Option<Control> {
        match id {
            cid::BRIGHTNESS => Some(Control::Brightness),
            cid::CONTRAST => Some(Control::Contrast),
            cid::SATURATION => Some(Control::Saturation),
            cid::HUE => Some(Control::Hue),
            _ => None,
        }
    }

    /// The external identifier of this control.
    pub fn cid(self) -> u32 {
        match self {
            Control::Brightness => cid::BRIGHTNESS,
            Control::Contrast => cid::CONTRAST,
            Control::Saturation => cid::SATURATION,
            Control::Hue => cid::HUE,
        }
    }

    /// Value range and default. Callers clamp requested values to this
    /// range before handing them to the driver; the driver writes the value
    /// as given.
    pub fn range(self) -> ControlRange {
        match self {
            Control::Brightness => ControlRange { min: -128, max: 128, default: 0x00 },
            Control::Contrast => ControlRange { min: 0, max: 255, default: 0x64 },
            Control::Saturation => ControlRange { min: 0, max: 255, default: 0x80 },
            Control::Hue => ControlRange { min: -128, max: 128, default: 0x00 },
        }
    }

    /// Target registers, in write order. Saturation writes the identical
    /// value to both chroma gains, U before V.
    pub fn registers(self) -> &'static [u8] {
        match self {
            Control::Brightness => &[registers::BRIGHT1],
            Control::Contrast => &[registers::CONTRAST1],
            Control::Saturation => &[registers::SAT_U1, registers::SAT_V1],
            Control::Hue => &[registers::HUE1],
        }
    }
}
