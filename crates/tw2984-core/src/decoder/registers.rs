//! TW2984 register addresses and bit-field constants.
//!
//! The chip decodes four analog inputs; this driver configures channel 1
//! only, so the per-channel registers below are the channel-1 instances
//! (suffix `1`). Addresses are 8-bit; 0xFF is the read-only chip-ID
//! register and is never a write target.

/// Video status, channel 1.
pub const VIDSTAT1: u8 = 0x00;
/// Brightness, channel 1. Signed, two's complement.
pub const BRIGHT1: u8 = 0x01;
/// Contrast, channel 1.
pub const CONTRAST1: u8 = 0x02;
/// Sharpness, channel 1 (low nibble).
pub const SHARPNESS1: u8 = 0x03;
/// Chroma U gain, channel 1. Written in lockstep with [`SAT_V1`] for
/// saturation adjustment.
pub const SAT_U1: u8 = 0x04;
/// Chroma V gain, channel 1.
pub const SAT_V1: u8 = 0x05;
/// Hue, channel 1. Signed, two's complement.
pub const HUE1: u8 = 0x06;
/// Cropping high bits, channel 1.
pub const CROP_HI1: u8 = 0x07;
/// Vertical delay low byte, channel 1.
pub const VDELAY_LO1: u8 = 0x08;
/// Vertical active low byte, channel 1.
pub const VACTIVE_LO1: u8 = 0x09;
/// Horizontal delay low byte, channel 1.
pub const HDELAY_LO1: u8 = 0x0a;
/// Horizontal active low byte, channel 1.
pub const HACTIVE_LO1: u8 = 0x0b;
/// Standard selection, channel 1.
pub const SDT1: u8 = 0x0e;
/// Standard recognition, channel 1.
pub const SDTR1: u8 = 0x0f;

/// Video clock frequency select.
pub const VDFREQ: u8 = 0x50;
/// Horizontal sync control.
pub const HASYNC: u8 = 0x56;
/// Horizontal blanking length, channel 1.
pub const HBLEN1: u8 = 0x57;
/// 36 MHz output select.
pub const O36M: u8 = 0x62;
/// Miscellaneous video control.
pub const VMISC: u8 = 0xf9;
/// Clock output control. See the `CLKOCTL_*` bit masks.
pub const CLKOCTL: u8 = 0xfa;
/// Chip identification. Read-only.
pub const CHIP_ID: u8 = 0xff;

/// CLKOCTL: master output enable.
pub const CLKOCTL_OE: u8 = 1 << 6;
/// CLKOCTL: negative-edge clock output disable (active high).
pub const CLKOCTL_CLKNO_OEB: u8 = 1 << 5;
/// CLKOCTL: positive-edge clock output disable (active high).
pub const CLKOCTL_CLKPO_OEB: u8 = 1 << 4;

/// SHARPNESS1: sharpness level mask.
pub const SHARP_MASK: u8 = 0xf;
