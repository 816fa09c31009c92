//! Constant register tables: the full baseline configuration plus the
//! per-mode delta tables.
//!
//! A table is an ordered sequence of register writes. Order is significant:
//! later entries may rely on earlier ones (e.g. the two ID_DET writes), so
//! tables are applied entry-by-entry, never reordered. The chip's datasheet
//! convention of terminating tables with the 0xFF chip-ID address is not
//! carried over; slice length bounds each table instead.
//!
//! Mode tables are deltas: they cover only the registers that differ from
//! [`BASELINE`], and assume the baseline has already been applied.

/// A single register write: one 8-bit value to one 8-bit address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    pub addr: u8,
    pub value: u8,
}

const fn w(addr: u8, value: u8) -> RegWrite {
    RegWrite { addr, value }
}

/// Complete power-on configuration. Leaves the chip decoding NTSC D1 on
/// channel 1 with clock/data outputs still gated off (CLKOCTL 0x30 keeps
/// both OEB bits set); output is enabled separately after activation.
pub const BASELINE: &[RegWrite] = &[
    w(0x01, 0x00), // BRIGHT
    w(0x02, 0x64), // CONTRAST
    w(0x03, 0x11), // SHARPNESS
    w(0x04, 0x80), // U_GAIN
    w(0x05, 0x80), // V_GAIN
    w(0x06, 0x00), // HUE
    w(0x07, 0x12), // CROP_H
    w(0x08, 0x11), // VDELAY_L
    w(0x09, 0xe8), // VACTIVE_L
    w(0x0a, 0x0a), // HDELAY_L
    w(0x0b, 0xd0), // HACTIVE_L
    w(0x0e, 0x07), // STD_SEL
    w(0x0f, 0x01), // STD_RCG
    w(0x56, 0x10), // HASYNC
    w(0x57, 0x8a), // HBLEN
    w(0x68, 0x00), // HZOOM_H
    w(0x69, 0x00), // HZOOM_L
    w(0xa0, 0x08), // NT50
    w(0xa4, 0x00), // ID_DET
    w(0xa4, 0x1a), // ID_DET
    w(0xaa, 0xe0), // VAGC
    w(0xab, 0xf0), // VAGC_GAIN
    w(0x50, 0x00), // VCLOCK
    w(0x51, 0x00), // FBIT_INV
    w(0x55, 0x00), // AAFILT
    w(0x5b, 0x00), // CLKOUT
    w(0x5c, 0x00), // BGCTL
    w(0x96, 0xe2), // MISC2
    w(0x60, 0x26), // PLLCTRL
    w(0x61, 0x0f), // VCLKSEL
    w(0x62, 0x00), // O36M
    w(0x63, 0x10), // CHNID12
    w(0x64, 0x32), // CHNID34
    w(0x65, 0x00), // VBUS
    w(0x67, 0x80), // HZOOMCNT
    w(0x6d, 0x28), // D1NMGAIN
    w(0x6e, 0x38), // CLAMPPOS
    w(0x81, 0x02), // ANACTRL1
    w(0x82, 0x07), // ANACTRL2
    w(0x83, 0x4c), // CTRL1
    w(0x84, 0x00), // CKHY
    w(0x85, 0x30), // VSHARP
    w(0x86, 0x44), // VCORE
    w(0x87, 0x50), // CLAMPADJ
    w(0x88, 0x42), // STANDAGC
    w(0x8a, 0xd8), // PEAKWHT
    w(0x8b, 0xbc), // CLAMPLEVEL
    w(0x8c, 0xb8), // SYNCLEVEL
    w(0x8d, 0x44), // SYNCMISS
    w(0x8e, 0x36), // WD1CLAMP
    w(0x8f, 0x00), // VCTRL1
    w(0x90, 0x00), // VCTRL2
    w(0x91, 0x78), // COLKIL
    w(0x92, 0x44), // COMFIL
    w(0x93, 0x30), // YDELAY
    w(0x94, 0x14), // MISC1
    w(0x95, 0x65), // LOOPCTRL
    w(0x97, 0x09), // CLAMPMODE
    w(0x9c, 0x20), // FLDDELY
    w(0x9e, 0x43), // NOVID
    w(0x9f, 0x00), // CLKDELAY
    w(0xaf, 0x00), // VPEAK12
    w(0xb0, 0x00), // VPEAK34
    w(0xb1, 0x00), // CH8IDEN
    w(0xb2, 0x00), // VADCPOL
    w(0xca, 0x00), // CHMD
    w(0xcc, 0x35), // SELCH
    w(0xcd, 0xc4), // MAINCH
    w(0xce, 0x3e), // PWRDOWN
    w(0xf9, 0x40), // VMISC
    w(0xfa, 0x30), // CLKOCTL
    w(0xfb, 0x23), // CLKPOLE
    w(0xfc, 0x01), // AVDETENB
];

/// NTSC D1 (720x480) delta over [`BASELINE`]. The baseline already encodes
/// these values; applying this table returns the chip to D1 after a stint
/// in another mode.
pub const NTSC_D1: &[RegWrite] = &[
    w(0x07, 0x12), // CROP_H
    w(0x0b, 0xd0), // HACTIVE_L
    w(0x57, 0x8a), // HBLEN
    w(0x50, 0x00), // VCLOCK
    w(0x62, 0x00), // O36M
    w(0x83, 0x4c), // CTRL1
    w(0xf9, 0x40), // VMISC
];

/// NTSC WD1 (960x480) delta over [`BASELINE`]: wider horizontal active
/// region and the faster pixel clock that goes with it.
pub const NTSC_WD1: &[RegWrite] = &[
    w(0x07, 0x13), // CROP_H
    w(0x0b, 0xc0), // HACTIVE_L
    w(0x57, 0xb8), // HBLEN
    w(0x50, 0x41), // VCLOCK
    w(0x62, 0x10), // O36M
    w(0x83, 0xcc), // CTRL1
    w(0xf9, 0x43), // VMISC
];
