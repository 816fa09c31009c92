//! Supported capture modes and nearest-mode selection.
//!
//! The chip supports a fixed catalog of frame geometries; there is no
//! arbitrary-resolution scaling. A format request resolves to the catalog
//! entry closest to the requested geometry, and that entry's delta table
//! reconfigures the chip.

use super::tables::{self, RegWrite};

/// One supported capture configuration.
#[derive(Clone, Copy, Debug)]
pub struct VideoMode {
    pub name: &'static str,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Horizontal offset of the active region within the raw raster.
    pub hskip: u32,
    /// Vertical offset of the active region within the raw raster.
    pub vskip: u32,
    /// Registers that differ from the baseline in this mode.
    pub regs: &'static [RegWrite],
}

/// The mode catalog, in declaration order. Index 0 is the default mode and
/// matches the state the baseline table leaves the chip in.
pub const MODES: &[VideoMode] = &[
    VideoMode {
        name: "NTSC_D1",
        width: 720,
        height: 480,
        hskip: 122,
        vskip: 38,
        regs: tables::NTSC_D1,
    },
    VideoMode {
        name: "NTSC_WD1",
        width: 960,
        height: 480,
        hskip: 162,
        vskip: 38,
        regs: tables::NTSC_WD1,
    },
];

/// Index of the default mode selected at activation.
pub const DEFAULT_MODE: usize = 0;

/// The single output pixel encoding the chip is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelEncoding {
    /// YUV 4:2:2, 8 bits per sample, two bus clocks per pixel.
    Yuyv8,
}

/// Field order of the interlaced output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldOrder {
    /// Interlaced, top field transmitted first.
    InterlacedTopBottom,
}

/// Pixel encoding is fixed regardless of the selected mode.
pub const PIXEL_ENCODING: PixelEncoding = PixelEncoding::Yuyv8;
/// Field order is fixed regardless of the selected mode.
pub const FIELD_ORDER: FieldOrder = FieldOrder::InterlacedTopBottom;

/// Video bus signalling of the parallel output, fixed by board wiring.
#[derive(Clone, Copy, Debug)]
pub struct BusConfig {
    /// Pixel clock sampled on the rising edge.
    pub pclk_sample_rising: bool,
    /// Chip drives the sync signals (master mode).
    pub master: bool,
    pub vsync_active_high: bool,
    pub hsync_active_high: bool,
    pub data_active_high: bool,
}

pub const BUS_CONFIG: BusConfig = BusConfig {
    pclk_sample_rising: true,
    master: true,
    vsync_active_high: true,
    hsync_active_high: true,
    data_active_high: true,
};

/// The geometry and encoding a format request settled on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameFormat {
    pub width: u32,
    pub height: u32,
    pub encoding: PixelEncoding,
    pub field: FieldOrder,
}

/// Active capture rectangle of a mode: offsets into the raw raster plus the
/// frame dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl VideoMode {
    /// Active capture rectangle for this mode. Pure lookup, no bus traffic.
    pub fn crop_rect(&self) -> CropRect {
        CropRect { left: self.hskip, top: self.vskip, width: self.width, height: self.height }
    }

    /// Frame format reported for this mode (geometry plus the fixed
    /// encoding constants).
    pub fn frame_format(&self) -> FrameFormat {
        FrameFormat {
            width: self.width,
            height: self.height,
            encoding: PIXEL_ENCODING,
            field: FIELD_ORDER,
        }
    }
}

/// Index of the catalog mode closest to the requested geometry.
///
/// Distance is `|mode.width - width| + |mode.height - height|`, summed in
/// u64 so the score cannot overflow for extreme requests. Later entries
/// replace the running best only on strict improvement, so the earliest
/// declared entry wins ties. Total over all inputs: even a wildly
/// out-of-range request degrades to the closest available mode.
pub fn select_mode(width: u32, height: u32) -> usize {
    let mut best = 0;
    let mut best_score = u64::MAX;
    for (i, mode) in MODES.iter().enumerate() {
        let score =
            u64::from(mode.width.abs_diff(width)) + u64::from(mode.height.abs_diff(height));
        if score < best_score {
            best_score = score;
            best = i;
        }
    }
    best
}

/// Catalog entries in declaration order, with their indices. Finite and
/// restartable; used to answer frame-size enumeration queries.
pub fn enum_modes() -> impl Iterator<Item = (usize, &'static VideoMode)> {
    MODES.iter().enumerate()
}
