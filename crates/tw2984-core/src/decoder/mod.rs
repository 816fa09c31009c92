pub mod controls;
pub mod driver;
pub mod modes;
pub mod registers;
pub mod tables;

pub use controls::Control;
pub use driver::{Error, Tw2984};
pub use modes::{CropRect, FieldOrder, FrameFormat, PixelEncoding, VideoMode};
pub use tables::RegWrite;
