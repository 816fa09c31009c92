#![no_std]

//! Platform-agnostic configuration driver for the TW2984 NTSC video decoder.
//!
//! The TW2984 is a 4-channel NTSC video decoder configured through a flat
//! map of 8-bit registers. This crate turns "capture format X" and "set
//! brightness to Y" requests into ordered register-write sequences, and
//! tracks which of the chip's fixed capture modes is active. All bus access
//! goes through the [`tw2984_hal::RegisterBus`] trait; the driver itself is
//! transport-agnostic and `no_std`.

pub mod decoder;
