#![no_std]

//! Bus abstraction for the TW2984 NTSC video decoder.
//!
//! The decoder exposes a flat map of 8-bit registers behind an I2C slave
//! interface. The driver in `tw2984-core` is generic over [`RegisterBus`];
//! implementations handle addressing and transaction framing internally.

/// Abstracts single-register byte access to the decoder over any serial bus.
///
/// The decoder has no multi-register or atomic transaction support, so this
/// is the complete bus contract: one register read or one register write per
/// call, each a short blocking transaction.
pub trait RegisterBus {
    type Error: core::fmt::Debug;

    /// Write one byte to a decoder register.
    fn write_register(&mut self, addr: u8, value: u8) -> Result<(), Self::Error>;

    /// Read one byte from a decoder register.
    fn read_register(&mut self, addr: u8) -> Result<u8, Self::Error>;
}

/// Default 7-bit I2C slave address of the decoder.
pub const DEFAULT_I2C_ADDRESS: u8 = 0x44;

/// [`RegisterBus`] implementation over any `embedded-hal` 1.0 I2C bus.
///
/// Writes are framed as `[register, value]`; reads as a register-pointer
/// write followed by a one-byte read in a repeated-start transaction.
pub struct I2cBus<I> {
    i2c: I,
    address: u8,
}

impl<I> I2cBus<I> {
    /// Wrap an I2C bus using the decoder's default slave address.
    pub fn new(i2c: I) -> Self {
        Self::with_address(i2c, DEFAULT_I2C_ADDRESS)
    }

    /// Wrap an I2C bus with an explicit slave address (the decoder's address
    /// pins allow several chips to share one bus).
    pub fn with_address(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Release the underlying I2C bus.
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: embedded_hal::i2c::I2c> RegisterBus for I2cBus<I> {
    type Error = I::Error;

    fn write_register(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[addr, value])
    }

    fn read_register(&mut self, addr: u8) -> Result<u8, Self::Error> {
        let mut buf = [0u8; 1];
        self.i2c.write_read(self.address, &[addr], &mut buf)?;
        Ok(buf[0])
    }
}
