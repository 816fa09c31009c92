//! Simulated register bus: a 256-byte register file standing in for the
//! decoder chip, with per-transaction trace logging.

use core::convert::Infallible;

use tw2984_hal::RegisterBus;

/// Value the simulated chip reports from the read-only ID register.
const SIM_CHIP_ID: u8 = 0x84;

pub struct SimBus {
    regs: [u8; 256],
    transaction_count: u64,
}

impl SimBus {
    pub fn new() -> Self {
        let mut regs = [0u8; 256];
        regs[tw2984_core::decoder::registers::CHIP_ID as usize] = SIM_CHIP_ID;
        Self { regs, transaction_count: 0 }
    }

    /// Number of bus transactions issued so far.
    pub fn transactions(&self) -> u64 {
        self.transaction_count
    }
}

impl RegisterBus for SimBus {
    type Error = Infallible;

    fn write_register(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        self.transaction_count += 1;
        log::trace!("wr [{addr:#04x}] <- {value:#04x}");
        self.regs[addr as usize] = value;
        Ok(())
    }

    fn read_register(&mut self, addr: u8) -> Result<u8, Self::Error> {
        self.transaction_count += 1;
        let value = self.regs[addr as usize];
        log::trace!("rd [{addr:#04x}] -> {value:#04x}");
        Ok(value)
    }
}
