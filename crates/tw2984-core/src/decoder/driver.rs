//! Platform-agnostic decoder driver, generic over [`RegisterBus`].
//!
//! Owns the bus handle and the in-memory configuration state (current mode,
//! output gating). One driver value per chip; every bus-touching operation
//! takes `&mut self`, so the borrow checker enforces the one-operation-in-
//! flight contract of the chip's register interface. Independent chips on
//! separate buses get independent driver values.

use tw2984_hal::RegisterBus;

use super::controls::Control;
use super::modes::{self, CropRect, FrameFormat, VideoMode};
use super::registers;
use super::tables::{self, RegWrite};

/// Error type for driver operations, generic over transport errors.
#[derive(Debug)]
pub enum Error<E: core::fmt::Debug> {
    /// A register access failed; carries the register address and the
    /// underlying transport error.
    Bus { addr: u8, source: E },
    /// The baseline table could not be applied during activation. The
    /// device must not be treated as active.
    InitFailed { addr: u8, source: E },
    /// The requested control identifier is not implemented by this decoder.
    UnsupportedControl(u32),
}

/// Configuration driver for one TW2984 decoder.
pub struct Tw2984<B: RegisterBus> {
    bus: B,
    cur_mode: usize,
    output_enabled: bool,
}

impl<B: RegisterBus> Tw2984<B> {
    /// Create a driver for a chip reachable over `bus`. Touches no
    /// registers; the chip stays in whatever state it is in until
    /// [`activate`](Self::activate) is called.
    pub fn new(bus: B) -> Self {
        Self { bus, cur_mode: modes::DEFAULT_MODE, output_enabled: false }
    }

    /// Release the underlying bus handle.
    pub fn release(self) -> B {
        self.bus
    }

    fn write(&mut self, addr: u8, value: u8) -> Result<(), Error<B::Error>> {
        self.bus.write_register(addr, value).map_err(|source| Error::Bus { addr, source })
    }

    fn read(&mut self, addr: u8) -> Result<u8, Error<B::Error>> {
        self.bus.read_register(addr).map_err(|source| Error::Bus { addr, source })
    }

    /// Apply a register table entry-by-entry, in declared order.
    ///
    /// Stops at the first write failure and reports the failing address.
    /// No rollback is attempted: the chip has no atomic multi-register
    /// transactions, so a failed sequence leaves it in the partial state
    /// the preceding writes produced.
    pub fn apply_table(&mut self, table: &[RegWrite]) -> Result<(), Error<B::Error>> {
        for entry in table {
            self.write(entry.addr, entry.value)?;
        }
        Ok(())
    }

    /// Bring the device online: apply the full baseline configuration,
    /// reset the current mode to the default catalog entry, and ungate the
    /// clock/data outputs.
    ///
    /// Must run before any mode switch or control write; the mode delta
    /// tables assume the baseline has established every non-delta register.
    /// A bus failure here is fatal to activation and reported as
    /// [`Error::InitFailed`].
    pub fn activate(&mut self) -> Result<(), Error<B::Error>> {
        self.apply_table(tables::BASELINE).map_err(|e| match e {
            Error::Bus { addr, source } => Error::InitFailed { addr, source },
            other => other,
        })?;
        self.cur_mode = modes::DEFAULT_MODE;
        self.enable_output()
    }

    /// Take the device offline: gate the clock/data outputs and forget the
    /// in-memory state. The chip keeps its register values; only the output
    /// gating changes. The next [`activate`](Self::activate) rebuilds the
    /// configuration from scratch.
    pub fn deactivate(&mut self) -> Result<(), Error<B::Error>> {
        self.disable_output()?;
        self.cur_mode = modes::DEFAULT_MODE;
        Ok(())
    }

    /// Ungate the clock and data outputs: set OE, clear both clock-output
    /// disable bits, preserving the rest of CLKOCTL.
    ///
    /// Read-modify-write on a freshly read value; CLKOCTL holds unrelated
    /// state and the bus has no read-modify-write primitive, so no other
    /// operation may be interleaved between the read and the write.
    pub fn enable_output(&mut self) -> Result<(), Error<B::Error>> {
        let cur = self.read(registers::CLKOCTL)?;
        let next = (cur & !(registers::CLKOCTL_CLKNO_OEB | registers::CLKOCTL_CLKPO_OEB))
            | registers::CLKOCTL_OE;
        self.write(registers::CLKOCTL, next)?;
        self.output_enabled = true;
        Ok(())
    }

    /// Gate the clock and data outputs: clear OE, set both clock-output
    /// disable bits, preserving the rest of CLKOCTL.
    pub fn disable_output(&mut self) -> Result<(), Error<B::Error>> {
        let cur = self.read(registers::CLKOCTL)?;
        let next = (cur & !registers::CLKOCTL_OE)
            | registers::CLKOCTL_CLKNO_OEB
            | registers::CLKOCTL_CLKPO_OEB;
        self.write(registers::CLKOCTL, next)?;
        self.output_enabled = false;
        Ok(())
    }

    /// Whether the clock/data outputs are currently ungated.
    pub fn is_output_enabled(&self) -> bool {
        self.output_enabled
    }

    /// Resolve a requested geometry to the closest supported mode and
    /// reconfigure the chip for it.
    ///
    /// If the selected mode is already current, no registers are written.
    /// Otherwise the mode's delta table is applied and the current-mode
    /// state updated; on a mid-table bus failure the state is left
    /// unchanged, but the chip may hold a partial configuration (table
    /// application is best-effort, not transactional).
    pub fn request_format(&mut self, width: u32, height: u32) -> Result<FrameFormat, Error<B::Error>> {
        let selected = modes::select_mode(width, height);
        if selected != self.cur_mode {
            self.apply_table(modes::MODES[selected].regs)?;
            self.cur_mode = selected;
        }
        Ok(modes::MODES[selected].frame_format())
    }

    /// The currently active mode.
    pub fn current_mode(&self) -> &'static VideoMode {
        &modes::MODES[self.cur_mode]
    }

    /// Active capture rectangle of the current mode. Pure lookup, no bus
    /// traffic.
    pub fn crop_rect(&self) -> CropRect {
        self.current_mode().crop_rect()
    }

    /// Set an image-adjustment control.
    ///
    /// `value` must already be clamped to the control's declared range; it
    /// is written raw to the control's target register(s). Ganged controls
    /// (saturation) write their registers in fixed order and short-circuit
    /// on the first failure. Unknown identifiers fail with
    /// [`Error::UnsupportedControl`] and write nothing.
    pub fn set_control(&mut self, id: u32, value: i32) -> Result<(), Error<B::Error>> {
        let control = Control::from_cid(id).ok_or(Error::UnsupportedControl(id))?;
        for &addr in control.registers() {
            self.write(addr, value as u8)?;
        }
        Ok(())
    }

    /// Default value of a control, for initializing host-side control
    /// state. No bus traffic.
    pub fn get_default(&self, id: u32) -> Result<i32, Error<B::Error>> {
        let control = Control::from_cid(id).ok_or(Error::UnsupportedControl(id))?;
        Ok(control.range().default)
    }

    /// Raw contents of the read-only chip-ID register, for presence checks
    /// at bring-up.
    pub fn chip_id(&mut self) -> Result<u8, Error<B::Error>> {
        self.read(registers::CHIP_ID)
    }
}
