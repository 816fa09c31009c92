//! Integration tests for the Tw2984 driver using a mock register bus.
//!
//! The mock is backed by a 256-byte register file, records every write in
//! order as (addr, value) tuples, and can be told to fail the k-th write,
//! which is how the table-sequencing and partial-failure contracts are
//! verified.

use std::cell::RefCell;
use std::rc::Rc;

use tw2984_core::decoder::controls::cid;
use tw2984_core::decoder::driver::{Error, Tw2984};
use tw2984_core::decoder::{modes, registers, tables};

/// Captured register write: (address, value).
type WriteRecord = (u8, u8);

struct BusState {
    regs: [u8; 256],
    writes: Vec<WriteRecord>,
    /// Fail the write whose zero-based sequence number equals this.
    fail_at: Option<usize>,
}

/// Mock bus: a register file that logs writes and supports fault injection.
#[derive(Clone)]
struct MockBus {
    state: Rc<RefCell<BusState>>,
}

impl MockBus {
    fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(BusState {
                regs: [0u8; 256],
                writes: Vec::new(),
                fail_at: None,
            })),
        }
    }

    /// Preload a register value, as if the chip powered up with it.
    fn set_reg(&self, addr: u8, value: u8) {
        self.state.borrow_mut().regs[addr as usize] = value;
    }

    fn reg(&self, addr: u8) -> u8 {
        self.state.borrow().regs[addr as usize]
    }

    /// Make the k-th write (zero-based, counting successful writes so far)
    /// fail with a bus error.
    fn fail_at(&self, k: usize) {
        self.state.borrow_mut().fail_at = Some(k);
    }

    fn writes(&self) -> Vec<WriteRecord> {
        self.state.borrow().writes.clone()
    }

    fn write_count(&self) -> usize {
        self.state.borrow().writes.len()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct MockError;

impl tw2984_hal::RegisterBus for MockBus {
    type Error = MockError;

    fn write_register(&mut self, addr: u8, value: u8) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();
        if state.fail_at == Some(state.writes.len()) {
            state.fail_at = None;
            return Err(MockError);
        }
        state.regs[addr as usize] = value;
        state.writes.push((addr, value));
        Ok(())
    }

    fn read_register(&mut self, addr: u8) -> Result<u8, Self::Error> {
        Ok(self.state.borrow().regs[addr as usize])
    }
}

/// Helper: driver plus a handle onto its mock bus.
fn make_driver() -> (Tw2984<MockBus>, MockBus) {
    let bus = MockBus::new();
    let bus_handle = bus.clone();
    (Tw2984::new(bus), bus_handle)
}

fn table_as_tuples(table: &[tables::RegWrite]) -> Vec<WriteRecord> {
    table.iter().map(|e| (e.addr, e.value)).collect()
}

// ============================================================================
// Table application tests
// ============================================================================

mod table_tests {
    use super::*;

    #[test]
    fn applies_every_entry_once_in_order() {
        let (mut driver, bus) = make_driver();

        driver
            .apply_table(tables::NTSC_WD1)
            .expect("apply_table should succeed");

        assert_eq!(bus.writes(), table_as_tuples(tables::NTSC_WD1));
    }

    #[test]
    fn stops_at_first_failure_and_reports_address() {
        let (mut driver, bus) = make_driver();
        bus.fail_at(3);

        let err = driver
            .apply_table(tables::NTSC_WD1)
            .expect_err("apply_table should fail at entry 3");

        // Exactly 3 writes reached the bus, and the error names entry 3.
        assert_eq!(bus.write_count(), 3);
        assert_eq!(bus.writes(), table_as_tuples(&tables::NTSC_WD1[..3]));
        match err {
            Error::Bus { addr, source } => {
                assert_eq!(addr, tables::NTSC_WD1[3].addr);
                assert_eq!(source, MockError);
            }
            other => panic!("expected Error::Bus, got {other:?}"),
        }
    }
}

// ============================================================================
// Activation / deactivation tests
// ============================================================================

mod activation_tests {
    use super::*;

    #[test]
    fn activate_applies_baseline_then_enables_output() {
        let (mut driver, bus) = make_driver();

        driver.activate().expect("activate should succeed");

        let writes = bus.writes();
        // Baseline first, in declared order.
        assert_eq!(&writes[..tables::BASELINE.len()], &table_as_tuples(tables::BASELINE)[..]);
        // Then exactly one more write: the CLKOCTL read-modify-write.
        assert_eq!(writes.len(), tables::BASELINE.len() + 1);
        let (addr, value) = writes[writes.len() - 1];
        assert_eq!(addr, registers::CLKOCTL);
        assert_ne!(value & registers::CLKOCTL_OE, 0, "OE must be set");
        assert_eq!(value & registers::CLKOCTL_CLKNO_OEB, 0, "CLKNO_OEB must be clear");
        assert_eq!(value & registers::CLKOCTL_CLKPO_OEB, 0, "CLKPO_OEB must be clear");
        assert!(driver.is_output_enabled());
    }

    #[test]
    fn activate_resets_mode_to_default() {
        let (mut driver, _bus) = make_driver();
        driver.activate().expect("activate should succeed");
        driver.request_format(960, 480).expect("switch to WD1 should succeed");
        assert_eq!(driver.current_mode().name, "NTSC_WD1");

        driver.deactivate().expect("deactivate should succeed");
        driver.activate().expect("re-activate should succeed");

        assert_eq!(driver.current_mode().name, "NTSC_D1");
    }

    #[test]
    fn baseline_failure_is_fatal_and_reports_entry() {
        let (mut driver, bus) = make_driver();
        bus.fail_at(5);

        let err = driver.activate().expect_err("activate should fail");

        assert_eq!(bus.write_count(), 5);
        match err {
            Error::InitFailed { addr, .. } => assert_eq!(addr, tables::BASELINE[5].addr),
            other => panic!("expected Error::InitFailed, got {other:?}"),
        }
        assert!(!driver.is_output_enabled());
    }

    #[test]
    fn restart_reproduces_identical_write_sequence() {
        let (mut driver, bus) = make_driver();

        driver.activate().expect("first activate should succeed");
        let first = bus.writes();

        driver.deactivate().expect("deactivate should succeed");
        let before_second = bus.write_count();

        driver.activate().expect("second activate should succeed");
        let all = bus.writes();

        assert_eq!(&all[before_second..], &first[..], "restart must replay the same writes");
    }
}

// ============================================================================
// Output gating tests
// ============================================================================

mod output_tests {
    use super::*;

    const GATING_BITS: u8 =
        registers::CLKOCTL_OE | registers::CLKOCTL_CLKNO_OEB | registers::CLKOCTL_CLKPO_OEB;

    #[test]
    fn enable_then_disable_preserves_other_bits() {
        let (mut driver, bus) = make_driver();
        // Unrelated CLKOCTL state that must survive the round trip.
        let initial: u8 = 0b1000_1011;
        bus.set_reg(registers::CLKOCTL, initial);

        driver.enable_output().expect("enable_output should succeed");
        driver.disable_output().expect("disable_output should succeed");

        let after = bus.reg(registers::CLKOCTL);
        assert_eq!(after & !GATING_BITS, initial & !GATING_BITS, "non-gating bits must be intact");
        assert_eq!(after & registers::CLKOCTL_OE, 0);
        assert_ne!(after & registers::CLKOCTL_CLKNO_OEB, 0);
        assert_ne!(after & registers::CLKOCTL_CLKPO_OEB, 0);
    }

    #[test]
    fn enable_uses_freshly_read_value() {
        let (mut driver, bus) = make_driver();
        bus.set_reg(registers::CLKOCTL, 0x30);

        driver.enable_output().expect("enable_output should succeed");
        // Some other agent flips an unrelated bit between operations.
        bus.set_reg(registers::CLKOCTL, bus.reg(registers::CLKOCTL) | 0x01);
        driver.disable_output().expect("disable_output should succeed");

        let after = bus.reg(registers::CLKOCTL);
        assert_ne!(after & 0x01, 0, "disable must re-read CLKOCTL, not reuse a cached value");
    }
}

// ============================================================================
// Format request tests
// ============================================================================

mod format_tests {
    use super::*;

    #[test]
    fn switch_to_wide_mode_applies_delta_and_updates_crop() {
        let (mut driver, bus) = make_driver();

        let fmt = driver.request_format(960, 480).expect("request_format should succeed");

        assert_eq!(fmt.width, 960);
        assert_eq!(fmt.height, 480);
        assert_eq!(fmt.encoding, modes::PIXEL_ENCODING);
        assert_eq!(fmt.field, modes::FIELD_ORDER);
        assert_eq!(bus.writes(), table_as_tuples(tables::NTSC_WD1));

        let crop = driver.crop_rect();
        assert_eq!((crop.left, crop.top, crop.width, crop.height), (162, 38, 960, 480));
    }

    #[test]
    fn repeated_request_issues_zero_writes() {
        let (mut driver, bus) = make_driver();

        driver.request_format(960, 480).expect("first request should succeed");
        let after_first = bus.write_count();

        let fmt = driver.request_format(960, 480).expect("second request should succeed");

        assert_eq!(fmt.width, 960);
        assert_eq!(bus.write_count(), after_first, "no redundant reconfiguration");
    }

    #[test]
    fn request_for_current_mode_is_a_no_op() {
        let (mut driver, bus) = make_driver();

        // Driver starts in the default D1 mode.
        let fmt = driver.request_format(720, 480).expect("request_format should succeed");

        assert_eq!(fmt.width, 720);
        assert_eq!(bus.write_count(), 0);
    }

    #[test]
    fn failed_switch_leaves_current_mode_unchanged() {
        let (mut driver, bus) = make_driver();
        bus.fail_at(2);

        driver.request_format(960, 480).expect_err("switch should fail mid-table");

        assert_eq!(driver.current_mode().name, "NTSC_D1");
        // Retry once the bus recovers.
        driver.request_format(960, 480).expect("retry should succeed");
        assert_eq!(driver.current_mode().name, "NTSC_WD1");
    }

    #[test]
    fn switching_back_applies_the_narrow_delta() {
        let (mut driver, bus) = make_driver();

        driver.request_format(960, 480).expect("switch to WD1 should succeed");
        let before = bus.write_count();
        driver.request_format(720, 480).expect("switch back to D1 should succeed");

        assert_eq!(&bus.writes()[before..], &table_as_tuples(tables::NTSC_D1)[..]);
    }
}

// ============================================================================
// Control tests
// ============================================================================

mod control_tests {
    use super::*;

    #[test]
    fn saturation_writes_u_then_v_with_same_value() {
        let (mut driver, bus) = make_driver();

        driver.set_control(cid::SATURATION, 200).expect("set_control should succeed");

        assert_eq!(
            bus.writes(),
            vec![(registers::SAT_U1, 200), (registers::SAT_V1, 200)]
        );
    }

    #[test]
    fn saturation_short_circuits_on_first_failure() {
        let (mut driver, bus) = make_driver();
        bus.fail_at(0);

        let err = driver.set_control(cid::SATURATION, 200).expect_err("first write should fail");

        assert_eq!(bus.write_count(), 0);
        match err {
            Error::Bus { addr, .. } => assert_eq!(addr, registers::SAT_U1),
            other => panic!("expected Error::Bus, got {other:?}"),
        }
    }

    #[test]
    fn brightness_writes_raw_twos_complement() {
        let (mut driver, bus) = make_driver();

        driver.set_control(cid::BRIGHTNESS, -128).expect("set_control should succeed");

        assert_eq!(bus.writes(), vec![(registers::BRIGHT1, 0x80)]);
    }

    #[test]
    fn contrast_and_hue_hit_their_registers() {
        let (mut driver, bus) = make_driver();

        driver.set_control(cid::CONTRAST, 0x64).expect("contrast should succeed");
        driver.set_control(cid::HUE, 0).expect("hue should succeed");

        assert_eq!(bus.writes(), vec![(registers::CONTRAST1, 0x64), (registers::HUE1, 0x00)]);
    }

    #[test]
    fn unknown_cid_fails_with_zero_writes() {
        let (mut driver, bus) = make_driver();

        let err = driver.set_control(0xdead_beef, 0).expect_err("unknown CID should fail");

        assert_eq!(bus.write_count(), 0);
        match err {
            Error::UnsupportedControl(id) => assert_eq!(id, 0xdead_beef),
            other => panic!("expected Error::UnsupportedControl, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_the_baseline_table() {
        let (driver, _bus) = make_driver();

        assert_eq!(driver.get_default(cid::BRIGHTNESS).unwrap(), 0x00);
        assert_eq!(driver.get_default(cid::CONTRAST).unwrap(), 0x64);
        assert_eq!(driver.get_default(cid::SATURATION).unwrap(), 0x80);
        assert_eq!(driver.get_default(cid::HUE).unwrap(), 0x00);
        assert!(matches!(
            driver.get_default(0x1234),
            Err(Error::UnsupportedControl(0x1234))
        ));
    }
}

// ============================================================================
// Chip ID tests
// ============================================================================

mod chip_id_tests {
    use super::*;

    #[test]
    fn chip_id_reads_the_id_register() {
        let (mut driver, bus) = make_driver();
        bus.set_reg(registers::CHIP_ID, 0x84);

        assert_eq!(driver.chip_id().expect("chip_id should succeed"), 0x84);
        assert_eq!(bus.write_count(), 0);
    }
}
