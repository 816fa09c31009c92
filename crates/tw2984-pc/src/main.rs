//! PC debug host for the TW2984 configuration driver.
//!
//! Single-threaded application that runs the full bring-up sequence against
//! an in-process register-file simulation of the chip. Run with
//! `RUST_LOG=trace` to see every register transaction; useful for checking
//! write sequences without decoder hardware on the bench.

mod bus;

use tw2984_core::decoder::controls::{cid, Control};
use tw2984_core::decoder::{modes, Tw2984};

fn main() {
    env_logger::init();
    log::info!("tw2984-pc: debug host starting");

    let mut decoder = Tw2984::new(bus::SimBus::new());

    let id = decoder.chip_id().expect("chip ID read failed");
    log::info!("chip ID register: {id:#04x}");

    for (i, mode) in modes::enum_modes() {
        log::info!("catalog[{i}]: {} {}x{}", mode.name, mode.width, mode.height);
    }
    log::info!("bus signalling: {:?}", modes::BUS_CONFIG);

    decoder.activate().expect("activation failed");
    log::info!("activated in mode {}", decoder.current_mode().name);

    let fmt = decoder.request_format(960, 480).expect("format request failed");
    let crop = decoder.crop_rect();
    log::info!(
        "format {}x{} {:?} {:?}, crop +{}+{}",
        fmt.width, fmt.height, fmt.encoding, fmt.field, crop.left, crop.top
    );

    for control in Control::ALL {
        let default = decoder.get_default(control.cid()).expect("default lookup failed");
        decoder.set_control(control.cid(), default).expect("control write failed");
        log::info!("{control:?} reset to default {default}");
    }
    decoder.set_control(cid::SATURATION, 200).expect("saturation write failed");

    decoder.deactivate().expect("deactivation failed");

    let bus = decoder.release();
    log::info!("done; {} bus transactions", bus.transactions());
}
