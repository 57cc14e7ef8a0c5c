//! Print camera events, such as GPI edges, for twenty seconds.

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const STALL_TIME: Duration = Duration::from_secs(20);

fn event_name(event_id: u32) -> &'static str {
    match event_id {
        EVENT_CAMERA_DISCONNECTED => "camera disconnected",
        EVENT_HW_TRIGGER_RISING_EDGE => "hardware trigger rising edge",
        EVENT_HW_TRIGGER_FALLING_EDGE => "hardware trigger falling edge",
        EVENT_GPI_RISING_EDGE => "GPI rising edge",
        EVENT_GPI_FALLING_EDGE => "GPI falling edge",
        EVENT_HW_TRIGGER_MISSED => "hardware trigger missed",
        EVENT_SYNCHRONIZED_TO_MASTER => "synchronized to master",
        EVENT_UNSYNCHRONIZED_FROM_MASTER => "unsynchronized from master",
        EVENT_FRAMES_SKIPPED => "frames skipped",
        _ => "unknown event",
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    if let Err(e) = cam.set_event_callback(EVENT_ANY, |event_id, timestamp, data| {
        println!(
            "event {event_id} ({}) at {timestamp:.6} s, data {data:02X?}",
            event_name(event_id)
        );
    }) {
        let (_, report) = cam.get_error_report()?;
        anyhow::bail!("setting event callback: {e} ({})", report.return_code_name);
    }

    println!("Waiting {} s for events. Toggle the GPI line...", STALL_TIME.as_secs());
    std::thread::sleep(STALL_TIME);

    cam.clear_event_callback(EVENT_ANY)?;
    cam.uninitialize()?;
    Ok(())
}
