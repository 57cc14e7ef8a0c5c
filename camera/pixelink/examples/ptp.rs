//! Enable IEEE 1588 (PTPv2) clock synchronization and wait until the
//! camera settles in a stable state.

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

/// States the PTP state machine passes through on its way to a stable one.
fn is_transitory(status: u32) -> bool {
    matches!(
        status,
        FEATURE_PTP_STATUS_INITIALIZING
            | FEATURE_PTP_STATUS_LISTENING
            | FEATURE_PTP_STATUS_PREMASTER
            | FEATURE_PTP_STATUS_UNCALIBRATED
    )
}

fn status_name(status: u32) -> &'static str {
    match status {
        FEATURE_PTP_STATUS_INITIALIZING => "initializing",
        FEATURE_PTP_STATUS_FAULTY => "faulty",
        FEATURE_PTP_STATUS_DISABLED => "disabled",
        FEATURE_PTP_STATUS_LISTENING => "listening",
        FEATURE_PTP_STATUS_PREMASTER => "premaster",
        FEATURE_PTP_STATUS_MASTER => "master",
        FEATURE_PTP_STATUS_PASSIVE => "passive",
        FEATURE_PTP_STATUS_UNCALIBRATED => "uncalibrated",
        FEATURE_PTP_STATUS_SLAVE => "slave",
        _ => "unknown",
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let (_, (_, mut params)) = cam.get_feature(FEATURE_PTP)?;
    params.resize(FEATURE_PTP_NUM_PARAMS, 0.0);
    params[FEATURE_PTP_PARAM_MODE] = FEATURE_PTP_MODE_AUTOMATIC as f32;
    cam.set_feature(FEATURE_PTP, FEATURE_FLAG_AUTO, &params)?;

    loop {
        let (_, (_, params)) = cam.get_feature(FEATURE_PTP)?;
        let status = params.get(FEATURE_PTP_PARAM_STATUS).copied().unwrap_or(0.0) as u32;
        println!("PTP status: {}", status_name(status));
        if !is_transitory(status) {
            if let (Some(accuracy), Some(offset)) = (
                params.get(FEATURE_PTP_PARAM_ACCURACY),
                params.get(FEATURE_PTP_PARAM_OFFSET_FROM_MASTER),
            ) {
                println!("  accuracy {accuracy} s, offset from master {offset} s");
            }
            break;
        }
        std::thread::sleep(Duration::from_millis(250));
    }

    let (_, now) = cam.get_current_timestamp()?;
    println!("camera time: {now} s");
    cam.uninitialize()?;
    Ok(())
}
