//! Trigger several PTP synchronized cameras at once with a scheduled frame
//! action.
//!
//! Every camera whose PTP state is master or slave is put in action
//! trigger mode. One action fires immediately, a second one a few seconds
//! later on the shared camera clock.

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const ACTION_DELAY: f64 = 5.0;

fn ptp_synchronized(cam: &Camera) -> bool {
    match cam.get_feature(FEATURE_PTP) {
        Ok((_, (_, params))) => {
            let status = params.get(FEATURE_PTP_PARAM_STATUS).copied().unwrap_or(0.0) as u32;
            status == FEATURE_PTP_STATUS_MASTER || status == FEATURE_PTP_STATUS_SLAVE
        }
        Err(_) => false,
    }
}

fn trigger_params(trigger_type: u32) -> [f32; FEATURE_TRIGGER_NUM_PARAMS] {
    let mut params = [0.0; FEATURE_TRIGGER_NUM_PARAMS];
    params[FEATURE_TRIGGER_PARAM_MODE] = TRIGGER_MODE_0 as f32;
    params[FEATURE_TRIGGER_PARAM_TYPE] = trigger_type as f32;
    params
}

fn arm(cam: &Camera, serial: u32) -> anyhow::Result<()> {
    cam.set_callback(CALLBACK_FRAME, move |_data, _format, desc| {
        println!(
            "  camera {serial}: exposure {:6.2} ms, frame time {:6.3} s",
            desc.Shutter.fValue * 1000.0,
            desc.dFrameTime
        );
    })?;
    cam.set_feature(
        FEATURE_TRIGGER,
        FEATURE_FLAG_MANUAL,
        &trigger_params(TRIGGER_TYPE_ACTION),
    )?;
    cam.set_stream_state(START_STREAM)?;
    Ok(())
}

fn disarm(cam: &Camera) -> anyhow::Result<()> {
    cam.set_stream_state(STOP_STREAM)?;
    cam.set_feature(
        FEATURE_TRIGGER,
        FEATURE_FLAG_OFF,
        &trigger_params(TRIGGER_TYPE_FREE_RUNNING),
    )?;
    cam.clear_callback(CALLBACK_FRAME)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, ids) = lib.get_number_cameras()?;
    if ids.len() < 2 {
        anyhow::bail!("at least 2 cameras must be connected, found {}", ids.len());
    }

    let mut cameras = Vec::new();
    for id in &ids {
        let cam = match Camera::initialize(lib, id.serial_number, 0) {
            Ok((_, cam)) => cam,
            Err(e) => {
                tracing::warn!("could not initialize camera {}: {e}", id.serial_number);
                continue;
            }
        };
        if !ptp_synchronized(&cam) {
            println!("camera {} is not PTP synchronized, skipping", id.serial_number);
            continue;
        }
        arm(&cam, id.serial_number)?;
        cameras.push(cam);
    }
    let Some(clock) = cameras.first() else {
        anyhow::bail!("no PTP synchronized cameras found");
    };
    println!("Found {} PTP synchronized cameras", cameras.len());

    println!("You should see one image from each camera immediately...");
    lib.set_actions(ACTION_FRAME_TRIGGER, 0.0)?;

    println!("...and one more from each after {ACTION_DELAY:.1} seconds");
    let (_, now) = clock.get_current_timestamp()?;
    lib.set_actions(ACTION_FRAME_TRIGGER, now + ACTION_DELAY)?;
    let (_, (scheduled, pending)) = clock.get_actions()?;
    println!("{pending} action(s) pending, next at {scheduled:.3} s");
    std::thread::sleep(Duration::from_secs_f64(ACTION_DELAY * 2.0));

    for cam in cameras {
        disarm(&cam)?;
        cam.uninitialize()?;
    }
    Ok(())
}
