//! Software trigger every connected camera without blocking on the images.
//!
//! Asking for the next frame without a buffer only sends the trigger. The
//! images arrive through each camera's frame callback, so several cameras
//! can be triggered at nearly the same time.

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const NUM_CAPTURES: usize = 5;

fn prepare(cam: &Camera, serial: u32) -> anyhow::Result<()> {
    let (_, (flags, mut params)) = cam.get_feature(FEATURE_TRIGGER)?;
    anyhow::ensure!(
        params.len() >= FEATURE_TRIGGER_NUM_PARAMS,
        "trigger feature has {} parameters",
        params.len()
    );
    params[FEATURE_TRIGGER_PARAM_MODE] = TRIGGER_MODE_0 as f32;
    params[FEATURE_TRIGGER_PARAM_TYPE] = TRIGGER_TYPE_SOFTWARE as f32;
    cam.set_feature(
        FEATURE_TRIGGER,
        flags.with_mode(FEATURE_FLAG_MANUAL).bits(),
        &params,
    )?;

    cam.set_callback(CALLBACK_FRAME, move |_data, _format, desc| {
        println!(
            "callback on {:?} for camera {serial}, frame time {:.3} s",
            std::thread::current().id(),
            desc.fFrameTime
        );
    })?;
    cam.set_stream_state(START_STREAM)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, ids) = lib.get_number_cameras()?;
    if ids.is_empty() {
        anyhow::bail!("no cameras connected");
    }

    let mut cameras = Vec::new();
    for id in &ids {
        let (_, cam) = Camera::initialize(lib, id.serial_number, 0)?;
        prepare(&cam, id.serial_number)?;
        println!("Camera {} has handle {:p}", id.serial_number, cam.handle());
        cameras.push(cam);
    }

    for _ in 0..NUM_CAPTURES {
        println!();
        for cam in &cameras {
            match cam.get_next_frame_descriptor() {
                Ok((code, _)) => println!("Software trigger sent to {:p}: {code}", cam.handle()),
                Err(e) => println!("Error: triggering {:p} failed: {e}", cam.handle()),
            }
        }
        std::thread::sleep(Duration::from_secs(1));
    }

    for cam in cameras {
        cam.clear_callback(CALLBACK_FRAME)?;
        cam.set_stream_state(STOP_STREAM)?;
        let (_, (flags, params)) = cam.get_feature(FEATURE_TRIGGER)?;
        cam.set_feature(FEATURE_TRIGGER, flags.with_mode(FEATURE_FLAG_OFF).bits(), &params)?;
        cam.uninitialize()?;
    }
    Ok(())
}
