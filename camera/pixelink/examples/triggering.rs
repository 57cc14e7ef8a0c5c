//! Capture images with software triggering, then with hardware triggering.
//!
//! Hardware triggering waits for the trigger input of the machine vision
//! connector, so a trigger source must be wired up.

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn supports_triggering(cam: &Camera) -> anyhow::Result<bool> {
    let (_, features) = cam.get_camera_features(FEATURE_TRIGGER)?;
    Ok(features
        .get(FEATURE_TRIGGER)
        .is_some_and(|f| f.flags.is_present()))
}

fn disable_triggering(cam: &Camera) -> anyhow::Result<()> {
    let (_, (flags, params)) = cam.get_feature(FEATURE_TRIGGER)?;
    cam.set_feature(
        FEATURE_TRIGGER,
        flags.with_mode(FEATURE_FLAG_OFF).bits(),
        &params,
    )?;
    Ok(())
}

fn set_triggering(cam: &Camera, mode: u32, trigger_type: u32) -> anyhow::Result<()> {
    let (_, (flags, mut params)) = cam.get_feature(FEATURE_TRIGGER)?;
    params.resize(FEATURE_TRIGGER_NUM_PARAMS, 0.0);
    params[FEATURE_TRIGGER_PARAM_MODE] = mode as f32;
    params[FEATURE_TRIGGER_PARAM_TYPE] = trigger_type as f32;
    params[FEATURE_TRIGGER_PARAM_POLARITY] = POLARITY_ACTIVE_LOW as f32;
    params[FEATURE_TRIGGER_PARAM_DELAY] = 0.0;
    params[FEATURE_TRIGGER_PARAM_PARAMETER] = 0.0;
    cam.set_feature(
        FEATURE_TRIGGER,
        flags.with_mode(FEATURE_FLAG_MANUAL).bits(),
        &params,
    )?;
    Ok(())
}

/// Capture `n` images. Each `get_next_frame` blocks until the camera is
/// triggered.
fn capture(cam: &Camera, n: usize) -> anyhow::Result<()> {
    let mut buf = vec![0u8; cam.raw_image_size()?];
    cam.set_stream_state(START_STREAM)?;
    let mut result = Ok(());
    for _ in 0..n {
        match cam.get_next_frame(&mut buf) {
            Ok((_, desc)) => println!("Image {} captured.", desc.uFrameNumber),
            Err(e) => {
                result = Err(e.into());
                break;
            }
        }
    }
    cam.set_stream_state(STOP_STREAM)?;
    result
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    if !supports_triggering(&cam)? {
        anyhow::bail!("triggering is not supported on this camera");
    }
    disable_triggering(&cam)?;

    println!("Configuring the camera for software triggering");
    set_triggering(&cam, TRIGGER_MODE_0, TRIGGER_TYPE_SOFTWARE)?;
    capture(&cam, 2)?;

    println!("Configuring the camera for hardware triggering, waiting for two triggers");
    set_triggering(&cam, TRIGGER_MODE_0, TRIGGER_TYPE_HARDWARE)?;
    capture(&cam, 2)?;

    disable_triggering(&cam)?;
    cam.uninitialize()?;
    Ok(())
}
