//! Continuous and one-push auto exposure.
//!
//! The camera first adjusts the exposure continuously for a while. Then
//! manual control is restored and a one-time adjustment is started and
//! polled until the camera clears the one-push flag. An adjustment still
//! running after the timeout is aborted by going back to manual.

use std::time::{Duration, Instant};

use pixelink::sys::*;
use pixelink::{Camera, FeatureFlags, PixelinkLibrary};

const CONTINUOUS_TIME: Duration = Duration::from_secs(5);
const ONE_PUSH_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn supports_auto_exposure(cam: &Camera) -> anyhow::Result<bool> {
    let (_, features) = cam.get_camera_features(FEATURE_EXPOSURE)?;
    Ok(features.get(FEATURE_EXPOSURE).is_some_and(|f| {
        f.flags.is_present() && f.flags.is_auto() && f.flags.is_one_push()
    }))
}

fn exposure(cam: &Camera) -> anyhow::Result<(FeatureFlags, Vec<f32>)> {
    let (_, (flags, params)) = cam.get_feature(FEATURE_EXPOSURE)?;
    anyhow::ensure!(!params.is_empty(), "camera reported no exposure value");
    Ok((flags, params))
}

fn print_exposure(cam: &Camera) -> anyhow::Result<()> {
    let (flags, params) = exposure(cam)?;
    let adjustment = if flags.is_auto() {
        "continuous"
    } else if flags.is_one_push() {
        "one-time"
    } else {
        "manual"
    };
    println!(
        "Exposure: {:8.3} ms, adjustment: {adjustment}",
        params[FEATURE_EXPOSURE_PARAM_VALUE] * 1000.0
    );
    Ok(())
}

/// Keep the current value and hand control back to the application.
fn set_manual(cam: &Camera) -> anyhow::Result<()> {
    let (flags, params) = exposure(cam)?;
    cam.set_feature(
        FEATURE_EXPOSURE,
        flags.with_mode(FEATURE_FLAG_MANUAL).bits(),
        &params,
    )?;
    Ok(())
}

fn one_time_auto_exposure(cam: &Camera) -> anyhow::Result<()> {
    let (flags, _) = exposure(cam)?;
    // The value is ignored when starting an adjustment.
    cam.set_feature(
        FEATURE_EXPOSURE,
        flags.with_mode(FEATURE_FLAG_ONEPUSH).bits(),
        &[0.0],
    )?;
    let start = Instant::now();
    loop {
        let (flags, _) = exposure(cam)?;
        if !flags.is_one_push() {
            println!("One-time auto exposure completed");
            return Ok(());
        }
        if start.elapsed() > ONE_PUSH_TIMEOUT {
            set_manual(cam)?;
            println!("One-time auto exposure aborted");
            return Ok(());
        }
        print_exposure(cam)?;
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    if !supports_auto_exposure(&cam)? {
        anyhow::bail!("camera does not support auto exposure");
    }

    cam.set_stream_state(START_STREAM)?;
    cam.set_preview_state(START_PREVIEW)?;

    println!("Continuous auto exposure for {} s", CONTINUOUS_TIME.as_secs());
    cam.set_feature(FEATURE_EXPOSURE, FEATURE_FLAG_AUTO, &[0.0])?;
    let start = Instant::now();
    while start.elapsed() < CONTINUOUS_TIME {
        print_exposure(&cam)?;
        std::thread::sleep(POLL_INTERVAL);
    }
    set_manual(&cam)?;
    print_exposure(&cam)?;

    one_time_auto_exposure(&cam)?;
    print_exposure(&cam)?;

    // Manual adjustments outside the supported range are rejected.
    let (flags, mut params) = exposure(&cam)?;
    params[FEATURE_EXPOSURE_PARAM_VALUE] *= 1.1;
    match cam.set_feature(FEATURE_EXPOSURE, flags.bits(), &params) {
        Ok(_) => print_exposure(&cam)?,
        Err(e) => println!("exposure increase rejected: {e}"),
    }

    cam.set_preview_state(STOP_PREVIEW)?;
    cam.set_stream_state(STOP_STREAM)?;
    cam.uninitialize()?;
    Ok(())
}
