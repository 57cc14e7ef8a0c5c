//! Adjust the white balance of a color camera by hand, then let the camera
//! balance it once on its own.

use std::time::{Duration, Instant};

use pixelink::sys::*;
use pixelink::{Camera, FeatureParam, PixelinkLibrary};

const ONE_PUSH_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

const CHANNELS: [(usize, &str); 3] = [
    (FEATURE_WHITE_SHADING_PARAM_RED, "red"),
    (FEATURE_WHITE_SHADING_PARAM_GREEN, "green"),
    (FEATURE_WHITE_SHADING_PARAM_BLUE, "blue"),
];

/// Gain limits of each channel, if one-push white balance is supported.
fn white_balance_limits(cam: &Camera) -> anyhow::Result<Option<Vec<FeatureParam>>> {
    let (_, features) = cam.get_camera_features(FEATURE_WHITE_SHADING)?;
    Ok(features
        .get(FEATURE_WHITE_SHADING)
        .filter(|f| f.flags.is_present() && f.flags.is_one_push())
        .filter(|f| f.params.len() >= FEATURE_WHITE_SHADING_NUM_PARAMS)
        .map(|f| f.params.clone()))
}

fn print_gains(cam: &Camera) -> anyhow::Result<()> {
    let (_, (flags, gains)) = cam.get_feature(FEATURE_WHITE_SHADING)?;
    if flags.is_one_push() {
        println!("-- camera is auto adjusting --");
        return Ok(());
    }
    let gains: Vec<String> = CHANNELS
        .iter()
        .filter_map(|(i, name)| gains.get(*i).map(|g| format!("{name}:{g:.2}")))
        .collect();
    println!("Gains --> {}", gains.join(" "));
    Ok(())
}

/// Scale one channel by `factor`, staying inside its limits.
fn change_channel(
    cam: &Camera,
    limits: &[FeatureParam],
    channel: usize,
    factor: f32,
) -> anyhow::Result<()> {
    let (_, (flags, mut gains)) = cam.get_feature(FEATURE_WHITE_SHADING)?;
    anyhow::ensure!(gains.len() > channel, "no gain for channel {channel}");
    let gain = gains[channel] * factor;
    if gain <= limits[channel].min || gain >= limits[channel].max {
        println!("gain {gain:.2} is outside {:?}", limits[channel]);
        return Ok(());
    }
    gains[channel] = gain;
    cam.set_feature(
        FEATURE_WHITE_SHADING,
        flags.with_mode(FEATURE_FLAG_MANUAL).bits(),
        &gains,
    )?;
    Ok(())
}

fn auto_white_balance(cam: &Camera) -> anyhow::Result<()> {
    let (_, (flags, _)) = cam.get_feature(FEATURE_WHITE_SHADING)?;
    // The gains are ignored when starting an adjustment.
    cam.set_feature(
        FEATURE_WHITE_SHADING,
        flags.with_mode(FEATURE_FLAG_ONEPUSH).bits(),
        &[0.0; FEATURE_WHITE_SHADING_NUM_PARAMS],
    )?;
    let start = Instant::now();
    loop {
        let (_, (flags, _)) = cam.get_feature(FEATURE_WHITE_SHADING)?;
        if !flags.is_one_push() {
            return Ok(());
        }
        if start.elapsed() > ONE_PUSH_TIMEOUT {
            anyhow::bail!("auto white balance did not finish");
        }
        print_gains(cam)?;
        std::thread::sleep(POLL_INTERVAL);
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    let Some(limits) = white_balance_limits(&cam)? else {
        anyhow::bail!("camera does not support white balance");
    };

    cam.set_stream_state(START_STREAM)?;
    cam.set_preview_state(START_PREVIEW)?;
    print_gains(&cam)?;

    for (channel, name) in CHANNELS {
        println!("Increasing {name} by 10%");
        change_channel(&cam, &limits, channel, 1.1)?;
        print_gains(&cam)?;
        std::thread::sleep(Duration::from_secs(1));
    }

    println!("Performing a one-time auto white balance");
    auto_white_balance(&cam)?;
    print_gains(&cam)?;

    cam.set_preview_state(STOP_PREVIEW)?;
    cam.set_stream_state(STOP_STREAM)?;
    cam.uninitialize()?;
    Ok(())
}
