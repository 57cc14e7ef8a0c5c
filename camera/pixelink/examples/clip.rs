//! Record a fast motion H.264 clip and wrap it in an AVI container.
//!
//! Usage: clip [-t SECONDS] [-d DECIMATION] [-f PLAYBACK_FPS] NAME
//!
//! Every DECIMATION'th frame of SECONDS of streaming is kept and played back
//! at PLAYBACK_FPS.

use std::sync::mpsc;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

struct Args {
    seconds: u32,
    decimation: u32,
    playback_fps: u32,
    name: String,
}

fn positive(option: &str, value: Option<String>) -> anyhow::Result<u32> {
    let value = value.ok_or_else(|| anyhow::anyhow!("{option} needs a value"))?;
    let v: u32 = value.parse()?;
    anyhow::ensure!(v >= 1, "{option} must be at least 1");
    Ok(v)
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        seconds: 5 * 60,
        decimation: 5,
        playback_fps: 25,
        name: String::new(),
    };
    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.to_ascii_lowercase().as_str() {
            "-t" => args.seconds = positive(&arg, it.next())?,
            "-d" => args.decimation = positive(&arg, it.next())?,
            "-f" => args.playback_fps = positive(&arg, it.next())?,
            _ if arg.starts_with('-') => anyhow::bail!("unknown option {arg}"),
            _ => args.name = arg,
        }
    }
    if args.name.is_empty() {
        anyhow::bail!("Usage: clip [-t SECONDS] [-d DECIMATION] [-f PLAYBACK_FPS] NAME");
    }
    Ok(args)
}

/// `FEATURE_ACTUAL_FRAME_RATE` when the camera has it, else the requested
/// `FEATURE_FRAME_RATE`.
fn effective_frame_rate(cam: &Camera) -> anyhow::Result<f32> {
    let (_, features) = cam.get_camera_features(FEATURE_ACTUAL_FRAME_RATE)?;
    let id = match features.get(FEATURE_ACTUAL_FRAME_RATE) {
        Some(f) if f.flags.is_present() => FEATURE_ACTUAL_FRAME_RATE,
        _ => FEATURE_FRAME_RATE,
    };
    let (_, (_, params)) = cam.get_feature(id)?;
    params
        .first()
        .copied()
        .ok_or_else(|| anyhow::anyhow!("camera reported no frame rate"))
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let args = parse_args()?;
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let fps = effective_frame_rate(&cam)?;
    let num_frames = (fps * args.seconds as f32) as u32 / args.decimation;
    let encoded_name = format!("{}.h264", args.name);
    let avi_name = format!("{}.avi", args.name);
    let encoding = CLIP_ENCODING_INFO {
        uStreamEncoding: CLIP_ENCODING_H264,
        uDecimationFactor: args.decimation,
        playbackFrameRate: args.playback_fps as f32,
        ..Default::default()
    };

    println!("Recording {num_frames} frames over {} s at {fps} fps", args.seconds);
    let (tx, rx) = mpsc::channel();
    cam.set_stream_state(START_STREAM)?;
    cam.get_encoded_clip(num_frames, &encoded_name, &encoding, move |frames, code| {
        // The receiver outlives the capture.
        let _ = tx.send((frames, code));
    })?;
    let (frames, code) = rx.recv()?;
    cam.set_stream_state(STOP_STREAM)?;
    if !code.is_success() {
        anyhow::bail!("clip capture failed after {frames} frames: {code}");
    }
    println!("Captured {frames} frames ({code})");

    lib.format_clip(&encoded_name, &avi_name, CLIP_ENCODING_H264, CLIP_FORMAT_AVI)?;
    println!("Saved clip to '{avi_name}'");
    cam.uninitialize()?;
    Ok(())
}
