//! Save one bitmap per polarization channel of a polar camera, plus one
//! with all channels weighted equally.
//!
//! Usage: polar_snapshot [FILE_ROOT]

use std::path::Path;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const MAX_NUM_TRIES: usize = 4;
const OUTPUT_DIR: &str = "getPolarSnapshot";

/// Polar weighting support is what makes a camera a polar camera.
fn is_polar_camera(cam: &Camera) -> anyhow::Result<bool> {
    let (_, features) = cam.get_camera_features(FEATURE_POLAR_WEIGHTINGS)?;
    Ok(features
        .get(FEATURE_POLAR_WEIGHTINGS)
        .is_some_and(|f| f.flags.is_present()))
}

/// Weight only `channel` (a `FEATURE_POLAR_WEIGHTINGS_*_DEG` index), or
/// every channel when it is `None`.
fn set_weightings(cam: &Camera, channel: Option<usize>) -> anyhow::Result<()> {
    let mut weights = [0.0f32; 4];
    match channel {
        Some(channel) => weights[channel] = 100.0,
        None => weights.fill(100.0),
    }
    cam.set_feature(FEATURE_POLAR_WEIGHTINGS, FEATURE_FLAG_MANUAL, &weights)?;
    Ok(())
}

fn snapshot(cam: &Camera, path: &Path) -> anyhow::Result<()> {
    let mut buf = vec![0u8; cam.raw_image_size()?];
    anyhow::ensure!(!buf.is_empty(), "could not determine the raw image size");
    cam.set_stream_state(START_STREAM)?;
    let mut frame = cam.get_next_frame(&mut buf);
    for _ in 1..MAX_NUM_TRIES {
        if frame.is_ok() {
            break;
        }
        frame = cam.get_next_frame(&mut buf);
    }
    cam.set_stream_state(STOP_STREAM)?;
    let (_, desc) = frame?;

    let (_, encoded) = cam.library().format_image(&buf, &desc, IMAGE_FORMAT_BMP)?;
    std::fs::write(path, &encoded)?;
    println!("Saved image to '{}'", path.display());
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let file_root = std::env::args().nth(1).unwrap_or_else(|| "snapshot".into());

    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    if !is_polar_camera(&cam)? {
        anyhow::bail!("this is not a polar camera");
    }
    cam.set_feature(
        FEATURE_PIXEL_FORMAT,
        FEATURE_FLAG_MANUAL,
        &[PIXEL_FORMAT_POLAR4_12 as f32],
    )?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    for (channel, ending) in [
        (Some(FEATURE_POLAR_WEIGHTINGS_0_DEG), "0deg"),
        (Some(FEATURE_POLAR_WEIGHTINGS_45_DEG), "45deg"),
        (Some(FEATURE_POLAR_WEIGHTINGS_90_DEG), "90deg"),
        (Some(FEATURE_POLAR_WEIGHTINGS_135_DEG), "135deg"),
        (None, "all"),
    ] {
        set_weightings(&cam, channel)?;
        snapshot(&cam, &Path::new(OUTPUT_DIR).join(format!("{file_root}_{ending}.bmp")))?;
    }

    cam.uninitialize()?;
    Ok(())
}
