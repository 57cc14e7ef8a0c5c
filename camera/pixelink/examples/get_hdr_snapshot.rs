//! Capture one image in each gain HDR mode and save them as bitmaps.
//!
//! Usage: get_hdr_snapshot [FILE_ROOT]

use std::path::Path;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const MAX_NUM_TRIES: usize = 4;
const OUTPUT_DIR: &str = "getHDRSnapshot";

fn supports_hdr(cam: &Camera) -> anyhow::Result<bool> {
    let (_, features) = cam.get_camera_features(FEATURE_GAIN_HDR)?;
    Ok(features
        .get(FEATURE_GAIN_HDR)
        .is_some_and(|f| f.flags.is_present()))
}

fn set_hdr_mode(cam: &Camera, mode: u32) -> anyhow::Result<()> {
    let flags = if mode == FEATURE_GAIN_HDR_MODE_NONE {
        FEATURE_FLAG_OFF
    } else {
        FEATURE_FLAG_MANUAL
    };
    cam.set_feature(FEATURE_GAIN_HDR, flags, &[mode as f32])?;
    Ok(())
}

fn snapshot(cam: &Camera, path: &Path) -> anyhow::Result<()> {
    // Twice the single image size in interleaved mode.
    let mut buf = vec![0u8; cam.raw_image_size()?];
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
    if !supports_hdr(&cam)? {
        anyhow::bail!("camera does not support gain HDR");
    }

    std::fs::create_dir_all(OUTPUT_DIR)?;
    for (mode, ending) in [
        (FEATURE_GAIN_HDR_MODE_CAMERA, "CameraHdr.bmp"),
        (FEATURE_GAIN_HDR_MODE_INTERLEAVED, "InterleavedHdr.bmp"),
    ] {
        set_hdr_mode(&cam, mode)?;
        snapshot(&cam, &Path::new(OUTPUT_DIR).join(format!("{file_root}{ending}")))?;
    }
    set_hdr_mode(&cam, FEATURE_GAIN_HDR_MODE_NONE)?;

    cam.uninitialize()?;
    Ok(())
}
