//! Capture one frame and save it in each of the native encoded formats.
//!
//! Usage: get_snapshot [FILE_ROOT]

use std::path::Path;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const MAX_NUM_TRIES: usize = 4;
const OUTPUT_DIR: &str = "getSnapshot";

fn get_raw_image(cam: &Camera, buf: &mut [u8]) -> anyhow::Result<FRAME_DESC> {
    cam.set_stream_state(START_STREAM)?;
    let mut result = None;
    for attempt in 0..MAX_NUM_TRIES {
        match cam.get_next_frame(buf) {
            Ok((_, desc)) => {
                result = Some(Ok(desc));
                break;
            }
            Err(e) if e.is_timeout() => {
                tracing::warn!("attempt {}: {e}", attempt + 1);
            }
            Err(e) => {
                result = Some(Err(e));
                break;
            }
        }
    }
    cam.set_stream_state(STOP_STREAM)?;
    match result {
        Some(r) => Ok(r?),
        None => anyhow::bail!("no frame after {MAX_NUM_TRIES} attempts"),
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let file_root = std::env::args().nth(1).unwrap_or_else(|| "snapshot".into());

    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let mut buf = vec![0u8; cam.raw_image_size()?];
    let desc = get_raw_image(&cam, &mut buf)?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    for (format, ext) in [
        (IMAGE_FORMAT_JPEG, "jpg"),
        (IMAGE_FORMAT_BMP, "bmp"),
        (IMAGE_FORMAT_TIFF, "tiff"),
        (IMAGE_FORMAT_PSD, "psd"),
    ] {
        let (_, encoded) = lib.format_image(&buf, &desc, format)?;
        let path = Path::new(OUTPUT_DIR).join(format!("{file_root}.{ext}"));
        std::fs::write(&path, &encoded)?;
        println!("Saved image to '{}'", path.display());
    }

    cam.uninitialize()?;
    Ok(())
}
