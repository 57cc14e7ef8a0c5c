//! Register a preview callback that paints a white square in the middle of
//! each displayed frame.

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary, bytes_per_pixel, pixel_format_name};

/// Set the center fifth of the image (in both directions) to 0xFF.
fn paint_center(data: &mut [u8], data_format: u32, desc: &FRAME_DESC) {
    // Delivered rows are decimated by the pixel addressing value.
    let width = (desc.Roi.fWidth / desc.PixelAddressingValue.fHorizontal.max(1.0)) as usize;
    let height = (desc.Roi.fHeight / desc.PixelAddressingValue.fVertical.max(1.0)) as usize;
    let bpp = bytes_per_pixel(data_format);
    if bpp < 1.0 || bpp.fract() != 0.0 {
        // Packed formats do not map pixels to whole bytes.
        return;
    }
    let bpp = bpp as usize;
    let (row0, row1) = (height * 2 / 5, height * 3 / 5);
    let (col0, col1) = (width * 2 / 5, width * 3 / 5);
    for row in row0..row1 {
        let start = (row * width + col0) * bpp;
        let end = (row * width + col1) * bpp;
        if let Some(pixels) = data.get_mut(start..end) {
            pixels.fill(0xFF);
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    cam.set_callback(CALLBACK_PREVIEW, |data, data_format, desc| {
        println!(
            "frame {} at {:.3} s: {} bytes of {}",
            desc.uFrameNumber,
            desc.fFrameTime,
            data.len(),
            pixel_format_name(data_format)
        );
        paint_center(data, data_format, desc);
    })?;

    cam.set_stream_state(START_STREAM)?;
    cam.set_preview_state(START_PREVIEW)?;
    std::thread::sleep(Duration::from_secs(10));
    cam.set_preview_state(STOP_PREVIEW)?;
    cam.set_stream_state(STOP_STREAM)?;
    cam.clear_callback(CALLBACK_PREVIEW)?;

    cam.uninitialize()?;
    Ok(())
}
