//! Measure the frame rate a camera delivers over 20 seconds, either by
//! grabbing frames or by counting frame callbacks.
//!
//! Usage: measure_frame_rate [grab|callback]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const MEASUREMENT_TIME: Duration = Duration::from_secs(20);

fn camera_gone(e: &pixelink::Error) -> bool {
    e.pxl_error()
        .is_some_and(|e| e.code == ApiNoCameraError || e.code == ApiNoCameraAvailableError)
}

fn measure_grabs(cam: &Camera) -> anyhow::Result<()> {
    let mut buf = vec![0u8; cam.raw_image_size()?];
    let (mut good, mut bad) = (0usize, 0usize);
    // Grab in growing batches at first to keep the clock reads cheap.
    let mut per_check = 1usize;
    cam.set_stream_state(START_STREAM)?;
    let start = Instant::now();
    let elapsed = loop {
        for _ in 0..per_check {
            match cam.get_next_frame(&mut buf) {
                Ok(_) => good += 1,
                Err(e) if camera_gone(&e) => {
                    let _ = cam.set_stream_state(STOP_STREAM);
                    anyhow::bail!("camera is gone: {e}");
                }
                Err(_) => {
                    bad += 1;
                    break;
                }
            }
        }
        let elapsed = start.elapsed();
        if elapsed >= MEASUREMENT_TIME {
            break elapsed;
        }
        if elapsed <= Duration::from_millis(200) {
            per_check <<= 1;
        }
    };
    cam.set_stream_state(STOP_STREAM)?;
    println!(
        "Received {} frames ({bad} bad), or {:8.2} frames/second. {per_check} grabs per time check",
        good + bad,
        (good + bad) as f64 / elapsed.as_secs_f64()
    );
    Ok(())
}

fn measure_callbacks(cam: &Camera) -> anyhow::Result<()> {
    let count = Arc::new(AtomicUsize::new(0));
    let count2 = count.clone();
    cam.set_callback(CALLBACK_FRAME, move |_data, _format, _desc| {
        count2.fetch_add(1, Ordering::Relaxed);
    })?;
    cam.set_stream_state(START_STREAM)?;
    std::thread::sleep(MEASUREMENT_TIME);
    let frames = count.load(Ordering::Relaxed);
    cam.set_stream_state(STOP_STREAM)?;
    cam.clear_callback(CALLBACK_FRAME)?;
    println!(
        "Received {frames} frames, or {:8.2} frames/second",
        frames as f64 / MEASUREMENT_TIME.as_secs_f64()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let mode = std::env::args().nth(1).unwrap_or_else(|| "grab".into());

    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    println!(
        "Counting the number of images over a {} second period...",
        MEASUREMENT_TIME.as_secs()
    );
    match mode.as_str() {
        "grab" => measure_grabs(&cam)?,
        "callback" => measure_callbacks(&cam)?,
        other => anyhow::bail!("unknown mode {other}, expected grab or callback"),
    }
    cam.uninitialize()?;
    Ok(())
}
