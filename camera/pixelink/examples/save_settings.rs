//! Store an exposure in the user settings channel, then go back to the
//! factory defaults.
//!
//! The camera must be power cycled to load the stored channel. This program
//! waits for the camera to reappear after each power cycle.

use std::io::BufRead;
use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const WAIT_TIME: Duration = Duration::from_secs(30);
const POLL_INTERVAL: Duration = Duration::from_secs(1);

fn exposure(cam: &Camera) -> anyhow::Result<f32> {
    let (_, (_, params)) = cam.get_feature(FEATURE_EXPOSURE)?;
    params
        .get(FEATURE_EXPOSURE_PARAM_VALUE)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("camera reported no exposure value"))
}

fn wait_for_enter(msg: &str) -> anyhow::Result<String> {
    println!("{msg}");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn reopen(lib: &PixelinkLibrary) -> anyhow::Result<Camera<'_>> {
    let start = std::time::Instant::now();
    loop {
        match Camera::initialize(lib, 0, 0) {
            Ok((_, cam)) => return Ok(cam),
            Err(e) if start.elapsed() < WAIT_TIME => {
                tracing::debug!("camera not back yet: {e}");
                std::thread::sleep(POLL_INTERVAL);
            }
            Err(e) => return Err(e.into()),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;

    let answer = wait_for_enter(
        "This restores the camera to its factory default settings. Ok to proceed (y/n)?",
    )?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    cam.load_settings(PXL_SETTINGS_FACTORY)?;
    let factory = exposure(&cam)?;
    println!(" Exposure: {:5.2} ms <-- factory default value", factory * 1000.0);

    let user = factory * 1.1;
    cam.set_feature(FEATURE_EXPOSURE, FEATURE_FLAG_MANUAL, &[user])?;
    cam.save_settings(PXL_SETTINGS_USER)?;
    cam.uninitialize()?;
    wait_for_enter(&format!(
        " Exposure: {:5.2} ms <-- user set value. Power cycle the camera and press enter.",
        user * 1000.0
    ))?;

    let cam = reopen(lib)?;
    let stored = exposure(&cam)?;
    println!(" Exposure: {:5.2} ms <-- non-volatile user set value", stored * 1000.0);
    if stored == factory {
        anyhow::bail!("the user settings were not loaded at power up");
    }

    cam.load_settings(PXL_SETTINGS_FACTORY)?;
    let factory = exposure(&cam)?;
    cam.save_settings(PXL_SETTINGS_USER)?;
    cam.uninitialize()?;
    wait_for_enter(&format!(
        " Exposure: {:5.2} ms <-- factory default value. Power cycle the camera and press enter.",
        factory * 1000.0
    ))?;

    let cam = reopen(lib)?;
    let stored = exposure(&cam)?;
    println!(" Exposure: {:5.2} ms <-- non-volatile factory default value", stored * 1000.0);
    cam.uninitialize()?;
    Ok(())
}
