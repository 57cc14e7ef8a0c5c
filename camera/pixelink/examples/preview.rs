//! Show the preview window, first plainly and then with a window state
//! change callback.

use std::io::BufRead;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn wait_for_enter(msg: &str) -> anyhow::Result<()> {
    println!("{msg}");
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(())
}

fn change_name(change: u32) -> &'static str {
    match change {
        PREVIEW_CLOSED => "closed",
        PREVIEW_MINIMIZED => "minimized",
        PREVIEW_RESTORED => "restored",
        PREVIEW_ACTIVATED => "activated",
        PREVIEW_DEACTIVATED => "deactivated",
        PREVIEW_RESIZED => "resized",
        PREVIEW_MOVED => "moved",
        _ => "unknown",
    }
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    cam.set_preview_settings(
        "Pixelink preview",
        0,
        64,
        64,
        640,
        480,
        std::ptr::null_mut(),
        0,
    )?;
    cam.set_stream_state(START_STREAM)?;

    cam.set_preview_state(START_PREVIEW)?;
    wait_for_enter("Press enter to stop the preview")?;
    cam.set_preview_state(STOP_PREVIEW)?;

    wait_for_enter("Press enter to start the preview with a change callback")?;
    cam.set_preview_state_ex(START_PREVIEW, |change| {
        println!("preview window {} ({change})", change_name(change));
    })?;
    wait_for_enter("Press enter to stop the preview and exit")?;
    cam.set_preview_state_ex(STOP_PREVIEW, |_| {})?;

    cam.set_stream_state(STOP_STREAM)?;
    cam.reset_preview_window()?;
    cam.uninitialize()?;
    Ok(())
}
