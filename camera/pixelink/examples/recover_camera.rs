//! Bring a camera left in an unknown state, e.g. streaming after its
//! controlling program crashed, back to its factory defaults.

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;

    // Stopping the stream first lets the control path come up.
    let (_, cam) = Camera::initialize(lib, 0, PXL_ISSUE_STREAM_STOP)?;
    match cam.load_settings(PXL_SETTINGS_FACTORY) {
        Ok(_) => println!("Factory default settings restored"),
        Err(e) => println!("Could not load factory settings: {e}"),
    }
    cam.uninitialize()?;
    Ok(())
}
