//! Commit the camera's current settings, or with `-f` its factory
//! defaults, as the settings it powers up with.
//!
//! Usage: commit_settings [-f]

use std::io::BufRead;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let use_factory_defaults = match std::env::args().nth(1).as_deref() {
        None => false,
        Some("-f") | Some("-F") => true,
        Some(other) => anyhow::bail!(
            "unknown option {other}\nusage: commit_settings [-f]\n  -f  use the factory settings as power on defaults"
        ),
    };

    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let which = if use_factory_defaults {
        "factory default settings"
    } else {
        "current settings"
    };
    println!("WARNING: this commits the camera's {which} as its power up defaults.");
    println!("   -- Ok to proceed (y/n)?");
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    if !answer.trim().eq_ignore_ascii_case("y") {
        return Ok(());
    }

    if use_factory_defaults {
        cam.load_settings(FACTORY_DEFAULTS_MEMORY_CHANNEL)?;
    }
    let (code, ()) = cam.save_settings(PXL_SETTINGS_USER)?;
    println!("save_settings returned {code}");
    cam.uninitialize()?;
    Ok(())
}
