//! Print the descriptor and the current value of every feature the first
//! camera supports.

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let (_, features) = cam.get_camera_features(FEATURE_ALL)?;
    for feature in features.features.iter() {
        if !feature.flags.is_present() {
            continue;
        }
        println!(
            "{} ({}): {}",
            feature.name(),
            feature.id,
            feature.flags.names().join(" | ")
        );
        for (i, p) in feature.params.iter().enumerate() {
            println!("  param {i}: min {} max {}", p.min, p.max);
        }
        // GPIO and similar features need a selector; index 1 always exists.
        let current = if feature.id == FEATURE_GPIO {
            cam.get_feature_with_selector(feature.id, 1.0)
        } else {
            cam.get_feature(feature.id)
        };
        match current {
            Ok((_, (flags, values))) => {
                println!("  current {values:?} ({})", flags.names().join(" | "))
            }
            Err(e) => println!("  current value unavailable: {e}"),
        }
    }

    cam.uninitialize()?;
    Ok(())
}
