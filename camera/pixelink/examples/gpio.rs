//! Mirror a general purpose input onto a general purpose output.
//!
//! GPIO 2 is driven as a normal output whose polarity follows the state of
//! the input, which is polled twice a second.
//!
//! Usage: gpio [NUM_POLLS]

use std::time::Duration;

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

const POLL_PERIOD: Duration = Duration::from_millis(500);
const GPO_INDEX: f32 = 2.0;

/// Index of the GPIO usable as an input, if the camera has both an input
/// and an output.
fn find_gpi(cam: &Camera) -> anyhow::Result<Option<f32>> {
    let (_, features) = cam.get_camera_features(FEATURE_GPIO)?;
    let Some(gpio) = features.get(FEATURE_GPIO) else {
        return Ok(None);
    };
    if !gpio.flags.is_present() || gpio.params.len() < 2 {
        return Ok(None);
    }
    let index_max = gpio.params[FEATURE_GPIO_PARAM_GPIO_INDEX].max;
    if index_max < 2.0 || gpio.params[FEATURE_GPIO_PARAM_MODE].max < GPIO_MODE_INPUT as f32 {
        return Ok(None);
    }
    // PL-X cameras put the input on GPIO 3, the others on GPIO 1.
    Ok(Some(if index_max == 3.0 { 3.0 } else { 1.0 }))
}

fn set_gpio(cam: &Camera, index: f32, mode: u32, polarity: f32) -> anyhow::Result<()> {
    let mut params = [0.0f32; FEATURE_GPIO_NUM_PARAMS];
    params[FEATURE_GPIO_PARAM_GPIO_INDEX] = index;
    params[FEATURE_GPIO_PARAM_MODE] = mode as f32;
    params[FEATURE_GPIO_PARAM_POLARITY] = polarity;
    cam.set_feature(FEATURE_GPIO, FEATURE_FLAG_MANUAL, &params)?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let num_polls: usize = match std::env::args().nth(1) {
        Some(n) => n.parse()?,
        None => 20,
    };

    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    let Some(gpi) = find_gpi(&cam)? else {
        anyhow::bail!("camera does not have both a GPI and a GPO");
    };
    set_gpio(&cam, gpi, GPIO_MODE_INPUT, 0.0)?;
    set_gpio(&cam, GPO_INDEX, GPIO_MODE_NORMAL, 0.0)?;

    let mut last = None;
    for _ in 0..num_polls {
        let (_, (_, params)) = cam.get_feature_with_selector(FEATURE_GPIO, gpi)?;
        let on = params
            .get(FEATURE_GPIO_MODE_INPUT_PARAM_STATUS)
            .is_some_and(|status| *status != 0.0);
        if last != Some(on) {
            set_gpio(&cam, GPO_INDEX, GPIO_MODE_NORMAL, if on { 1.0 } else { 0.0 })?;
            last = Some(on);
        }
        println!("GPI is {}", if on { "On" } else { "Off" });
        std::thread::sleep(POLL_PERIOD);
    }

    cam.uninitialize()?;
    Ok(())
}
