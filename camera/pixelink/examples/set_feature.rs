//! Center a region of interest of half the maximum size, then change the
//! exposure and put it back.

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;

    let (_, features) = cam.get_camera_features(FEATURE_ROI)?;
    let Some(roi) = features.get(FEATURE_ROI) else {
        anyhow::bail!("camera reported no ROI descriptor");
    };
    anyhow::ensure!(
        roi.params.len() >= FEATURE_ROI_NUM_PARAMS,
        "ROI descriptor has {} parameters",
        roi.params.len()
    );
    let max_width = roi.params[FEATURE_ROI_PARAM_WIDTH].max;
    let max_height = roi.params[FEATURE_ROI_PARAM_HEIGHT].max;
    println!("This camera has a max ROI of {max_width} x {max_height}");

    let mut params = [0.0f32; FEATURE_ROI_NUM_PARAMS];
    params[FEATURE_ROI_PARAM_LEFT] = max_width / 4.0;
    params[FEATURE_ROI_PARAM_TOP] = max_height / 4.0;
    params[FEATURE_ROI_PARAM_WIDTH] = max_width / 2.0;
    params[FEATURE_ROI_PARAM_HEIGHT] = max_height / 2.0;
    let (code, ()) = cam.set_feature(FEATURE_ROI, FEATURE_FLAG_MANUAL, &params)?;

    let (_, (_, roi)) = cam.get_feature(FEATURE_ROI)?;
    println!(
        "ROI set to {} x {} ({}, {})",
        roi[FEATURE_ROI_PARAM_WIDTH],
        roi[FEATURE_ROI_PARAM_HEIGHT],
        roi[FEATURE_ROI_PARAM_LEFT],
        roi[FEATURE_ROI_PARAM_TOP]
    );
    if code.code() == ApiSuccessParametersChanged {
        println!("Warning: the camera adjusted the requested ROI");
    }

    let (_, (flags, exposure)) = cam.get_feature(FEATURE_EXPOSURE)?;
    let original = exposure
        .get(FEATURE_EXPOSURE_PARAM_VALUE)
        .copied()
        .ok_or_else(|| anyhow::anyhow!("camera reported no exposure value"))?;
    let (code, ()) = cam.set_feature(
        FEATURE_EXPOSURE,
        flags.with_mode(FEATURE_FLAG_MANUAL).bits(),
        &[original * 2.0],
    )?;
    println!("exposure doubled from {original} s: {code}");
    cam.set_feature(FEATURE_EXPOSURE, flags.bits(), &exposure)?;

    cam.uninitialize()?;
    Ok(())
}
