//! Print the identification strings of the first camera.

use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = match Camera::initialize(lib, 0, 0) {
        Ok(r) => r,
        Err(e) => anyhow::bail!("unable to initialize a camera: {e}"),
    };

    match cam.get_camera_info() {
        Ok((_, info)) => {
            println!("Name -------------- '{}'", info.camera_name);
            println!("Description ------- '{}'", info.description);
            println!("Vendor ------------ '{}'", info.vendor_name);
            println!("Serial number ----- '{}'", info.serial_number);
            println!("Firmware version -- '{}'", info.firmware_version);
            println!("FPGA version ------ '{}'", info.fpga_version);
            println!("XML version ------- '{}'", info.xml_version);
            println!("Bootload version -- '{}'", info.bootload_version);
            println!("Model name -------- '{}'", info.model_name);
            println!("Lens description -- '{}'", info.lens_description);
        }
        Err(e) => {
            let (_, report) = cam.get_error_report()?;
            eprintln!(
                "{e}: {} returned {}: {}",
                report.function_name, report.return_code_name, report.report
            );
        }
    }

    cam.uninitialize()?;
    Ok(())
}
