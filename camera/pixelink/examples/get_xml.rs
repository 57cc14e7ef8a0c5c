use pixelink::{Camera, PixelinkLibrary};

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    let (_, cam) = Camera::initialize(lib, 0, 0)?;
    let (_, xml) = cam.get_camera_xml()?;
    println!("{xml}");
    Ok(())
}
