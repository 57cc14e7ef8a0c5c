use pixelink::PixelinkLibrary;

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let lib = PixelinkLibrary::global()?;
    if let Some(path) = lib.path() {
        println!("Pixelink API loaded from {}", path.display());
    }

    let (_, cameras) = lib.get_number_cameras()?;
    println!("Found {} camera(s)", cameras.len());
    for cam in cameras.iter() {
        println!(
            "  serial {} mac {} ip {} ({} Mbps){}",
            cam.serial_number,
            cam.mac_string(),
            cam.ip_address,
            cam.link_speed,
            if cam.is_accessible() {
                ""
            } else {
                " not accessible"
            }
        );
    }
    Ok(())
}
