//! Assign an IP address to the single GigE camera visible to this host.
//!
//! Usage: set_ip_address IP SUBNET_MASK GATEWAY [--persistent]

use std::net::Ipv4Addr;

use pixelink::PixelinkLibrary;

fn same_subnet(a: Ipv4Addr, b: Ipv4Addr, mask: Ipv4Addr) -> bool {
    (a.to_bits() & mask.to_bits()) == (b.to_bits() & mask.to_bits())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init();
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        anyhow::bail!("Usage: set_ip_address <IP> <SUBNET_MASK> <GATEWAY> [--persistent]");
    }
    let ip: Ipv4Addr = args[1].parse()?;
    let mask: Ipv4Addr = args[2].parse()?;
    let gateway: Ipv4Addr = args[3].parse()?;
    let persistent = args.get(4).is_some_and(|a| a == "--persistent");

    let lib = PixelinkLibrary::global()?;
    let (_, cameras) = lib.get_number_cameras()?;
    if cameras.len() != 1 {
        anyhow::bail!("will only run if exactly one camera is detected");
    }
    let cam = &cameras[0];
    if cam.nic_ip_address.is_unspecified() {
        anyhow::bail!("camera {} is not a GigE camera", cam.serial_number);
    }
    if !same_subnet(ip, cam.nic_ip_address, cam.nic_ip_mask) {
        anyhow::bail!(
            "{ip} is not on the subnet of the network card ({}/{})",
            cam.nic_ip_address,
            cam.nic_ip_mask
        );
    }

    lib.set_camera_ip_address(cam.mac, ip, mask, gateway, persistent)?;
    println!("Camera {} ({}) now at {ip}", cam.serial_number, cam.mac_string());
    Ok(())
}
