use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use pixelink::sys::*;
use pixelink::{Camera, PixelinkLibrary};

/// Number of `get_next_frame` attempts before a snapshot gives up.
const MAX_FRAME_TRIES: usize = 4;

#[derive(Debug, Parser)]
#[command(name = "pxl", author, version)]
struct Cli {
    /// Print `list`, `info` and `features` output as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the cameras visible to this host
    List,
    /// Print the identification strings of a camera
    Info {
        /// Camera serial number. Defaults to the first camera found.
        #[arg(short, long, default_value_t = 0)]
        serial: u32,
    },
    /// Print feature descriptors
    Features {
        #[arg(short, long, default_value_t = 0)]
        serial: u32,
        /// Only this feature id. Defaults to all features.
        #[arg(short, long)]
        feature: Option<u32>,
    },
    /// Print the camera XML description
    Xml {
        #[arg(short, long, default_value_t = 0)]
        serial: u32,
    },
    /// Capture one frame and save it encoded
    Snapshot {
        #[arg(short, long, default_value_t = 0)]
        serial: u32,
        #[arg(long, value_enum, default_value_t)]
        format: ImageFormat,
        /// Output filename
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, ValueEnum)]
enum ImageFormat {
    #[default]
    Bmp,
    Tiff,
    Psd,
    Jpeg,
    Png,
}

impl ImageFormat {
    fn code(self) -> u32 {
        match self {
            ImageFormat::Bmp => IMAGE_FORMAT_BMP,
            ImageFormat::Tiff => IMAGE_FORMAT_TIFF,
            ImageFormat::Psd => IMAGE_FORMAT_PSD,
            ImageFormat::Jpeg => IMAGE_FORMAT_JPEG,
            ImageFormat::Png => IMAGE_FORMAT_PNG,
        }
    }
}

fn open(lib: &PixelinkLibrary, serial: u32) -> anyhow::Result<Camera<'_>> {
    let (_, cam) = Camera::initialize(lib, serial, 0)
        .with_context(|| format!("opening camera with serial {serial}"))?;
    Ok(cam)
}

fn list(lib: &PixelinkLibrary, json: bool) -> anyhow::Result<()> {
    let (_, cameras) = lib.get_number_cameras()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&cameras)?);
        return Ok(());
    }
    for cam in cameras.iter() {
        println!(
            "{:>10}  {}  {:<15}  {} Mbps",
            cam.serial_number,
            cam.mac_string(),
            cam.ip_address,
            cam.link_speed
        );
    }
    Ok(())
}

fn info(lib: &PixelinkLibrary, serial: u32, json: bool) -> anyhow::Result<()> {
    let cam = open(lib, serial)?;
    let (_, info) = cam.get_camera_info()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("name:              {}", info.camera_name);
        println!("model:             {}", info.model_name);
        println!("vendor:            {}", info.vendor_name);
        println!("description:       {}", info.description);
        println!("serial number:     {}", info.serial_number);
        println!("firmware version:  {}", info.firmware_version);
        println!("FPGA version:      {}", info.fpga_version);
        println!("XML version:       {}", info.xml_version);
        println!("bootload version:  {}", info.bootload_version);
        println!("lens:              {}", info.lens_description);
    }
    cam.uninitialize()?;
    Ok(())
}

fn features(
    lib: &PixelinkLibrary,
    serial: u32,
    feature: Option<u32>,
    json: bool,
) -> anyhow::Result<()> {
    let cam = open(lib, serial)?;
    let (_, features) = cam.get_camera_features(feature.unwrap_or(FEATURE_ALL))?;
    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        for f in features.features.iter() {
            println!("{:>3} {:<28} {}", f.id, f.name(), f.flags.names().join("|"));
            for p in f.params.iter() {
                println!("      [{}, {}]", p.min, p.max);
            }
        }
    }
    cam.uninitialize()?;
    Ok(())
}

fn xml(lib: &PixelinkLibrary, serial: u32) -> anyhow::Result<()> {
    let cam = open(lib, serial)?;
    let (_, xml) = cam.get_camera_xml()?;
    println!("{xml}");
    cam.uninitialize()?;
    Ok(())
}

fn snapshot(
    lib: &PixelinkLibrary,
    serial: u32,
    format: ImageFormat,
    output: &Path,
) -> anyhow::Result<()> {
    let cam = open(lib, serial)?;
    let mut buf = vec![0u8; cam.raw_image_size()?];

    cam.set_stream_state(START_STREAM)?;
    let mut frame = cam.get_next_frame(&mut buf);
    let mut attempt = 1;
    while attempt < MAX_FRAME_TRIES && frame.as_ref().is_err_and(|e| e.is_timeout()) {
        tracing::warn!("frame attempt {attempt} timed out");
        frame = cam.get_next_frame(&mut buf);
        attempt += 1;
    }
    cam.set_stream_state(STOP_STREAM)?;
    let (_, desc) = frame.context("capturing frame")?;
    tracing::info!(
        "captured frame {} ({} bytes)",
        desc.uFrameNumber,
        pixelink::image_size(&desc)
    );

    let (_, encoded) = lib.format_image(&buf, &desc, format.code())?;
    std::fs::write(output, &encoded)
        .with_context(|| format!("writing {}", output.display()))?;
    println!("saved {:?} image to {}", format, output.display());
    cam.uninitialize()?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let _guard = env_tracing_logger::init_with_default("pxl=info,pixelink=warn");
    let cli = Cli::parse();

    let lib = PixelinkLibrary::global()?;
    if let Some(version) = lib.version() {
        tracing::debug!("Pixelink API version {version}");
    }

    match cli.command {
        Commands::List => list(lib, cli.json),
        Commands::Info { serial } => info(lib, serial, cli.json),
        Commands::Features { serial, feature } => features(lib, serial, feature, cli.json),
        Commands::Xml { serial } => xml(lib, serial),
        Commands::Snapshot {
            serial,
            format,
            output,
        } => snapshot(lib, serial, format, &output),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use test_log::test;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn snapshot_arguments() {
        let cli =
            Cli::try_parse_from(["pxl", "snapshot", "--format", "jpeg", "-s", "42", "a.jpg"])
                .unwrap();
        match cli.command {
            Commands::Snapshot {
                serial,
                format,
                output,
            } => {
                assert_eq!(serial, 42);
                assert_eq!(format.code(), IMAGE_FORMAT_JPEG);
                assert_eq!(output, PathBuf::from("a.jpg"));
            }
            other => panic!("parsed {other:?}"),
        }
    }

    #[test]
    fn json_is_global() {
        let cli = Cli::try_parse_from(["pxl", "list", "--json"]).unwrap();
        assert!(cli.json);
        assert!(matches!(cli.command, Commands::List));
        assert!(Cli::try_parse_from(["pxl"]).is_err());
    }
}
