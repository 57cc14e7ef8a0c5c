mod common;

use std::net::Ipv4Addr;

use pixelink::sys::*;
use pixelink::{Error, PixelinkLibrary};
use test_log::test;

use common::{count_calls, fake_library, reset, with_state};

#[test]
fn cameras_are_enumerated() {
    reset();
    let lib = fake_library();
    let (code, cameras) = lib.get_number_cameras().unwrap();
    assert!(code.is_success());
    assert_eq!(cameras.len(), 2);
    assert_eq!(cameras[1].serial_number, 700_001);
    assert_eq!(cameras[1].ip_address, Ipv4Addr::new(192, 168, 0, 11));
    assert_eq!(cameras[0].mac_string(), "00:50:C2:00:00:00");
    assert_eq!(cameras[0].link_speed, 1000);
    assert!(cameras[0].is_accessible());
    assert_eq!(count_calls("PxLGetNumberCamerasEx"), 2);
}

#[test]
fn no_controllers_means_one_call() {
    reset();
    let lib = fake_library();
    let (_, controllers) = lib.get_number_controllers().unwrap();
    assert!(controllers.is_empty());
    assert_eq!(count_calls("PxLGetNumberControllers"), 1);
}

#[test]
fn format_image_returns_encoded_bytes() {
    reset();
    let lib = fake_library();
    let desc = FRAME_DESC::new();
    let frame = vec![0u8; 16];
    let (_, encoded) = lib.format_image(&frame, &desc, IMAGE_FORMAT_BMP).unwrap();
    assert_eq!(encoded, common::ENCODED);

    let err = lib.format_image(&frame, &desc, 0x77).unwrap_err();
    assert_eq!(err.pxl_error().unwrap().code, ApiInvalidParameterError);
    // Two calls for the success, one for the failure.
    assert_eq!(count_calls("PxLFormatImage"), 3);
}

#[test]
fn short_frame_is_not_formatted() {
    reset();
    let lib = fake_library();
    let mut desc = FRAME_DESC::new();
    desc.Roi.fWidth = 1280.0;
    desc.Roi.fHeight = 1024.0;
    desc.PixelFormat.fValue = PIXEL_FORMAT_MONO8 as f32;
    match lib.format_image(&[0u8; 1], &desc, IMAGE_FORMAT_BMP) {
        Err(Error::FrameTooShort { len, expected }) => {
            assert_eq!(len, 1);
            assert_eq!(expected, 1280 * 1024);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(count_calls("PxLFormatImage"), 0);

    let frame = vec![0u8; 1280 * 1024];
    let (_, encoded) = lib.format_image(&frame, &desc, IMAGE_FORMAT_BMP).unwrap();
    assert_eq!(encoded, common::ENCODED);
}

#[test]
fn format_clip_passes_file_names() {
    reset();
    let lib = fake_library();
    lib.format_clip("in.h264", "out.mp4", CLIP_ENCODING_H264, CLIP_FORMAT_MP4)
        .unwrap();
    assert_eq!(
        with_state(|s| s.clip_files.clone()),
        vec!["in.h264".to_string(), "out.mp4".to_string()]
    );
    assert!(matches!(
        lib.format_clip("in\0", "out", CLIP_ENCODING_PDS, CLIP_FORMAT_AVI),
        Err(Error::NulError { .. })
    ));
}

#[test]
fn ip_address_is_marshaled() {
    reset();
    let lib = fake_library();
    lib.set_camera_ip_address(
        [0x00, 0x50, 0xC2, 0x11, 0x22, 0x33],
        Ipv4Addr::new(10, 0, 0, 7),
        Ipv4Addr::new(255, 255, 255, 0),
        Ipv4Addr::new(10, 0, 0, 1),
        true,
    )
    .unwrap();
    lib.set_actions(ACTION_FRAME_TRIGGER, 0.0).unwrap();
    let settings = with_state(|s| s.ip_settings.clone());
    assert_eq!(
        settings,
        vec![([0x00, 0x50, 0xC2, 0x11, 0x22, 0x33], [10, 0, 0, 7], 1)]
    );
}

#[test]
fn missing_library_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("libPxLApi.so");
    match PixelinkLibrary::from_dynamic_lib_path(&path) {
        Err(Error::Load { source }) => {
            assert!(matches!(source, LoadError::Library { .. }));
        }
        Err(e) => panic!("unexpected error {e}"),
        Ok(_) => panic!("loaded a library that does not exist"),
    }
}

#[test]
fn fake_library_has_no_path() {
    let lib = fake_library();
    assert!(lib.path().is_none());
    assert!(lib.version().is_none());
    assert!(format!("{lib:?}").starts_with("PixelinkLibrary"));
}
