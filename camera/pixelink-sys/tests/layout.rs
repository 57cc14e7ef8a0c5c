use std::mem::{offset_of, size_of};

use pixelink_sys::*;

fn put_u32(buf: &mut [u8], offset: usize, v: u32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_ne_bytes());
}

fn put_f32(buf: &mut [u8], offset: usize, v: f32) {
    buf[offset..offset + 4].copy_from_slice(&v.to_ne_bytes());
}

fn read_as<T: Copy>(buf: &[u8]) -> T {
    assert_eq!(buf.len(), size_of::<T>());
    unsafe { std::ptr::read_unaligned(buf.as_ptr() as *const T) }
}

fn as_bytes<T: Copy>(v: &T) -> Vec<u8> {
    // Only used for types without padding.
    unsafe { std::slice::from_raw_parts(v as *const T as *const u8, size_of::<T>()) }.to_vec()
}

#[test]
fn small_struct_sizes() {
    assert_eq!(size_of::<FEATURE_PARAM>(), 8);
    assert_eq!(size_of::<PXL_MAC_ADDRESS>(), 6);
    assert_eq!(size_of::<PXL_IP_ADDRESS>(), 4);
    assert_eq!(size_of::<CLIP_ENCODING_INFO>(), 16);
    assert_eq!(size_of::<ERROR_REPORT>(), 324);
    assert_eq!(size_of::<CAMERA_INFO>(), 723);
    assert_eq!(size_of::<CONTROLLER_INFO>(), 528);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn pointer_struct_sizes() {
    assert_eq!(size_of::<CAMERA_FEATURE>(), 24);
    assert_eq!(offset_of!(CAMERA_FEATURE, pParams), 16);
    assert_eq!(size_of::<CAMERA_FEATURES>(), 16);
    assert_eq!(offset_of!(CAMERA_FEATURES, pFeatures), 8);
}

#[test]
fn camera_id_info_layout() {
    assert_eq!(size_of::<CAMERA_ID_INFO>(), 56);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraSerialNum), 4);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraMac), 8);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraIpAddress), 16);
    assert_eq!(offset_of!(CAMERA_ID_INFO, NicIpMask), 32);
    assert_eq!(offset_of!(CAMERA_ID_INFO, NicAccessMode), 36);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraIpAssignmentType), 40);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraProperties), 47);
    assert_eq!(offset_of!(CAMERA_ID_INFO, ControllingIpAddress), 48);
    assert_eq!(offset_of!(CAMERA_ID_INFO, CameraLinkSpeed), 52);
}

#[test]
fn camera_id_info_from_native_bytes() {
    let mut buf = vec![0u8; size_of::<CAMERA_ID_INFO>()];
    put_u32(&mut buf, 0, 56);
    put_u32(&mut buf, 4, 123_456);
    buf[8..14].copy_from_slice(&[0x00, 0x50, 0xc2, 0x01, 0x02, 0x03]);
    buf[16..20].copy_from_slice(&[192, 168, 1, 20]);
    buf[40] = PXL_IP_STATIC_PERSISTENT;
    buf[47] = CAMERA_PROPERTY_IP_UNREACHABLE;
    put_u32(&mut buf, 52, 1000);

    let info: CAMERA_ID_INFO = read_as(&buf);
    assert_eq!(info.StructSize, 56);
    assert_eq!(info.CameraSerialNum, 123_456);
    assert_eq!(info.CameraMac.MacAddr, [0x00, 0x50, 0xc2, 0x01, 0x02, 0x03]);
    assert_eq!(unsafe { info.CameraIpAddress.u8Address }, [192, 168, 1, 20]);
    assert_eq!(
        unsafe { info.CameraIpAddress.u32Address },
        u32::from_ne_bytes([192, 168, 1, 20])
    );
    assert_eq!(info.CameraIpAssignmentType, PXL_IP_STATIC_PERSISTENT);
    assert_eq!(info.CameraProperties, CAMERA_PROPERTY_IP_UNREACHABLE);
    assert_eq!(info.CameraLinkSpeed, 1000);
}

#[test]
fn camera_info_layout() {
    assert_eq!(offset_of!(CAMERA_INFO, ModelName), 33);
    assert_eq!(offset_of!(CAMERA_INFO, Description), 66);
    assert_eq!(offset_of!(CAMERA_INFO, SerialNumber), 322);
    assert_eq!(offset_of!(CAMERA_INFO, FirmwareVersion), 355);
    assert_eq!(offset_of!(CAMERA_INFO, FPGAVersion), 367);
    assert_eq!(offset_of!(CAMERA_INFO, CameraName), 379);
    assert_eq!(offset_of!(CAMERA_INFO, XMLVersion), 635);
    assert_eq!(offset_of!(CAMERA_INFO, BootloadVersion), 647);
    assert_eq!(offset_of!(CAMERA_INFO, LensDescription), 659);
}

#[test]
fn controller_info_layout() {
    assert_eq!(offset_of!(CONTROLLER_INFO, COMPort), 12);
    assert_eq!(offset_of!(CONTROLLER_INFO, USBVirtualPort), 76);
    assert_eq!(offset_of!(CONTROLLER_INFO, VendorName), 80);
    assert_eq!(offset_of!(CONTROLLER_INFO, Description), 208);
    assert_eq!(offset_of!(CONTROLLER_INFO, FirmwareVersion), 464);
}

#[test]
fn error_report_round_trip() {
    let mut report = ERROR_REPORT {
        uReturnCode: ApiCameraTimeoutError,
        ..Default::default()
    };
    for (dst, src) in report.strFunctionName.iter_mut().zip(b"PxLGetNextFrame") {
        *dst = *src as _;
    }
    report.strReport[255] = 7;

    let bytes = as_bytes(&report);
    assert_eq!(&bytes[0..4], &ApiCameraTimeoutError.to_ne_bytes());
    assert_eq!(&bytes[4..19], b"PxLGetNextFrame");
    assert_eq!(bytes[323], 7);

    let back: ERROR_REPORT = read_as(&bytes);
    assert_eq!(back.uReturnCode, report.uReturnCode);
    assert_eq!(back.strFunctionName, report.strFunctionName);
    assert_eq!(back.strReport, report.strReport);
}

#[test]
fn clip_encoding_info_round_trip() {
    let info = CLIP_ENCODING_INFO {
        uStreamEncoding: CLIP_ENCODING_H264,
        uDecimationFactor: 2,
        playbackFrameRate: 25.0,
        playbackBitRate: 2_000_000,
    };
    let bytes = as_bytes(&info);
    assert_eq!(&bytes[8..12], &25.0f32.to_ne_bytes());
    let back: CLIP_ENCODING_INFO = read_as(&bytes);
    assert_eq!(back, info);
}

#[test]
fn frame_desc_layout() {
    assert_eq!(size_of::<FRAME_DESC>(), 624);
    assert_eq!(offset_of!(FRAME_DESC, Brightness), 12);
    assert_eq!(offset_of!(FRAME_DESC, Trigger), 60);
    assert_eq!(offset_of!(FRAME_DESC, GPIO), 96);
    assert_eq!(offset_of!(FRAME_DESC, FrameRate), 416);
    assert_eq!(offset_of!(FRAME_DESC, Roi), 420);
    assert_eq!(offset_of!(FRAME_DESC, Flip), 436);
    assert_eq!(offset_of!(FRAME_DESC, PixelFormat), 448);
    assert_eq!(offset_of!(FRAME_DESC, ExtendedShutter), 452);
    assert_eq!(offset_of!(FRAME_DESC, AutoROI), 468);
    assert_eq!(offset_of!(FRAME_DESC, WhiteShading), 488);
    assert_eq!(offset_of!(FRAME_DESC, TriggerNumber), 516);
    assert_eq!(offset_of!(FRAME_DESC, ImageProcessing), 520);
    assert_eq!(offset_of!(FRAME_DESC, PixelAddressingValue), 524);
    assert_eq!(offset_of!(FRAME_DESC, dFrameTime), 536);
    assert_eq!(offset_of!(FRAME_DESC, u64FrameNumber), 544);
    assert_eq!(offset_of!(FRAME_DESC, SharpnessScoreParams), 560);
    assert_eq!(offset_of!(FRAME_DESC, HDRInfo), 584);
    assert_eq!(offset_of!(FRAME_DESC, PolarInfo), 596);
    assert_eq!(FRAME_DESC::new().uSize, 624);
}

#[test]
fn frame_desc_from_native_bytes() {
    let mut buf = vec![0u8; size_of::<FRAME_DESC>()];
    put_u32(&mut buf, 0, 624);
    put_f32(&mut buf, 4, 1.5);
    put_u32(&mut buf, 8, 42);
    put_f32(&mut buf, 96 + 4 * 3, GPIO_MODE_PULSE as f32);
    put_f32(&mut buf, 420 + 8, 1280.0);
    put_f32(&mut buf, 420 + 12, 1024.0);
    put_f32(&mut buf, 448, PIXEL_FORMAT_MONO12_PACKED as f32);
    put_f32(&mut buf, 524, 2.0);
    put_f32(&mut buf, 528, 4.0);
    buf[536..544].copy_from_slice(&12345.25f64.to_ne_bytes());
    buf[544..552].copy_from_slice(&(u32::MAX as u64 + 7).to_ne_bytes());
    put_u32(&mut buf, 584, FEATURE_GAIN_HDR_MODE_INTERLEAVED);
    put_f32(&mut buf, 588, 1.0);
    put_f32(&mut buf, 592, 8.0);
    put_u32(&mut buf, 596, CFA_BGGR);
    put_u32(&mut buf, 616, HSV_AS_DEGREE);

    let fd: FRAME_DESC = read_as(&buf);
    assert_eq!(fd.uSize, 624);
    assert_eq!(fd.fFrameTime, 1.5);
    assert_eq!(fd.uFrameNumber, 42);
    assert_eq!(fd.GPIO.fMode[3], GPIO_MODE_PULSE as f32);
    assert_eq!(fd.Roi.fWidth, 1280.0);
    assert_eq!(fd.Roi.fHeight, 1024.0);
    assert_eq!(fd.PixelFormat.fValue, PIXEL_FORMAT_MONO12_PACKED as f32);
    assert_eq!(fd.PixelAddressingValue.fHorizontal, 2.0);
    assert_eq!(fd.PixelAddressingValue.fVertical, 4.0);
    assert_eq!(fd.dFrameTime, 12345.25);
    assert_eq!(fd.u64FrameNumber, u32::MAX as u64 + 7);
    assert_eq!(fd.HDRInfo.uMode, FEATURE_GAIN_HDR_MODE_INTERLEAVED);
    assert_eq!(fd.HDRInfo.fBrightGain, 8.0);
    assert_eq!(fd.PolarInfo.uCFA, CFA_BGGR);
    assert_eq!(fd.PolarInfo.uHSVInterpretation, HSV_AS_DEGREE);

    // Copying through the declared layout keeps every field.
    let copy: FRAME_DESC = unsafe { std::ptr::read_unaligned(&fd as *const FRAME_DESC) };
    assert_eq!(copy, fd);
}

#[test]
fn constants_match_native_headers() {
    assert_eq!(FEATURE_ALL, 0xFFFF_FFFF);
    assert_eq!(FEATURE_FLAG_MOD_BITS, 30);
    assert_eq!(WS_OVERLAPPEDWINDOW, 0x00CF_0000);
    assert_eq!(PXL_DATA_STREAM_MAGIC_NUMBER, 67_372_036);
    assert_eq!(ApiUnknownError, -2_147_483_647);
    assert_eq!(ApiOutOfRangeError, -2_147_483_626);
    assert_eq!(ApiStreamExistingError, -1_879_048_191);
    assert_eq!(ApiInvokedFromIncorrectThreadError, -1_879_048_145);
    assert_eq!(IMAGE_FORMAT_RAW_BGR24, 4130);
}
