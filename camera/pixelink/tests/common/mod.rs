//! A fake Pixelink API living in the test process.
//!
//! Every entry point records its name. State is per thread; tests call
//! [reset] first so nothing leaks between them when run on one thread.

#![allow(dead_code, non_snake_case)]

use std::cell::RefCell;
use std::ffi::{CStr, c_char, c_void};
use std::mem::size_of;
use std::sync::atomic::{AtomicUsize, Ordering};

use pixelink::sys::*;

#[derive(Default)]
pub struct FakeState {
    pub calls: Vec<&'static str>,
    pub next_frame_rc: Option<PXL_RETURN_CODE>,
    pub camera_features_size_rc: Option<PXL_RETURN_CODE>,
    pub gain_hdr_mode: Option<u32>,
    pub set_features: Vec<(u32, u32, Vec<f32>)>,
    pub delivered_frame: Vec<u8>,
    pub callback_rc: Option<U32>,
    pub camera_names: Vec<String>,
    pub preview_titles: Vec<(String, U32, bool)>,
    pub ip_settings: Vec<([u8; 6], [u8; 4], U32)>,
    pub clip_files: Vec<String>,
    pub uninitialize_rc: Option<PXL_RETURN_CODE>,
    /// Returned, once, by the next callback registration instead of
    /// accepting it.
    pub registration_rc: Option<PXL_RETURN_CODE>,
    pub frame_registration: Option<(*mut c_void, Option<PxLDataProcessFunction>)>,
    pub event_registration: Option<(*mut c_void, Option<PxLEventProcessFunction>)>,
}

thread_local! {
    static STATE: RefCell<FakeState> = RefCell::new(FakeState::default());
}

pub fn with_state<R>(f: impl FnOnce(&mut FakeState) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

pub fn reset() {
    with_state(|s| *s = FakeState::default());
}

fn record(name: &'static str) {
    with_state(|s| s.calls.push(name));
}

pub fn calls() -> Vec<&'static str> {
    with_state(|s| s.calls.clone())
}

pub fn count_calls(name: &str) -> usize {
    with_state(|s| s.calls.iter().filter(|c| **c == name).count())
}

static NEXT_HANDLE: AtomicUsize = AtomicUsize::new(0x1000);

pub const XML: &str = "<RegisterDescription ModelName=\"PL-D7512\"/>";
pub const FRAME_NUMBER: U32 = 77;

unsafe extern "system" fn PxLAssignController(_h: HANDLE, _serial: U32) -> PXL_RETURN_CODE {
    record("PxLAssignController");
    ApiNoControllerError
}

unsafe extern "system" fn PxLCreateDescriptor(
    _h: HANDLE,
    descriptor: *mut HANDLE,
    _mode: U32,
) -> PXL_RETURN_CODE {
    record("PxLCreateDescriptor");
    unsafe { *descriptor = 0xD0 as HANDLE };
    ApiSuccess
}

unsafe extern "system" fn PxLFormatClipEx(
    input: *const c_char,
    output: *const c_char,
    _input_encoding: U32,
    _output_format: U32,
) -> PXL_RETURN_CODE {
    record("PxLFormatClipEx");
    let input = unsafe { CStr::from_ptr(input) }.to_string_lossy().into_owned();
    let output = unsafe { CStr::from_ptr(output) }.to_string_lossy().into_owned();
    with_state(|s| {
        s.clip_files.push(input);
        s.clip_files.push(output);
    });
    ApiSuccess
}

pub const ENCODED: &[u8] = b"BM-fake-image";

unsafe extern "system" fn PxLFormatImage(
    _src: *const c_void,
    desc: *const FRAME_DESC,
    format: U32,
    dst: *mut c_void,
    size: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLFormatImage");
    if desc.is_null() || format > IMAGE_FORMAT_PNG {
        return ApiInvalidParameterError;
    }
    if dst.is_null() {
        unsafe { *size = ENCODED.len() as U32 };
        return ApiSuccess;
    }
    if (unsafe { *size } as usize) < ENCODED.len() {
        return ApiBufferTooSmall;
    }
    unsafe { std::ptr::copy_nonoverlapping(ENCODED.as_ptr(), dst as *mut u8, ENCODED.len()) };
    ApiSuccess
}

unsafe extern "system" fn PxLGetActions(
    _h: HANDLE,
    timestamp: *mut f64,
    count: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLGetActions");
    unsafe {
        *timestamp = 12.5;
        *count = 1;
    }
    ApiSuccess
}

/// Two features: exposure with one parameter, ROI with two.
unsafe extern "system" fn PxLGetCameraFeatures(
    _h: HANDLE,
    feature_id: U32,
    buf: *mut CAMERA_FEATURES,
    size: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLGetCameraFeatures");
    if let Some(rc) = with_state(|s| s.camera_features_size_rc) {
        return rc;
    }
    if feature_id != FEATURE_ALL {
        return ApiInvalidParameterError;
    }
    let header = size_of::<CAMERA_FEATURES>();
    let feature = size_of::<CAMERA_FEATURE>();
    let param = size_of::<FEATURE_PARAM>();
    let total = header + 2 * feature + 3 * param;
    if buf.is_null() {
        unsafe { *size = total as U32 };
        return ApiSuccess;
    }
    if (unsafe { *size } as usize) < total {
        return ApiBufferTooSmall;
    }
    unsafe {
        let base = buf as *mut u8;
        let features = base.add(header) as *mut CAMERA_FEATURE;
        let params = base.add(header + 2 * feature) as *mut FEATURE_PARAM;
        params.write(FEATURE_PARAM {
            fMinValue: 0.000_1,
            fMaxValue: 2.0,
        });
        params.add(1).write(FEATURE_PARAM {
            fMinValue: 0.0,
            fMaxValue: 1280.0,
        });
        params.add(2).write(FEATURE_PARAM {
            fMinValue: 0.0,
            fMaxValue: 1024.0,
        });
        features.write(CAMERA_FEATURE {
            uFeatureId: FEATURE_SHUTTER,
            uFlags: FEATURE_FLAG_PRESENCE | FEATURE_FLAG_MANUAL | FEATURE_FLAG_AUTO,
            uNumberOfParameters: 1,
            pParams: params,
        });
        features.add(1).write(CAMERA_FEATURE {
            uFeatureId: FEATURE_ROI,
            uFlags: FEATURE_FLAG_PRESENCE | FEATURE_FLAG_MANUAL,
            uNumberOfParameters: 2,
            pParams: params.add(1),
        });
        buf.write(CAMERA_FEATURES {
            uSize: total as U32,
            uNumberOfFeatures: 2,
            pFeatures: features,
        });
    }
    ApiSuccess
}

fn fill_c_str(dst: &mut [c_char], src: &str) {
    for (d, s) in dst.iter_mut().zip(src.bytes()) {
        *d = s as c_char;
    }
}

unsafe extern "system" fn PxLGetCameraInfoEx(
    _h: HANDLE,
    info: *mut CAMERA_INFO,
    size: U32,
) -> PXL_RETURN_CODE {
    record("PxLGetCameraInfoEx");
    if size as usize != size_of::<CAMERA_INFO>() {
        return ApiInvalidParameterError;
    }
    let info = unsafe { &mut *info };
    fill_c_str(&mut info.VendorName, "Pixelink");
    fill_c_str(&mut info.ModelName, "PL-D7512");
    fill_c_str(&mut info.SerialNumber, "700123");
    fill_c_str(&mut info.FirmwareVersion, "1.2.3");
    ApiSuccess
}

unsafe extern "system" fn PxLGetCameraXML(
    _h: HANDLE,
    buf: *mut c_void,
    size: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLGetCameraXML");
    let bytes_with_nul = XML.len() + 1;
    if buf.is_null() {
        unsafe { *size = bytes_with_nul as U32 };
        return ApiSuccess;
    }
    unsafe {
        std::ptr::copy_nonoverlapping(XML.as_ptr(), buf as *mut u8, XML.len());
        *(buf as *mut u8).add(XML.len()) = 0;
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetClip(
    h: HANDLE,
    num_frames: U32,
    file_name: *const c_char,
    done: Option<PxLTerminationFunction>,
) -> PXL_RETURN_CODE {
    record("PxLGetClip");
    let file_name = unsafe { CStr::from_ptr(file_name) }.to_string_lossy().into_owned();
    with_state(|s| s.clip_files.push(file_name));
    // Finish immediately, before returning.
    if let Some(done) = done {
        unsafe { done(h, num_frames, ApiSuccessWithFrameLoss) };
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetCurrentTimestamp(_h: HANDLE, ts: *mut f64) -> PXL_RETURN_CODE {
    record("PxLGetCurrentTimestamp");
    unsafe { *ts = 3.25 };
    ApiSuccess
}

unsafe extern "system" fn PxLGetEncodedClip(
    h: HANDLE,
    num_frames: U32,
    file_name: *const c_char,
    info: *const CLIP_ENCODING_INFO,
    done: Option<PxLTerminationFunction>,
) -> PXL_RETURN_CODE {
    record("PxLGetEncodedClip");
    if unsafe { (*info).uStreamEncoding } != CLIP_ENCODING_H264 {
        return ApiUnsupportedClipEncoding;
    }
    let file_name = unsafe { CStr::from_ptr(file_name) }.to_string_lossy().into_owned();
    with_state(|s| s.clip_files.push(file_name));
    if let Some(done) = done {
        unsafe { done(h, num_frames, ApiSuccess) };
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetErrorReport(_h: HANDLE, report: *mut ERROR_REPORT) -> PXL_RETURN_CODE {
    record("PxLGetErrorReport");
    let report = unsafe { &mut *report };
    report.uReturnCode = ApiCameraTimeoutError;
    fill_c_str(&mut report.strFunctionName, "PxLGetNextFrame");
    fill_c_str(&mut report.strReturnCode, "ApiCameraTimeoutError");
    fill_c_str(&mut report.strReport, "no frame within the timeout");
    ApiSuccess
}

fn feature_values(feature_id: U32, gain_hdr_mode: Option<u32>) -> Option<(U32, Vec<f32>)> {
    let present = FEATURE_FLAG_PRESENCE | FEATURE_FLAG_MANUAL;
    match feature_id {
        FEATURE_SHUTTER => Some((present | FEATURE_FLAG_AUTO, vec![0.02])),
        FEATURE_ROI => Some((present, vec![0.0, 0.0, 640.0, 480.0])),
        FEATURE_PIXEL_ADDRESSING => Some((present, vec![2.0, 0.0, 2.0, 2.0])),
        FEATURE_PIXEL_FORMAT => Some((present, vec![PIXEL_FORMAT_MONO12_PACKED as f32])),
        FEATURE_GAIN_HDR => gain_hdr_mode.map(|m| (present, vec![m as f32])),
        FEATURE_GPIO => Some((present | FEATURE_FLAG_OFF, vec![0.0; 6])),
        _ => None,
    }
}

unsafe extern "system" fn PxLGetFeature(
    _h: HANDLE,
    feature_id: U32,
    flags: *mut U32,
    n: *mut U32,
    params: *mut F32,
) -> PXL_RETURN_CODE {
    record("PxLGetFeature");
    let hdr = with_state(|s| s.gain_hdr_mode);
    let Some((f, values)) = feature_values(feature_id, hdr) else {
        return ApiNotSupportedError;
    };
    unsafe { *flags = f };
    if params.is_null() {
        unsafe { *n = values.len() as U32 };
        return ApiSuccess;
    }
    if (unsafe { *n } as usize) < values.len() {
        return ApiBufferTooSmall;
    }
    let out = unsafe { std::slice::from_raw_parts_mut(params, values.len()) };
    if feature_id == FEATURE_GPIO {
        // The GPIO index selected by the caller is kept; mode follows it.
        let index = out[0];
        out.copy_from_slice(&values);
        out[FEATURE_GPIO_PARAM_GPIO_INDEX] = index;
        out[FEATURE_GPIO_PARAM_MODE] = index + 1.0;
    } else {
        out.copy_from_slice(&values);
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetNextFrame(
    _h: HANDLE,
    buffer_size: U32,
    buf: *mut c_void,
    desc: *mut FRAME_DESC,
) -> PXL_RETURN_CODE {
    record("PxLGetNextFrame");
    if let Some(rc) = with_state(|s| s.next_frame_rc.take()) {
        return rc;
    }
    let desc = unsafe { &mut *desc };
    if desc.uSize as usize != size_of::<FRAME_DESC>() {
        return ApiInvalidParameterError;
    }
    desc.uFrameNumber = FRAME_NUMBER;
    desc.Roi.fWidth = 4.0;
    desc.Roi.fHeight = 2.0;
    desc.PixelFormat.fValue = PIXEL_FORMAT_MONO8 as f32;
    if !buf.is_null() {
        unsafe { std::ptr::write_bytes(buf as *mut u8, 0xAB, buffer_size as usize) };
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetNumberCamerasEx(
    info: *mut CAMERA_ID_INFO,
    count: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLGetNumberCamerasEx");
    if info.is_null() {
        unsafe { *count = 2 };
        return ApiSuccess;
    }
    let n = unsafe { *count } as usize;
    let cameras = unsafe { std::slice::from_raw_parts_mut(info, n) };
    if cameras[0].StructSize as usize != size_of::<CAMERA_ID_INFO>() {
        return ApiInvalidParameterError;
    }
    for (i, camera) in cameras.iter_mut().enumerate() {
        camera.CameraSerialNum = 700_000 + i as u32;
        camera.CameraMac.MacAddr = [0x00, 0x50, 0xC2, 0, 0, i as u8];
        camera.CameraIpAddress.u8Address = [192, 168, 0, 10 + i as u8];
        camera.CameraLinkSpeed = 1000;
    }
    ApiSuccess
}

unsafe extern "system" fn PxLGetNumberControllers(
    info: *mut CONTROLLER_INFO,
    struct_size: U32,
    count: *mut U32,
) -> PXL_RETURN_CODE {
    record("PxLGetNumberControllers");
    if struct_size as usize != size_of::<CONTROLLER_INFO>() {
        return ApiInvalidParameterError;
    }
    if info.is_null() {
        unsafe { *count = 0 };
    }
    ApiSuccess
}

unsafe extern "system" fn PxLInitializeEx(
    _serial: U32,
    handle: *mut HANDLE,
    _flags: U32,
) -> PXL_RETURN_CODE {
    record("PxLInitializeEx");
    let h = NEXT_HANDLE.fetch_add(1, Ordering::Relaxed);
    unsafe { *handle = h as HANDLE };
    ApiSuccess
}

unsafe extern "system" fn PxLLoadSettings(_h: HANDLE, channel: U32) -> PXL_RETURN_CODE {
    record("PxLLoadSettings");
    if channel > 1 { ApiOutOfRangeError } else { ApiSuccess }
}

unsafe extern "system" fn PxLRemoveDescriptor(_h: HANDLE, _d: HANDLE) -> PXL_RETURN_CODE {
    record("PxLRemoveDescriptor");
    ApiSuccess
}

unsafe extern "system" fn PxLResetPreviewWindow(_h: HANDLE) -> PXL_RETURN_CODE {
    record("PxLResetPreviewWindow");
    ApiSuccess
}

unsafe extern "system" fn PxLSaveSettings(_h: HANDLE, channel: U32) -> PXL_RETURN_CODE {
    record("PxLSaveSettings");
    if channel > 1 { ApiOutOfRangeError } else { ApiSuccess }
}

unsafe extern "system" fn PxLSetActions(_action: U32, _ts: f64) -> PXL_RETURN_CODE {
    record("PxLSetActions");
    ApiSuccess
}

fn call_frame_function(h: HANDLE, context: *mut c_void, function: PxLDataProcessFunction) {
    let mut desc = FRAME_DESC::new();
    desc.Roi.fWidth = 4.0;
    desc.Roi.fHeight = 2.0;
    desc.PixelFormat.fValue = PIXEL_FORMAT_MONO8 as f32;
    let mut frame: Vec<u8> = (0..8).collect();
    let rc = unsafe {
        function(
            h,
            frame.as_mut_ptr() as *mut c_void,
            PIXEL_FORMAT_MONO8,
            &mut desc,
            context,
        )
    };
    with_state(|s| {
        s.delivered_frame = frame;
        s.callback_rc = Some(rc);
    });
}

fn call_event_function(h: HANDLE, context: *mut c_void, function: PxLEventProcessFunction) {
    let data = [1u8, 2, 3, 4];
    let rc = unsafe {
        function(
            h,
            EVENT_CAMERA_DISCONNECTED,
            99.5,
            data.len() as U32,
            data.as_ptr() as *const c_void,
            context,
        )
    };
    with_state(|s| s.callback_rc = Some(rc));
}

/// Deliver a frame to the currently registered data callback, as the
/// camera's stream would. Returns false when none is registered.
pub fn deliver_frame(h: HANDLE) -> bool {
    match with_state(|s| s.frame_registration) {
        Some((context, Some(function))) => {
            call_frame_function(h, context, function);
            true
        }
        _ => false,
    }
}

/// Raise an event on the currently registered event callback.
pub fn raise_event(h: HANDLE) -> bool {
    match with_state(|s| s.event_registration) {
        Some((context, Some(function))) => {
            call_event_function(h, context, function);
            true
        }
        _ => false,
    }
}

/// Delivers one 4x2 MONO8 frame to the new callback before returning.
unsafe extern "system" fn PxLSetCallback(
    h: HANDLE,
    _callback_type: U32,
    context: *mut c_void,
    function: Option<PxLDataProcessFunction>,
) -> PXL_RETURN_CODE {
    record("PxLSetCallback");
    if let Some(rc) = with_state(|s| s.registration_rc.take()) {
        return rc;
    }
    with_state(|s| s.frame_registration = Some((context, function)));
    if let Some(function) = function {
        call_frame_function(h, context, function);
    }
    ApiSuccess
}

unsafe extern "system" fn PxLSetCameraIpAddress(
    mac: *const PXL_MAC_ADDRESS,
    ip: *const PXL_IP_ADDRESS,
    _mask: *const PXL_IP_ADDRESS,
    _gateway: *const PXL_IP_ADDRESS,
    persistent: U32,
) -> PXL_RETURN_CODE {
    record("PxLSetCameraIpAddress");
    let entry = unsafe { ((*mac).MacAddr, (*ip).u8Address, persistent) };
    with_state(|s| s.ip_settings.push(entry));
    ApiSuccess
}

unsafe extern "system" fn PxLSetCameraName(_h: HANDLE, name: *const c_char) -> PXL_RETURN_CODE {
    record("PxLSetCameraName");
    let name = unsafe { CStr::from_ptr(name) }.to_string_lossy().into_owned();
    with_state(|s| s.camera_names.push(name));
    ApiSuccess
}

/// Delivers one camera disconnected event with four data bytes.
unsafe extern "system" fn PxLSetEventCallback(
    h: HANDLE,
    _event_id: U32,
    context: *mut c_void,
    function: Option<PxLEventProcessFunction>,
) -> PXL_RETURN_CODE {
    record("PxLSetEventCallback");
    if let Some(rc) = with_state(|s| s.registration_rc.take()) {
        return rc;
    }
    with_state(|s| s.event_registration = Some((context, function)));
    if let Some(function) = function {
        call_event_function(h, context, function);
    }
    ApiSuccess
}

unsafe extern "system" fn PxLSetFeature(
    _h: HANDLE,
    feature_id: U32,
    flags: U32,
    n: U32,
    params: *const F32,
) -> PXL_RETURN_CODE {
    record("PxLSetFeature");
    let values = unsafe { std::slice::from_raw_parts(params, n as usize) }.to_vec();
    with_state(|s| s.set_features.push((feature_id, flags, values)));
    if feature_id == FEATURE_SHUTTER {
        ApiSuccessParametersChanged
    } else {
        ApiSuccess
    }
}

unsafe extern "system" fn PxLSetPreviewSettings(
    _h: HANDLE,
    title: *const c_char,
    style: U32,
    _left: U32,
    _top: U32,
    _width: U32,
    _height: U32,
    parent: HWND,
    _child_id: U32,
) -> PXL_RETURN_CODE {
    record("PxLSetPreviewSettings");
    let title = unsafe { CStr::from_ptr(title) }.to_string_lossy().into_owned();
    with_state(|s| s.preview_titles.push((title, style, parent.is_null())));
    ApiSuccess
}

unsafe extern "system" fn PxLSetPreviewState(
    _h: HANDLE,
    _state: U32,
    hwnd: *mut HWND,
) -> PXL_RETURN_CODE {
    record("PxLSetPreviewState");
    unsafe { *hwnd = 0xAA as HWND };
    ApiSuccess
}

/// Reports `PREVIEW_RESTORED` to the new change callback before returning.
unsafe extern "system" fn PxLSetPreviewStateEx(
    h: HANDLE,
    _state: U32,
    hwnd: *mut HWND,
    context: *mut c_void,
    function: Option<PxLChangeFunction>,
) -> PXL_RETURN_CODE {
    record("PxLSetPreviewStateEx");
    unsafe { *hwnd = 0xBB as HWND };
    if let Some(function) = function {
        let rc = unsafe { function(h, PREVIEW_RESTORED, context) };
        with_state(|s| s.callback_rc = Some(rc));
    }
    ApiSuccess
}

unsafe extern "system" fn PxLSetStreamState(_h: HANDLE, state: U32) -> PXL_RETURN_CODE {
    record("PxLSetStreamState");
    if state > STOP_STREAM {
        ApiInvalidParameterError
    } else {
        ApiSuccess
    }
}

unsafe extern "system" fn PxLUnassignController(_h: HANDLE, _serial: U32) -> PXL_RETURN_CODE {
    record("PxLUnassignController");
    ApiNoControllerError
}

unsafe extern "system" fn PxLUninitialize(_h: HANDLE) -> PXL_RETURN_CODE {
    record("PxLUninitialize");
    with_state(|s| s.uninitialize_rc).unwrap_or(ApiSuccess)
}

unsafe extern "system" fn PxLUpdateDescriptor(_h: HANDLE, _d: HANDLE, _mode: U32) -> PXL_RETURN_CODE {
    record("PxLUpdateDescriptor");
    ApiSuccess
}

pub fn fake_functions() -> PxLFunctions {
    PxLFunctions {
        PxLAssignController,
        PxLCreateDescriptor,
        PxLFormatClipEx,
        PxLFormatImage,
        PxLGetActions,
        PxLGetCameraFeatures,
        PxLGetCameraInfoEx,
        PxLGetCameraXML,
        PxLGetClip,
        PxLGetCurrentTimestamp,
        PxLGetEncodedClip,
        PxLGetErrorReport,
        PxLGetFeature,
        PxLGetNextFrame,
        PxLGetNumberCamerasEx,
        PxLGetNumberControllers,
        PxLInitializeEx,
        PxLLoadSettings,
        PxLRemoveDescriptor,
        PxLResetPreviewWindow,
        PxLSaveSettings,
        PxLSetActions,
        PxLSetCallback,
        PxLSetCameraIpAddress,
        PxLSetCameraName,
        PxLSetEventCallback,
        PxLSetFeature,
        PxLSetPreviewSettings,
        PxLSetPreviewState,
        PxLSetPreviewStateEx,
        PxLSetStreamState,
        PxLUnassignController,
        PxLUninitialize,
        PxLUpdateDescriptor,
    }
}

pub fn fake_library() -> pixelink::PixelinkLibrary {
    pixelink::PixelinkLibrary::from_api(PxLApi::from_functions(fake_functions()))
}
