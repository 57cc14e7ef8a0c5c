use std::ffi::CString;

use pixelink_sys::*;

use crate::callbacks::{self, CallbackSlots};
use crate::error::{ReturnCode, check};
use crate::types::{CameraFeatures, CameraInfo, ErrorReport, FeatureFlags};
use crate::{ApiResult, PixelinkLibrary, Result, size_then_fill, u32_len};

/// An initialized camera.
///
/// Dropping the camera uninitializes it. Closures registered as callbacks
/// live as long as the camera.
pub struct Camera<'lib> {
    pub(crate) handle: HANDLE,
    is_open: bool,
    pub(crate) lib: &'lib PixelinkLibrary,
    pub(crate) callbacks: CallbackSlots,
}

unsafe impl<'lib> Send for Camera<'lib> {}

fn _test_camera_is_send() {
    // Compile-time test to ensure Camera implements Send trait.
    fn implements<T: Send>() {}
    implements::<Camera>();
}

impl<'lib> std::fmt::Debug for Camera<'lib> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        write!(fmt, "Camera {{")?;
        write!(fmt, " self.handle {:p},", self.handle)?;
        write!(fmt, "}}")?;
        Ok(())
    }
}

impl<'lib> Camera<'lib> {
    /// Open the camera with `serial_number`, or the first camera found when
    /// it is 0. `flags` is a combination of `PXL_MONITOR_ACCESS_ONLY` and
    /// `PXL_ISSUE_STREAM_STOP`.
    pub fn initialize(
        lib: &'lib PixelinkLibrary,
        serial_number: u32,
        flags: u32,
    ) -> ApiResult<Self> {
        let mut handle: HANDLE = std::ptr::null_mut();
        let code = pxl_call!((lib.api.PxLInitializeEx)(serial_number, &mut handle, flags))?;
        let result = Self {
            handle,
            is_open: true,
            lib,
            callbacks: CallbackSlots::default(),
        };
        tracing::debug!("initialized {:?}", result);
        Ok((code, result))
    }

    /// Close the camera.
    ///
    /// The handle is given up even when the call fails. In that case the
    /// registered closures are leaked, as the API may still call them.
    pub fn uninitialize(mut self) -> ApiResult<()> {
        let mut code = ReturnCode(ApiSuccess);
        if self.is_open {
            self.is_open = false; // prevent uninitializing again on drop
            code = pxl_call!((self.lib.api.PxLUninitialize)(self.handle)).inspect_err(|_| {
                self.callbacks.leak();
            })?;
        }
        Ok((code, ()))
    }

    pub fn handle(&self) -> HANDLE {
        self.handle
    }

    pub fn library(&self) -> &'lib PixelinkLibrary {
        self.lib
    }

    pub fn assign_controller(&self, controller_serial_number: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLAssignController)(
            self.handle,
            controller_serial_number
        ))?;
        Ok((code, ()))
    }

    pub fn unassign_controller(&self, controller_serial_number: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLUnassignController)(
            self.handle,
            controller_serial_number
        ))?;
        Ok((code, ()))
    }

    /// Create a descriptor. `update_mode` is `PXL_UPDATE_CAMERA` or
    /// `PXL_UPDATE_HOST`.
    pub fn create_descriptor(&self, update_mode: u32) -> ApiResult<HANDLE> {
        let mut descriptor: HANDLE = std::ptr::null_mut();
        let code = pxl_call!((self.lib.api.PxLCreateDescriptor)(
            self.handle,
            &mut descriptor,
            update_mode
        ))?;
        Ok((code, descriptor))
    }

    pub fn remove_descriptor(&self, descriptor: HANDLE) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLRemoveDescriptor)(self.handle, descriptor))?;
        Ok((code, ()))
    }

    pub fn update_descriptor(&self, descriptor: HANDLE, update_mode: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLUpdateDescriptor)(
            self.handle,
            descriptor,
            update_mode
        ))?;
        Ok((code, ()))
    }

    /// Scheduled action timestamp and the number of pending actions.
    pub fn get_actions(&self) -> ApiResult<(f64, u32)> {
        let mut timestamp = 0.0f64;
        let mut count = 0u32;
        let code = pxl_call!((self.lib.api.PxLGetActions)(
            self.handle,
            &mut timestamp,
            &mut count
        ))?;
        Ok((code, (timestamp, count)))
    }

    /// Descriptors of one feature, or of all of them with `FEATURE_ALL`.
    pub fn get_camera_features(&self, feature_id: u32) -> ApiResult<CameraFeatures> {
        // The block holds pointers into itself, so keep it 8 byte aligned.
        let (code, (buf, _size)) = size_then_fill(
            |buf: *mut u64, size: &mut u32| {
                pxl_call_no_err!((self.lib.api.PxLGetCameraFeatures)(
                    self.handle,
                    feature_id,
                    buf as *mut CAMERA_FEATURES,
                    size
                ))
            },
            |size| (size as usize).div_ceil(std::mem::size_of::<u64>()),
        )?;
        if buf.len() * std::mem::size_of::<u64>() < std::mem::size_of::<CAMERA_FEATURES>() {
            return Ok((code, CameraFeatures::default()));
        }
        let features = unsafe { CameraFeatures::from_raw(buf.as_ptr() as *const CAMERA_FEATURES) };
        Ok((code, features))
    }

    pub fn get_camera_info(&self) -> ApiResult<CameraInfo> {
        let mut info = CAMERA_INFO::default();
        let code = pxl_call!((self.lib.api.PxLGetCameraInfoEx)(
            self.handle,
            &mut info,
            std::mem::size_of::<CAMERA_INFO>() as u32
        ))?;
        Ok((code, CameraInfo::from(&info)))
    }

    /// The camera's GenICam style XML description.
    pub fn get_camera_xml(&self) -> ApiResult<String> {
        let (code, (mut buf, size)) = size_then_fill(
            |buf: *mut u8, size: &mut u32| {
                pxl_call_no_err!((self.lib.api.PxLGetCameraXML)(
                    self.handle,
                    buf as *mut _,
                    size
                ))
            },
            |size| size as usize,
        )?;
        buf.truncate(size as usize);
        while buf.last() == Some(&0) {
            buf.pop();
        }
        let xml = std::str::from_utf8(&buf)?.to_string();
        Ok((code, xml))
    }

    /// Seconds since the camera's clock started.
    pub fn get_current_timestamp(&self) -> ApiResult<f64> {
        let mut timestamp = 0.0f64;
        let code = pxl_call!((self.lib.api.PxLGetCurrentTimestamp)(
            self.handle,
            &mut timestamp
        ))?;
        Ok((code, timestamp))
    }

    /// Details about the last failed call on this camera.
    pub fn get_error_report(&self) -> ApiResult<ErrorReport> {
        let mut report = ERROR_REPORT::default();
        let code = pxl_call!((self.lib.api.PxLGetErrorReport)(self.handle, &mut report))?;
        Ok((code, ErrorReport::from(&report)))
    }

    /// Current flags and parameter values of a feature.
    pub fn get_feature(&self, feature_id: u32) -> ApiResult<(FeatureFlags, Vec<f32>)> {
        self.get_feature_inner(feature_id, None)
    }

    /// Like [Camera::get_feature], for features whose first parameter
    /// selects what is read, e.g. the GPIO index for `FEATURE_GPIO`.
    pub fn get_feature_with_selector(
        &self,
        feature_id: u32,
        selector: f32,
    ) -> ApiResult<(FeatureFlags, Vec<f32>)> {
        self.get_feature_inner(feature_id, Some(selector))
    }

    fn get_feature_inner(
        &self,
        feature_id: u32,
        selector: Option<f32>,
    ) -> ApiResult<(FeatureFlags, Vec<f32>)> {
        let mut flags = 0u32;
        let (code, (mut params, n)) = size_then_fill(
            |buf: *mut f32, n: &mut u32| {
                if !buf.is_null() {
                    if let Some(selector) = selector {
                        unsafe { *buf = selector };
                    }
                }
                pxl_call_no_err!((self.lib.api.PxLGetFeature)(
                    self.handle,
                    feature_id,
                    &mut flags,
                    n,
                    buf
                ))
            },
            |n| n as usize,
        )?;
        params.truncate(n as usize);
        Ok((code, (FeatureFlags(flags), params)))
    }

    /// Wait for the next frame and copy it into `frame`.
    pub fn get_next_frame(&self, frame: &mut [u8]) -> ApiResult<FRAME_DESC> {
        let buffer_size = u32_len(frame.len())?;
        let mut desc = FRAME_DESC::new();
        let code = pxl_call!((self.lib.api.PxLGetNextFrame)(
            self.handle,
            buffer_size,
            frame.as_mut_ptr() as *mut _,
            &mut desc
        ))?;
        Ok((code, desc))
    }

    /// Wait for the next frame and return only its descriptor.
    pub fn get_next_frame_descriptor(&self) -> ApiResult<FRAME_DESC> {
        let mut desc = FRAME_DESC::new();
        let code = pxl_call!((self.lib.api.PxLGetNextFrame)(
            self.handle,
            u32::MAX,
            std::ptr::null_mut(),
            &mut desc
        ))?;
        Ok((code, desc))
    }

    /// Restore settings from a memory channel. Channel 0 holds the factory
    /// defaults.
    pub fn load_settings(&self, channel: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLLoadSettings)(self.handle, channel))?;
        Ok((code, ()))
    }

    pub fn save_settings(&self, channel: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLSaveSettings)(self.handle, channel))?;
        Ok((code, ()))
    }

    pub fn reset_preview_window(&self) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLResetPreviewWindow)(self.handle))?;
        Ok((code, ()))
    }

    pub fn set_camera_name(&self, name: &str) -> ApiResult<()> {
        let name = CString::new(name)?;
        let code = pxl_call!((self.lib.api.PxLSetCameraName)(self.handle, name.as_ptr()))?;
        Ok((code, ()))
    }

    pub fn set_feature(&self, feature_id: u32, flags: u32, params: &[f32]) -> ApiResult<()> {
        let n = u32_len(params.len())?;
        let code = pxl_call!((self.lib.api.PxLSetFeature)(
            self.handle,
            feature_id,
            flags,
            n,
            params.as_ptr()
        ))?;
        Ok((code, ()))
    }

    /// Configure the preview window.
    ///
    /// Only Windows honors `style` and `parent`; elsewhere they are replaced
    /// with 0 and null.
    #[allow(clippy::too_many_arguments)]
    pub fn set_preview_settings(
        &self,
        title: &str,
        style: u32,
        left: u32,
        top: u32,
        width: u32,
        height: u32,
        parent: HWND,
        child_id: u32,
    ) -> ApiResult<()> {
        let title = CString::new(title)?;
        let (style, parent) = if cfg!(target_os = "windows") {
            (style, parent)
        } else {
            (0, std::ptr::null_mut())
        };
        let code = pxl_call!((self.lib.api.PxLSetPreviewSettings)(
            self.handle,
            title.as_ptr(),
            style,
            left,
            top,
            width,
            height,
            parent,
            child_id
        ))?;
        Ok((code, ()))
    }

    /// Start, pause or stop the preview window. Returns its window handle.
    pub fn set_preview_state(&self, state: u32) -> ApiResult<HWND> {
        let mut hwnd: HWND = std::ptr::null_mut();
        let code = pxl_call!((self.lib.api.PxLSetPreviewState)(self.handle, state, &mut hwnd))?;
        Ok((code, hwnd))
    }

    pub fn set_stream_state(&self, state: u32) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLSetStreamState)(self.handle, state))?;
        Ok((code, ()))
    }

    /// Size in bytes of a frame with the current ROI, pixel addressing,
    /// pixel format and gain HDR settings.
    pub fn raw_image_size(&self) -> Result<usize> {
        let (_, (_, roi)) = self.get_feature(FEATURE_ROI)?;
        let (_, (_, addressing)) = self.get_feature(FEATURE_PIXEL_ADDRESSING)?;
        let (_, (_, format)) = self.get_feature(FEATURE_PIXEL_FORMAT)?;
        // Cameras without gain HDR reject the query.
        let interleaved = match self.get_feature(FEATURE_GAIN_HDR) {
            Ok((_, (_, hdr))) => {
                hdr.first().copied() == Some(FEATURE_GAIN_HDR_MODE_INTERLEAVED as f32)
            }
            Err(_) => false,
        };
        let param = |v: &[f32], i: usize, default: f32| v.get(i).copied().unwrap_or(default);
        // Older cameras only report one symmetric addressing value.
        let value = param(&addressing, FEATURE_PIXEL_ADDRESSING_PARAM_VALUE, 1.0);
        Ok(crate::raw_image_size(
            param(&roi, FEATURE_ROI_PARAM_WIDTH, 0.0),
            param(&roi, FEATURE_ROI_PARAM_HEIGHT, 0.0),
            param(&addressing, FEATURE_PIXEL_ADDRESSING_PARAM_X_VALUE, value),
            param(&addressing, FEATURE_PIXEL_ADDRESSING_PARAM_Y_VALUE, value),
            param(&format, 0, 0.0) as u32,
            interleaved,
        ))
    }
}

impl<'lib> Drop for Camera<'lib> {
    fn drop(&mut self) {
        if self.is_open {
            tracing::debug!("uninitializing {:?} on drop", self);
            if let Err(e) = check(pxl_call_no_err!((self.lib.api.PxLUninitialize)(self.handle))) {
                tracing::error!("failed to uninitialize camera: {e}");
                self.callbacks.leak();
            }
            self.is_open = false;
        }
        callbacks::forget_termination(self.handle);
    }
}
