//! Safe wrapper around the Pixelink 4.0 camera API.
//!
//! Every operation returns an [ApiResult]: on success the native return code
//! (which may be an advisory success such as `ApiSuccessParametersChanged`)
//! together with the outputs, on failure an [Error] carrying the native code
//! and no outputs.

use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};

use pixelink_sys::load::{self, ApiVersion, Platform};
use pixelink_sys::*;

macro_rules! pxl_call_no_err {
    ($expr: expr_2021) => {{
        tracing::debug!("calling: {} {}:{}", stringify!($expr), file!(), line!());
        #[allow(unused_unsafe)]
        let rc = unsafe { $expr };
        rc
    }};
}

macro_rules! pxl_call {
    ($expr: expr_2021) => {{
        let rc = pxl_call_no_err!($expr);
        tracing::debug!("  return code: {}", $crate::ReturnCode(rc));
        $crate::error::check(rc)
    }};
}

mod callbacks;
mod camera;
mod error;
mod pixel;
mod types;

pub use callbacks::{EventCallback, FrameCallback, PreviewChangeCallback, TerminationCallback};
pub use camera::Camera;
pub use error::{err_str, ApiResult, Error, PxlError, Result, ReturnCode};
pub use pixel::{bytes_per_pixel, image_size, pixel_format_code, pixel_format_name, raw_image_size};
pub use types::{
    feature_name, CameraFeature, CameraFeatures, CameraIdInfo, CameraInfo, ControllerInfo,
    ErrorReport, FeatureFlags, FeatureParam,
};

pub use pixelink_sys as sys;

/// Two-call pattern for outputs whose size is only known to the API.
///
/// `call` is invoked with a null buffer and must report the required size
/// through its second argument. `count` converts that size into a number of
/// `T` elements. A buffer of that many elements is then allocated and `call`
/// invoked again with it and the reported size. When the reported size means
/// zero elements, no second call is made.
///
/// Returns the code of the last call, the buffer and the size reported by
/// the last call.
pub(crate) fn size_then_fill<T, F, C>(mut call: F, count: C) -> ApiResult<(Vec<T>, u32)>
where
    T: Clone + Default,
    F: FnMut(*mut T, &mut u32) -> PXL_RETURN_CODE,
    C: Fn(u32) -> usize,
{
    let mut size = 0u32;
    let rc = call(std::ptr::null_mut(), &mut size);
    tracing::debug!("  size query: {} size={}", ReturnCode(rc), size);
    let code = error::check(rc)?;
    let n = count(size);
    if n == 0 {
        return Ok((code, (Vec::new(), size)));
    }
    let mut buf = vec![T::default(); n];
    let rc = call(buf.as_mut_ptr(), &mut size);
    tracing::debug!("  fill: {} size={}", ReturnCode(rc), size);
    let code = error::check(rc)?;
    Ok((code, (buf, size)))
}

fn u32_len(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::BufferTooLarge { len })
}

lazy_static::lazy_static! {
    static ref PIXELINK_LIB: std::result::Result<PixelinkLibrary, LoadError> = {
        load::load().map(PixelinkLibrary::from_loaded)
    };
}

/// A loaded Pixelink API.
///
/// Most programs use the process wide instance from [PixelinkLibrary::global].
pub struct PixelinkLibrary {
    api: PxLApi,
    path: Option<PathBuf>,
    version: Option<ApiVersion>,
}

impl PixelinkLibrary {
    /// Locate and load the API for the host OS.
    pub fn new() -> Result<Self> {
        Ok(Self::from_loaded(load::load()?))
    }

    /// The process wide instance, loaded on first use and never unloaded.
    pub fn global() -> Result<&'static Self> {
        PIXELINK_LIB.as_ref().map_err(|e| Error::GlobalLoad { msg: e.to_string() })
    }

    /// Load the API from an explicit path, skipping the platform search
    /// and registration check.
    pub fn from_dynamic_lib_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let api = unsafe { PxLApi::new(path) }?;
        let version = load::HostPlatform::installed_version(path);
        load::check_version(version.as_ref(), &load::HostPlatform::minimum_version());
        Ok(Self {
            api,
            path: Some(path.to_path_buf()),
            version,
        })
    }

    /// Wrap an already resolved function table.
    pub fn from_api(api: PxLApi) -> Self {
        Self {
            api,
            path: None,
            version: None,
        }
    }

    fn from_loaded(loaded: load::LoadedLibrary) -> Self {
        Self {
            api: loaded.api,
            path: Some(loaded.path),
            version: loaded.version,
        }
    }

    pub fn api(&self) -> &PxLApi {
        &self.api
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn version(&self) -> Option<&ApiVersion> {
        self.version.as_ref()
    }

    /// Enumerate the cameras visible to this host.
    pub fn get_number_cameras(&self) -> ApiResult<Vec<CameraIdInfo>> {
        let (code, (raw, count)) = size_then_fill(
            |buf: *mut CAMERA_ID_INFO, count: &mut u32| {
                if !buf.is_null() {
                    // The API reads the struct version from the first element.
                    unsafe { (*buf).StructSize = std::mem::size_of::<CAMERA_ID_INFO>() as u32 };
                }
                pxl_call_no_err!((self.api.PxLGetNumberCamerasEx)(buf, count))
            },
            |count| count as usize,
        )?;
        let cameras = raw
            .iter()
            .take(count as usize)
            .map(CameraIdInfo::from)
            .collect();
        Ok((code, cameras))
    }

    /// Enumerate the lens/lighting controllers attached to this host.
    pub fn get_number_controllers(&self) -> ApiResult<Vec<ControllerInfo>> {
        let struct_size = std::mem::size_of::<CONTROLLER_INFO>() as u32;
        let (code, (raw, count)) = size_then_fill(
            |buf: *mut CONTROLLER_INFO, count: &mut u32| {
                pxl_call_no_err!((self.api.PxLGetNumberControllers)(buf, struct_size, count))
            },
            |count| count as usize,
        )?;
        let controllers = raw
            .iter()
            .take(count as usize)
            .map(ControllerInfo::from)
            .collect();
        Ok((code, controllers))
    }

    /// Encode a raw frame as one of the `IMAGE_FORMAT_*` formats.
    ///
    /// `frame` must hold at least [image_size] of `desc` bytes, otherwise
    /// [Error::FrameTooShort] is returned without calling the API.
    pub fn format_image(
        &self,
        frame: &[u8],
        desc: &FRAME_DESC,
        image_format: u32,
    ) -> ApiResult<Vec<u8>> {
        // The encoder reads as many bytes as the descriptor implies.
        let expected = crate::image_size(desc);
        if frame.len() < expected {
            return Err(Error::FrameTooShort {
                len: frame.len(),
                expected,
            });
        }
        let (code, (mut buf, size)) = size_then_fill(
            |buf: *mut u8, size: &mut u32| {
                pxl_call_no_err!((self.api.PxLFormatImage)(
                    frame.as_ptr() as *const _,
                    desc,
                    image_format,
                    buf as *mut _,
                    size
                ))
            },
            |size| size as usize,
        )?;
        buf.truncate(size as usize);
        Ok((code, buf))
    }

    /// Convert a clip captured with `CLIP_ENCODING_*` `input_encoding` into
    /// a `CLIP_FORMAT_*` container.
    pub fn format_clip(
        &self,
        input_file: &str,
        output_file: &str,
        input_encoding: u32,
        output_format: u32,
    ) -> ApiResult<()> {
        let input = std::ffi::CString::new(input_file)?;
        let output = std::ffi::CString::new(output_file)?;
        let code = pxl_call!((self.api.PxLFormatClipEx)(
            input.as_ptr(),
            output.as_ptr(),
            input_encoding,
            output_format
        ))?;
        Ok((code, ()))
    }

    /// Schedule an action (`ACTION_*`) on every camera listening for it.
    pub fn set_actions(&self, action_type: u32, timestamp: f64) -> ApiResult<()> {
        let code = pxl_call!((self.api.PxLSetActions)(action_type, timestamp))?;
        Ok((code, ()))
    }

    /// Assign an IP configuration to the GigE camera with MAC address `mac`.
    pub fn set_camera_ip_address(
        &self,
        mac: [u8; 6],
        ip: Ipv4Addr,
        subnet_mask: Ipv4Addr,
        default_gateway: Ipv4Addr,
        persistent: bool,
    ) -> ApiResult<()> {
        let mac = PXL_MAC_ADDRESS { MacAddr: mac };
        let ip = types::to_pxl_ip(ip);
        let subnet_mask = types::to_pxl_ip(subnet_mask);
        let default_gateway = types::to_pxl_ip(default_gateway);
        let code = pxl_call!((self.api.PxLSetCameraIpAddress)(
            &mac,
            &ip,
            &subnet_mask,
            &default_gateway,
            persistent as u32
        ))?;
        Ok((code, ()))
    }
}

impl std::fmt::Debug for PixelinkLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelinkLibrary")
            .field("path", &self.path)
            .field("version", &self.version.as_ref().map(|v| v.to_string()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn size_query_failure_skips_fill() {
        let mut calls = 0;
        let res = size_then_fill(
            |buf: *mut u8, _size: &mut u32| {
                calls += 1;
                assert!(buf.is_null());
                ApiNoCameraError
            },
            |size| size as usize,
        );
        assert_eq!(calls, 1);
        let err = res.unwrap_err();
        assert_eq!(err.pxl_error().unwrap().code, ApiNoCameraError);
    }

    #[test]
    fn zero_size_skips_fill() {
        let mut calls = 0;
        let (code, (buf, size)) = size_then_fill(
            |_buf: *mut u32, size: &mut u32| {
                calls += 1;
                *size = 0;
                ApiSuccess
            },
            |size| size as usize,
        )
        .unwrap();
        assert_eq!(calls, 1);
        assert!(code.is_success());
        assert!(buf.is_empty());
        assert_eq!(size, 0);
    }

    #[test]
    fn fill_receives_reported_size() {
        let mut seen = Vec::new();
        let (code, (buf, size)) = size_then_fill(
            |buf: *mut u64, size: &mut u32| {
                seen.push((buf.is_null(), *size));
                if buf.is_null() {
                    *size = 20;
                    ApiSuccess
                } else {
                    unsafe { *buf.add(2) = 7 };
                    ApiSuccessParametersChanged
                }
            },
            |bytes| (bytes as usize).div_ceil(8),
        )
        .unwrap();
        assert_eq!(seen, vec![(true, 0), (false, 20)]);
        assert_eq!(buf.len(), 3);
        assert_eq!(buf[2], 7);
        assert_eq!(size, 20);
        assert!(code.is_advisory());
    }

    #[test]
    fn fill_failure_is_reported() {
        let res = size_then_fill(
            |buf: *mut u8, size: &mut u32| {
                if buf.is_null() {
                    *size = 4;
                    ApiSuccess
                } else {
                    ApiBufferTooSmall
                }
            },
            |size| size as usize,
        );
        assert_eq!(
            res.unwrap_err().pxl_error().map(|e| e.code),
            Some(ApiBufferTooSmall)
        );
    }

    #[test]
    fn oversized_lengths_are_rejected() {
        assert_eq!(u32_len(12).unwrap(), 12);
        #[cfg(target_pointer_width = "64")]
        assert!(matches!(
            u32_len(u32::MAX as usize + 1),
            Err(Error::BufferTooLarge { .. })
        ));
    }
}
