#![allow(non_snake_case, non_camel_case_types)]

use std::os::raw::{c_char, c_void};
use std::path::Path;

use crate::defs::*;
use crate::LoadError;

// `extern "system"` is `__stdcall` on 32-bit Windows and the C convention
// everywhere else, matching `PXL_APICALL` in the vendor headers.

/// Frame and preview data delivery, registered with `PxLSetCallback`.
pub type PxLDataProcessFunction = unsafe extern "system" fn(
    hCamera: HANDLE,
    pFrameData: *mut c_void,
    uDataFormat: U32,
    pFrameDesc: *mut FRAME_DESC,
    pContext: *mut c_void,
) -> U32;

/// Clip capture completion, passed to `PxLGetClip` and `PxLGetEncodedClip`.
pub type PxLTerminationFunction =
    unsafe extern "system" fn(hCamera: HANDLE, uNumFramesCaptured: U32, uRetCode: PXL_RETURN_CODE) -> U32;

/// Preview window state change, registered with `PxLSetPreviewStateEx`.
pub type PxLChangeFunction =
    unsafe extern "system" fn(hCamera: HANDLE, uChangeCode: U32, pContext: *mut c_void) -> U32;

/// Asynchronous camera event, registered with `PxLSetEventCallback`.
pub type PxLEventProcessFunction = unsafe extern "system" fn(
    hCamera: HANDLE,
    uEventId: U32,
    dEventTimestamp: f64,
    uNumDataBytes: U32,
    pData: *const c_void,
    pContext: *mut c_void,
) -> U32;

macro_rules! pxl_functions {
    ($( $name:ident : fn( $( $arg:ty ),* $(,)? ); )*) => {
        /// One pointer per exported entry point of the Pixelink 4.0 API.
        #[derive(Clone, Copy)]
        pub struct PxLFunctions {
            $( pub $name: unsafe extern "system" fn( $( $arg ),* ) -> PXL_RETURN_CODE, )*
        }

        impl PxLFunctions {
            /// Names of every entry point, NUL terminated, in declaration order.
            pub const SYMBOLS: &'static [&'static [u8]] = &[
                $( concat!(stringify!($name), "\0").as_bytes(), )*
            ];

            unsafe fn from_library(library: &libloading::Library) -> Result<Self, LoadError> {
                Ok(Self {
                    $( $name: {
                        let name = concat!(stringify!($name), "\0").as_bytes();
                        let sym: libloading::Symbol<
                            unsafe extern "system" fn( $( $arg ),* ) -> PXL_RETURN_CODE,
                        > = unsafe { library.get(name) }.map_err(|source| LoadError::Symbol {
                            name: stringify!($name),
                            source,
                        })?;
                        *sym
                    }, )*
                })
            }
        }
    };
}

pxl_functions! {
    PxLAssignController: fn(HANDLE, U32);
    PxLCreateDescriptor: fn(HANDLE, *mut HANDLE, U32);
    PxLFormatClipEx: fn(*const c_char, *const c_char, U32, U32);
    PxLFormatImage: fn(*const c_void, *const FRAME_DESC, U32, *mut c_void, *mut U32);
    PxLGetActions: fn(HANDLE, *mut f64, *mut U32);
    PxLGetCameraFeatures: fn(HANDLE, U32, *mut CAMERA_FEATURES, *mut U32);
    PxLGetCameraInfoEx: fn(HANDLE, *mut CAMERA_INFO, U32);
    PxLGetCameraXML: fn(HANDLE, *mut c_void, *mut U32);
    PxLGetClip: fn(HANDLE, U32, *const c_char, Option<PxLTerminationFunction>);
    PxLGetCurrentTimestamp: fn(HANDLE, *mut f64);
    PxLGetEncodedClip: fn(
        HANDLE,
        U32,
        *const c_char,
        *const CLIP_ENCODING_INFO,
        Option<PxLTerminationFunction>,
    );
    PxLGetErrorReport: fn(HANDLE, *mut ERROR_REPORT);
    PxLGetFeature: fn(HANDLE, U32, *mut U32, *mut U32, *mut F32);
    PxLGetNextFrame: fn(HANDLE, U32, *mut c_void, *mut FRAME_DESC);
    PxLGetNumberCamerasEx: fn(*mut CAMERA_ID_INFO, *mut U32);
    PxLGetNumberControllers: fn(*mut CONTROLLER_INFO, U32, *mut U32);
    PxLInitializeEx: fn(U32, *mut HANDLE, U32);
    PxLLoadSettings: fn(HANDLE, U32);
    PxLRemoveDescriptor: fn(HANDLE, HANDLE);
    PxLResetPreviewWindow: fn(HANDLE);
    PxLSaveSettings: fn(HANDLE, U32);
    PxLSetActions: fn(U32, f64);
    PxLSetCallback: fn(HANDLE, U32, *mut c_void, Option<PxLDataProcessFunction>);
    PxLSetCameraIpAddress: fn(
        *const PXL_MAC_ADDRESS,
        *const PXL_IP_ADDRESS,
        *const PXL_IP_ADDRESS,
        *const PXL_IP_ADDRESS,
        U32,
    );
    PxLSetCameraName: fn(HANDLE, *const c_char);
    PxLSetEventCallback: fn(HANDLE, U32, *mut c_void, Option<PxLEventProcessFunction>);
    PxLSetFeature: fn(HANDLE, U32, U32, U32, *const F32);
    PxLSetPreviewSettings: fn(HANDLE, *const c_char, U32, U32, U32, U32, U32, HWND, U32);
    PxLSetPreviewState: fn(HANDLE, U32, *mut HWND);
    PxLSetPreviewStateEx: fn(HANDLE, U32, *mut HWND, *mut c_void, Option<PxLChangeFunction>);
    PxLSetStreamState: fn(HANDLE, U32);
    PxLUnassignController: fn(HANDLE, U32);
    PxLUninitialize: fn(HANDLE);
    PxLUpdateDescriptor: fn(HANDLE, HANDLE, U32);
}

/// The Pixelink API: a function table plus the library it was loaded from.
///
/// The pointers in `fns` are valid for as long as this value lives.
pub struct PxLApi {
    _library: Option<libloading::Library>,
    fns: PxLFunctions,
}

impl PxLApi {
    /// Open the shared library at `path` and resolve every entry point.
    ///
    /// # Safety
    ///
    /// Loading a library runs its initialization code. `path` must name a
    /// genuine Pixelink API library whose exports have the declared
    /// signatures.
    pub unsafe fn new<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let library = unsafe { libloading::Library::new(path) }.map_err(|source| {
            LoadError::Library {
                source,
                path: path.to_path_buf(),
            }
        })?;
        let fns = unsafe { PxLFunctions::from_library(&library) }?;
        tracing::debug!(
            "loaded {} entry points from {}",
            PxLFunctions::SYMBOLS.len(),
            path.display()
        );
        Ok(Self {
            _library: Some(library),
            fns,
        })
    }

    /// Use an already populated function table, e.g. from a statically
    /// linked build or an in-process test double.
    pub fn from_functions(fns: PxLFunctions) -> Self {
        Self {
            _library: None,
            fns,
        }
    }

    pub fn functions(&self) -> &PxLFunctions {
        &self.fns
    }
}

impl std::ops::Deref for PxLApi {
    type Target = PxLFunctions;
    fn deref(&self) -> &PxLFunctions {
        &self.fns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_are_nul_terminated() {
        assert_eq!(PxLFunctions::SYMBOLS.len(), 34);
        for name in PxLFunctions::SYMBOLS {
            assert!(name.starts_with(b"PxL"));
            assert_eq!(name.iter().filter(|b| **b == 0).count(), 1);
            assert_eq!(name.last(), Some(&0));
        }
    }

    #[test]
    fn missing_library_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libPxLApi.so");
        match unsafe { PxLApi::new(&path) } {
            Err(LoadError::Library { path: p, .. }) => assert_eq!(p, path),
            Err(e) => panic!("unexpected error {e}"),
            Ok(_) => panic!("loaded a library that does not exist"),
        }
    }
}
