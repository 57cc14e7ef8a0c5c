//! Rust closures as Pixelink callbacks.
//!
//! Frame, event and preview-change closures are boxed and their address is
//! handed to the API as the callback context. The termination shape has no
//! context argument, so pending clip closures are kept in a process wide
//! table keyed by camera handle.

use std::collections::HashMap;
use std::ffi::{CString, c_void};
use std::panic::{AssertUnwindSafe, catch_unwind};

use parking_lot::Mutex;
use pixelink_sys::*;

use crate::{ApiResult, Camera, ReturnCode};

/// Receives the frame data, the data format (a pixel format) and the frame
/// descriptor. Changes to the data are visible downstream, e.g. in the
/// preview window.
pub type FrameCallback = Box<dyn FnMut(&mut [u8], u32, &FRAME_DESC) + Send + 'static>;

/// Receives the event id, its timestamp and any event data.
pub type EventCallback = Box<dyn FnMut(u32, f64, &[u8]) + Send + 'static>;

/// Receives a `PREVIEW_*` window state change.
pub type PreviewChangeCallback = Box<dyn FnMut(u32) + Send + 'static>;

/// Receives the number of frames captured and the result of a clip capture.
pub type TerminationCallback = Box<dyn FnOnce(u32, ReturnCode) + Send + 'static>;

/// Boxes registered with the API for one camera.
#[derive(Default)]
pub(crate) struct CallbackSlots {
    frame: Mutex<HashMap<u32, Box<FrameCallback>>>,
    event: Mutex<HashMap<u32, Box<EventCallback>>>,
    preview_change: Mutex<Option<Box<PreviewChangeCallback>>>,
}

impl CallbackSlots {
    /// Give up every registered closure without dropping it. For when the
    /// API may still hold their addresses, e.g. after a failed uninitialize.
    pub(crate) fn leak(&self) {
        let frame = self.frame.lock().drain().map(|(_, b)| Box::leak(b)).count();
        let event = self.event.lock().drain().map(|(_, b)| Box::leak(b)).count();
        let preview = self.preview_change.lock().take().map(Box::leak).is_some();
        if frame + event > 0 || preview {
            tracing::warn!("leaking callback closures still known to the API");
        }
    }
}

lazy_static::lazy_static! {
    static ref PENDING_CLIPS: Mutex<HashMap<usize, TerminationCallback>> =
        Mutex::new(HashMap::new());
}

pub(crate) fn forget_termination(handle: HANDLE) {
    PENDING_CLIPS.lock().remove(&(handle as usize));
}

fn callback_result(name: &str, result: std::thread::Result<()>) -> U32 {
    match result {
        Ok(()) => ApiSuccess as U32,
        Err(e) => {
            tracing::error!("panic in {name} callback: {:?}", e);
            ApiUnknownError as U32
        }
    }
}

unsafe extern "system" fn frame_trampoline(
    _camera: HANDLE,
    data: *mut c_void,
    data_format: U32,
    desc: *mut FRAME_DESC,
    context: *mut c_void,
) -> U32 {
    let result = catch_unwind(AssertUnwindSafe(|| {
        if context.is_null() || desc.is_null() {
            return;
        }
        let callback = unsafe { &mut *(context as *mut FrameCallback) };
        let desc = unsafe { &*desc };
        let len = crate::raw_image_size(
            desc.Roi.fWidth,
            desc.Roi.fHeight,
            desc.PixelAddressingValue.fHorizontal,
            desc.PixelAddressingValue.fVertical,
            data_format,
            desc.HDRInfo.uMode == FEATURE_GAIN_HDR_MODE_INTERLEAVED,
        );
        let frame: &mut [u8] = if data.is_null() || len == 0 {
            &mut []
        } else {
            unsafe { std::slice::from_raw_parts_mut(data as *mut u8, len) }
        };
        callback(frame, data_format, desc);
    }));
    callback_result("frame", result)
}

unsafe extern "system" fn event_trampoline(
    _camera: HANDLE,
    event_id: U32,
    timestamp: f64,
    num_data_bytes: U32,
    data: *const c_void,
    context: *mut c_void,
) -> U32 {
    let result = catch_unwind(AssertUnwindSafe(|| {
        if context.is_null() {
            return;
        }
        let callback = unsafe { &mut *(context as *mut EventCallback) };
        let data: &[u8] = if data.is_null() || num_data_bytes == 0 {
            &[]
        } else {
            unsafe { std::slice::from_raw_parts(data as *const u8, num_data_bytes as usize) }
        };
        callback(event_id, timestamp, data);
    }));
    callback_result("event", result)
}

unsafe extern "system" fn change_trampoline(
    _camera: HANDLE,
    change_code: U32,
    context: *mut c_void,
) -> U32 {
    let result = catch_unwind(AssertUnwindSafe(|| {
        if context.is_null() {
            return;
        }
        let callback = unsafe { &mut *(context as *mut PreviewChangeCallback) };
        callback(change_code);
    }));
    callback_result("preview change", result)
}

unsafe extern "system" fn termination_trampoline(
    camera: HANDLE,
    num_frames_captured: U32,
    rc: PXL_RETURN_CODE,
) -> U32 {
    let result = catch_unwind(AssertUnwindSafe(|| {
        let callback = PENDING_CLIPS.lock().remove(&(camera as usize));
        match callback {
            Some(callback) => callback(num_frames_captured, ReturnCode(rc)),
            None => tracing::warn!("clip finished for {camera:p} with no pending callback"),
        }
    }));
    callback_result("clip termination", result)
}

impl<'lib> Camera<'lib> {
    /// Call `callback` for every frame of type `callback_type`
    /// (`CALLBACK_PREVIEW`, `CALLBACK_FRAME`, ...), replacing any closure
    /// already registered for that type.
    pub fn set_callback<F>(&self, callback_type: u32, callback: F) -> ApiResult<()>
    where
        F: FnMut(&mut [u8], u32, &FRAME_DESC) + Send + 'static,
    {
        let mut boxed: Box<FrameCallback> = Box::new(Box::new(callback));
        let context = &mut *boxed as *mut FrameCallback as *mut c_void;
        let mut slots = self.callbacks.frame.lock();
        let code = pxl_call!((self.lib.api.PxLSetCallback)(
            self.handle,
            callback_type,
            context,
            Some(frame_trampoline)
        ))?;
        // The API no longer refers to the previous closure.
        slots.insert(callback_type, boxed);
        Ok((code, ()))
    }

    /// Stop delivery for `callback_type` and drop its closure.
    pub fn clear_callback(&self, callback_type: u32) -> ApiResult<()> {
        let mut slots = self.callbacks.frame.lock();
        let code = pxl_call!((self.lib.api.PxLSetCallback)(
            self.handle,
            callback_type,
            std::ptr::null_mut(),
            None
        ))?;
        slots.remove(&callback_type);
        Ok((code, ()))
    }

    /// Register a native data callback directly. `None` cancels delivery.
    ///
    /// # Safety
    ///
    /// `context` must stay valid for as long as `function` can be called,
    /// and `function` must not unwind.
    pub unsafe fn set_callback_raw(
        &self,
        callback_type: u32,
        context: *mut c_void,
        function: Option<PxLDataProcessFunction>,
    ) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLSetCallback)(
            self.handle,
            callback_type,
            context,
            function
        ))?;
        Ok((code, ()))
    }

    /// Call `callback` when `event_id` (`EVENT_*`) occurs. `EVENT_ANY`
    /// subscribes to every event.
    pub fn set_event_callback<F>(&self, event_id: u32, callback: F) -> ApiResult<()>
    where
        F: FnMut(u32, f64, &[u8]) + Send + 'static,
    {
        let mut boxed: Box<EventCallback> = Box::new(Box::new(callback));
        let context = &mut *boxed as *mut EventCallback as *mut c_void;
        let mut slots = self.callbacks.event.lock();
        let code = pxl_call!((self.lib.api.PxLSetEventCallback)(
            self.handle,
            event_id,
            context,
            Some(event_trampoline)
        ))?;
        slots.insert(event_id, boxed);
        Ok((code, ()))
    }

    pub fn clear_event_callback(&self, event_id: u32) -> ApiResult<()> {
        let mut slots = self.callbacks.event.lock();
        let code = pxl_call!((self.lib.api.PxLSetEventCallback)(
            self.handle,
            event_id,
            std::ptr::null_mut(),
            None
        ))?;
        slots.remove(&event_id);
        Ok((code, ()))
    }

    /// # Safety
    ///
    /// As for [Camera::set_callback_raw].
    pub unsafe fn set_event_callback_raw(
        &self,
        event_id: u32,
        context: *mut c_void,
        function: Option<PxLEventProcessFunction>,
    ) -> ApiResult<()> {
        let code = pxl_call!((self.lib.api.PxLSetEventCallback)(
            self.handle,
            event_id,
            context,
            function
        ))?;
        Ok((code, ()))
    }

    /// Like [Camera::set_preview_state], also reporting window state
    /// changes to `callback`. Returns the preview window handle.
    pub fn set_preview_state_ex<F>(&self, state: u32, callback: F) -> ApiResult<HWND>
    where
        F: FnMut(u32) + Send + 'static,
    {
        let mut boxed: Box<PreviewChangeCallback> = Box::new(Box::new(callback));
        let context = &mut *boxed as *mut PreviewChangeCallback as *mut c_void;
        let mut slot = self.callbacks.preview_change.lock();
        let mut hwnd: HWND = std::ptr::null_mut();
        let code = pxl_call!((self.lib.api.PxLSetPreviewStateEx)(
            self.handle,
            state,
            &mut hwnd,
            context,
            Some(change_trampoline)
        ))?;
        *slot = Some(boxed);
        Ok((code, hwnd))
    }

    /// # Safety
    ///
    /// As for [Camera::set_callback_raw].
    pub unsafe fn set_preview_state_ex_raw(
        &self,
        state: u32,
        context: *mut c_void,
        function: Option<PxLChangeFunction>,
    ) -> ApiResult<HWND> {
        let mut hwnd: HWND = std::ptr::null_mut();
        let code = pxl_call!((self.lib.api.PxLSetPreviewStateEx)(
            self.handle,
            state,
            &mut hwnd,
            context,
            function
        ))?;
        Ok((code, hwnd))
    }

    /// Capture `num_frames` into the raw clip file `file_name`. Returns once
    /// capture has started. `done` is called when it finishes; convert the
    /// file with [crate::PixelinkLibrary::format_clip].
    pub fn get_clip<F>(&self, num_frames: u32, file_name: &str, done: F) -> ApiResult<()>
    where
        F: FnOnce(u32, ReturnCode) + Send + 'static,
    {
        let file_name = CString::new(file_name)?;
        self.with_pending_clip(Box::new(done), || {
            pxl_call!((self.lib.api.PxLGetClip)(
                self.handle,
                num_frames,
                file_name.as_ptr(),
                Some(termination_trampoline)
            ))
        })
    }

    /// # Safety
    ///
    /// `function` must not unwind.
    pub unsafe fn get_clip_raw(
        &self,
        num_frames: u32,
        file_name: &str,
        function: Option<PxLTerminationFunction>,
    ) -> ApiResult<()> {
        let file_name = CString::new(file_name)?;
        let code = pxl_call!((self.lib.api.PxLGetClip)(
            self.handle,
            num_frames,
            file_name.as_ptr(),
            function
        ))?;
        Ok((code, ()))
    }

    /// Capture `num_frames` into an encoded clip file.
    pub fn get_encoded_clip<F>(
        &self,
        num_frames: u32,
        file_name: &str,
        encoding: &CLIP_ENCODING_INFO,
        done: F,
    ) -> ApiResult<()>
    where
        F: FnOnce(u32, ReturnCode) + Send + 'static,
    {
        let file_name = CString::new(file_name)?;
        self.with_pending_clip(Box::new(done), || {
            pxl_call!((self.lib.api.PxLGetEncodedClip)(
                self.handle,
                num_frames,
                file_name.as_ptr(),
                encoding,
                Some(termination_trampoline)
            ))
        })
    }

    /// # Safety
    ///
    /// `function` must not unwind.
    pub unsafe fn get_encoded_clip_raw(
        &self,
        num_frames: u32,
        file_name: &str,
        encoding: &CLIP_ENCODING_INFO,
        function: Option<PxLTerminationFunction>,
    ) -> ApiResult<()> {
        let file_name = CString::new(file_name)?;
        let code = pxl_call!((self.lib.api.PxLGetEncodedClip)(
            self.handle,
            num_frames,
            file_name.as_ptr(),
            encoding,
            function
        ))?;
        Ok((code, ()))
    }

    fn with_pending_clip<C>(&self, done: TerminationCallback, call: C) -> ApiResult<()>
    where
        C: FnOnce() -> std::result::Result<ReturnCode, crate::PxlError>,
    {
        let key = self.handle as usize;
        // Stored first: the capture may finish before the call returns.
        if PENDING_CLIPS.lock().insert(key, done).is_some() {
            tracing::warn!("replacing the pending clip callback of {:?}", self);
        }
        match call() {
            Ok(code) => Ok((code, ())),
            Err(e) => {
                PENDING_CLIPS.lock().remove(&key);
                Err(e.into())
            }
        }
    }
}
