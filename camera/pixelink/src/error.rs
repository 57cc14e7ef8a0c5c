use pixelink_sys::PXL_RETURN_CODE;

/// Symbolic name of a Pixelink return code.
pub fn err_str(code: PXL_RETURN_CODE) -> &'static str {
    use pixelink_sys::*;
    #[allow(non_upper_case_globals)]
    match code {
        ApiSuccess => "ApiSuccess",
        ApiSuccessParametersChanged => "ApiSuccessParametersChanged",
        ApiSuccessAlreadyRunning => "ApiSuccessAlreadyRunning",
        ApiSuccessLowMemory => "ApiSuccessLowMemory",
        ApiSuccessParameterWarning => "ApiSuccessParameterWarning",
        ApiSuccessReducedSpeedWarning => "ApiSuccessReducedSpeedWarning",
        ApiSuccessExposureAdjustmentMade => "ApiSuccessExposureAdjustmentMade",
        ApiSuccessWhiteBalanceTooDark => "ApiSuccessWhiteBalanceTooDark",
        ApiSuccessWhiteBalanceTooBright => "ApiSuccessWhiteBalanceTooBright",
        ApiSuccessWithFrameLoss => "ApiSuccessWithFrameLoss",
        ApiSuccessGainIneffectiveWarning => "ApiSuccessGainIneffectiveWarning",
        ApiSuccessSuspectedFirewallBlockWarning => "ApiSuccessSuspectedFirewallBlockWarning",
        ApiUnknownError => "ApiUnknownError",
        ApiInvalidHandleError => "ApiInvalidHandleError",
        ApiInvalidParameterError => "ApiInvalidParameterError",
        ApiBufferTooSmall => "ApiBufferTooSmall",
        ApiInvalidFunctionCallError => "ApiInvalidFunctionCallError",
        ApiNotSupportedError => "ApiNotSupportedError",
        ApiCameraInUseError => "ApiCameraInUseError",
        ApiNoCameraError => "ApiNoCameraError",
        ApiHardwareError => "ApiHardwareError",
        ApiCameraUnknownError => "ApiCameraUnknownError",
        ApiOutOfBandwidthError => "ApiOutOfBandwidthError",
        ApiOutOfMemoryError => "ApiOutOfMemoryError",
        ApiOSVersionError => "ApiOSVersionError",
        ApiNoSerialNumberError => "ApiNoSerialNumberError",
        ApiInvalidSerialNumberError => "ApiInvalidSerialNumberError",
        ApiDiskFullError => "ApiDiskFullError",
        ApiIOError => "ApiIOError",
        ApiStreamStopped => "ApiStreamStopped",
        ApiNullPointerError => "ApiNullPointerError",
        ApiCreatePreviewWndError => "ApiCreatePreviewWndError",
        ApiOutOfRangeError => "ApiOutOfRangeError",
        ApiNoCameraAvailableError => "ApiNoCameraAvailableError",
        ApiInvalidCameraName => "ApiInvalidCameraName",
        ApiGetNextFrameBusy => "ApiGetNextFrameBusy",
        ApiFrameInUseError => "ApiFrameInUseError",
        ApiStreamExistingError => "ApiStreamExistingError",
        ApiEnumDoneError => "ApiEnumDoneError",
        ApiNotEnoughResourcesError => "ApiNotEnoughResourcesError",
        ApiBadFrameSizeError => "ApiBadFrameSizeError",
        ApiNoStreamError => "ApiNoStreamError",
        ApiVersionError => "ApiVersionError",
        ApiNoDeviceError => "ApiNoDeviceError",
        ApiCannotMapFrameError => "ApiCannotMapFrameError",
        ApiLinkDriverError => "ApiLinkDriverError",
        ApiInvalidIoctlParameter => "ApiInvalidIoctlParameter",
        ApiInvalidOhciDriverError => "ApiInvalidOhciDriverError",
        ApiCameraTimeoutError => "ApiCameraTimeoutError",
        ApiInvalidFrameReceivedError => "ApiInvalidFrameReceivedError",
        ApiOSServiceError => "ApiOSServiceError",
        ApiTimeoutError => "ApiTimeoutError",
        ApiRequiresControlAccess => "ApiRequiresControlAccess",
        ApiGevInitializationError => "ApiGevInitializationError",
        ApiIpServicesError => "ApiIpServicesError",
        ApiIpAddressingError => "ApiIpAddressingError",
        ApiDriverCommunicationError => "ApiDriverCommunicationError",
        ApiInvalidXmlError => "ApiInvalidXmlError",
        ApiCameraRejectedValueError => "ApiCameraRejectedValueError",
        ApiSuspectedFirewallBlockError => "ApiSuspectedFirewallBlockError",
        ApiIncorrectLinkSpeed => "ApiIncorrectLinkSpeed",
        ApiCameraNotReady => "ApiCameraNotReady",
        ApiInconsistentConfiguration => "ApiInconsistentConfiguration",
        ApiNotPermittedWhileStreaming => "ApiNotPermittedWhileStreaming",
        ApiOSAccessDeniedError => "ApiOSAccessDeniedError",
        ApiInvalidAutoRoiError => "ApiInvalidAutoRoiError",
        ApiGpiHardwareTriggerConflict => "ApiGpiHardwareTriggerConflict",
        ApiGpioConfigurationError => "ApiGpioConfigurationError",
        ApiUnsupportedPixelFormatError => "ApiUnsupportedPixelFormatError",
        ApiUnsupportedClipEncoding => "ApiUnsupportedClipEncoding",
        ApiH264EncodingError => "ApiH264EncodingError",
        ApiH264FrameTooLargeError => "ApiH264FrameTooLargeError",
        ApiH264InsufficientDataError => "ApiH264InsufficientDataError",
        ApiNoControllerError => "ApiNoControllerError",
        ApiControllerAlreadyAssignedError => "ApiControllerAlreadyAssignedError",
        ApiControllerInaccessibleError => "ApiControllerInaccessibleError",
        ApiControllerCommunicationError => "ApiControllerCommunicationError",
        ApiControllerTimeoutError => "ApiControllerTimeoutError",
        ApiBufferTooSmallForInterleavedError => "ApiBufferTooSmallForInterleavedError",
        ApiThisEventNotSupported => "ApiThisEventNotSupported",
        ApiFeatureConflictError => "ApiFeatureConflictError",
        ApiGpiOnlyError => "ApiGpiOnlyError",
        ApiGpoOnlyError => "ApiGpoOnlyError",
        ApiInvokedFromIncorrectThreadError => "ApiInvokedFromIncorrectThreadError",
        _ => "unknown return code",
    }
}

/// Raw value returned by every Pixelink API function.
///
/// Non-negative values are successes, some of them advisory (for example
/// `ApiSuccessParametersChanged`). Negative values are failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(serde::Serialize))]
pub struct ReturnCode(pub PXL_RETURN_CODE);

impl ReturnCode {
    #[inline]
    pub fn is_success(self) -> bool {
        self.0 >= 0
    }

    /// True for a success code that carries extra information.
    #[inline]
    pub fn is_advisory(self) -> bool {
        self.0 > 0
    }

    pub fn name(self) -> &'static str {
        err_str(self.0)
    }

    pub fn code(self) -> PXL_RETURN_CODE {
        self.0
    }
}

impl std::fmt::Display for ReturnCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (0x{:08X})", self.name(), self.0 as u32)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Pixelink error 0x{:08X}: {msg}", .code)]
pub struct PxlError {
    pub code: PXL_RETURN_CODE,
    pub msg: &'static str,
}

impl PxlError {
    pub fn return_code(&self) -> ReturnCode {
        ReturnCode(self.code)
    }

    /// The camera or the API gave up waiting. Callers usually retry these.
    pub fn is_timeout(&self) -> bool {
        self.code == pixelink_sys::ApiCameraTimeoutError
            || self.code == pixelink_sys::ApiTimeoutError
    }
}

impl From<PXL_RETURN_CODE> for PxlError {
    fn from(code: PXL_RETURN_CODE) -> PxlError {
        PxlError {
            code,
            msg: err_str(code),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{source}")]
    Load {
        #[from]
        source: pixelink_sys::LoadError,
    },
    #[error("Pixelink library unavailable: {msg}")]
    GlobalLoad { msg: String },
    #[error("{source}")]
    Api {
        #[from]
        source: PxlError,
    },
    #[error("{source}")]
    NulError {
        #[from]
        source: std::ffi::NulError,
    },
    #[error("{source}")]
    Utf8Error {
        #[from]
        source: std::str::Utf8Error,
    },
    #[error("unknown pixel format code {code}")]
    UnknownPixelFormatCode { code: u32 },
    #[error("buffer of {len} bytes exceeds the API limit")]
    BufferTooLarge { len: usize },
    #[error("frame of {len} bytes is shorter than the {expected} bytes its descriptor describes")]
    FrameTooShort { len: usize, expected: usize },
}

impl Error {
    /// The native failure code, if this error came from an API call.
    pub fn pxl_error(&self) -> Option<&PxlError> {
        match self {
            Error::Api { source } => Some(source),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        self.pxl_error().is_some_and(PxlError::is_timeout)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The success code of a call together with its outputs. A failing call
/// yields `Err` and no outputs at all.
pub type ApiResult<T> = Result<(ReturnCode, T)>;

pub(crate) fn check(code: PXL_RETURN_CODE) -> std::result::Result<ReturnCode, PxlError> {
    if code >= 0 {
        Ok(ReturnCode(code))
    } else {
        Err(PxlError::from(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelink_sys::*;

    #[test]
    fn names() {
        assert_eq!(err_str(ApiSuccess), "ApiSuccess");
        assert_eq!(err_str(ApiOutOfRangeError), "ApiOutOfRangeError");
        assert_eq!(
            err_str(ApiInvokedFromIncorrectThreadError),
            "ApiInvokedFromIncorrectThreadError"
        );
        // 0x8000_0015 is not assigned.
        assert_eq!(err_str(0x8000_0015_u32 as i32), "unknown return code");
    }

    #[test]
    fn success_split() {
        assert!(check(ApiSuccess).is_ok());
        let advisory = check(ApiSuccessParametersChanged).unwrap();
        assert!(advisory.is_success());
        assert!(advisory.is_advisory());
        let err = check(ApiCameraTimeoutError).unwrap_err();
        assert_eq!(err.msg, "ApiCameraTimeoutError");
        assert!(err.is_timeout());
        assert!(!PxlError::from(ApiNoCameraError).is_timeout());
    }

    #[test]
    fn display() {
        let e = PxlError::from(ApiInvalidHandleError);
        assert_eq!(e.to_string(), "Pixelink error 0x80000002: ApiInvalidHandleError");
        assert_eq!(
            ReturnCode(ApiSuccessWithFrameLoss).to_string(),
            "ApiSuccessWithFrameLoss (0x00000009)"
        );
    }
}
