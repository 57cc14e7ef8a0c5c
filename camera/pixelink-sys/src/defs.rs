#![allow(non_snake_case, non_camel_case_types, non_upper_case_globals)]

use std::os::raw::{c_char, c_float, c_int, c_uchar, c_uint, c_void};

pub type U8 = c_uchar;
pub type U32 = c_uint;
pub type F32 = c_float;
pub type HANDLE = *mut c_void;
pub type HWND = *mut c_void;
pub type PXL_RETURN_CODE = c_int;

// ---------------------------------------------------------------------------
// Feature ids

pub const FEATURE_ALL: U32 = 0xFFFF_FFFF;
pub const FEATURE_BRIGHTNESS: U32 = 0;
pub const FEATURE_PIXELINK_RESERVED_1: U32 = 1;
pub const FEATURE_SHARPNESS: U32 = 2;
pub const FEATURE_COLOR_TEMP: U32 = 3;
pub const FEATURE_WHITE_BALANCE: U32 = 3;
pub const FEATURE_HUE: U32 = 4;
pub const FEATURE_SATURATION: U32 = 5;
pub const FEATURE_GAMMA: U32 = 6;
pub const FEATURE_SHUTTER: U32 = 7;
pub const FEATURE_EXPOSURE: U32 = 7;
pub const FEATURE_GAIN: U32 = 8;
pub const FEATURE_IRIS: U32 = 9;
pub const FEATURE_FOCUS: U32 = 10;
pub const FEATURE_SENSOR_TEMPERATURE: U32 = 11;
pub const FEATURE_TEMPERATURE: U32 = 11;
pub const FEATURE_TRIGGER: U32 = 12;
pub const FEATURE_ZOOM: U32 = 13;
pub const FEATURE_PAN: U32 = 14;
pub const FEATURE_TILT: U32 = 15;
pub const FEATURE_OPT_FILTER: U32 = 16;
pub const FEATURE_GPIO: U32 = 17;
pub const FEATURE_FRAME_RATE: U32 = 18;
pub const FEATURE_ROI: U32 = 19;
pub const FEATURE_FLIP: U32 = 20;
pub const FEATURE_PIXEL_ADDRESSING: U32 = 21;
pub const FEATURE_DECIMATION: U32 = 21;
pub const FEATURE_PIXEL_FORMAT: U32 = 22;
pub const FEATURE_EXTENDED_SHUTTER: U32 = 23;
pub const FEATURE_AUTO_ROI: U32 = 24;
pub const FEATURE_LOOKUP_TABLE: U32 = 25;
pub const FEATURE_MEMORY_CHANNEL: U32 = 26;
pub const FEATURE_WHITE_SHADING: U32 = 27;
pub const FEATURE_ROTATE: U32 = 28;
pub const FEATURE_IMAGER_CLK_DIVISOR: U32 = 29;
pub const FEATURE_TRIGGER_WITH_CONTROLLED_LIGHT: U32 = 30;
pub const FEATURE_MAX_PIXEL_SIZE: U32 = 31;
pub const FEATURE_BODY_TEMPERATURE: U32 = 32;
pub const FEATURE_MAX_PACKET_SIZE: U32 = 33;
pub const FEATURE_BANDWIDTH_LIMIT: U32 = 34;
pub const FEATURE_ACTUAL_FRAME_RATE: U32 = 35;
pub const FEATURE_SHARPNESS_SCORE: U32 = 36;
pub const FEATURE_SPECIAL_CAMERA_MODE: U32 = 37;
pub const FEATURE_GAIN_HDR: U32 = 38;
pub const FEATURE_POLAR_WEIGHTINGS: U32 = 39;
pub const FEATURE_POLAR_HSV_INTERPRETATION: U32 = 40;
pub const FEATURE_PTP: U32 = 41;
pub const FEATURES_TOTAL: U32 = 42;

// ---------------------------------------------------------------------------
// Feature flags

pub const FEATURE_FLAG_PRESENCE: U32 = 0x0000_0001;
pub const FEATURE_FLAG_MANUAL: U32 = 0x0000_0002;
pub const FEATURE_FLAG_AUTO: U32 = 0x0000_0004;
pub const FEATURE_FLAG_ONEPUSH: U32 = 0x0000_0008;
pub const FEATURE_FLAG_OFF: U32 = 0x0000_0010;
/// Mask of the mutually exclusive mode bits (manual, auto, one-push, off).
pub const FEATURE_FLAG_MOD_BITS: U32 = 0x0000_001E;
pub const FEATURE_FLAG_DESC_SUPPORTED: U32 = 0x0000_0020;
pub const FEATURE_FLAG_READ_ONLY: U32 = 0x0000_0040;
pub const FEATURE_FLAG_SETTABLE_WHILE_STREAMING: U32 = 0x0000_0080;
pub const FEATURE_FLAG_PERSISTABLE: U32 = 0x0000_0100;
pub const FEATURE_FLAG_EMULATION: U32 = 0x0000_0200;
pub const FEATURE_FLAG_VOLATILE: U32 = 0x0000_0400;
pub const FEATURE_FLAG_CONTROLLER: U32 = 0x0000_0800;
pub const FEATURE_FLAG_ASSERT_LOWER_LIMIT: U32 = 0x0000_1000;
pub const FEATURE_FLAG_ASSERT_UPPER_LIMIT: U32 = 0x0000_2000;
pub const FEATURE_FLAG_USES_AUTO_ROI: U32 = 0x0000_4000;

// ---------------------------------------------------------------------------
// Image formats for PxLFormatImage

pub const IMAGE_FORMAT_BMP: U32 = 0x0000;
pub const IMAGE_FORMAT_TIFF: U32 = 0x0001;
pub const IMAGE_FORMAT_PSD: U32 = 0x0002;
pub const IMAGE_FORMAT_JPEG: U32 = 0x0003;
pub const IMAGE_FORMAT_PNG: U32 = 0x0004;
pub const IMAGE_FORMAT_RAW_MONO8: U32 = 0x1000;
pub const IMAGE_FORMAT_RAW_RGB24: U32 = 0x1005;
pub const IMAGE_FORMAT_RAW_RGB24_DIB: U32 = 0x1005;
pub const IMAGE_FORMAT_RAW_RGB48: U32 = 0x1006;
pub const IMAGE_FORMAT_RAW_RGB24_NON_DIB: U32 = 0x1012;
pub const IMAGE_FORMAT_RAW_BGR24: U32 = 0x1022;
pub const IMAGE_FORMAT_RAW_BGR24_NON_DIB: U32 = 0x1022;

// ---------------------------------------------------------------------------
// Pixel formats

pub const PIXEL_FORMAT_MONO8: U32 = 0;
pub const PIXEL_FORMAT_MONO16: U32 = 1;
pub const PIXEL_FORMAT_YUV422: U32 = 2;
pub const PIXEL_FORMAT_BAYER8_GRBG: U32 = 3;
pub const PIXEL_FORMAT_BAYER8: U32 = PIXEL_FORMAT_BAYER8_GRBG;
pub const PIXEL_FORMAT_BAYER16_GRBG: U32 = 4;
pub const PIXEL_FORMAT_BAYER16: U32 = PIXEL_FORMAT_BAYER16_GRBG;
pub const PIXEL_FORMAT_RGB24_DIB: U32 = 5;
pub const PIXEL_FORMAT_RGB24: U32 = PIXEL_FORMAT_RGB24_DIB;
pub const PIXEL_FORMAT_RGB48_NON_DIB: U32 = 6;
pub const PIXEL_FORMAT_RGB48: U32 = PIXEL_FORMAT_RGB48_NON_DIB;
pub const PIXEL_FORMAT_BAYER8_RGGB: U32 = 7;
pub const PIXEL_FORMAT_BAYER8_GBRG: U32 = 8;
pub const PIXEL_FORMAT_BAYER8_BGGR: U32 = 9;
pub const PIXEL_FORMAT_BAYER16_RGGB: U32 = 10;
pub const PIXEL_FORMAT_BAYER16_GBRG: U32 = 11;
pub const PIXEL_FORMAT_BAYER16_BGGR: U32 = 12;
pub const PIXEL_FORMAT_MONO12_PACKED: U32 = 13;
pub const PIXEL_FORMAT_BAYER12_GRBG_PACKED: U32 = 14;
pub const PIXEL_FORMAT_BAYER12_PACKED: U32 = PIXEL_FORMAT_BAYER12_GRBG_PACKED;
pub const PIXEL_FORMAT_BAYER12_RGGB_PACKED: U32 = 15;
pub const PIXEL_FORMAT_BAYER12_GBRG_PACKED: U32 = 16;
pub const PIXEL_FORMAT_BAYER12_BGGR_PACKED: U32 = 17;
pub const PIXEL_FORMAT_RGB24_NON_DIB: U32 = 18;
pub const PIXEL_FORMAT_RGB48_DIB: U32 = 19;
pub const PIXEL_FORMAT_MONO12_PACKED_MSFIRST: U32 = 20;
pub const PIXEL_FORMAT_BAYER12_GRBG_PACKED_MSFIRST: U32 = 21;
pub const PIXEL_FORMAT_BAYER12_PACKED_MSFIRST: U32 = PIXEL_FORMAT_BAYER12_GRBG_PACKED_MSFIRST;
pub const PIXEL_FORMAT_BAYER12_RGGB_PACKED_MSFIRST: U32 = 22;
pub const PIXEL_FORMAT_BAYER12_GBRG_PACKED_MSFIRST: U32 = 23;
pub const PIXEL_FORMAT_BAYER12_BGGR_PACKED_MSFIRST: U32 = 24;
pub const PIXEL_FORMAT_MONO10_PACKED_MSFIRST: U32 = 25;
pub const PIXEL_FORMAT_BAYER10_GRBG_PACKED_MSFIRST: U32 = 26;
pub const PIXEL_FORMAT_BAYER10_PACKED_MSFIRST: U32 = PIXEL_FORMAT_BAYER10_GRBG_PACKED_MSFIRST;
pub const PIXEL_FORMAT_BAYER10_RGGB_PACKED_MSFIRST: U32 = 27;
pub const PIXEL_FORMAT_BAYER10_GBRG_PACKED_MSFIRST: U32 = 28;
pub const PIXEL_FORMAT_BAYER10_BGGR_PACKED_MSFIRST: U32 = 29;
pub const PIXEL_FORMAT_STOKES4_12: U32 = 30;
pub const PIXEL_FORMAT_POLAR4_12: U32 = 31;
pub const PIXEL_FORMAT_POLAR_RAW4_12: U32 = 32;
pub const PIXEL_FORMAT_HSV4_12: U32 = 33;
pub const PIXEL_FORMAT_BGR24_NON_DIB: U32 = 34;
pub const PIXEL_FORMAT_BGR24: U32 = PIXEL_FORMAT_BGR24_NON_DIB;

// ---------------------------------------------------------------------------
// Stream and preview states

pub const START_STREAM: U32 = 0;
pub const PAUSE_STREAM: U32 = 1;
pub const STOP_STREAM: U32 = 2;

pub const START_PREVIEW: U32 = 0;
pub const PAUSE_PREVIEW: U32 = 1;
pub const STOP_PREVIEW: U32 = 2;

pub const PREVIEW_CLOSED: U32 = 0;
pub const PREVIEW_MINIMIZED: U32 = 1;
pub const PREVIEW_RESTORED: U32 = 2;
pub const PREVIEW_ACTIVATED: U32 = 3;
pub const PREVIEW_DEACTIVATED: U32 = 4;
pub const PREVIEW_RESIZED: U32 = 5;
pub const PREVIEW_MOVED: U32 = 6;

// ---------------------------------------------------------------------------
// Triggering

pub const TRIGGER_TYPE_FREE_RUNNING: U32 = 0;
pub const TRIGGER_TYPE_SOFTWARE: U32 = 1;
pub const TRIGGER_TYPE_HARDWARE: U32 = 2;
pub const TRIGGER_TYPE_ACTION: U32 = 3;

pub const FEATURE_TRIGGER_PARAM_MODE: usize = 0;
pub const FEATURE_TRIGGER_PARAM_TYPE: usize = 1;
pub const FEATURE_TRIGGER_PARAM_POLARITY: usize = 2;
pub const FEATURE_TRIGGER_PARAM_DELAY: usize = 3;
pub const FEATURE_TRIGGER_PARAM_PARAMETER: usize = 4;
pub const FEATURE_TRIGGER_PARAM_NUMBER: usize = 4;
pub const FEATURE_TRIGGER_NUM_PARAMS: usize = 5;

pub const TRIGGER_MODE_0: U32 = 0;
pub const TRIGGER_MODE_1: U32 = 1;
pub const TRIGGER_MODE_2: U32 = 2;
pub const TRIGGER_MODE_3: U32 = 3;
pub const TRIGGER_MODE_4: U32 = 4;
pub const TRIGGER_MODE_5: U32 = 5;
pub const TRIGGER_MODE_14: U32 = 14;

pub const POLARITY_ACTIVE_LOW: U32 = 0;
pub const POLARITY_ACTIVE_HIGH: U32 = 1;
pub const POLARITY_NEGATIVE: U32 = 0;
pub const POLARITY_POSITIVE: U32 = 1;

// ---------------------------------------------------------------------------
// Frame descriptor array sizes

pub const PXL_MAX_STROBES: usize = 16;
pub const PXL_MAX_KNEE_POINTS: usize = 4;

pub const PXL_UPDATE_CAMERA: U32 = 0;
pub const PXL_UPDATE_HOST: U32 = 1;

pub const FACTORY_DEFAULTS_MEMORY_CHANNEL: U32 = 0;

// ---------------------------------------------------------------------------
// Controllers

pub const CONTROLLER_FLAG_FOCUS: U32 = 0x01;
pub const CONTROLLER_FLAG_ZOOM: U32 = 0x02;
pub const CONTROLLER_FLAG_IRIS: U32 = 0x04;
pub const CONTROLLER_FLAG_SHUTTER: U32 = 0x08;
pub const CONTROLLER_FLAG_LIGHTING: U32 = 0x10;

// ---------------------------------------------------------------------------
// Callback types for PxLSetCallback

pub const CALLBACK_PREVIEW: U32 = 0x01;
pub const CALLBACK_FORMAT_CLIP: U32 = 0x04;
pub const CALLBACK_FRAME: U32 = 0x08;
pub const CALLBACK_PREVIEW_RAW: U32 = 0x10;

pub const CAMERA_PROPERTY_MONITOR_ACCESS_ONLY: U8 = 0x01;
pub const CAMERA_PROPERTY_NOT_ACCESSIBLE: U8 = 0x02;
pub const CAMERA_PROPERTY_IP_UNREACHABLE: U8 = 0x04;

pub const PXL_SETTINGS_FACTORY: U32 = 0;
pub const PXL_SETTINGS_USER: U32 = 1;

// ---------------------------------------------------------------------------
// Feature parameter indices

pub const FEATURE_EXPOSURE_PARAM_VALUE: usize = 0;
pub const FEATURE_EXPOSURE_PARAM_AUTO_MIN: usize = 1;
pub const FEATURE_EXPOSURE_PARAM_AUTO_MAX: usize = 2;

pub const FEATURE_GPIO_PARAM_GPIO_INDEX: usize = 0;
pub const FEATURE_GPIO_PARAM_MODE: usize = 1;
pub const FEATURE_GPIO_PARAM_POLARITY: usize = 2;
pub const FEATURE_GPIO_PARAM_PARAM_1: usize = 3;
pub const FEATURE_GPIO_PARAM_PARAM_2: usize = 4;
pub const FEATURE_GPIO_PARAM_PARAM_3: usize = 5;
pub const FEATURE_GPIO_NUM_PARAMS: usize = 6;

pub const GPIO_MODE_STROBE: U32 = 0;
pub const GPIO_MODE_NORMAL: U32 = 1;
pub const GPIO_MODE_PULSE: U32 = 2;
pub const GPIO_MODE_BUSY: U32 = 3;
pub const GPIO_MODE_FLASH: U32 = 4;
pub const GPIO_MODE_INPUT: U32 = 5;
pub const GPIO_MODE_ACTION_STROBE: U32 = 6;
pub const GPIO_MODE_ACTION_NORMAL: U32 = 7;
pub const GPIO_MODE_ACTION_PULSE: U32 = 8;

pub const FEATURE_GPIO_MODE_STROBE_PARAM_DELAY: usize = 3;
pub const FEATURE_GPIO_MODE_STROBE_PARAM_DURATION: usize = 4;
pub const FEATURE_GPIO_MODE_PULSE_PARAM_NUMBER: usize = 3;
pub const FEATURE_GPIO_MODE_PULSE_PARAM_DURATION: usize = 4;
pub const FEATURE_GPIO_MODE_PULSE_PARAM_INTERVAL: usize = 5;
pub const FEATURE_GPIO_MODE_INPUT_PARAM_STATUS: usize = 3;

pub const FEATURE_ROI_PARAM_LEFT: usize = 0;
pub const FEATURE_ROI_PARAM_TOP: usize = 1;
pub const FEATURE_ROI_PARAM_WIDTH: usize = 2;
pub const FEATURE_ROI_PARAM_HEIGHT: usize = 3;
pub const FEATURE_ROI_NUM_PARAMS: usize = 4;

pub const FEATURE_FLIP_PARAM_HORIZONTAL: usize = 0;
pub const FEATURE_FLIP_PARAM_VERTICAL: usize = 1;
pub const FEATURE_FLIP_NUM_PARAMS: usize = 2;

pub const FEATURE_SHARPNESS_SCORE_PARAM_LEFT: usize = 0;
pub const FEATURE_SHARPNESS_SCORE_PARAM_TOP: usize = 1;
pub const FEATURE_SHARPNESS_SCORE_PARAM_WIDTH: usize = 2;
pub const FEATURE_SHARPNESS_SCORE_PARAM_HEIGHT: usize = 3;
pub const FEATURE_SHARPNESS_SCORE_MAX_VALUE: usize = 4;
pub const FEATURE_SHARPNESS_SCORE_NUM_PARAMS: usize = 5;

pub const FEATURE_PIXEL_ADDRESSING_PARAM_VALUE: usize = 0;
pub const FEATURE_PIXEL_ADDRESSING_PARAM_MODE: usize = 1;
pub const FEATURE_PIXEL_ADDRESSING_PARAM_X_VALUE: usize = 2;
pub const FEATURE_PIXEL_ADDRESSING_PARAM_Y_VALUE: usize = 3;
pub const FEATURE_PIXEL_ADDRESSING_NUM_PARAMS: usize = 4;

pub const PIXEL_ADDRESSING_MODE_DECIMATE: U32 = 0;
pub const PIXEL_ADDRESSING_MODE_AVERAGE: U32 = 1;
pub const PIXEL_ADDRESSING_MODE_BIN: U32 = 2;
pub const PIXEL_ADDRESSING_MODE_RESAMPLE: U32 = 3;

pub const PIXEL_ADDRESSING_VALUE_NONE: U32 = 1;
pub const PIXEL_ADDRESSING_VALUE_BY_2: U32 = 2;

pub const FEATURE_EXTENDED_SHUTTER_PARAM_NUM_KNEES: usize = 0;
pub const FEATURE_EXTENDED_SHUTTER_PARAM_KNEE_1: usize = 1;
pub const FEATURE_EXTENDED_SHUTTER_PARAM_KNEE_2: usize = 2;
pub const FEATURE_EXTENDED_SHUTTER_PARAM_KNEE_3: usize = 3;
pub const FEATURE_EXTENDED_SHUTTER_PARAM_KNEE_4: usize = 4;

pub const FEATURE_AUTO_ROI_PARAM_LEFT: usize = 0;
pub const FEATURE_AUTO_ROI_PARAM_TOP: usize = 1;
pub const FEATURE_AUTO_ROI_PARAM_WIDTH: usize = 2;
pub const FEATURE_AUTO_ROI_PARAM_HEIGHT: usize = 3;

pub const FEATURE_WHITE_BALANCE_PARAM_RED: usize = 0;
pub const FEATURE_WHITE_BALANCE_PARAM_GREEN: usize = 1;
pub const FEATURE_WHITE_BALANCE_PARAM_BLUE: usize = 2;
pub const FEATURE_WHITE_SHADING_PARAM_RED: usize = 0;
pub const FEATURE_WHITE_SHADING_PARAM_GREEN: usize = 1;
pub const FEATURE_WHITE_SHADING_PARAM_BLUE: usize = 2;
pub const FEATURE_WHITE_SHADING_NUM_PARAMS: usize = 3;

pub const FEATURE_ROTATE_0_DEG: U32 = 0;
pub const FEATURE_ROTATE_90_DEG: U32 = 90;
pub const FEATURE_ROTATE_180_DEG: U32 = 180;
pub const FEATURE_ROTATE_270_DEG: U32 = 270;

pub const FEATURE_MAX_PACKET_SIZE_NORMAL: U32 = 1500;
pub const FEATURE_MAX_PACKET_SIZE_JUMBO: U32 = 9000;

pub const FEATURE_SPECIAL_CAMERA_MODE_NONE: U32 = 0;
pub const FEATURE_SPECIAL_CAMERA_MODE_FIXED_FRAME_RATE: U32 = 1;

pub const FEATURE_GAIN_HDR_MODE_NONE: U32 = 0;
pub const FEATURE_GAIN_HDR_MODE_CAMERA: U32 = 1;
pub const FEATURE_GAIN_HDR_MODE_INTERLEAVED: U32 = 2;

pub const FEATURE_POLAR_WEIGHTINGS_0_DEG: usize = 0;
pub const FEATURE_POLAR_WEIGHTINGS_45_DEG: usize = 1;
pub const FEATURE_POLAR_WEIGHTINGS_90_DEG: usize = 2;
pub const FEATURE_POLAR_WEIGHTINGS_135_DEG: usize = 3;

pub const HSV_AS_COLOR: U32 = 0;
pub const HSV_AS_ANGLE: U32 = 1;
pub const HSV_AS_DEGREE: U32 = 2;

pub const FEATURE_PTP_PARAM_MODE: usize = 0;
pub const FEATURE_PTP_PARAM_STATUS: usize = 1;
pub const FEATURE_PTP_PARAM_ACCURACY: usize = 2;
pub const FEATURE_PTP_PARAM_OFFSET_FROM_MASTER: usize = 3;
pub const FEATURE_PTP_NUM_PARAMS: usize = 4;

pub const FEATURE_PTP_MODE_DISABLED: U32 = 0;
pub const FEATURE_PTP_MODE_AUTOMATIC: U32 = 1;
pub const FEATURE_PTP_MODE_SLAVE_ONLY: U32 = 2;

pub const FEATURE_PTP_STATUS_INITIALIZING: U32 = 1;
pub const FEATURE_PTP_STATUS_FAULTY: U32 = 2;
pub const FEATURE_PTP_STATUS_DISABLED: U32 = 3;
pub const FEATURE_PTP_STATUS_LISTENING: U32 = 4;
pub const FEATURE_PTP_STATUS_PREMASTER: U32 = 5;
pub const FEATURE_PTP_STATUS_MASTER: U32 = 6;
pub const FEATURE_PTP_STATUS_PASSIVE: U32 = 7;
pub const FEATURE_PTP_STATUS_UNCALIBRATED: U32 = 8;
pub const FEATURE_PTP_STATUS_SLAVE: U32 = 9;

pub const CFA_NONE: U32 = 0;
pub const CFA_RGGB: U32 = 1;
pub const CFA_GBRG: U32 = 2;
pub const CFA_GRBG: U32 = 3;
pub const CFA_BGGR: U32 = 4;

// ---------------------------------------------------------------------------
// PxLInitializeEx flags

pub const PXL_MONITOR_ACCESS_ONLY: U32 = 0x0000_0001;
pub const PXL_ISSUE_STREAM_STOP: U32 = 0x0000_0002;

// ---------------------------------------------------------------------------
// GigE IP address assignment

pub const PXL_IP_UNKNOWN_ASSIGNMENT: U8 = 0;
pub const PXL_IP_DHCP_ASSIGNED: U8 = 1;
pub const PXL_IP_LLA_ASSIGNED: U8 = 2;
pub const PXL_IP_STATIC_PERSISTENT: U8 = 3;
pub const PXL_IP_STATIC_VOLATILE: U8 = 4;

pub const PXL_DATA_STREAM_MAGIC_NUMBER: U32 = 0x0404_0404;

// ---------------------------------------------------------------------------
// Clips

pub const CLIP_ENCODING_PDS: U32 = 0;
pub const CLIP_ENCODING_H264: U32 = 1;

pub const CLIP_FORMAT_AVI: U32 = 0;
pub const CLIP_FORMAT_MP4: U32 = 1;

pub const CLIP_PLAYBACK_FRAMERATE_DEFAULT: F32 = 30.0;
/// Play back at the rate the clip was captured.
pub const CLIP_PLAYBACK_FRAMERATE_CAPTURE: F32 = -1.0;
pub const CLIP_PLAYBACK_BITRATE_DEFAULT: U32 = 1_000_000;
pub const CLIP_DECIMATION_NONE: U32 = 1;

// ---------------------------------------------------------------------------
// Events

pub const EVENT_ANY: U32 = 0;
pub const EVENT_CAMERA_DISCONNECTED: U32 = 1;
pub const EVENT_HW_TRIGGER_RISING_EDGE: U32 = 2;
pub const EVENT_HW_TRIGGER_FALLING_EDGE: U32 = 3;
pub const EVENT_GPI_RISING_EDGE: U32 = 4;
pub const EVENT_GPI_FALLING_EDGE: U32 = 5;
pub const EVENT_HW_TRIGGER_MISSED: U32 = 6;
pub const EVENT_SYNCHRONIZED_TO_MASTER: U32 = 7;
pub const EVENT_UNSYNCHRONIZED_FROM_MASTER: U32 = 8;
pub const EVENT_FRAMES_SKIPPED: U32 = 9;
pub const EVENT_LAST: U32 = 9;

// ---------------------------------------------------------------------------
// Actions

pub const ACTION_FRAME_TRIGGER: U32 = 0;
pub const ACTION_GPO1: U32 = 1;
pub const ACTION_GPO2: U32 = 2;
pub const ACTION_GPO3: U32 = 3;
pub const ACTION_GPO4: U32 = 4;

// ---------------------------------------------------------------------------
// Preview window styles. Only meaningful on Windows.

pub const WS_OVERLAPPED: U32 = 0x0000_0000;
pub const WS_MAXIMIZEBOX: U32 = 0x0001_0000;
pub const WS_MINIMIZEBOX: U32 = 0x0002_0000;
pub const WS_THICKFRAME: U32 = 0x0004_0000;
pub const WS_SYSMENU: U32 = 0x0008_0000;
pub const WS_CAPTION: U32 = 0x00C0_0000;
pub const WS_OVERLAPPEDWINDOW: U32 =
    WS_OVERLAPPED | WS_MAXIMIZEBOX | WS_MINIMIZEBOX | WS_THICKFRAME | WS_SYSMENU | WS_CAPTION;
pub const WS_VISIBLE: U32 = 0x1000_0000;
pub const WS_CHILD: U32 = 0x4000_0000;

// ---------------------------------------------------------------------------
// Return codes

pub const ApiSuccess: PXL_RETURN_CODE = 0x0000_0000;
pub const ApiSuccessParametersChanged: PXL_RETURN_CODE = 0x0000_0001;
pub const ApiSuccessAlreadyRunning: PXL_RETURN_CODE = 0x0000_0002;
pub const ApiSuccessLowMemory: PXL_RETURN_CODE = 0x0000_0003;
pub const ApiSuccessParameterWarning: PXL_RETURN_CODE = 0x0000_0004;
pub const ApiSuccessReducedSpeedWarning: PXL_RETURN_CODE = 0x0000_0005;
pub const ApiSuccessExposureAdjustmentMade: PXL_RETURN_CODE = 0x0000_0006;
pub const ApiSuccessWhiteBalanceTooDark: PXL_RETURN_CODE = 0x0000_0007;
pub const ApiSuccessWhiteBalanceTooBright: PXL_RETURN_CODE = 0x0000_0008;
pub const ApiSuccessWithFrameLoss: PXL_RETURN_CODE = 0x0000_0009;
pub const ApiSuccessGainIneffectiveWarning: PXL_RETURN_CODE = 0x0000_000A;
pub const ApiSuccessSuspectedFirewallBlockWarning: PXL_RETURN_CODE = 0x0000_000B;

pub const ApiUnknownError: PXL_RETURN_CODE = 0x8000_0001_u32 as i32;
pub const ApiInvalidHandleError: PXL_RETURN_CODE = 0x8000_0002_u32 as i32;
pub const ApiInvalidParameterError: PXL_RETURN_CODE = 0x8000_0003_u32 as i32;
pub const ApiBufferTooSmall: PXL_RETURN_CODE = 0x8000_0004_u32 as i32;
pub const ApiInvalidFunctionCallError: PXL_RETURN_CODE = 0x8000_0005_u32 as i32;
pub const ApiNotSupportedError: PXL_RETURN_CODE = 0x8000_0006_u32 as i32;
pub const ApiCameraInUseError: PXL_RETURN_CODE = 0x8000_0007_u32 as i32;
pub const ApiNoCameraError: PXL_RETURN_CODE = 0x8000_0008_u32 as i32;
pub const ApiHardwareError: PXL_RETURN_CODE = 0x8000_0009_u32 as i32;
pub const ApiCameraUnknownError: PXL_RETURN_CODE = 0x8000_000A_u32 as i32;
pub const ApiOutOfBandwidthError: PXL_RETURN_CODE = 0x8000_000B_u32 as i32;
pub const ApiOutOfMemoryError: PXL_RETURN_CODE = 0x8000_000C_u32 as i32;
pub const ApiOSVersionError: PXL_RETURN_CODE = 0x8000_000D_u32 as i32;
pub const ApiNoSerialNumberError: PXL_RETURN_CODE = 0x8000_000E_u32 as i32;
pub const ApiInvalidSerialNumberError: PXL_RETURN_CODE = 0x8000_000F_u32 as i32;
pub const ApiDiskFullError: PXL_RETURN_CODE = 0x8000_0010_u32 as i32;
pub const ApiIOError: PXL_RETURN_CODE = 0x8000_0011_u32 as i32;
pub const ApiStreamStopped: PXL_RETURN_CODE = 0x8000_0012_u32 as i32;
pub const ApiNullPointerError: PXL_RETURN_CODE = 0x8000_0013_u32 as i32;
pub const ApiCreatePreviewWndError: PXL_RETURN_CODE = 0x8000_0014_u32 as i32;
pub const ApiOutOfRangeError: PXL_RETURN_CODE = 0x8000_0016_u32 as i32;
pub const ApiNoCameraAvailableError: PXL_RETURN_CODE = 0x8000_0017_u32 as i32;
pub const ApiInvalidCameraName: PXL_RETURN_CODE = 0x8000_0018_u32 as i32;
pub const ApiGetNextFrameBusy: PXL_RETURN_CODE = 0x8000_0019_u32 as i32;
pub const ApiFrameInUseError: PXL_RETURN_CODE = 0x8000_001A_u32 as i32;

pub const ApiStreamExistingError: PXL_RETURN_CODE = 0x9000_0001_u32 as i32;
pub const ApiEnumDoneError: PXL_RETURN_CODE = 0x9000_0002_u32 as i32;
pub const ApiNotEnoughResourcesError: PXL_RETURN_CODE = 0x9000_0003_u32 as i32;
pub const ApiBadFrameSizeError: PXL_RETURN_CODE = 0x9000_0004_u32 as i32;
pub const ApiNoStreamError: PXL_RETURN_CODE = 0x9000_0005_u32 as i32;
pub const ApiVersionError: PXL_RETURN_CODE = 0x9000_0006_u32 as i32;
pub const ApiNoDeviceError: PXL_RETURN_CODE = 0x9000_0007_u32 as i32;
pub const ApiCannotMapFrameError: PXL_RETURN_CODE = 0x9000_0008_u32 as i32;
pub const ApiLinkDriverError: PXL_RETURN_CODE = 0x9000_0009_u32 as i32;
pub const ApiInvalidIoctlParameter: PXL_RETURN_CODE = 0x9000_000A_u32 as i32;
pub const ApiInvalidOhciDriverError: PXL_RETURN_CODE = 0x9000_000B_u32 as i32;
pub const ApiCameraTimeoutError: PXL_RETURN_CODE = 0x9000_000C_u32 as i32;
pub const ApiInvalidFrameReceivedError: PXL_RETURN_CODE = 0x9000_000D_u32 as i32;
pub const ApiOSServiceError: PXL_RETURN_CODE = 0x9000_000E_u32 as i32;
pub const ApiTimeoutError: PXL_RETURN_CODE = 0x9000_000F_u32 as i32;
pub const ApiRequiresControlAccess: PXL_RETURN_CODE = 0x9000_0010_u32 as i32;
pub const ApiGevInitializationError: PXL_RETURN_CODE = 0x9000_0011_u32 as i32;
pub const ApiIpServicesError: PXL_RETURN_CODE = 0x9000_0012_u32 as i32;
pub const ApiIpAddressingError: PXL_RETURN_CODE = 0x9000_0013_u32 as i32;
pub const ApiDriverCommunicationError: PXL_RETURN_CODE = 0x9000_0014_u32 as i32;
pub const ApiInvalidXmlError: PXL_RETURN_CODE = 0x9000_0015_u32 as i32;
pub const ApiCameraRejectedValueError: PXL_RETURN_CODE = 0x9000_0016_u32 as i32;
pub const ApiSuspectedFirewallBlockError: PXL_RETURN_CODE = 0x9000_0017_u32 as i32;
pub const ApiIncorrectLinkSpeed: PXL_RETURN_CODE = 0x9000_0018_u32 as i32;
pub const ApiCameraNotReady: PXL_RETURN_CODE = 0x9000_0019_u32 as i32;
pub const ApiInconsistentConfiguration: PXL_RETURN_CODE = 0x9000_001A_u32 as i32;
pub const ApiNotPermittedWhileStreaming: PXL_RETURN_CODE = 0x9000_001B_u32 as i32;
pub const ApiOSAccessDeniedError: PXL_RETURN_CODE = 0x9000_001C_u32 as i32;
pub const ApiInvalidAutoRoiError: PXL_RETURN_CODE = 0x9000_001D_u32 as i32;
pub const ApiGpiHardwareTriggerConflict: PXL_RETURN_CODE = 0x9000_001E_u32 as i32;
pub const ApiGpioConfigurationError: PXL_RETURN_CODE = 0x9000_001F_u32 as i32;
pub const ApiUnsupportedPixelFormatError: PXL_RETURN_CODE = 0x9000_0020_u32 as i32;
pub const ApiUnsupportedClipEncoding: PXL_RETURN_CODE = 0x9000_0021_u32 as i32;
pub const ApiH264EncodingError: PXL_RETURN_CODE = 0x9000_0022_u32 as i32;
pub const ApiH264FrameTooLargeError: PXL_RETURN_CODE = 0x9000_0023_u32 as i32;
pub const ApiH264InsufficientDataError: PXL_RETURN_CODE = 0x9000_0024_u32 as i32;
pub const ApiNoControllerError: PXL_RETURN_CODE = 0x9000_0025_u32 as i32;
pub const ApiControllerAlreadyAssignedError: PXL_RETURN_CODE = 0x9000_0026_u32 as i32;
pub const ApiControllerInaccessibleError: PXL_RETURN_CODE = 0x9000_0027_u32 as i32;
pub const ApiControllerCommunicationError: PXL_RETURN_CODE = 0x9000_0028_u32 as i32;
pub const ApiControllerTimeoutError: PXL_RETURN_CODE = 0x9000_0029_u32 as i32;
pub const ApiBufferTooSmallForInterleavedError: PXL_RETURN_CODE = 0x9000_002A_u32 as i32;
pub const ApiThisEventNotSupported: PXL_RETURN_CODE = 0x9000_002B_u32 as i32;
pub const ApiFeatureConflictError: PXL_RETURN_CODE = 0x9000_002C_u32 as i32;
pub const ApiGpiOnlyError: PXL_RETURN_CODE = 0x9000_002D_u32 as i32;
pub const ApiGpoOnlyError: PXL_RETURN_CODE = 0x9000_002E_u32 as i32;
pub const ApiInvokedFromIncorrectThreadError: PXL_RETURN_CODE = 0x9000_002F_u32 as i32;

// ---------------------------------------------------------------------------
// Structures

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FEATURE_PARAM {
    pub fMinValue: F32,
    pub fMaxValue: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CAMERA_FEATURE {
    pub uFeatureId: U32,
    pub uFlags: U32,
    pub uNumberOfParameters: U32,
    pub pParams: *mut FEATURE_PARAM,
}

/// Header of the buffer filled by `PxLGetCameraFeatures`.
///
/// The native library writes this header, the `CAMERA_FEATURE` array and
/// every `FEATURE_PARAM` array into one contiguous buffer. All pointers
/// point into that same buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CAMERA_FEATURES {
    pub uSize: U32,
    pub uNumberOfFeatures: U32,
    pub pFeatures: *mut CAMERA_FEATURE,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PXL_MAC_ADDRESS {
    pub MacAddr: [U8; 6],
}

#[repr(C)]
#[derive(Clone, Copy)]
pub union PXL_IP_ADDRESS {
    pub u8Address: [U8; 4],
    pub u32Address: U32,
}

impl Default for PXL_IP_ADDRESS {
    fn default() -> Self {
        PXL_IP_ADDRESS { u32Address: 0 }
    }
}

impl std::fmt::Debug for PXL_IP_ADDRESS {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Both views cover the same four bytes.
        let octets = unsafe { self.u8Address };
        write!(
            f,
            "PXL_IP_ADDRESS({}.{}.{}.{})",
            octets[0], octets[1], octets[2], octets[3]
        )
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct CAMERA_ID_INFO {
    pub StructSize: U32,
    pub CameraSerialNum: U32,
    pub CameraMac: PXL_MAC_ADDRESS,
    pub CameraIpAddress: PXL_IP_ADDRESS,
    pub CameraIpMask: PXL_IP_ADDRESS,
    pub CameraIpGateway: PXL_IP_ADDRESS,
    pub NicIpAddress: PXL_IP_ADDRESS,
    pub NicIpMask: PXL_IP_ADDRESS,
    pub NicAccessMode: U32,
    pub CameraIpAssignmentType: U8,
    pub XmlVersionMajor: U8,
    pub XmlVersionMinor: U8,
    pub XmlVersionSubminor: U8,
    pub IpEngineLoadVersionMajor: U8,
    pub IpEngineLoadVersionMinor: U8,
    pub IpEngineLoadVersionSubminor: U8,
    pub CameraProperties: U8,
    pub ControllingIpAddress: PXL_IP_ADDRESS,
    pub CameraLinkSpeed: U32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CAMERA_INFO {
    pub VendorName: [c_char; 33],
    pub ModelName: [c_char; 33],
    pub Description: [c_char; 256],
    pub SerialNumber: [c_char; 33],
    pub FirmwareVersion: [c_char; 12],
    pub FPGAVersion: [c_char; 12],
    pub CameraName: [c_char; 256],
    pub XMLVersion: [c_char; 12],
    pub BootloadVersion: [c_char; 12],
    pub LensDescription: [c_char; 64],
}

impl Default for CAMERA_INFO {
    fn default() -> Self {
        CAMERA_INFO {
            VendorName: [0; 33],
            ModelName: [0; 33],
            Description: [0; 256],
            SerialNumber: [0; 33],
            FirmwareVersion: [0; 12],
            FPGAVersion: [0; 12],
            CameraName: [0; 256],
            XMLVersion: [0; 12],
            BootloadVersion: [0; 12],
            LensDescription: [0; 64],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CLIP_ENCODING_INFO {
    pub uStreamEncoding: U32,
    pub uDecimationFactor: U32,
    pub playbackFrameRate: F32,
    pub playbackBitRate: U32,
}

impl Default for CLIP_ENCODING_INFO {
    fn default() -> Self {
        CLIP_ENCODING_INFO {
            uStreamEncoding: CLIP_ENCODING_H264,
            uDecimationFactor: CLIP_DECIMATION_NONE,
            playbackFrameRate: CLIP_PLAYBACK_FRAMERATE_CAPTURE,
            playbackBitRate: CLIP_PLAYBACK_BITRATE_DEFAULT,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct CONTROLLER_INFO {
    pub ControllerSerialNumber: U32,
    pub TypeMask: U32,
    pub CameraSerialNumber: U32,
    pub COMPort: [c_char; 64],
    pub USBVirtualPort: U32,
    pub VendorName: [c_char; 64],
    pub ModelName: [c_char; 64],
    pub Description: [c_char; 256],
    pub FirmwareVersion: [c_char; 64],
}

impl Default for CONTROLLER_INFO {
    fn default() -> Self {
        CONTROLLER_INFO {
            ControllerSerialNumber: 0,
            TypeMask: 0,
            CameraSerialNumber: 0,
            COMPort: [0; 64],
            USBVirtualPort: 0,
            VendorName: [0; 64],
            ModelName: [0; 64],
            Description: [0; 256],
            FirmwareVersion: [0; 64],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct ERROR_REPORT {
    pub uReturnCode: PXL_RETURN_CODE,
    pub strFunctionName: [c_char; 32],
    pub strReturnCode: [c_char; 32],
    pub strReport: [c_char; 256],
}

impl Default for ERROR_REPORT {
    fn default() -> Self {
        ERROR_REPORT {
            uReturnCode: ApiSuccess,
            strFunctionName: [0; 32],
            strReturnCode: [0; 32],
            strReport: [0; 256],
        }
    }
}

// Frame descriptor sub-records

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_VALUE {
    pub fValue: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_TRIGGER {
    pub fMode: F32,
    pub fType: F32,
    pub fPolarity: F32,
    pub fDelay: F32,
    pub fParameter: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_GPIO {
    pub fMode: [F32; PXL_MAX_STROBES],
    pub fPolarity: [F32; PXL_MAX_STROBES],
    pub fParameter1: [F32; PXL_MAX_STROBES],
    pub fParameter2: [F32; PXL_MAX_STROBES],
    pub fParameter3: [F32; PXL_MAX_STROBES],
}

/// Used for both `Roi` and `AutoROI`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_ROI {
    pub fLeft: F32,
    pub fTop: F32,
    pub fWidth: F32,
    pub fHeight: F32,
}

/// Used for both `Flip` and `PixelAddressingValue`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_HV {
    pub fHorizontal: F32,
    pub fVertical: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_EXTENDED_SHUTTER {
    pub fKneePoint: [F32; PXL_MAX_KNEE_POINTS],
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_WHITE_SHADING {
    pub fRedGain: F32,
    pub fGreenGain: F32,
    pub fBlueGain: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_IMAGE_PROCESSING {
    pub uMask: U32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_SHARPNESS_SCORE_PARAMS {
    pub fLeft: F32,
    pub fTop: F32,
    pub fWidth: F32,
    pub fHeight: F32,
    pub fMaxValue: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_HDR_INFO {
    pub uMode: U32,
    pub fDarkGain: F32,
    pub fBrightGain: F32,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC_POLAR_INFO {
    pub uCFA: U32,
    pub f0Weight: F32,
    pub f45Weight: F32,
    pub f90Weight: F32,
    pub f135Weight: F32,
    pub uHSVInterpretation: U32,
}

/// Per-frame metadata written by the native library next to every image.
///
/// `uSize` must be set to `size_of::<FRAME_DESC>()` before the descriptor
/// is handed to the library. [`FRAME_DESC::new`] does this.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FRAME_DESC {
    pub uSize: U32,
    pub fFrameTime: F32,
    pub uFrameNumber: U32,
    pub Brightness: FRAME_DESC_VALUE,
    pub AutoExposure: FRAME_DESC_VALUE,
    pub Sharpness: FRAME_DESC_VALUE,
    pub WhiteBalance: FRAME_DESC_VALUE,
    pub Hue: FRAME_DESC_VALUE,
    pub Saturation: FRAME_DESC_VALUE,
    pub Gamma: FRAME_DESC_VALUE,
    pub Shutter: FRAME_DESC_VALUE,
    pub Gain: FRAME_DESC_VALUE,
    pub Iris: FRAME_DESC_VALUE,
    pub Focus: FRAME_DESC_VALUE,
    pub Temperature: FRAME_DESC_VALUE,
    pub Trigger: FRAME_DESC_TRIGGER,
    pub Zoom: FRAME_DESC_VALUE,
    pub Pan: FRAME_DESC_VALUE,
    pub Tilt: FRAME_DESC_VALUE,
    pub OpticalFilter: FRAME_DESC_VALUE,
    pub GPIO: FRAME_DESC_GPIO,
    pub FrameRate: FRAME_DESC_VALUE,
    pub Roi: FRAME_DESC_ROI,
    pub Flip: FRAME_DESC_HV,
    pub Decimation: FRAME_DESC_VALUE,
    pub PixelFormat: FRAME_DESC_VALUE,
    pub ExtendedShutter: FRAME_DESC_EXTENDED_SHUTTER,
    pub AutoROI: FRAME_DESC_ROI,
    pub DecimationMode: FRAME_DESC_VALUE,
    pub WhiteShading: FRAME_DESC_WHITE_SHADING,
    pub Rotate: FRAME_DESC_VALUE,
    pub ImagerClkDivisor: FRAME_DESC_VALUE,
    pub TriggerWithControlledLight: FRAME_DESC_VALUE,
    pub MaxPixelSize: FRAME_DESC_VALUE,
    pub TriggerNumber: FRAME_DESC_VALUE,
    pub ImageProcessing: FRAME_DESC_IMAGE_PROCESSING,
    pub PixelAddressingValue: FRAME_DESC_HV,
    pub dFrameTime: f64,
    pub u64FrameNumber: u64,
    pub BandwidthLimit: FRAME_DESC_VALUE,
    pub ActualFrameRate: FRAME_DESC_VALUE,
    pub SharpnessScoreParams: FRAME_DESC_SHARPNESS_SCORE_PARAMS,
    pub SharpnessScore: FRAME_DESC_VALUE,
    pub HDRInfo: FRAME_DESC_HDR_INFO,
    pub PolarInfo: FRAME_DESC_POLAR_INFO,
}

impl FRAME_DESC {
    pub fn new() -> Self {
        FRAME_DESC {
            uSize: std::mem::size_of::<FRAME_DESC>() as U32,
            ..Default::default()
        }
    }
}
