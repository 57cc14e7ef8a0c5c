use std::net::Ipv4Addr;
use std::os::raw::c_char;

#[cfg(feature = "serde-serialize")]
use serde::Serialize;

use pixelink_sys::*;

use crate::error::ReturnCode;

/// Read a fixed-size, NUL padded C string. Invalid UTF-8 is replaced.
pub(crate) fn fixed_c_str(chars: &[c_char]) -> String {
    let bytes: Vec<u8> = chars
        .iter()
        .take_while(|c| **c != 0)
        .map(|c| *c as u8)
        .collect();
    String::from_utf8_lossy(&bytes).into_owned()
}

fn ip(addr: &PXL_IP_ADDRESS) -> Ipv4Addr {
    let o = unsafe { addr.u8Address };
    Ipv4Addr::new(o[0], o[1], o[2], o[3])
}

pub(crate) fn to_pxl_ip(addr: Ipv4Addr) -> PXL_IP_ADDRESS {
    PXL_IP_ADDRESS {
        u8Address: addr.octets(),
    }
}

/// Capability and state bits of a feature (`FEATURE_FLAG_*`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct FeatureFlags(pub u32);

impl FeatureFlags {
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }
    #[inline]
    pub fn contains(self, flag: u32) -> bool {
        self.0 & flag == flag
    }
    pub fn is_present(self) -> bool {
        self.contains(FEATURE_FLAG_PRESENCE)
    }
    pub fn is_read_only(self) -> bool {
        self.contains(FEATURE_FLAG_READ_ONLY)
    }
    pub fn is_manual(self) -> bool {
        self.contains(FEATURE_FLAG_MANUAL)
    }
    pub fn is_auto(self) -> bool {
        self.contains(FEATURE_FLAG_AUTO)
    }
    pub fn is_off(self) -> bool {
        self.contains(FEATURE_FLAG_OFF)
    }
    /// Set while a one-push adjustment is still running.
    pub fn is_one_push(self) -> bool {
        self.contains(FEATURE_FLAG_ONEPUSH)
    }
    pub fn is_settable_while_streaming(self) -> bool {
        self.contains(FEATURE_FLAG_SETTABLE_WHILE_STREAMING)
    }

    /// Replace the mode bits (manual, auto, one-push, off) with `mode`,
    /// keeping every other bit.
    pub fn with_mode(self, mode: u32) -> Self {
        FeatureFlags((self.0 & !FEATURE_FLAG_MOD_BITS) | (mode & FEATURE_FLAG_MOD_BITS))
    }

    /// Names of the set bits, for display.
    pub fn names(self) -> Vec<&'static str> {
        const NAMES: &[(u32, &str)] = &[
            (FEATURE_FLAG_PRESENCE, "PRESENCE"),
            (FEATURE_FLAG_MANUAL, "MANUAL"),
            (FEATURE_FLAG_AUTO, "AUTO"),
            (FEATURE_FLAG_ONEPUSH, "ONEPUSH"),
            (FEATURE_FLAG_OFF, "OFF"),
            (FEATURE_FLAG_DESC_SUPPORTED, "DESC_SUPPORTED"),
            (FEATURE_FLAG_READ_ONLY, "READ_ONLY"),
            (FEATURE_FLAG_SETTABLE_WHILE_STREAMING, "SETTABLE_WHILE_STREAMING"),
            (FEATURE_FLAG_PERSISTABLE, "PERSISTABLE"),
            (FEATURE_FLAG_EMULATION, "EMULATION"),
            (FEATURE_FLAG_VOLATILE, "VOLATILE"),
            (FEATURE_FLAG_CONTROLLER, "CONTROLLER"),
            (FEATURE_FLAG_ASSERT_LOWER_LIMIT, "ASSERT_LOWER_LIMIT"),
            (FEATURE_FLAG_ASSERT_UPPER_LIMIT, "ASSERT_UPPER_LIMIT"),
            (FEATURE_FLAG_USES_AUTO_ROI, "USES_AUTO_ROI"),
        ];
        NAMES
            .iter()
            .filter(|(bit, _)| self.contains(*bit))
            .map(|(_, name)| *name)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct FeatureParam {
    pub min: f32,
    pub max: f32,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct CameraFeature {
    pub id: u32,
    pub flags: FeatureFlags,
    pub params: Vec<FeatureParam>,
}

impl CameraFeature {
    pub fn name(&self) -> &'static str {
        feature_name(self.id)
    }
}

/// Copy of the feature descriptors returned by `PxLGetCameraFeatures`.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct CameraFeatures {
    pub features: Vec<CameraFeature>,
}

impl CameraFeatures {
    /// Deep copy a native feature list.
    ///
    /// # Safety
    ///
    /// `raw` must point to a `CAMERA_FEATURES` block as filled in by the
    /// Pixelink API, with every nested pointer valid.
    pub unsafe fn from_raw(raw: *const CAMERA_FEATURES) -> Self {
        let header = unsafe { &*raw };
        let n = header.uNumberOfFeatures as usize;
        if n == 0 || header.pFeatures.is_null() {
            return Self::default();
        }
        let raw_features = unsafe { std::slice::from_raw_parts(header.pFeatures, n) };
        let features = raw_features
            .iter()
            .map(|f| {
                let n_params = f.uNumberOfParameters as usize;
                let params = if n_params == 0 || f.pParams.is_null() {
                    Vec::new()
                } else {
                    unsafe { std::slice::from_raw_parts(f.pParams, n_params) }
                        .iter()
                        .map(|p| FeatureParam {
                            min: p.fMinValue,
                            max: p.fMaxValue,
                        })
                        .collect()
                };
                CameraFeature {
                    id: f.uFeatureId,
                    flags: FeatureFlags(f.uFlags),
                    params,
                }
            })
            .collect();
        Self { features }
    }

    pub fn get(&self, id: u32) -> Option<&CameraFeature> {
        self.features.iter().find(|f| f.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct CameraInfo {
    pub vendor_name: String,
    pub model_name: String,
    pub description: String,
    pub serial_number: String,
    pub firmware_version: String,
    pub fpga_version: String,
    pub camera_name: String,
    pub xml_version: String,
    pub bootload_version: String,
    pub lens_description: String,
}

impl From<&CAMERA_INFO> for CameraInfo {
    fn from(orig: &CAMERA_INFO) -> Self {
        Self {
            vendor_name: fixed_c_str(&orig.VendorName),
            model_name: fixed_c_str(&orig.ModelName),
            description: fixed_c_str(&orig.Description),
            serial_number: fixed_c_str(&orig.SerialNumber),
            firmware_version: fixed_c_str(&orig.FirmwareVersion),
            fpga_version: fixed_c_str(&orig.FPGAVersion),
            camera_name: fixed_c_str(&orig.CameraName),
            xml_version: fixed_c_str(&orig.XMLVersion),
            bootload_version: fixed_c_str(&orig.BootloadVersion),
            lens_description: fixed_c_str(&orig.LensDescription),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct ErrorReport {
    pub return_code: ReturnCode,
    pub function_name: String,
    pub return_code_name: String,
    pub report: String,
}

impl From<&ERROR_REPORT> for ErrorReport {
    fn from(orig: &ERROR_REPORT) -> Self {
        Self {
            return_code: ReturnCode(orig.uReturnCode),
            function_name: fixed_c_str(&orig.strFunctionName),
            return_code_name: fixed_c_str(&orig.strReturnCode),
            report: fixed_c_str(&orig.strReport),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct ControllerInfo {
    pub controller_serial_number: u32,
    pub type_mask: u32,
    pub camera_serial_number: u32,
    pub com_port: String,
    pub usb_virtual_port: u32,
    pub vendor_name: String,
    pub model_name: String,
    pub description: String,
    pub firmware_version: String,
}

impl From<&CONTROLLER_INFO> for ControllerInfo {
    fn from(orig: &CONTROLLER_INFO) -> Self {
        Self {
            controller_serial_number: orig.ControllerSerialNumber,
            type_mask: orig.TypeMask,
            camera_serial_number: orig.CameraSerialNumber,
            com_port: fixed_c_str(&orig.COMPort),
            usb_virtual_port: orig.USBVirtualPort,
            vendor_name: fixed_c_str(&orig.VendorName),
            model_name: fixed_c_str(&orig.ModelName),
            description: fixed_c_str(&orig.Description),
            firmware_version: fixed_c_str(&orig.FirmwareVersion),
        }
    }
}

/// One entry of the camera enumeration.
///
/// The IP related fields are only meaningful for GigE cameras.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize))]
pub struct CameraIdInfo {
    pub serial_number: u32,
    pub mac: [u8; 6],
    pub ip_address: Ipv4Addr,
    pub ip_mask: Ipv4Addr,
    pub ip_gateway: Ipv4Addr,
    pub nic_ip_address: Ipv4Addr,
    pub nic_ip_mask: Ipv4Addr,
    pub nic_access_mode: u32,
    pub ip_assignment_type: u8,
    pub xml_version: (u8, u8, u8),
    pub ip_engine_load_version: (u8, u8, u8),
    pub properties: u8,
    pub controlling_ip_address: Ipv4Addr,
    pub link_speed: u32,
}

impl CameraIdInfo {
    pub fn mac_string(&self) -> String {
        self.mac
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect::<Vec<_>>()
            .join(":")
    }

    pub fn is_accessible(&self) -> bool {
        self.properties & CAMERA_PROPERTY_NOT_ACCESSIBLE == 0
    }
}

impl From<&CAMERA_ID_INFO> for CameraIdInfo {
    fn from(orig: &CAMERA_ID_INFO) -> Self {
        Self {
            serial_number: orig.CameraSerialNum,
            mac: orig.CameraMac.MacAddr,
            ip_address: ip(&orig.CameraIpAddress),
            ip_mask: ip(&orig.CameraIpMask),
            ip_gateway: ip(&orig.CameraIpGateway),
            nic_ip_address: ip(&orig.NicIpAddress),
            nic_ip_mask: ip(&orig.NicIpMask),
            nic_access_mode: orig.NicAccessMode,
            ip_assignment_type: orig.CameraIpAssignmentType,
            xml_version: (
                orig.XmlVersionMajor,
                orig.XmlVersionMinor,
                orig.XmlVersionSubminor,
            ),
            ip_engine_load_version: (
                orig.IpEngineLoadVersionMajor,
                orig.IpEngineLoadVersionMinor,
                orig.IpEngineLoadVersionSubminor,
            ),
            properties: orig.CameraProperties,
            controlling_ip_address: ip(&orig.ControllingIpAddress),
            link_speed: orig.CameraLinkSpeed,
        }
    }
}

pub fn feature_name(id: u32) -> &'static str {
    match id {
        FEATURE_ALL => "ALL",
        FEATURE_BRIGHTNESS => "BRIGHTNESS",
        FEATURE_PIXELINK_RESERVED_1 => "PIXELINK_RESERVED_1",
        FEATURE_SHARPNESS => "SHARPNESS",
        FEATURE_COLOR_TEMP => "WHITE_BALANCE",
        FEATURE_HUE => "HUE",
        FEATURE_SATURATION => "SATURATION",
        FEATURE_GAMMA => "GAMMA",
        FEATURE_SHUTTER => "EXPOSURE",
        FEATURE_GAIN => "GAIN",
        FEATURE_IRIS => "IRIS",
        FEATURE_FOCUS => "FOCUS",
        FEATURE_SENSOR_TEMPERATURE => "SENSOR_TEMPERATURE",
        FEATURE_TRIGGER => "TRIGGER",
        FEATURE_ZOOM => "ZOOM",
        FEATURE_PAN => "PAN",
        FEATURE_TILT => "TILT",
        FEATURE_OPT_FILTER => "OPT_FILTER",
        FEATURE_GPIO => "GPIO",
        FEATURE_FRAME_RATE => "FRAME_RATE",
        FEATURE_ROI => "ROI",
        FEATURE_FLIP => "FLIP",
        FEATURE_PIXEL_ADDRESSING => "PIXEL_ADDRESSING",
        FEATURE_PIXEL_FORMAT => "PIXEL_FORMAT",
        FEATURE_EXTENDED_SHUTTER => "EXTENDED_SHUTTER",
        FEATURE_AUTO_ROI => "AUTO_ROI",
        FEATURE_LOOKUP_TABLE => "LOOKUP_TABLE",
        FEATURE_MEMORY_CHANNEL => "MEMORY_CHANNEL",
        FEATURE_WHITE_SHADING => "WHITE_SHADING",
        FEATURE_ROTATE => "ROTATE",
        FEATURE_IMAGER_CLK_DIVISOR => "IMAGER_CLK_DIVISOR",
        FEATURE_TRIGGER_WITH_CONTROLLED_LIGHT => "TRIGGER_WITH_CONTROLLED_LIGHT",
        FEATURE_MAX_PIXEL_SIZE => "MAX_PIXEL_SIZE",
        FEATURE_BODY_TEMPERATURE => "BODY_TEMPERATURE",
        FEATURE_MAX_PACKET_SIZE => "MAX_PACKET_SIZE",
        FEATURE_BANDWIDTH_LIMIT => "BANDWIDTH_LIMIT",
        FEATURE_ACTUAL_FRAME_RATE => "ACTUAL_FRAME_RATE",
        FEATURE_SHARPNESS_SCORE => "SHARPNESS_SCORE",
        FEATURE_SPECIAL_CAMERA_MODE => "SPECIAL_CAMERA_MODE",
        FEATURE_GAIN_HDR => "GAIN_HDR",
        FEATURE_POLAR_WEIGHTINGS => "POLAR_WEIGHTINGS",
        FEATURE_POLAR_HSV_INTERPRETATION => "POLAR_HSV_INTERPRETATION",
        FEATURE_PTP => "PTP",
        _ => "UNKNOWN",
    }
}
