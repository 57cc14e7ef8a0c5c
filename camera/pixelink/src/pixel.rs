use machine_vision_formats as formats;
use pixelink_sys::*;

use crate::{Error, Result};

/// Bytes per pixel for a Pixelink pixel format. Packed formats are
/// fractional. Unknown formats give 0.
pub fn bytes_per_pixel(pixel_format: u32) -> f32 {
    match pixel_format {
        PIXEL_FORMAT_MONO8
        | PIXEL_FORMAT_BAYER8_GRBG
        | PIXEL_FORMAT_BAYER8_RGGB
        | PIXEL_FORMAT_BAYER8_GBRG
        | PIXEL_FORMAT_BAYER8_BGGR => 1.0,
        PIXEL_FORMAT_MONO16
        | PIXEL_FORMAT_YUV422
        | PIXEL_FORMAT_BAYER16_GRBG
        | PIXEL_FORMAT_BAYER16_RGGB
        | PIXEL_FORMAT_BAYER16_GBRG
        | PIXEL_FORMAT_BAYER16_BGGR => 2.0,
        PIXEL_FORMAT_MONO12_PACKED
        | PIXEL_FORMAT_BAYER12_GRBG_PACKED
        | PIXEL_FORMAT_BAYER12_RGGB_PACKED
        | PIXEL_FORMAT_BAYER12_GBRG_PACKED
        | PIXEL_FORMAT_BAYER12_BGGR_PACKED
        | PIXEL_FORMAT_MONO12_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER12_GRBG_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER12_RGGB_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER12_GBRG_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER12_BGGR_PACKED_MSFIRST => 1.5,
        PIXEL_FORMAT_MONO10_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER10_GRBG_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER10_RGGB_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER10_GBRG_PACKED_MSFIRST
        | PIXEL_FORMAT_BAYER10_BGGR_PACKED_MSFIRST => 1.25,
        PIXEL_FORMAT_RGB24_DIB | PIXEL_FORMAT_RGB24_NON_DIB | PIXEL_FORMAT_BGR24_NON_DIB => 3.0,
        PIXEL_FORMAT_RGB48_NON_DIB
        | PIXEL_FORMAT_RGB48_DIB
        | PIXEL_FORMAT_STOKES4_12
        | PIXEL_FORMAT_POLAR4_12
        | PIXEL_FORMAT_POLAR_RAW4_12
        | PIXEL_FORMAT_HSV4_12 => 6.0,
        _ => 0.0,
    }
}

/// Size in bytes of a raw image.
///
/// `pa_x` and `pa_y` are the horizontal and vertical pixel addressing
/// values. Values below 1 are treated as 1 (no addressing). The result
/// doubles when gain HDR is in interleaved mode, since each frame then
/// carries a dark and a bright image.
pub fn raw_image_size(
    roi_width: f32,
    roi_height: f32,
    pa_x: f32,
    pa_y: f32,
    pixel_format: u32,
    interleaved_hdr: bool,
) -> usize {
    let pa_x = pa_x.max(1.0);
    let pa_y = pa_y.max(1.0);
    let single = (roi_width / pa_x) * (roi_height / pa_y) * bytes_per_pixel(pixel_format);
    let single = single as usize;
    if interleaved_hdr { single * 2 } else { single }
}

/// Size in bytes of the image described by `desc`.
pub fn image_size(desc: &FRAME_DESC) -> usize {
    raw_image_size(
        desc.Roi.fWidth,
        desc.Roi.fHeight,
        desc.PixelAddressingValue.fHorizontal,
        desc.PixelAddressingValue.fVertical,
        desc.PixelFormat.fValue as u32,
        desc.HDRInfo.uMode == FEATURE_GAIN_HDR_MODE_INTERLEAVED,
    )
}

pub fn pixel_format_name(pixel_format: u32) -> &'static str {
    match pixel_format {
        PIXEL_FORMAT_MONO8 => "MONO8",
        PIXEL_FORMAT_MONO16 => "MONO16",
        PIXEL_FORMAT_YUV422 => "YUV422",
        PIXEL_FORMAT_BAYER8_GRBG => "BAYER8_GRBG",
        PIXEL_FORMAT_BAYER16_GRBG => "BAYER16_GRBG",
        PIXEL_FORMAT_RGB24_DIB => "RGB24_DIB",
        PIXEL_FORMAT_RGB48_NON_DIB => "RGB48_NON_DIB",
        PIXEL_FORMAT_BAYER8_RGGB => "BAYER8_RGGB",
        PIXEL_FORMAT_BAYER8_GBRG => "BAYER8_GBRG",
        PIXEL_FORMAT_BAYER8_BGGR => "BAYER8_BGGR",
        PIXEL_FORMAT_BAYER16_RGGB => "BAYER16_RGGB",
        PIXEL_FORMAT_BAYER16_GBRG => "BAYER16_GBRG",
        PIXEL_FORMAT_BAYER16_BGGR => "BAYER16_BGGR",
        PIXEL_FORMAT_MONO12_PACKED => "MONO12_PACKED",
        PIXEL_FORMAT_BAYER12_GRBG_PACKED => "BAYER12_GRBG_PACKED",
        PIXEL_FORMAT_BAYER12_RGGB_PACKED => "BAYER12_RGGB_PACKED",
        PIXEL_FORMAT_BAYER12_GBRG_PACKED => "BAYER12_GBRG_PACKED",
        PIXEL_FORMAT_BAYER12_BGGR_PACKED => "BAYER12_BGGR_PACKED",
        PIXEL_FORMAT_RGB24_NON_DIB => "RGB24_NON_DIB",
        PIXEL_FORMAT_RGB48_DIB => "RGB48_DIB",
        PIXEL_FORMAT_MONO12_PACKED_MSFIRST => "MONO12_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER12_GRBG_PACKED_MSFIRST => "BAYER12_GRBG_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER12_RGGB_PACKED_MSFIRST => "BAYER12_RGGB_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER12_GBRG_PACKED_MSFIRST => "BAYER12_GBRG_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER12_BGGR_PACKED_MSFIRST => "BAYER12_BGGR_PACKED_MSFIRST",
        PIXEL_FORMAT_MONO10_PACKED_MSFIRST => "MONO10_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER10_GRBG_PACKED_MSFIRST => "BAYER10_GRBG_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER10_RGGB_PACKED_MSFIRST => "BAYER10_RGGB_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER10_GBRG_PACKED_MSFIRST => "BAYER10_GBRG_PACKED_MSFIRST",
        PIXEL_FORMAT_BAYER10_BGGR_PACKED_MSFIRST => "BAYER10_BGGR_PACKED_MSFIRST",
        PIXEL_FORMAT_STOKES4_12 => "STOKES4_12",
        PIXEL_FORMAT_POLAR4_12 => "POLAR4_12",
        PIXEL_FORMAT_POLAR_RAW4_12 => "POLAR_RAW4_12",
        PIXEL_FORMAT_HSV4_12 => "HSV4_12",
        PIXEL_FORMAT_BGR24_NON_DIB => "BGR24_NON_DIB",
        _ => "UNKNOWN",
    }
}

/// Map a Pixelink pixel format onto the equivalent `PixFmt`, if one exists.
pub fn pixel_format_code(code: u32) -> Result<formats::PixFmt> {
    use formats::PixFmt::*;
    let fmt = match code {
        PIXEL_FORMAT_MONO8 => Mono8,
        PIXEL_FORMAT_BAYER8_GRBG => BayerGR8,
        PIXEL_FORMAT_BAYER8_RGGB => BayerRG8,
        PIXEL_FORMAT_BAYER8_GBRG => BayerGB8,
        PIXEL_FORMAT_BAYER8_BGGR => BayerBG8,
        PIXEL_FORMAT_RGB24_NON_DIB => RGB8,
        PIXEL_FORMAT_YUV422 => YUV422,
        // PIXEL_FORMAT_MONO16 is big endian on the wire.
        _ => {
            return Err(Error::UnknownPixelFormatCode { code });
        }
    };
    Ok(fmt)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_widths() {
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_MONO8), 1.0);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_MONO12_PACKED), 1.5);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_RGB48), 6.0);
        assert_eq!(bytes_per_pixel(9999), 0.0);

        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_BAYER8), 1.0);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_YUV422), 2.0);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_BAYER12_PACKED_MSFIRST), 1.5);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_BAYER10_PACKED_MSFIRST), 1.25);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_BGR24), 3.0);
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_HSV4_12), 6.0);
    }

    #[test]
    fn every_defined_format_has_a_width() {
        for code in 0..=PIXEL_FORMAT_BGR24_NON_DIB {
            assert!(bytes_per_pixel(code) > 0.0, "format {code}");
            assert_ne!(pixel_format_name(code), "UNKNOWN");
        }
        assert_eq!(bytes_per_pixel(PIXEL_FORMAT_BGR24_NON_DIB + 1), 0.0);
    }

    #[test]
    fn size_is_multiplicative() {
        assert_eq!(
            raw_image_size(1280.0, 1024.0, 1.0, 1.0, PIXEL_FORMAT_MONO8, false),
            1280 * 1024
        );
        assert_eq!(
            raw_image_size(1280.0, 1024.0, 2.0, 2.0, PIXEL_FORMAT_MONO16, false),
            640 * 512 * 2
        );
        assert_eq!(
            raw_image_size(640.0, 480.0, 1.0, 1.0, PIXEL_FORMAT_MONO12_PACKED, false),
            640 * 480 * 3 / 2
        );
        assert_eq!(
            raw_image_size(640.0, 480.0, 1.0, 1.0, PIXEL_FORMAT_MONO8, true),
            640 * 480 * 2
        );
        assert_eq!(raw_image_size(640.0, 480.0, 1.0, 1.0, 9999, false), 0);
        assert_eq!(
            raw_image_size(640.0, 480.0, 0.0, 0.0, PIXEL_FORMAT_MONO8, false),
            640 * 480
        );
    }

    #[test]
    fn size_from_frame_descriptor() {
        let mut desc = FRAME_DESC::new();
        desc.Roi.fWidth = 800.0;
        desc.Roi.fHeight = 600.0;
        desc.PixelAddressingValue.fHorizontal = 2.0;
        desc.PixelAddressingValue.fVertical = 1.0;
        desc.PixelFormat.fValue = PIXEL_FORMAT_RGB24 as f32;
        let size = image_size(&desc);
        assert_eq!(size, 400 * 600 * 3);
        assert_eq!(image_size(&desc), size);

        desc.HDRInfo.uMode = FEATURE_GAIN_HDR_MODE_INTERLEAVED;
        assert_eq!(image_size(&desc), 2 * size);
        desc.HDRInfo.uMode = FEATURE_GAIN_HDR_MODE_CAMERA;
        assert_eq!(image_size(&desc), size);
    }

    #[test]
    fn pixfmt_mapping() {
        assert!(matches!(
            pixel_format_code(PIXEL_FORMAT_BAYER8_BGGR),
            Ok(formats::PixFmt::BayerBG8)
        ));
        assert!(matches!(
            pixel_format_code(PIXEL_FORMAT_MONO12_PACKED),
            Err(Error::UnknownPixelFormatCode { code: 13 })
        ));
    }
}
