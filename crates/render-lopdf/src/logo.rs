//! Turns the encoded logo into image XObjects.

use cotizador_render_core::RenderError;
use image::{ColorType, GenericImageView, ImageFormat};
use lopdf::{Stream, dictionary};

/// An image XObject plus the soft mask carrying its alpha channel, if any.
pub struct ImageXObject {
    pub image: Stream,
    pub soft_mask: Option<Stream>,
}

impl ImageXObject {
    /// Builds the XObject for PNG, JPEG or GIF bytes.
    ///
    /// JPEG data is embedded as-is behind `/DCTDecode`. Other formats are
    /// decoded to 8-bit RGB, with alpha split off into a grayscale soft mask.
    pub fn from_encoded(bytes: &[u8]) -> Result<Self, RenderError> {
        let format = image::guess_format(bytes)
            .map_err(|e| RenderError::Image(format!("unrecognized image data: {}", e)))?;
        let decoded = image::load_from_memory_with_format(bytes, format)
            .map_err(|e| RenderError::Image(format!("failed to decode {:?} image: {}", format, e)))?;
        let (width, height) = decoded.dimensions();
        if width == 0 || height == 0 {
            return Err(RenderError::Image("image has no pixels".into()));
        }

        if format == ImageFormat::Jpeg {
            let color_space = match decoded.color() {
                ColorType::L8 | ColorType::L16 => "DeviceGray",
                _ => "DeviceRGB",
            };
            let image = Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(width),
                    "Height" => i64::from(height),
                    "ColorSpace" => color_space,
                    "BitsPerComponent" => 8,
                    "Filter" => "DCTDecode",
                },
                bytes.to_vec(),
            );
            return Ok(Self {
                image,
                soft_mask: None,
            });
        }

        let soft_mask = decoded.color().has_alpha().then(|| {
            let alpha: Vec<u8> = decoded.to_rgba8().pixels().map(|p| p.0[3]).collect();
            Stream::new(
                dictionary! {
                    "Type" => "XObject",
                    "Subtype" => "Image",
                    "Width" => i64::from(width),
                    "Height" => i64::from(height),
                    "ColorSpace" => "DeviceGray",
                    "BitsPerComponent" => 8,
                },
                alpha,
            )
        });
        let image = Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => i64::from(width),
                "Height" => i64::from(height),
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            decoded.to_rgb8().into_raw(),
        );
        Ok(Self { image, soft_mask })
    }
}
