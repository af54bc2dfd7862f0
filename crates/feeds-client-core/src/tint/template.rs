use crate::tint::TintColor;

use image::{Rgba, RgbaImage};

/// Tint a template (alpha-mask) image.
///
/// Destination-in composite of a solid `color` fill with `template`: every
/// output pixel carries the colour's RGB and `color.a * template.a / 255` as
/// its alpha. The template's own RGB is ignored.
pub fn tint_template(template: &RgbaImage, color: TintColor) -> RgbaImage {
    RgbaImage::from_fn(template.width(), template.height(), |x, y| {
        let mask = u16::from(template.get_pixel(x, y)[3]);
        let alpha = (u16::from(color.a) * mask + 127) / 255;
        Rgba([color.r, color.g, color.b, alpha as u8])
    })
}
