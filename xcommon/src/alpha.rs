use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

pub fn has_alpha(img: &DynamicImage) -> bool {
    img.color().has_alpha()
}

/// Returns `img` as 8-bit rgb.
///
/// Images carrying an alpha channel are composited onto an opaque white
/// canvas using alpha as the blend mask, so fully transparent pixels become
/// white and fully opaque pixels keep their color. Anything else is
/// converted directly.
pub fn strip_alpha(img: DynamicImage) -> RgbImage {
    match img {
        DynamicImage::ImageRgb8(img) => img,
        img if has_alpha(&img) => {
            log::debug!("compositing {:?} onto white", img.color());
            composite_on_white(&img.to_rgba8())
        }
        img => {
            log::debug!("converting {:?} to rgb8", img.color());
            img.to_rgb8()
        }
    }
}

fn composite_on_white(img: &RgbaImage) -> RgbImage {
    let mut canvas = RgbImage::from_pixel(img.width(), img.height(), WHITE);
    for (dst, src) in canvas.pixels_mut().zip(img.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = Rgb([blend(r, a), blend(g, a), blend(b, a)]);
    }
    canvas
}

fn blend(color: u8, alpha: u8) -> u8 {
    let (color, alpha) = (color as u32, alpha as u32);
    ((color * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, Luma, LumaA, Rgba};

    #[test]
    fn transparent_becomes_white() {
        let img = RgbaImage::from_pixel(4, 3, Rgba([12, 34, 56, 0]));
        let out = strip_alpha(DynamicImage::ImageRgba8(img));
        assert_eq!(out.dimensions(), (4, 3));
        assert!(out.pixels().all(|p| *p == WHITE));
    }

    #[test]
    fn opaque_keeps_color() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        img.put_pixel(1, 0, Rgba([200, 100, 50, 255]));
        let out = strip_alpha(DynamicImage::ImageRgba8(img));
        assert_eq!(*out.get_pixel(1, 0), Rgb([200, 100, 50]));
        assert_eq!(*out.get_pixel(0, 0), WHITE);
    }

    #[test]
    fn half_transparent_black_is_grey() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let out = strip_alpha(DynamicImage::ImageRgba8(img));
        assert_eq!(*out.get_pixel(0, 0), Rgb([127, 127, 127]));
    }

    #[test]
    fn gray_alpha() {
        let mut img = GrayAlphaImage::from_pixel(2, 1, LumaA([0, 0]));
        img.put_pixel(1, 0, LumaA([80, 255]));
        let img = DynamicImage::ImageLumaA8(img);
        assert!(has_alpha(&img));
        let out = strip_alpha(img);
        assert_eq!(*out.get_pixel(0, 0), WHITE);
        assert_eq!(*out.get_pixel(1, 0), Rgb([80, 80, 80]));
    }

    #[test]
    fn gray_is_converted() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(3, 3, Luma([9])));
        assert!(!has_alpha(&img));
        let out = strip_alpha(img);
        assert!(out.pixels().all(|p| *p == Rgb([9, 9, 9])));
    }

    #[test]
    fn rgb_is_untouched() {
        let img = RgbImage::from_fn(5, 5, |x, y| Rgb([x as u8, y as u8, 7]));
        let out = strip_alpha(DynamicImage::ImageRgb8(img.clone()));
        assert_eq!(out, img);
    }
}
