use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader, ImageResult};
use std::io::{Seek, Write};
use std::path::Path;

mod alpha;

pub use alpha::{has_alpha, strip_alpha};

#[derive(Clone, Copy, Debug)]
pub struct ScalerOpts {
    pub size: u32,
    pub filter: FilterType,
}

impl ScalerOpts {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            filter: FilterType::Lanczos3,
        }
    }
}

/// Decoded source image that square icons of any size are produced from.
pub struct Scaler {
    img: DynamicImage,
}

impl Scaler {
    pub fn open<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(Self::new(img))
    }

    pub fn new(img: DynamicImage) -> Self {
        let (width, height) = img.dimensions();
        if width != height {
            log::warn!("source is {}x{}, icons will be stretched to square", width, height);
        }
        Self { img }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.img.dimensions()
    }

    /// Writes a `size` x `size` png. The aspect ratio of the source is not preserved.
    pub fn write<W: Write + Seek>(&self, w: &mut W, opts: ScalerOpts) -> ImageResult<()> {
        log::debug!("scaling to {0}x{0} with {1:?}", opts.size, opts.filter);
        self.img
            .resize_exact(opts.size, opts.size, opts.filter)
            .write_to(w, ImageFormat::Png)
    }
}
