use crate::{NoiseError, NoiseField, Palette};

/// Byte layout of the destination buffer.
///
/// Either way the first three bytes of a pixel receive red, green and blue.
/// In [`PixelFormat::Rgba8`] the fourth byte belongs to the caller and is
/// never written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PixelFormat {
    #[default]
    Rgba8,
    Rgb8,
}

impl PixelFormat {
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            PixelFormat::Rgba8 => 4,
            PixelFormat::Rgb8 => 3,
        }
    }
}

/// Linear map from a sampled range onto palette indices `0..=255`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalizer {
    scale: f64,
    offset: f64,
}

impl Normalizer {
    /// A range with no extent (`min == max`) cannot be stretched; it gets a
    /// scale of zero so every value lands on index 0.
    pub fn new(min: f64, max: f64) -> Self {
        let scale = 255.0 / (max - min);
        let offset = min * scale;
        if !scale.is_finite() || !offset.is_finite() {
            log::debug!("degenerate range {}..{}, mapping every value to index 0", min, max);
            return Self {
                scale: 0.0,
                offset: 0.0,
            };
        }
        Self { scale, offset }
    }

    pub fn from_field(field: &NoiseField) -> Self {
        Self::new(field.min(), field.max())
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_degenerate(&self) -> bool {
        self.scale == 0.0
    }

    /// Palette index for `value`. Out-of-range values are clamped.
    #[inline]
    pub fn index(&self, value: f64) -> u8 {
        let rescaled = value * self.scale - self.offset;
        // float to int casts saturate, NaN becomes 0
        (rescaled as i64).clamp(0, 255) as u8
    }
}

/// Normalize `field` by its own range and write it through `palette` into
/// `buffer`.
///
/// Fails without touching `buffer` if it is shorter than
/// `field.len() * format.bytes_per_pixel()`. Bytes past that length are left
/// alone.
pub fn rasterize(
    field: &NoiseField,
    palette: &Palette,
    buffer: &mut [u8],
    format: PixelFormat,
) -> Result<(), NoiseError> {
    rasterize_with(field, &Normalizer::from_field(field), palette, buffer, format)
}

/// [`rasterize`] with an explicit normalizer, e.g. to share one range across
/// several fields.
pub fn rasterize_with(
    field: &NoiseField,
    normalizer: &Normalizer,
    palette: &Palette,
    buffer: &mut [u8],
    format: PixelFormat,
) -> Result<(), NoiseError> {
    let required = field.len() * format.bytes_per_pixel();
    if buffer.len() < required {
        return Err(NoiseError::BufferTooSmall {
            required,
            actual: buffer.len(),
        });
    }

    log::trace!(
        "rasterizing {}x{} field, scale {} offset {}",
        field.width(),
        field.height(),
        normalizer.scale,
        normalizer.offset
    );

    write_pixels(
        field.values(),
        normalizer,
        palette,
        &mut buffer[..required],
        format,
    );
    Ok(())
}

/// Allocate an opaque RGBA buffer for `field` and rasterize into it.
pub fn render_rgba(field: &NoiseField, palette: &Palette) -> Vec<u8> {
    let mut buffer = [0, 0, 0, u8::MAX].repeat(field.len());
    write_pixels(
        field.values(),
        &Normalizer::from_field(field),
        palette,
        &mut buffer,
        PixelFormat::Rgba8,
    );
    buffer
}

// `buffer` must hold exactly one pixel per value
fn write_pixels(
    values: &[f64],
    normalizer: &Normalizer,
    palette: &Palette,
    buffer: &mut [u8],
    format: PixelFormat,
) {
    let write = |(pixel, value): (&mut [u8], &f64)| {
        let color = palette.get(normalizer.index(*value));
        pixel[..3].copy_from_slice(&color.to_array());
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        buffer
            .par_chunks_exact_mut(format.bytes_per_pixel())
            .zip(values.par_iter())
            .for_each(write);
    }
    #[cfg(not(feature = "parallel"))]
    buffer
        .chunks_exact_mut(format.bytes_per_pixel())
        .zip(values.iter())
        .for_each(write);
}
