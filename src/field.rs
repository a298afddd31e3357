use crate::{Fractal, FractalParams, NoiseError, Simplex};

/// Row-major grid of samples together with the range observed while sampling.
#[derive(Debug, Clone, PartialEq)]
pub struct NoiseField {
    width: usize,
    height: usize,
    values: Vec<f64>,
    min: f64,
    max: f64,
}

impl NoiseField {
    /// Wrap existing samples. The range is computed here in one pass.
    pub fn from_values(
        width: usize,
        height: usize,
        values: Vec<f64>,
    ) -> Result<Self, NoiseError> {
        let expected = width * height;
        if values.len() != expected {
            return Err(NoiseError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }
        let mut range = RangeTracker::new();
        for &value in &values {
            range.observe(value);
        }
        Ok(range.finish(width, height, values))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn into_values(self) -> Vec<f64> {
        self.values
    }

    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.values.get(y * self.width + x).copied()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn range(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Iterate the rows of the field, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks(0) panics, and an empty field has no rows anyway
        self.values.chunks(self.width.max(1))
    }
}

struct RangeTracker {
    min: f64,
    max: f64,
}

impl RangeTracker {
    fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    #[inline]
    fn observe(&mut self, value: f64) {
        if value < self.min {
            self.min = value;
        }
        if value > self.max {
            self.max = value;
        }
    }

    #[cfg(feature = "parallel")]
    fn merge(mut self, other: Self) -> Self {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self
    }

    fn finish(self, width: usize, height: usize, values: Vec<f64>) -> NoiseField {
        // nothing observed: empty field, or every sample was NaN
        let (min, max) = if self.min > self.max {
            (0.0, 0.0)
        } else {
            (self.min, self.max)
        };
        NoiseField {
            width,
            height,
            values,
            min,
            max,
        }
    }
}

/// Evaluate `f` at every integer coordinate of a `width` x `height` grid.
pub fn sample_field<F>(width: usize, height: usize, f: F) -> NoiseField
where
    F: Fn(f64, f64) -> f64,
{
    let mut values = Vec::with_capacity(width * height);
    let mut range = RangeTracker::new();
    for iy in 0..height {
        for ix in 0..width {
            let value = f(ix as f64, iy as f64);
            range.observe(value);
            values.push(value);
        }
    }
    range.finish(width, height, values)
}

/// Parallel [`sample_field`]. Each worker owns a disjoint set of rows and the
/// per-row ranges are merged once every row is done.
#[cfg(feature = "parallel")]
pub fn sample_field_par<F>(width: usize, height: usize, f: F) -> NoiseField
where
    F: Fn(f64, f64) -> f64 + Sync,
{
    use rayon::prelude::*;

    let mut values = vec![0.0; width * height];
    if values.is_empty() {
        return RangeTracker::new().finish(width, height, values);
    }

    let range = values
        .par_chunks_mut(width)
        .enumerate()
        .map(|(iy, row)| {
            let mut range = RangeTracker::new();
            for (ix, item) in row.iter_mut().enumerate() {
                *item = f(ix as f64, iy as f64);
                range.observe(*item);
            }
            range
        })
        .reduce(RangeTracker::new, RangeTracker::merge);

    range.finish(width, height, values)
}

/// Sample `fractal` with `params` over a `width` x `height` grid.
pub fn generate_field(
    width: usize,
    height: usize,
    params: &FractalParams,
    fractal: Fractal,
    noise: &Simplex,
) -> NoiseField {
    #[cfg(feature = "parallel")]
    let field = sample_field_par(width, height, |x, y| fractal.sample(noise, x, y, params));
    #[cfg(not(feature = "parallel"))]
    let field = sample_field(width, height, |x, y| fractal.sample(noise, x, y, params));

    log::debug!(
        "generated {}x{} {:?} field (frequency: {}, lacunarity: {}, gain: {}, octaves: {}), range {}..{}",
        width,
        height,
        fractal,
        params.frequency,
        params.lacunarity,
        params.gain,
        params.octaves,
        field.min,
        field.max
    );

    field
}
