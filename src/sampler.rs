use core::iter::FusedIterator;

use crate::{
    error::{Error, Result},
    vector::Point,
    viewport::{Resolution, Viewport},
};

/// A point on the viewport tagged with the pixel it belongs to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub point: Point,
    pub column: u32,
    pub row: u32,
}

/// Maps a pixel grid onto a viewport, one sample per pixel, starting at the
/// upper-left corner and moving right, then down.
#[derive(Clone, Copy, Debug)]
pub struct Sampler {
    viewport: Viewport,
    resolution: Resolution,
    width_delta: f64,
    height_delta: f64,
}

impl Sampler {
    pub fn new(viewport: Viewport, resolution: Resolution) -> Self {
        Self {
            viewport,
            resolution,
            width_delta: viewport.width() / resolution.width() as f64,
            height_delta: viewport.height() / resolution.height() as f64,
        }
    }

    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    pub fn len(&self) -> usize {
        self.resolution.pixel_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn sample_at(&self, column: u32, row: u32) -> Sample {
        let origin = self.viewport.upper_left();
        let point = Point::new(
            origin.x() + self.width_delta * column as f64,
            origin.y() - self.height_delta * row as f64,
            origin.z(),
        );
        Sample { point, column, row }
    }

    /// The sample at position `index` of the row-major enumeration.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`Sampler::len`].
    pub fn sample_by_index(&self, index: usize) -> Sample {
        assert!(
            index < self.len(),
            "sample index {index} out of range for {} samples",
            self.len()
        );
        let width = self.resolution.width() as usize;
        self.sample_at((index % width) as u32, (index / width) as u32)
    }

    /// A fresh pass over every sample.
    pub fn samples(&self) -> Samples<'_> {
        Samples {
            sampler: self,
            column: 0,
            row: 0,
        }
    }
}

impl<'a> IntoIterator for &'a Sampler {
    type Item = Sample;
    type IntoIter = Samples<'a>;

    fn into_iter(self) -> Samples<'a> {
        self.samples()
    }
}

/// One pass over a [`Sampler`]. Cannot be rewound; ask the sampler for a new
/// one instead.
#[derive(Clone, Debug)]
pub struct Samples<'a> {
    sampler: &'a Sampler,
    column: u32,
    row: u32,
}

impl Samples<'_> {
    pub fn has_next(&self) -> bool {
        self.row < self.sampler.resolution.height()
    }

    /// Like [`Iterator::next`], but running past the end is an error.
    pub fn next_sample(&mut self) -> Result<Sample> {
        if !self.has_next() {
            return Err(Error::SamplerExhausted);
        }

        let sample = self.sampler.sample_at(self.column, self.row);

        self.column += 1;
        if self.column >= self.sampler.resolution.width() {
            self.column = 0;
            self.row += 1;
        }

        Ok(sample)
    }

    fn remaining(&self) -> usize {
        let resolution = self.sampler.resolution;
        let rows_left = resolution.height().saturating_sub(self.row) as usize;
        (rows_left * resolution.width() as usize).saturating_sub(self.column as usize)
    }
}

impl Iterator for Samples<'_> {
    type Item = Sample;

    fn next(&mut self) -> Option<Sample> {
        self.next_sample().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Samples<'_> {}

impl FusedIterator for Samples<'_> {}
