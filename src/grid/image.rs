//! Raw intensity image input for classification.

use crate::error::{PlannerError, Result};

/// Raw map intensities as delivered by the map-loading collaborator.
///
/// Either single-channel (grayscale probability/intensity) or
/// triple-channel (RGB) data; values are interleaved per cell. Decoding
/// the image file itself is out of scope here.
#[derive(Clone, Debug)]
pub struct IntensityImage {
    data: Vec<f32>,
    width: usize,
    height: usize,
    channels: usize,
}

impl IntensityImage {
    /// Wrap an intensity buffer. Fails when the buffer length does not
    /// match `width * height * channels` or the channel count is not 1
    /// or 3.
    pub fn new(data: Vec<f32>, width: usize, height: usize, channels: usize) -> Result<Self> {
        if channels != 1 && channels != 3 {
            return Err(PlannerError::Config(format!(
                "expected 1 or 3 channels, got {channels}"
            )));
        }
        if data.len() != width * height * channels {
            return Err(PlannerError::Config(format!(
                "image buffer has {} values, expected {}x{}x{} = {}",
                data.len(),
                width,
                height,
                channels,
                width * height * channels
            )));
        }
        Ok(Self {
            data,
            width,
            height,
            channels,
        })
    }

    /// Wrap an 8-bit grayscale buffer, scaling values into [0, 1].
    pub fn from_luma8(data: &[u8], width: usize, height: usize) -> Result<Self> {
        let scaled = data.iter().map(|&v| v as f32 / 255.0).collect();
        Self::new(scaled, width, height, 1)
    }

    /// Image width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Mean intensity of the cell at row-major index `idx`.
    #[inline]
    pub(crate) fn mean_intensity(&self, idx: usize) -> f32 {
        let base = idx * self.channels;
        let sum: f32 = self.data[base..base + self.channels].iter().sum();
        sum / self.channels as f32
    }

    /// Number of cells.
    #[inline]
    pub(crate) fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_buffer() {
        assert!(IntensityImage::new(vec![0.0; 5], 2, 3, 1).is_err());
        assert!(IntensityImage::new(vec![0.0; 12], 2, 3, 2).is_err());
        assert!(IntensityImage::new(vec![0.0; 6], 2, 3, 1).is_ok());
    }

    #[test]
    fn test_channel_averaging() {
        let img = IntensityImage::new(vec![0.0, 0.5, 1.0, 0.2, 0.2, 0.2], 2, 1, 3).unwrap();
        assert!((img.mean_intensity(0) - 0.5).abs() < 1e-6);
        assert!((img.mean_intensity(1) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_from_luma8() {
        let img = IntensityImage::from_luma8(&[0, 128, 255, 64], 2, 2).unwrap();
        assert!((img.mean_intensity(2) - 1.0).abs() < 1e-6);
        assert!(img.mean_intensity(1) > 0.5 - 0.01);
    }
}
