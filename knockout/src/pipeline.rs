// THEORY:
// The `pipeline` module is the top-level API for the remover. It strings the
// core modules together into one linear pass:
//
//   decode (image_helper) -> classify every pixel (classifier) -> encode (image_helper)
//
// Each stage is also reachable on its own: `process` works on a grid already in
// memory, `process_frame` on a raw RGBA buffer, and `run` does the full
// file-to-file job. The pass is single-threaded and synchronous; the whole image
// is resident between decode and write.

use crate::config::RemoverConfig;
use crate::core_modules::classifier::classifier::{BackgroundClassifier, PixelClass};
use crate::core_modules::image_helper::image_helper;
use crate::core_modules::pixel::pixel::{Bytes, Pixel};
use crate::core_modules::pixel_grid::pixel_grid::PixelGrid;
use crate::error::Result;
use std::path::Path;

// Re-export key data structures for the public API.
pub use crate::core_modules::classifier::classifier::{DEFAULT_THRESHOLD, Threshold};

/// Summary of one classification pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemovalReport {
    pub width: u32,
    pub height: u32,
    /// Pixels rewritten to `Pixel::TRANSPARENT_WHITE`.
    pub background_pixels: usize,
    /// Pixels passed through unchanged.
    pub foreground_pixels: usize,
}

impl RemovalReport {
    pub fn total_pixels(&self) -> usize {
        self.background_pixels + self.foreground_pixels
    }

    /// Fraction of the image that became transparent; 0.0 for an empty image.
    pub fn background_ratio(&self) -> f64 {
        let total = self.total_pixels();
        if total == 0 {
            return 0.0;
        }
        self.background_pixels as f64 / total as f64
    }
}

/// The main, top-level struct for the remover.
#[derive(Debug, Clone)]
pub struct BackgroundRemover {
    config: RemoverConfig,
    classifier: BackgroundClassifier,
}

impl BackgroundRemover {
    pub fn new(config: RemoverConfig) -> Self {
        let classifier = BackgroundClassifier::new(config.threshold);
        Self { config, classifier }
    }

    pub fn config(&self) -> &RemoverConfig {
        &self.config
    }

    /// Rewrites background pixels of `grid` in place.
    pub fn process(&self, grid: &mut PixelGrid) -> RemovalReport {
        let mut report = RemovalReport {
            width: grid.width(),
            height: grid.height(),
            ..RemovalReport::default()
        };

        for pixel in grid.pixels_mut() {
            match self.classifier.classify(pixel) {
                PixelClass::Background => {
                    *pixel = Pixel::TRANSPARENT_WHITE;
                    report.background_pixels += 1;
                }
                PixelClass::Foreground => report.foreground_pixels += 1,
            }
        }

        report
    }

    /// Same pass over a raw RGBA frame buffer; returns the rewritten buffer.
    pub fn process_frame(
        &self,
        width: u32,
        height: u32,
        frame_buffer: &[u8],
    ) -> Result<(Bytes, RemovalReport)> {
        let mut grid = PixelGrid::from_rgba_buffer(width, height, frame_buffer)?;
        let report = self.process(&mut grid);
        Ok((grid.to_rgba_buffer(), report))
    }

    /// Decodes `input_path`, removes the background, and writes the PNG to `output_path`.
    pub fn run(&self) -> Result<RemovalReport> {
        let RemoverConfig {
            input_path,
            output_path,
            threshold,
        } = &self.config;
        log::debug!(
            "Removing background from {} (threshold {})",
            input_path.display(),
            threshold
        );

        let mut grid = image_helper::load(input_path)?;
        let report = self.process(&mut grid);
        image_helper::save(output_path, &grid)?;

        log::info!(
            "{}x{}: {} background, {} foreground ({:.1}% transparent)",
            report.width,
            report.height,
            report.background_pixels,
            report.foreground_pixels,
            report.background_ratio() * 100.0
        );
        Ok(report)
    }
}

/// One-shot removal with the default threshold.
pub fn remove_white_background(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<RemovalReport> {
    let config = RemoverConfig::new(input_path.as_ref(), output_path.as_ref());
    BackgroundRemover::new(config).run()
}
