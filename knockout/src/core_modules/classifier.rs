// THEORY:
// The `Classifier` module is the decision layer of the remover. It wraps a single
// tunable, the brightness threshold, and answers one question per pixel: is this
// background or foreground?
//
// Key architectural principles:
// 1.  **Independence**: Each pixel is classified on its own. There is no flood
//     fill, no neighbourhood, no edge softening. The same input pixel always gets
//     the same answer for a given threshold.
// 2.  **Binary Outcome**: The result is a `PixelClass`, never a score. Background
//     pixels collapse to the transparent-white sentinel; foreground pixels pass
//     through untouched, alpha included.
// 3.  **Stability**: The sentinel has alpha 0 but its colour channels are 255, so
//     it is itself classified as background and maps to itself. Running the
//     classifier over its own output changes nothing.

pub mod classifier {
    use crate::core_modules::pixel::pixel::{Channel, Pixel};

    pub type Threshold = Channel;

    /// Per-channel cutoff used when none is configured.
    pub const DEFAULT_THRESHOLD: Threshold = 240;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum PixelClass {
        /// Near-white; rewritten to `Pixel::TRANSPARENT_WHITE`.
        Background,
        /// Everything else; kept as-is.
        Foreground,
    }

    /// Classifies pixels as background when all three colour channels exceed `threshold`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BackgroundClassifier {
        threshold: Threshold,
    }

    impl Default for BackgroundClassifier {
        fn default() -> Self {
            Self::new(DEFAULT_THRESHOLD)
        }
    }

    impl BackgroundClassifier {
        pub fn new(threshold: Threshold) -> Self {
            Self { threshold }
        }

        pub fn threshold(&self) -> Threshold {
            self.threshold
        }

        #[inline]
        pub fn classify(&self, pixel: &Pixel) -> PixelClass {
            if pixel.is_brighter_than(self.threshold) {
                PixelClass::Background
            } else {
                PixelClass::Foreground
            }
        }

        /// The value this pixel takes in the output image.
        #[inline]
        pub fn resolve(&self, pixel: &Pixel) -> Pixel {
            match self.classify(pixel) {
                PixelClass::Background => Pixel::TRANSPARENT_WHITE,
                PixelClass::Foreground => *pixel,
            }
        }
    }
}
