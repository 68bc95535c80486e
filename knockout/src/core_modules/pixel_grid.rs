// THEORY:
// The `PixelGrid` is the in-memory image the remover operates on. It owns a
// flattened, row-major `Vec<Pixel>` along with the dimensions needed to index
// it, and it is the bridge between the outside world (raw RGBA frame buffers,
// `image::RgbaImage`) and the per-pixel classifier.
//
// Key architectural principles:
// 1.  **Whole-image residency**: The grid is built once from a decoded image and
//     held entirely in memory. There is no tiling and no streaming.
// 2.  **Shape invariant**: `pixels.len() == width * height` always holds. Every
//     constructor either derives the length from the dimensions or rejects a
//     buffer of the wrong size.
// 3.  **In-place mutation**: The classification pass rewrites `pixels` directly;
//     dimensions never change between input and output.

pub mod pixel_grid {
    use crate::core_modules::pixel::pixel::{Bytes, CHANNELS, Pixel};
    use crate::error::{RemoverError, Result};
    use image::{ImageBuffer, RgbaImage};

    /// A fixed-size, row-major grid of RGBA pixels.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PixelGrid {
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    }

    impl PixelGrid {
        /// A grid where every pixel is `fill`.
        pub fn filled(width: u32, height: u32, fill: Pixel) -> Self {
            Self {
                width,
                height,
                pixels: vec![fill; width as usize * height as usize],
            }
        }

        /// Slices a raw RGBA frame buffer into pixels.
        pub fn from_rgba_buffer(width: u32, height: u32, frame_buffer: &[u8]) -> Result<Self> {
            let expected = width as usize * height as usize * CHANNELS;
            if frame_buffer.len() != expected {
                return Err(RemoverError::BufferSize {
                    expected,
                    actual: frame_buffer.len(),
                });
            }

            let pixels = frame_buffer.chunks_exact(CHANNELS).map(Pixel::from).collect();
            Ok(Self {
                width,
                height,
                pixels,
            })
        }

        pub fn from_image(image: &RgbaImage) -> Self {
            Self {
                width: image.width(),
                height: image.height(),
                pixels: image.pixels().map(|rgba| Pixel::from(*rgba)).collect(),
            }
        }

        pub fn into_image(self) -> RgbaImage {
            let width = self.width as usize;
            ImageBuffer::from_fn(self.width, self.height, |x, y| {
                self.pixels[y as usize * width + x as usize].into()
            })
        }

        pub fn to_rgba_buffer(&self) -> Bytes {
            let mut buffer = Vec::with_capacity(self.pixels.len() * CHANNELS);
            for pixel in &self.pixels {
                buffer.extend_from_slice(&[pixel.red, pixel.green, pixel.blue, pixel.alpha]);
            }
            buffer
        }

        pub fn width(&self) -> u32 {
            self.width
        }

        pub fn height(&self) -> u32 {
            self.height
        }

        pub fn dimensions(&self) -> (u32, u32) {
            (self.width, self.height)
        }

        pub fn pixels(&self) -> &[Pixel] {
            &self.pixels
        }

        /// Mutable access to the pixels. The slice cannot grow or shrink, so the shape holds.
        pub fn pixels_mut(&mut self) -> &mut [Pixel] {
            &mut self.pixels
        }

        pub fn len(&self) -> usize {
            self.pixels.len()
        }

        pub fn is_empty(&self) -> bool {
            self.pixels.is_empty()
        }

        /// The pixel at column `x`, row `y`, or `None` when out of bounds.
        pub fn get(&self, x: u32, y: u32) -> Option<&Pixel> {
            if x >= self.width || y >= self.height {
                return None;
            }
            self.pixels.get(y as usize * self.width as usize + x as usize)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel_grid::*;
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::error::RemoverError;
    use image::{Rgba, RgbaImage};

    #[test]
    fn buffer_is_row_major() {
        // 2x2: red, green / blue, white
        let buffer = [
            255, 0, 0, 255, 0, 255, 0, 255, //
            0, 0, 255, 255, 255, 255, 255, 255,
        ];
        let grid = PixelGrid::from_rgba_buffer(2, 2, &buffer).expect("valid buffer");
        assert_eq!(grid.dimensions(), (2, 2));
        assert_eq!(grid.get(1, 0), Some(&Pixel::new(0, 255, 0, 255)));
        assert_eq!(grid.get(0, 1), Some(&Pixel::new(0, 0, 255, 255)));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert_eq!(grid.to_rgba_buffer(), buffer.to_vec());
    }

    #[test]
    fn wrong_buffer_size_is_rejected() {
        let err = PixelGrid::from_rgba_buffer(2, 2, &[0u8; 15]).unwrap_err();
        assert!(matches!(
            err,
            RemoverError::BufferSize {
                expected: 16,
                actual: 15
            }
        ));
    }

    #[test]
    fn image_conversion_keeps_layout() {
        let mut image = RgbaImage::new(3, 2);
        image.put_pixel(2, 1, Rgba([1, 2, 3, 4]));
        image.put_pixel(0, 1, Rgba([5, 6, 7, 8]));

        let grid = PixelGrid::from_image(&image);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(2, 1), Some(&Pixel::new(1, 2, 3, 4)));

        let back = grid.into_image();
        assert_eq!(back, image);
    }

    #[test]
    fn empty_grid() {
        let grid = PixelGrid::from_rgba_buffer(0, 5, &[]).expect("empty buffer");
        assert!(grid.is_empty());
        assert_eq!(grid.height(), 5);
    }

    #[test]
    fn filled_grid_has_uniform_pixels() {
        let grid = PixelGrid::filled(4, 3, Pixel::TRANSPARENT_WHITE);
        assert_eq!(grid.len(), 12);
        assert!(grid.pixels().iter().all(Pixel::is_transparent_white));
    }
}
