// THEORY:
// `image_helper` is the only place the remover touches the filesystem for pixel
// data. Loading sniffs the format from the file contents and converts whatever
// was decoded into RGBA8, synthesising full opacity for sources without alpha.
// Saving always writes PNG with an RGBA8 colour type so the transparency
// survives.

pub mod image_helper {
    use crate::core_modules::pixel_grid::pixel_grid::PixelGrid;
    use crate::error::{RemoverError, Result};
    use image::codecs::png::PngEncoder;
    use image::{ExtendedColorType, ImageEncoder, ImageError, ImageReader};
    use std::fs::File;
    use std::io::{BufWriter, Write};
    use std::path::Path;

    /// Decodes the image at `path` into an RGBA pixel grid.
    pub fn load(path: &Path) -> Result<PixelGrid> {
        let decode_error = |source: ImageError| RemoverError::Decode {
            path: path.to_path_buf(),
            source,
        };

        let image = ImageReader::open(path)
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .with_guessed_format()
            .map_err(|e| decode_error(ImageError::IoError(e)))?
            .decode()
            .map_err(decode_error)?;

        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            image.width(),
            image.height(),
            image.color()
        );

        Ok(PixelGrid::from_image(&image.to_rgba8()))
    }

    /// Encodes `grid` as an RGBA8 PNG at `path`. The parent directory must exist.
    pub fn save(path: &Path, grid: &PixelGrid) -> Result<()> {
        let encode_error = |source: ImageError| RemoverError::Encode {
            path: path.to_path_buf(),
            source,
        };

        let output = File::create(path).map_err(|source| RemoverError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(output);

        let encoder = PngEncoder::new(&mut writer);
        encoder
            .write_image(
                &grid.to_rgba_buffer(),
                grid.width(),
                grid.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(encode_error)?;
        writer
            .flush()
            .map_err(|e| encode_error(ImageError::IoError(e)))?;

        log::debug!("Encoded {}x{} PNG to {}", grid.width(), grid.height(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::image_helper::*;
    use crate::core_modules::pixel::pixel::Pixel;
    use crate::core_modules::pixel_grid::pixel_grid::PixelGrid;
    use crate::error::RemoverError;
    use image::{ImageFormat, Rgb, RgbImage};
    use tempfile::TempDir;

    #[test]
    fn save_then_load_gradient_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gradient_file.png");

        let width = 64u32;
        let height = 32u32;
        let mut buffer = vec![255u8; (width * height * 4) as usize];
        let mut intensity = 0u8;
        for pixel in buffer.chunks_mut(4) {
            pixel[0] = intensity;
            pixel[1] = intensity;
            pixel[2] = intensity;
            pixel[3] = intensity.wrapping_mul(3);
            intensity = intensity.wrapping_add(1);
        }
        let grid = PixelGrid::from_rgba_buffer(width, height, &buffer).unwrap();

        save(&path, &grid).expect("Error Saving File.");
        let loaded = load(&path).expect("Error Loading File.");
        assert_eq!(loaded, grid);
    }

    #[test]
    fn rgb_source_gets_full_opacity() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("opaque.png");
        let mut rgb = RgbImage::new(2, 1);
        rgb.put_pixel(0, 0, Rgb([12, 34, 56]));
        rgb.put_pixel(1, 0, Rgb([255, 255, 255]));
        rgb.save_with_format(&path, ImageFormat::Png).unwrap();

        let grid = load(&path).unwrap();
        assert_eq!(grid.get(0, 0), Some(&Pixel::new(12, 34, 56, 255)));
        assert_eq!(grid.get(1, 0), Some(&Pixel::new(255, 255, 255, 255)));
    }

    #[test]
    fn format_is_sniffed_not_taken_from_extension() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("actually_a_png.img");
        RgbImage::from_pixel(1, 1, Rgb([1, 2, 3]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let grid = load(&path).unwrap();
        assert_eq!(grid.get(0, 0), Some(&Pixel::new(1, 2, 3, 255)));
    }

    #[test]
    fn missing_input_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let err = load(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, RemoverError::Decode { .. }));
    }

    #[test]
    fn garbage_input_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.is_input_failure());
    }

    #[test]
    fn missing_directory_is_create_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("no_such_dir").join("out.png");
        let grid = PixelGrid::filled(1, 1, Pixel::TRANSPARENT_WHITE);
        let err = save(&path, &grid).unwrap_err();
        assert!(matches!(err, RemoverError::Create { .. }));
        assert!(err.is_output_failure());
    }
}
