// THEORY (1D Pixel):
// The `Pixel` module is the most fundamental unit of the remover. It is a "dumb"
// data container for a single RGBA pixel plus the single-pixel tests the
// classifier needs. Nothing here looks at neighbours: every decision about a
// pixel is made from its own four channels.
//
// What lives here:
// - Raw channels (RGBA, 8 bits each).
// - The transparent-white sentinel, the only value a background pixel may take.
// - A brightness test over the colour channels. Alpha is deliberately not part
//   of it; a bright pixel is bright no matter how opaque it already is.
// - Conversions to and from raw byte slices and `image::Rgba<u8>`.

pub mod pixel {
    use image::Rgba;

    pub type Byte = u8;
    pub type Bytes = Vec<Byte>;
    pub type Channel = Byte;

    pub const CHANNELS: usize = 4;

    /// A "dumb" data container representing a single RGBA pixel.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Pixel {
        /// The red channel value (0-255).
        pub red: Channel,
        /// The green channel value (0-255).
        pub green: Channel,
        /// The blue channel value (0-255).
        pub blue: Channel,
        /// The alpha (transparency) channel value (0-255).
        pub alpha: Channel,
    }

    impl Pixel {
        /// Fully transparent white. Every background pixel is rewritten to exactly this.
        pub const TRANSPARENT_WHITE: Pixel = Pixel::new(255, 255, 255, 0);

        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Pixel {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// True when red, green and blue all strictly exceed `threshold`.
        ///
        /// - Strict comparison: a channel equal to the threshold is not bright.
        /// - Alpha is ignored.
        #[inline]
        pub fn is_brighter_than(&self, threshold: Channel) -> bool {
            self.red > threshold && self.green > threshold && self.blue > threshold
        }

        #[inline]
        pub fn is_transparent_white(&self) -> bool {
            *self == Self::TRANSPARENT_WHITE
        }
    }

    impl From<&[Byte]> for Pixel {
        fn from(bytes: &[Byte]) -> Self {
            if bytes.len() != CHANNELS {
                panic!("Cannot convert {} bytes into pixel.", bytes.len());
            }
            Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3])
        }
    }

    impl From<Pixel> for Bytes {
        fn from(pixel: Pixel) -> Self {
            vec![pixel.red, pixel.green, pixel.blue, pixel.alpha]
        }
    }

    impl From<Rgba<Channel>> for Pixel {
        fn from(rgba: Rgba<Channel>) -> Self {
            let [red, green, blue, alpha] = rgba.0;
            Pixel::new(red, green, blue, alpha)
        }
    }

    impl From<Pixel> for Rgba<Channel> {
        fn from(pixel: Pixel) -> Self {
            Rgba([pixel.red, pixel.green, pixel.blue, pixel.alpha])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::pixel::*;
    use image::Rgba;

    #[test]
    fn brightness_is_strictly_greater() {
        assert!(!Pixel::new(240, 240, 240, 255).is_brighter_than(240));
        assert!(Pixel::new(241, 241, 241, 255).is_brighter_than(240));
    }

    #[test]
    fn every_colour_channel_must_be_bright() {
        assert!(!Pixel::new(255, 255, 200, 255).is_brighter_than(240));
        assert!(!Pixel::new(255, 10, 255, 255).is_brighter_than(240));
        assert!(!Pixel::new(0, 255, 255, 255).is_brighter_than(240));
    }

    #[test]
    fn alpha_does_not_affect_brightness() {
        assert!(Pixel::new(250, 250, 250, 0).is_brighter_than(240));
        assert!(Pixel::new(250, 250, 250, 128).is_brighter_than(240));
    }

    #[test]
    fn nothing_is_brighter_than_max() {
        assert!(!Pixel::new(255, 255, 255, 255).is_brighter_than(255));
        assert!(Pixel::new(1, 1, 1, 255).is_brighter_than(0));
    }

    #[test]
    fn sentinel_is_transparent_white() {
        assert!(Pixel::TRANSPARENT_WHITE.is_transparent_white());
        assert!(!Pixel::new(255, 255, 255, 255).is_transparent_white());
    }

    #[test]
    fn byte_and_rgba_conversions() {
        let bytes: &[Byte] = &[1, 2, 3, 4];
        let pixel = Pixel::from(bytes);
        assert_eq!(pixel, Pixel::new(1, 2, 3, 4));
        assert_eq!(Bytes::from(pixel), vec![1, 2, 3, 4]);
        assert_eq!(Rgba::from(pixel), Rgba([1, 2, 3, 4]));
        assert_eq!(Pixel::from(Rgba([9, 8, 7, 6])), Pixel::new(9, 8, 7, 6));
    }

    #[test]
    #[should_panic(expected = "Cannot convert 3 bytes into pixel.")]
    fn short_slice_panics() {
        let bytes: &[Byte] = &[1, 2, 3];
        let _ = Pixel::from(bytes);
    }
}
