pub mod classifier;
pub mod image_helper;
pub mod pixel;
pub mod pixel_grid;
