extern crate image as image_rs;

use image_rs::{DynamicImage, RgbImage, imageops::{self, FilterType}};

pub mod tensor;
pub mod image_item;

/**
 * Crops the largest centred square, using the shorter side
 */
pub fn center_crop_square(image: &RgbImage) -> RgbImage {
    let (w, h) = image.dimensions();
    let s = w.min(h);
    imageops::crop_imm(image, (w - s) / 2, (h - s) / 2, s, s).to_image()
}

pub fn prepare_rgb(image: DynamicImage, resolution: u32) -> RgbImage {
    let square = center_crop_square(&image.to_rgb8());
    imageops::resize(&square, resolution, resolution, FilterType::Lanczos3)
}
