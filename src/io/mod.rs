use std::path::Path;
use std::fs::File;
use std::io::{BufReader,Read};

use crate::error::{PosedImagesError,Result};

pub mod image_folder;
pub mod loading_parameters;
pub mod posed_loader;

pub const IMAGE_EXTENSIONS: [&str; 9] = ["bmp", "gif", "jpeg", "jpg", "png", "ppm", "tif", "tiff", "webp"];

pub fn read_to_string(file_path: &Path) -> Result<String> {
    let io_err = |source| PosedImagesError::Io { path: file_path.to_path_buf(), source };
    let file = File::open(file_path).map_err(io_err)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents).map_err(io_err)?;
    Ok(contents)
}

pub fn has_image_extension(file_path: &Path) -> bool {
    file_path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}
