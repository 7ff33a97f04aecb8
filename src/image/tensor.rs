extern crate image as image_rs;
extern crate nalgebra as na;

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;
use image_rs::{RgbImage, Pixel};
use image_rs::flat::NormalForm;
use na::DMatrix;
use serde::{Serialize, Deserialize};

use crate::Float;
use crate::error::PosedImagesError;

pub const CHANNELS: usize = 3;

/**
 * Compute device a tensor lives on. Only host memory is backed by this crate.
 */
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Device {
    Cpu
}

impl Default for Device {
    fn default() -> Device {
        Device::Cpu
    }
}

impl FromStr for Device {
    type Err = PosedImagesError;

    fn from_str(s: &str) -> Result<Device, PosedImagesError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpu" => Ok(Device::Cpu),
            _ => Err(PosedImagesError::UnsupportedDevice(s.to_string()))
        }
    }
}

impl TryFrom<String> for Device {
    type Error = PosedImagesError;

    fn try_from(s: String) -> Result<Device, PosedImagesError> {
        s.parse()
    }
}

impl From<Device> for String {
    fn from(device: Device) -> String {
        device.to_string()
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Device::Cpu => write!(f, "cpu")
        }
    }
}

/**
 * Channel-first image tensor of shape [1, 3, H, W] with values in [-1, 1].
 * Each channel is stored as a height x width matrix.
 */
#[derive(Debug,Clone)]
pub struct ImageTensor {
    channels: [DMatrix<Float>; CHANNELS],
    device: Device
}

impl ImageTensor {

    pub fn from_rgb_image(image: &RgbImage, device: Device) -> ImageTensor {
        debug_assert!(image.sample_layout().is_normal(NormalForm::RowMajorPacked));

        let (width, height) = image.dimensions();
        let size = (width * height) as usize;
        let mut columns_major: [Vec<Float>; CHANNELS] = [Vec::with_capacity(size), Vec::with_capacity(size), Vec::with_capacity(size)];
        for x in 0..width {
            for y in 0..height {
                let pixel = image.get_pixel(x, y);
                for (c, &value) in pixel.channels().iter().enumerate() {
                    columns_major[c].push(normalize_u8(value));
                }
            }
        }
        let [r, g, b] = columns_major;
        let channels = [
            DMatrix::<Float>::from_vec(height as usize, width as usize, r),
            DMatrix::<Float>::from_vec(height as usize, width as usize, g),
            DMatrix::<Float>::from_vec(height as usize, width as usize, b)
        ];

        ImageTensor{channels, device}
    }

    pub fn shape(&self) -> [usize; 4] {
        let (rows, cols) = self.channels[0].shape();
        [1, CHANNELS, rows, cols]
    }

    pub fn device(&self) -> Device {
        self.device
    }

    pub fn channel(&self, c: usize) -> &DMatrix<Float> {
        &self.channels[c]
    }

    pub fn get(&self, c: usize, row: usize, col: usize) -> Float {
        self.channels[c][(row, col)]
    }

    /**
     * Flattens to contiguous NCHW order
     */
    pub fn to_vec(&self) -> Vec<Float> {
        let [_, _, rows, cols] = self.shape();
        let mut data = Vec::with_capacity(CHANNELS * rows * cols);
        for channel in self.channels.iter() {
            for r in 0..rows {
                data.extend(channel.row(r).iter());
            }
        }
        data
    }
}

/**
 * Maps [0, 255] onto [-1, 1]
 */
pub fn normalize_u8(value: u8) -> Float {
    (value as Float) / 255.0 * 2.0 - 1.0
}
