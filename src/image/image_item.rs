extern crate image as image_rs;
extern crate nalgebra as na;

use std::path::{Path, PathBuf};
use image_rs::{ImageError, RgbImage};
use na::{DVector, Matrix3, Matrix4, Vector3};

use crate::Float;
use crate::error::{PosedImagesError, Result};
use crate::image::{prepare_rgb, tensor::{Device, ImageTensor}};
use crate::numerics::pose::PoseVector;

/**
 * One posed image of an inversion dataset.
 * The current pose may be refined after loading; the original pose is fixed at construction.
 */
#[derive(Debug, Clone)]
pub struct ImageItem {
    pub file_name: PathBuf,
    pub pose: PoseVector,
    original_pose: PoseVector,
    pub device: Device,
    pub target_rgb: RgbImage,
    pub target_tensor: ImageTensor,
    pub w: u32,
    pub h: u32,
    pub feature: Option<DVector<Float>>
}

impl ImageItem {

    pub fn new(file_name: &Path, pose: PoseVector, device: Device, img_resolution: u32) -> Result<ImageItem> {
        if img_resolution == 0 {
            return Err(PosedImagesError::InvalidResolution(img_resolution));
        }
        let decoded = image_rs::open(file_name).map_err(|err| match err {
            ImageError::IoError(source) => PosedImagesError::Io { path: file_name.to_path_buf(), source },
            source => PosedImagesError::Image { path: file_name.to_path_buf(), source }
        })?;
        Ok(ImageItem::from_rgb(file_name, prepare_rgb(decoded, img_resolution), pose, device))
    }

    /**
     * Builds an item from an already cropped and resized buffer
     */
    pub fn from_rgb(file_name: &Path, target_rgb: RgbImage, pose: PoseVector, device: Device) -> ImageItem {
        let (w, h) = target_rgb.dimensions();
        let target_tensor = ImageTensor::from_rgb_image(&target_rgb, device);
        ImageItem {
            file_name: file_name.to_path_buf(),
            pose,
            original_pose: pose,
            device,
            target_rgb,
            target_tensor,
            w,
            h,
            feature: None
        }
    }

    pub fn pose(&self, original: bool) -> &PoseVector {
        match original {
            true => &self.original_pose,
            false => &self.pose
        }
    }

    pub fn set_pose(&mut self, pose: PoseVector) {
        self.pose = pose;
    }

    pub fn set_feature(&mut self, feature: DVector<Float>) {
        self.feature = Some(feature);
    }

    pub fn extrinsic(&self, original: bool) -> Matrix4<Float> {
        self.pose(original).extrinsic()
    }

    pub fn intrinsic(&self, original: bool) -> Matrix3<Float> {
        self.pose(original).intrinsic()
    }

    pub fn rotation(&self, original: bool) -> Matrix3<Float> {
        self.pose(original).rotation()
    }

    pub fn position(&self, original: bool) -> Vector3<Float> {
        self.pose(original).position()
    }

    pub fn xyz(&self, original: bool) -> [Float; 3] {
        self.pose(original).xyz()
    }

    pub fn xz_angle(&self, original: bool) -> Float {
        self.pose(original).heading_angle()
    }

    pub fn direction(&self, original: bool) -> Result<Vector3<Float>> {
        self.pose(original).forward_direction()
    }
}
