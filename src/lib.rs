extern crate nalgebra as na;
extern crate image as image_rs;

pub mod error;
pub mod image;
pub mod io;
pub mod numerics;

pub use self::error::{PosedImagesError, Result};
pub use self::image::{image_item::ImageItem, tensor::{Device, ImageTensor}};
pub use self::io::posed_loader::{load, load_with_parameters};
pub use self::numerics::pose::PoseVector;

macro_rules! define_float {
    ($f:tt) => {
        pub use std::$f as float;
        pub type Float = $f;
    }
}

define_float!(f64);

/**
 * Number of values in a flattened camera label: 16 extrinsic + 9 intrinsic
 */
pub const POSE_VECTOR_LEN: usize = 25;
