extern crate nalgebra as na;

use na::{SVector,Vector3,Matrix4,Matrix3,UnitQuaternion,Isometry3,Translation3};
use crate::{Float,POSE_VECTOR_LEN};
use crate::error::{PosedImagesError,Result};

/**
 * Flattened camera label as stored in dataset.json.
 * Values 0..16 are the row-major camera-to-world extrinsic, 16..25 the row-major intrinsic.
 */
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct PoseVector {
    values: SVector<Float,POSE_VECTOR_LEN>
}

impl PoseVector {

    pub fn from_slice(values: &[Float]) -> Result<PoseVector> {
        match values.len() {
            POSE_VECTOR_LEN => Ok(PoseVector{values: SVector::<Float,POSE_VECTOR_LEN>::from_column_slice(values)}),
            actual => Err(PosedImagesError::PoseLengthMismatch{expected: POSE_VECTOR_LEN, actual})
        }
    }

    pub fn from_matrices(extrinsic: &Matrix4<Float>, intrinsic: &Matrix3<Float>) -> PoseVector {
        let mut values = SVector::<Float,POSE_VECTOR_LEN>::zeros();
        for r in 0..4 {
            for c in 0..4 {
                values[4*r+c] = extrinsic[(r,c)];
            }
        }
        for r in 0..3 {
            for c in 0..3 {
                values[16+3*r+c] = intrinsic[(r,c)];
            }
        }
        PoseVector{values}
    }

    pub fn as_slice(&self) -> &[Float] {
        self.values.as_slice()
    }

    pub fn values_mut(&mut self) -> &mut SVector<Float,POSE_VECTOR_LEN> {
        &mut self.values
    }

    pub fn extrinsic(&self) -> Matrix4<Float> {
        Matrix4::<Float>::from_row_slice(&self.values.as_slice()[..16])
    }

    pub fn intrinsic(&self) -> Matrix3<Float> {
        Matrix3::<Float>::from_row_slice(&self.values.as_slice()[16..])
    }

    pub fn rotation(&self) -> Matrix3<Float> {
        self.extrinsic().fixed_view::<3,3>(0,0).into_owned()
    }

    pub fn position(&self) -> Vector3<Float> {
        self.extrinsic().fixed_view::<3,1>(0,3).into_owned()
    }

    pub fn xyz(&self) -> [Float;3] {
        let p = self.position();
        [p.x,p.y,p.z]
    }

    /**
     * Bearing of the camera centre in the horizontal x-z plane, in (-pi, pi]
     */
    pub fn heading_angle(&self) -> Float {
        let [x,_,z] = self.xyz();
        z.atan2(x)
    }

    /**
     * Camera looks down its local -z axis
     */
    pub fn forward_direction(&self) -> Result<Vector3<Float>> {
        let direction = self.rotation()*Vector3::<Float>::new(0.0,0.0,-1.0);
        let mag = direction.norm();
        match mag {
            m if m > 0.0 && m.is_finite() => Ok(direction/m),
            _ => Err(PosedImagesError::DegenerateRotation)
        }
    }

    pub fn isometry(&self) -> Isometry3<Float> {
        from_matrix(&self.extrinsic())
    }

}

pub fn from_matrix(mat: &Matrix4<Float>) -> Isometry3<Float> {
    let vec = Vector3::<Float>::new(mat[(0,3)],mat[(1,3)],mat[(2,3)]);
    let rot = Matrix3::<Float>::new(mat[(0,0)],mat[(0,1)],mat[(0,2)],
                                    mat[(1,0)],mat[(1,1)],mat[(1,2)],
                                    mat[(2,0)],mat[(2,1)],mat[(2,2)]);

    Isometry3::<Float>::from_parts(Translation3::from(vec), UnitQuaternion::<Float>::from_matrix(&rot))
}
