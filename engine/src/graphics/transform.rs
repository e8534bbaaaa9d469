use cgmath::{Deg, Matrix3, Rad, SquareMatrix, Vector3};

/// A 2D affine transform stored as a homogeneous 3x3 matrix.
///
/// Every operation post-concatenates, so the most recently added operation is
/// the first one applied to user-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    matrix: Matrix3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Builds a transform from its six affine coefficients:
    /// `x' = scale_x * x + shear_x * y + translate_x`,
    /// `y' = shear_y * x + scale_y * y + translate_y`.
    pub fn new(
        scale_x: f64,
        shear_y: f64,
        shear_x: f64,
        scale_y: f64,
        translate_x: f64,
        translate_y: f64,
    ) -> Self {
        // cgmath is column major
        Self {
            matrix: Matrix3::new(
                scale_x,
                shear_y,
                0.0,
                shear_x,
                scale_y,
                0.0,
                translate_x,
                translate_y,
                1.0,
            ),
        }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, x, y)
    }

    pub fn scaling(x: f64, y: f64) -> Self {
        Self::new(x, 0.0, 0.0, y, 0.0, 0.0)
    }

    /// Positive angles turn the x axis towards the y axis, which is clockwise on screen.
    pub fn rotation(degrees: f64) -> Self {
        let rad: Rad<f64> = Deg(degrees).into();
        Self {
            matrix: Matrix3::from_angle_z(rad),
        }
    }

    pub fn shearing(x: f64, y: f64) -> Self {
        Self::new(1.0, y, x, 1.0, 0.0, 0.0)
    }

    pub fn then(&self, other: &Transform) -> Transform {
        Transform {
            matrix: self.matrix * other.matrix,
        }
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        *self = self.then(&Transform::translation(x, y));
    }

    pub fn scale(&mut self, x: f64, y: f64) {
        *self = self.then(&Transform::scaling(x, y));
    }

    pub fn rotate(&mut self, degrees: f64) {
        *self = self.then(&Transform::rotation(degrees));
    }

    pub fn rotate_about(&mut self, degrees: f64, x: f64, y: f64) {
        self.translate(x, y);
        self.rotate(degrees);
        self.translate(-x, -y);
    }

    pub fn shear(&mut self, x: f64, y: f64) {
        *self = self.then(&Transform::shearing(x, y));
    }

    pub fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        let v = self.matrix * Vector3::new(x, y, 1.0);
        (v.x, v.y)
    }

    pub fn inverse(&self) -> Option<Transform> {
        self.matrix.invert().map(|matrix| Transform { matrix })
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    pub(crate) fn to_skia(&self) -> tiny_skia::Transform {
        let m = &self.matrix;
        tiny_skia::Transform::from_row(
            m.x.x as f32,
            m.x.y as f32,
            m.y.x as f32,
            m.y.y as f32,
            m.z.x as f32,
            m.z.y as f32,
        )
    }
}
