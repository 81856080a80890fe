use nalgebra::RealField;
use nalgebra::Scalar;
use num_traits::Float;

/// The abilities the solver requires of its scalar type: a real floating
/// point number that nalgebra can store in its matrix types and into which
/// f64 constants (such as the default zero tolerance) can be cast.
///
/// This is implemented for [`f32`] and [`f64`]. Casting f64 into
/// f32 is typically associated with a loss of precision, so for f32
/// systems a wider tolerance is usually appropriate.
pub trait SolverScalar: Scalar + RealField + Float {
    /// make an f64 constant into a value of this type
    fn from_f64(value: f64) -> Self;
}

impl SolverScalar for f64 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }
}

impl SolverScalar for f32 {
    #[inline]
    fn from_f64(value: f64) -> Self {
        value as _
    }
}
