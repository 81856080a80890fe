use nalgebra::{DMatrix, DVector};
use randelim::prelude::*;

/// the unique solution of the reference square system
pub const REFERENCE_SOLUTION: [f64; 2] = [0.8, 1.4];

/// build a system from equations given as rows of coefficients and the
/// matching right hand side entries
pub fn system_from_rows(rows: &[&[f64]], rhs: &[f64]) -> LinearSystem<f64> {
    let ncols = rows[0].len();
    let flat: Vec<f64> = rows.iter().flat_map(|row| row.iter().copied()).collect();
    let matrix = DMatrix::from_row_slice(rows.len(), ncols, &flat);
    LinearSystem::new(matrix, DVector::from_vec(rhs.to_vec()))
        .expect("test systems are well formed")
}

/// the guaranteed-solvable reference system `2x + y = 3`, `x + 3y = 5`
/// with the unique solution `(0.8, 1.4)`
pub fn reference_square_system() -> LinearSystem<f64> {
    system_from_rows(&[&[2., 1.], &[1., 3.]], &[3., 5.])
}
