
use crate::errors::SolveError;
use crate::numeric::SolverScalar;
use nalgebra::{DMatrix, DVector, RowDVector};

/// A dense system of linear equations `$A\vec{x} = \vec{b}$` with
/// `size_y` equations for `size_x` unknowns, where `$A$` is the
/// coefficient matrix and `$\vec{b}$` is the right hand side.
///
/// # Construction
///
/// Use [`LinearSystem::new`] to pair a coefficient matrix with its right
/// hand side. Construction validates that the right hand side has exactly
/// one entry per matrix row, so that every transformation applied to a
/// matrix row can be applied to its paired right hand side entry as well.
///
/// # Usage
///
/// Pass the system to an [`EliminationSolver`](crate::solver::EliminationSolver),
/// which consumes it. Solving transforms the matrix and the right hand
/// side in place, so a system cannot be reused after a solve attempt;
/// the consuming interface makes this explicit.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<ScalarType>
where
    ScalarType: SolverScalar,
{
    /// the coefficient matrix `$A$`
    pub(crate) matrix: DMatrix<ScalarType>,
    /// the right hand side `$\vec{b}$`, one entry per matrix row
    pub(crate) rhs: DVector<ScalarType>,
}

impl<ScalarType> LinearSystem<ScalarType>
where
    ScalarType: SolverScalar,
{
    /// Pair a coefficient matrix with its right hand side.
    ///
    /// # Errors
    ///
    /// * [`SolveError::EmptySystem`] if the matrix has no rows or no columns
    /// * [`SolveError::MismatchedRightHandSide`] if the right hand side
    ///   does not have exactly one entry per matrix row
    pub fn new(
        matrix: DMatrix<ScalarType>,
        rhs: DVector<ScalarType>,
    ) -> Result<Self, SolveError> {
        if matrix.nrows() == 0 || matrix.ncols() == 0 {
            return Err(SolveError::EmptySystem);
        }
        if matrix.nrows() != rhs.len() {
            return Err(SolveError::MismatchedRightHandSide {
                equations: matrix.nrows(),
                rhs_len: rhs.len(),
            });
        }
        Ok(Self { matrix, rhs })
    }

    /// the number of equations in the system, i.e. the number of matrix rows
    pub fn equation_count(&self) -> usize {
        self.matrix.nrows()
    }

    /// the number of unknowns, i.e. the number of matrix columns
    pub fn unknown_count(&self) -> usize {
        self.matrix.ncols()
    }

    /// read access to the coefficient matrix
    pub fn matrix(&self) -> &DMatrix<ScalarType> {
        &self.matrix
    }

    /// read access to the right hand side
    pub fn right_hand_side(&self) -> &DVector<ScalarType> {
        &self.rhs
    }

    /// Scale equation `idx` by the given factor, i.e. multiply the matrix
    /// row and its paired right hand side entry. For a nonzero factor this
    /// is an elementary operation that keeps the solution set intact.
    pub(crate) fn scale_equation(&mut self, idx: usize, factor: ScalarType) {
        let mut row = self.matrix.row_mut(idx);
        row *= factor;
        self.rhs[idx] *= factor;
    }

    /// Subtract `factor` times equation `src` from equation `dst`, applied
    /// to the matrix row and the paired right hand side entry.
    pub(crate) fn subtract_scaled_equation(
        &mut self,
        dst: usize,
        src: usize,
        factor: ScalarType,
    ) {
        for x in 0..self.matrix.ncols() {
            let sub = self.matrix[(src, x)] * factor;
            self.matrix[(dst, x)] -= sub;
        }
        let sub = self.rhs[src] * factor;
        self.rhs[dst] -= sub;
    }

    /// Add the same row vector to every matrix row and the same scalar to
    /// every right hand side entry. When the offsets are a linear
    /// combination of the equations themselves, this is an elementary
    /// operation that keeps the solution set intact.
    pub(crate) fn add_to_every_equation(
        &mut self,
        row_offset: &RowDVector<ScalarType>,
        rhs_offset: ScalarType,
    ) {
        for y in 0..self.matrix.nrows() {
            let mut row = self.matrix.row_mut(y);
            row += row_offset;
            self.rhs[y] += rhs_offset;
        }
    }

    /// the column-wise sums of all matrix rows
    pub(crate) fn column_sums(&self) -> RowDVector<ScalarType> {
        self.matrix.row_sum()
    }

    /// the sum of all right hand side entries
    pub(crate) fn rhs_sum(&self) -> ScalarType {
        self.rhs.sum()
    }
}
