
use crate::errors::SolveError;
use crate::numeric::SolverScalar;
use crate::system::LinearSystem;
use nalgebra::DVector;
use num_traits::Float;
use rand::Rng;

/// default tolerance below which a value counts as zero
const DEFAULT_TOLERANCE: f64 = 1e-8;
/// scale for rounding solution entries to 8 decimal digits
const ROUNDING_SCALE: f64 = 1e8;

/// Solves a [`LinearSystem`] by Gaussian elimination, using randomized
/// preconditioning in place of a pivoting strategy.
///
/// # Algorithm
///
/// Before elimination, every equation is scaled by a fresh random factor
/// drawn uniformly from `$(0,1)$` and the column-wise sum of all scaled
/// equations is added to each equation. Both are elementary operations
/// that keep the solution set intact, and together they make an exactly
/// zero pivot statistically unlikely, so elimination can divide by the
/// diagonal entries as-is without searching for pivots.
///
/// This is a probabilistic substitute for pivoting: it is cheap, but it
/// can fail outright (when a column sum cancels to zero) and it can
/// produce numerically ill conditioned pivots that a pivot search would
/// have avoided. Results on near degenerate systems vary from run to run
/// with the consumed randomness.
///
/// # Usage
///
/// [`solve`](EliminationSolver::solve) draws its randomness from
/// [`rand::thread_rng`]. Use
/// [`solve_with_rng`](EliminationSolver::solve_with_rng) with a seeded
/// generator for reproducible runs.
///
/// ```rust
/// use nalgebra::{DMatrix, DVector};
/// use randelim::prelude::*;
///
/// # fn main() -> Result<(), SolveError> {
/// let matrix = DMatrix::<f64>::from_row_slice(2, 2, &[2., 1., 1., 3.]);
/// let rhs = DVector::from_vec(vec![3., 5.]);
/// let system = LinearSystem::new(matrix, rhs)?;
/// let solution = EliminationSolver::new().solve(system)?;
/// assert!((solution[0] - 0.8).abs() < 1e-6);
/// assert!((solution[1] - 1.4).abs() < 1e-6);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EliminationSolver<ScalarType>
where
    ScalarType: SolverScalar,
{
    /// tolerance below which a value counts as zero and two values count
    /// as equal
    tolerance: ScalarType,
}

impl<ScalarType> Default for EliminationSolver<ScalarType>
where
    ScalarType: SolverScalar,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<ScalarType> EliminationSolver<ScalarType>
where
    ScalarType: SolverScalar,
{
    /// Create a solver with the default zero tolerance of `1e-8`.
    pub fn new() -> Self {
        Self {
            tolerance: <ScalarType as SolverScalar>::from_f64(DEFAULT_TOLERANCE),
        }
    }

    /// Override the tolerance below which a pivot or a column sum counts
    /// as zero and two normalized right hand side values count as equal.
    ///
    /// The given tolerance is automatically converted to a non-negative
    /// number.
    pub fn with_tolerance(self, tolerance: ScalarType) -> Self {
        Self {
            tolerance: Float::abs(tolerance),
        }
    }

    /// Solve the given system, drawing the preconditioning randomness
    /// from [`rand::thread_rng`].
    ///
    /// This consumes the system: solving transforms the matrix and right
    /// hand side in place and a failed attempt leaves them in an
    /// unspecified intermediate state.
    ///
    /// # Returns
    ///
    /// On success, the solution vector with one entry per unknown, each
    /// rounded to 8 decimal digits. Beyond that precision the values may
    /// vary between invocations on the same input, because the
    /// intermediate row scalings are random.
    ///
    /// # Errors
    ///
    /// See [`solve_with_rng`](EliminationSolver::solve_with_rng).
    pub fn solve(
        &self,
        system: LinearSystem<ScalarType>,
    ) -> Result<DVector<ScalarType>, SolveError> {
        self.solve_with_rng(system, &mut rand::thread_rng())
    }

    /// Solve the given system, drawing the preconditioning randomness
    /// from the given generator. The same generator state on the same
    /// system reproduces the exact same result.
    ///
    /// # Errors
    ///
    /// * [`SolveError::UnderdeterminedSystem`] if the system has fewer
    ///   equations than unknowns. This is checked before any computation.
    /// * [`SolveError::PreconditioningFailed`] if a column sum canceled
    ///   to zero during preconditioning.
    /// * [`SolveError::SingularPivot`] if a diagonal entry vanished
    ///   despite the preconditioning.
    /// * [`SolveError::InconsistentEquation`] if a redundant equation
    ///   contradicts the solution of the leading square subsystem.
    pub fn solve_with_rng<R: Rng + ?Sized>(
        &self,
        mut system: LinearSystem<ScalarType>,
        rng: &mut R,
    ) -> Result<DVector<ScalarType>, SolveError> {
        let equations = system.equation_count();
        let unknowns = system.unknown_count();
        if equations < unknowns {
            return Err(SolveError::UnderdeterminedSystem {
                equations,
                unknowns,
            });
        }
        self.precondition(&mut system, rng)?;
        self.eliminate_forward(&mut system);
        self.check_diagonal(&system)?;
        self.check_redundant_equations(&mut system)?;
        self.eliminate_backward(&mut system);
        Ok(self.extract_solution(&system))
    }

    /// Randomly rescale and recombine the equations so that the pivots
    /// used by the subsequent elimination are generically nonzero.
    ///
    /// Every equation is scaled by a fresh uniform random factor, then the
    /// column-wise sums of the scaled equations are added to each
    /// equation. The sums are validated only after they have been folded
    /// into every equation, so the system stays mutated even when
    /// preconditioning reports failure.
    fn precondition<R: Rng + ?Sized>(
        &self,
        system: &mut LinearSystem<ScalarType>,
        rng: &mut R,
    ) -> Result<(), SolveError> {
        for y in 0..system.equation_count() {
            let multiplier = <ScalarType as SolverScalar>::from_f64(rng.gen_range(0.0..1.0));
            system.scale_equation(y, multiplier);
        }

        let column_sums = system.column_sums();
        let rhs_sum = system.rhs_sum();
        system.add_to_every_equation(&column_sums, rhs_sum);

        if let Some(column) = column_sums
            .iter()
            .position(|sum| Float::abs(*sum) < self.tolerance)
        {
            return Err(SolveError::PreconditioningFailed { column });
        }
        Ok(())
    }

    /// Bring the matrix to row echelon form by subtracting scaled pivot
    /// rows from all rows below them. No pivot search is performed, the
    /// diagonal entry is used as-is.
    fn eliminate_forward(&self, system: &mut LinearSystem<ScalarType>) {
        let unknowns = system.unknown_count();
        let equations = system.equation_count();
        for from_idx in 0..unknowns - 1 {
            for to_idx in from_idx + 1..equations {
                let diff =
                    system.matrix[(to_idx, from_idx)] / system.matrix[(from_idx, from_idx)];
                system.subtract_scaled_equation(to_idx, from_idx, diff);
            }
        }
    }

    /// Verify that the leading diagonal entries survived the elimination.
    /// The preconditioning makes vanishing pivots unlikely but cannot
    /// rule them out, so this second check is required.
    fn check_diagonal(&self, system: &LinearSystem<ScalarType>) -> Result<(), SolveError> {
        for idx in 0..system.unknown_count() {
            if Float::abs(system.matrix[(idx, idx)]) < self.tolerance {
                return Err(SolveError::SingularPivot { index: idx });
            }
        }
        Ok(())
    }

    /// Verify that every equation beyond the leading square subsystem is
    /// consistent with that subsystem.
    ///
    /// The scan starts at row `unknowns - 1`: that row is normalized
    /// first, compares to itself with zero difference and then serves as
    /// the reference value for all later rows, so the left-to-right order
    /// of the scan is load bearing.
    fn check_redundant_equations(
        &self,
        system: &mut LinearSystem<ScalarType>,
    ) -> Result<(), SolveError> {
        let last_col = system.unknown_count() - 1;
        for idx in last_col..system.equation_count() {
            system.rhs[idx] /= system.matrix[(idx, last_col)];
            system.matrix[(idx, last_col)] = ScalarType::one();
            if Float::abs(system.rhs[idx] - system.rhs[last_col]) > self.tolerance {
                return Err(SolveError::InconsistentEquation { row: idx });
            }
        }
        Ok(())
    }

    /// Clear the entries above the diagonal column by column, from the
    /// last unknown down to the first, adjusting the right hand side
    /// accordingly. Only one column is cleared per outer step, consistent
    /// with standard back-substitution order.
    fn eliminate_backward(&self, system: &mut LinearSystem<ScalarType>) {
        for x in (1..system.unknown_count()).rev() {
            for y in (0..x).rev() {
                let mult = system.matrix[(y, x)] / system.matrix[(x, x)];
                let sub = system.rhs[x] * mult;
                system.rhs[y] -= sub;
                system.matrix[(y, x)] = ScalarType::zero();
            }
        }
    }

    /// Divide each right hand side entry by its diagonal entry and round
    /// the result to the reported precision.
    fn extract_solution(&self, system: &LinearSystem<ScalarType>) -> DVector<ScalarType> {
        DVector::from_fn(system.unknown_count(), |i, _| {
            round_to_reported_digits(system.rhs[i] / system.matrix[(i, i)])
        })
    }
}

/// round a value to the 8 decimal digits the solver reports solutions in
fn round_to_reported_digits<ScalarType: SolverScalar>(value: ScalarType) -> ScalarType {
    let scale = <ScalarType as SolverScalar>::from_f64(ROUNDING_SCALE);
    Float::round(value * scale) / scale
}
