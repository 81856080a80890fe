#![warn(missing_docs)]
//!
//! # Introduction
//!
//! This crate solves dense systems of linear equations
//!
//! ```math
//! A \vec{x} = \vec{b},
//! ```
//!
//! where `$A$` is a `size_y` by `size_x` matrix of coefficients and
//! `$\vec{b}$` is a right hand side vector with `size_y` elements. The
//! system may be square or overdetermined (`size_y >= size_x`): equations
//! beyond the leading square subsystem must be redundant, i.e. consistent
//! with the solution of that subsystem, and are validated against it.
//!
//! The solver performs plain Gaussian elimination, but it does not search
//! for pivots. Instead it relies on a randomized preconditioning step:
//! every equation is scaled by a fresh random factor drawn uniformly from
//! `$(0,1)$`, and afterwards the column-wise sum of all scaled equations
//! is added to every equation. Both are elementary row operations, so the
//! solution set is unchanged, but a pivot that happened to be exactly zero
//! in the input is now zero only with vanishing probability.
//!
//! This trick deliberately trades numerical robustness for simplicity.
//! It can fail outright when a column sum cancels to zero, and it can
//! leave pivots that are merely *unlikely* to be zero rather than chosen
//! for numerical quality, which a partial pivoting strategy would
//! guarantee. Near degenerate systems may therefore fail (or succeed with
//! reduced accuracy) depending on the consumed randomness. The reported
//! solution is rounded to 8 decimal digits; beyond that precision the
//! values may vary from run to run on the same input.
//!
//! # Usage and Workflow
//!
//! Solving a system consists of the following steps.
//! 1. Pair the coefficient matrix with its right hand side in a
//!    [LinearSystem](crate::system::LinearSystem). Construction validates
//!    that the dimensions are consistent.
//! 2. Create an [EliminationSolver](crate::solver::EliminationSolver),
//!    optionally overriding the zero tolerance.
//! 3. Call [solve](crate::solver::EliminationSolver::solve) (which draws
//!    its randomness from [rand::thread_rng]) or
//!    [solve_with_rng](crate::solver::EliminationSolver::solve_with_rng)
//!    with a seeded generator for reproducible results. Solving consumes
//!    the system.
//! 4. On success the solution is returned as a vector with one entry per
//!    unknown. On failure a [SolveError](crate::errors::SolveError)
//!    variant tells which check rejected the system; any failure aborts
//!    the whole solve and there are no partial results.
//!
//! # Example
//!
//! The following solves the square system `$2x + y = 3$`, `$x + 3y = 5$`
//! together with a third, redundant equation that is a scalar multiple of
//! the first:
//!
//! ```rust
//! use nalgebra::{DMatrix, DVector};
//! use randelim::prelude::*;
//!
//! # fn main() -> Result<(), SolveError> {
//! let matrix = DMatrix::<f64>::from_row_slice(3, 2, &[
//!     2., 1., //
//!     1., 3., //
//!     4., 2., //
//! ]);
//! let rhs = DVector::from_vec(vec![3., 5., 6.]);
//!
//! let system = LinearSystem::new(matrix, rhs)?;
//! let solution = EliminationSolver::new().solve(system)?;
//!
//! assert!((solution[0] - 0.8).abs() < 1e-6);
//! assert!((solution[1] - 1.4).abs() < 1e-6);
//! # Ok(())
//! # }
//! ```

/// error types reported when constructing or solving a system
pub mod errors;
/// the scalar abilities the solver requires of its floating point type
pub mod numeric;
/// commonly useful imports
pub mod prelude;
/// the elimination pipeline that solves a system
pub mod solver;
/// the linear system type pairing a coefficient matrix with its right hand side
pub mod system;
