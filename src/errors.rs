use thiserror::Error as ThisError;

/// An error structure that contains the error variants that occur when
/// pairing a matrix with a right hand side or when solving the system.
///
/// Every variant is fatal to the solve that produced it: the solver does
/// not retry and never returns a partial solution. A system that produced
/// an error has been consumed in a partially transformed state.
#[derive(Debug, Clone, ThisError, PartialEq, Eq)]
pub enum SolveError {
    /// The system has fewer equations than unknowns and thus cannot have
    /// a unique solution.
    #[error(
        "System has {} equations for {} unknowns. It must have at least as many equations as unknowns.",
        equations,
        unknowns
    )]
    UnderdeterminedSystem {
        /// the number of equations (matrix rows)
        equations: usize,
        /// the number of unknowns (matrix columns)
        unknowns: usize,
    },

    /// The right hand side does not pair up with the matrix rows. Each
    /// equation must have exactly one right hand side entry.
    #[error(
        "Matrix has {} rows, but the right hand side has {} entries. The lengths must match.",
        equations,
        rhs_len
    )]
    MismatchedRightHandSide {
        /// the number of equations (matrix rows)
        equations: usize,
        /// the number of entries in the given right hand side
        rhs_len: usize,
    },

    /// The coefficient matrix has no rows or no columns.
    #[error("Coefficient matrix must have a nonzero number of rows and columns.")]
    EmptySystem,

    /// The randomized preconditioning step failed because the accumulated
    /// sum of one column canceled to (near) zero, so it cannot be used to
    /// perturb the diagonal of that column.
    #[error(
        "Preconditioning failed: the accumulated sum of column {} canceled to zero.",
        column
    )]
    PreconditioningFailed {
        /// the column whose sum vanished
        column: usize,
    },

    /// A diagonal entry was still (near) zero after forward elimination,
    /// which means the system is singular or numerically too close to
    /// singular to divide by its pivots.
    #[error(
        "Pivot {} vanished during elimination. The system is singular or too close to singular.",
        index
    )]
    SingularPivot {
        /// the index of the vanishing diagonal entry
        index: usize,
    },

    /// An equation beyond the leading square subsystem disagrees with the
    /// solution of that subsystem, so the system as a whole is
    /// unsatisfiable.
    #[error(
        "Equation {} is inconsistent with the solution of the leading square subsystem.",
        row
    )]
    InconsistentEquation {
        /// the row index of the contradicting equation
        row: usize,
    },
}
