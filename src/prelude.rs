pub use crate::errors::SolveError;
pub use crate::numeric::SolverScalar;
pub use crate::solver::EliminationSolver;
pub use crate::system::LinearSystem;
