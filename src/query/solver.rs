use crate::math::Real;
use crate::query::DistanceRequest;

/// The configuration of the narrow-phase numerical solver backing iterative
/// distance routines.
///
/// The built-in closed-form routines only read the tolerances; iterative
/// routines registered through [`crate::query::DistanceRegistry::register`]
/// (e.g., simplex-based solvers for convex pairs) also honor the iteration
/// cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// The absolute convergence tolerance.
    pub abs_err: Real,
    /// The relative convergence tolerance.
    pub rel_err: Real,
    /// The maximum number of iterations of an iterative routine.
    pub max_iterations: u32,
}

impl SolverConfig {
    /// A solver configuration tightened by the tolerances of `request`.
    ///
    /// Request tolerances of zero keep the solver defaults.
    pub fn for_request(&self, request: &DistanceRequest) -> SolverConfig {
        SolverConfig {
            abs_err: if request.abs_err > 0.0 {
                request.abs_err
            } else {
                self.abs_err
            },
            rel_err: if request.rel_err > 0.0 {
                request.rel_err
            } else {
                self.rel_err
            },
            max_iterations: self.max_iterations,
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            abs_err: 1.0e-12,
            rel_err: 1.0e-12,
            max_iterations: 128,
        }
    }
}
