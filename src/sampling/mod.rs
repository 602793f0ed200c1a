//! Energy sampling
//!
//! This module evaluates a statistical model over an energy grid, producing
//! the [`EnergyCurve`](crate::physics::EnergyCurve) that the plots and the
//! CSV export consume.
//!
//! # The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to sample
//!    - Statistical model (formulas + computation mode)
//!    - Reference energy E_ref
//!
//! 2. **Configuration** (`SamplingConfiguration`) - HOW MUCH to sample
//!    - Sample count (default 500)
//!    - Grid bounds `[energy_min, span_factor · E_ref]` (default `[0.01, 2E]`)
//!
//! 3. **Sampler** (`Sampler` trait) - The grid layout
//!    - `LinearSampler`: evenly spaced energies
//!
//! # Quick Start Example
//!
//! ```rust
//! use harmonic_rs::models::HarmonicOscillators;
//! use harmonic_rs::physics::{ComputationMode, SystemParameters};
//! use harmonic_rs::sampling::sample_energy_curve;
//!
//! let params = SystemParameters::new(3, 10.0, 1.0, 1.0, 1.0).unwrap();
//! let model = HarmonicOscillators::new(params, ComputationMode::Dimensionless);
//!
//! let curve = sample_energy_curve(&model, 10.0, 500).unwrap();
//! assert_eq!(curve.len(), 500);
//! ```
//!
//! # Error Handling
//!
//! Sampling returns `Result<EnergyCurve, String>`. Errors only come from an
//! invalid configuration or scenario; numerical singularities of the model
//! are kept in the curve as non-finite values and reported with
//! `log::warn!`.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod methods;
mod scenario;
mod traits;

// =================================================================================================
// Parallel Execution Threshold
// =================================================================================================
//
// The threshold is stored in an AtomicUsize so that it can be changed at
// runtime (useful in benchmarks and tests) without a mutex on every sampling
// call. Relaxed ordering is sufficient: the value is a performance hint, not
// a synchronisation point.
// =================================================================================================

use std::sync::atomic::{AtomicUsize, Ordering};

/// Default number of samples from which curve evaluation switches to Rayon
///
/// One closed-form evaluation costs a few hundred nanoseconds; below a few
/// thousand samples the thread-pool dispatch costs more than it saves.
const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Runtime-configurable parallel-execution threshold.
static PARALLEL_THRESHOLD: AtomicUsize = AtomicUsize::new(DEFAULT_PARALLEL_THRESHOLD);

/// Return the current parallel-execution threshold.
///
/// `LinearSampler` evaluates grids with fewer samples than this value
/// sequentially, and switches to Rayon at or above it, but only when the
/// crate is compiled with the `parallel` feature.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::sampling::parallel_threshold;
///
/// assert!(parallel_threshold() > 0);
/// ```
pub fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

/// Set the parallel-execution threshold to a new value.
///
/// # Panics
///
/// Panics when `threshold == 0`.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::sampling::{parallel_threshold, set_parallel_threshold};
///
/// let previous = parallel_threshold();
/// set_parallel_threshold(10_000);
/// assert_eq!(parallel_threshold(), 10_000);
///
/// // Restore so other tests are not affected.
/// set_parallel_threshold(previous);
/// ```
pub fn set_parallel_threshold(threshold: usize) {
    assert!(threshold > 0, "parallel threshold must be at least 1");
    PARALLEL_THRESHOLD.store(threshold, Ordering::Relaxed);
}

#[cfg(test)]
static THRESHOLD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// RAII guard that saves the current threshold on construction and restores
/// it on drop.
///
/// Only compiled in test builds. Holds a lock for its whole lifetime so that
/// tests touching the threshold run one at a time.
///
/// ```rust,ignore
/// let _guard = crate::sampling::ThresholdGuard::save(50);
/// // threshold is now 50 …
/// // … and is automatically restored when _guard is dropped.
/// ```
#[cfg(test)]
pub(crate) struct ThresholdGuard {
    previous: usize,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[cfg(test)]
impl ThresholdGuard {
    /// Set the threshold to `new_value` and return a guard that will
    /// restore the previous value on drop.
    pub(crate) fn save(new_value: usize) -> Self {
        let lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let previous = parallel_threshold();
        set_parallel_threshold(new_value);
        Self {
            previous,
            _lock: lock,
        }
    }
}

#[cfg(test)]
impl Drop for ThresholdGuard {
    fn drop(&mut self) {
        PARALLEL_THRESHOLD.store(self.previous, Ordering::Relaxed);
    }
}

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use methods::LinearSampler;
pub use scenario::Scenario;
pub use traits::{Sampler, SamplingConfiguration};

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::physics::{EnergyCurve, StatisticalModel};

/// Evenly spaced values from `start` to `end`, both included
///
/// `count == 1` yields `[start]`, `count == 0` an empty vector. Each value
/// is computed from its index, so the last one is exactly `end`.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::sampling::linspace;
///
/// assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        }
    }
}

/// Sample Γ(E) and Ω(E) of `model` over `[0.01, 2·reference_energy]`
///
/// Shorthand for a [`LinearSampler`] with the default bounds and
/// `sample_count` points. The model is borrowed; nothing is shared between
/// calls.
pub fn sample_energy_curve<M>(
    model: &M,
    reference_energy: f64,
    sample_count: usize,
) -> Result<EnergyCurve, String>
where
    M: StatisticalModel + Clone + 'static,
{
    let scenario = Scenario::new(Box::new(model.clone())).with_reference_energy(reference_energy);
    let config = SamplingConfiguration::default().with_sample_count(sample_count);
    LinearSampler::new().sample(&scenario, &config)
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold_value() {
        assert_eq!(DEFAULT_PARALLEL_THRESHOLD, 4096);
    }

    #[test]
    fn test_get_and_set_threshold() {
        let _guard = ThresholdGuard::save(500);
        assert_eq!(parallel_threshold(), 500);
    }

    #[test]
    #[should_panic(expected = "parallel threshold must be at least 1")]
    fn test_zero_threshold_panics() {
        set_parallel_threshold(0);
    }

    #[test]
    fn test_threshold_guard_restores_previous_value() {
        let guard = ThresholdGuard::save(42);
        let previous = guard.previous;
        assert_eq!(parallel_threshold(), 42);
        drop(guard);

        // Guards restore before releasing the lock, so under the lock the
        // value is back to what it was before.
        let _lock = THRESHOLD_LOCK
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        assert_eq!(parallel_threshold(), previous);
    }

    #[test]
    fn test_linspace() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);

        let grid = linspace(0.01, 20.0, 500);
        assert_eq!(grid.len(), 500);
        assert_eq!(grid[0], 0.01);
        assert_eq!(grid[499], 20.0);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn test_linspace_descending() {
        assert_eq!(linspace(1.0, 0.0, 3), vec![1.0, 0.5, 0.0]);
    }
}
