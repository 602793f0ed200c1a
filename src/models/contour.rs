//! Energy contour of a single oscillator in the (x, p) phase plane
//!
//! For N = 1 the surface H(x, p) = E is the ellipse
//!
//! $$x = x_{max} \cos\theta, \qquad p = p_{max} \sin\theta$$
//!
//! with $x_{max} = \sqrt{2E / (m\omega^2)}$ and $p_{max} = \sqrt{2mE}$.
//! For N > 1 the surface is a hyper-ellipsoid in 2N dimensions and no
//! contour is produced.
//!
//! # Example
//!
//! ```rust
//! use harmonic_rs::models::PhaseSpaceContour;
//! use harmonic_rs::physics::SystemParameters;
//!
//! let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
//! let contour = PhaseSpaceContour::for_parameters(&params).unwrap();
//! assert_eq!(contour.len(), 500);
//!
//! // Not available for more than one oscillator
//! let params = SystemParameters::new(2, 10.0, 1.0, 1.0, 1.0).unwrap();
//! assert!(PhaseSpaceContour::for_parameters(&params).is_err());
//! ```

use ndarray::{Array2, ArrayView1};
use std::f64::consts::PI;

use crate::physics::constants::{CONTOUR_SAMPLE_COUNT, TWO_PI};
use crate::physics::{ParameterError, SystemParameters};
use crate::sampling::linspace;

/// Sampled ellipse H(x, p) = E of one oscillator
///
/// Points are stored as an `[samples × 2]` array: column 0 is the position
/// x, column 1 the momentum p. θ runs over [0, 2π] with both endpoints, so
/// the last point coincides with the first and the polyline is closed.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseSpaceContour {
    mass: f64,
    angular_frequency: f64,
    energy: f64,
    x_max: f64,
    p_max: f64,
    points: Array2<f64>,
}

impl PhaseSpaceContour {
    /// Contour with the default number of angular samples
    ///
    /// # Errors
    ///
    /// [`ParameterError::ContourUnavailable`] when N ≠ 1.
    pub fn for_parameters(params: &SystemParameters) -> Result<Self, ParameterError> {
        Self::new(params, CONTOUR_SAMPLE_COUNT)
    }

    /// Contour with `samples` evenly spaced angles over [0, 2π]
    pub fn new(params: &SystemParameters, samples: usize) -> Result<Self, ParameterError> {
        if params.oscillators() != 1 {
            return Err(ParameterError::ContourUnavailable {
                oscillators: params.oscillators(),
            });
        }

        let mass = params.mass();
        let omega = params.angular_frequency();
        let energy = params.energy();

        let x_max = (2.0 * energy / (mass * omega * omega)).sqrt();
        let p_max = (2.0 * mass * energy).sqrt();

        let angles = linspace(0.0, TWO_PI, samples);
        let mut points = Array2::zeros((angles.len(), 2));
        for (i, theta) in angles.iter().enumerate() {
            points[[i, 0]] = x_max * theta.cos();
            points[[i, 1]] = p_max * theta.sin();
        }

        log::debug!(
            "Phase-space contour: E = {}, x_max = {:.6}, p_max = {:.6}, {} points",
            energy,
            x_max,
            p_max,
            angles.len()
        );

        Ok(Self {
            mass,
            angular_frequency: omega,
            energy,
            x_max,
            p_max,
            points,
        })
    }

    /// Number of sampled points
    pub fn len(&self) -> usize {
        self.points.nrows()
    }

    /// True when the contour has no point
    pub fn is_empty(&self) -> bool {
        self.points.nrows() == 0
    }

    /// Turning point x_max = √(2E / (mω²))
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    /// Maximum momentum p_max = √(2mE)
    pub fn p_max(&self) -> f64 {
        self.p_max
    }

    /// Energy of the contour
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Positions x (column 0)
    pub fn positions(&self) -> ArrayView1<'_, f64> {
        self.points.column(0)
    }

    /// Momenta p (column 1)
    pub fn momenta(&self) -> ArrayView1<'_, f64> {
        self.points.column(1)
    }

    /// All points as an `[samples × 2]` array
    pub fn points(&self) -> &Array2<f64> {
        &self.points
    }

    /// Iterate over (x, p) pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.rows().into_iter().map(|row| (row[0], row[1]))
    }

    /// Single-oscillator Hamiltonian H(x, p) = p²/2m + ½mω²x²
    pub fn hamiltonian(&self, x: f64, p: f64) -> f64 {
        p * p / (2.0 * self.mass) + 0.5 * self.mass * self.angular_frequency.powi(2) * x * x
    }

    /// Area enclosed by the ellipse, π·x_max·p_max = E/ν
    pub fn enclosed_area(&self) -> f64 {
        PI * self.x_max * self.p_max
    }
}

// =================================================================================================
// Tests
// =================================================================================================
