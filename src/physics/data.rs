//! Computed data types
//!
//! Value records produced by one evaluation pass:
//! - [`PhaseSpaceResult`]: Γ, Ω, S at the reference energy
//! - [`EnergySample`] / [`EnergyCurve`]: Γ and Ω over a sampled energy range
//!
//! All of them are transient: created on demand, discarded after rendering.

use nalgebra::DVector;
use std::fmt;

use super::traits::entropy;

// =================================================================================================
// Point values
// =================================================================================================

/// Γ, Ω and S evaluated at a single energy
///
/// S is always derived from Ω (S = k_B·ln Ω); non-finite values are kept
/// as-is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseSpaceResult {
    /// Cumulative phase-space volume Γ(E)
    pub volume: f64,

    /// Density of states Ω(E)
    pub density: f64,

    /// Entropy S(E)
    pub entropy: f64,
}

impl PhaseSpaceResult {
    /// Build from Γ and Ω, deriving S
    pub fn from_volume_and_density(volume: f64, density: f64) -> Self {
        Self {
            volume,
            density,
            entropy: entropy(density),
        }
    }

    /// True when Γ, Ω and S are all finite
    pub fn is_finite(&self) -> bool {
        self.volume.is_finite() && self.density.is_finite() && self.entropy.is_finite()
    }
}

impl fmt::Display for PhaseSpaceResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Phase-space volume Γ(E): {}", format_scientific(self.volume, 4))?;
        writeln!(f, "Density of states Ω(E): {}", format_scientific(self.density, 4))?;
        write!(f, "Entropy S(E): {:.4}", self.entropy)
    }
}

/// Scientific notation with a signed, at least two-digit exponent
///
/// `format_scientific(1591.5, 4)` gives `"1.5915e+03"`, where `{:.4e}` would
/// give `"1.5915e3"`. Non-finite values print as `inf`, `-inf` or `NaN`.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{:.prec$e}", value, prec = precision);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => match exponent.parse::<i32>() {
            Ok(exp) => {
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exp.abs())
            }
            Err(_) => formatted,
        },
        None => formatted,
    }
}

// =================================================================================================
// Energy curve
// =================================================================================================

/// One sample of an energy curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergySample {
    /// Sampled energy
    pub energy: f64,

    /// Ω at that energy
    pub density: f64,

    /// Γ at that energy
    pub volume: f64,
}

/// Γ(E) and Ω(E) sampled over an ordered energy grid
///
/// Stored column-wise (one `DVector` per quantity) so that plotting and
/// export can borrow each column as a slice.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::physics::{EnergyCurve, EnergySample};
///
/// let curve = EnergyCurve::from_samples(vec![
///     EnergySample { energy: 1.0, density: 1.0, volume: 1.0 },
///     EnergySample { energy: 2.0, density: 1.0, volume: 2.0 },
/// ]);
/// assert_eq!(curve.len(), 2);
/// assert_eq!(curve.volumes(), &[1.0, 2.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyCurve {
    energies: DVector<f64>,
    densities: DVector<f64>,
    volumes: DVector<f64>,
}

impl EnergyCurve {
    /// Build from three columns of equal length
    ///
    /// # Panics
    ///
    /// Panics if the columns do not have the same length.
    pub fn new(energies: DVector<f64>, densities: DVector<f64>, volumes: DVector<f64>) -> Self {
        assert_eq!(
            energies.len(),
            densities.len(),
            "Energy grid has {} points but density column has {}",
            energies.len(),
            densities.len()
        );
        assert_eq!(
            energies.len(),
            volumes.len(),
            "Energy grid has {} points but volume column has {}",
            energies.len(),
            volumes.len()
        );

        Self {
            energies,
            densities,
            volumes,
        }
    }

    /// Build from row samples
    pub fn from_samples(samples: Vec<EnergySample>) -> Self {
        let energies = DVector::from_iterator(samples.len(), samples.iter().map(|s| s.energy));
        let densities = DVector::from_iterator(samples.len(), samples.iter().map(|s| s.density));
        let volumes = DVector::from_iterator(samples.len(), samples.iter().map(|s| s.volume));
        Self::new(energies, densities, volumes)
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    /// True when the curve has no sample
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    /// Sampled energies
    pub fn energies(&self) -> &[f64] {
        self.energies.as_slice()
    }

    /// Ω at each sampled energy
    pub fn densities(&self) -> &[f64] {
        self.densities.as_slice()
    }

    /// Γ at each sampled energy
    pub fn volumes(&self) -> &[f64] {
        self.volumes.as_slice()
    }

    /// S = k_B·ln Ω at each sampled energy
    pub fn entropies(&self) -> Vec<f64> {
        self.densities.iter().map(|&omega| entropy(omega)).collect()
    }

    /// Sample at index `i`
    pub fn get(&self, i: usize) -> Option<EnergySample> {
        if i >= self.len() {
            return None;
        }
        Some(EnergySample {
            energy: self.energies[i],
            density: self.densities[i],
            volume: self.volumes[i],
        })
    }

    /// Iterate over samples in energy order
    pub fn samples(&self) -> impl Iterator<Item = EnergySample> + '_ {
        (0..self.len()).filter_map(move |i| self.get(i))
    }

    /// Number of samples whose Γ or Ω is not finite
    pub fn non_finite_count(&self) -> usize {
        self.samples()
            .filter(|s| !s.density.is_finite() || !s.volume.is_finite())
            .count()
    }
}

impl fmt::Display for EnergyCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.energies.iter().next(), self.energies.iter().last()) {
            (Some(first), Some(last)) => {
                write!(f, "EnergyCurve [{} samples, E ∈ [{}, {}]]", self.len(), first, last)
            }
            _ => write!(f, "EnergyCurve [empty]"),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_curve() -> EnergyCurve {
        EnergyCurve::from_samples(vec![
            EnergySample { energy: 0.5, density: 1.0, volume: 0.5 },
            EnergySample { energy: 1.0, density: 2.0, volume: 1.0 },
            EnergySample { energy: 1.5, density: 0.0, volume: 1.5 },
        ])
    }

    #[test]
    fn test_result_derives_entropy() {
        let result = PhaseSpaceResult::from_volume_and_density(10.0, 1.0);
        assert_eq!(result.entropy, 0.0);
        assert!(result.is_finite());

        let singular = PhaseSpaceResult::from_volume_and_density(0.0, 0.0);
        assert_eq!(singular.entropy, f64::NEG_INFINITY);
        assert!(!singular.is_finite());
    }

    #[test]
    fn test_result_display_format() {
        let result = PhaseSpaceResult::from_volume_and_density(10.0, 1.0);
        let text = result.to_string();
        assert!(text.contains("Γ(E): 1.0000e+01"));
        assert!(text.contains("Ω(E): 1.0000e+00"));
        assert!(text.contains("S(E): 0.0000"));
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_scientific(1591.5, 4), "1.5915e+03");
        assert_eq!(format_scientific(0.15915494, 4), "1.5915e-01");
        assert_eq!(format_scientific(10.0 / std::f64::consts::TAU, 4), "1.5915e+00");
        assert_eq!(format_scientific(-2.5e-120, 2), "-2.50e-120");
        assert_eq!(format_scientific(0.0, 4), "0.0000e+00");
        assert_eq!(format_scientific(f64::INFINITY, 4), "inf");
        assert_eq!(format_scientific(f64::NAN, 4), "NaN");
    }

    #[test]
    fn test_curve_columns() {
        let curve = sample_curve();
        assert_eq!(curve.len(), 3);
        assert!(!curve.is_empty());
        assert_eq!(curve.energies(), &[0.5, 1.0, 1.5]);
        assert_eq!(curve.densities(), &[1.0, 2.0, 0.0]);
        assert_eq!(curve.volumes(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_curve_samples_and_entropies() {
        let curve = sample_curve();
        let samples: Vec<_> = curve.samples().collect();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].density, 2.0);
        assert!(curve.get(3).is_none());

        let entropies = curve.entropies();
        assert_eq!(entropies[0], 0.0);
        assert_eq!(entropies[2], f64::NEG_INFINITY);
        assert_eq!(curve.non_finite_count(), 0);
    }

    #[test]
    fn test_non_finite_count() {
        let curve = EnergyCurve::from_samples(vec![
            EnergySample { energy: 0.5, density: f64::INFINITY, volume: 0.5 },
            EnergySample { energy: 1.0, density: 2.0, volume: f64::NAN },
            EnergySample { energy: 1.5, density: 1.0, volume: 1.0 },
        ]);
        assert_eq!(curve.non_finite_count(), 2);
    }

    #[test]
    #[should_panic(expected = "density column")]
    fn test_mismatched_columns_panic() {
        EnergyCurve::new(
            DVector::from_vec(vec![1.0, 2.0]),
            DVector::from_vec(vec![1.0]),
            DVector::from_vec(vec![1.0, 2.0]),
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(sample_curve().to_string(), "EnergyCurve [3 samples, E ∈ [0.5, 1.5]]");
        let empty = EnergyCurve::from_samples(Vec::new());
        assert_eq!(empty.to_string(), "EnergyCurve [empty]");
    }
}
