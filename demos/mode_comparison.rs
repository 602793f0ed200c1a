//! Example: Dimensional vs dimensionless Γ(E)
//!
//! Overlays the phase-space volume computed in both modes, first with
//! m = 1 (the curves differ by (mω/ν)^N) and then with m = 1/2π, where
//! mω = ν and the two curves coincide.

use harmonic_rs::{
    output::{plot_curves_comparison, PlotConfig},
    physics::{constants::TWO_PI, format_scientific, ComputationMode, Observable, SystemParameters},
    report::Report,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let tmp_dir = std::env::temp_dir();

    for (tag, mass) in [("unit_mass", 1.0), ("matched_mass", 1.0 / TWO_PI)] {
        let params = SystemParameters::default().with_mass(mass)?;

        let dimensional = Report::compute(params, ComputationMode::Dimensional)?;
        let dimensionless = Report::compute(params, ComputationMode::Dimensionless)?;

        println!("m = {:.4}", mass);
        println!("  Γ dimensional   = {}", format_scientific(dimensional.result.volume, 4));
        println!("  Γ dimensionless = {}", format_scientific(dimensionless.result.volume, 4));

        let mut config = PlotConfig::for_observable(Observable::PhaseSpaceVolume);
        config.title = format!("Γ(E) for N = {}, m = {:.3}", params.oscillators(), mass);

        let path = tmp_dir.join(format!("modes_{}.png", tag));
        let path_str = path.to_str().ok_or("non UTF-8 temporary path")?;
        plot_curves_comparison(
            &[
                (ComputationMode::Dimensional.label(), &dimensional.curve),
                (ComputationMode::Dimensionless.label(), &dimensionless.curve),
            ],
            Observable::PhaseSpaceVolume,
            path_str,
            Some(&config),
        )?;
        println!("  → {}\n", path.display());
    }

    Ok(())
}
