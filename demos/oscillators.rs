//! Example: Harmonic oscillators, both computation modes
//!
//! Evaluates the default system (N = 3, E = 10, m = ν = h = 1) and a single
//! oscillator, prints the results, and writes plots and CSV files to the
//! system temporary directory.
//!
//! Run with `RUST_LOG=debug` to see the sampling diagnostics.

use harmonic_rs::{
    output::{
        export_contour_csv, export_energy_curve_csv, plot_density_of_states,
        plot_phase_space_contour, plot_phase_space_volume, CsvConfig, CsvMetadata,
    },
    physics::{constants::HAMILTONIAN_LATEX, ComputationMode, SystemParameters},
    report::Report,
};

use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("═══════════════════════════════════════════════════════");
    println!("  Phase space of N harmonic oscillators");
    println!("═══════════════════════════════════════════════════════\n");
    println!("Hamiltonian: {}\n", HAMILTONIAN_LATEX);

    let tmp_dir = std::env::temp_dir();

    // ====== Default system, both modes ======

    let params = SystemParameters::default();

    for mode in ComputationMode::ALL {
        println!("{}", mode.volume_formula());

        let start = Instant::now();
        let report = Report::compute(params, mode)?;
        let elapsed = start.elapsed();

        println!("{}", report);
        println!("  computed in {:.2?}\n", elapsed);

        let tag = match mode {
            ComputationMode::Dimensional => "dimensional",
            ComputationMode::Dimensionless => "dimensionless",
        };

        let omega_path = tmp_dir.join(format!("omega_{}.png", tag));
        let gamma_path = tmp_dir.join(format!("gamma_{}.png", tag));
        let csv_path = tmp_dir.join(format!("curve_{}.csv", tag));

        plot_density_of_states(&report.curve, params.oscillators(), path_str(&omega_path)?, None)?;
        plot_phase_space_volume(&report.curve, params.oscillators(), path_str(&gamma_path)?, None)?;

        let config = CsvConfig::default().with_metadata(CsvMetadata::from_report(&report));
        export_energy_curve_csv(&report.curve, path_str(&csv_path)?, Some(&config))?;

        println!("  → {}", omega_path.display());
        println!("  → {}", gamma_path.display());
        println!("  → {}\n", csv_path.display());
    }

    // ====== Single oscillator: phase-space ellipse ======

    let single = params.with_oscillators(1)?;
    let report = Report::compute(single, ComputationMode::Dimensional)?;
    println!("{}\n", report);

    if let Some(contour) = &report.contour {
        let plot_path = tmp_dir.join("phase_space_contour.png");
        let csv_path = tmp_dir.join("phase_space_contour.csv");

        plot_phase_space_contour(contour, path_str(&plot_path)?, None)?;
        export_contour_csv(contour, path_str(&csv_path)?, None)?;

        println!("  enclosed area / h = {:.4}", contour.enclosed_area() / single.planck());
        println!("  → {}", plot_path.display());
        println!("  → {}", csv_path.display());
    }

    Ok(())
}

fn path_str(path: &std::path::Path) -> Result<&str, Box<dyn std::error::Error>> {
    path.to_str().ok_or_else(|| format!("non UTF-8 path: {}", path.display()).into())
}
