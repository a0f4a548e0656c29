use crate::cli::{Cli, OutputFormat};
use crate::config::{self, AppConfig};
use crate::error::Result;
use crate::output;
use sspred::core::models::sequence::Sequence;
use sspred::workflows::predict::Predictor;
use std::io::Write;
use tracing::{info, warn};

pub fn run(sequence: &str, cli: &Cli) -> Result<()> {
    info!("Merging configuration from file and CLI arguments...");
    let app_config = config::load(cli)?;

    let stdout = std::io::stdout();
    predict_to(sequence, &app_config, stdout.lock())
}

fn predict_to<W: Write>(sequence: &str, app_config: &AppConfig, mut out: W) -> Result<()> {
    let predictor = Predictor::from_config(&app_config.core_config)?;
    let sequence = Sequence::from(sequence);

    for (index, residue) in sequence.non_standard_residues() {
        warn!(
            "Residue '{}' at position {} is not a standard amino-acid code; it contributes no propensity.",
            residue,
            index + 1
        );
    }

    let report = predictor.run(&sequence, &app_config.core_config.methods);
    for prediction in &report.predictions {
        info!(
            "{} composition: {}",
            prediction.method.label(),
            prediction.assignment.composition()
        );
    }

    match app_config.format {
        OutputFormat::Text => {
            let rendered = output::render_text(&report);
            if !rendered.is_empty() {
                writeln!(out, "{}", rendered.trim_end_matches('\n'))?;
            }
        }
        OutputFormat::Csv => output::write_csv(&report, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
