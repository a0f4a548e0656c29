use crate::error::Result;
use serde::Serialize;
use sspred::workflows::predict::PredictionReport;
use std::io::Write;

#[derive(Serialize, Debug, PartialEq)]
struct ResidueRecord<'a> {
    method: &'a str,
    position: usize,
    residue: char,
    structure: char,
}

/// One block per method, separated by a blank line.
pub fn render_text(report: &PredictionReport) -> String {
    report
        .predictions
        .iter()
        .map(|prediction| {
            format!(
                "{} Prediction:\nSequence: {}\nStructure: {}\n",
                prediction.method.label(),
                report.sequence,
                prediction.assignment
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes `method,position,residue,structure` rows with 1-based positions.
pub fn write_csv<W: Write>(report: &PredictionReport, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for prediction in &report.predictions {
        let residues = report.sequence.residues().iter();
        for (index, (residue, structure)) in residues.zip(prediction.assignment.iter()).enumerate() {
            csv_writer.serialize(ResidueRecord {
                method: prediction.method.key(),
                position: index + 1,
                residue: residue.code(),
                structure: structure.code(),
            })?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sspred::core::models::sequence::Sequence;
    use sspred::engine::config::Method;
    use sspred::workflows::predict::Predictor;

    fn report(text: &str, methods: &[Method]) -> PredictionReport {
        Predictor::default().run(&Sequence::from(text), methods)
    }

    #[test]
    fn text_output_for_a_single_method() {
        let rendered = render_text(&report("MVLSPADKTNVKAAW", &[Method::ChouFasman]));
        assert_eq!(
            rendered,
            "Chou-Fasman Prediction:\nSequence: MVLSPADKTNVKAAW\nStructure: EETTTHTEEHHHHHH\n"
        );
    }

    #[test]
    fn text_output_separates_methods_with_a_blank_line() {
        let rendered = render_text(&report("ACDEF", &[Method::ChouFasman, Method::Gor]));
        assert_eq!(
            rendered,
            "Chou-Fasman Prediction:\nSequence: ACDEF\nStructure: HHHHH\n\n\
             GOR Prediction:\nSequence: ACDEF\nStructure: TTEEH\n"
        );
    }

    #[test]
    fn csv_output_has_one_row_per_residue_and_method() {
        let mut buffer = Vec::new();
        write_csv(&report("ADDA", &[Method::ChouFasman, Method::Gor]), &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "method,position,residue,structure");
        assert_eq!(lines.len(), 1 + 2 * 4);
        assert_eq!(lines[1], "chou-fasman,1,A,H");
        assert_eq!(lines[4], "chou-fasman,4,A,H");
        assert_eq!(lines[5], "gor,1,A,T");
    }

    #[test]
    fn csv_output_for_empty_sequence_has_no_rows() {
        let mut buffer = Vec::new();
        write_csv(&report("", &[Method::Gor]), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().lines().count() <= 1);
    }
}
