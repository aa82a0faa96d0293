//! Rendering of evaluations.

use std::fmt::Display;
use std::io::Write;

use crate::args::Evaluation;

/// Writes each successful evaluation to `out` and each failed one to `err`.
pub fn write_plain<O: Display>(
    evaluations: &[Evaluation<O>],
    out: &mut impl Write,
    err: &mut impl Write,
) -> std::io::Result<()> {
    for evaluation in evaluations {
        match &evaluation.outcome {
            Ok(computed) => writeln!(out, "{computed}")?,
            Err(error) => writeln!(err, "{error}")?,
        }
    }
    Ok(())
}
