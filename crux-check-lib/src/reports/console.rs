use super::{Decorator, Outcome, UrlReport};
use crate::Result;
use core::fmt::Write;

pub fn generate<W: Write>(reports: &[UrlReport], decorator: &dyn Decorator, writer: &mut W) -> Result<()> {
    for (index, report) in reports.iter().enumerate() {
        if index > 0 {
            writeln!(writer)?;
        }

        match report.normalized_url() {
            Some(record_url) => writeln!(writer, "CrUX data for {} (reported as {record_url})", report.url)?,
            None => writeln!(writer, "CrUX data for {}", report.url)?,
        }

        writeln!(
            writer,
            "{}",
            decorator.decorate(&format!("{:>10}: {:>5} {:>10} {:>7}", "Metric", "P75", "Threshold", "Status"), Outcome::Neutral)
        )?;

        for assessment in &report.assessments {
            write!(writer, "{}", decorator.decorate(&format!("{:>10}:", assessment.name), Outcome::Neutral))?;
            write!(writer, "{}", decorator.decorate(&format!("{:>6}", assessment.p75), Outcome::Neutral))?;
            write!(writer, "{}", decorator.decorate(&format!("{:>10}", assessment.threshold), Outcome::Neutral))?;
            writeln!(
                writer,
                "{}",
                decorator.decorate(&format!("{:>8}", assessment.score), Outcome::from(assessment.score))
            )?;
        }
    }

    Ok(())
}
