use super::UrlReport;
use crate::Result;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(reports: &[UrlReport], writer: &mut W) -> Result<()> {
    let url_data: Vec<_> = reports
        .iter()
        .map(|report| {
            let metrics: Vec<_> = report
                .assessments
                .iter()
                .map(|assessment| {
                    json!({
                        "name": assessment.name,
                        "p75": assessment.p75,
                        "threshold": assessment.threshold,
                        "score": assessment.score.to_string(),
                    })
                })
                .collect();

            json!({
                "url": report.url,
                "record_url": report.record_url,
                "metrics": metrics,
            })
        })
        .collect();

    let output = json!({
        "urls": url_data
    });

    writeln!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}
