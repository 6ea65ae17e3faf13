use super::AggregateReport;
use crate::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct ReportWriter;

impl ReportWriter {
    /// Write a report to a file.
    pub fn to_file(report: &AggregateReport, path: &Path) -> Result<()> {
        tracing::debug!("Writing report to: {}", path.display());

        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write_pretty(report, &mut writer)?;
        writer.write_all(b"\n")?;

        tracing::info!(
            "Successfully wrote report for {} requests to {}",
            report.total_requests,
            path.display()
        );

        Ok(())
    }

    /// Convert a report to a JSON string.
    pub fn to_string(report: &AggregateReport) -> Result<String> {
        let mut buffer = Vec::new();
        write_pretty(report, &mut buffer)?;
        Ok(String::from_utf8(buffer).expect("serde_json emits UTF-8"))
    }

    /// Report path for an input file: a sibling named after the input's
    /// basename up to the first dot, with a .json extension.
    pub fn output_path_for(input: &Path) -> PathBuf {
        let name = input
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = name.split('.').next().unwrap_or_default();
        input.with_file_name(format!("{stem}.json"))
    }
}

// Reports are indented with four spaces, not serde_json's default two.
fn write_pretty<W: Write>(report: &AggregateReport, writer: W) -> Result<()> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    report.serialize(&mut serializer)?;
    Ok(())
}
