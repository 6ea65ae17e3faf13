use anyhow::Result;
use logsift_core::Error;
use logsift_core::access::LogReader;
use logsift_core::analysis::{AggregateReport, ReportBuilder, ReportWriter};
use std::fs;
use std::io;
use std::path::Path;

/// Process a single file, or every entry of a directory independently.
pub fn execute(path: &Path) -> Result<()> {
    if path.is_file() {
        generate_report(path)?;
    } else if path.is_dir() {
        tracing::info!("Processing directory: {}", path.display());

        // Snapshot the listing first so freshly written reports are not
        // picked up as inputs.
        let entries = fs::read_dir(path)?.collect::<io::Result<Vec<_>>>()?;
        for entry in entries {
            generate_report(&entry.path())?;
        }
    } else {
        return Err(Error::InvalidPath(path.to_path_buf()).into());
    }

    Ok(())
}

/// Build the statistics for one input file and write the JSON report
/// next to it.
pub fn generate_report(file: &Path) -> Result<AggregateReport> {
    tracing::info!("Generating statistics for: {}", file.display());

    let scan = LogReader::from_file(file)?;
    let report = ReportBuilder::default().build(&scan.requests)?;

    let output = ReportWriter::output_path_for(file);
    ReportWriter::to_file(&report, &output)?;

    print_summary(file, &output, &report);

    Ok(report)
}

fn print_summary(input: &Path, output: &Path, report: &AggregateReport) {
    use console::style;

    println!(
        "{} {} -> {}",
        style("Report:").bold().cyan(),
        input.display(),
        output.display()
    );
    println!("  Total Requests: {}", report.total_requests);

    if let Some((address, count)) = report.top_ips.first() {
        println!("  Busiest Client: {} ({} requests)", address, count);
    }
    if let Some(longest) = report.top_longest.first() {
        println!(
            "  Longest Request: [{}] {} {}",
            longest.duration, longest.method, longest.url
        );
    }
}
