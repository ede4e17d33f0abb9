//! JSON export of scan results

use crate::error::Result;
use crate::models::ScanReport;
use std::path::Path;
use tracing::info;

/// Exports a scan report as a JSON file
pub fn export(report: &ScanReport, output_path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(output_path, json)?;
    info!("JSON results saved to {}", output_path.display());
    Ok(())
}

/// Loads a ScanReport from a JSON file
pub fn load(input_path: &Path) -> Result<ScanReport> {
    let content = std::fs::read_to_string(input_path)?;
    let report: ScanReport = serde_json::from_str(&content)?;
    Ok(report)
}
