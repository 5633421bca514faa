//! # Artifact Export
//!
//! Renders a [`Report`] into its three artifacts:
//!
//! | File | Content |
//! |------|---------|
//! | `parsed_<stem>.json` | the [`ParseResult`], pretty-printed |
//! | `<stem>_ia_requirements.json` | the coordinate mapping, pretty-printed |
//! | `<stem>_security_analysis.csv` | the flat table, header first |
//!
//! The flat table has one row per requirement (`Gap Identified` = `No`)
//! followed by one row per gap for each characteristic.

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use secreq_lattice::CoordinateMap;

use crate::error::{ReportError, ReportResult};
use crate::pipeline::Report;
use crate::result::ParseResult;

/// One row of the flat table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpreadsheetRow {
    /// Characteristic label.
    #[serde(rename = "Characteristic")]
    pub characteristic: String,
    /// Requirement text; empty on gap rows.
    #[serde(rename = "Requirement")]
    pub requirement: String,
    /// Information-state label; empty on gap rows.
    #[serde(rename = "Information State")]
    pub information_state: String,
    /// Measure-type label; empty on gap rows.
    #[serde(rename = "Measure Type")]
    pub measure_type: String,
    /// `"No"` on requirement rows, the gap description on gap rows.
    #[serde(rename = "Gap Identified")]
    pub gap_identified: String,
    /// Coverage verdict of the characteristic.
    #[serde(rename = "Coverage")]
    pub coverage: String,
}

/// Rows of the flat table, characteristic by characteristic.
pub fn spreadsheet_rows(result: &ParseResult) -> Vec<SpreadsheetRow> {
    let mut rows = Vec::new();
    for (characteristic, report) in &result.characteristics {
        let coverage = result
            .summary
            .coverage
            .get(characteristic)
            .map(|v| v.as_str())
            .unwrap_or_default();
        for req in &report.requirements {
            rows.push(SpreadsheetRow {
                characteristic: characteristic.to_string(),
                requirement: req.requirement.clone(),
                information_state: req.info_state.to_string(),
                measure_type: req.measure_type.to_string(),
                gap_identified: "No".to_string(),
                coverage: coverage.to_string(),
            });
        }
        for gap in &report.gaps {
            rows.push(SpreadsheetRow {
                characteristic: characteristic.to_string(),
                requirement: String::new(),
                information_state: String::new(),
                measure_type: String::new(),
                gap_identified: gap.gap.clone(),
                coverage: coverage.to_string(),
            });
        }
    }
    rows
}

/// Column names of the flat table.
pub const TABLE_HEADER: [&str; 6] = [
    "Characteristic",
    "Requirement",
    "Information State",
    "Measure Type",
    "Gap Identified",
    "Coverage",
];

/// Write the flat table as CSV. The header row is written even when there
/// are no rows.
pub fn write_csv<W: Write>(result: &ParseResult, writer: W) -> ReportResult<()> {
    let mut out = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    out.write_record(TABLE_HEADER)?;
    for row in spreadsheet_rows(result) {
        out.serialize(row)?;
    }
    out.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// The structured result as pretty-printed JSON.
pub fn result_json(result: &ParseResult) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// The coordinate mapping as pretty-printed JSON.
pub fn coordinates_json(coordinates: &CoordinateMap) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(coordinates)?)
}

/// Paths of the written artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    /// `parsed_<stem>.json`
    pub result: PathBuf,
    /// `<stem>_ia_requirements.json`
    pub coordinates: PathBuf,
    /// `<stem>_security_analysis.csv`
    pub table: PathBuf,
}

impl ArtifactPaths {
    /// Artifact paths for a document stem inside `out_dir`.
    pub fn for_stem(out_dir: &Path, stem: &str) -> Self {
        Self {
            result: out_dir.join(format!("parsed_{stem}.json")),
            coordinates: out_dir.join(format!("{stem}_ia_requirements.json")),
            table: out_dir.join(format!("{stem}_security_analysis.csv")),
        }
    }
}

fn write_file(path: &Path, contents: &[u8]) -> ReportResult<()> {
    std::fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write all three artifacts for `report` into `out_dir`, creating the
/// directory if needed.
pub fn write_artifacts(report: &Report, out_dir: &Path) -> ReportResult<ArtifactPaths> {
    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::Write {
        path: out_dir.to_path_buf(),
        source,
    })?;
    let paths = ArtifactPaths::for_stem(out_dir, &report.result.document_stem());

    write_file(&paths.result, result_json(&report.result)?.as_bytes())?;
    write_file(&paths.coordinates, coordinates_json(&report.coordinates)?.as_bytes())?;

    let mut table = Vec::new();
    write_csv(&report.result, &mut table)?;
    write_file(&paths.table, &table)?;

    tracing::info!(
        result = %paths.result.display(),
        coordinates = %paths.coordinates.display(),
        table = %paths.table.display(),
        "wrote artifacts"
    );
    Ok(paths)
}
