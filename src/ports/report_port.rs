//! Report generation port trait.

use crate::domain::analysis::AnalysisReport;
use crate::domain::error::MarketMindError;
use std::fs;
use std::path::Path;

/// Port for rendering analysis reports.
pub trait ReportPort {
    fn render(&self, report: &AnalysisReport) -> Result<String, MarketMindError>;

    /// Default implementation: render, then write to `output_path`.
    fn write(&self, report: &AnalysisReport, output_path: &Path) -> Result<(), MarketMindError> {
        let content = self.render(report)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}
