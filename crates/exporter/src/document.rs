use crate::error::ExportError;
use crate::format::{format_currency, format_percent};
use analytics::{Advisory, SalesReport};
use chrono::{DateTime, Utc};
use comfy_table::Table;
use core_types::DealInputs;
use std::fs;
use std::path::PathBuf;

/// Renders calculation snapshots into printable report documents and writes
/// them to disk.
pub struct Exporter {
    settings: configuration::Report,
}

impl Exporter {
    pub fn new(settings: configuration::Report) -> Self {
        Self { settings }
    }

    /// Renders the full document body for one snapshot.
    ///
    /// Pure with respect to its arguments: the generation timestamp is passed
    /// in explicitly so callers (and tests) control it.
    pub fn render(
        &self,
        inputs: &DealInputs,
        report: &SalesReport,
        advisory: &Advisory,
        generated_at: DateTime<Utc>,
    ) -> String {
        let symbol = &self.settings.currency_symbol;

        let mut inputs_table = Table::new();
        inputs_table.set_header(vec!["Input", "Value"]);
        inputs_table.add_row(vec!["Deals Won".to_string(), inputs.deals_won().to_string()]);
        inputs_table.add_row(vec![
            "Total Deals Closed".to_string(),
            inputs.total_deals().to_string(),
        ]);
        inputs_table.add_row(vec![
            format!("Total Revenue ({})", self.settings.currency_code),
            format_currency(inputs.total_revenue(), symbol),
        ]);
        if let Some(cycle) = inputs.avg_sales_cycle_days() {
            inputs_table.add_row(vec![
                "Average Sales Cycle (days)".to_string(),
                cycle.to_string(),
            ]);
        }

        let mut metrics_table = Table::new();
        metrics_table.set_header(vec!["Metric", "Value"]);
        metrics_table.add_row(vec![
            "Win Rate".to_string(),
            format_percent(report.win_rate_pct),
        ]);
        metrics_table.add_row(vec![
            "Average Deal Value".to_string(),
            format_currency(report.avg_deal_value, symbol),
        ]);
        metrics_table.add_row(vec![
            "Average Deal Size".to_string(),
            format_currency(report.avg_deal_size, symbol),
        ]);
        metrics_table.add_row(vec![
            "Total Revenue".to_string(),
            format_currency(report.total_revenue, symbol),
        ]);
        metrics_table.add_row(vec![
            "Lost Opportunities Value".to_string(),
            format_currency(report.lost_opportunities_value, symbol),
        ]);

        format!(
            "{title}\n\
             Generated on: {generated}\n\
             \n\
             Sales Performance Inputs\n\
             {inputs_table}\n\
             \n\
             Win Rate Analysis Results\n\
             {metrics_table}\n\
             \n\
             Analysis & Recommendations\n\
             {win_rate_msg}\n\
             \n\
             {opportunity_msg}\n",
            title = self.settings.title,
            generated = generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            win_rate_msg = advisory.win_rate_message(),
            opportunity_msg = advisory.opportunity_message(),
        )
    }

    /// Renders the snapshot and writes it as a timestamped document under the
    /// configured output directory, returning the path of the written file.
    pub fn export(
        &self,
        inputs: &DealInputs,
        report: &SalesReport,
        advisory: &Advisory,
    ) -> Result<PathBuf, ExportError> {
        let generated_at = Utc::now();
        let body = self.render(inputs, report, advisory, generated_at);

        fs::create_dir_all(&self.settings.output_dir).map_err(|source| {
            ExportError::CreateDir {
                path: self.settings.output_dir.clone(),
                source,
            }
        })?;

        let filename = format!(
            "win_rate_report_{}.txt",
            generated_at.format("%Y%m%d_%H%M%S")
        );
        let path = self.settings.output_dir.join(filename);

        fs::write(&path, body).map_err(|source| ExportError::WriteDocument {
            path: path.clone(),
            source,
        })?;

        tracing::info!(path = %path.display(), "Report document exported.");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::MetricsEngine;
    use core_types::DealInputsDraft;
    use rust_decimal_macros::dec;

    fn snapshot() -> (DealInputs, SalesReport, Advisory) {
        let inputs = DealInputsDraft {
            deals_won: Some(20),
            total_deals: Some(50),
            total_revenue: Some(dec!(1_000_000)),
            avg_sales_cycle_days: Some(dec!(45)),
        }
        .validate()
        .unwrap();
        let report = MetricsEngine::new().calculate(&inputs);
        let advisory = Advisory::for_report(&report);
        (inputs, report, advisory)
    }

    #[test]
    fn document_carries_labeled_inputs_metrics_and_advisory() {
        let (inputs, report, advisory) = snapshot();
        let exporter = Exporter::new(configuration::Report::default());
        let body = exporter.render(&inputs, &report, &advisory, Utc::now());

        assert!(body.contains("B2B Sales Win Rate Report"));
        assert!(body.contains("Deals Won"));
        assert!(body.contains("20"));
        assert!(body.contains("Win Rate"));
        assert!(body.contains("40.00%"));
        assert!(body.contains("₹50,000"));
        assert!(body.contains("₹1,500,000"));
        assert!(body.contains("Average Sales Cycle (days)"));
        assert!(body.contains(advisory.win_rate_message()));
        assert!(body.contains(advisory.opportunity_message()));
    }

    #[test]
    fn document_header_carries_the_generation_timestamp() {
        let (inputs, report, advisory) = snapshot();
        let exporter = Exporter::new(configuration::Report::default());
        let generated_at = "2026-08-26T10:30:00Z".parse::<DateTime<Utc>>().unwrap();
        let body = exporter.render(&inputs, &report, &advisory, generated_at);

        assert!(body.contains("Generated on: 2026-08-26 10:30:00 UTC"));
    }

    #[test]
    fn export_writes_the_document_under_the_output_dir() {
        let (inputs, report, advisory) = snapshot();
        let dir = tempfile::tempdir().unwrap();
        let settings = configuration::Report {
            output_dir: dir.path().to_path_buf(),
            ..configuration::Report::default()
        };

        let path = Exporter::new(settings)
            .export(&inputs, &report, &advisory)
            .unwrap();

        assert!(path.starts_with(dir.path()));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Win Rate Analysis Results"));
    }
}
