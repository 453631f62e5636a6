//! Summary of a populate run.

use crate::populate::TableMetrics;
use chrono::NaiveDateTime;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use fixture_core::{DefectKind, DefectTally, FixtureProfile, FixtureTable};
use std::time::Duration;

/// Row counts and injected defects of a run.
#[derive(Debug, Clone)]
pub struct FixtureReport {
    pub backend: &'static str,
    pub seed: u64,
    pub reference: NaiveDateTime,
    pub profile: FixtureProfile,
    pub tables: Vec<TableMetrics>,
}

impl FixtureReport {
    pub fn new(
        backend: &'static str,
        seed: u64,
        reference: NaiveDateTime,
        profile: FixtureProfile,
    ) -> Self {
        Self {
            backend,
            seed,
            reference,
            profile,
            tables: Vec::new(),
        }
    }

    /// Add the metrics of a finished table.
    pub fn push(&mut self, metrics: TableMetrics) {
        self.tables.push(metrics);
    }

    /// Metrics of a table, if it was loaded.
    pub fn table(&self, table: FixtureTable) -> Option<&TableMetrics> {
        self.tables.iter().find(|m| m.table == table)
    }

    /// Rows inserted across all loaded tables.
    pub fn total_rows(&self) -> u64 {
        self.tables.iter().map(|m| m.rows_inserted).sum()
    }

    /// Wall time across all loaded tables.
    pub fn total_duration(&self) -> Duration {
        self.tables.iter().map(|m| m.total_duration).sum()
    }

    /// Defects injected across all loaded tables.
    pub fn defects(&self) -> DefectTally {
        let mut tally = DefectTally::new();
        for metrics in &self.tables {
            tally.merge(&metrics.defects);
        }
        tally
    }

    /// Expected defects of a kind for the rows actually loaded.
    pub fn expected_defects(&self, kind: DefectKind) -> f64 {
        let rows = self
            .table(kind.table())
            .map(|m| m.rows_inserted)
            .unwrap_or(0);
        self.profile.defects.rate(kind) * rows as f64
    }

    /// Render the row and defect tables.
    pub fn format_table(&self) -> String {
        let mut output = String::new();

        let mut rows = Table::new();
        rows.load_preset(UTF8_FULL);
        rows.set_header(vec!["Table", "Rows", "Batches", "Duration", "Rows/sec"]);
        for metrics in &self.tables {
            rows.add_row(vec![
                Cell::new(metrics.table.name()),
                Cell::new(format_number(metrics.rows_inserted)),
                Cell::new(metrics.batch_count),
                Cell::new(format_duration(metrics.total_duration.as_secs_f64())),
                Cell::new(format!("{:.1}", metrics.rows_per_second())),
            ]);
        }
        rows.add_row(vec![
            Cell::new("TOTAL").fg(Color::Cyan),
            Cell::new(format_number(self.total_rows())),
            Cell::new(self.tables.iter().map(|m| m.batch_count).sum::<u64>()),
            Cell::new(format_duration(self.total_duration().as_secs_f64())),
            Cell::new("-"),
        ]);

        let defects = self.defects();
        let mut issues = Table::new();
        issues.load_preset(UTF8_FULL);
        issues.set_header(vec!["Defect", "Column", "Rate", "Injected", "Expected"]);
        for kind in DefectKind::ALL {
            if self.table(kind.table()).is_none() {
                continue;
            }
            issues.add_row(vec![
                Cell::new(kind.label()),
                Cell::new(format!("{}.{}", kind.table().name(), kind.column())),
                Cell::new(format!("{:.1}%", self.profile.defects.rate(kind) * 100.0)),
                Cell::new(format_number(defects.count(kind))).fg(Color::Yellow),
                Cell::new(format!("~{}", format_number(self.expected_defects(kind).round() as u64))),
            ]);
        }

        output.push_str(&format!(
            "Backend: {}  Seed: {}  Reference date: {}\n",
            self.backend, self.seed, self.reference
        ));
        output.push_str(&rows.to_string());
        output.push('\n');
        output.push_str(&issues.to_string());
        output.push('\n');
        output
    }
}

/// Format seconds as a short human readable duration.
fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{secs:.1}s")
    } else if secs < 3600.0 {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{}m {:02.0}s", mins as u64, remaining_secs)
    } else {
        let hours = (secs / 3600.0).floor();
        let remaining = secs - (hours * 3600.0);
        let mins = (remaining / 60.0).floor();
        format!("{}h {:02}m", hours as u64, mins as u64)
    }
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);

    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
