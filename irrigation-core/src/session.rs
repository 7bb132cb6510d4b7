//! In-memory record of the advice given during one session.
//!
//! The log is append-only: entries are never edited or evicted, and it is
//! dropped together with the process.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    labels::{Label, Language, resolve_label},
    model::LogEntry,
};

/// Column order of the exported table.
pub const EXPORT_HEADER: [&str; 10] = [
    "datetime",
    "location",
    "crop",
    "soil_moisture",
    "temperature",
    "humidity",
    "rainfall",
    "weather",
    "irrigation",
    "priority",
];

#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    entries: Vec<LogEntry>,
}

/// Aggregate figures over the whole session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionStats {
    pub total_checks: usize,
    pub irrigation_recommended: usize,
    /// Share of checks that did not call for irrigation; `None` for an empty log.
    pub water_saving_efficiency_pct: Option<f64>,
}

#[derive(Debug, Serialize)]
struct ExportRow<'a> {
    datetime: String,
    location: &'a str,
    crop: &'static str,
    soil_moisture: u8,
    temperature: f64,
    humidity: u8,
    rainfall: f64,
    weather: &'a str,
    irrigation: &'static str,
    priority: &'static str,
}

impl<'a> From<&'a LogEntry> for ExportRow<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        let (irrigation, priority) = if entry.advice.irrigate {
            (resolve_label(Language::English, Label::Recommended), entry.advice.priority.label())
        } else {
            (resolve_label(Language::English, Label::NotNeeded), "N/A")
        };

        Self {
            datetime: entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            location: &entry.location,
            crop: entry.crop.as_str(),
            soil_moisture: entry.soil_moisture_pct,
            temperature: entry.weather.temperature_c,
            humidity: entry.weather.humidity_pct,
            rainfall: entry.weather.rainfall_mm,
            weather: &entry.weather.condition,
            irrigation,
            priority,
        }
    }
}

impl SessionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, entry: LogEntry) -> &LogEntry {
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Last `n` entries, oldest first.
    pub fn tail(&self, n: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> SessionStats {
        let total_checks = self.entries.len();
        let irrigation_recommended = self.entries.iter().filter(|e| e.advice.irrigate).count();

        let water_saving_efficiency_pct = (total_checks > 0).then(|| {
            (total_checks - irrigation_recommended) as f64 / total_checks as f64 * 100.0
        });

        SessionStats { total_checks, irrigation_recommended, water_saving_efficiency_pct }
    }

    /// Serialize every entry as CSV, header first.
    pub fn export_csv(&self) -> Result<String> {
        let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(vec![]);

        wtr.write_record(EXPORT_HEADER).context("Failed to write CSV header")?;
        for entry in &self.entries {
            wtr.serialize(ExportRow::from(entry)).context("Failed to serialize log entry")?;
        }

        let bytes = wtr.into_inner().context("Failed to flush CSV writer")?;
        String::from_utf8(bytes).context("CSV output is not valid UTF-8")
    }
}

/// File name used when the log is downloaded on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("irrigation_log_{}.csv", date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        advice::{AdviceResult, Priority},
        crop::Crop,
        model::WeatherReading,
    };
    use chrono::{Local, TimeZone};

    fn entry(location: &str, priority: Priority) -> LogEntry {
        LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap(),
            location: location.to_string(),
            crop: Crop::Maize,
            soil_moisture_pct: 35,
            weather: WeatherReading {
                location_name: location.to_string(),
                temperature_c: 28.5,
                humidity_pct: 38,
                rainfall_mm: 0.0,
                condition: "Clear".to_string(),
            },
            advice: AdviceResult::from(priority),
        }
    }

    #[test]
    fn append_then_tail_returns_last_entry() {
        let mut log = SessionLog::new();
        log.append(entry("Pune", Priority::High));
        log.append(entry("Surat", Priority::NotNeeded));

        let tail = log.tail(1);
        assert_eq!(tail.len(), 1);
        assert_eq!(tail[0].location, "Surat");
    }

    #[test]
    fn tail_keeps_insertion_order_and_clamps() {
        let mut log = SessionLog::new();
        for city in ["A", "B", "C"] {
            log.append(entry(city, Priority::Medium));
        }

        let names: Vec<_> = log.tail(2).iter().map(|e| e.location.as_str()).collect();
        assert_eq!(names, ["B", "C"]);
        assert_eq!(log.tail(10).len(), 3);
        assert!(SessionLog::new().tail(5).is_empty());
    }

    #[test]
    fn export_has_header_and_one_row_per_entry() {
        let mut log = SessionLog::new();
        log.append(entry("Pune", Priority::High));
        log.append(entry("Surat", Priority::NotNeeded));
        log.append(entry("Nashik", Priority::Medium));

        let csv = log.export_csv().unwrap();
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines.len(), 1 + log.len());
        assert_eq!(
            lines[0],
            "datetime,location,crop,soil_moisture,temperature,humidity,rainfall,weather,irrigation,priority"
        );
        assert_eq!(
            lines[1],
            "2024-06-01 09:30:00,Pune,Maize,35,28.5,38,0.0,Clear,Irrigation Recommended,High Priority"
        );
        assert!(lines[2].ends_with("No Irrigation Needed,N/A"));
        assert!(lines[3].ends_with("Irrigation Recommended,Medium Priority"));
    }

    #[test]
    fn export_of_empty_log_is_header_only() {
        let csv = SessionLog::new().export_csv().unwrap();
        assert_eq!(csv.lines().count(), 1);
    }

    #[test]
    fn export_quotes_locations_with_commas() {
        let mut log = SessionLog::new();
        log.append(entry("Anand, Gujarat", Priority::High));

        let csv = log.export_csv().unwrap();
        assert!(csv.contains("\"Anand, Gujarat\""));
    }

    #[test]
    fn stats_count_recommendations() {
        let mut log = SessionLog::new();
        log.append(entry("A", Priority::High));
        log.append(entry("B", Priority::NotNeeded));
        log.append(entry("C", Priority::NotNeeded));
        log.append(entry("D", Priority::Medium));

        let stats = log.stats();
        assert_eq!(stats.total_checks, 4);
        assert_eq!(stats.irrigation_recommended, 2);
        assert_eq!(stats.water_saving_efficiency_pct, Some(50.0));
    }

    #[test]
    fn stats_of_empty_log_have_no_efficiency() {
        let stats = SessionLog::new().stats();
        assert_eq!(stats.total_checks, 0);
        assert_eq!(stats.water_saving_efficiency_pct, None);
    }

    #[test]
    fn export_file_name_embeds_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_file_name(date), "irrigation_log_20240307.csv");
    }
}
