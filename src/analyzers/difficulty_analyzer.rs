use crate::error::Result;
use crate::models::DifficultyClass;
use crate::processors::{ClassificationMethod, JoinStats, PipelineOutput};
use crate::writers::staging_file;
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Tier counts and score statistics for one departure date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayDifficulty {
    pub date: String,
    pub flights: usize,
    pub easy: usize,
    pub medium: usize,
    pub difficult: usize,
    pub mean_score: f64,
    pub max_score: f64,
    /// First flight in source order holding rank 1
    pub most_difficult_flight: Option<String>,
    pub method: ClassificationMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DifficultySummary {
    pub total_flights: usize,
    pub join_stats: JoinStats,
    pub days: Vec<DayDifficulty>,
}

impl DifficultySummary {
    pub fn detailed_summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Flight Difficulty Summary ===\n");
        summary.push_str(&format!("Total Flights: {}\n", self.total_flights));
        summary.push_str(&format!("Departure Days: {}\n", self.days.len()));
        summary.push_str(&format!(
            "Flights with PNR data: {}\nFlights with bag data: {}\nFlights with remarks: {}\n",
            self.join_stats.pnr_matched, self.join_stats.bags_matched, self.join_stats.remarks_matched
        ));

        if !self.days.is_empty() {
            summary.push_str("\nPer Day:\n");
        }
        for day in &self.days {
            summary.push_str(&format!(
                "  {}: {} flights (Easy {}, Medium {}, Difficult {}), mean score {:.2}, max {:.2}",
                day.date, day.flights, day.easy, day.medium, day.difficult, day.mean_score, day.max_score
            ));
            if let Some(ref flight) = day.most_difficult_flight {
                summary.push_str(&format!(", hardest flight {}", flight));
            }
            if day.method == ClassificationMethod::RankFallback {
                summary.push_str(" [rank tertiles]");
            }
            summary.push('\n');
        }

        summary
    }

    /// Write the summary as pretty JSON
    pub fn write_json(&self, path: &Path) -> Result<()> {
        self.stage_json(path)?.persist(path)?;
        Ok(())
    }

    /// Write the JSON to a temporary file beside `path`. Nothing appears at
    /// `path` until the returned file is persisted.
    pub fn stage_json(&self, path: &Path) -> Result<NamedTempFile> {
        let mut staging = staging_file(path)?;
        serde_json::to_writer_pretty(staging.as_file_mut(), self)?;
        staging.as_file_mut().write_all(b"\n")?;
        Ok(staging)
    }
}

pub struct DifficultyAnalyzer;

impl DifficultyAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn summarize(&self, output: &PipelineOutput) -> DifficultySummary {
        let mut per_day: BTreeMap<&str, DayDifficulty> = output
            .days
            .iter()
            .map(|day| {
                (
                    day.date.as_str(),
                    DayDifficulty {
                        date: day.date.clone(),
                        flights: 0,
                        easy: 0,
                        medium: 0,
                        difficult: 0,
                        mean_score: 0.0,
                        max_score: 0.0,
                        most_difficult_flight: None,
                        method: day.method,
                    },
                )
            })
            .collect();

        for flight in &output.table.flights {
            let Some(day) = per_day.get_mut(flight.departure_date()) else {
                continue;
            };

            day.flights += 1;
            match flight.class {
                DifficultyClass::Easy => day.easy += 1,
                DifficultyClass::Medium => day.medium += 1,
                DifficultyClass::Difficult => day.difficult += 1,
            }
            day.mean_score += flight.difficulty_score;
            day.max_score = day.max_score.max(flight.difficulty_score);
            if flight.rank == 1 && day.most_difficult_flight.is_none() {
                day.most_difficult_flight = Some(flight.flight_number().to_string());
            }
        }

        let days = per_day
            .into_values()
            .map(|mut day| {
                if day.flights > 0 {
                    day.mean_score /= day.flights as f64;
                }
                day
            })
            .collect();

        DifficultySummary {
            total_flights: output.table.len(),
            join_stats: output.join_stats,
            days,
        }
    }
}

impl Default for DifficultyAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
