use crate::models::ScoredFlight;
use crate::processors::{
    DayClassification, FeatureExtractor, JoinStats, Joiner, Ranker, Scorer,
};
use crate::readers::SourceTables;
use crate::utils::progress::ProgressReporter;
use tracing::info;

/// The final per-flight table: flight columns plus every derived field.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTable {
    pub headers: Vec<String>,
    pub bag_types: Vec<String>,
    pub flights: Vec<ScoredFlight>,
}

impl ScoredTable {
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub table: ScoredTable,
    pub join_stats: JoinStats,
    pub days: Vec<DayClassification>,
}

/// Runs derive, join, score and rank over already loaded tables.
///
/// Each stage takes the previous stage's value and returns a new one.
pub struct DifficultyPipeline {
    extractor: FeatureExtractor,
    joiner: Joiner,
    scorer: Scorer,
    ranker: Ranker,
}

impl DifficultyPipeline {
    pub fn new() -> Self {
        Self {
            extractor: FeatureExtractor::new(),
            joiner: Joiner::new(),
            scorer: Scorer::new(),
            ranker: Ranker::new(),
        }
    }

    pub fn run(&self, tables: &SourceTables, progress: Option<&ProgressReporter>) -> PipelineOutput {
        if let Some(p) = progress {
            p.set_message("Extracting features...");
        }
        // Per-flight aggregates from the PNR, remark and bag tables
        let features = self.extractor.extract(tables);

        if let Some(p) = progress {
            p.set_message("Joining features onto flights...");
        }
        // Left join onto the flight table with zero-fill
        let (joined, join_stats) = self.joiner.join(&tables.flights, &features);

        if let Some(p) = progress {
            p.set_message("Scoring flights...");
        }
        let scored = self.scorer.score_all(joined.rows);

        if let Some(p) = progress {
            p.set_message("Ranking and classifying...");
        }
        // Rank and classify within each departure date
        let ranked = self.ranker.rank_and_classify(scored);

        info!(flights = ranked.flights.len(), "Difficulty scoring complete");

        PipelineOutput {
            table: ScoredTable {
                headers: joined.headers,
                bag_types: joined.bag_types,
                flights: ranked.flights,
            },
            join_stats,
            days: ranked.days,
        }
    }

    /// Feature extraction and join only, for source validation
    pub fn join_only(&self, tables: &SourceTables) -> JoinStats {
        let features = self.extractor.extract(tables);
        self.joiner.join(&tables.flights, &features).1
    }
}

impl Default for DifficultyPipeline {
    fn default() -> Self {
        Self::new()
    }
}
