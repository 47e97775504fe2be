pub mod feature_extractor;
pub mod joiner;
pub mod pipeline;
pub mod ranker;
pub mod scorer;

pub use feature_extractor::{BagAggregate, BagCounts, FeatureExtractor, FeatureSet};
pub use joiner::{JoinStats, JoinedTable, Joiner};
pub use pipeline::{DifficultyPipeline, PipelineOutput, ScoredTable};
pub use ranker::{ClassificationMethod, DayClassification, RankedFlights, Ranker};
pub use scorer::Scorer;
