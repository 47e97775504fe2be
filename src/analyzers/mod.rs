pub mod difficulty_analyzer;

pub use difficulty_analyzer::{DayDifficulty, DifficultyAnalyzer, DifficultySummary};
