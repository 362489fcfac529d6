pub mod paragraph;
pub mod planner;
pub mod sentence;
pub mod token;

pub use paragraph::split_paragraphs;
pub use planner::{plan_chunks, plan_overlap_windows};
pub use sentence::split_sentences;
pub use token::{EstimateError, TiktokenEstimator, TokenEstimator};
