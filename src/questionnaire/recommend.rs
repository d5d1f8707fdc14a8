use log::debug;

use super::models::Answers;
use crate::places::{TravelResult, sample_results};

/// Turns a completed set of answers into destinations
pub trait Recommender {
    fn recommend(&self, answers: &Answers) -> Vec<TravelResult>;
}

/// Returns the same fixed destination list whatever the answers are
#[derive(Debug, Clone)]
pub struct SampleRecommender {
    results: Vec<TravelResult>,
}

impl SampleRecommender {
    pub fn new(results: Vec<TravelResult>) -> Self {
        Self { results }
    }
}

impl Default for SampleRecommender {
    fn default() -> Self {
        Self::new(sample_results())
    }
}

impl Recommender for SampleRecommender {
    fn recommend(&self, answers: &Answers) -> Vec<TravelResult> {
        debug!("User answers: {:?}", answers);
        self.results.clone()
    }
}
