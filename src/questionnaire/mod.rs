//! Preference questionnaire
//!
//! Question definitions, the collected answers and the flow controller that
//! walks a user from the first question through to a recommended destination.

pub mod flow;
pub mod models;
pub mod recommend;

pub use flow::{FlowState, Msg, QuestionnaireFlow};
pub use models::{Answers, Question, QuestionOption, StoredQuestion, default_questions};
pub use recommend::{Recommender, SampleRecommender};
