pub mod catalog;
pub mod questionnaire;
pub mod search;
pub mod settings;
