pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod places;
pub mod questionnaire;
pub mod search;
pub mod storage;
pub mod ui;
