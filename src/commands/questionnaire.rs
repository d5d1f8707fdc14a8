use anyhow::Result;
use colored::*;
use is_terminal::IsTerminal;
use log::{debug, info};
use std::collections::HashMap;
use std::time::Duration;

use super::{catalog_store, log_source};
use crate::catalog;
use crate::cli::commands::questionnaire::QuestionnaireCommands;
use crate::config::Config;
use crate::questionnaire::{FlowState, Question, QuestionnaireFlow, Recommender};
use crate::ui::display::{card_line, print_cards, print_detail, progress_bar};
use crate::ui::{pause_with_spinner, select};

/// Menu entries offered alongside the answer options or result cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Previous,
    BackToResults,
    StartOver,
    Quit,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Previous => write!(f, "{}", "← Previous".bright_yellow()),
            Action::BackToResults => write!(f, "{}", "← Back to Results".bright_yellow()),
            Action::StartOver => write!(f, "{}", "↺ Start Over".bright_blue()),
            Action::Quit => write!(f, "{}", "✖ Quit".bright_red()),
        }
    }
}

enum Choice {
    Item(usize),
    Action(Action),
}

/// Shows `items` followed by `actions`; returns what was picked
fn choose(prompt: &str, items: &[String], actions: &[Action], default: usize) -> Result<Choice> {
    let mut entries: Vec<String> = items.to_vec();
    entries.extend(actions.iter().map(|a| a.to_string()));

    let index = select(prompt, &entries, default.min(entries.len().saturating_sub(1)))?;
    Ok(if index < items.len() {
        Choice::Item(index)
    } else {
        Choice::Action(actions[index - items.len()])
    })
}

pub async fn questionnaire_command(args: QuestionnaireCommands) -> Result<()> {
    info!("Starting questionnaire command");

    let config = Config::load()?;
    let questions = match catalog_store(&config)? {
        Some(store) => {
            let (questions, source) = catalog::questions(&store);
            log_source("questions", source);
            questions
        }
        None => crate::questionnaire::default_questions(),
    };

    let mut flow = QuestionnaireFlow::with_sample_results(questions);
    let delay = Duration::from_millis(config.get_settings().recommendation_delay_ms);

    if args.answers.is_empty() && std::io::stdin().is_terminal() {
        run_interactive(&mut flow, delay).await
    } else {
        run_with_answers(&mut flow, &args.answers, args.detail)
    }
}

/// Applies answers given on the command line in question order
pub fn apply_answers<R: Recommender>(
    flow: &mut QuestionnaireFlow<R>,
    answers: &[(String, String)],
) -> Result<()> {
    let given: HashMap<&str, &str> = answers
        .iter()
        .map(|(id, value)| (id.as_str(), value.as_str()))
        .collect();

    for id in given.keys() {
        if !flow.questions().iter().any(|q| q.id == *id) {
            anyhow::bail!("Unknown question '{}'", id);
        }
    }

    while let Some(question) = flow.current_question() {
        let question_id = question.id.clone();
        let Some(value) = given.get(question_id.as_str()) else {
            anyhow::bail!(
                "No answer given for question '{}': {}",
                question_id,
                describe_options(question)
            );
        };

        flow.select_answer(&question_id, value)?;
        if !flow.next() {
            anyhow::bail!("Answer for question '{}' is blank", question_id);
        }
    }

    // Covers an empty question set
    flow.next();
    Ok(())
}

fn describe_options(question: &Question) -> String {
    let options: Vec<String> = question
        .options
        .iter()
        .map(|o| format!("{} ({})", o.value, o.text))
        .collect();
    format!("{} Options: {}", question.text, options.join(", "))
}

fn run_with_answers<R: Recommender>(
    flow: &mut QuestionnaireFlow<R>,
    answers: &[(String, String)],
    detail: Option<usize>,
) -> Result<()> {
    if answers.is_empty() && !flow.questions().is_empty() {
        println!("Not running in a terminal; pass answers with --answer QUESTION_ID=VALUE.");
        println!();
        for question in flow.questions() {
            println!("  {}: {}", question.id, describe_options(question));
        }
        return Ok(());
    }

    apply_answers(flow, answers)?;
    print_results(flow.results());

    if let Some(position) = detail {
        if position == 0 || !flow.select_result(position - 1) {
            anyhow::bail!(
                "No recommendation at position {} ({} available)",
                position,
                flow.results().len()
            );
        }
        if let Some(result) = flow.selected_result() {
            print_detail(result);
        }
    }

    Ok(())
}

fn print_results<D: crate::places::Destination>(results: &[D]) {
    println!("{}", "✓ Your Recommended Destinations".green().bold());
    println!();
    print_cards(results);
    println!();
}

async fn run_interactive<R: Recommender>(
    flow: &mut QuestionnaireFlow<R>,
    delay: Duration,
) -> Result<()> {
    loop {
        match flow.state().clone() {
            FlowState::Asking(index) => {
                let Some(question) = flow.current_question().cloned() else {
                    // Nothing to ask
                    flow.next();
                    continue;
                };

                let (reached, total) = flow.progress();
                println!();
                println!("{}  {}/{}", progress_bar(reached, total), reached, total);

                let items: Vec<String> = question.options.iter().map(|o| o.text.clone()).collect();
                let mut actions = Vec::new();
                if flow.can_go_previous() {
                    actions.push(Action::Previous);
                }
                if !flow.answers().is_empty() {
                    actions.push(Action::StartOver);
                }
                actions.push(Action::Quit);

                let default = flow
                    .answers()
                    .get(&question.id)
                    .and_then(|value| question.option_index(value))
                    .unwrap_or(0);

                match choose(&question.text, &items, &actions, default)? {
                    Choice::Item(option) => {
                        flow.select_option(option)?;
                        if flow.is_last_question() {
                            pause_with_spinner("Finding destinations for you...", delay).await;
                        }
                        flow.next();
                    }
                    Choice::Action(Action::Previous) => {
                        flow.previous();
                    }
                    Choice::Action(Action::StartOver) => flow.start_over(),
                    Choice::Action(_) => break,
                }
                debug!("Left question {}", index);
            }
            FlowState::ShowingResults => {
                println!();
                print_results(flow.results());

                let items: Vec<String> = flow.results().iter().map(card_line).collect();
                let actions = [Action::StartOver, Action::Quit];

                match choose("Select a destination for details", &items, &actions, 0)? {
                    Choice::Item(index) => {
                        flow.select_result(index);
                    }
                    Choice::Action(Action::StartOver) => flow.start_over(),
                    Choice::Action(_) => break,
                }
            }
            FlowState::ShowingDetail(result) => {
                print_detail(&result);

                let actions = [Action::BackToResults, Action::StartOver, Action::Quit];
                match choose("What next?", &[], &actions, 0)? {
                    Choice::Action(Action::BackToResults) => {
                        flow.back();
                    }
                    Choice::Action(Action::StartOver) => flow.start_over(),
                    _ => break,
                }
            }
        }
    }

    info!("Questionnaire session {} ended", flow.session_id());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::default_questions;

    fn answers(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(id, value)| (id.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_apply_answers_completes_flow() {
        let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
        let given = answers(&[("q4", "luxury"), ("q1", "food"), ("q3", "short"), ("q2", "any")]);

        apply_answers(&mut flow, &given).unwrap();
        assert_eq!(flow.state(), &FlowState::ShowingResults);
        assert_eq!(flow.answers().get("q1"), Some("food"));
        assert_eq!(flow.results().len(), 3);
    }

    #[test]
    fn test_apply_answers_missing_question() {
        let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
        let given = answers(&[("q1", "beach")]);

        let err = apply_answers(&mut flow, &given).unwrap_err();
        assert!(err.to_string().contains("q2"));
        assert_eq!(flow.state(), &FlowState::Asking(1));
    }

    #[test]
    fn test_apply_answers_unknown_question() {
        let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
        let given = answers(&[("q9", "beach")]);
        assert!(apply_answers(&mut flow, &given).is_err());
        assert!(flow.answers().is_empty());
    }
}
