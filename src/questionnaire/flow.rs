//! Questionnaire flow controller
//!
//! Steps through an ordered list of questions, collects one answer per
//! question and hands the completed answers to a [`Recommender`]. Transitions
//! whose preconditions are not met (advancing past an unanswered question,
//! going back from the first one, ...) are ignored rather than reported, the
//! same way a disabled button simply does nothing.

use anyhow::Result;
use log::{debug, info};
use uuid::Uuid;

use super::models::{Answers, Question};
use super::recommend::{Recommender, SampleRecommender};
use crate::places::TravelResult;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    /// Showing the question at this index
    Asking(usize),
    ShowingResults,
    ShowingDetail(TravelResult),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SelectAnswer { question_id: String, value: String },
    SelectOption(usize),
    Next,
    Previous,
    SelectResult(usize),
    Back,
    StartOver,
}

pub struct QuestionnaireFlow<R: Recommender = SampleRecommender> {
    session_id: Uuid,
    questions: Vec<Question>,
    answers: Answers,
    results: Vec<TravelResult>,
    state: FlowState,
    recommender: R,
}

impl QuestionnaireFlow<SampleRecommender> {
    pub fn with_sample_results(questions: Vec<Question>) -> Self {
        Self::new(questions, SampleRecommender::default())
    }
}

impl<R: Recommender> QuestionnaireFlow<R> {
    pub fn new(questions: Vec<Question>, recommender: R) -> Self {
        let session_id = Uuid::new_v4();
        info!(
            "Starting questionnaire session {} with {} questions",
            session_id,
            questions.len()
        );

        Self {
            session_id,
            questions,
            answers: Answers::new(),
            results: Vec::new(),
            state: FlowState::Asking(0),
            recommender,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn results(&self) -> &[TravelResult] {
        &self.results
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            FlowState::Asking(index) => Some(index),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.questions.get(index))
    }

    pub fn selected_result(&self) -> Option<&TravelResult> {
        match &self.state {
            FlowState::ShowingDetail(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 >= self.questions.len())
    }

    /// Position for a progress bar: (steps reached, total steps)
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        match self.state {
            FlowState::Asking(index) => ((index + 1).min(total), total),
            _ => (total, total),
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.state {
            FlowState::Asking(_) => match self.current_question() {
                Some(question) => self.answers.is_answered(&question.id),
                None => true,
            },
            _ => false,
        }
    }

    pub fn can_go_previous(&self) -> bool {
        matches!(self.state, FlowState::Asking(index) if index > 0)
    }

    /// Records an answer for the question currently on screen
    pub fn select_answer(&mut self, question_id: &str, value: &str) -> Result<()> {
        let Some(question) = self.current_question() else {
            anyhow::bail!("No question is being asked");
        };

        if question.id != question_id {
            anyhow::bail!(
                "Question '{}' is not the current question ('{}')",
                question_id,
                question.id
            );
        }

        if question.option_by_value(value).is_none() {
            let offered: Vec<&str> = question.options.iter().map(|o| o.value.as_str()).collect();
            anyhow::bail!(
                "'{}' is not an option for question '{}' (expected one of: {})",
                value,
                question_id,
                offered.join(", ")
            );
        }

        debug!("Answer {} = {}", question_id, value);
        self.answers.record(question_id, value);
        Ok(())
    }

    /// Records the option at `index` of the current question
    pub fn select_option(&mut self, index: usize) -> Result<()> {
        let Some(question) = self.current_question() else {
            anyhow::bail!("No question is being asked");
        };

        let Some(option) = question.options.get(index) else {
            anyhow::bail!(
                "Option {} is out of range for question '{}' ({} options)",
                index,
                question.id,
                question.options.len()
            );
        };

        let (question_id, value) = (question.id.clone(), option.value.clone());
        self.select_answer(&question_id, &value)
    }

    /// Advances to the next question, or to the results after the last one
    pub fn next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }

        let Some(index) = self.current_index() else {
            return false;
        };

        if index + 1 < self.questions.len() {
            self.state = FlowState::Asking(index + 1);
        } else {
            self.generate_recommendations();
        }
        true
    }

    pub fn previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }

        if let FlowState::Asking(index) = self.state {
            self.state = FlowState::Asking(index - 1);
        }
        true
    }

    pub fn select_result(&mut self, index: usize) -> bool {
        if self.state != FlowState::ShowingResults {
            return false;
        }

        match self.results.get(index) {
            Some(result) => {
                debug!("Viewing result {}", result.id);
                self.state = FlowState::ShowingDetail(result.clone());
                true
            }
            None => false,
        }
    }

    /// Leaves the detail view for the result list
    pub fn back(&mut self) -> bool {
        if !matches!(self.state, FlowState::ShowingDetail(_)) {
            return false;
        }

        self.state = FlowState::ShowingResults;
        true
    }

    /// Clears all answers and results and returns to the first question
    pub fn start_over(&mut self) {
        self.session_id = Uuid::new_v4();
        info!("Restarting questionnaire as session {}", self.session_id);

        self.answers.clear();
        self.results.clear();
        self.state = FlowState::Asking(0);
    }

    /// Applies a message; returns whether the flow changed
    pub fn update(&mut self, msg: Msg) -> Result<bool> {
        let changed = match msg {
            Msg::SelectAnswer { question_id, value } => {
                self.select_answer(&question_id, &value)?;
                true
            }
            Msg::SelectOption(index) => {
                self.select_option(index)?;
                true
            }
            Msg::Next => self.next(),
            Msg::Previous => self.previous(),
            Msg::SelectResult(index) => self.select_result(index),
            Msg::Back => self.back(),
            Msg::StartOver => {
                self.start_over();
                true
            }
        };
        Ok(changed)
    }

    fn generate_recommendations(&mut self) {
        self.results = self.recommender.recommend(&self.answers);
        info!(
            "Session {} completed with {} recommendations",
            self.session_id,
            self.results.len()
        );
        self.state = FlowState::ShowingResults;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::models::default_questions;

    fn flow() -> QuestionnaireFlow {
        QuestionnaireFlow::with_sample_results(default_questions())
    }

    #[test]
    fn test_starts_on_first_question() {
        let flow = flow();
        assert_eq!(flow.state(), &FlowState::Asking(0));
        assert!(flow.answers().is_empty());
        assert!(!flow.can_go_previous());
        assert!(!flow.can_go_next());
        assert_eq!(flow.progress(), (1, 4));
    }

    #[test]
    fn test_next_requires_answer() {
        let mut flow = flow();
        assert!(!flow.next());
        assert_eq!(flow.state(), &FlowState::Asking(0));

        flow.select_answer("q1", "beach").unwrap();
        assert!(flow.next());
        assert_eq!(flow.state(), &FlowState::Asking(1));
    }

    #[test]
    fn test_rejects_unknown_value_and_wrong_question() {
        let mut flow = flow();
        assert!(flow.select_answer("q1", "moon").is_err());
        assert!(flow.select_answer("q2", "tropical").is_err());
        assert!(flow.select_option(4).is_err());
        assert!(flow.answers().is_empty());
    }

    #[test]
    fn test_previous_keeps_answers() {
        let mut flow = flow();
        flow.select_option(0).unwrap();
        flow.next();
        assert!(flow.previous());
        assert_eq!(flow.state(), &FlowState::Asking(0));
        assert_eq!(flow.answers().get("q1"), Some("beach"));
        assert!(!flow.previous());
    }

    #[test]
    fn test_update_ignores_disabled_transitions() {
        let mut flow = flow();
        assert!(!flow.update(Msg::Next).unwrap());
        assert!(!flow.update(Msg::Back).unwrap());
        assert!(!flow.update(Msg::SelectResult(0)).unwrap());
        assert!(flow.update(Msg::SelectOption(2)).is_ok());
        assert!(flow.update(Msg::Next).unwrap());
    }

    #[test]
    fn test_empty_question_set_goes_to_results() {
        let mut flow = QuestionnaireFlow::with_sample_results(Vec::new());
        assert!(flow.can_go_next());
        assert_eq!(flow.progress(), (0, 0));
        assert!(flow.next());
        assert_eq!(flow.state(), &FlowState::ShowingResults);
        assert_eq!(flow.results().len(), 3);
    }

    #[test]
    fn test_start_over_new_session() {
        let mut flow = flow();
        let first = flow.session_id();
        flow.select_option(1).unwrap();
        flow.start_over();
        assert_ne!(flow.session_id(), first);
        assert!(flow.answers().is_empty());
    }
}
