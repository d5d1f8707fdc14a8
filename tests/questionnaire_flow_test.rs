use travelnexa_cli::places::{TravelResult, sample_results};
use travelnexa_cli::questionnaire::{
    Answers, FlowState, Msg, Question, QuestionOption, QuestionnaireFlow, Recommender,
    default_questions,
};

/// Answer every question with the option at `pick` and advance
fn complete(flow: &mut QuestionnaireFlow, pick: usize) {
    while flow.current_question().is_some() {
        flow.select_option(pick).unwrap();
        assert!(flow.next());
    }
}

fn question(id: &str, values: &[&str]) -> Question {
    Question {
        id: id.to_string(),
        text: format!("Question {}", id),
        options: values
            .iter()
            .enumerate()
            .map(|(i, v)| QuestionOption::new(format!("{}-{}", id, i + 1), v.to_uppercase(), *v))
            .collect(),
    }
}

#[test]
fn test_forward_progress_only_with_answer() {
    for n in 1..=6 {
        let questions: Vec<Question> = (0..n)
            .map(|i| question(&format!("q{}", i), &["a", "b"]))
            .collect();
        let mut flow = QuestionnaireFlow::with_sample_results(questions);

        for index in 0..n {
            assert_eq!(flow.state(), &FlowState::Asking(index));
            assert!(!flow.can_go_next());
            assert!(!flow.next());
            assert_eq!(flow.state(), &FlowState::Asking(index));

            flow.select_option(index % 2).unwrap();
            assert!(flow.can_go_next());
            assert!(flow.next());
        }

        assert_eq!(flow.state(), &FlowState::ShowingResults);
    }
}

#[test]
fn test_blank_option_value_blocks_progress() {
    let mut flow = QuestionnaireFlow::with_sample_results(vec![question("q1", &["", "x"])]);
    flow.select_option(0).unwrap();
    assert!(!flow.can_go_next());
    assert!(!flow.next());

    flow.select_option(1).unwrap();
    assert!(flow.next());
}

#[test]
fn test_start_over_after_completion() {
    let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
    complete(&mut flow, 1);
    assert_eq!(flow.answers().len(), 4);

    flow.start_over();
    assert_eq!(flow.state(), &FlowState::Asking(0));
    assert!(flow.answers().is_empty());
    assert!(flow.results().is_empty());
}

#[test]
fn test_start_over_from_every_state() {
    let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
    flow.select_option(0).unwrap();
    flow.next();
    assert!(flow.update(Msg::StartOver).unwrap());
    assert_eq!(flow.state(), &FlowState::Asking(0));

    complete(&mut flow, 0);
    flow.select_result(2);
    assert!(matches!(flow.state(), FlowState::ShowingDetail(_)));
    flow.start_over();
    assert_eq!(flow.state(), &FlowState::Asking(0));
    assert!(flow.answers().is_empty());
}

#[test]
fn test_detail_and_back() {
    let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
    complete(&mut flow, 2);
    let before: Vec<TravelResult> = flow.results().to_vec();

    for index in 0..before.len() {
        assert!(flow.select_result(index));
        assert_eq!(flow.state(), &FlowState::ShowingDetail(before[index].clone()));
        assert_eq!(flow.selected_result(), Some(&before[index]));

        assert!(flow.back());
        assert_eq!(flow.state(), &FlowState::ShowingResults);
        assert_eq!(flow.results(), before.as_slice());
    }

    assert!(!flow.select_result(before.len()));
    assert_eq!(flow.state(), &FlowState::ShowingResults);
}

#[test]
fn test_results_ignore_answers() {
    let mut expected: Option<Vec<TravelResult>> = None;

    for pick in 0..4 {
        let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
        complete(&mut flow, pick);
        assert_eq!(flow.results().len(), 3);

        match &expected {
            Some(results) => assert_eq!(flow.results(), results.as_slice()),
            None => expected = Some(flow.results().to_vec()),
        }
    }

    assert_eq!(expected, Some(sample_results()));
}

#[test]
fn test_message_driven_walkthrough() {
    let mut flow = QuestionnaireFlow::with_sample_results(default_questions());
    let script = [
        Msg::SelectAnswer { question_id: "q1".into(), value: "cultural".into() },
        Msg::Next,
        Msg::Previous,
        Msg::Next,
        Msg::SelectAnswer { question_id: "q2".into(), value: "temperate".into() },
        Msg::Next,
        Msg::SelectOption(3),
        Msg::Next,
        Msg::SelectOption(0),
        Msg::Next,
        Msg::SelectResult(1),
    ];

    for msg in script {
        flow.update(msg).unwrap();
    }

    assert_eq!(flow.selected_result().map(|r| r.id.as_str()), Some("place2"));
    assert_eq!(flow.answers().get("q3"), Some("long"));
    assert_eq!(flow.answers().get("q4"), Some("budget"));
}

struct EchoRecommender;

impl Recommender for EchoRecommender {
    fn recommend(&self, answers: &Answers) -> Vec<TravelResult> {
        let mut results = sample_results();
        results.truncate(answers.len());
        results
    }
}

#[test]
fn test_custom_recommender_receives_answers() {
    let questions = vec![question("a", &["x"]), question("b", &["y"])];
    let mut flow = QuestionnaireFlow::new(questions, EchoRecommender);

    flow.select_answer("a", "x").unwrap();
    flow.next();
    flow.select_answer("b", "y").unwrap();
    flow.next();

    assert_eq!(flow.results().len(), 2);
}
