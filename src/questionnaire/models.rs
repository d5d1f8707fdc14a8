use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selectable choice: `text` is shown to the user, `value` is recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    pub value: String,
}

impl QuestionOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option_by_value(&self, value: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.value == value)
    }

    pub fn option_index(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option.value == value)
    }
}

/// Question record as kept under the `travelnexa_questions` store key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredQuestion {
    #[serde(flatten)]
    pub question: Question,
    #[serde(default)]
    pub order: i64,
}

/// Question id -> selected option value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers(HashMap<String, String>);

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records (or replaces) the answer to a question
    pub fn record(&mut self, question_id: impl Into<String>, value: impl Into<String>) {
        self.0.insert(question_id.into(), value.into());
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.0.get(question_id).map(String::as_str)
    }

    /// True when the question has an answer that is not blank
    pub fn is_answered(&self, question_id: &str) -> bool {
        self.get(question_id).is_some_and(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn question(id: &str, text: &str, options: [(&str, &str); 4]) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        options: options
            .iter()
            .enumerate()
            .map(|(i, (text, value))| QuestionOption::new(format!("{}-{}", id, i + 1), *text, *value))
            .collect(),
    }
}

/// The built-in preference questionnaire
pub fn default_questions() -> Vec<Question> {
    vec![
        question(
            "q1",
            "What type of travel experience are you looking for?",
            [
                ("Beach and relaxation", "beach"),
                ("Cultural and historical", "cultural"),
                ("Adventure and outdoor activities", "adventure"),
                ("Food and culinary experiences", "food"),
            ],
        ),
        question(
            "q2",
            "What is your preferred climate?",
            [
                ("Warm and tropical", "tropical"),
                ("Mild and temperate", "temperate"),
                ("Cool and mountainous", "mountainous"),
                ("I don't have a preference", "any"),
            ],
        ),
        question(
            "q3",
            "How long do you plan to travel?",
            [
                ("Short weekend trip (1-3 days)", "short"),
                ("Medium length (4-7 days)", "medium"),
                ("Extended vacation (1-2 weeks)", "extended"),
                ("Long-term travel (more than 2 weeks)", "long"),
            ],
        ),
        question(
            "q4",
            "What is your budget range?",
            [
                ("Budget-friendly", "budget"),
                ("Moderate", "moderate"),
                ("Luxury", "luxury"),
                ("No specific budget", "any"),
            ],
        ),
    ]
}
