use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct QuestionnaireCommands {
    /// Answer a question without prompting, as QUESTION_ID=VALUE (e.g. q1=beach)
    #[arg(short, long = "answer", value_name = "QUESTION_ID=VALUE", value_parser = parse_answer)]
    pub answers: Vec<(String, String)>,
    /// Show the recommended destination at this position (1-based) in detail
    #[arg(long, value_name = "N")]
    pub detail: Option<usize>,
}

fn parse_answer(raw: &str) -> Result<(String, String)> {
    let Some((question_id, value)) = raw.split_once('=') else {
        anyhow::bail!("expected QUESTION_ID=VALUE, got '{}'", raw);
    };

    let (question_id, value) = (question_id.trim(), value.trim());
    if question_id.is_empty() || value.is_empty() {
        anyhow::bail!("expected QUESTION_ID=VALUE, got '{}'", raw);
    }

    Ok((question_id.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_answer() {
        assert_eq!(
            parse_answer("q1=beach").unwrap(),
            ("q1".to_string(), "beach".to_string())
        );
        assert_eq!(
            parse_answer(" q2 = any ").unwrap(),
            ("q2".to_string(), "any".to_string())
        );
        assert!(parse_answer("q1").is_err());
        assert!(parse_answer("q1=").is_err());
        assert!(parse_answer("=beach").is_err());
    }
}
