use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionDraft, QuestionId};
use crate::prompt::Prompter;
use crate::store::QuestionStore;

/// Turns the raw `<id>` argument into a question id.
pub fn parse_id(raw: Option<&str>) -> Result<QuestionId> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| QuizError::InvalidId("Missing <id> parameter.".to_string()))?;

    raw.parse::<QuestionId>().map_err(|_| {
        QuizError::InvalidId(format!("The <id> parameter is not a number: {}", raw))
    })
}

pub fn question_by_id<S: QuestionStore>(store: &S, id: QuestionId) -> Result<Question> {
    store.find_by_id(id)?.ok_or(QuizError::NotFound(id))
}

/// `question => answer`, as used in confirmations and `show`.
pub fn describe(question: &Question) -> String {
    format!("[{}]: {} => {}", question.id, question.question, question.answer)
}

/// Collects a question/answer pair, asking only for the parts not given.
///
/// When editing, `current` pre-fills each prompt with the existing text.
pub fn ask_draft<P: Prompter>(
    prompter: &mut P,
    question: Option<String>,
    answer: Option<String>,
    current: Option<&Question>,
) -> Result<QuestionDraft> {
    let question = match question {
        Some(q) => q,
        None => match current {
            Some(c) => prompter.ask_with_initial(" Enter the question: ", &c.question)?,
            None => prompter.ask(" Enter the question: ")?,
        },
    };
    let answer = match answer {
        Some(a) => a,
        None => match current {
            Some(c) => prompter.ask_with_initial(" Enter the answer: ", &c.answer)?,
            None => prompter.ask(" Enter the answer: ")?,
        },
    };
    Ok(QuestionDraft::new(question, answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::fixtures::ScriptedPrompter;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn parses_plain_integers() {
        assert_eq!(parse_id(Some("12")).unwrap(), 12);
        assert_eq!(parse_id(Some(" 3 ")).unwrap(), 3);
    }

    #[test]
    fn missing_id_is_invalid() {
        assert!(matches!(parse_id(None), Err(QuizError::InvalidId(_))));
        assert!(matches!(parse_id(Some("  ")), Err(QuizError::InvalidId(_))));
    }

    #[test]
    fn non_numeric_id_is_invalid() {
        for raw in ["abc", "1.5", "-1", "3x"] {
            assert!(
                matches!(parse_id(Some(raw)), Err(QuizError::InvalidId(_))),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn question_by_id_reports_not_found() {
        let store = StoreFixture::new().with_questions(1).store;
        assert_eq!(question_by_id(&store, 1).unwrap().id, 1);
        assert!(matches!(
            question_by_id(&store, 2),
            Err(QuizError::NotFound(2))
        ));
    }

    #[test]
    fn ask_draft_only_prompts_for_missing_parts() {
        let mut prompter = ScriptedPrompter::new(["Lisboa"]);
        let draft = ask_draft(
            &mut prompter,
            Some("Capital of Portugal".into()),
            None,
            None,
        )
        .unwrap();
        assert_eq!(draft, QuestionDraft::new("Capital of Portugal", "Lisboa"));
        assert_eq!(prompter.asked, vec![" Enter the answer: "]);
    }
}
