use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{QuestionDraft, QuestionId};
use crate::prompt::Prompter;
use crate::store::QuestionStore;

use super::helpers::{ask_draft, question_by_id};

pub fn run<S: QuestionStore>(
    store: &mut S,
    id: QuestionId,
    draft: QuestionDraft,
) -> Result<CmdResult> {
    let mut question = question_by_id(store, id)?;
    question.apply(draft.validate()?);
    store.update(&question)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Changed quiz [{}] to: {} => {}",
        question.id, question.question, question.answer
    )));
    Ok(result)
}

/// Edits in place: prompts are pre-filled with the current text.
pub fn ask_and_run<S: QuestionStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    id: QuestionId,
    question: Option<String>,
    answer: Option<String>,
) -> Result<CmdResult> {
    let current = question_by_id(store, id)?;
    let draft = ask_draft(prompter, question, answer, Some(&current))?;
    run(store, id, draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::show;
    use crate::error::QuizError;
    use crate::prompt::fixtures::ScriptedPrompter;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_question_content() {
        let mut store = StoreFixture::new().with_question("Capital of Italy", "Roma").store;
        let result = run(
            &mut store,
            1,
            QuestionDraft::new("Capital of Italy", "Rome"),
        )
        .unwrap();
        assert_eq!(
            result.messages[0].content,
            "Changed quiz [1] to: Capital of Italy => Rome"
        );

        let shown = show::run(&store, 1).unwrap();
        assert_eq!(shown.listed_questions[0].answer, "Rome");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let mut store = StoreFixture::new().store;
        let err = run(&mut store, 3, QuestionDraft::new("q", "a")).unwrap_err();
        assert!(matches!(err, QuizError::NotFound(3)));
    }

    #[test]
    fn invalid_draft_leaves_question_untouched() {
        let mut store = StoreFixture::new().with_question("Keep", "me").store;
        let err = run(&mut store, 1, QuestionDraft::new("Keep", " ")).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert_eq!(store.find_by_id(1).unwrap().unwrap().answer, "me");
    }

    #[test]
    fn interactive_edit_keeps_given_parts() {
        let mut store = StoreFixture::new().with_question("Capital of Spain", "Barcelona").store;
        let mut prompter = ScriptedPrompter::new(["Madrid"]);

        ask_and_run(&mut store, &mut prompter, 1, Some("Capital of Spain".into()), None)
            .unwrap();
        assert_eq!(prompter.asked, vec![" Enter the answer: "]);
        assert_eq!(store.find_by_id(1).unwrap().unwrap().answer, "Madrid");
    }

    #[test]
    fn interactive_edit_of_absent_id_asks_nothing() {
        let mut store = StoreFixture::new().store;
        let mut prompter = ScriptedPrompter::new(["q", "a"]);
        let err = ask_and_run(&mut store, &mut prompter, 2, None, None).unwrap_err();
        assert!(matches!(err, QuizError::NotFound(2)));
        assert!(prompter.asked.is_empty());
    }
}
