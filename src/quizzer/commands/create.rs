use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuestionDraft;
use crate::prompt::Prompter;
use crate::store::QuestionStore;

use super::helpers::{ask_draft, describe};

pub fn run<S: QuestionStore>(store: &mut S, draft: QuestionDraft) -> Result<CmdResult> {
    let draft = draft.validate()?;
    let question = store.create(draft)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added {}",
        describe(&question)
    )));
    Ok(result)
}

/// Prompts for whichever of question/answer was not given, then creates.
pub fn ask_and_run<S: QuestionStore, P: Prompter>(
    store: &mut S,
    prompter: &mut P,
    question: Option<String>,
    answer: Option<String>,
) -> Result<CmdResult> {
    let draft = ask_draft(prompter, question, answer, None)?;
    run(store, draft)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::prompt::fixtures::ScriptedPrompter;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn creates_and_confirms_with_saved_values() {
        let mut store = InMemoryStore::new();
        let result = run(
            &mut store,
            QuestionDraft::new(" Capital of Italy ", " Rome "),
        )
        .unwrap();

        assert!(store.find_by_id(1).unwrap().is_some());
        assert_eq!(
            result.messages[0].content,
            "Added [1]: Capital of Italy => Rome"
        );
        assert_eq!(store.list_all().unwrap().len(), 1);
    }

    #[test]
    fn rejects_empty_fields_without_saving() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, QuestionDraft::new("", "Rome")).unwrap_err();
        assert!(matches!(err, QuizError::Validation(_)));
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn prompts_question_then_answer() {
        let mut store = InMemoryStore::new();
        let mut prompter = ScriptedPrompter::new(["Capital of France", "Paris"]);

        let result = ask_and_run(&mut store, &mut prompter, None, None).unwrap();
        assert_eq!(
            prompter.asked,
            vec![" Enter the question: ", " Enter the answer: "]
        );
        assert_eq!(
            result.messages[0].content,
            "Added [1]: Capital of France => Paris"
        );
    }
}
