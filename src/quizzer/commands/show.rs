use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::QuestionId;
use crate::store::QuestionStore;

use super::helpers::question_by_id;

pub fn run<S: QuestionStore>(store: &S, id: QuestionId) -> Result<CmdResult> {
    let question = question_by_id(store, id)?;
    Ok(CmdResult::default().with_listed_questions(vec![question]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QuizError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn shows_question_and_answer() {
        let store = StoreFixture::new().arithmetic_and_capital().store;
        let result = run(&store, 2).unwrap();
        assert_eq!(result.listed_questions[0].question, "capital of France");
        assert_eq!(result.listed_questions[0].answer, "París");
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = StoreFixture::new().store;
        assert!(matches!(run(&store, 5), Err(QuizError::NotFound(5))));
    }
}
