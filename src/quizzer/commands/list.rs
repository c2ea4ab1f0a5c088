use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::QuestionStore;

pub fn run<S: QuestionStore>(store: &S) -> Result<CmdResult> {
    let questions = store.list_all()?;
    Ok(CmdResult::default().with_listed_questions(questions))
}
