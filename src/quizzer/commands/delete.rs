use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::QuestionId;
use crate::store::QuestionStore;

use super::helpers::question_by_id;

pub fn run<S: QuestionStore>(store: &mut S, id: QuestionId) -> Result<CmdResult> {
    let question = question_by_id(store, id)?;
    store.delete(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted quiz [{}]: {}",
        question.id, question.question
    )));
    Ok(result)
}
