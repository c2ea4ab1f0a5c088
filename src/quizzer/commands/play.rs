//! "Play all": every stored question once, in random order, until the first
//! miss or until nothing is left to ask.

use crate::commands::{CmdMessage, CmdResult, PlayOutcome};
use crate::error::Result;
use crate::prompt::{Prompter, Reporter};
use crate::session::{PlaySession, SessionStatus};
use crate::store::QuestionStore;
use log::info;
use rand::Rng;

#[derive(Debug, Clone, Copy, Default)]
pub struct PlayOptions {
    /// Tell the user the expected answer after a miss.
    pub reveal_answer: bool,
}

pub fn run<S, P, W>(
    store: &S,
    prompter: &mut P,
    reporter: &mut W,
    options: PlayOptions,
) -> Result<CmdResult>
where
    S: QuestionStore,
    P: Prompter,
    W: Reporter,
{
    run_with_rng(store, prompter, reporter, options, rand::rng())
}

pub fn run_with_rng<S, P, W, R>(
    store: &S,
    prompter: &mut P,
    reporter: &mut W,
    options: PlayOptions,
    rng: R,
) -> Result<CmdResult>
where
    S: QuestionStore,
    P: Prompter,
    W: Reporter,
    R: Rng,
{
    let mut session = PlaySession::start_with_rng(store, rng)?;

    loop {
        let prompt = match session.next_question(store)? {
            Some(question) => question.prompt(),
            None => break,
        };
        let answer = prompter.ask(&prompt)?;
        let outcome = session.submit(&answer)?;

        if outcome.correct {
            reporter.emit(CmdMessage::success(format!(
                "CORRECT - {} hit(s) so far.",
                outcome.score
            )));
        } else {
            reporter.emit(CmdMessage::error("INCORRECT."));
            if options.reveal_answer {
                reporter.emit(CmdMessage::info(format!(
                    "The correct answer was: {}",
                    outcome.expected
                )));
            }
        }
    }

    let score = session.score();
    let status = session.status();
    match status {
        SessionStatus::LostOnWrongAnswer => {
            reporter.emit(CmdMessage::info(format!("End of game. Score: {}", score)));
        }
        _ => {
            reporter.emit(CmdMessage::info("Nothing left to ask."));
            reporter.emit(CmdMessage::info(format!("End of exam. Score: {}", score)));
        }
    }
    reporter.emit_banner(score);
    info!("play finished with score {} ({:?})", score, status);

    Ok(CmdResult::default().with_outcome(PlayOutcome { score, status }))
}
