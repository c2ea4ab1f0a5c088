use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("{0}")]
    InvalidId(String),

    #[error("There is no quiz with id={0}.")]
    NotFound(u64),

    #[error("No questions left in the pool")]
    EmptyPool,

    #[error("Quiz {0} disappeared from the store during the game")]
    MissingQuestion(u64),

    #[error("No question is waiting for an answer")]
    NoPendingQuestion,

    #[error("The quiz is invalid: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Config(String),

    #[error("Input closed")]
    Interrupted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, QuizError>;
