use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Token id {0:?} does not resolve to a finite seed")]
    NonNumericToken(String),

    #[error("Mood index {0} is outside the catalog")]
    MoodOutOfRange(usize),

    #[error("Render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, GenerationError>;
