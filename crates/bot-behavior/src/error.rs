use thiserror::Error;

#[derive(Debug, Error)]
pub enum BehaviorError {
    #[error("behavior configuration error: {0}")]
    Config(String),

    #[error("bot number {0} is outside the appearance catalog (1..=100)")]
    InvalidBotNumber(u32),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
