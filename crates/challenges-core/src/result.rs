use crate::error::ChallengeError;

pub type ChallengeResult<T> = Result<T, ChallengeError>;
