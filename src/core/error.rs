// errors for the text boundary, the factory itself never fails
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThingError {
    #[error("cannot decode thing options: {0}")]
    Decode(String),
    #[error("cannot encode thing: {0}")]
    Encode(String),
    #[error("batch document has no `things` list")]
    MissingBatch,
}
