//! Errors raised by the task store and its credential lookup.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A DynamoDB call (scan, put or delete) failed.
    #[error("table service error: {0}")]
    Dynamo(#[from] aws_sdk_dynamodb::Error),

    /// The parameter store could not be queried.
    #[error("parameter store error: {0}")]
    ParameterStore(#[from] aws_sdk_ssm::Error),

    /// A credential parameter does not exist or has no value.
    #[error("parameter '{0}' is missing from the parameter store")]
    MissingParameter(String),

    /// A stored item lacks one of the task attributes, or holds a non-string value.
    #[error("table item has no string attribute '{attribute}'")]
    MalformedItem { attribute: &'static str },

    /// A required input field was empty.
    #[error("{0} must not be empty")]
    MissingField(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
