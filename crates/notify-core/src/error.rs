use thiserror::Error;

pub type Result<T> = std::result::Result<T, NotifyError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NotifyError {
    /// The key did not normalize to any known channel. Holds the input as given.
    #[error("invalid channel type: '{0}'")]
    InvalidChannelType(String),
}
