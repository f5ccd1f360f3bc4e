use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }

    pub fn null_arg(name: impl Into<String>) -> Error {
        Error(ErrorKind::NullArgument { name: name.into() }.into())
    }

    pub fn invalid_arg(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidArgument {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn out_of_range(name: impl Into<String>, message: impl Into<String>) -> Error {
        Error(
            ErrorKind::OutOfRange {
                name: name.into(),
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn invalid_state(message: impl Into<String>) -> Error {
        Error(
            ErrorKind::InvalidState {
                message: message.into(),
            }
            .into(),
        )
    }

    pub fn is_null_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::NullArgument { .. })
    }

    pub fn is_invalid_arg(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidArgument { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.kind(), ErrorKind::OutOfRange { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self.kind(), ErrorKind::InvalidState { .. })
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("argument {name} must not be null")]
    NullArgument { name: String },

    #[error("invalid argument {name}: {message}")]
    InvalidArgument { name: String, message: String },

    #[error("argument {name} is out of range: {message}")]
    OutOfRange { name: String, message: String },

    #[error("invalid state: {message}")]
    InvalidState { message: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
