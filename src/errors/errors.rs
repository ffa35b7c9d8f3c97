use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::InvalidIndentation { .. } => "InvalidIndentation",
            ErrorImpl::MalformedNumber { .. } => "MalformedNumber",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => ErrorTip::None,
            ErrorImpl::InvalidIndentation { width } => ErrorTip::Suggestion(format!(
                "Leading whitespace is {} columns wide, indentation must be a multiple of 4 spaces",
                width
            )),
            ErrorImpl::MalformedNumber { literal, detail } => {
                ErrorTip::Suggestion(format!("Invalid number `{}`, {}", literal, detail))
            }
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unexpected character: {character:?}")]
    UnexpectedCharacter { character: char },
    #[error("indentation must be a multiple of 4 spaces, found width {width:?}")]
    InvalidIndentation { width: usize },
    #[error("malformed number {literal:?}: {detail}")]
    MalformedNumber { literal: String, detail: String },
}
