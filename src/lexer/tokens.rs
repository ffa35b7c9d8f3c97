use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("unique", TokenKind::Unique);
        map.insert("var", TokenKind::Var);
        map
    };
    pub static ref PUNCTUATION_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Equal);
        map.insert("=>", TokenKind::Yields);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("{", TokenKind::LeftCurly);
        map.insert("}", TokenKind::RightCurly);
        map.insert("[", TokenKind::LeftBrace);
        map.insert("]", TokenKind::RightBrace);
        map.insert(",", TokenKind::Comma);
        map.insert(":", TokenKind::Colon);
        map.insert(".", TokenKind::Dot);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub enum TokenKind {
    Newline,
    Indent,
    Dedent,

    Identifier(String),
    Number(String),

    // Reserved
    Unique,
    Var,

    Equal,    // =
    Yields,   // =>
    NotEqual, // !=

    LeftCurly,
    RightCurly,
    LeftBrace,
    RightBrace,

    Comma,
    Colon,
    Dot,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Identifier(_) => write!(f, "Identifier"),
            TokenKind::Number(_) => write!(f, "Number"),
            _ => write!(f, "{:?}", self),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Token {{\nkind: {},\nposition: {}:{}}}",
            self.kind, self.position.line, self.position.column
        )
    }
}

impl Token {
    /// Returns the text payload, present only for identifiers and numbers.
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Identifier(text) | TokenKind::Number(text) => Some(text),
            _ => None,
        }
    }

    pub fn debug(&self) {
        match self.text() {
            Some(text) => println!("{} ({})", self.kind, text),
            None => println!("{} ()", self.kind),
        }
    }
}
