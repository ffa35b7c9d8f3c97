use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::cursor::{Cursor, END_OF_INPUT};
use super::tokens::{Token, TokenKind, KEYWORD_LOOKUP, PUNCTUATION_LOOKUP};

/// Columns per indentation level. A tab counts as one full level.
const INDENT_WIDTH: usize = 4;

pub struct Lexer {
    cursor: Cursor,
    tokens: Vec<Token>,
    line: u32,
    column: u32,
    indent_level: usize,
    start_of_line: bool,
}

impl Lexer {
    pub fn new(source: &str) -> Lexer {
        let mut normalized = String::from(source);
        if !normalized.is_empty() && !normalized.ends_with('\n') {
            normalized.push('\n');
        }

        Lexer {
            cursor: Cursor::new(&normalized),
            tokens: vec![],
            line: 1,
            column: 1,
            indent_level: 0,
            start_of_line: true,
        }
    }

    pub fn lex(mut self) -> Result<Vec<Token>, Error> {
        while !self.cursor.is_at_end() {
            let current = self.cursor.peek();
            let start = self.position();

            if current == '\n' {
                self.advance();
                self.push(MK_TOKEN!(TokenKind::Newline, start));
                self.start_of_line = true;
            } else if self.start_of_line && (current == ' ' || current == '\t') {
                self.process_indentation()?;
            } else if current.is_whitespace() {
                self.advance();
            } else {
                // A line with no leading whitespace closes any open blocks.
                if self.start_of_line && self.indent_level > 0 {
                    for _ in 0..self.indent_level {
                        self.push(MK_TOKEN!(TokenKind::Dedent, Position::new(start.line, 1)));
                    }
                    self.indent_level = 0;
                }
                self.start_of_line = false;

                if current.is_alphabetic() {
                    self.read_word();
                } else if current.is_ascii_digit() {
                    self.read_number()?;
                } else {
                    self.read_punctuation()?;
                }
            }
        }

        while self.indent_level > 0 {
            self.push(MK_TOKEN!(TokenKind::Dedent, Position::new(self.line, 1)));
            self.indent_level -= 1;
        }

        let end = self.position();
        self.push(MK_TOKEN!(TokenKind::Newline, end));

        Ok(self.tokens)
    }

    fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) -> char {
        let current = self.cursor.advance();
        if current == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        current
    }

    fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    fn process_indentation(&mut self) -> Result<(), Error> {
        let start = self.position();
        let mut width = 0;

        loop {
            match self.cursor.peek() {
                ' ' => {
                    width += 1;
                    self.advance();
                }
                '\t' => {
                    width += INDENT_WIDTH;
                    self.advance();
                }
                _ => break,
            }
        }

        // Whitespace-only lines never open or close blocks.
        if self.cursor.is_at_end() || self.cursor.peek() == '\n' {
            return Ok(());
        }

        if width % INDENT_WIDTH != 0 {
            return Err(Error::new(ErrorImpl::InvalidIndentation { width }, start));
        }

        let new_level = width / INDENT_WIDTH;

        if new_level > self.indent_level {
            for _ in self.indent_level..new_level {
                self.push(MK_TOKEN!(TokenKind::Indent, Position::new(start.line, 1)));
            }
        } else if new_level < self.indent_level {
            for _ in new_level..self.indent_level {
                self.push(MK_TOKEN!(TokenKind::Dedent, Position::new(start.line, 1)));
            }
        }

        self.indent_level = new_level;
        self.start_of_line = false;

        Ok(())
    }

    fn read_word(&mut self) {
        let start = self.position();
        let mut word = String::new();

        while !self.cursor.is_at_end() && self.cursor.peek().is_alphanumeric() {
            word.push(self.advance());
        }

        if let Some(kind) = KEYWORD_LOOKUP.get(word.as_str()) {
            self.push(MK_TOKEN!(kind.clone(), start));
        } else {
            self.push(MK_TOKEN!(TokenKind::Identifier(word), start));
        }
    }

    fn read_number(&mut self) -> Result<(), Error> {
        let start = self.position();
        let mut literal = String::new();
        let mut has_decimal = false;

        while !self.cursor.is_at_end() {
            let current = self.cursor.peek();

            if current.is_ascii_digit() {
                literal.push(self.advance());
            } else if current == '.' && !has_decimal {
                literal.push(self.advance());
                has_decimal = true;
            } else if current == '.' && has_decimal {
                return Err(Error::new(
                    ErrorImpl::MalformedNumber {
                        literal,
                        detail: String::from("number cannot have multiple decimal points"),
                    },
                    self.position(),
                ));
            } else {
                break;
            }
        }

        if literal.ends_with('.') {
            return Err(Error::new(
                ErrorImpl::MalformedNumber {
                    literal,
                    detail: String::from("number cannot end with a decimal point"),
                },
                self.position(),
            ));
        }

        self.push(MK_TOKEN!(TokenKind::Number(literal), start));

        Ok(())
    }

    fn read_punctuation(&mut self) -> Result<(), Error> {
        let start = self.position();
        let first = self.cursor.peek();
        let second = self.cursor.peek_at(1);

        // Two-character lexemes take priority over their one-character prefix.
        if second != END_OF_INPUT {
            let pair = format!("{}{}", first, second);

            if let Some(kind) = PUNCTUATION_LOOKUP.get(pair.as_str()) {
                self.advance();
                self.advance();
                self.push(MK_TOKEN!(kind.clone(), start));
                return Ok(());
            }
        }

        let single = first.to_string();
        if let Some(kind) = PUNCTUATION_LOOKUP.get(single.as_str()) {
            self.advance();
            self.push(MK_TOKEN!(kind.clone(), start));
            return Ok(());
        }

        Err(Error::new(
            ErrorImpl::UnexpectedCharacter { character: first },
            start,
        ))
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).lex()
}
