//! Lexer for user-entered date strings.
//!
//! The lexer converts a date string such as `1446-09-10` into numbers and
//! separators. It handles:
//! - ASCII digits as well as Arabic-Indic (٠-٩) and Eastern Arabic-Indic
//!   (۰-۹) digits, which may be mixed within a number
//! - Whitespace around tokens, which is skipped
//! - Positions reported as byte offsets into the original string

use crate::error::ParseError;
use crate::parser::tokens::{SpannedToken, Token};

/// A lexer for date strings.
pub struct Lexer<'a> {
    /// The input string being tokenized.
    pub(crate) input: &'a str,
    /// The current byte position in the input.
    position: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input string.
    pub fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    /// Returns the next token from the input.
    pub fn next_token(&mut self) -> Result<SpannedToken, ParseError> {
        self.skip_whitespace();

        let start = self.position;
        let ch = match self.current_char() {
            Some(ch) => ch,
            None => {
                return Ok(SpannedToken {
                    token: Token::Eof,
                    start,
                    end: start,
                })
            }
        };

        let token = match ch {
            '-' | '/' | '.' => {
                self.advance();
                Token::Separator(ch)
            }
            _ if digit_value(ch).is_some() => self.lex_number()?,
            _ => {
                return Err(ParseError::UnexpectedChar {
                    position: start,
                    found: ch,
                })
            }
        };

        Ok(SpannedToken {
            token,
            start,
            end: self.position,
        })
    }

    /// Collects all remaining tokens, ending with `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<SpannedToken>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.token == Token::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.position;
        let mut value: u32 = 0;

        while let Some(d) = self.current_char().and_then(digit_value) {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(d))
                .ok_or(ParseError::NumberTooLarge { position: start })?;
            self.advance();
        }

        Ok(Token::Number(value))
    }

    fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            self.position += ch.len_utf8();
        }
    }
}

/// Value of an ASCII, Arabic-Indic or Eastern Arabic-Indic digit.
fn digit_value(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' => Some(ch as u32 - '0' as u32),
        '\u{0660}'..='\u{0669}' => Some(ch as u32 - 0x0660),
        '\u{06F0}'..='\u{06F9}' => Some(ch as u32 - 0x06F0),
        _ => None,
    }
}
