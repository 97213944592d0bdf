//! Parser for user-entered dates (`YYYY-MM-DD`, `YYYY/MM/DD`, `YYYY.MM.DD`).

pub mod lexer;
pub mod tokens;

use crate::date::{CalendarDate, DateParts};
use crate::error::ParseError;
use crate::options::CalendarSystem;
use lexer::Lexer;
use tokens::{SpannedToken, Token};

/// Parse a date string into unvalidated parts.
///
/// Digits may be ASCII or Arabic-Indic; both separators must be the same.
///
/// # Examples
///
/// ```
/// use hijri_engine::{parse_date_parts, DateParts};
///
/// assert_eq!(parse_date_parts("1446-09-10"), Ok(DateParts::new(1446, 9, 10)));
/// assert_eq!(parse_date_parts("١٤٤٦/٩/١٠"), Ok(DateParts::new(1446, 9, 10)));
/// ```
pub fn parse_date_parts(input: &str) -> Result<DateParts, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut parser = Parser::new(input)?;
    parser.parse()
}

/// Parse a date string and validate it as a date in `system`.
pub fn parse_date(input: &str, system: CalendarSystem) -> Result<CalendarDate, ParseError> {
    let parts = parse_date_parts(input)?;
    Ok(CalendarDate::new(parts, system)?)
}

/// Parser for date strings.
struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Current token
    current: SpannedToken,
    /// The separator used between year and month; the second must match.
    separator: Option<char>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(input);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            separator: None,
        })
    }

    /// Advance to the next token.
    fn advance(&mut self) -> Result<(), ParseError> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn parse(&mut self) -> Result<DateParts, ParseError> {
        let year_start = self.current.start;
        let year = self.expect_number("year")?;
        self.expect_separator("month")?;
        let month = self.expect_number("month")?;
        self.expect_separator("day")?;
        let day = self.expect_number("day")?;

        if !matches!(self.current.token, Token::Eof) {
            return Err(ParseError::TrailingInput {
                position: self.current.start,
            });
        }

        let year = i32::try_from(year).map_err(|_| ParseError::NumberTooLarge {
            position: year_start,
        })?;
        Ok(DateParts::new(year, month, day))
    }

    fn expect_number(&mut self, expected: &'static str) -> Result<u32, ParseError> {
        match self.current.token {
            Token::Number(n) => {
                self.advance()?;
                Ok(n)
            }
            Token::Eof => Err(ParseError::MissingComponent { expected }),
            Token::Separator(c) => Err(ParseError::UnexpectedChar {
                position: self.current.start,
                found: c,
            }),
        }
    }

    fn expect_separator(&mut self, next: &'static str) -> Result<(), ParseError> {
        match self.current.token {
            Token::Separator(c) => {
                match self.separator {
                    Some(first) if first != c => {
                        return Err(ParseError::UnexpectedChar {
                            position: self.current.start,
                            found: c,
                        })
                    }
                    _ => self.separator = Some(c),
                }
                self.advance()
            }
            Token::Eof => Err(ParseError::MissingComponent { expected: next }),
            // Two numbers in a row can only come from whitespace between digits.
            Token::Number(_) => Err(ParseError::TrailingInput {
                position: self.current.start,
            }),
        }
    }
}
