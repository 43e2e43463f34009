//! SQL `LIKE` pattern value object.

use crate::{StarbaseError, StarbaseResult};
use std::fmt;

/// Escape character understood by every backend.
pub const LIKE_ESCAPE: char = '\\';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnySequence,
}

/// A validated `LIKE` pattern.
///
/// `%` matches any sequence, `_` matches exactly one character, and `\`
/// escapes `%`, `_` or itself. The raw text is bound unchanged as a query
/// parameter; the parsed form drives in-process matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    raw: String,
    tokens: Vec<Token>,
}

impl LikePattern {
    /// Parses and validates a pattern.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty pattern, a trailing `\`, or a `\`
    /// followed by anything other than `%`, `_` or `\`.
    pub fn parse(raw: &str) -> StarbaseResult<Self> {
        if raw.is_empty() {
            return Err(StarbaseError::invalid_argument("LIKE pattern must not be empty"));
        }

        let mut tokens = Vec::with_capacity(raw.len());
        let mut chars = raw.chars().enumerate();
        while let Some((pos, c)) = chars.next() {
            let token = match c {
                '%' => Token::AnySequence,
                '_' => Token::AnyOne,
                LIKE_ESCAPE => match chars.next() {
                    Some((_, escaped @ ('%' | '_' | LIKE_ESCAPE))) => Token::Literal(escaped),
                    Some((_, other)) => {
                        return Err(StarbaseError::invalid_argument(format!(
                            "LIKE pattern '{}': cannot escape '{}' at position {}",
                            raw, other, pos
                        )))
                    }
                    None => {
                        return Err(StarbaseError::invalid_argument(format!(
                            "LIKE pattern '{}' ends with a dangling escape",
                            raw
                        )))
                    }
                },
                other => Token::Literal(other),
            };
            tokens.push(token);
        }

        Ok(Self {
            raw: raw.to_string(),
            tokens,
        })
    }

    /// Returns the text to bind as the query parameter.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-sensitive match of the whole `value`.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        let text: Vec<char> = value.chars().collect();
        let (mut t, mut p) = (0, 0);
        // Last `%` seen and the text position it is currently absorbing up to.
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::AnyOne) => {
                    t += 1;
                    p += 1;
                }
                Some(Token::Literal(c)) if *c == text[t] => {
                    t += 1;
                    p += 1;
                }
                Some(Token::AnySequence) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                _ => match backtrack {
                    Some((star, absorbed)) => {
                        backtrack = Some((star, absorbed + 1));
                        p = star + 1;
                        t = absorbed + 1;
                    }
                    None => return false,
                },
            }
        }

        self.tokens[p..].iter().all(|token| *token == Token::AnySequence)
    }
}

impl fmt::Display for LikePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
