use log::debug;
use logos::Logos;

use crate::{
    error::Error,
    interpreter::{
        position::Position,
        token::{PartError, Token, TokenKind},
    },
};

/// Result type used by the lexer.
pub type LexResult<T> = Result<T, Error>;

/// Characters that end an unquoted part.
const STOP_CHARS: [char; 7] = [' ', '\t', '\r', '\n', '(', ')', ','];

/// Converts source text into a flat token sequence.
///
/// The text is processed left to right with a cursor [`Position`]:
/// whitespace is skipped, structural symbols are matched one character at a
/// time, quoted text is scanned up to its closing quote and everything else is
/// cut into parts at the stop characters. Every part must match one
/// [`TokenKind`] pattern completely. Comments are dropped together with the
/// rest of their line. The sequence always ends with an `EndOfFile` token at
/// the start of the line after the last line that holds a token.
///
/// # Errors
/// - `Error` if the input is empty.
/// - `InvalidSyntaxError` for an unterminated quote, a part that matches no
///   pattern or a literal that cannot be converted.
///
/// # Example
/// ```
/// use moonlet::interpreter::{
///     lexer::tokenize,
///     position::Position,
///     token::{Token, TokenKind},
/// };
///
/// let tokens = tokenize("=: x 10").unwrap();
/// assert_eq!(tokens,
///            vec![Token::new(TokenKind::VarDecl, Position::new(0, 0, 1)),
///                 Token::new(TokenKind::Identifier("x".into()), Position::new(0, 3, 3)),
///                 Token::new(TokenKind::Integer(10), Position::new(0, 5, 6)),
///                 Token::new(TokenKind::EndOfFile, Position::new(1, 0, 0))]);
/// ```
pub fn tokenize(text: &str) -> LexResult<Vec<Token>> {
    if text.is_empty() {
        return Err(Error::generic("can't tokenize empty input", Position::default()));
    }

    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut cursor = Position::default();
    let mut index = 0;

    while index < chars.len() {
        let ch = chars[index];

        if matches!(ch, ' ' | '\t' | '\r') {
            cursor.next(1);
            index += 1;
            continue;
        }

        if let Some(kind) = TokenKind::symbol(ch) {
            let newline = kind == TokenKind::NewLine;
            tokens.push(Token::new(kind, cursor));
            if newline {
                cursor.next_line();
            } else {
                cursor.next(1);
            }
            index += 1;
            continue;
        }

        let len = if ch == '\'' || ch == '"' {
            quoted_len(&chars[index..], cursor)?
        } else {
            part_len(&chars[index..])
        };
        let part: String = chars[index..index + len].iter().collect();
        let kind = recognize(&part, cursor.span(len))?;

        if kind == TokenKind::Comment {
            while index < chars.len() && chars[index] != '\n' {
                cursor.next(1);
                index += 1;
            }
            continue;
        }

        tokens.push(Token::new(kind, cursor.span(len)));
        cursor.next(len);
        index += len;
    }

    if tokens.last().is_some_and(|token| token.kind == TokenKind::NewLine) {
        cursor = Position::new(cursor.line, 0, 0);
    } else {
        cursor.next_line();
    }
    tokens.push(Token::new(TokenKind::EndOfFile, cursor));

    debug!("tokenized {} characters into {} tokens", chars.len(), tokens.len());
    Ok(tokens)
}

/// Length of an unquoted part: everything up to the next stop character.
fn part_len(chars: &[char]) -> usize {
    chars.iter().position(|c| STOP_CHARS.contains(c)).unwrap_or(chars.len())
}

/// Length of a quoted part, both quotes included.
///
/// The closing quote has to match the opening one and must appear before the
/// end of the line.
fn quoted_len(chars: &[char], cursor: Position) -> LexResult<usize> {
    let quote = chars[0];
    chars.iter()
         .skip(1)
         .take_while(|c| **c != '\n')
         .position(|c| *c == quote)
         .map(|offset| offset + 2)
         .ok_or_else(|| {
             Error::invalid_syntax(format!("expected closing quote {quote}"), cursor)
         })
}

/// Matches a whole part against the token patterns.
fn recognize(part: &str, position: Position) -> LexResult<TokenKind> {
    let mut lexer = TokenKind::lexer(part);

    match lexer.next() {
        Some(Ok(kind)) if lexer.span().end == part.len() => Ok(kind),
        Some(Err(PartError::Conversion)) => {
            Err(Error::invalid_syntax(format!("can't convert '{part}' to a literal"), position))
        },
        _ => Err(Error::invalid_syntax(format!("{part} isn't a valid expression"), position)),
    }
}
