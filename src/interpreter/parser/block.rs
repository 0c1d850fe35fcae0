use std::iter::Peekable;

use crate::{
    ast::ListNode,
    error::Error,
    interpreter::{
        parser::{core::ParseResult, statement::parse_statement, utils::current},
        token::{Token, TokenKind},
    },
};

/// Parses a block body delimited by a closing brace.
///
/// A block consists of zero or more statements, optionally separated by
/// newlines. Parsing continues until a closing `}` token is encountered,
/// which is consumed.
///
/// Grammar: `block := { statement | NEWLINE } "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening token.
/// - `open`: The token that opened the block, kept for diagnostics.
///
/// # Errors
/// Returns an `InvalidSyntaxError` if the input ends before the `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, open: &Token) -> ParseResult<ListNode>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();

    loop {
        let token = current(tokens)?;
        match token.kind {
            TokenKind::NewLine => {
                tokens.next();
            },
            TokenKind::BraceClose => {
                tokens.next();
                break;
            },
            TokenKind::EndOfFile => {
                return Err(Error::invalid_syntax("expected '}'", token.position));
            },
            _ => items.push(parse_statement(tokens)?),
        }
    }

    Ok(ListNode { items,
                  token: Some(open.clone()) })
}
