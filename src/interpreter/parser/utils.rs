use std::iter::Peekable;

use crate::{
    ast::Identifier,
    error::Error,
    interpreter::{
        parser::core::ParseResult,
        position::Position,
        token::{Token, TokenKind},
    },
};

/// Returns the current token without consuming it.
///
/// # Errors
/// Returns an `Error` if the stream ended without an `EndOfFile` token.
pub(in crate::interpreter::parser) fn current<'a, I>(tokens: &mut Peekable<I>)
                                                     -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek()
          .copied()
          .ok_or_else(|| Error::generic("no 'End Of File' token", Position::default()))
}

/// Consumes the current token if `accept` holds for its kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `accept`: Predicate on the current token kind.
/// - `expected`: Description of the accepted token(s) for the error message.
///
/// # Errors
/// Returns an `InvalidSyntaxError` naming `expected` when the current token
/// is rejected.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    accept: impl Fn(&TokenKind) -> bool,
                                                    expected: &str)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens)?;
    if !accept(&token.kind) {
        return Err(Error::invalid_syntax(format!("expected {expected}, found '{}'", token.kind),
                                         token.position));
    }
    tokens.next();
    Ok(token)
}

/// Parses a plain identifier.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at an identifier.
/// - `what`: What the identifier names, for the error message.
///
/// # Errors
/// Returns an `InvalidSyntaxError` if the current token is not an identifier.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              what: &str)
                                                              -> ParseResult<Identifier>
    where I: Iterator<Item = &'a Token>
{
    let token = current(tokens)?;
    match &token.kind {
        TokenKind::Identifier(name) => {
            tokens.next();
            Ok(Identifier::new(name.clone(), token.clone()))
        },
        other => Err(Error::invalid_syntax(format!("expected {what}, found '{other}'"),
                                           token.position)),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// Shared by parameter lists and argument lists. An immediately encountered
/// closing token produces an empty list. The closing token is consumed.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns an error if an item fails to parse or if an item is followed by
/// anything other than a comma or the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &TokenKind)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut items = Vec::new();
    if current(tokens)?.kind == *closing {
        tokens.next();
        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        let token = current(tokens)?;
        match &token.kind {
            TokenKind::Comma => {
                tokens.next();
            },
            kind if kind == closing => {
                tokens.next();
                break;
            },
            other => {
                return Err(Error::invalid_syntax(format!("expected ',' or '{closing}', found \
                                                          '{other}'"),
                                                 token.position));
            },
        }
    }
    Ok(items)
}
