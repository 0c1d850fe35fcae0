use std::iter::Peekable;

use crate::{
    ast::{Identifier, Node},
    error::Error,
    interpreter::{
        parser::{core::ParseResult, utils::current},
        token::{Token, TokenKind},
    },
};

/// Parses an atom, optionally followed by an arithmetic operation.
///
/// Grammar: `atom := (INT | FLOAT | STRING | IDENT | BOOL) [bin_oper]`
///
/// # Errors
/// Returns a `NotImplementedError` if the current token is not a literal or
/// identifier.
pub fn parse_atom<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;

    let node = match &token.kind {
        TokenKind::Integer(_) | TokenKind::Float(_) => Node::Number(token.clone()),
        TokenKind::String(_) => Node::String(token.clone()),
        TokenKind::Boolean(_) => Node::Boolean(token.clone()),
        TokenKind::Identifier(name) => Node::Identifier(Identifier::new(name.clone(), token.clone())),
        other => {
            return Err(Error::not_implemented(format!("'{other}' atomic value is not implemented"),
                                              token.position));
        },
    };
    tokens.next();

    parse_binary(tokens, node)
}

/// Parses the tail of an arithmetic operation whose left side is known.
///
/// If the current token is `+`, `-`, `*` or `/`, the operator and the
/// following atom form a [`Node::BinaryOp`] with `lhs` on the left. Chained
/// operations therefore nest to the right. Otherwise `lhs` is returned as is.
///
/// Grammar: `bin_oper := ("+" | "-" | "*" | "/") atom`
///
/// # Errors
/// Propagates errors from the right-hand atom.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>, lhs: Node) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    if !token.kind.is_arithmetic() {
        return Ok(lhs);
    }
    tokens.next();

    let rhs = parse_atom(tokens)?;
    Ok(Node::BinaryOp { lhs: Box::new(lhs),
                        rhs: Box::new(rhs),
                        op:  token.clone(), })
}
