use std::iter::Peekable;

use log::trace;

use crate::{
    ast::{ListNode, Node},
    error::Error,
    interpreter::{
        parser::{
            binary::parse_atom,
            statement::parse_statement,
            utils::{current, expect},
        },
        position::Position,
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, Error>;

/// Parses a whole token sequence into the program's root list.
///
/// Statements are parsed one after another; newlines between them are
/// skipped and the `EndOfFile` token ends the program. The first error aborts
/// parsing.
///
/// Grammar: `program := { statement | NEWLINE } EOF`
///
/// # Errors
/// - `Error` if the sequence is empty or does not end with `EndOfFile`.
/// - Any error raised by a statement rule.
///
/// # Example
/// ```
/// use moonlet::{
///     ast::Node,
///     interpreter::{lexer::tokenize, parser::core::parse},
/// };
///
/// let tokens = tokenize("=: x 10\n=! x").unwrap();
/// let program = parse(&tokens).unwrap();
/// assert_eq!(program.items.len(), 2);
/// assert!(matches!(program.items[0], Node::VarDecl(_)));
/// ```
pub fn parse(tokens: &[Token]) -> ParseResult<ListNode> {
    if tokens.is_empty() {
        return Err(Error::generic("can't parse with 0 tokens", Position::default()));
    }

    let mut iter = tokens.iter().peekable();
    let mut items = Vec::new();

    loop {
        let token = current(&mut iter)?;
        match token.kind {
            TokenKind::EndOfFile => break,
            TokenKind::NewLine => {
                iter.next();
            },
            _ => {
                let statement = parse_statement(&mut iter)?;
                trace!("parsed {} at {}", statement.kind_name(), token.position);
                items.push(statement);
            },
        }
    }

    Ok(ListNode::new(items))
}

/// Parses an expression: an atom or a parenthesized expression.
///
/// Grammar: `expression := "(" expression ")" | atom`
///
/// # Errors
/// Returns an `InvalidSyntaxError` for a missing `)` and propagates errors
/// from the atom rule.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    if current(tokens)?.kind == TokenKind::ParenOpen {
        tokens.next();
        let expr = parse_expression(tokens)?;
        expect(tokens, |kind| *kind == TokenKind::ParenClose, "')'")?;
        return Ok(expr);
    }

    parse_atom(tokens)
}
