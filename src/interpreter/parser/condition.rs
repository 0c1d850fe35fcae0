use std::iter::Peekable;

use crate::{
    ast::{Node, VarDeclNode},
    error::Error,
    interpreter::{
        parser::{
            binary::parse_atom,
            block::parse_block,
            core::ParseResult,
            statement::parse_statement,
            utils::{current, expect, parse_identifier},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a conditional statement.
///
/// Syntax:
/// ```text
///     =? <condition> =: <identifier>
///     =? <condition> ={ <statements> } [: <branch>]
///     =? <condition> <statement> [: <branch>]
/// ```
/// The `=:` form stores the truth value of the condition instead of
/// branching. The optional `:` introduces the branch taken when the
/// condition does not hold; it may be a statement or a `={ ... }` block.
///
/// # Errors
/// - `InvalidSyntaxError` if the capture name is missing or `:` is followed
///   by the end of the line.
/// - Propagates errors from the condition and branch rules.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = expect(tokens, |kind| *kind == TokenKind::If, "'=?'")?;
    let condition = parse_condition(tokens)?;

    let head = current(tokens)?;
    let then = if head.kind == TokenKind::VarDecl {
        tokens.next();
        let id = parse_identifier(tokens,
                                  "an identifier to store the result of the conditional in")?;
        Node::VarDecl(VarDeclNode { id,
                                    value: None,
                                    token: head.clone() })
    } else {
        parse_branch(tokens)?
    };

    let otherwise = if current(tokens)?.kind == TokenKind::Colon {
        tokens.next();
        let next = current(tokens)?;
        if matches!(next.kind, TokenKind::NewLine | TokenKind::EndOfFile) {
            return Err(Error::invalid_syntax("no false branch was specified for the conditional",
                                             next.position));
        }
        Some(Box::new(parse_branch(tokens)?))
    } else {
        None
    };

    Ok(Node::Conditional { condition: Box::new(condition),
                           then: Box::new(then),
                           otherwise,
                           token: token.clone() })
}

/// Parses one branch of a conditional: a code block or a single statement.
fn parse_branch<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    if token.kind == TokenKind::CodeBlockOpen {
        tokens.next();
        return Ok(Node::List(parse_block(tokens, token)?));
    }

    parse_statement(tokens)
}

/// Parses a comparison, optionally wrapped in parentheses.
///
/// Either side may itself be a parenthesized comparison.
///
/// Grammar: `condition := ["("] operand compare_op operand [")"]` with
/// `operand := "(" condition ")" | atom`
///
/// # Errors
/// Returns an `InvalidSyntaxError` for a missing operand, comparison
/// operator or closing parenthesis.
pub fn parse_condition<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let wrapped = current(tokens)?.kind == TokenKind::ParenOpen;
    if wrapped {
        tokens.next();
    }

    let lhs = parse_operand(tokens)?;
    let op = expect(tokens,
                    TokenKind::is_comparison,
                    "'==', '!=', '>', '>=', '<', '<='")?;
    let rhs = parse_operand(tokens)?;

    if wrapped {
        expect(tokens, |kind| *kind == TokenKind::ParenClose, "')'")?;
    }

    Ok(Node::CompareOp { lhs: Box::new(lhs),
                         rhs: Box::new(rhs),
                         op:  op.clone(), })
}

fn parse_operand<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    match &token.kind {
        TokenKind::ParenOpen => parse_condition(tokens),
        kind if kind.is_atom() => parse_atom(tokens),
        other => Err(Error::invalid_syntax(format!("expected 'int', 'float', 'string', 'bool', \
                                                    'variable' or '(', found '{other}'"),
                                           token.position)),
    }
}
