use std::iter::Peekable;

use crate::{
    ast::{Node, VarDeclNode},
    error::Error,
    interpreter::{
        parser::{
            binary::parse_binary,
            condition::parse_conditional,
            core::{ParseResult, parse_expression},
            function::{parse_call, parse_function_declaration, parse_return},
            utils::{current, parse_identifier},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement.
///
/// The statement kind is chosen by the leading token:
/// - `=:`, `=+`, `=-`, `=*`, `=/`: declaration or compound assignment,
/// - `=|`: function declaration,
/// - `=>`: return,
/// - `=@`, or an identifier directly followed by `(`: call,
/// - `=!`: print,
/// - `=?`: conditional.
///
/// # Errors
/// Returns a `NotImplementedError` for any other leading token and
/// propagates errors from the chosen rule.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;

    match &token.kind {
        TokenKind::VarDecl
        | TokenKind::AssignAdd
        | TokenKind::AssignSub
        | TokenKind::AssignMul
        | TokenKind::AssignDiv => parse_assignment(tokens),
        TokenKind::FuncDecl => parse_function_declaration(tokens),
        TokenKind::Return => parse_return(tokens),
        TokenKind::Call => parse_call(tokens),
        TokenKind::Print => parse_print(tokens),
        TokenKind::If => parse_conditional(tokens),
        TokenKind::Identifier(_) if is_bare_call(tokens) => parse_call(tokens),
        other => Err(Error::not_implemented(format!("'{other}' statement is not implemented"),
                                            token.position)),
    }
}

/// Checks whether an identifier is immediately followed by `(`.
fn is_bare_call<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    lookahead.next();
    matches!(lookahead.peek(),
             Some(Token { kind: TokenKind::ParenOpen,
                          .. }))
}

/// Parses a variable declaration or a compound assignment.
///
/// Supported forms:
/// - `=: <identifier> <expression>`
/// - `=+ <identifier> <expression>` (and `=-`, `=*`, `=/`)
///
/// When the identifier is directly followed by an arithmetic operator, the
/// identifier itself becomes the left operand of the value: `=: x + 1`
/// stores `x + 1` into `x`.
///
/// # Errors
/// Returns an `InvalidSyntaxError` if no identifier follows the sigil and
/// propagates errors from the value expression.
pub fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = current(tokens)?;
    if !(base.kind == TokenKind::VarDecl || base.kind.is_compound_assign()) {
        return Err(Error::invalid_syntax("expected '=:', '=+', '=-', '=*', '=/'",
                                         base.position));
    }
    tokens.next();

    let id = parse_identifier(tokens, "an identifier")?;

    let value = if current(tokens)?.kind.is_arithmetic() {
        parse_binary(tokens, Node::Identifier(id.clone()))?
    } else {
        parse_expression(tokens)?
    };

    if base.kind == TokenKind::VarDecl {
        return Ok(Node::VarDecl(VarDeclNode { id,
                                              value: Some(Box::new(value)),
                                              token: base.clone() }));
    }

    Ok(Node::AssignOp { id,
                        value: Box::new(value),
                        op: base.clone() })
}

/// Parses `=! <expression>`.
///
/// # Errors
/// Returns an `InvalidSyntaxError` if the sigil is not followed by a literal,
/// an identifier or `(`.
pub fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = current(tokens)?;
    tokens.next();

    let operand = current(tokens)?;
    if !(operand.kind.is_atom() || operand.kind == TokenKind::ParenOpen) {
        return Err(Error::invalid_syntax(format!("expected 'int', 'float', 'string', 'bool' or \
                                                  'variable', found '{}'",
                                                 operand.kind),
                                         operand.position));
    }

    let value = parse_expression(tokens)?;
    Ok(Node::Print { value: Box::new(value),
                     token: token.clone() })
}
