use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{CallNode, FuncDeclNode, Identifier, ListNode, Node, VarDeclNode},
    error::Error,
    interpreter::{
        parser::{
            binary::parse_atom,
            block::parse_block,
            core::ParseResult,
            utils::{current, expect, parse_comma_separated, parse_identifier},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a function declaration.
///
/// Grammar: `func_decl := "=|" IDENT "(" params ")" "={" body "}"` with
/// `params := (IDENT ("," IDENT)*)?`
///
/// # Errors
/// Returns an `InvalidSyntaxError` for a missing name, parenthesis, comma,
/// block opener or closing brace.
pub fn parse_function_declaration<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let base = expect(tokens, |kind| *kind == TokenKind::FuncDecl, "'=|'")?;
    let id = parse_identifier(tokens, "a function name")?;

    let open = expect(tokens, |kind| *kind == TokenKind::ParenOpen, "'('")?;
    let params = parse_comma_separated(tokens,
                                       |tokens| {
                                           parse_identifier(tokens, "a parameter name")
                                               .map(Node::Param)
                                       },
                                       &TokenKind::ParenClose)?;

    let block = expect(tokens, |kind| *kind == TokenKind::CodeBlockOpen, "'={'")?;
    let body = parse_block(tokens, block)?;

    Ok(Node::FuncDecl(Rc::new(FuncDeclNode { id,
                                             params: ListNode { items: params,
                                                                token: Some(open.clone()) },
                                             body,
                                             token: base.clone() })))
}

/// Parses a call statement.
///
/// The `=@` sigil is optional.
///
/// Grammar: `call := ["=@"] IDENT "(" args ")" ["=:" IDENT]`
///
/// # Errors
/// Returns an `InvalidSyntaxError` for a missing callee, parenthesis or
/// result name, and for anything but the end of the statement after the
/// result name.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let sigil = current(tokens)?;
    let has_sigil = sigil.kind == TokenKind::Call;
    if has_sigil {
        tokens.next();
    }

    let id = parse_identifier(tokens, "the name of the function to call")?;
    let token = if has_sigil { sigil.clone() } else { id.token.clone() };

    finish_call(tokens, id, token, false)
}

/// Parses the argument list and optional result target of a call whose
/// callee is already known.
fn finish_call<'a, I>(tokens: &mut Peekable<I>,
                      id: Identifier,
                      token: Token,
                      inline: bool)
                      -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let open = expect(tokens, |kind| *kind == TokenKind::ParenOpen, "'('")?;
    let args = ListNode { items: parse_comma_separated(tokens, parse_atom, &TokenKind::ParenClose)?,
                          token: Some(open.clone()), };

    let var = current(tokens)?;
    if var.kind != TokenKind::VarDecl {
        return Ok(Node::Call(CallNode { id,
                                        args,
                                        result: None,
                                        inline,
                                        token }));
    }
    tokens.next();

    let target = parse_identifier(tokens,
                                  "an identifier to store the returned value of the function in")?;

    let next = current(tokens)?;
    if !matches!(next.kind,
                 TokenKind::NewLine | TokenKind::EndOfFile | TokenKind::Colon | TokenKind::BraceClose)
    {
        return Err(Error::invalid_syntax(format!("can't put '{}' after function call", next.kind),
                                         next.position));
    }

    Ok(Node::Call(CallNode { id,
                             args,
                             result: Some(VarDeclNode { id:    target,
                                                        value: None,
                                                        token: var.clone(), }),
                             inline,
                             token }))
}

/// Parses `=> <atom>`.
///
/// An identifier directly followed by `(` turns the returned value into an
/// inline call, which may refer to the function being declared.
///
/// Grammar: `return_stmt := "=>" atom | "=>" IDENT "(" args ")"`
///
/// # Errors
/// Propagates errors from the atom and call rules.
pub fn parse_return<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Node>
    where I: Iterator<Item = &'a Token> + Clone
{
    let token = expect(tokens, |kind| *kind == TokenKind::Return, "'=>'")?;

    let atom = parse_atom(tokens)?;
    let opens_call = current(tokens)?.kind == TokenKind::ParenOpen;

    let value = match atom {
        Node::Identifier(id) if opens_call => {
            let callee = id.token.clone();
            finish_call(tokens, id, callee, true)?
        },
        other => other,
    };

    Ok(Node::Return { value: Box::new(value),
                      token: token.clone() })
}
