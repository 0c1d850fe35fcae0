use moonlet::{
    error::ErrorKind,
    interpreter::{
        lexer::tokenize,
        position::Position,
        token::{Token, TokenKind},
    },
};

fn kinds(src: &str) -> Vec<TokenKind> {
    tokenize(src).unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"))
                 .into_iter()
                 .map(|token| token.kind)
                 .collect()
}

fn assert_lex_failure(src: &str, kind: ErrorKind) {
    match tokenize(src) {
        Ok(tokens) => panic!("tokenizing {src:?} succeeded with {tokens:?}"),
        Err(e) => assert_eq!(e.kind, kind, "unexpected error for {src:?}: {e}"),
    }
}

#[test]
fn single_literals() {
    let eof = Token::new(TokenKind::EndOfFile, Position::new(1, 0, 0));

    assert_eq!(tokenize("10").unwrap(),
               vec![Token::new(TokenKind::Integer(10), Position::new(0, 0, 1)), eof.clone()]);
    assert_eq!(tokenize("12.5").unwrap(),
               vec![Token::new(TokenKind::Float(12.5), Position::new(0, 0, 3)), eof.clone()]);
    assert_eq!(tokenize(".5").unwrap(),
               vec![Token::new(TokenKind::Float(0.5), Position::new(0, 0, 1)), eof.clone()]);
    assert_eq!(tokenize("'abc'").unwrap(),
               vec![Token::new(TokenKind::String("abc".into()), Position::new(0, 0, 4)),
                    eof.clone()]);
    assert_eq!(tokenize("\"abc\"").unwrap(),
               vec![Token::new(TokenKind::String("abc".into()), Position::new(0, 0, 4)),
                    eof.clone()]);
    assert_eq!(tokenize("true").unwrap(),
               vec![Token::new(TokenKind::Boolean(true), Position::new(0, 0, 3)), eof]);
}

#[test]
fn declaration_tokens() {
    assert_eq!(tokenize("=: x 10").unwrap(),
               vec![Token::new(TokenKind::VarDecl, Position::new(0, 0, 1)),
                    Token::new(TokenKind::Identifier("x".into()), Position::new(0, 3, 3)),
                    Token::new(TokenKind::Integer(10), Position::new(0, 5, 6)),
                    Token::new(TokenKind::EndOfFile, Position::new(1, 0, 0))]);
}

#[test]
fn newlines_move_to_the_next_line() {
    let tokens = tokenize("=: x 1\n=! x").unwrap();

    assert_eq!(tokens[3], Token::new(TokenKind::NewLine, Position::new(0, 6, 6)));
    assert_eq!(tokens[4], Token::new(TokenKind::Print, Position::new(1, 0, 1)));
    assert_eq!(tokens[5],
               Token::new(TokenKind::Identifier("x".into()), Position::new(1, 3, 3)));
    assert_eq!(tokens[6], Token::new(TokenKind::EndOfFile, Position::new(2, 0, 0)));
}

#[test]
fn trailing_newline_does_not_skip_a_line() {
    let tokens = tokenize("=: x 1\n").unwrap();
    assert_eq!(tokens.last(),
               Some(&Token::new(TokenKind::EndOfFile, Position::new(1, 0, 0))));

    let tokens = tokenize("=: x 1\n\n").unwrap();
    assert_eq!(tokens.last(),
               Some(&Token::new(TokenKind::EndOfFile, Position::new(2, 0, 0))));
}

#[test]
fn structural_symbols_split_parts() {
    assert_eq!(kinds("add(a, b)"),
               vec![TokenKind::Identifier("add".into()),
                    TokenKind::ParenOpen,
                    TokenKind::Identifier("a".into()),
                    TokenKind::Comma,
                    TokenKind::Identifier("b".into()),
                    TokenKind::ParenClose,
                    TokenKind::EndOfFile]);
}

#[test]
fn sigils_and_operators() {
    assert_eq!(kinds("=| =@ =? => =! ={ } : =+ =- =* =/"),
               vec![TokenKind::FuncDecl,
                    TokenKind::Call,
                    TokenKind::If,
                    TokenKind::Return,
                    TokenKind::Print,
                    TokenKind::CodeBlockOpen,
                    TokenKind::BraceClose,
                    TokenKind::Colon,
                    TokenKind::AssignAdd,
                    TokenKind::AssignSub,
                    TokenKind::AssignMul,
                    TokenKind::AssignDiv,
                    TokenKind::EndOfFile]);

    assert_eq!(kinds("== != > >= < <="),
               vec![TokenKind::Equal,
                    TokenKind::NotEqual,
                    TokenKind::Greater,
                    TokenKind::GreaterOrEqual,
                    TokenKind::Less,
                    TokenKind::LessOrEqual,
                    TokenKind::EndOfFile]);

    assert_eq!(kinds("x + 1 - 2 * 3 / 4").len(), 10);
}

#[test]
fn comments_are_dropped() {
    assert_eq!(kinds("=: x 1 =# the rest (is, ignored)\n=#note\n=! x"),
               vec![TokenKind::VarDecl,
                    TokenKind::Identifier("x".into()),
                    TokenKind::Integer(1),
                    TokenKind::NewLine,
                    TokenKind::NewLine,
                    TokenKind::Print,
                    TokenKind::Identifier("x".into()),
                    TokenKind::EndOfFile]);
}

#[test]
fn tabs_and_carriage_returns_are_whitespace() {
    assert_eq!(kinds("\t=: x 1\r\n"),
               vec![TokenKind::VarDecl,
                    TokenKind::Identifier("x".into()),
                    TokenKind::Integer(1),
                    TokenKind::NewLine,
                    TokenKind::EndOfFile]);
}

#[test]
fn booleans_are_not_identifiers() {
    assert_eq!(kinds("false truth"),
               vec![TokenKind::Boolean(false),
                    TokenKind::Identifier("truth".into()),
                    TokenKind::EndOfFile]);
}

#[test]
fn empty_input_is_an_error() {
    assert_lex_failure("", ErrorKind::Error);
}

#[test]
fn malformed_input_is_invalid_syntax() {
    assert_lex_failure("=: s 'abc", ErrorKind::InvalidSyntax);
    assert_lex_failure("=: s \"abc\n\"", ErrorKind::InvalidSyntax);
    assert_lex_failure("=: x @@", ErrorKind::InvalidSyntax);
    assert_lex_failure("=: x 12ab", ErrorKind::InvalidSyntax);
    assert_lex_failure("=: x 99999999999999999999", ErrorKind::InvalidSyntax);
}

#[test]
fn unknown_part_is_named_in_the_message() {
    let error = tokenize("=: x @@").unwrap_err();

    assert_eq!(error.message, "@@ isn't a valid expression");
    assert_eq!(error.position, Position::new(0, 5, 6));
}

#[test]
fn tokenizing_is_deterministic() {
    let src = "=| add(a, b) ={\n    =: s a + b\n    => s\n}\n=@ add(1, 2) =: r\n=! r";
    assert_eq!(tokenize(src).unwrap(), tokenize(src).unwrap());
}
