use moonlet::{
    ast::{CallNode, Identifier, ListNode, Node, VarDeclNode},
    error::{Error, ErrorKind},
    interpreter::{
        lexer::tokenize,
        parser::core::parse,
        position::Position,
        token::{Token, TokenKind},
    },
};

fn parse_src(src: &str) -> Result<ListNode, Error> {
    let tokens = tokenize(src).unwrap_or_else(|e| panic!("failed to tokenize {src:?}: {e}"));
    parse(&tokens)
}

fn single(src: &str) -> Node {
    let mut program = parse_src(src).unwrap_or_else(|e| panic!("failed to parse {src:?}: {e}"));
    assert_eq!(program.items.len(), 1, "expected one statement in {src:?}");
    program.items.remove(0)
}

fn assert_parse_failure(src: &str, kind: ErrorKind) -> Error {
    match parse_src(src) {
        Ok(program) => panic!("parsing {src:?} succeeded with {program:?}"),
        Err(e) => {
            assert_eq!(e.kind, kind, "unexpected error for {src:?}: {e}");
            e
        },
    }
}

#[test]
fn declaration_node() {
    let id = Identifier::new("x",
                             Token::new(TokenKind::Identifier("x".into()), Position::new(0, 3, 3)));
    let value = Node::Number(Token::new(TokenKind::Integer(10), Position::new(0, 5, 6)));
    let decl = VarDeclNode { id,
                             value: Some(Box::new(value)),
                             token: Token::new(TokenKind::VarDecl, Position::new(0, 0, 1)) };

    assert_eq!(parse_src("=: x 10").unwrap(), ListNode::new(vec![Node::VarDecl(decl)]));
}

#[test]
fn newlines_between_statements_are_skipped() {
    let program = parse_src("\n\n=: x 1\n\n=! x\n").unwrap();
    assert_eq!(program.items.len(), 2);
    assert!(matches!(program.items[1], Node::Print { .. }));
}

#[test]
fn arithmetic_nests_to_the_right() {
    let Node::VarDecl(decl) = single("=: x 1 - 2 - 3") else {
        panic!("expected a declaration");
    };
    let Some(value) = decl.value else {
        panic!("expected a value");
    };
    let Node::BinaryOp { lhs, rhs, .. } = *value else {
        panic!("expected a binary operation");
    };
    assert!(matches!(*lhs, Node::Number(_)));
    assert!(matches!(*rhs, Node::BinaryOp { .. }));
}

#[test]
fn identifier_before_operator_is_the_left_operand() {
    let Node::VarDecl(decl) = single("=: x + 1") else {
        panic!("expected a declaration");
    };
    let value = decl.value.expect("declaration without value");
    let Node::BinaryOp { lhs, .. } = *value else {
        panic!("expected a binary operation");
    };
    assert!(matches!(*lhs, Node::Identifier(ref id) if id.name == "x"));
}

#[test]
fn compound_assignment_node() {
    let node = single("=/ total 4");
    assert!(matches!(node,
                     Node::AssignOp { ref id, ref op, .. }
                     if id.name == "total" && op.kind == TokenKind::AssignDiv));
}

#[test]
fn function_declaration_node() {
    let Node::FuncDecl(decl) = single("=| add(a, b) ={\n    =: s a + b\n    => s\n}") else {
        panic!("expected a function declaration");
    };

    assert_eq!(decl.id.name, "add");
    assert_eq!(decl.param_names(), vec!["a", "b"]);
    assert_eq!(decl.body.items.len(), 2);
    assert!(matches!(decl.body.items[1], Node::Return { .. }));
}

#[test]
fn function_without_parameters() {
    let Node::FuncDecl(decl) = single("=| one() ={\n=> 1\n}") else {
        panic!("expected a function declaration");
    };
    assert!(decl.param_names().is_empty());
}

#[test]
fn call_with_result() {
    let Node::Call(CallNode { id,
                              args,
                              result,
                              inline,
                              .. }) = single("=@ add(1, x) =: r")
    else {
        panic!("expected a call");
    };

    assert_eq!(id.name, "add");
    assert_eq!(args.items.len(), 2);
    assert_eq!(result.map(|target| target.id.name), Some("r".to_string()));
    assert!(!inline);
}

#[test]
fn call_without_sigil() {
    let node = single("add(1, 2)");
    assert!(matches!(node, Node::Call(CallNode { result: None, .. })));
}

#[test]
fn inline_call_in_return() {
    let Node::Return { value, .. } = single("=> twice(n)") else {
        panic!("expected a return");
    };
    assert!(matches!(*value, Node::Call(CallNode { inline: true, .. })));
}

#[test]
fn conditional_with_both_branches() {
    let node = single("=? (x > 1) =! 'big' : =! 'small'");
    let Node::Conditional { condition,
                            then,
                            otherwise,
                            .. } = node
    else {
        panic!("expected a conditional");
    };

    assert!(matches!(*condition, Node::CompareOp { .. }));
    assert!(matches!(*then, Node::Print { .. }));
    assert!(matches!(otherwise.as_deref(), Some(Node::Print { .. })));
}

#[test]
fn conditional_capture() {
    let Node::Conditional { then, otherwise, .. } = single("=? x == 1 =: flag") else {
        panic!("expected a conditional");
    };

    assert!(matches!(*then, Node::VarDecl(VarDeclNode { value: None, .. })));
    assert!(otherwise.is_none());
}

#[test]
fn conditional_block_branch() {
    let Node::Conditional { then, otherwise, .. } =
        single("=? x == 1 ={\n    =: y 1\n    =+ y 1\n} : =: y 0")
    else {
        panic!("expected a conditional");
    };

    assert!(matches!(*then, Node::List(ref block) if block.items.len() == 2));
    assert!(matches!(otherwise.as_deref(), Some(Node::VarDecl(_))));
}

#[test]
fn nested_conditions() {
    let Node::Conditional { condition, .. } = single("=? ((x > 1) == true) =: both") else {
        panic!("expected a conditional");
    };
    let Node::CompareOp { lhs, op, .. } = *condition else {
        panic!("expected a comparison");
    };

    assert_eq!(op.kind, TokenKind::Equal);
    assert!(matches!(*lhs, Node::CompareOp { .. }));
}

#[test]
fn empty_token_sequence_is_an_error() {
    let error = parse(&[]).unwrap_err();
    assert_eq!(error.kind, ErrorKind::Error);
}

#[test]
fn unknown_statements_are_not_implemented() {
    assert_parse_failure("x", ErrorKind::NotImplemented);
    assert_parse_failure("10", ErrorKind::NotImplemented);
    assert_parse_failure("=: x =!", ErrorKind::NotImplemented);
}

#[test]
fn syntax_errors() {
    assert_parse_failure("=: 10 x", ErrorKind::InvalidSyntax);
    assert_parse_failure("=| f(a b) ={\n=> a\n}", ErrorKind::InvalidSyntax);
    assert_parse_failure("=| f(a) =! a", ErrorKind::InvalidSyntax);
    assert_parse_failure("=@ f(1) =: r 5", ErrorKind::InvalidSyntax);
    assert_parse_failure("=? x 1 =: c", ErrorKind::InvalidSyntax);
    assert_parse_failure("=! =:", ErrorKind::InvalidSyntax);
}

#[test]
fn unterminated_block() {
    let error = assert_parse_failure("=| f() ={\n=> 1\n", ErrorKind::InvalidSyntax);
    assert_eq!(error.message, "expected '}'");
}

#[test]
fn missing_false_branch() {
    let error = assert_parse_failure("=? x == 1 =! x :", ErrorKind::InvalidSyntax);
    assert_eq!(error.message, "no false branch was specified for the conditional");
}

#[test]
fn parsing_is_deterministic() {
    let src = "=| add(a, b) ={\n=: s a + b\n=> s\n}\n=@ add(1, 2) =: r\n=? r > 2 =! r : =! 0";
    assert_eq!(parse_src(src).unwrap(), parse_src(src).unwrap());
}
