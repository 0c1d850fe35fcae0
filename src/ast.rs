use std::rc::Rc;

use crate::interpreter::{position::Position, token::Token};

/// A name taken from an identifier token.
///
/// Used wherever the grammar only allows a name: declaration targets,
/// parameters, callees and result destinations.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    /// The identifier text.
    pub name:  String,
    /// The identifier token it was read from.
    pub token: Token,
}

impl Identifier {
    /// Wraps an identifier token.
    #[must_use]
    pub fn new(name: impl Into<String>, token: Token) -> Self {
        Self { name: name.into(),
               token }
    }

    /// Source position of the identifier.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.token.position
    }
}

/// An ordered sequence of nodes.
///
/// Programs, code blocks, function bodies, parameter lists and argument lists
/// are all lists. The root list of a program has no token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListNode {
    /// The items in source order.
    pub items: Vec<Node>,
    /// The token that opened the list, if any.
    pub token: Option<Token>,
}

impl ListNode {
    /// Creates a list without an opening token.
    #[must_use]
    pub const fn new(items: Vec<Node>) -> Self {
        Self { items, token: None }
    }
}

/// `=: name value`, or a bare `=: name` capture target.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDeclNode {
    /// The variable being bound.
    pub id:    Identifier,
    /// The initializer. `None` for capture targets of calls and conditionals.
    pub value: Option<Box<Node>>,
    /// The `=:` token.
    pub token: Token,
}

/// `=| name(params) ={ body }`
#[derive(Debug, Clone, PartialEq)]
pub struct FuncDeclNode {
    /// The function name.
    pub id:     Identifier,
    /// The formal parameters, each a [`Node::Param`].
    pub params: ListNode,
    /// The statements of the body.
    pub body:   ListNode,
    /// The `=|` token.
    pub token:  Token,
}

impl FuncDeclNode {
    /// Names of the formal parameters in declaration order.
    #[must_use]
    pub fn param_names(&self) -> Vec<&str> {
        self.params
            .items
            .iter()
            .filter_map(|item| match item {
                Node::Param(id) => Some(id.name.as_str()),
                _ => None,
            })
            .collect()
    }
}

/// `=@ name(args) =: result`
#[derive(Debug, Clone, PartialEq)]
pub struct CallNode {
    /// The callee.
    pub id:     Identifier,
    /// The argument expressions.
    pub args:   ListNode,
    /// Where to store the returned value. `None` discards it.
    pub result: Option<VarDeclNode>,
    /// Set for calls written inside a return expression. Such calls may refer
    /// to the function that is still being declared.
    pub inline: bool,
    /// The `=@` token, or the callee token when the sigil was omitted.
    pub token:  Token,
}

/// A node of the abstract syntax tree.
///
/// Every variant keeps the token it was built from so that runtime errors can
/// point back into the source.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An integer or float literal.
    Number(Token),
    /// A string literal.
    String(Token),
    /// A boolean literal.
    Boolean(Token),
    /// A variable reference.
    Identifier(Identifier),
    /// A sequence of nodes.
    List(ListNode),
    /// A formal parameter.
    Param(Identifier),
    /// `lhs op rhs` with an arithmetic operator.
    BinaryOp {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
        /// The operator token.
        op:  Token,
    },
    /// `lhs op rhs` with a comparison operator.
    CompareOp {
        /// Left operand.
        lhs: Box<Self>,
        /// Right operand.
        rhs: Box<Self>,
        /// The operator token.
        op:  Token,
    },
    /// `=+ id value` and the other compound assignments.
    AssignOp {
        /// The variable being updated.
        id:    Identifier,
        /// The right-hand side.
        value: Box<Self>,
        /// The assignment sigil.
        op:    Token,
    },
    /// A variable declaration.
    VarDecl(VarDeclNode),
    /// `=> value`
    Return {
        /// The returned expression.
        value: Box<Self>,
        /// The `=>` token.
        token: Token,
    },
    /// A function declaration. Shared with the function values built from it.
    FuncDecl(Rc<FuncDeclNode>),
    /// A function call.
    Call(CallNode),
    /// `=? condition then : otherwise`
    Conditional {
        /// A [`Node::CompareOp`] or a [`Node::List`] of conditions.
        condition: Box<Self>,
        /// Executed when the condition holds.
        then:      Box<Self>,
        /// Executed when the condition does not hold.
        otherwise: Option<Box<Self>>,
        /// The `=?` token.
        token:     Token,
    },
    /// `=! value`
    Print {
        /// The printed expression.
        value: Box<Self>,
        /// The `=!` token.
        token: Token,
    },
}

impl Node {
    /// The source position of the node, if it has one.
    #[must_use]
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::Number(token) | Self::String(token) | Self::Boolean(token) => {
                Some(token.position)
            },
            Self::Identifier(id) | Self::Param(id) => Some(id.position()),
            Self::List(list) => list.token.as_ref().map(|t| t.position),
            Self::BinaryOp { op, .. } | Self::CompareOp { op, .. } | Self::AssignOp { op, .. } => {
                Some(op.position)
            },
            Self::VarDecl(decl) => Some(decl.token.position),
            Self::Return { token, .. }
            | Self::Conditional { token, .. }
            | Self::Print { token, .. } => Some(token.position),
            Self::FuncDecl(decl) => Some(decl.token.position),
            Self::Call(call) => Some(call.token.position),
        }
    }

    /// A short name of the variant, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "NumberNode",
            Self::String(_) => "StringNode",
            Self::Boolean(_) => "BooleanNode",
            Self::Identifier(_) => "IdentifierNode",
            Self::List(_) => "ListNode",
            Self::Param(_) => "ParamNode",
            Self::BinaryOp { .. } => "BinaryOpNode",
            Self::CompareOp { .. } => "CompareOpNode",
            Self::AssignOp { .. } => "AssignOpNode",
            Self::VarDecl(_) => "VarDeclNode",
            Self::Return { .. } => "ReturnNode",
            Self::FuncDecl(_) => "FuncDeclNode",
            Self::Call(_) => "CallNode",
            Self::Conditional { .. } => "ConditionalNode",
            Self::Print { .. } => "PrintNode",
        }
    }
}
