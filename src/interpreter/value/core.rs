use std::fmt;

use crate::{
    ast::Node,
    error::Error,
    interpreter::{evaluator::core::EvalResult, position::Position, token::TokenKind},
    util::num::i64_to_f64_checked,
};

/// The native data carried by a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// A 64 bit signed integer.
    Int(i64),
    /// A double precision float.
    Float(f64),
    /// Text, without quotes.
    Str(String),
    /// `true` or `false`.
    Bool(bool),
}

/// The kind of literal node a [`Value`] descends from.
///
/// Arithmetic and comparison are only defined between values of the same
/// origin: an integer and a float are both numbers and may be mixed, a number
/// and a string may not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Produced by a `NumberNode`.
    Number,
    /// Produced by a `StringNode`.
    String,
    /// Produced by a `BooleanNode` or a comparison.
    Boolean,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Boolean => "boolean",
        };
        f.write_str(name)
    }
}

/// A runtime value: a payload tagged with its origin.
///
/// Values are always owned. Reading a binding clones it, so a callee can never
/// change the caller's copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Value {
    /// The native data.
    pub payload: Payload,
    /// The literal kind the value descends from.
    pub origin:  Origin,
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self { payload: Payload::Int(v),
               origin:  Origin::Number, }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self { payload: Payload::Float(v),
               origin:  Origin::Number, }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self { payload: Payload::Bool(v),
               origin:  Origin::Boolean, }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self { payload: Payload::Str(v),
               origin:  Origin::String, }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::from(v.to_string())
    }
}

impl Value {
    /// Builds the value of a literal node.
    ///
    /// Returns `None` for nodes that are not `NumberNode`, `StringNode` or
    /// `BooleanNode`, and for literal nodes whose token carries no literal.
    ///
    /// # Example
    /// ```
    /// use moonlet::{
    ///     ast::Node,
    ///     interpreter::{
    ///         position::Position,
    ///         token::{Token, TokenKind},
    ///         value::core::Value,
    ///     },
    /// };
    ///
    /// let node = Node::Number(Token::new(TokenKind::Integer(7), Position::default()));
    /// assert_eq!(Value::from_literal(&node), Some(Value::from(7)));
    /// ```
    #[must_use]
    pub fn from_literal(node: &Node) -> Option<Self> {
        let token = match node {
            Node::Number(token) | Node::String(token) | Node::Boolean(token) => token,
            _ => return None,
        };

        match &token.kind {
            TokenKind::Integer(v) => Some(Self::from(*v)),
            TokenKind::Float(v) => Some(Self::from(*v)),
            TokenKind::String(s) => Some(Self::from(s.clone())),
            TokenKind::Boolean(b) => Some(Self::from(*b)),
            _ => None,
        }
    }

    /// Returns the boolean payload, if there is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self.payload {
            Payload::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Returns `true` for the integer `0` and the float `0.0`.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self.payload {
            Payload::Int(v) => v == 0,
            Payload::Float(v) => v == 0.0,
            _ => false,
        }
    }

    /// Converts a numeric payload to `f64`.
    ///
    /// # Errors
    /// - `RunTimeError` if the payload is an integer too large to be
    ///   represented exactly.
    /// - `InvalidSyntaxError` if the payload is not numeric.
    pub fn to_f64(&self, position: Position) -> EvalResult<f64> {
        match &self.payload {
            Payload::Float(v) => Ok(*v),
            Payload::Int(v) => i64_to_f64_checked(*v, ()).map_err(|()| {
                                  Error::runtime(format!("{v} is too large to be used as a float"),
                                                 position)
                              }),
            _ => Err(Error::invalid_syntax(format!("expected a number, found {}", self.origin),
                                           position)),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.payload {
            Payload::Int(v) => write!(f, "{v}"),
            Payload::Float(v) => write!(f, "{v:?}"),
            Payload::Str(s) => f.write_str(s),
            Payload::Bool(b) => write!(f, "{b}"),
        }
    }
}
