use std::fmt;

use logos::Logos;

use crate::interpreter::position::Position;

/// Reasons a source part can fail to become a token.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PartError {
    /// No token pattern matches the part.
    #[default]
    Unrecognized,
    /// A pattern matched but its literal could not be converted, for example
    /// an integer that does not fit into 64 bits.
    Conversion,
}

/// The kind of a lexical token together with its literal value.
///
/// Each variant owns the pattern that recognizes it. The lexer cuts the source
/// into parts and matches every part against these patterns; structural
/// symbols are matched on single characters before any part is scanned.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = PartError)]
pub enum TokenKind {
    /// Floating point literals such as `3.14` or `.5`.
    #[regex(r"[0-9]*\.[0-9]+", |lex| lex.slice().parse::<f64>().map_err(|_| PartError::Conversion))]
    Float(f64),
    /// Integer literals such as `42`.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().map_err(|_| PartError::Conversion))]
    Integer(i64),
    /// Quoted text; the quotes are stripped.
    #[regex(r#""[^"\n]*""#, strip_quotes)]
    #[regex(r"'[^'\n]*'", strip_quotes)]
    String(String),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Boolean(bool),
    /// Names of variables, parameters and functions.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mul,
    /// `/`
    #[token("/")]
    Div,

    /// `,`
    #[token(",")]
    Comma,
    /// `:`, separating the two branches of a conditional.
    #[token(":")]
    Colon,
    /// `(`
    #[token("(")]
    ParenOpen,
    /// `)`
    #[token(")")]
    ParenClose,
    /// `{`
    #[token("{")]
    BraceOpen,
    /// `}`
    #[token("}")]
    BraceClose,
    /// A line break. Newlines separate statements.
    #[token("\n")]
    NewLine,
    /// Appended once after the last token.
    EndOfFile,

    /// `==`
    #[token("==")]
    Equal,
    /// `!=`
    #[token("!=")]
    NotEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterOrEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessOrEqual,

    /// `=+`
    #[token("=+")]
    AssignAdd,
    /// `=-`
    #[token("=-")]
    AssignSub,
    /// `=*`
    #[token("=*")]
    AssignMul,
    /// `=/`
    #[token("=/")]
    AssignDiv,

    /// `=:` declares a variable or captures a result.
    #[token("=:")]
    VarDecl,
    /// `=|` starts a function declaration.
    #[token("=|")]
    FuncDecl,
    /// `={` opens a code block.
    #[token("={")]
    CodeBlockOpen,
    /// `=@` calls a function.
    #[token("=@")]
    Call,
    /// `=?` starts a conditional.
    #[token("=?")]
    If,
    /// `=>` returns from a function.
    #[token("=>")]
    Return,
    /// `=!` prints a value.
    #[token("=!")]
    Print,
    /// `=#` comments out the rest of the line. Never emitted by the lexer.
    #[regex(r"=#[^ \t\r\n(),]*")]
    Comment,
}

fn strip_quotes(lex: &logos::Lexer<TokenKind>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

impl TokenKind {
    /// Maps a structural character to its token, if it is one.
    ///
    /// These characters are recognized before any multi character scan so
    /// that, for example, `(` never ends up inside an identifier.
    #[must_use]
    pub fn symbol(ch: char) -> Option<Self> {
        let kind = match ch {
            '+' => Self::Add,
            '-' => Self::Sub,
            '*' => Self::Mul,
            '/' => Self::Div,
            ',' => Self::Comma,
            ':' => Self::Colon,
            '(' => Self::ParenOpen,
            ')' => Self::ParenClose,
            '{' => Self::BraceOpen,
            '}' => Self::BraceClose,
            '\n' => Self::NewLine,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns `true` for the four arithmetic operators.
    #[must_use]
    pub const fn is_arithmetic(&self) -> bool {
        matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }

    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(self,
                 Self::Equal
                 | Self::NotEqual
                 | Self::Greater
                 | Self::GreaterOrEqual
                 | Self::Less
                 | Self::LessOrEqual)
    }

    /// Returns `true` for the compound assignment sigils.
    #[must_use]
    pub const fn is_compound_assign(&self) -> bool {
        matches!(self,
                 Self::AssignAdd | Self::AssignSub | Self::AssignMul | Self::AssignDiv)
    }

    /// The arithmetic operator applied by a compound assignment sigil.
    ///
    /// ```
    /// use moonlet::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::AssignDiv.compound_operator(), Some(TokenKind::Div));
    /// assert_eq!(TokenKind::VarDecl.compound_operator(), None);
    /// ```
    #[must_use]
    pub const fn compound_operator(&self) -> Option<Self> {
        match self {
            Self::AssignAdd => Some(Self::Add),
            Self::AssignSub => Some(Self::Sub),
            Self::AssignMul => Some(Self::Mul),
            Self::AssignDiv => Some(Self::Div),
            _ => None,
        }
    }

    /// Returns `true` for literal and identifier tokens.
    #[must_use]
    pub const fn is_atom(&self) -> bool {
        matches!(self,
                 Self::Integer(_)
                 | Self::Float(_)
                 | Self::String(_)
                 | Self::Identifier(_)
                 | Self::Boolean(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "\"{s}\""),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Identifier(name) => f.write_str(name),
            Self::Add => f.write_str("+"),
            Self::Sub => f.write_str("-"),
            Self::Mul => f.write_str("*"),
            Self::Div => f.write_str("/"),
            Self::Comma => f.write_str(","),
            Self::Colon => f.write_str(":"),
            Self::ParenOpen => f.write_str("("),
            Self::ParenClose => f.write_str(")"),
            Self::BraceOpen => f.write_str("{"),
            Self::BraceClose => f.write_str("}"),
            Self::NewLine => f.write_str("newline"),
            Self::EndOfFile => f.write_str("end of file"),
            Self::Equal => f.write_str("=="),
            Self::NotEqual => f.write_str("!="),
            Self::Greater => f.write_str(">"),
            Self::GreaterOrEqual => f.write_str(">="),
            Self::Less => f.write_str("<"),
            Self::LessOrEqual => f.write_str("<="),
            Self::AssignAdd => f.write_str("=+"),
            Self::AssignSub => f.write_str("=-"),
            Self::AssignMul => f.write_str("=*"),
            Self::AssignDiv => f.write_str("=/"),
            Self::VarDecl => f.write_str("=:"),
            Self::FuncDecl => f.write_str("=|"),
            Self::CodeBlockOpen => f.write_str("={"),
            Self::Call => f.write_str("=@"),
            Self::If => f.write_str("=?"),
            Self::Return => f.write_str("=>"),
            Self::Print => f.write_str("=!"),
            Self::Comment => f.write_str("=#"),
        }
    }
}

/// A token: its kind, literal value included, and where it was found.
///
/// Equality is structural, so two token streams compare equal only when kinds,
/// values and positions all agree.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What was recognized, including the converted literal.
    pub kind:     TokenKind,
    /// The columns the token covers.
    pub position: Position,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}
