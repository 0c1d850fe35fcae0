use std::fmt;

/// A location inside the source text.
///
/// `start` and `end` are inclusive character columns on `line`. Positions are
/// plain values: the lexer advances a cursor position and copies it into every
/// token, the parser copies token positions into nodes and the evaluator copies
/// node positions into errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero based line number.
    pub line:  usize,
    /// First column covered by the token.
    pub start: usize,
    /// Last column covered by the token.
    pub end:   usize,
}

impl Position {
    /// Creates a position from its raw parts.
    #[must_use]
    pub const fn new(line: usize, start: usize, end: usize) -> Self {
        Self { line, start, end }
    }

    /// Moves the cursor `steps` columns to the right on the same line.
    ///
    /// Afterwards the position covers a single column again.
    pub const fn next(&mut self, steps: usize) {
        self.start += steps;
        self.end = self.start;
    }

    /// Moves the cursor to the first column of the following line.
    pub const fn next_line(&mut self) {
        self.line += 1;
        self.start = 0;
        self.end = 0;
    }

    /// Returns a copy of this position stretched to cover `len` columns.
    ///
    /// A zero length yields the position unchanged.
    ///
    /// # Example
    /// ```
    /// use moonlet::interpreter::position::Position;
    ///
    /// let cursor = Position::new(0, 5, 5);
    /// assert_eq!(cursor.span(2), Position::new(0, 5, 6));
    /// ```
    #[must_use]
    pub const fn span(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        Self { line:  self.line,
               start: self.start,
               end:   self.start + len - 1, }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}:{}]", self.line, self.start, self.end)
    }
}
