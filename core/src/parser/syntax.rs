// Common syntax structures shared by the scanner, the parsed program and the
// evaluator.

use core::{cell::RefCell, fmt, ops::Range};

use bumpalo::Bump;
use hashbrown::{DefaultHashBuilder, HashMap};

/// Side table mapping arena-allocated nodes back to their source spans.
///
/// Nodes are keyed by address, so the table is only meaningful for nodes
/// allocated in the same arena as the table itself.
#[derive(Debug)]
pub struct AnnotatedSource<'a, T> {
    pub source: &'a str,
    spans: RefCell<HashMap<*const T, Span, DefaultHashBuilder, &'a Bump>>,
}

impl<'a, T> AnnotatedSource<'a, T> {
    pub fn new(arena: &'a Bump, source: &'a str) -> Self {
        Self {
            source,
            spans: RefCell::new(HashMap::new_in(arena)),
        }
    }
    pub fn add_span(&self, node: &T, span: Span) {
        let p = node as *const _;
        self.spans.borrow_mut().insert(p, span);
    }
    pub fn span_of(&self, node: &T) -> Option<Span> {
        let p = node as *const _;
        self.spans.borrow().get(&p).cloned()
    }
    pub fn snippet(&self, span: Span) -> &str {
        &self.source[span.0]
    }
    /// 1-based line on which `span` starts.
    pub fn line_of(&self, span: &Span) -> u32 {
        span.line_in(self.source)
    }
}

/// Byte range into the program source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self(start..end)
    }
    pub fn combine(a: &Span, b: &Span) -> Span {
        Span::new(a.0.start, b.0.end)
    }
    pub fn str_of<'a>(&self, source: &'a str) -> &'a str {
        &source[self.0.start..self.0.end]
    }
    /// 1-based line number of the span start within `source`.
    pub fn line_in(&self, source: &str) -> u32 {
        let end = self.0.start.min(source.len());
        let newlines = source.as_bytes()[..end]
            .iter()
            .filter(|&&b| b == b'\n')
            .count();
        newlines as u32 + 1
    }
}

/// The four arithmetic operators the expression grammar accepts.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Sub => '-',
            BinaryOp::Mul => '*',
            BinaryOp::Div => '/',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
