// Cross-cutting state shared by every stage of the compiler: string
// interning, source-position tracking, and the small value types (spans,
// identifiers) that get threaded through every tree the pipeline builds.

use crate::interner::Interner;
use crate::source_map::SourceMap;
pub use bumpalo::Bump;
use interner::Symbol;

pub mod interner;
pub mod source_map;

/// Per-compilation state: owns the string interner and the source map.
/// Constructed once per invocation, right before lexing starts, and dropped
/// when the invocation returns — never shared across compilations.
pub struct CompilerContext<'a> {
    pub interner: Interner<'a>,
    pub source_map: SourceMap<'a>,
}

impl<'a> CompilerContext<'a> {
    pub fn new(arena: &'a Bump, file_name: &'a str, source_code: &'a str) -> Self {
        Self {
            interner: Interner::new(arena),
            source_map: SourceMap::new(file_name, source_code),
        }
    }
}

/// A byte-offset region of the source, used only for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
}

impl Default for Span {
    fn default() -> Self {
        Self {
            start: 0,
            end: 0,
            line: 0,
        }
    }
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize) -> Self {
        Self { start, end, line }
    }

    pub fn get_start_and_line(&self) -> (usize, usize) {
        (self.start, self.line)
    }
}

/// An interned variable or function name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier {
    symbol: Symbol,
    id: usize,
}

impl Identifier {
    pub fn new(symbol: Symbol, id: usize) -> Self {
        Self { symbol, id }
    }

    pub fn get_symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn get_id(&self) -> usize {
        self.id
    }

    pub fn into_parts(self) -> (Symbol, usize) {
        (self.symbol, self.id)
    }
}

impl Default for Identifier {
    fn default() -> Self {
        Self {
            symbol: Symbol(0),
            id: 0,
        }
    }
}

/// An identifier paired with the span it was spelled at in the source, for
/// diagnostics that need to point back at a declaration or a use.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SpannedIdentifier {
    identifier: Identifier,
    span: Span,
}

impl SpannedIdentifier {
    pub fn new(identifier: Identifier, span: Span) -> Self {
        Self { identifier, span }
    }

    pub fn get_identifier(&self) -> Identifier {
        self.identifier
    }

    pub fn get_span(&self) -> Span {
        self.span
    }

    pub fn into_parts(self) -> (Identifier, Span) {
        (self.identifier, self.span)
    }
}
