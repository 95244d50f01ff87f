//! Abstract Syntax Tree (AST) representation for Java-like sources
//!
//! This module defines the node model that the synthesizer and analyzer
//! operate on. Trees are produced by an external parser collaborator and
//! handed in fully built; the model itself is a passive data holder.

mod nodes;
mod visitor;

pub use nodes::*;
pub use visitor::*;

use std::fmt;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl Location {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

/// Span of source code (start and end locations)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(start: Location, end: Location) -> Self {
        Self { start, end }
    }

    pub fn from_to(start_line: usize, start_col: usize, end_line: usize, end_col: usize) -> Self {
        Self {
            start: Location::new(start_line, start_col, 0),
            end: Location::new(end_line, end_col, 0),
        }
    }

    /// Span for nodes built in memory rather than parsed from source.
    pub fn synthetic() -> Self {
        Self::default()
    }
}

/// AST node trait that all AST nodes implement
pub trait AstNode {
    /// Get the source span of this node
    fn span(&self) -> Span;

    /// Accept a visitor
    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()>;
}

/// Main AST root node: one compilation unit's type declarations
#[derive(Debug, Clone)]
pub struct Ast {
    pub type_decls: Vec<TypeDecl>,
    pub span: Span,
}

impl Ast {
    pub fn new(type_decls: Vec<TypeDecl>) -> Self {
        Self { type_decls, span: Span::synthetic() }
    }
}

impl AstNode for Ast {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_ast(self)
    }
}

impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for type_decl in &self.type_decls {
            writeln!(f, "{}", type_decl)?;
        }
        Ok(())
    }
}
