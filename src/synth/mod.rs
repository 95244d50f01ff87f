//! Accessor synthesis: append missing getters/setters to type declarations.

mod accessors;

use crate::ast::Ast;
use crate::Result;

/// Inserts missing getter/setter methods for every field of every type
/// declaration in a compilation unit.
///
/// The pass is append-only: existing members are never reordered, mutated,
/// or deleted, and re-running it on an already-synthesized tree is a no-op.
/// Each type declaration (including nested ones) is handled independently,
/// after all of its own members have been visited.
pub struct AccessorSynthesizer;

impl AccessorSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Run synthesis over the unit; the mutated tree is returned for
    /// chaining. Never fails for a well-formed tree.
    pub fn synthesize(&mut self, mut ast: Ast) -> Result<Ast> {
        log::debug!("synth start: types={}", ast.type_decls.len());
        for type_decl in &mut ast.type_decls {
            accessors::synthesize_type(type_decl)?;
        }
        log::debug!("synth end: ok");
        Ok(ast)
    }
}

impl Default for AccessorSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
