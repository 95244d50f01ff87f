//! jast - AST transformation and analysis toolkit for Java-like sources
//!
//! The toolkit operates on an already-built AST (parsing and printing are
//! external collaborators) and provides two passes on top of a shared
//! visitor framework:
//!
//! - **synth**: insert missing getter/setter methods for a class's fields
//!   without duplicating existing ones
//! - **analysis**: report private fields that are written but never read
//!
//! ## Architecture
//!
//! - **ast**: node model and the traversal engine (visitor + `walk_*` fns)
//! - **synth**: accessor synthesis (mutates the tree, append-only)
//! - **analysis**: field-usage classification (read-only)
//!
//! ```text
//! Parser (external) → Ast → synth / analysis → Printer (external)
//! ```
//!
//! Both passes handle each type declaration independently once all of its
//! members have been visited, so nested and multiple classes in one unit
//! never share accumulator state.

pub mod analysis;
pub mod ast;
pub mod error;
pub mod synth;

pub use error::{Error, Result};

pub use analysis::{analyze_usage, find_unused_attributes, FieldUsage};
pub use synth::AccessorSynthesizer;
