//! Field-usage analysis: classify private fields as read, written, both, or
//! neither, and report the ones that are written but never read.
//!
//! The analysis is read-only and local to one type declaration: it looks at
//! the type's own constructors and methods, never across types. Occurrences
//! are matched by simple name only, so a local or parameter shadowing a
//! field name is conservatively counted as the field.

mod usage;

use serde::Serialize;

use crate::ast::ClassDecl;
use crate::Result;

/// How one private field is used within its declaring type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldUsage {
    pub name: String,
    pub read: bool,
    pub written: bool,
}

impl FieldUsage {
    /// Written at least once, never read. A field with no occurrences at
    /// all is merely unreferenced, not unused in this sense.
    pub fn is_unused(&self) -> bool {
        self.written && !self.read
    }
}

/// Classifies every private field of the class, in declaration order.
pub fn analyze_usage(class: &ClassDecl) -> Result<Vec<FieldUsage>> {
    log::debug!("analyze usage of class '{}'", class.name);
    usage::analyze_class(class)
}

/// Names of private fields that are written at least once but never read,
/// in declaration order.
pub fn find_unused_attributes(class: &ClassDecl) -> Result<Vec<String>> {
    let report = analyze_usage(class)?;
    Ok(report.into_iter().filter(|u| u.is_unused()).map(|u| u.name).collect())
}
