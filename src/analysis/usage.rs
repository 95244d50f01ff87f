use std::collections::HashSet;

use super::FieldUsage;
use crate::ast::*;
use crate::Result;

/// Accumulates read/written names across every constructor and method body
/// of one type. Field initializers and nested type declarations are outside
/// the accumulation scope.
#[derive(Default)]
struct UsageCollector {
    read: HashSet<String>,
    written: HashSet<String>,
}

impl UsageCollector {
    /// Classifies the target of a write. Bare names and self-qualified
    /// references are writes of that name; anything else (a qualified access
    /// on some other object, a call result) is just an expression whose
    /// subterms are reads.
    fn record_write(&mut self, target: &Expr, also_read: bool) -> Result<()> {
        match strip_parens(target) {
            Expr::Identifier(id) => {
                self.written.insert(id.name.clone());
                if also_read {
                    self.read.insert(id.name.clone());
                }
                Ok(())
            }
            Expr::ThisField(tf) => {
                self.written.insert(tf.name.clone());
                if also_read {
                    self.read.insert(tf.name.clone());
                }
                Ok(())
            }
            other => self.visit_expr(other),
        }
    }
}

impl AstVisitor for UsageCollector {
    fn visit_field_decl(&mut self, _field: &FieldDecl) -> Result<()> {
        // Only constructor and method bodies count as occurrences.
        Ok(())
    }

    fn visit_type_decl(&mut self, _type_decl: &TypeDecl) -> Result<()> {
        // Nested types are analyzed on their own, with their own state.
        Ok(())
    }

    fn visit_identifier_expr(&mut self, identifier: &IdentifierExpr) -> Result<()> {
        self.read.insert(identifier.name.clone());
        Ok(())
    }

    fn visit_this_field_expr(&mut self, this_field: &ThisFieldExpr) -> Result<()> {
        self.read.insert(this_field.name.clone());
        Ok(())
    }

    fn visit_assignment_expr(&mut self, assignment: &AssignmentExpr) -> Result<()> {
        self.record_write(&assignment.target, assignment.operator.is_compound())?;
        self.visit_expr(&assignment.value)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryExpr) -> Result<()> {
        if unary.operator.is_read_write() {
            self.record_write(&unary.operand, true)
        } else {
            walk_unary_expr(self, unary)
        }
    }
}

fn strip_parens(expr: &Expr) -> &Expr {
    let mut current = expr;
    while let Expr::Parenthesized(inner) = current {
        current = inner;
    }
    current
}

pub(crate) fn analyze_class(class: &ClassDecl) -> Result<Vec<FieldUsage>> {
    // Visit every member first; the field hooks above keep the accumulation
    // scoped to constructor and method bodies.
    let mut collector = UsageCollector::default();
    walk_class_decl(&mut collector, class)?;

    let mut report = Vec::new();
    for member in &class.body {
        if let ClassMember::Field(field) = member {
            if !field.is_private() {
                continue;
            }
            for binding in &field.variables {
                report.push(FieldUsage {
                    name: binding.name.clone(),
                    read: collector.read.contains(&binding.name),
                    written: collector.written.contains(&binding.name),
                });
            }
        }
    }
    Ok(report)
}
