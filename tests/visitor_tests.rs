mod common;

use common::*;
use jast::ast::*;
use jast::{Error, Result};

fn sample_unit() -> Ast {
    unit_of(vec![class_decl(
        "Sample",
        vec![
            private_field("int", "a"),
            private_field("String", "b"),
            ctor("Sample", vec![param("int", "a")], vec![assign_this_from_ident("a", "a")]),
            method(
                "total",
                Some(TypeRef::new("int")),
                vec![],
                vec![Stmt::ret(Some(binary(
                    Expr::this_field("a"),
                    BinaryOp::Add,
                    Expr::ident("offset"),
                )))],
            ),
        ],
    )])
}

#[derive(Default)]
struct Counter {
    fields: usize,
    methods: usize,
    constructors: usize,
    identifiers: usize,
    this_fields: usize,
}

impl AstVisitor for Counter {
    fn visit_field_decl(&mut self, field: &FieldDecl) -> Result<()> {
        self.fields += 1;
        walk_field_decl(self, field)
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) -> Result<()> {
        self.methods += 1;
        walk_method_decl(self, method)
    }

    fn visit_constructor_decl(&mut self, constructor: &ConstructorDecl) -> Result<()> {
        self.constructors += 1;
        walk_constructor_decl(self, constructor)
    }

    fn visit_identifier_expr(&mut self, _identifier: &IdentifierExpr) -> Result<()> {
        self.identifiers += 1;
        Ok(())
    }

    fn visit_this_field_expr(&mut self, _this_field: &ThisFieldExpr) -> Result<()> {
        self.this_fields += 1;
        Ok(())
    }
}

#[test]
fn default_walk_visits_every_node_exactly_once() {
    let ast = sample_unit();
    let mut counter = Counter::default();
    ast.accept(&mut counter).unwrap();

    assert_eq!(counter.fields, 2);
    assert_eq!(counter.methods, 1);
    assert_eq!(counter.constructors, 1);
    // `a` in the constructor value, `offset` in the method.
    assert_eq!(counter.identifiers, 2);
    // `this.a` as assignment target and in the return expression.
    assert_eq!(counter.this_fields, 2);
}

#[derive(Default)]
struct OrderRecorder {
    events: Vec<String>,
}

impl AstVisitor for OrderRecorder {
    fn visit_class_decl(&mut self, class: &ClassDecl) -> Result<()> {
        // Children first, class-level logic after: the post-order primitive.
        walk_class_decl(self, class)?;
        self.events.push(format!("class:{}", class.name));
        Ok(())
    }

    fn visit_field_decl(&mut self, field: &FieldDecl) -> Result<()> {
        for binding in &field.variables {
            self.events.push(format!("field:{}", binding.name));
        }
        Ok(())
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) -> Result<()> {
        self.events.push(format!("method:{}", method.name));
        Ok(())
    }

    fn visit_constructor_decl(&mut self, constructor: &ConstructorDecl) -> Result<()> {
        self.events.push(format!("ctor:{}", constructor.name));
        Ok(())
    }
}

#[test]
fn class_hook_runs_after_all_members_in_declaration_order() {
    let ast = sample_unit();
    let mut recorder = OrderRecorder::default();
    ast.accept(&mut recorder).unwrap();

    assert_eq!(
        recorder.events,
        vec!["field:a", "field:b", "ctor:Sample", "method:total", "class:Sample"]
    );
}

struct BodySkipper {
    identifiers: usize,
}

impl AstVisitor for BodySkipper {
    fn visit_method_decl(&mut self, _method: &MethodDecl) -> Result<()> {
        // Opting out: children of this node are not visited.
        Ok(())
    }

    fn visit_constructor_decl(&mut self, _constructor: &ConstructorDecl) -> Result<()> {
        Ok(())
    }

    fn visit_identifier_expr(&mut self, _identifier: &IdentifierExpr) -> Result<()> {
        self.identifiers += 1;
        Ok(())
    }
}

#[test]
fn hook_can_opt_out_of_visiting_children() {
    let ast = sample_unit();
    let mut skipper = BodySkipper { identifiers: 0 };
    ast.accept(&mut skipper).unwrap();
    assert_eq!(skipper.identifiers, 0);
}

struct Tripwire;

impl AstVisitor for Tripwire {
    fn visit_identifier_expr(&mut self, identifier: &IdentifierExpr) -> Result<()> {
        if identifier.name == "offset" {
            return Err(Error::analysis_error("tripped on offset"));
        }
        Ok(())
    }
}

#[test]
fn hook_error_aborts_traversal_and_propagates_verbatim() {
    let ast = sample_unit();
    let err = ast.accept(&mut Tripwire).unwrap_err();
    match err {
        Error::Analysis { message } => assert_eq!(message, "tripped on offset"),
        other => panic!("expected analysis error, got {other:?}"),
    }
}
