#![allow(dead_code)]

// Common test fixtures: AST builders (parsing is an external collaborator,
// so tests construct trees directly).

use jast::ast::*;

pub fn private_field(ty: &str, name: &str) -> ClassMember {
    ClassMember::Field(FieldDecl::new(vec![Modifier::Private], TypeRef::new(ty), &[name]))
}

pub fn private_fields(ty: &str, names: &[&str]) -> ClassMember {
    ClassMember::Field(FieldDecl::new(vec![Modifier::Private], TypeRef::new(ty), names))
}

pub fn public_field(ty: &str, name: &str) -> ClassMember {
    ClassMember::Field(FieldDecl::new(vec![Modifier::Public], TypeRef::new(ty), &[name]))
}

pub fn method(
    name: &str,
    return_type: Option<TypeRef>,
    params: Vec<Parameter>,
    stmts: Vec<Stmt>,
) -> ClassMember {
    ClassMember::Method(MethodDecl::new(name, return_type, params, Some(Block::new(stmts))))
}

pub fn ctor(class_name: &str, params: Vec<Parameter>, stmts: Vec<Stmt>) -> ClassMember {
    ClassMember::Constructor(ConstructorDecl::new(class_name, params, Block::new(stmts)))
}

pub fn param(ty: &str, name: &str) -> Parameter {
    Parameter::new(TypeRef::new(ty), name)
}

/// `this.<field> = <value>;`
pub fn assign_this(field: &str, value: Expr) -> Stmt {
    Stmt::expr(Expr::assign(Expr::this_field(field), value))
}

/// `this.<field> = <name>;`
pub fn assign_this_from_ident(field: &str, name: &str) -> Stmt {
    assign_this(field, Expr::ident(name))
}

pub fn int_lit(v: i64) -> Expr {
    Expr::literal(Literal::Integer(v))
}

pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Box::new(left),
        operator: op,
        right: Box::new(right),
        span: Span::synthetic(),
    })
}

pub fn class_decl(name: &str, body: Vec<ClassMember>) -> ClassDecl {
    ClassDecl::new(name, body)
}

pub fn unit_of(classes: Vec<ClassDecl>) -> Ast {
    Ast::new(classes.into_iter().map(TypeDecl::Class).collect())
}

/// Names of all plain methods of the class, in member order.
pub fn method_names(class: &ClassDecl) -> Vec<String> {
    class
        .body
        .iter()
        .filter_map(|m| match m {
            ClassMember::Method(m) => Some(m.name.clone()),
            _ => None,
        })
        .collect()
}

pub fn find_method<'a>(class: &'a ClassDecl, name: &str) -> Option<&'a MethodDecl> {
    class.body.iter().find_map(|m| match m {
        ClassMember::Method(m) if m.name == name => Some(m),
        _ => None,
    })
}

pub fn the_class<'a>(ast: &'a Ast, name: &str) -> &'a ClassDecl {
    ast.type_decls
        .iter()
        .find_map(|t| match t {
            TypeDecl::Class(c) if c.name == name => Some(c),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no class named {name}"))
}
