use super::*;

/// AST visitor trait for traversing and processing AST nodes.
///
/// Every method has a default body that delegates to the matching `walk_*`
/// function, which visits all children in declaration order. A visitor
/// overrides the methods it cares about; within an override it decides
/// whether children are visited at all, and in which position:
///
/// - don't call `walk_*` to skip the subtree,
/// - call `walk_*` first and run the hook's own logic afterwards when the
///   hook needs the accumulated state of everything beneath the node (this
///   is how both built-in passes handle type declarations).
///
/// Methods are fallible; an error aborts the in-progress traversal and
/// propagates to the caller unchanged. No node is visited twice in one
/// traversal.
pub trait AstVisitor: Sized {
    // AST root
    fn visit_ast(&mut self, ast: &Ast) -> crate::Result<()> {
        walk_ast(self, ast)
    }

    // Type declarations
    fn visit_type_decl(&mut self, type_decl: &TypeDecl) -> crate::Result<()> {
        walk_type_decl(self, type_decl)
    }

    fn visit_class_decl(&mut self, class: &ClassDecl) -> crate::Result<()> {
        walk_class_decl(self, class)
    }

    fn visit_interface_decl(&mut self, interface: &InterfaceDecl) -> crate::Result<()> {
        walk_interface_decl(self, interface)
    }

    // Members
    fn visit_field_decl(&mut self, field: &FieldDecl) -> crate::Result<()> {
        walk_field_decl(self, field)
    }

    fn visit_variable_binding(&mut self, binding: &VariableBinding) -> crate::Result<()> {
        walk_variable_binding(self, binding)
    }

    fn visit_method_decl(&mut self, method: &MethodDecl) -> crate::Result<()> {
        walk_method_decl(self, method)
    }

    fn visit_constructor_decl(&mut self, constructor: &ConstructorDecl) -> crate::Result<()> {
        walk_constructor_decl(self, constructor)
    }

    fn visit_parameter(&mut self, parameter: &Parameter) -> crate::Result<()> {
        walk_parameter(self, parameter)
    }

    // Statements
    fn visit_block(&mut self, block: &Block) -> crate::Result<()> {
        walk_block(self, block)
    }

    fn visit_stmt(&mut self, stmt: &Stmt) -> crate::Result<()> {
        walk_stmt(self, stmt)
    }

    // Expressions
    fn visit_expr(&mut self, expr: &Expr) -> crate::Result<()> {
        walk_expr(self, expr)
    }

    fn visit_literal_expr(&mut self, _literal: &LiteralExpr) -> crate::Result<()> {
        Ok(())
    }

    fn visit_identifier_expr(&mut self, _identifier: &IdentifierExpr) -> crate::Result<()> {
        Ok(())
    }

    fn visit_this_field_expr(&mut self, _this_field: &ThisFieldExpr) -> crate::Result<()> {
        Ok(())
    }

    fn visit_field_access_expr(&mut self, field_access: &FieldAccessExpr) -> crate::Result<()> {
        walk_field_access_expr(self, field_access)
    }

    fn visit_assignment_expr(&mut self, assignment: &AssignmentExpr) -> crate::Result<()> {
        walk_assignment_expr(self, assignment)
    }

    fn visit_binary_expr(&mut self, binary: &BinaryExpr) -> crate::Result<()> {
        walk_binary_expr(self, binary)
    }

    fn visit_unary_expr(&mut self, unary: &UnaryExpr) -> crate::Result<()> {
        walk_unary_expr(self, unary)
    }

    fn visit_method_call_expr(&mut self, method_call: &MethodCallExpr) -> crate::Result<()> {
        walk_method_call_expr(self, method_call)
    }

    fn visit_conditional_expr(&mut self, conditional: &ConditionalExpr) -> crate::Result<()> {
        walk_conditional_expr(self, conditional)
    }

    // Types
    fn visit_type_ref(&mut self, _type_ref: &TypeRef) -> crate::Result<()> {
        Ok(())
    }
}

pub fn walk_ast<V: AstVisitor>(visitor: &mut V, ast: &Ast) -> crate::Result<()> {
    for type_decl in &ast.type_decls {
        visitor.visit_type_decl(type_decl)?;
    }
    Ok(())
}

pub fn walk_type_decl<V: AstVisitor>(visitor: &mut V, type_decl: &TypeDecl) -> crate::Result<()> {
    match type_decl {
        TypeDecl::Class(c) => visitor.visit_class_decl(c),
        TypeDecl::Interface(i) => visitor.visit_interface_decl(i),
    }
}

pub fn walk_class_decl<V: AstVisitor>(visitor: &mut V, class: &ClassDecl) -> crate::Result<()> {
    for member in &class.body {
        match member {
            ClassMember::Field(f) => visitor.visit_field_decl(f)?,
            ClassMember::Method(m) => visitor.visit_method_decl(m)?,
            ClassMember::Constructor(c) => visitor.visit_constructor_decl(c)?,
            ClassMember::TypeDecl(t) => visitor.visit_type_decl(t)?,
        }
    }
    Ok(())
}

pub fn walk_interface_decl<V: AstVisitor>(
    visitor: &mut V,
    interface: &InterfaceDecl,
) -> crate::Result<()> {
    for member in &interface.body {
        match member {
            InterfaceMember::Field(f) => visitor.visit_field_decl(f)?,
            InterfaceMember::Method(m) => visitor.visit_method_decl(m)?,
        }
    }
    Ok(())
}

pub fn walk_field_decl<V: AstVisitor>(visitor: &mut V, field: &FieldDecl) -> crate::Result<()> {
    visitor.visit_type_ref(&field.type_ref)?;
    for binding in &field.variables {
        visitor.visit_variable_binding(binding)?;
    }
    Ok(())
}

pub fn walk_variable_binding<V: AstVisitor>(
    visitor: &mut V,
    binding: &VariableBinding,
) -> crate::Result<()> {
    if let Some(ref initializer) = binding.initializer {
        visitor.visit_expr(initializer)?;
    }
    Ok(())
}

pub fn walk_method_decl<V: AstVisitor>(visitor: &mut V, method: &MethodDecl) -> crate::Result<()> {
    if let Some(ref return_type) = method.return_type {
        visitor.visit_type_ref(return_type)?;
    }
    for parameter in &method.parameters {
        visitor.visit_parameter(parameter)?;
    }
    if let Some(ref body) = method.body {
        visitor.visit_block(body)?;
    }
    Ok(())
}

pub fn walk_constructor_decl<V: AstVisitor>(
    visitor: &mut V,
    constructor: &ConstructorDecl,
) -> crate::Result<()> {
    for parameter in &constructor.parameters {
        visitor.visit_parameter(parameter)?;
    }
    visitor.visit_block(&constructor.body)
}

pub fn walk_parameter<V: AstVisitor>(visitor: &mut V, parameter: &Parameter) -> crate::Result<()> {
    visitor.visit_type_ref(&parameter.type_ref)
}

pub fn walk_block<V: AstVisitor>(visitor: &mut V, block: &Block) -> crate::Result<()> {
    for stmt in &block.statements {
        visitor.visit_stmt(stmt)?;
    }
    Ok(())
}

pub fn walk_stmt<V: AstVisitor>(visitor: &mut V, stmt: &Stmt) -> crate::Result<()> {
    match stmt {
        Stmt::Expression(expr_stmt) => visitor.visit_expr(&expr_stmt.expr),
        Stmt::LocalVar(var_decl) => {
            visitor.visit_type_ref(&var_decl.type_ref)?;
            for binding in &var_decl.variables {
                visitor.visit_variable_binding(binding)?;
            }
            Ok(())
        }
        Stmt::If(if_stmt) => {
            visitor.visit_expr(&if_stmt.condition)?;
            visitor.visit_stmt(&if_stmt.then_branch)?;
            if let Some(ref else_branch) = if_stmt.else_branch {
                visitor.visit_stmt(else_branch)?;
            }
            Ok(())
        }
        Stmt::While(while_stmt) => {
            visitor.visit_expr(&while_stmt.condition)?;
            visitor.visit_stmt(&while_stmt.body)
        }
        Stmt::Return(return_stmt) => {
            if let Some(ref value) = return_stmt.value {
                visitor.visit_expr(value)?;
            }
            Ok(())
        }
        Stmt::Block(block) => visitor.visit_block(block),
        Stmt::Empty => Ok(()),
    }
}

pub fn walk_expr<V: AstVisitor>(visitor: &mut V, expr: &Expr) -> crate::Result<()> {
    match expr {
        Expr::Literal(literal) => visitor.visit_literal_expr(literal),
        Expr::Identifier(identifier) => visitor.visit_identifier_expr(identifier),
        Expr::ThisField(this_field) => visitor.visit_this_field_expr(this_field),
        Expr::FieldAccess(field_access) => visitor.visit_field_access_expr(field_access),
        Expr::Assignment(assignment) => visitor.visit_assignment_expr(assignment),
        Expr::Binary(binary) => visitor.visit_binary_expr(binary),
        Expr::Unary(unary) => visitor.visit_unary_expr(unary),
        Expr::MethodCall(method_call) => visitor.visit_method_call_expr(method_call),
        Expr::Conditional(conditional) => visitor.visit_conditional_expr(conditional),
        Expr::Parenthesized(inner) => visitor.visit_expr(inner),
    }
}

pub fn walk_field_access_expr<V: AstVisitor>(
    visitor: &mut V,
    field_access: &FieldAccessExpr,
) -> crate::Result<()> {
    visitor.visit_expr(&field_access.target)
}

pub fn walk_assignment_expr<V: AstVisitor>(
    visitor: &mut V,
    assignment: &AssignmentExpr,
) -> crate::Result<()> {
    visitor.visit_expr(&assignment.target)?;
    visitor.visit_expr(&assignment.value)
}

pub fn walk_binary_expr<V: AstVisitor>(visitor: &mut V, binary: &BinaryExpr) -> crate::Result<()> {
    visitor.visit_expr(&binary.left)?;
    visitor.visit_expr(&binary.right)
}

pub fn walk_unary_expr<V: AstVisitor>(visitor: &mut V, unary: &UnaryExpr) -> crate::Result<()> {
    visitor.visit_expr(&unary.operand)
}

pub fn walk_method_call_expr<V: AstVisitor>(
    visitor: &mut V,
    method_call: &MethodCallExpr,
) -> crate::Result<()> {
    if let Some(ref target) = method_call.target {
        visitor.visit_expr(target)?;
    }
    for arg in &method_call.arguments {
        visitor.visit_expr(arg)?;
    }
    Ok(())
}

pub fn walk_conditional_expr<V: AstVisitor>(
    visitor: &mut V,
    conditional: &ConditionalExpr,
) -> crate::Result<()> {
    visitor.visit_expr(&conditional.condition)?;
    visitor.visit_expr(&conditional.then_expr)?;
    visitor.visit_expr(&conditional.else_expr)
}
