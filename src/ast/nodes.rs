use super::{AstNode, AstVisitor, Span};
use std::fmt;

// Type Declarations
#[derive(Debug, Clone)]
pub enum TypeDecl {
    Class(ClassDecl),
    Interface(InterfaceDecl),
}

impl TypeDecl {
    pub fn name(&self) -> &str {
        match self {
            TypeDecl::Class(c) => &c.name,
            TypeDecl::Interface(i) => &i.name,
        }
    }
}

impl AstNode for TypeDecl {
    fn span(&self) -> Span {
        match self {
            TypeDecl::Class(c) => c.span(),
            TypeDecl::Interface(i) => i.span(),
        }
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        match self {
            TypeDecl::Class(c) => c.accept(visitor),
            TypeDecl::Interface(i) => i.accept(visitor),
        }
    }
}

impl fmt::Display for TypeDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDecl::Class(c) => write!(f, "{}", c),
            TypeDecl::Interface(i) => write!(f, "{}", i),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub body: Vec<ClassMember>,
    pub span: Span,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>, body: Vec<ClassMember>) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            name: name.into(),
            body,
            span: Span::synthetic(),
        }
    }
}

impl AstNode for ClassDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_class_decl(self)
    }
}

impl fmt::Display for ClassDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "class {}", self.name)
    }
}

#[derive(Debug, Clone)]
pub struct InterfaceDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub body: Vec<InterfaceMember>,
    pub span: Span,
}

impl InterfaceDecl {
    pub fn new(name: impl Into<String>, body: Vec<InterfaceMember>) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            name: name.into(),
            body,
            span: Span::synthetic(),
        }
    }
}

impl AstNode for InterfaceDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_interface_decl(self)
    }
}

impl fmt::Display for InterfaceDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "interface {}", self.name)
    }
}

// Modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
    Final,
    Abstract,
}

// Type References
//
// Primitives are recognized by name; array types carry their dimension count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub array_dims: usize,
    pub span: Span,
}

impl TypeRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), array_dims: 0, span: Span::synthetic() }
    }

    pub fn array(name: impl Into<String>, dims: usize) -> Self {
        Self { name: name.into(), array_dims: dims, span: Span::synthetic() }
    }

    pub fn is_primitive(&self) -> bool {
        self.array_dims == 0
            && matches!(
                self.name.as_str(),
                "boolean" | "char" | "byte" | "short" | "int" | "long" | "float" | "double"
            )
    }
}

impl AstNode for TypeRef {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_type_ref(self)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for _ in 0..self.array_dims {
            write!(f, "[]")?;
        }
        Ok(())
    }
}

// Class and Interface Members
#[derive(Debug, Clone)]
pub enum ClassMember {
    Field(FieldDecl),
    Method(MethodDecl),
    Constructor(ConstructorDecl),
    TypeDecl(TypeDecl),
}

#[derive(Debug, Clone)]
pub enum InterfaceMember {
    Field(FieldDecl),
    Method(MethodDecl),
}

/// A field declaration; comma-joined declarations share one type and carry
/// one binding per declared name.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub type_ref: TypeRef,
    pub variables: Vec<VariableBinding>,
    pub span: Span,
}

impl FieldDecl {
    pub fn new(modifiers: Vec<Modifier>, type_ref: TypeRef, names: &[&str]) -> Self {
        Self {
            modifiers,
            type_ref,
            variables: names.iter().map(|n| VariableBinding::new(*n)).collect(),
            span: Span::synthetic(),
        }
    }

    pub fn is_private(&self) -> bool {
        self.modifiers.contains(&Modifier::Private)
    }
}

impl AstNode for FieldDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_field_decl(self)
    }
}

#[derive(Debug, Clone)]
pub struct VariableBinding {
    pub name: String,
    pub initializer: Option<Expr>,
    pub span: Span,
}

impl VariableBinding {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), initializer: None, span: Span::synthetic() }
    }
}

/// A method declaration. `return_type` of `None` means void; `body` of
/// `None` means abstract or interface method.
#[derive(Debug, Clone)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub return_type: Option<TypeRef>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Option<Block>,
    pub span: Span,
}

impl MethodDecl {
    pub fn new(
        name: impl Into<String>,
        return_type: Option<TypeRef>,
        parameters: Vec<Parameter>,
        body: Option<Block>,
    ) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            return_type,
            name: name.into(),
            parameters,
            body,
            span: Span::synthetic(),
        }
    }
}

impl AstNode for MethodDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_method_decl(self)
    }
}

/// A constructor declaration; the name equals the declaring type's name.
#[derive(Debug, Clone)]
pub struct ConstructorDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
    pub span: Span,
}

impl ConstructorDecl {
    pub fn new(name: impl Into<String>, parameters: Vec<Parameter>, body: Block) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            name: name.into(),
            parameters,
            body,
            span: Span::synthetic(),
        }
    }
}

impl AstNode for ConstructorDecl {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_constructor_decl(self)
    }
}

#[derive(Debug, Clone)]
pub struct Parameter {
    pub type_ref: TypeRef,
    pub name: String,
    pub span: Span,
}

impl Parameter {
    pub fn new(type_ref: TypeRef, name: impl Into<String>) -> Self {
        Self { type_ref, name: name.into(), span: Span::synthetic() }
    }
}

impl AstNode for Parameter {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_parameter(self)
    }
}

// Statements
#[derive(Debug, Clone)]
pub struct Block {
    pub statements: Vec<Stmt>,
    pub span: Span,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Self { statements, span: Span::synthetic() }
    }
}

impl AstNode for Block {
    fn span(&self) -> Span {
        self.span
    }

    fn accept<V: AstVisitor>(&self, visitor: &mut V) -> crate::Result<()> {
        visitor.visit_block(self)
    }
}

#[derive(Debug, Clone)]
pub enum Stmt {
    Expression(ExprStmt),
    LocalVar(VarDeclStmt),
    If(IfStmt),
    While(WhileStmt),
    Return(ReturnStmt),
    Block(Block),
    Empty,
}

impl Stmt {
    /// Expression statement wrapper used by node builders.
    pub fn expr(expr: Expr) -> Self {
        Stmt::Expression(ExprStmt { expr, span: Span::synthetic() })
    }

    pub fn ret(value: Option<Expr>) -> Self {
        Stmt::Return(ReturnStmt { value, span: Span::synthetic() })
    }
}

#[derive(Debug, Clone)]
pub struct ExprStmt {
    pub expr: Expr,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct VarDeclStmt {
    pub type_ref: TypeRef,
    pub variables: Vec<VariableBinding>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_branch: Box<Stmt>,
    pub else_branch: Option<Box<Stmt>>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct WhileStmt {
    pub condition: Expr,
    pub body: Box<Stmt>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub value: Option<Expr>,
    pub span: Span,
}

// Expressions
#[derive(Debug, Clone)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(IdentifierExpr),
    /// Explicit self-member reference (`this.name`), kept distinct from a
    /// bare identifier so read/write classification never has to guess.
    ThisField(ThisFieldExpr),
    FieldAccess(FieldAccessExpr),
    Assignment(AssignmentExpr),
    Binary(BinaryExpr),
    Unary(UnaryExpr),
    MethodCall(MethodCallExpr),
    Conditional(ConditionalExpr),
    Parenthesized(Box<Expr>),
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Identifier(IdentifierExpr { name: name.into(), span: Span::synthetic() })
    }

    pub fn this_field(name: impl Into<String>) -> Self {
        Expr::ThisField(ThisFieldExpr { name: name.into(), span: Span::synthetic() })
    }

    pub fn literal(value: Literal) -> Self {
        Expr::Literal(LiteralExpr { value, span: Span::synthetic() })
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assignment(AssignmentExpr {
            target: Box::new(target),
            operator: AssignmentOp::Assign,
            value: Box::new(value),
            span: Span::synthetic(),
        })
    }
}

#[derive(Debug, Clone)]
pub struct LiteralExpr {
    pub value: Literal,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub enum Literal {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    String(String),
    Char(char),
    Null,
}

#[derive(Debug, Clone)]
pub struct IdentifierExpr {
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ThisFieldExpr {
    pub name: String,
    pub span: Span,
}

/// Qualified member access on an arbitrary target expression. Self-qualified
/// access is not represented here; see [`ThisFieldExpr`].
#[derive(Debug, Clone)]
pub struct FieldAccessExpr {
    pub target: Box<Expr>,
    pub name: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOp {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
}

impl AssignmentOp {
    /// Compound forms read the target before writing it.
    pub fn is_compound(self) -> bool {
        self != AssignmentOp::Assign
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentExpr {
    pub target: Box<Expr>,
    pub operator: AssignmentOp,
    pub value: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinaryOp,
    pub right: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add, Sub, Mul, Div, Mod,
    Lt, Le, Gt, Ge, Eq, Ne,
    And, Or,
}

#[derive(Debug, Clone)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus, Minus, Not, PreInc, PreDec, PostInc, PostDec,
}

impl UnaryOp {
    /// Increment/decrement both read and write their operand.
    pub fn is_read_write(self) -> bool {
        matches!(self, UnaryOp::PreInc | UnaryOp::PreDec | UnaryOp::PostInc | UnaryOp::PostDec)
    }
}

#[derive(Debug, Clone)]
pub struct MethodCallExpr {
    pub target: Option<Box<Expr>>,
    pub name: String,
    pub arguments: Vec<Expr>,
    pub span: Span,
}

#[derive(Debug, Clone)]
pub struct ConditionalExpr {
    pub condition: Box<Expr>,
    pub then_expr: Box<Expr>,
    pub else_expr: Box<Expr>,
    pub span: Span,
}
