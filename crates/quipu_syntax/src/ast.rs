//! Abstract Syntax Tree definitions for Quipu
//!
//! This module defines the analyzed tree handed to the backend: a program of globals and
//! functions, with statements and expressions as closed sum types. The parser builds the bare
//! shape; the analyzer fills in semantic types and bindings.

use crate::environment::{JvmFunction, Type, Variable};

/// Identifier (interned string index in practice, String for simplicity here)
pub type Ident = String;

/// A program is a list of globals followed by a list of functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub globals: Vec<Global>,
    pub functions: Vec<Function>,
}

/// A module-level variable declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Global {
    pub name: Ident,
    pub type_name: TypeName,
    pub mutable: bool,
    pub value: Option<Expression>,
}

/// A function declaration. A missing return type means the function returns nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: Ident,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<TypeName>,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Ident,
    pub type_name: TypeName,
}

// ============================================================================
// Declared type names
// ============================================================================

/// A declared type name: one of the five primitive kinds, the growable-list marker with its
/// element type, or a user-defined class reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Integer,
    Decimal,
    Boolean,
    Character,
    String,
    List(Box<TypeName>),
    Reference(Ident),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(Expression),
    Declaration(Declaration),
    Assignment(Assignment),
    If(If),
    Switch(Switch),
    While(While),
    Return(Return),
}

/// A local variable declaration. When `type_name` is absent the backend infers the emitted type
/// from the literal kind of a literal initializer; anything else is rejected at emission time.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub name: Ident,
    pub type_name: Option<TypeName>,
    pub mutable: bool,
    pub value: Option<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub receiver: Expression,
    pub value: Expression,
}

#[derive(Debug, Clone, PartialEq)]
pub struct If {
    pub condition: Expression,
    pub then_branch: Vec<Statement>,
    pub else_branch: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub condition: Expression,
    pub cases: Vec<Case>,
}

/// One arm of a switch. A case with no value is the default case; at most one is expected per
/// switch, which upstream validation enforces.
#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub value: Option<Expression>,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct While {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

/// A return statement. The language only supports the valued form; `value` is optional here so
/// the backend can reject the other shape explicitly instead of making it unrepresentable upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct Return {
    pub value: Option<Expression>,
}

// ============================================================================
// Expressions
// ============================================================================

/// An expression node plus the semantic type the analyzer resolved for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub ty: Option<Type>,
}

impl Expression {
    /// Build an expression the parser's way: shape only, no semantic type yet.
    pub fn new(kind: ExpressionKind) -> Self {
        Self { kind, ty: None }
    }

    /// Build an expression with its resolved semantic type attached.
    pub fn typed(kind: ExpressionKind, ty: Type) -> Self {
        Self { kind, ty: Some(ty) }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionKind {
    Literal(Literal),
    Group(Box<Expression>),
    Binary(BinaryExpr),
    Access(AccessExpr),
    Call(CallExpr),
    List(Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// A variable access, optionally indexed by an offset expression (`name[offset]`).
///
/// `variable` is attached by the analyzer; a tree reaching the backend without it violates the
/// analyzed-tree contract.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessExpr {
    pub name: Ident,
    pub offset: Option<Box<Expression>>,
    pub variable: Option<Variable>,
}

/// A call site. `function` carries the resolved callable identity (emitted name plus arity),
/// attached by the analyzer.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: Ident,
    pub arguments: Vec<Expression>,
    pub function: Option<JvmFunction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Or,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

// ============================================================================
// Literals
// ============================================================================

/// A literal value.
///
/// Integer and Decimal carry the exact source digit text (arbitrary precision, plain decimal
/// notation); String carries its text with any escaping already embedded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Integer(String),
    Decimal(String),
    Boolean(bool),
    Character(char),
    String(String),
}
