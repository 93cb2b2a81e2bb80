//! Type conversion utilities for code generation
//!
//! Handles translating Quipu declared-type names and literal kinds to Java type spellings.

use quipu_syntax::ast::{BinaryOp, Literal, TypeName};

/// Translate a declared type name to its Java spelling.
///
/// The five primitive kinds map to Java's simple types, the growable-list marker lowers to a
/// fixed-size array of its translated element type, and class references pass through unchanged.
pub(crate) fn java_type(type_name: &TypeName) -> String {
    match type_name {
        TypeName::Integer => "int".to_string(),
        TypeName::Decimal => "double".to_string(),
        TypeName::Boolean => "boolean".to_string(),
        TypeName::Character => "char".to_string(),
        TypeName::String => "String".to_string(),
        TypeName::List(element) => format!("{}[]", java_type(element)),
        TypeName::Reference(name) => name.clone(),
    }
}

/// The Java type a type-less local declaration takes from its literal initializer.
///
/// This looks at the literal kind only, not the resolved semantic type; see DESIGN.md.
pub(crate) fn literal_java_type(literal: &Literal) -> &'static str {
    match literal {
        Literal::Integer(_) => "int",
        Literal::Decimal(_) => "double",
        Literal::Boolean(_) => "boolean",
        Literal::Character(_) => "char",
        Literal::String(_) => "String",
    }
}

/// The Java spelling of an infix operator.
///
/// `Pow` has no Java operator; callers lower it to `Math.pow` before reaching for this.
pub(crate) fn binary_op_to_java(op: BinaryOp) -> &'static str {
    match op {
        BinaryOp::And => "&&",
        BinaryOp::Or => "||",
        BinaryOp::Lt => "<",
        BinaryOp::LtEq => "<=",
        BinaryOp::Gt => ">",
        BinaryOp::GtEq => ">=",
        BinaryOp::Eq => "==",
        BinaryOp::NotEq => "!=",
        BinaryOp::Add => "+",
        BinaryOp::Sub => "-",
        BinaryOp::Mul => "*",
        BinaryOp::Div => "/",
        BinaryOp::Pow => "^",
    }
}
