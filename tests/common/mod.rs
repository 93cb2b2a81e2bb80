//! Shared builders for constructing analyzed trees by hand in tests.
//!
//! The frontend normally produces these nodes; tests play the part of the whole upstream
//! pipeline, so every access and call comes pre-resolved.
#![allow(dead_code)]

use quipu::ast::*;
use quipu::environment::{JvmFunction, Type, Variable};

pub fn int_literal(digits: &str) -> Expression {
    Expression::typed(ExpressionKind::Literal(Literal::Integer(digits.to_string())), Type::Integer)
}

pub fn decimal_literal(text: &str) -> Expression {
    Expression::typed(ExpressionKind::Literal(Literal::Decimal(text.to_string())), Type::Decimal)
}

pub fn string_literal(text: &str) -> Expression {
    Expression::typed(ExpressionKind::Literal(Literal::String(text.to_string())), Type::String)
}

pub fn char_literal(c: char) -> Expression {
    Expression::typed(ExpressionKind::Literal(Literal::Character(c)), Type::Character)
}

pub fn bool_literal(value: bool) -> Expression {
    Expression::typed(ExpressionKind::Literal(Literal::Boolean(value)), Type::Boolean)
}

/// A variable access resolved to a same-named binding.
pub fn access(name: &str, ty: Type) -> Expression {
    Expression::typed(
        ExpressionKind::Access(AccessExpr {
            name: name.to_string(),
            offset: None,
            variable: Some(Variable::new(name, name, ty, true)),
        }),
        ty,
    )
}

/// A call to the builtin `print`, resolved to `System.out.println`.
pub fn print_call(argument: Expression) -> Expression {
    Expression::typed(
        ExpressionKind::Call(CallExpr {
            name: "print".to_string(),
            arguments: vec![argument],
            function: Some(JvmFunction::new("print", "System.out.println", vec![Type::Any], Type::Nil)),
        }),
        Type::Nil,
    )
}

pub fn assign(name: &str, ty: Type, value: Expression) -> Statement {
    Statement::Assignment(Assignment {
        receiver: access(name, ty),
        value,
    })
}

pub fn function(name: &str, return_type: Option<TypeName>, body: Vec<Statement>) -> Function {
    Function {
        name: name.to_string(),
        parameters: vec![],
        return_type,
        body,
    }
}

pub fn global(name: &str, type_name: TypeName, value: Option<Expression>) -> Global {
    Global {
        name: name.to_string(),
        type_name,
        mutable: true,
        value,
    }
}

pub fn program(globals: Vec<Global>, functions: Vec<Function>) -> Program {
    Program { globals, functions }
}
