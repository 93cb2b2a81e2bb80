//! Expression emission for code generation
//!
//! Handles emitting all expression kinds to Java. Exponentiation is the one operator with no
//! Java spelling; it lowers to a `Math.pow(base, exponent)` call.

use quipu_syntax::ast::{AccessExpr, BinaryExpr, BinaryOp, CallExpr, Expression, ExpressionKind, Literal};

use super::type_conv::binary_op_to_java;
use super::{EmitError, JavaCodegen};

impl JavaCodegen {
    /// Emit an expression
    pub(crate) fn emit_expression(&mut self, expression: &Expression) -> Result<(), EmitError> {
        match &expression.kind {
            ExpressionKind::Literal(literal) => {
                self.emit_literal(literal);
                Ok(())
            }
            ExpressionKind::Group(inner) => {
                self.emitter.write("(");
                self.emit_expression(inner)?;
                self.emitter.write(")");
                Ok(())
            }
            ExpressionKind::Binary(binary) => self.emit_binary(binary),
            ExpressionKind::Access(access) => self.emit_access(access),
            ExpressionKind::Call(call) => self.emit_call(call),
            ExpressionKind::List(values) => {
                self.emitter.write("{");
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        self.emitter.write(", ");
                    }
                    self.emit_expression(value)?;
                }
                self.emitter.write("}");
                Ok(())
            }
        }
    }

    /// Emit a literal value.
    ///
    /// Integer and Decimal literals carry their exact source text, so emission is verbatim:
    /// no re-rounding and no scientific notation can be introduced here.
    pub(crate) fn emit_literal(&mut self, literal: &Literal) {
        match literal {
            Literal::Integer(digits) => self.emitter.write(digits),
            Literal::Decimal(text) => self.emitter.write(text),
            Literal::Boolean(value) => self.emitter.write(if *value { "true" } else { "false" }),
            Literal::Character(c) => self.emitter.writef(format_args!("'{}'", c)),
            Literal::String(text) => self.emitter.writef(format_args!("\"{}\"", text)),
        }
    }

    fn emit_binary(&mut self, binary: &BinaryExpr) -> Result<(), EmitError> {
        if binary.op == BinaryOp::Pow {
            self.emitter.write("Math.pow(");
            self.emit_expression(&binary.left)?;
            self.emitter.write(", ");
            self.emit_expression(&binary.right)?;
            self.emitter.write(")");
        } else {
            self.emit_expression(&binary.left)?;
            self.emitter.write(" ");
            self.emitter.write(binary_op_to_java(binary.op));
            self.emitter.write(" ");
            self.emit_expression(&binary.right)?;
        }
        Ok(())
    }

    fn emit_access(&mut self, access: &AccessExpr) -> Result<(), EmitError> {
        let variable = access
            .variable
            .as_ref()
            .ok_or_else(|| EmitError::UnresolvedVariable(access.name.clone()))?;
        self.emitter.write(&variable.jvm_name);
        if let Some(offset) = &access.offset {
            self.emitter.write("[");
            self.emit_expression(offset)?;
            self.emitter.write("]");
        }
        Ok(())
    }

    fn emit_call(&mut self, call: &CallExpr) -> Result<(), EmitError> {
        let function = call
            .function
            .as_ref()
            .ok_or_else(|| EmitError::UnresolvedFunction(call.name.clone()))?;
        self.emitter.write(&function.jvm_name);
        self.emitter.write("(");
        for (i, argument) in call.arguments.iter().enumerate() {
            if i > 0 {
                self.emitter.write(", ");
            }
            self.emit_expression(argument)?;
        }
        self.emitter.write(")");
        Ok(())
    }
}
