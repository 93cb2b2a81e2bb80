//! Global and local variable declaration emission
//!
//! Globals become fields of the top-level container; locals are ordinary Java declarations.
//! Both carry a `final` qualifier when immutable, and both route their declared type through
//! the translation table in `type_conv`.

use quipu_syntax::ast::{Declaration, Expression, ExpressionKind, Global, TypeName};

use super::type_conv::{java_type, literal_java_type};
use super::{EmitError, JavaCodegen};

impl JavaCodegen {
    /// Emit a global declaration.
    ///
    /// A list-typed global initialized with a list literal is lowered to a fixed-size array
    /// literal; every element must be a literal and is written with its exact stored text.
    pub(crate) fn emit_global(&mut self, global: &Global) -> Result<(), EmitError> {
        if !global.mutable {
            self.emitter.write("final ");
        }
        self.emitter.write(&java_type(&global.type_name));
        self.emitter.write(" ");
        self.emitter.write(&global.name);
        if let Some(value) = &global.value {
            self.emitter.write(" = ");
            match (&global.type_name, &value.kind) {
                (TypeName::List(_), ExpressionKind::List(values)) => {
                    self.emit_array_initializer(&global.name, values)?;
                }
                _ => self.emit_expression(value)?,
            }
        }
        self.emitter.write(";");
        Ok(())
    }

    fn emit_array_initializer(&mut self, global_name: &str, values: &[Expression]) -> Result<(), EmitError> {
        self.emitter.write("{");
        for (i, value) in values.iter().enumerate() {
            let ExpressionKind::Literal(literal) = &value.kind else {
                return Err(EmitError::NonLiteralListElement(global_name.to_string()));
            };
            if i > 0 {
                self.emitter.write(", ");
            }
            self.emit_literal(literal);
        }
        self.emitter.write("}");
        Ok(())
    }

    /// Emit a local variable declaration.
    ///
    /// When no type is declared, the emitted type comes from the literal kind of a literal
    /// initializer; a type-less declaration with any other initializer is a contract violation.
    pub(crate) fn emit_declaration(&mut self, declaration: &Declaration) -> Result<(), EmitError> {
        if !declaration.mutable {
            self.emitter.write("final ");
        }
        let type_spelling = match (&declaration.type_name, &declaration.value) {
            (Some(type_name), _) => java_type(type_name),
            (
                None,
                Some(Expression {
                    kind: ExpressionKind::Literal(literal),
                    ..
                }),
            ) => literal_java_type(literal).to_string(),
            (None, _) => return Err(EmitError::UntypedDeclaration(declaration.name.clone())),
        };
        self.emitter.write(&type_spelling);
        self.emitter.write(" ");
        self.emitter.write(&declaration.name);
        if let Some(value) = &declaration.value {
            self.emitter.write(" = ");
            self.emit_expression(value)?;
        }
        self.emitter.write(";");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use quipu_syntax::ast::*;
    use quipu_syntax::environment::Type;

    use crate::backend::codegen::test_support::*;
    use crate::backend::codegen::{EmitError, JavaCodegen};

    fn emit_global(global: &Global) -> Result<String, EmitError> {
        let mut codegen = JavaCodegen::new();
        codegen.emit_global(global)?;
        Ok(codegen.emitter.finish())
    }

    fn emit_declaration(declaration: &Declaration) -> Result<String, EmitError> {
        let mut codegen = JavaCodegen::new();
        codegen.emit_declaration(declaration)?;
        Ok(codegen.emitter.finish())
    }

    #[test]
    fn test_mutable_global_without_value() {
        let global = Global {
            name: "name".to_string(),
            type_name: TypeName::Integer,
            mutable: true,
            value: None,
        };
        assert_eq!(emit_global(&global).unwrap(), "int name;");
    }

    #[test]
    fn test_immutable_global_gets_final_qualifier() {
        let global = Global {
            name: "name".to_string(),
            type_name: TypeName::Decimal,
            mutable: false,
            value: Some(decimal_literal("1.0")),
        };
        assert_eq!(emit_global(&global).unwrap(), "final double name = 1.0;");
    }

    #[test]
    fn test_decimal_list_global_becomes_double_array() {
        let global = Global {
            name: "list".to_string(),
            type_name: TypeName::List(Box::new(TypeName::Decimal)),
            mutable: true,
            value: Some(Expression::typed(
                ExpressionKind::List(vec![
                    decimal_literal("1.0"),
                    decimal_literal("1.5"),
                    decimal_literal("2.0"),
                ]),
                Type::Decimal,
            )),
        };
        assert_eq!(emit_global(&global).unwrap(), "double[] list = {1.0, 1.5, 2.0};");
    }

    #[test]
    fn test_integer_list_global_becomes_int_array() {
        let global = Global {
            name: "nums".to_string(),
            type_name: TypeName::List(Box::new(TypeName::Integer)),
            mutable: true,
            value: Some(Expression::typed(
                ExpressionKind::List(vec![int_literal("1"), int_literal("2"), int_literal("3")]),
                Type::Integer,
            )),
        };
        assert_eq!(emit_global(&global).unwrap(), "int[] nums = {1, 2, 3};");
    }

    #[test]
    fn test_non_literal_list_element_fails_fast() {
        let global = Global {
            name: "nums".to_string(),
            type_name: TypeName::List(Box::new(TypeName::Integer)),
            mutable: true,
            value: Some(Expression::typed(
                ExpressionKind::List(vec![access("x", Type::Integer)]),
                Type::Integer,
            )),
        };
        assert_eq!(
            emit_global(&global),
            Err(EmitError::NonLiteralListElement("nums".to_string()))
        );
    }

    #[test]
    fn test_declared_local_with_type() {
        let declaration = Declaration {
            name: "name".to_string(),
            type_name: Some(TypeName::Integer),
            mutable: true,
            value: None,
        };
        assert_eq!(emit_declaration(&declaration).unwrap(), "int name;");
    }

    #[test]
    fn test_typeless_local_infers_from_literal_kind() {
        let declaration = Declaration {
            name: "name".to_string(),
            type_name: None,
            mutable: true,
            value: Some(decimal_literal("1.0")),
        };
        assert_eq!(emit_declaration(&declaration).unwrap(), "double name = 1.0;");
    }

    #[test]
    fn test_immutable_local_gets_final_qualifier() {
        let declaration = Declaration {
            name: "name".to_string(),
            type_name: None,
            mutable: false,
            value: Some(string_literal("quipu")),
        };
        assert_eq!(emit_declaration(&declaration).unwrap(), "final String name = \"quipu\";");
    }

    #[test]
    fn test_typeless_local_with_non_literal_initializer_fails_fast() {
        let declaration = Declaration {
            name: "name".to_string(),
            type_name: None,
            mutable: true,
            value: Some(access("other", Type::Integer)),
        };
        assert_eq!(
            emit_declaration(&declaration),
            Err(EmitError::UntypedDeclaration("name".to_string()))
        );
    }

    #[test]
    fn test_typeless_local_without_initializer_fails_fast() {
        let declaration = Declaration {
            name: "name".to_string(),
            type_name: None,
            mutable: true,
            value: None,
        };
        assert_eq!(
            emit_declaration(&declaration),
            Err(EmitError::UntypedDeclaration("name".to_string()))
        );
    }
}
