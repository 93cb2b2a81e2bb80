//! Function emission for code generation
//!
//! Functions become methods of the top-level container. The return type routes through the
//! translation table and defaults to `void` when absent; an empty body collapses to `{}`.

use quipu_syntax::ast::Function;

use super::type_conv::java_type;
use super::{EmitError, JavaCodegen};

impl JavaCodegen {
    pub(crate) fn emit_function(&mut self, function: &Function) -> Result<(), EmitError> {
        let return_type = match &function.return_type {
            Some(type_name) => java_type(type_name),
            None => "void".to_string(),
        };
        self.emitter.write(&return_type);
        self.emitter.write(" ");
        self.emitter.write(&function.name);
        self.emitter.write("(");
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.emitter.write(", ");
            }
            self.emitter.write(&java_type(&parameter.type_name));
            self.emitter.write(" ");
            self.emitter.write(&parameter.name);
        }
        self.emitter.write(") {");
        if function.body.is_empty() {
            self.emitter.write("}");
            return Ok(());
        }
        self.emitter.indent();
        for statement in &function.body {
            self.emitter.newline();
            self.emit_statement(statement)?;
        }
        self.emitter.dedent();
        self.emitter.newline();
        self.emitter.write("}");
        Ok(())
    }
}
