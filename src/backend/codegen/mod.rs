//! Code generation from the analyzed tree to Java source text.
//!
//! This module defines [`JavaCodegen`] and wires together the focused submodules that implement
//! emission. One call to [`JavaCodegen::generate`] performs one complete, single-threaded,
//! depth-first pass over the tree; the generator holds no state that outlives the pass except
//! the output buffer it returns.
//!
//! ## Module Organization
//!
//! - `mod.rs` - Main JavaCodegen struct, entry point, and program assembly
//! - `declarations.rs` - Global and local variable declaration emission
//! - `functions.rs` - Function emission
//! - `statements.rs` - Statement emission
//! - `expressions.rs` - Expression emission
//! - `type_conv.rs` - Declared-type and literal-kind translation
//! - `errors.rs` - Contract-violation error type

mod declarations;
mod errors;
mod expressions;
mod functions;
mod statements;
mod type_conv;

pub use errors::EmitError;

use quipu_syntax::ast::Program;

use crate::backend::java_emitter::JavaEmitter;

/// Emit Java source text from an analyzed Quipu program.
///
/// The generator owns its output buffer for the duration of one pass. `generate` consumes the
/// generator, so a pass cannot be re-entered and a failed pass can never leak partial output:
/// on error the buffer is dropped, on success the completed text is returned exactly once.
pub struct JavaCodegen {
    emitter: JavaEmitter,
}

impl JavaCodegen {
    pub fn new() -> Self {
        Self {
            emitter: JavaEmitter::new(),
        }
    }

    /// Run one emission pass over `program` and return the generated Java source.
    #[tracing::instrument(skip_all, fields(globals = program.globals.len(), functions = program.functions.len()))]
    pub fn generate(mut self, program: &Program) -> Result<String, EmitError> {
        self.emit_program(program)?;
        Ok(self.emitter.finish())
    }

    /// Emit the top-level container: globals as fields, functions as methods, and - exactly when
    /// no function is named "main" - a synthesized entry point that forwards `main`'s returned
    /// integer as the process exit status.
    fn emit_program(&mut self, program: &Program) -> Result<(), EmitError> {
        self.emitter.write("public class Main {");
        self.emitter.indent();

        if !program.globals.is_empty() {
            self.emitter.blank_line();
            for global in &program.globals {
                self.emitter.newline();
                self.emit_global(global)?;
            }
        }

        for function in &program.functions {
            self.emitter.blank_line();
            self.emitter.newline();
            self.emit_function(function)?;
        }

        if !program.functions.iter().any(|f| f.name == "main") {
            tracing::debug!("no main function declared, synthesizing entry point");
            self.emitter.blank_line();
            self.emitter.newline();
            self.emitter.write("public static void main(String[] args) {");
            self.emitter.indent();
            self.emitter.newline();
            self.emitter.write("System.exit(new Main().main());");
            self.emitter.dedent();
            self.emitter.newline();
            self.emitter.write("}");
        }

        self.emitter.dedent();
        self.emitter.blank_line();
        self.emitter.newline();
        self.emitter.write("}");
        Ok(())
    }
}

impl Default for JavaCodegen {
    fn default() -> Self {
        Self::new()
    }
}
