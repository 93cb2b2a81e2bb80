//! Statement emission for code generation
//!
//! Handles emitting all statement kinds to Java. There is a single entry point,
//! [`JavaCodegen::emit_statement`], and every kind terminates itself exactly once - a statement
//! inside a switch case goes through the same path as one in a function body.

use quipu_syntax::ast::{Assignment, If, Return, Statement, Switch, While};

use super::{EmitError, JavaCodegen};

impl JavaCodegen {
    /// Emit a statement at the current position. The caller has already placed the line start;
    /// multi-line statements open and close their own nested blocks.
    pub(crate) fn emit_statement(&mut self, statement: &Statement) -> Result<(), EmitError> {
        match statement {
            Statement::Expression(expression) => {
                self.emit_expression(expression)?;
                self.emitter.write(";");
                Ok(())
            }
            Statement::Declaration(declaration) => self.emit_declaration(declaration),
            Statement::Assignment(assignment) => self.emit_assignment(assignment),
            Statement::If(if_stmt) => self.emit_if(if_stmt),
            Statement::Switch(switch) => self.emit_switch(switch),
            Statement::While(while_stmt) => self.emit_while(while_stmt),
            Statement::Return(ret) => self.emit_return(ret),
        }
    }

    fn emit_assignment(&mut self, assignment: &Assignment) -> Result<(), EmitError> {
        self.emit_expression(&assignment.receiver)?;
        self.emitter.write(" = ");
        self.emit_expression(&assignment.value)?;
        self.emitter.write(";");
        Ok(())
    }

    fn emit_if(&mut self, if_stmt: &If) -> Result<(), EmitError> {
        self.emitter.write("if (");
        self.emit_expression(&if_stmt.condition)?;
        self.emitter.write(") {");
        self.emitter.indent();
        for statement in &if_stmt.then_branch {
            self.emitter.newline();
            self.emit_statement(statement)?;
        }
        self.emitter.dedent();
        self.emitter.newline();
        self.emitter.write("}");
        if !if_stmt.else_branch.is_empty() {
            self.emitter.write(" else {");
            self.emitter.indent();
            for statement in &if_stmt.else_branch {
                self.emitter.newline();
                self.emit_statement(statement)?;
            }
            self.emitter.dedent();
            self.emitter.newline();
            self.emitter.write("}");
        }
        Ok(())
    }

    fn emit_switch(&mut self, switch: &Switch) -> Result<(), EmitError> {
        self.emitter.write("switch (");
        self.emit_expression(&switch.condition)?;
        self.emitter.write(") {");
        self.emitter.indent();
        for case in &switch.cases {
            self.emitter.newline();
            match &case.value {
                Some(value) => {
                    self.emitter.write("case ");
                    self.emit_expression(value)?;
                    self.emitter.write(":");
                }
                None => self.emitter.write("default:"),
            }
            self.emitter.indent();
            for statement in &case.statements {
                self.emitter.newline();
                self.emit_statement(statement)?;
            }
            // Fallthrough is synthesized away for valued cases; the default case falls out of
            // the switch on its own.
            if case.value.is_some() {
                self.emitter.newline();
                self.emitter.write("break;");
            }
            self.emitter.dedent();
        }
        self.emitter.dedent();
        self.emitter.newline();
        self.emitter.write("}");
        Ok(())
    }

    fn emit_while(&mut self, while_stmt: &While) -> Result<(), EmitError> {
        self.emitter.write("while (");
        self.emit_expression(&while_stmt.condition)?;
        self.emitter.write(") {");
        if while_stmt.body.is_empty() {
            self.emitter.write("}");
            return Ok(());
        }
        self.emitter.indent();
        for statement in &while_stmt.body {
            self.emitter.newline();
            self.emit_statement(statement)?;
        }
        self.emitter.dedent();
        self.emitter.newline();
        self.emitter.write("}");
        Ok(())
    }

    fn emit_return(&mut self, ret: &Return) -> Result<(), EmitError> {
        let value = ret.value.as_ref().ok_or(EmitError::MissingReturnValue)?;
        self.emitter.write("return ");
        self.emit_expression(value)?;
        self.emitter.write(";");
        Ok(())
    }
}
