//! The recursive evaluator: a pure function `eval(node, env) -> Value`.
//!
//! Every node kind is handled by exactly one of three submodules:
//! statement/program-level control flow here in `mod.rs`, expression rules
//! in [`expr`], and call dispatch in [`call`]. Every one of them returns a
//! single `Rc<Value>`, with error/return-unwinding read off the variant
//! (`Value::Error` / `Value::ReturnValue`) rather than a parallel `Result`
//! channel — see spec.md §4.4's "three modes" framing and `value`'s module
//! docs for why that collapsing is safe here.

mod call;
mod expr;

use std::rc::Rc;

use crate::ast::{Program, Statement};
use crate::builtins::OutputSink;
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::value::Value;

/// The evaluator's configuration knobs. Currently just the call-depth
/// limit spec.md §5/§9 leaves host-defined; ported from the teacher's own
/// `EvalOptions::max_depth` field.
#[derive(Debug, Clone, Copy)]
pub struct EvalOptions {
    pub max_call_depth: usize,
}

impl Default for EvalOptions {
    fn default() -> Self {
        EvalOptions {
            max_call_depth: 1000,
        }
    }
}

/// Per-evaluation context threaded through every recursive call: the output
/// sink `puts` writes to, the options, and the current call depth.
pub(crate) struct Context<'o> {
    pub output: &'o mut dyn OutputSink,
    pub options: EvalOptions,
    pub depth: usize,
}

/// Evaluate a full program against a top-level environment, using the
/// default `EvalOptions` and discarding `puts` output.
pub fn eval_program(program: &Program, env: &Environment) -> Rc<Value> {
    eval_program_with(program, env, &EvalOptions::default(), &mut crate::builtins::NullSink)
}

/// Evaluate a full program, with explicit options and an output sink for
/// `puts`.
pub fn eval_program_with(
    program: &Program,
    env: &Environment,
    options: &EvalOptions,
    output: &mut dyn OutputSink,
) -> Rc<Value> {
    let mut ctx = Context {
        output,
        options: *options,
        depth: 0,
    };
    eval_program_statements(&program.statements, env, &mut ctx)
}

/// Program-level statement sequencing: the program's value is its last
/// statement's value; an `Error` stops evaluation immediately; a
/// `ReturnValue` stops evaluation and is unwrapped to its inner value (the
/// top-level unwrap spec.md §4.4 describes — nobody above the program root
/// is left to do it).
fn eval_program_statements(
    statements: &[Statement],
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let mut result = crate::singletons::null_value();
    for statement in statements {
        result = eval_statement(statement, env, ctx);
        match &*result {
            Value::ReturnValue(inner) => return Rc::clone(inner),
            Value::Error(_) => return result,
            _ => {}
        }
    }
    result
}

/// Block-statement sequencing (`if`/`fn` bodies): like the program, but
/// carriers are propagated *without* unwrapping — only the program root or
/// a call-expression dispatch decides when to unwrap a `ReturnValue`.
pub(crate) fn eval_block(
    block: &crate::ast::BlockStatement,
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let mut result = crate::singletons::null_value();
    for statement in &block.statements {
        result = eval_statement(statement, env, ctx);
        if result.is_return_value() || result.is_error() {
            return result;
        }
    }
    result
}

fn eval_statement(statement: &Statement, env: &Environment, ctx: &mut Context<'_>) -> Rc<Value> {
    match statement {
        Statement::Let { name, value, .. } => {
            let evaluated = expr::eval_expression(value, env, ctx);
            if evaluated.is_error() {
                return evaluated;
            }
            env.set(Rc::clone(name), evaluated);
            crate::singletons::null_value()
        }
        Statement::Return { value, .. } => {
            let evaluated = match value {
                Some(expr) => expr::eval_expression(expr, env, ctx),
                None => crate::singletons::null_value(),
            };
            if evaluated.is_error() {
                return evaluated;
            }
            Rc::new(Value::ReturnValue(evaluated))
        }
        Statement::Expression { value, .. } => expr::eval_expression(value, env, ctx),
    }
}

pub(crate) fn recursion_limit_error(ctx: &Context<'_>) -> Rc<Value> {
    EvalError::RecursionLimit {
        limit: ctx.options.max_call_depth,
    }
    .into_value()
}
