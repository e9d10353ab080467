//! Call-expression dispatch: evaluating the callee and arguments, then
//! invoking either a user-defined `Function` or a native `Builtin`.

use std::rc::Rc;

use super::{expr::eval_expression, recursion_limit_error, Context};
use crate::ast::Expression;
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::value::Value;

pub(super) fn eval_call(
    callee: &Expression,
    arguments: &[Expression],
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let callee_val = eval_expression(callee, env, ctx);
    if callee_val.is_error() {
        return callee_val;
    }

    let mut args = Vec::with_capacity(arguments.len());
    for argument in arguments {
        let value = eval_expression(argument, env, ctx);
        if value.is_error() {
            return value;
        }
        args.push(value);
    }

    apply(&callee_val, &args, ctx)
}

fn apply(callee: &Value, args: &[Rc<Value>], ctx: &mut Context<'_>) -> Rc<Value> {
    match callee {
        Value::Function(func) => {
            if ctx.depth >= ctx.options.max_call_depth {
                return recursion_limit_error(ctx);
            }
            if args.len() != func.parameters.len() {
                return EvalError::WrongArgCount {
                    got: args.len(),
                    want: func.parameters.len(),
                }
                .into_value();
            }

            log::trace!(
                "calling function of {} parameter(s) at depth {}",
                func.parameters.len(),
                ctx.depth + 1
            );

            let call_env = Environment::enclosed(&func.env);
            for (param, arg) in func.parameters.iter().zip(args) {
                call_env.set(Rc::clone(param), Rc::clone(arg));
            }

            ctx.depth += 1;
            let result = super::eval_block(&func.body, &call_env, ctx);
            ctx.depth -= 1;

            match &*result {
                Value::ReturnValue(inner) => Rc::clone(inner),
                _ => result,
            }
        }
        Value::Builtin(builtin) => {
            log::debug!("calling builtin `{}`", builtin.name);
            (builtin.func)(args, ctx.output)
        }
        other => EvalError::NotAFunction {
            ty: other.type_tag(),
        }
        .into_value(),
    }
}
