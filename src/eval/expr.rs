//! Expression evaluation: literals, identifiers, operators, `if`, indexing.
//!
//! Call expressions are the one kind dispatched elsewhere (`super::call`),
//! since function/builtin dispatch needs its own environment bookkeeping.

use std::collections::HashMap;
use std::rc::Rc;

use super::{call, Context};
use crate::ast::Expression;
use crate::environment::Environment;
use crate::errors::EvalError;
use crate::hash_key::HashKey;
use crate::singletons::{bool_value, null_value};
use crate::value::{FunctionObj, Value};

pub(super) fn eval_expression(
    expr: &Expression,
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    match expr {
        Expression::IntegerLiteral { value, .. } => Rc::new(Value::Integer(*value)),
        Expression::BooleanLiteral { value, .. } => bool_value(*value),
        Expression::StringLiteral { value, .. } => Rc::new(Value::String(Rc::clone(value))),
        Expression::Identifier { name, .. } => eval_identifier(name, env),
        Expression::ArrayLiteral { elements, .. } => eval_array_literal(elements, env, ctx),
        Expression::HashLiteral { pairs, .. } => eval_hash_literal(pairs, env, ctx),
        Expression::Prefix { operator, right, .. } => {
            let right_val = eval_expression(right, env, ctx);
            if right_val.is_error() {
                return right_val;
            }
            eval_prefix(operator, &right_val)
        }
        Expression::Infix {
            left,
            operator,
            right,
            ..
        } => {
            let left_val = eval_expression(left, env, ctx);
            if left_val.is_error() {
                return left_val;
            }
            let right_val = eval_expression(right, env, ctx);
            if right_val.is_error() {
                return right_val;
            }
            eval_infix(operator, &left_val, &right_val)
        }
        Expression::If {
            condition,
            consequence,
            alternative,
            ..
        } => eval_if(condition, consequence, alternative.as_ref(), env, ctx),
        Expression::FunctionLiteral {
            parameters, body, ..
        } => Rc::new(Value::Function(Rc::new(FunctionObj {
            parameters: parameters.clone(),
            body: body.clone(),
            env: env.clone(),
        }))),
        Expression::Call {
            callee, arguments, ..
        } => call::eval_call(callee, arguments, env, ctx),
        Expression::Index { target, index, .. } => eval_index(target, index, env, ctx),
    }
}

fn eval_identifier(name: &str, env: &Environment) -> Rc<Value> {
    if let Some(value) = env.get(name) {
        return value;
    }
    if let Some(builtin) = crate::builtins::lookup(name) {
        return builtin;
    }
    EvalError::IdentifierNotFound { name: Rc::from(name) }.into_value()
}

fn eval_array_literal(
    elements: &[Expression],
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let mut values = Vec::with_capacity(elements.len());
    for element in elements {
        let value = eval_expression(element, env, ctx);
        if value.is_error() {
            return value;
        }
        values.push(value);
    }
    Rc::new(Value::Array(Rc::new(values)))
}

fn eval_hash_literal(
    pairs: &[(Expression, Expression)],
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let mut data = HashMap::with_capacity(pairs.len());
    for (key_expr, value_expr) in pairs {
        let key = eval_expression(key_expr, env, ctx);
        if key.is_error() {
            return key;
        }
        let hash_key = match HashKey::from_value(&key) {
            Ok(k) => k,
            Err(e) => return e.into_value(),
        };
        let value = eval_expression(value_expr, env, ctx);
        if value.is_error() {
            return value;
        }
        data.insert(hash_key, (key, value));
    }
    Rc::new(Value::Hash(Rc::new(data)))
}

fn eval_prefix(operator: &'static str, right: &Value) -> Rc<Value> {
    match operator {
        "!" => bool_value(!right.is_truthy()),
        "-" => match right {
            Value::Integer(i) => Rc::new(Value::Integer(i.wrapping_neg())),
            other => EvalError::UnknownOperatorPrefix {
                op: "-",
                right: other.type_tag(),
            }
            .into_value(),
        },
        other_op => EvalError::UnknownOperatorPrefix {
            op: other_op,
            right: right.type_tag(),
        }
        .into_value(),
    }
}

fn eval_infix(operator: &'static str, left: &Value, right: &Value) -> Rc<Value> {
    match (left, right) {
        (Value::Integer(l), Value::Integer(r)) => eval_integer_infix(operator, *l, *r),
        (Value::String(l), Value::String(r)) => eval_string_infix(operator, l, r),
        (Value::Boolean(l), Value::Boolean(r)) => eval_boolean_infix(operator, *l, *r),
        _ => eval_mixed_infix(operator, left, right),
    }
}

fn eval_integer_infix(operator: &'static str, left: i64, right: i64) -> Rc<Value> {
    match operator {
        "+" => Rc::new(Value::Integer(left.wrapping_add(right))),
        "-" => Rc::new(Value::Integer(left.wrapping_sub(right))),
        "*" => Rc::new(Value::Integer(left.wrapping_mul(right))),
        "/" => {
            if right == 0 {
                EvalError::DivisionByZero.into_value()
            } else {
                Rc::new(Value::Integer(left.wrapping_div(right)))
            }
        }
        "<" => bool_value(left < right),
        ">" => bool_value(left > right),
        "==" => bool_value(left == right),
        "!=" => bool_value(left != right),
        other => EvalError::UnknownOperatorInfix {
            left: "INTEGER",
            op: other,
            right: "INTEGER",
        }
        .into_value(),
    }
}

fn eval_string_infix(operator: &'static str, left: &str, right: &str) -> Rc<Value> {
    match operator {
        "+" => Rc::new(Value::String(Rc::from(format!("{left}{right}")))),
        other => EvalError::UnknownOperatorInfix {
            left: "STRING",
            op: other,
            right: "STRING",
        }
        .into_value(),
    }
}

fn eval_boolean_infix(operator: &'static str, left: bool, right: bool) -> Rc<Value> {
    match operator {
        "==" => bool_value(left == right),
        "!=" => bool_value(left != right),
        other => EvalError::UnknownOperatorInfix {
            left: "BOOLEAN",
            op: other,
            right: "BOOLEAN",
        }
        .into_value(),
    }
}

/// Operands of two different variants (never both Integer, never both
/// String — those are dispatched above). See DESIGN.md for the ambiguity
/// this resolves: spec.md §4.4's cross-type `==`/`!=` rule is read as
/// "type mismatch when Integer meets a non-Integer; boolean result
/// otherwise", and any non-equality operator on mismatched types is always
/// a type mismatch, matching the book this spec traces to.
fn eval_mixed_infix(operator: &'static str, left: &Value, right: &Value) -> Rc<Value> {
    match operator {
        "==" | "!=" => {
            if matches!(left, Value::Integer(_)) || matches!(right, Value::Integer(_)) {
                EvalError::TypeMismatch {
                    left: left.type_tag(),
                    op: operator,
                    right: right.type_tag(),
                }
                .into_value()
            } else {
                bool_value(operator == "!=")
            }
        }
        _ => EvalError::TypeMismatch {
            left: left.type_tag(),
            op: operator,
            right: right.type_tag(),
        }
        .into_value(),
    }
}

fn eval_if(
    condition: &Expression,
    consequence: &crate::ast::BlockStatement,
    alternative: Option<&crate::ast::BlockStatement>,
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let cond_val = eval_expression(condition, env, ctx);
    if cond_val.is_error() {
        return cond_val;
    }
    if cond_val.is_truthy() {
        super::eval_block(consequence, env, ctx)
    } else if let Some(alt) = alternative {
        super::eval_block(alt, env, ctx)
    } else {
        null_value()
    }
}

fn eval_index(
    target: &Expression,
    index: &Expression,
    env: &Environment,
    ctx: &mut Context<'_>,
) -> Rc<Value> {
    let target_val = eval_expression(target, env, ctx);
    if target_val.is_error() {
        return target_val;
    }
    let index_val = eval_expression(index, env, ctx);
    if index_val.is_error() {
        return index_val;
    }
    match (&*target_val, &*index_val) {
        (Value::Array(items), Value::Integer(i)) => {
            if *i < 0 || *i as usize >= items.len() {
                null_value()
            } else {
                Rc::clone(&items[*i as usize])
            }
        }
        (Value::Hash(pairs), key) => match HashKey::from_value(key) {
            Ok(hash_key) => pairs
                .get(&hash_key)
                .map(|(_, v)| Rc::clone(v))
                .unwrap_or_else(null_value),
            Err(e) => e.into_value(),
        },
        (other, _) => EvalError::IndexNotSupported {
            ty: other.type_tag(),
        }
        .into_value(),
    }
}
