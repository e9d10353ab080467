//! Typed evaluation error messages.
//!
//! The Language has a single runtime error channel: a `Value::Error` carrying
//! a message string. This module centralizes the exact wording required by
//! the external interface (every variant's `Display` impl is part of the
//! contract, not an implementation detail) so that no call site hand-rolls
//! a `format!` that could drift from the others.

use std::rc::Rc;

use thiserror::Error;

use crate::value::Value;

/// A typed evaluation error. Convert to a `Value::Error` with
/// [`EvalError::into_value`] at the point where the evaluator returns it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {left} {op} {right}")]
    UnknownOperatorInfix {
        left: &'static str,
        op: &'static str,
        right: &'static str,
    },

    #[error("unknown operator: {op}{right}")]
    UnknownOperatorPrefix { op: &'static str, right: &'static str },

    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: Rc<str> },

    #[error("not a function: {ty}")]
    NotAFunction { ty: &'static str },

    #[error("unusable as hash key: {ty}")]
    UnusableHashKey { ty: &'static str },

    #[error("index operator not supported: {ty}")]
    IndexNotSupported { ty: &'static str },

    #[error("argument to `{name}` not supported, got {ty}")]
    BuiltinArgType { name: &'static str, ty: &'static str },

    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgCount { got: usize, want: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("recursion limit of {limit} exceeded")]
    RecursionLimit { limit: usize },
}

impl EvalError {
    /// Wrap this error as the `Value::Error` carrier the evaluator returns.
    pub fn into_value(self) -> Rc<Value> {
        Rc::new(Value::Error(self.to_string().into()))
    }
}
