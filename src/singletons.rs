//! Process-wide canonical `true`, `false`, and `null` values.
//!
//! Consumers rely on these being identity-equivalent to value-equivalent:
//! no call site may construct a fresh `Value::Boolean`/`Value::Null` outside
//! this module. `eval` always returns one of these three `Rc`s for boolean
//! and null results, so `Rc::ptr_eq` would hold too, though ordinary
//! `Value::PartialEq` is what the evaluator actually relies on.

use std::rc::Rc;

use crate::value::Value;

// `Rc` is not `Sync`, so these can't live behind the `once_cell::sync::Lazy`
// used elsewhere in this crate (e.g. the builtin registry): the Language and
// its evaluator are single-threaded per spec, and a thread-local keeps that
// assumption explicit rather than smuggling in an `Arc` nobody asked for.
// `thread_local!` is itself lazily initialized on first access, so no extra
// laziness wrapper is needed here.
thread_local! {
    static TRUE: Rc<Value> = Rc::new(Value::Boolean(true));
    static FALSE: Rc<Value> = Rc::new(Value::Boolean(false));
    static NULL: Rc<Value> = Rc::new(Value::Null);
}

pub fn true_value() -> Rc<Value> {
    TRUE.with(Rc::clone)
}

pub fn false_value() -> Rc<Value> {
    FALSE.with(Rc::clone)
}

pub fn null_value() -> Rc<Value> {
    NULL.with(Rc::clone)
}

pub fn bool_value(b: bool) -> Rc<Value> {
    if b {
        true_value()
    } else {
        false_value()
    }
}
