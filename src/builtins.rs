//! The fixed built-in function registry.
//!
//! Name resolution at a call site checks the environment first and this
//! registry second (see `eval::exec::call`); built-ins are not
//! reassignable, shadowable-in-the-registry-sense bindings — they are a
//! fallback, exactly as spec.md §4.3 describes.

use std::collections::HashMap;
use std::rc::Rc;

use once_cell::sync::Lazy;

use crate::errors::EvalError;
use crate::singletons::null_value;
use crate::value::{BuiltinNamed, Value};

/// Where `puts` writes. Injectable so tests can capture output instead of
/// touching real stdout — mirrors the teacher's own `OutputSink`/`NullSink`
/// split for testable I/O.
pub trait OutputSink {
    fn emit(&mut self, text: &str);
}

/// Writes every line to real standard output, via `println!`.
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&mut self, text: &str) {
        println!("{text}");
    }
}

/// Discards everything written to it.
pub struct NullSink;

impl OutputSink for NullSink {
    fn emit(&mut self, _text: &str) {}
}

/// Captures every line written to it, in order — for assertions in tests.
#[derive(Default)]
pub struct CapturingSink {
    pub lines: Vec<String>,
}

impl OutputSink for CapturingSink {
    fn emit(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

/// All built-ins registered by name. Built once; fn pointers are `Sync`, so
/// a process-wide `Lazy` (rather than the thread-local trick `singletons`
/// needs for `Rc<Value>`) is the right tool here.
pub static REGISTRY: Lazy<HashMap<&'static str, BuiltinNamed>> = Lazy::new(|| {
    let entries: [BuiltinNamed; 6] = [
        BuiltinNamed {
            name: "len",
            func: len,
        },
        BuiltinNamed {
            name: "first",
            func: first,
        },
        BuiltinNamed {
            name: "last",
            func: last,
        },
        BuiltinNamed {
            name: "rest",
            func: rest,
        },
        BuiltinNamed {
            name: "push",
            func: push,
        },
        BuiltinNamed {
            name: "puts",
            func: puts,
        },
    ];
    entries.into_iter().map(|b| (b.name, b)).collect()
});

pub fn lookup(name: &str) -> Option<Rc<Value>> {
    REGISTRY.get(name).map(|b| Rc::new(Value::Builtin(*b)))
}

fn arity_error(got: usize, want: usize) -> Rc<Value> {
    EvalError::WrongArgCount { got, want }.into_value()
}

fn unsupported(name: &'static str, ty: &'static str) -> Rc<Value> {
    EvalError::BuiltinArgType { name, ty }.into_value()
}

fn len(args: &[Rc<Value>], _out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `len` with {} argument(s)", args.len());
    if args.len() != 1 {
        return arity_error(args.len(), 1);
    }
    match &*args[0] {
        Value::String(s) => Rc::new(Value::Integer(s.len() as i64)),
        Value::Array(items) => Rc::new(Value::Integer(items.len() as i64)),
        other => unsupported("len", other.type_tag()),
    }
}

fn first(args: &[Rc<Value>], _out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `first` with {} argument(s)", args.len());
    if args.len() != 1 {
        return arity_error(args.len(), 1);
    }
    match &*args[0] {
        Value::Array(items) => items.first().cloned().unwrap_or_else(null_value),
        other => unsupported("first", other.type_tag()),
    }
}

fn last(args: &[Rc<Value>], _out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `last` with {} argument(s)", args.len());
    if args.len() != 1 {
        return arity_error(args.len(), 1);
    }
    match &*args[0] {
        Value::Array(items) => items.last().cloned().unwrap_or_else(null_value),
        other => unsupported("last", other.type_tag()),
    }
}

fn rest(args: &[Rc<Value>], _out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `rest` with {} argument(s)", args.len());
    if args.len() != 1 {
        return arity_error(args.len(), 1);
    }
    match &*args[0] {
        Value::Array(items) if items.is_empty() => null_value(),
        Value::Array(items) => Rc::new(Value::Array(Rc::new(items[1..].to_vec()))),
        other => unsupported("rest", other.type_tag()),
    }
}

fn push(args: &[Rc<Value>], _out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `push` with {} argument(s)", args.len());
    if args.len() != 2 {
        return arity_error(args.len(), 2);
    }
    match &*args[0] {
        Value::Array(items) => {
            let mut new_items = (**items).clone();
            new_items.push(Rc::clone(&args[1]));
            Rc::new(Value::Array(Rc::new(new_items)))
        }
        other => unsupported("push", other.type_tag()),
    }
}

fn puts(args: &[Rc<Value>], out: &mut dyn OutputSink) -> Rc<Value> {
    log::debug!("dispatching builtin `puts` with {} argument(s)", args.len());
    for arg in args {
        out.emit(&arg.inspect());
    }
    null_value()
}
