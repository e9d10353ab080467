//! The runtime value domain.
//!
//! `Value` is a closed sum of every variant the evaluator can produce.
//! Compound variants (`Array`, `Hash`, `Function`) wrap their payload in
//! `Rc` so cloning a `Value` — which the evaluator does constantly, to
//! store results in environments, array elements, and hash buckets — is a
//! refcount bump rather than a deep copy. This is safe because values are
//! immutable: nothing ever mutates through a `Value`, only replaces one
//! binding with a wholly new one (`push` builds a new `Array`; `let`
//! creates a new binding; nothing rewrites an existing one in place).

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::ast::BlockStatement;
use crate::environment::Environment;
use crate::hash_key::HashKey;

/// A user-defined function: its parameter names, its body, and the
/// environment in effect when the `fn` literal was evaluated. Retaining
/// `env` by shared reference (rather than copying bindings) is what makes
/// closures see later top-level mutations at the defining scope.
#[derive(Clone)]
pub struct FunctionObj {
    pub parameters: Vec<Rc<str>>,
    pub body: BlockStatement,
    pub env: Environment,
}

impl fmt::Debug for FunctionObj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionObj")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

impl PartialEq for FunctionObj {
    /// Function values are never compared for equality in the Language
    /// (there is no `==` rule for `Function` operands in spec.md §4.4); this
    /// impl exists only so `Value` itself can derive `PartialEq`; two
    /// function literals are equal only if they are literally the same
    /// closure.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

/// A hash value's backing storage: `HashKey` to a (original key, value)
/// pair. The original key `Value` is retained alongside the derived
/// `HashKey` so that a scalar collision between two distinct strings is
/// still disambiguated by comparing the full key on lookup, and so
/// `Inspect` can render the key as the Language source wrote it.
pub type HashData = HashMap<HashKey, (Rc<Value>, Rc<Value>)>;

/// A native built-in function. Spec's built-ins are all stateless, so a
/// plain fn pointer suffices — no closure environment to capture.
pub type BuiltinFn = fn(&[Rc<Value>], &mut dyn crate::builtins::OutputSink) -> Rc<Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<Vec<Rc<Value>>>),
    Hash(Rc<HashData>),
    Function(Rc<FunctionObj>),
    Builtin(BuiltinNamed),
    /// Internal carrier: unwinds `return` through nested blocks. Never
    /// observable from Language code.
    ReturnValue(Rc<Value>),
    /// Internal carrier: short-circuits evaluation. Observable only at the
    /// program boundary.
    Error(Rc<str>),
}

/// A builtin paired with its registered name, so error messages (which
/// quote the name, e.g. `` argument to `len` not supported ``) don't need a
/// reverse lookup back into the registry.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinNamed {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl PartialEq for BuiltinNamed {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.func as usize == other.func as usize
    }
}

impl Value {
    /// The uppercase ASCII type tag used verbatim in error messages.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
            Value::ReturnValue(_) => "RETURN_VALUE",
            Value::Error(_) => "ERROR",
        }
    }

    /// Truthiness: only `false` and `null` are falsy; everything else
    /// (including integer `0`) is truthy.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_return_value(&self) -> bool {
        matches!(self, Value::ReturnValue(_))
    }

    /// Human-readable rendering used by `puts` and by the REPL/CLI
    /// collaborator (out of scope here) for displaying program results.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    pub(crate) fn hash_key(&self) -> Result<HashKey, crate::errors::EvalError> {
        HashKey::from_value(self)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{s}"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Hash(pairs) => {
                write!(f, "{{")?;
                for (i, (key, value)) in pairs.values().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Value::Function(func) => {
                write!(f, "fn({}) {{ {} }}", func.parameters.join(", "), func.body)
            }
            Value::Builtin(b) => write!(f, "builtin function `{}`", b.name),
            Value::ReturnValue(inner) => write!(f, "{inner}"),
            Value::Error(msg) => write!(f, "ERROR: {msg}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness_matches_the_spec_rule() {
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::Integer(5).is_truthy());
        assert!(!Value::Boolean(false).is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(Value::Boolean(true).is_truthy());
        assert!(Value::String("".into()).is_truthy());
    }

    #[test]
    fn inspect_renders_strings_without_quotes() {
        assert_eq!(Value::String("hi".into()).inspect(), "hi");
    }

    #[test]
    fn inspect_renders_arrays_with_bracket_and_comma() {
        let arr = Value::Array(Rc::new(vec![
            Rc::new(Value::Integer(1)),
            Rc::new(Value::Integer(2)),
        ]));
        assert_eq!(arr.inspect(), "[1, 2]");
    }

    #[test]
    fn error_inspect_is_prefixed() {
        assert_eq!(Value::Error("boom".into()).inspect(), "ERROR: boom");
    }

    #[test]
    fn type_tags_are_the_contract_strings() {
        assert_eq!(Value::Integer(1).type_tag(), "INTEGER");
        assert_eq!(Value::Boolean(true).type_tag(), "BOOLEAN");
        assert_eq!(Value::Null.type_tag(), "NULL");
        assert_eq!(Value::String("".into()).type_tag(), "STRING");
    }
}
