//! `HashKey` derivation for values used as hash-literal keys.
//!
//! A `HashKey` is a (type tag, 64-bit scalar) pair. Values of different
//! variants never collide; within a variant, string keys are hashed with
//! FNV-1a. The original key `Value` is retained alongside the stored value
//! by callers (see `value::HashPair`) so that a scalar collision between two
//! distinct strings is still disambiguated by the full key comparison on
//! lookup, per spec.

use crate::errors::EvalError;
use crate::value::Value;

/// The discriminant half of a `HashKey`: which variant the key came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyTag {
    Integer,
    Boolean,
    String,
}

/// A hashable, equality-comparable identifier derived from an `Integer`,
/// `Boolean`, or `String` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HashKey {
    tag: KeyTag,
    scalar: u64,
}

/// FNV-1a, 64-bit variant. Simple, dependency-free, and deterministic across
/// runs and platforms, which a general-purpose `Hasher` (whose seed may be
/// randomized per-process) is not guaranteed to be.
fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    let mut hash = OFFSET_BASIS;
    for &byte in bytes {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}

impl HashKey {
    /// Derive the `HashKey` for a value, or report it as unusable.
    pub fn from_value(value: &Value) -> Result<HashKey, EvalError> {
        match value {
            Value::Integer(i) => Ok(HashKey {
                tag: KeyTag::Integer,
                scalar: *i as u64,
            }),
            Value::Boolean(b) => Ok(HashKey {
                tag: KeyTag::Boolean,
                scalar: u64::from(*b),
            }),
            Value::String(s) => Ok(HashKey {
                tag: KeyTag::String,
                scalar: fnv1a(s.as_bytes()),
            }),
            other => Err(EvalError::UnusableHashKey {
                ty: other.type_tag(),
            }),
        }
    }
}
