//! End-to-end scenarios built directly against the public API, using
//! `monkey_eval::ast::builder` in place of a parser (out of scope for this
//! crate). Mirrors the numbered scenarios and universal invariants, plus a
//! handful of cases carried over from the upstream interpreter's own test
//! suite (hash literals with mixed key types, function-object introspection).

use std::rc::Rc;

use monkey_eval::ast::builder::*;
use monkey_eval::{eval_program, Environment, Value};

fn eval(statements: Vec<monkey_eval::ast::Statement>) -> Rc<Value> {
    let env = Environment::new();
    eval_program(&program(statements), &env)
}

#[test]
fn scenario_1_operator_precedence() {
    let expr = infix(
        infix(
            infix(
                infix(int(5), "+", infix(int(10), "*", int(2))),
                "+",
                infix(int(15), "/", int(3)),
            ),
            "*",
            int(2),
        ),
        "+",
        prefix("-", int(10)),
    );
    assert_eq!(*eval(vec![expr_stmt(expr)]), Value::Integer(50));
}

#[test]
fn scenario_2_nested_if_return_unwinds_only_to_the_program_boundary() {
    let inner = if_expr(
        infix(int(10), ">", int(1)),
        block(vec![return_stmt(int(10))]),
        None,
    );
    let outer = if_expr(
        infix(int(10), ">", int(1)),
        block(vec![expr_stmt(inner), return_stmt(int(1))]),
        None,
    );
    assert_eq!(*eval(vec![expr_stmt(outer)]), Value::Integer(10));
}

#[test]
fn scenario_3_nested_closures_accumulate_captured_state() {
    let new_adder = function(
        &["x"],
        block(vec![expr_stmt(function(
            &["y"],
            block(vec![expr_stmt(infix(ident("x"), "+", ident("y")))]),
        ))]),
    );
    let statements = vec![
        let_stmt("new_adder", new_adder),
        let_stmt("add_two", call(ident("new_adder"), vec![int(2)])),
        expr_stmt(call(ident("add_two"), vec![int(2)])),
    ];
    assert_eq!(*eval(statements), Value::Integer(4));
}

#[test]
fn scenario_4_string_concatenation() {
    let expr = infix(infix(string("Hello"), "+", string(" ")), "+", string("World!"));
    assert_eq!(
        *eval(vec![expr_stmt(expr)]),
        Value::String("Hello World!".into())
    );
}

#[test]
fn scenario_5_function_as_hash_key_is_unusable() {
    let h = hash(vec![(string("name"), string("Monkey"))]);
    let identity = function(&["x"], block(vec![expr_stmt(ident("x"))]));
    assert_eq!(
        *eval(vec![expr_stmt(index(h, identity))]),
        Value::Error("unusable as hash key: FUNCTION".into())
    );
}

#[test]
fn scenario_6_type_mismatch_stops_the_program_before_later_statements() {
    let statements = vec![
        expr_stmt(infix(int(5), "+", boolean(true))),
        expr_stmt(int(5)),
    ];
    assert_eq!(
        *eval(statements),
        Value::Error("type mismatch: INTEGER + BOOLEAN".into())
    );
}

#[test]
fn scenario_7_len_of_string_and_len_of_integer() {
    assert_eq!(
        *eval(vec![expr_stmt(call(ident("len"), vec![string("hello world")]))]),
        Value::Integer(11)
    );
    assert_eq!(
        *eval(vec![expr_stmt(call(ident("len"), vec![int(1)]))]),
        Value::Error("argument to `len` not supported, got INTEGER".into())
    );
}

#[test]
fn scenario_8_array_index_out_of_range_is_null() {
    let arr = || array(vec![int(1), int(2), int(3)]);
    assert_eq!(*eval(vec![expr_stmt(index(arr(), int(-1)))]), Value::Null);
    assert_eq!(*eval(vec![expr_stmt(index(arr(), int(3)))]), Value::Null);
}

#[test]
fn invariant_double_bang_equals_truthiness() {
    let cases = [int(0), int(5), boolean(true), boolean(false), string("x")];
    for case in cases {
        let truthy = !matches!(&case, monkey_eval::ast::Expression::BooleanLiteral { value: false, .. });
        let doubled = prefix("!", prefix("!", case));
        assert_eq!(*eval(vec![expr_stmt(doubled)]), Value::Boolean(truthy));
    }
}

#[test]
fn invariant_puts_always_returns_null() {
    let statements = vec![expr_stmt(call(ident("puts"), vec![int(1), string("x")]))];
    assert_eq!(*eval(statements), Value::Null);
}

#[test]
fn invariant_integer_addition_and_multiplication_are_commutative() {
    let (a, b) = (7, 13);
    assert_eq!(
        *eval(vec![expr_stmt(infix(int(a), "+", int(b)))]),
        *eval(vec![expr_stmt(infix(int(b), "+", int(a)))]),
    );
    assert_eq!(
        *eval(vec![expr_stmt(infix(int(a), "*", int(b)))]),
        *eval(vec![expr_stmt(infix(int(b), "*", int(a)))]),
    );
}

#[test]
fn invariant_hash_lookup_of_a_just_inserted_key_returns_its_value() {
    let h = hash(vec![(string("k"), int(99))]);
    assert_eq!(
        *eval(vec![expr_stmt(index(h, string("k")))]),
        Value::Integer(99)
    );
}

#[test]
fn function_application_across_a_range_of_call_shapes() {
    let cases: Vec<(Vec<monkey_eval::ast::Statement>, i64)> = vec![
        (
            vec![
                let_stmt("identity", function(&["x"], block(vec![expr_stmt(ident("x"))]))),
                expr_stmt(call(ident("identity"), vec![int(5)])),
            ],
            5,
        ),
        (
            vec![
                let_stmt(
                    "identity",
                    function(&["x"], block(vec![return_stmt(ident("x"))])),
                ),
                expr_stmt(call(ident("identity"), vec![int(5)])),
            ],
            5,
        ),
        (
            vec![
                let_stmt(
                    "double",
                    function(&["x"], block(vec![return_stmt(infix(ident("x"), "*", int(2)))])),
                ),
                expr_stmt(call(ident("double"), vec![int(5)])),
            ],
            10,
        ),
        (
            vec![
                let_stmt(
                    "add",
                    function(
                        &["x", "y"],
                        block(vec![return_stmt(infix(ident("x"), "+", ident("y")))]),
                    ),
                ),
                expr_stmt(call(
                    ident("add"),
                    vec![infix(int(5), "+", int(5)), call(ident("add"), vec![int(5), int(5)])],
                )),
            ],
            20,
        ),
        (
            vec![expr_stmt(call(
                function(&["x"], block(vec![expr_stmt(ident("x"))])),
                vec![int(5)],
            ))],
            5,
        ),
    ];

    for (statements, expected) in cases {
        assert_eq!(*eval(statements), Value::Integer(expected));
    }
}

#[test]
fn function_literal_reports_its_own_parameters_and_body() {
    let f = function(&["x"], block(vec![expr_stmt(infix(ident("x"), "+", int(2)))]));
    let statements = vec![expr_stmt(f)];
    let result = eval(statements);
    match &*result {
        Value::Function(func) => {
            assert_eq!(func.parameters.len(), 1);
            assert_eq!(&*func.parameters[0], "x");
            assert_eq!(func.body.to_string(), "(x + 2)");
        }
        other => panic!("expected Value::Function, got {other:?}"),
    }
}

#[test]
fn hash_literal_accepts_mixed_key_expression_shapes() {
    // let two = "two";
    // { "one": 10 - 9, two: 1 + 1, "thr" + "ee": 6 / 2, 4: 4, true: 5, false: 6 }
    let statements = vec![
        let_stmt("two", string("two")),
        expr_stmt(hash(vec![
            (string("one"), infix(int(10), "-", int(9))),
            (ident("two"), infix(int(1), "+", int(1))),
            (infix(string("thr"), "+", string("ee")), infix(int(6), "/", int(2))),
            (int(4), int(4)),
            (boolean(true), int(5)),
            (boolean(false), int(6)),
        ])),
    ];
    let result = eval(statements);
    match &*result {
        Value::Hash(pairs) => assert_eq!(pairs.len(), 6),
        other => panic!("expected Value::Hash, got {other:?}"),
    }
}

#[test]
fn hash_index_expression_scenarios() {
    assert_eq!(
        *eval(vec![expr_stmt(index(hash(vec![(string("foo"), int(5))]), string("foo")))]),
        Value::Integer(5)
    );
    assert_eq!(
        *eval(vec![expr_stmt(index(hash(vec![(string("foo"), int(5))]), string("bar")))]),
        Value::Null
    );
    assert_eq!(
        *eval(vec![expr_stmt(index(hash(vec![]), string("foo")))]),
        Value::Null
    );
    assert_eq!(
        *eval(vec![expr_stmt(index(hash(vec![(int(5), int(5))]), int(5)))]),
        Value::Integer(5)
    );
    assert_eq!(
        *eval(vec![expr_stmt(index(
            hash(vec![(boolean(true), int(5))]),
            boolean(true)
        ))]),
        Value::Integer(5)
    );
}

#[test]
fn builtin_functions_cover_arrays_and_arity_errors() {
    let arr = array(vec![int(1), int(2), int(3)]);
    assert_eq!(
        *eval(vec![expr_stmt(call(ident("len"), vec![arr.clone()]))]),
        Value::Integer(3)
    );
    assert_eq!(
        *eval(vec![expr_stmt(call(ident("first"), vec![arr.clone()]))]),
        Value::Integer(1)
    );
    assert_eq!(
        *eval(vec![expr_stmt(call(ident("last"), vec![arr.clone()]))]),
        Value::Integer(3)
    );
    assert_eq!(
        *eval(vec![expr_stmt(call(
            ident("len"),
            vec![string("one"), string("two")]
        ))]),
        Value::Error("wrong number of arguments. got=2, want=1".into())
    );
    let pushed = eval(vec![expr_stmt(call(ident("push"), vec![arr, int(4)]))]);
    match &*pushed {
        Value::Array(items) => assert_eq!(items.len(), 4),
        other => panic!("expected Value::Array, got {other:?}"),
    }
}
