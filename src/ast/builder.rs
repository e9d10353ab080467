//! Ergonomic, parser-free AST construction.
//!
//! Lexing and parsing are out of scope for this crate (see crate docs); this
//! module exists so the evaluator can be exercised — by this crate's own
//! tests and by embedders without a parser of their own — without one.
//! It performs no tokenizing, no grammar, no precedence climbing: each
//! function builds exactly the node it names. All spans default to
//! `Span::default()` since hand-built trees have no source text to point at.

use std::rc::Rc;

use super::{BlockStatement, Expression, Program, Span, Statement};

pub fn program(statements: Vec<Statement>) -> Program {
    Program { statements }
}

pub fn let_stmt(name: &str, value: Expression) -> Statement {
    Statement::Let {
        name: Rc::from(name),
        value,
        span: Span::default(),
    }
}

pub fn return_stmt(value: Expression) -> Statement {
    Statement::Return {
        value: Some(value),
        span: Span::default(),
    }
}

pub fn bare_return() -> Statement {
    Statement::Return {
        value: None,
        span: Span::default(),
    }
}

pub fn expr_stmt(value: Expression) -> Statement {
    Statement::Expression {
        value,
        span: Span::default(),
    }
}

pub fn block(statements: Vec<Statement>) -> BlockStatement {
    BlockStatement { statements }
}

pub fn ident(name: &str) -> Expression {
    Expression::Identifier {
        name: Rc::from(name),
        span: Span::default(),
    }
}

pub fn int(value: i64) -> Expression {
    Expression::IntegerLiteral {
        value,
        span: Span::default(),
    }
}

pub fn boolean(value: bool) -> Expression {
    Expression::BooleanLiteral {
        value,
        span: Span::default(),
    }
}

pub fn string(value: &str) -> Expression {
    Expression::StringLiteral {
        value: Rc::from(value),
        span: Span::default(),
    }
}

pub fn array(elements: Vec<Expression>) -> Expression {
    Expression::ArrayLiteral {
        elements,
        span: Span::default(),
    }
}

pub fn hash(pairs: Vec<(Expression, Expression)>) -> Expression {
    Expression::HashLiteral {
        pairs,
        span: Span::default(),
    }
}

pub fn prefix(operator: &'static str, right: Expression) -> Expression {
    Expression::Prefix {
        operator,
        right: Box::new(right),
        span: Span::default(),
    }
}

pub fn infix(left: Expression, operator: &'static str, right: Expression) -> Expression {
    Expression::Infix {
        left: Box::new(left),
        operator,
        right: Box::new(right),
        span: Span::default(),
    }
}

pub fn if_expr(
    condition: Expression,
    consequence: BlockStatement,
    alternative: Option<BlockStatement>,
) -> Expression {
    Expression::If {
        condition: Box::new(condition),
        consequence,
        alternative,
        span: Span::default(),
    }
}

pub fn function(parameters: &[&str], body: BlockStatement) -> Expression {
    Expression::FunctionLiteral {
        parameters: parameters.iter().map(|p| Rc::from(*p)).collect(),
        body,
        span: Span::default(),
    }
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
    Expression::Call {
        callee: Box::new(callee),
        arguments,
        span: Span::default(),
    }
}

pub fn index(target: Expression, index: Expression) -> Expression {
    Expression::Index {
        target: Box::new(target),
        index: Box::new(index),
        span: Span::default(),
    }
}
