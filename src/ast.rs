//! AST node shapes consumed by the evaluator.
//!
//! Lexing and parsing are external collaborators (see crate docs); this
//! module defines the fixed contract their output must satisfy. `Span`
//! positions are carried for future diagnostics but never interpolated into
//! an evaluation error message — those strings are part of the external
//! interface and must match byte-for-byte regardless of where in the source
//! the offending expression appeared.

use std::fmt;
use std::rc::Rc;

/// A byte range in the originating source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A parsed program: a top-level sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Let {
        name: Rc<str>,
        value: Expression,
        span: Span,
    },
    Return {
        value: Option<Expression>,
        span: Span,
    },
    Expression {
        value: Expression,
        span: Span,
    },
}

impl Statement {
    pub fn span(&self) -> Span {
        match self {
            Statement::Let { span, .. }
            | Statement::Return { span, .. }
            | Statement::Expression { span, .. } => *span,
        }
    }
}

/// A brace-delimited sequence of statements, as used by `if`/`fn` bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier {
        name: Rc<str>,
        span: Span,
    },
    IntegerLiteral {
        value: i64,
        span: Span,
    },
    BooleanLiteral {
        value: bool,
        span: Span,
    },
    StringLiteral {
        value: Rc<str>,
        span: Span,
    },
    ArrayLiteral {
        elements: Vec<Expression>,
        span: Span,
    },
    HashLiteral {
        pairs: Vec<(Expression, Expression)>,
        span: Span,
    },
    Prefix {
        operator: &'static str,
        right: Box<Expression>,
        span: Span,
    },
    Infix {
        left: Box<Expression>,
        operator: &'static str,
        right: Box<Expression>,
        span: Span,
    },
    If {
        condition: Box<Expression>,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
        span: Span,
    },
    FunctionLiteral {
        parameters: Vec<Rc<str>>,
        body: BlockStatement,
        span: Span,
    },
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
        span: Span,
    },
    Index {
        target: Box<Expression>,
        index: Box<Expression>,
        span: Span,
    },
}

impl Expression {
    pub fn span(&self) -> Span {
        match self {
            Expression::Identifier { span, .. }
            | Expression::IntegerLiteral { span, .. }
            | Expression::BooleanLiteral { span, .. }
            | Expression::StringLiteral { span, .. }
            | Expression::ArrayLiteral { span, .. }
            | Expression::HashLiteral { span, .. }
            | Expression::Prefix { span, .. }
            | Expression::Infix { span, .. }
            | Expression::If { span, .. }
            | Expression::FunctionLiteral { span, .. }
            | Expression::Call { span, .. }
            | Expression::Index { span, .. } => *span,
        }
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, stmt) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value, .. } => write!(f, "let {name} = {value};"),
            Statement::Return { value: Some(v), .. } => write!(f, "return {v};"),
            Statement::Return { value: None, .. } => write!(f, "return;"),
            Statement::Expression { value, .. } => write!(f, "{value}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Identifier { name, .. } => write!(f, "{name}"),
            Expression::IntegerLiteral { value, .. } => write!(f, "{value}"),
            Expression::BooleanLiteral { value, .. } => write!(f, "{value}"),
            Expression::StringLiteral { value, .. } => write!(f, "{value}"),
            Expression::ArrayLiteral { elements, .. } => {
                write!(f, "[")?;
                for (i, e) in elements.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{e}")?;
                }
                write!(f, "]")
            }
            Expression::HashLiteral { pairs, .. } => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Expression::Prefix { operator, right, .. } => write!(f, "({operator}{right})"),
            Expression::Infix {
                left,
                operator,
                right,
                ..
            } => write!(f, "({left} {operator} {right})"),
            Expression::If {
                condition,
                consequence,
                alternative,
                ..
            } => {
                write!(f, "if{condition} {{ {consequence} }}")?;
                if let Some(alt) = alternative {
                    write!(f, " else {{ {alt} }}")?;
                }
                Ok(())
            }
            Expression::FunctionLiteral {
                parameters, body, ..
            } => {
                write!(f, "fn({}) {{ {body} }}", parameters.join(", "))
            }
            Expression::Call {
                callee, arguments, ..
            } => {
                write!(f, "{callee}(")?;
                for (i, a) in arguments.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Expression::Index { target, index, .. } => write!(f, "({target}[{index}])"),
        }
    }
}

pub mod builder;
