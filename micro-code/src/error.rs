use thiserror::Error;

use crate::span::Span;

#[derive(Error, Debug)]
pub enum InterpretError {
    #[error("Unrecognized character '{ch}' at {span}")]
    UnrecognizedCharacter { ch: char, span: Span },

    #[error("Malformed comparison at {span}: '!' must be followed by '='")]
    MalformedComparison { span: Span },

    #[error("Unexpected token: expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Unexpected end of input: expected {expected}")]
    UnexpectedEndOfInput { expected: String },

    #[error("Undefined variable: {name}")]
    UndefinedVariable { name: String },

    #[error("Input exhausted: no value left for input({name})")]
    InputExhausted { name: String },

    #[error("Unknown binary operator: {op}")]
    UnknownOperator { op: String },

    #[error("Malformed number literal: {text}")]
    NumberFormat { text: String },

    #[error("Invalid input value at line {line}: {value}")]
    InvalidInput { line: usize, value: String },

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
