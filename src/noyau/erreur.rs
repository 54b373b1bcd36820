// src/noyau/erreur.rs
//
// Taxonomie des erreurs du noyau, une énumération par étape:
// jetons -> RPN -> évaluation. `CalcError` les regroupe pour le `?`.
//
// Les messages (Display) sont affichés tels quels par l’UI.

use thiserror::Error;

/// Échec du découpage en jetons (premier construit non reconnu).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Invalid character: {0}")]
    InvalidCharacter(char),

    #[error("Unknown identifier: {0}")]
    UnknownIdentifier(String),

    /// Suite de chiffres dont la conversion ne donne pas un nombre fini.
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
}

/// Échec structurel du shunting-yard.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MismatchedParentheses,

    #[error("Unknown operator: {0}")]
    UnknownOperator(char),
}

/// Échec à l’exécution de la RPN (discipline de pile ou domaine numérique).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("Invalid expression: missing operand")]
    InsufficientOperands,

    #[error("Invalid expression")]
    MalformedExpression,

    #[error("Divide by zero")]
    DivideByZero,

    #[error("Invalid sqrt: negative argument")]
    InvalidDomain,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}
