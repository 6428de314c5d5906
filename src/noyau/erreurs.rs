// src/noyau/erreurs.rs
//
// Classification fermée des erreurs du noyau.
// Une seule erreur par appel : la première détectée gagne.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Plus de `(` que de `)`.
    #[error("extra open bracket")]
    ExtraOpenBracket,

    /// Plus de `)` que de `(`.
    #[error("extra close bracket")]
    ExtraCloseBracket,

    /// Caractère hors chiffres, `.`, opérateurs, parenthèses, espaces.
    #[error("unacceptable symbol")]
    UnacceptableSymbol,

    /// Une réduction n’a pas ses deux opérandes.
    #[error("extra operator")]
    ExtraOperator,

    /// Une entrée de la pile d’opérateurs qui n’est pas `+ - * /` arrive en réduction.
    #[error("operator not supported")]
    OperatorNotSupported,

    #[error("division by zero")]
    DivisionByZero,

    /// Zéro ou plusieurs opérandes restantes, ou littéral numérique illisible.
    #[error("invalid expression")]
    InvalidExpression,
}
