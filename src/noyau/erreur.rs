// src/noyau/erreur.rs
//
// Erreurs typées du noyau.
// Le noyau ne journalise jamais : il remonte une ErreurCalc, et c’est la
// frontière (calcul::process) qui la convertit en message.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalc {
    /// Littéral bufferisé impossible à lire comme nombre fini.
    #[error("la valeur \"{0}\" n’est pas un nombre valide")]
    InvalidNumber(String),

    /// Symbole hors de la table `^ * / % + -`.
    #[error("opérateur inconnu: '{0}'")]
    UnknownOperator(char),

    #[error("parenthèses non appariées")]
    UnmatchedParenthesis,

    /// Pile d’opérandes insuffisante (ou excédentaire) pendant l’évaluation RPN.
    #[error("expression invalide")]
    MalformedExpression,

    #[error("entrée vide")]
    EmptyExpression,
}
