//! Noyau de la calculatrice RPN
//!
//! Organisation interne :
//! - operateurs.rs : table précédence / associativité
//! - jetons.rs     : tokenisation + rendus
//! - rpn.rs        : shunting-yard
//! - eval.rs       : évaluation RPN + pipeline complet
//! - erreur.rs     : erreurs typées
//! - calcul.rs     : frontière `process` (options, sortie JSON)

pub mod calcul;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_priorites;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calcul::{process, Options, Sortie};
pub use eval::eval_expression;
