//! Noyau — évaluation (pipeline réel)
//!
//! retrait des espaces -> tokenize -> RPN -> pile de valeurs -> f64
//!
//! Chaque appel est indépendant : jetons, RPN et piles sont créés puis jetés
//! dans l’appel, rien n’est partagé entre deux évaluations.

use num_traits::Float;

use super::erreur::ErreurCalc;
use super::jetons::{tokenize, Tok};
use super::operateurs::Operateur;
use super::rpn::to_rpn;

/// Résultat complet d’une évaluation, avec les étapes intermédiaires
/// (pour la sortie `input` / `rpn` et pour la démarche de la fenêtre).
#[derive(Clone, Debug, PartialEq)]
pub struct Calcul {
    /// Entrée sans espaces.
    pub entree: String,
    pub jetons: Vec<Tok>,
    pub rpn: Vec<Tok>,
    pub resultat: f64,
}

/// API publique : évalue une expression brute.
pub fn eval_expression(expr_str: &str) -> Result<Calcul, ErreurCalc> {
    let entree = expr_str.replace(' ', "");

    // 1) Jetons
    let jetons = tokenize(&entree)?;
    if jetons.is_empty() {
        return Err(ErreurCalc::EmptyExpression);
    }

    // 2) RPN
    let rpn = to_rpn(&jetons)?;

    // 3) Réduction
    let resultat = eval_rpn(&rpn)?;

    Ok(Calcul {
        entree,
        jetons,
        rpn,
        resultat,
    })
}

/// Réduit une RPN à une seule valeur via une pile.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    if rpn.is_empty() {
        return Err(ErreurCalc::EmptyExpression);
    }

    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match *tok {
            Tok::Num(v) => pile.push(v),

            Tok::Op(op) => {
                // n2 = plus récent, n1 = suivant : n1 <op> n2
                let n2 = pile.pop().ok_or(ErreurCalc::MalformedExpression)?;
                let n1 = pile.pop().ok_or(ErreurCalc::MalformedExpression)?;
                pile.push(appliquer(op, n1, n2));
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::MalformedExpression),
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalc::MalformedExpression),
    }
}

/// Applique un opérateur binaire (sémantique IEEE-754).
///
/// - `/` par zéro : ±inf ou NaN, pas d’erreur
/// - `%` : reste tronqué, signe du dividende (-7 % 3 = -1)
pub fn appliquer<F: Float>(op: Operateur, n1: F, n2: F) -> F {
    match op {
        Operateur::Puissance => n1.powf(n2),
        Operateur::Mul => n1 * n2,
        Operateur::Div => n1 / n2,
        Operateur::Reste => n1 % n2,
        Operateur::Plus => n1 + n2,
        Operateur::Moins => n1 - n2,
    }
}
