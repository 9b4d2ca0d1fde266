// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix), parenthèses retirées
//
// Règles:
// - Num : sortie directe
// - Op  : dépile tant que le sommet n’est pas '(' et que Operateur::pop_avant
//         le demande (précédence plus haute, ou égale + courant associatif à gauche)
// - '(' : empile ; ')' : dépile jusqu’à '(' (qui est jetée)
// - parenthèse orpheline (dans un sens ou dans l’autre) => erreur

use super::erreur::ErreurCalc;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Op(^), Num(3), Op(^), Num(2)]
///   rpn:    [Num(2), Num(3), Num(2), Op(^), Op(^)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for &tok in tokens {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::Op(courant) => {
                while let Some(&Tok::Op(top)) = ops.last() {
                    if !top.pop_avant(courant) {
                        break;
                    }
                    out.push(Tok::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Tok::LPar => ops.push(tok),

            Tok::RPar => loop {
                match ops.pop() {
                    Some(Tok::LPar) => break,
                    Some(top) => out.push(top),
                    None => return Err(ErreurCalc::UnmatchedParenthesis),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Tok::LPar) {
            return Err(ErreurCalc::UnmatchedParenthesis);
        }
        out.push(top);
    }

    Ok(out)
}
