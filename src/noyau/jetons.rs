// src/noyau/jetons.rs

use std::fmt;

use super::erreur::ErreurCalc;
use super::operateurs::Operateur;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    LPar,
    RPar,
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // f64 Display : 2 -> "2", 0.5 -> "0.5"
            Tok::Num(n) => write!(f, "{n}"),
            Tok::Op(op) => write!(f, "{op}"),
            Tok::LPar => f.write_str("("),
            Tok::RPar => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne (espaces déjà retirés) en jetons.
///
/// Tout ce qui n’est pas un délimiteur `^ * / % + - ( )` s’accumule dans un
/// tampon "partiel", vidé en `Num` à chaque délimiteur et en fin d’entrée.
/// Pas de moins unaire : "-5" donne [Op(-), Num(5)].
/// Une chaîne vide donne une suite vide.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let mut partiel = String::new();

    for c in s.chars() {
        let delim = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            _ => Operateur::try_from(c).ok().map(Tok::Op),
        };

        match delim {
            Some(tok) => {
                if !partiel.is_empty() {
                    out.push(Tok::Num(lire_nombre(&partiel)?));
                    partiel.clear();
                }
                out.push(tok);
            }
            None => partiel.push(c),
        }
    }

    if !partiel.is_empty() {
        out.push(Tok::Num(lire_nombre(&partiel)?));
    }

    Ok(out)
}

/// Littéral -> f64 fini. L’erreur porte le texte brut du tampon.
fn lire_nombre(partiel: &str) -> Result<f64, ErreurCalc> {
    let t = partiel.trim();
    match t.parse::<f64>() {
        Ok(v) if !t.is_empty() && v.is_finite() => Ok(v),
        _ => Err(ErreurCalc::InvalidNumber(partiel.to_string())),
    }
}

/// Rendu "tableau" (séparé par des virgules) : `2,+,3`.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Rendu concaténé (sans séparateur) : `23+`.
pub fn concat_tokens(tokens: &[Tok]) -> String {
    tokens.iter().map(Tok::to_string).collect()
}
