// src/noyau/operateurs.rs
//
// Table des opérateurs binaires : précédence + associativité.
// Donnée constante, jamais mutée ; la recherche est une simple fonction pure.

use std::fmt;

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche, // a-b-c = (a-b)-c
    Droite, // a^b^c = a^(b^c)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Puissance, // ^
    Mul,       // *
    Div,       // /
    Reste,     // %
    Plus,      // +
    Moins,     // -
}

impl Operateur {
    /// Les six opérateurs, dans l’ordre de la table.
    pub const TOUS: [Operateur; 6] = [
        Operateur::Puissance,
        Operateur::Mul,
        Operateur::Div,
        Operateur::Reste,
        Operateur::Plus,
        Operateur::Moins,
    ];

    /// (précédence, associativité)
    pub fn infos(self) -> (u8, Associativite) {
        match self {
            Operateur::Puissance => (13, Associativite::Droite),
            Operateur::Mul | Operateur::Div | Operateur::Reste => (12, Associativite::Gauche),
            Operateur::Plus | Operateur::Moins => (11, Associativite::Gauche),
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Puissance => '^',
            Operateur::Mul => '*',
            Operateur::Div => '/',
            Operateur::Reste => '%',
            Operateur::Plus => '+',
            Operateur::Moins => '-',
        }
    }

    /// `self` (sommet de pile) doit-il sortir avant d’empiler `courant` ?
    ///
    /// Oui si précédence strictement plus haute, ou égale quand `courant`
    /// est associatif à gauche. `^` (droite) ne dépile donc jamais un autre `^`.
    pub fn pop_avant(self, courant: Operateur) -> bool {
        let (p_top, _) = self.infos();
        let (p_cur, assoc_cur) = courant.infos();

        p_top > p_cur || (p_top == p_cur && assoc_cur == Associativite::Gauche)
    }
}

impl TryFrom<char> for Operateur {
    type Error = ErreurCalc;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            '^' => Ok(Operateur::Puissance),
            '*' => Ok(Operateur::Mul),
            '/' => Ok(Operateur::Div),
            '%' => Ok(Operateur::Reste),
            '+' => Ok(Operateur::Plus),
            '-' => Ok(Operateur::Moins),
            _ => Err(ErreurCalc::UnknownOperator(c)),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}
