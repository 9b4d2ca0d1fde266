//! Campagne priorités : précédence, associativité, parenthèses, erreurs.
//!
//! Une ligne = un cas. Les valeurs attendues sont exactes en f64
//! (entiers et dyadiques seulement), donc comparées avec `assert_eq!`.

use rstest::rstest;

use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::jetons::{concat_tokens, format_tokens, tokenize};
use super::{process, Options};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .resultat
}

/* ------------------------ Précédence ------------------------ */

#[rstest]
#[case("2+3*4", 14.0)]
#[case("2*3+4", 10.0)]
#[case("2+3^2", 11.0)]
#[case("2*3^2", 18.0)]
#[case("10-4/2", 8.0)]
#[case("10+7%4", 13.0)]
#[case("1+2*3-4/2", 5.0)]
fn precedence(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Associativité ------------------------ */

#[rstest]
#[case("2^3^2", 512.0)] // 2^(3^2)
#[case("2^2^3", 256.0)] // 2^(2^3)
#[case("10-5-2", 3.0)] // (10-5)-2
#[case("100/10/2", 5.0)] // (100/10)/2
#[case("20%7%4", 2.0)] // (20%7)%4 = 6%4
#[case("8/4*2", 4.0)] // (8/4)*2
#[case("1-2+3", 2.0)] // (1-2)+3
fn associativite(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Parenthèses ------------------------ */

#[rstest]
#[case("(2+3)*4", 20.0)]
#[case("((2+3)*(4-1))", 15.0)]
#[case("(2^3)^2", 64.0)]
#[case("10-(5-2)", 7.0)]
#[case("100/(10/2)", 20.0)]
#[case("((((7))))", 7.0)]
fn parentheses(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Soustraction binaire seulement ------------------------ */

#[rstest]
#[case("5-3", 2.0)]
#[case("3-5", -2.0)]
#[case("0-5*2", -10.0)]
fn soustraction_binaire(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

/* ------------------------ Espaces ------------------------ */

#[rstest]
#[case("2 + 3", "2+3")]
#[case("  ( 2 +3 ) *  4 ", "(2+3)*4")]
#[case("2 ^ 3 ^ 2", "2^3^2")]
fn espaces_sans_effet(#[case] avec: &str, #[case] sans: &str) {
    assert_eq!(eval_ok(avec), eval_ok(sans));

    let opts = Options {
        include_input: true,
        include_rpn: true,
        ..Options::default()
    };
    assert_eq!(process(avec, &opts), process(sans, &opts));
}

/* ------------------------ Erreurs ------------------------ */

#[rstest]
#[case("2+abc", ErreurCalc::InvalidNumber("abc".into()))]
#[case("abc", ErreurCalc::InvalidNumber("abc".into()))]
#[case("1+.", ErreurCalc::InvalidNumber(".".into()))]
#[case("", ErreurCalc::EmptyExpression)]
#[case("   ", ErreurCalc::EmptyExpression)]
#[case("(2+3", ErreurCalc::UnmatchedParenthesis)]
#[case("2+3)", ErreurCalc::UnmatchedParenthesis)]
#[case("((1)", ErreurCalc::UnmatchedParenthesis)]
#[case("2+", ErreurCalc::MalformedExpression)]
#[case("-5", ErreurCalc::MalformedExpression)]
#[case("2**3", ErreurCalc::MalformedExpression)]
fn erreurs(#[case] expr: &str, #[case] attendue: ErreurCalc) {
    assert_eq!(eval_expression(expr), Err(attendue), "expr={expr:?}");
}

/* ------------------------ Rendu stable ------------------------ */

#[rstest]
#[case("(2+3)*4")]
#[case("2^3^2")]
#[case("1.5%0.25-7")]
fn rendu_jetons_stable(#[case] expr: &str) {
    let t1 = tokenize(expr).unwrap();
    let t2 = tokenize(expr).unwrap();
    assert_eq!(t1, t2);

    // rendu concaténé -> re-tokenisation -> même suite
    let rejoue = tokenize(&concat_tokens(&t1)).unwrap();
    assert_eq!(format_tokens(&rejoue), format_tokens(&t1));
}
