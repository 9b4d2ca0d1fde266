//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - générateurs proptest bornés (profondeur, longueur)
//! - invariant clé : une expression bien formée s’évalue toujours (inf/NaN compris)
//! - aucune entrée, même absurde, ne fait paniquer le noyau

use proptest::prelude::*;
use proptest::sample::select;

use super::eval::{appliquer, eval_expression};
use super::jetons::{concat_tokens, tokenize};
use super::operateurs::Operateur;
use super::{process, Options};

/* ------------------------ Générateurs (bornés) ------------------------ */

fn gen_nombre() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..100).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
    ]
}

/// Expressions infixes bien formées : nombres, six opérateurs, parenthèses.
fn gen_expr() -> impl Strategy<Value = String> {
    gen_nombre().prop_recursive(5, 48, 2, |inner| {
        prop_oneof![
            (
                inner.clone(),
                select(Operateur::TOUS.to_vec()),
                inner.clone()
            )
                .prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.prop_map(|a| format!("({a})")),
        ]
    })
}

/// Insère des espaces selon un masque de bits.
fn avec_espaces(expr: &str, masque: u64) -> String {
    let mut out = String::with_capacity(expr.len() * 2);
    for (i, c) in expr.chars().enumerate() {
        if (masque >> (i % 64)) & 1 == 1 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

fn resultat(expr: &str) -> f64 {
    eval_expression(expr)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .resultat
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn fuzz_bien_formee_toujours_evaluee(expr in gen_expr()) {
        prop_assert!(eval_expression(&expr).is_ok(), "expr={:?}", expr);
    }

    #[test]
    fn fuzz_espaces_sans_effet(expr in gen_expr(), masque in any::<u64>()) {
        let espace = avec_espaces(&expr, masque);
        prop_assert_eq!(resultat(&espace).to_bits(), resultat(&expr).to_bits());

        let opts = Options { include_input: true, include_rpn: true, ..Options::default() };
        let a = process(&espace, &opts);
        let b = process(&expr, &opts);
        prop_assert_eq!(a.input, b.input);
        prop_assert_eq!(a.rpn_array, b.rpn_array);
    }

    #[test]
    fn fuzz_rendu_stable(expr in gen_expr()) {
        let t1 = tokenize(&expr).unwrap();
        let t2 = tokenize(&concat_tokens(&t1)).unwrap();
        prop_assert_eq!(t1, t2);
    }

    #[test]
    fn fuzz_chaine_additive_gauche(
        tete in 0u32..50,
        suite in prop::collection::vec((select(vec![Operateur::Plus, Operateur::Moins]), 0u32..50), 0..12),
    ) {
        let mut expr = tete.to_string();
        let mut attendu = f64::from(tete);
        for (op, n) in &suite {
            expr.push_str(&format!("{op}{n}"));
            attendu = appliquer(*op, attendu, f64::from(*n));
        }
        prop_assert_eq!(resultat(&expr), attendu, "expr={:?}", expr);
    }

    #[test]
    fn fuzz_chaine_multiplicative_gauche(
        tete in 1u32..50,
        suite in prop::collection::vec(
            (select(vec![Operateur::Mul, Operateur::Div, Operateur::Reste]), 1u32..50),
            0..8,
        ),
    ) {
        let mut expr = tete.to_string();
        let mut attendu = f64::from(tete);
        for (op, n) in &suite {
            expr.push_str(&format!("{op}{n}"));
            attendu = appliquer(*op, attendu, f64::from(*n));
        }
        prop_assert_eq!(resultat(&expr).to_bits(), attendu.to_bits(), "expr={:?}", expr);
    }

    #[test]
    fn fuzz_puissance_droite(a in 0u32..4, b in 0u32..4, c in 0u32..3) {
        let expr = format!("{a}^{b}^{c}");
        let attendu = f64::from(a).powf(f64::from(b).powf(f64::from(c)));
        prop_assert_eq!(resultat(&expr), attendu, "expr={:?}", expr);
    }

    #[test]
    fn fuzz_entree_quelconque_sans_panique(s in "[0-9a-z+*/%^(). -]{0,40}") {
        // erreur ou valeur, peu importe : seulement pas de panique
        let _ = eval_expression(&s);
        let opts = Options { include_input: true, include_rpn: true, include_errors: true, debug: false };
        let sortie = process(&s, &opts);
        prop_assert!(sortie.result.is_some() || sortie.errors.map_or(false, |e| e.len() == 1));
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let expr = somme_balancee("1/2", 800);
    // 800*(1/2) = 400
    assert_eq!(resultat(&expr), 400.0);
}

#[test]
fn fuzz_safe_longue_chaine_plate() {
    let expr = vec!["1"; 5000].join("+");
    assert_eq!(resultat(&expr), 5000.0);

    let expr = vec!["1"; 5000].join("^");
    assert_eq!(resultat(&expr), 1.0);
}
