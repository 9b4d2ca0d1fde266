// src/noyau/calcul.rs
//
// Frontière du noyau : `process(texte, &Options) -> Sortie`.
//
// Contrats :
// - Toute ErreurCalc est rattrapée ici, jamais plus loin.
// - Erreur => pas de `result`, ni aucun résultat partiel.
// - `errors` présent (éventuellement vide) seulement si `include_errors`.
// - `debug` : l’erreur est journalisée au lieu d’être collectée.

use serde::{Deserialize, Serialize, Serializer};

use super::erreur::ErreurCalc;
use super::eval::eval_rpn;
use super::jetons::{concat_tokens, format_tokens, tokenize};
use super::rpn::to_rpn;

/// Options d’appel (toutes à `false` par défaut).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Ajoute `input` (entrée sans espaces) + `input_array` (jetons).
    pub include_input: bool,
    /// Ajoute `rpn` + `rpn_array`.
    pub include_rpn: bool,
    /// Ajoute la liste `errors`.
    pub include_errors: bool,
    pub debug: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Sortie {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "nombre_json"
    )]
    pub result: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_array: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpn_array: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl Sortie {
    /// Sortie d’échec (erreur hors noyau, ex. nombre d’arguments côté appelant).
    pub fn echec(message: impl Into<String>, options: &Options) -> Self {
        let mut out = Sortie::default();
        if options.include_errors {
            out.errors = Some(vec![message.into()]);
        }
        out
    }

    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Évalue `texte` et construit la sortie demandée par `options`.
pub fn process(texte: &str, options: &Options) -> Sortie {
    let mut out = Sortie::default();
    let mut errors = Vec::new();

    match remplir(texte, options, &mut out) {
        Ok(()) => {}
        Err(e) => {
            if options.debug {
                tracing::error!(expression = texte, erreur = ?e, "échec de l’évaluation");
            } else {
                tracing::debug!(expression = texte, erreur = %e, "échec de l’évaluation");
                errors.push(e.to_string());
            }
        }
    }

    if options.include_errors {
        out.errors = Some(errors);
    }
    out
}

fn remplir(texte: &str, options: &Options, out: &mut Sortie) -> Result<(), ErreurCalc> {
    let entree = texte.replace(' ', "");

    // l’entrée reste affichable dès que la tokenisation a réussi
    let jetons = tokenize(&entree)?;
    if options.include_input {
        out.input_array = Some(format_tokens(&jetons));
        out.input = Some(entree.clone());
    }
    if jetons.is_empty() {
        return Err(ErreurCalc::EmptyExpression);
    }

    let rpn = to_rpn(&jetons)?;
    let resultat = eval_rpn(&rpn)?;

    tracing::debug!(
        entree = %entree,
        rpn = %concat_tokens(&rpn),
        resultat,
        "expression évaluée"
    );

    if options.include_rpn {
        out.rpn = Some(concat_tokens(&rpn));
        out.rpn_array = Some(format_tokens(&rpn));
    }
    out.result = Some(resultat);

    Ok(())
}

/// JSON n’a pas d’infini ni de NaN : on les écrit en texte.
fn nombre_json<S: Serializer>(v: &Option<f64>, s: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(x) if x.is_finite() => s.serialize_f64(*x),
        Some(x) if x.is_nan() => s.serialize_str("NaN"),
        Some(x) if x.is_sign_positive() => s.serialize_str("Infinity"),
        Some(_) => s.serialize_str("-Infinity"),
        None => s.serialize_none(),
    }
}
