// src/main.rs
//
// Calculatrice RPN — point d’entrée NATIF + WEB (WASM)
// ----------------------------------------------------
// But:
// - NATIF, avec une expression : évalue, imprime la sortie JSON (result/input/rpn/errors)
// - NATIF, sans expression     : ouvre la fenêtre (eframe::run_native)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Le contrôle du nombre d’arguments reste ici (appelant), pas dans le noyau.

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice RPN";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::process::ExitCode;

    use clap::Parser;
    use eframe::egui;
    use tracing_subscriber::filter::{LevelFilter, Targets};
    use tracing_subscriber::prelude::*;

    use super::{AppCalc, TITRE_APP};
    use crate::noyau::{process, Options, Sortie};

    /// Évalue une expression arithmétique (^ * / % + - et parenthèses).
    ///
    /// Sans EXPRESSION, ouvre la calculatrice en fenêtre.
    #[derive(Parser, Debug)]
    #[command(name = "calc_rpn", version)]
    pub struct Cli {
        /// Ajoute `input` et `input_array` à la sortie
        #[arg(short = 'i', long)]
        input: bool,

        /// Ajoute `rpn` et `rpn_array` à la sortie
        #[arg(short = 'r', long)]
        rpn: bool,

        /// Ajoute la liste `errors` à la sortie
        #[arg(short = 'e', long)]
        errors: bool,

        /// Journalise les erreurs au lieu de les collecter
        #[arg(short = 'd', long)]
        debug: bool,

        /// Journaux détaillés sur stderr
        #[arg(short = 'v', long)]
        verbose: bool,

        /// JSON sur une seule ligne
        #[arg(long)]
        compact: bool,

        /// L’expression (une seule ; "-5" est accepté tel quel)
        #[arg(value_name = "EXPRESSION", allow_hyphen_values = true)]
        expressions: Vec<String>,
    }

    impl Cli {
        fn options(&self) -> Options {
            Options {
                include_input: self.input,
                include_rpn: self.rpn,
                include_errors: self.errors,
                debug: self.debug,
            }
        }
    }

    fn init_journal(verbose: bool) {
        let niveau = if verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        };

        tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_filter(
                        Targets::new()
                            .with_default(LevelFilter::WARN)
                            .with_target(env!("CARGO_CRATE_NAME"), niveau),
                    ),
            )
            .init();
    }

    fn lancer_fenetre() -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([460.0, 640.0])
                .with_min_inner_size([380.0, 520.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(|_cc| Ok(Box::<AppCalc>::default())),
        )
    }

    pub fn main() -> ExitCode {
        let cli = Cli::parse();
        init_journal(cli.verbose || cli.debug);

        if cli.expressions.is_empty() {
            tracing::info!("aucune expression : ouverture de la fenêtre");
            return match lancer_fenetre() {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    tracing::error!(erreur = %e, "fenêtre indisponible");
                    ExitCode::FAILURE
                }
            };
        }

        let options = cli.options();
        let sortie = match cli.expressions.as_slice() {
            [expression] => process(expression, &options),
            _ => Sortie::echec("trop d’arguments fournis", &options),
        };

        match sortie.to_json(!cli.compact) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!(erreur = %e, "sérialisation JSON impossible");
                return ExitCode::FAILURE;
            }
        }

        if sortie.result.is_some() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
