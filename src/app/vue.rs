// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use super::etat::{AppCalc, Demarche};
use crate::noyau::jetons::{concat_tokens, format_tokens};
use crate::noyau::operateurs::Operateur;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice RPN");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Entrée :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: (2+3)*4, 2^3^2, 10%4")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // Enter évalue seulement si le champ est focus (pas de déclenchement “global”)
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultat + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);
        });

        ui.add_space(8.0);

        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            ui.separator();

            for op in Operateur::TOUS {
                self.bouton_insert(ui, &op.to_string(), InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_rpn")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for d in ligne {
                        self.bouton_insert(ui, d, InsertKind::Digit);
                    }
                    if ligne[0] == "7" {
                        self.bouton_action(
                            ui,
                            "DEL",
                            "Efface le dernier caractère",
                            Action::Backspace,
                        );
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                ui.label("");
                ui.label("");
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &self.resultat, 2);
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Entrée", "demarche_entree", &self.demarche.entree);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
                Self::champ_demarche(
                    ui,
                    "RPN (jetons)",
                    "demarche_rpn_jetons",
                    &self.demarche.rpn_jetons,
                );
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => {
                    self.entree.pop();
                }
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if resp.clicked() {
            inserer(&mut self.entree, texte, kind);
            self.focus_entree = true;
        }
    }

    /// Évalue l’entrée via le noyau, puis dépose résultat + démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match crate::noyau::eval_expression(&self.entree) {
            Ok(calcul) => {
                tracing::debug!(
                    entree = %calcul.entree,
                    resultat = calcul.resultat,
                    "évaluation UI"
                );
                let d = Demarche {
                    jetons: format_tokens(&calcul.jetons),
                    rpn: concat_tokens(&calcul.rpn),
                    rpn_jetons: format_tokens(&calcul.rpn),
                    entree: calcul.entree,
                };
                self.set_resultats(calcul.resultat.to_string(), d);
            }
            Err(e) => {
                tracing::debug!(entree = %self.entree, erreur = %e, "évaluation UI refusée");
                self.set_erreur(e.to_string());
            }
        }
    }
}

/// Insertion d’un symbole dans l’entrée, avec espacement “lisible”.
/// Les espaces sont purement cosmétiques : le noyau les retire.
fn inserer(entree: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::Digit => entree.push_str(texte),
        InsertKind::CloseParen => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            entree.push_str(texte);
        }
        InsertKind::OpenParen => entree.push_str(texte),
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(texte);
            entree.push(' ');
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
