// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// - En-tête : titre, bascule DEG/RAD, bascule thème
// - Afficheur : expression (ou "0"), puis résultat (ou erreur)
// - Pavé : rangée scientifique, rangée utilitaire, grille 4 colonnes, "="
// - Démarche repliable (jetons + RPN de la dernière évaluation)
//
// Toute action passe par `AppCalc::appliquer` : la vue ne touche pas l’état.

use eframe::egui;

use calculatrice_sci::noyau::Fonction;

use super::etat::{AppCalc, Touche};
use super::reglages::Theme;

const TAILLE_TOUCHE: [f32; 2] = [64.0, 40.0];
const TAILLE_PETITE: [f32; 2] = [52.0, 30.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_entete(ui);
                ui.add_space(6.0);

                self.ui_afficheur(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_entete(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading("Calculatrice");

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let theme = match self.theme {
                    Theme::Clair => "☾",
                    Theme::Sombre => "☀",
                };
                self.bouton(ui, theme, Touche::BasculerTheme, TAILLE_PETITE, "Thème clair / sombre");

                let mode = self.mode.to_string();
                self.bouton(ui, &mode, Touche::BasculerMode, TAILLE_PETITE, "Degrés / radians");
            });
        });
    }

    fn ui_afficheur(&self, ui: &mut egui::Ui) {
        let expression = if self.expression.is_empty() {
            "0"
        } else {
            self.expression.as_str()
        };

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(egui::RichText::new(expression).monospace().size(18.0));

                    if self.erreur.is_empty() {
                        ui.label(egui::RichText::new(&self.resultat).monospace().size(30.0).strong());
                    } else {
                        ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        // Rangée scientifique
        ui.horizontal(|ui| {
            for (label, f) in [
                ("sin", Fonction::Sin),
                ("cos", Fonction::Cos),
                ("tan", Fonction::Tan),
                ("√", Fonction::Sqrt),
            ] {
                self.bouton(ui, label, Touche::Fonction(f), TAILLE_PETITE, f.nom());
            }
            self.bouton(ui, "xʸ", Touche::Operateur('^'), TAILLE_PETITE, "Puissance");
        });

        // Rangée utilitaire
        ui.horizontal(|ui| {
            self.bouton(ui, "AC", Touche::ToutEffacer, TAILLE_PETITE, "Remise à zéro (Échap)");
            self.bouton(ui, "DEL", Touche::Supprimer, TAILLE_PETITE, "Efface le dernier caractère");
            self.bouton(ui, "(", Touche::Parenthese('('), TAILLE_PETITE, "");
            self.bouton(ui, ")", Touche::Parenthese(')'), TAILLE_PETITE, "");
            self.bouton(ui, "±", Touche::Signe, TAILLE_PETITE, "Change le signe du dernier nombre");
        });

        ui.add_space(4.0);

        egui::Grid::new("pave_numerique")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for (chiffres, (label, op)) in [
                    (['7', '8', '9'], ("÷", '/')),
                    (['4', '5', '6'], ("×", '*')),
                    (['1', '2', '3'], ("−", '-')),
                ] {
                    for c in chiffres {
                        self.bouton(ui, &c.to_string(), Touche::Chiffre(c), TAILLE_TOUCHE, "");
                    }
                    self.bouton(ui, label, Touche::Operateur(op), TAILLE_TOUCHE, "");
                    ui.end_row();
                }

                self.bouton(ui, "0", Touche::Chiffre('0'), TAILLE_TOUCHE, "");
                self.bouton(ui, ".", Touche::Decimal, TAILLE_TOUCHE, "");
                self.bouton(ui, "=", Touche::Egal, TAILLE_TOUCHE, "Évaluer (Entrée)");
                self.bouton(ui, "+", Touche::Operateur('+'), TAILLE_TOUCHE, "");
                ui.end_row();
            });
    }

    fn ui_demarche(&self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche, taille: [f32; 2], tip: &str) {
        let mut resp = ui.add_sized(taille, egui::Button::new(label));
        if !tip.is_empty() {
            resp = resp.on_hover_text(tip);
        }
        if resp.clicked() {
            // le focus resterait sinon sur le bouton : Entrée le recliquerait
            resp.surrender_focus();
            self.appliquer(touche);
        }
    }
}
