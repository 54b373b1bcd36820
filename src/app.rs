// src/app.rs
//
// Calculatrice: module App (racine)
// ----------------------------------
// - Sous-modules : etat.rs (frappes), vue.rs (egui), reglages.rs (environnement)
// - Ré-export de AppCalc pour main.rs
// - impl eframe::App (natif + web) : clavier global + thème

pub mod etat;
pub mod reglages;
pub mod vue;

pub use etat::{AppCalc, Touche};
pub use reglages::{Reglages, Theme};

use eframe::egui;

/// Événements clavier d’une frame -> touches.
/// Texte : chiffres, opérateurs, parenthèses, '.', '='.
/// Touches nommées : Entrée évalue, Retour arrière efface, Échap remet à zéro.
///
/// Un widget focalisé (bouton atteint par Tab) reçoit déjà Entrée comme un clic :
/// Entrée n’est alors pas traduite en "=".
fn touches_clavier(events: &[egui::Event], widget_focalise: bool) -> Vec<Touche> {
    let mut touches = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(texte) => {
                touches.extend(texte.chars().filter_map(Touche::depuis_caractere));
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter if !widget_focalise => touches.push(Touche::Egal),
                egui::Key::Backspace => touches.push(Touche::Supprimer),
                egui::Key::Escape => touches.push(Touche::ToutEffacer),
                _ => {}
            },
            _ => {}
        }
    }
    touches
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let widget_focalise = ctx.memory(|m| m.focused().is_some());
        let touches = ctx.input(|i| touches_clavier(&i.events, widget_focalise));
        for touche in touches {
            self.appliquer(touche);
        }

        ctx.set_visuals(match self.theme {
            Theme::Clair => egui::Visuals::light(),
            Theme::Sombre => egui::Visuals::dark(),
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
