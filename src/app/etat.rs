//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : enchaîner les frappes (pavé ou clavier) en une chaîne d’expression,
//! puis déposer le résultat formaté ou l’erreur du noyau.
//!
//! Contrats :
//! - Aucune logique d’affichage ici (pas d’egui).
//! - Le noyau n’est appelé que par `egal()` : `evaluate` puis `format_number`,
//!   plus `demarche` pour le panneau jetons / RPN.
//! - Toute frappe efface l’erreur précédente.

use calculatrice_sci::noyau::{demarche, Demarche, Fonction};
use calculatrice_sci::{evaluate, format_number, ModeAngle};

use super::reglages::{Reglages, Theme};

/// Résultat affiché au démarrage et après AC.
pub const RESULTAT_INITIAL: &str = "0";

/// Résultat affiché quand le noyau refuse l’expression.
pub const RESULTAT_ERREUR: &str = "Error";

/// Une frappe, qu’elle vienne d’un bouton ou du clavier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(char),
    Decimal,
    Parenthese(char),
    Fonction(Fonction),
    Signe,
    ToutEffacer,
    Supprimer,
    Egal,
    BasculerMode,
    BasculerTheme,
}

impl Touche {
    /// Caractère tapé au clavier -> touche (None si ignoré).
    pub fn depuis_caractere(c: char) -> Option<Touche> {
        match c {
            '0'..='9' => Some(Touche::Chiffre(c)),
            '+' | '-' | '*' | '/' | '^' => Some(Touche::Operateur(c)),
            '(' | ')' => Some(Touche::Parenthese(c)),
            '.' => Some(Touche::Decimal),
            '=' => Some(Touche::Egal),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub expression: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,
    pub demarche: Demarche,

    // --- paramètres ---
    pub mode: ModeAngle,
    pub theme: Theme,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::depuis_reglages(Reglages::default())
    }
}

impl AppCalc {
    pub fn depuis_reglages(r: Reglages) -> Self {
        Self {
            expression: String::new(),
            resultat: RESULTAT_INITIAL.to_string(),
            erreur: String::new(),
            demarche: Demarche::default(),
            mode: r.mode,
            theme: r.theme,
        }
    }

    /// Point d’entrée unique des frappes.
    pub fn appliquer(&mut self, touche: Touche) {
        match touche {
            Touche::Chiffre(d) => self.chiffre(d),
            Touche::Operateur(op) => self.operateur(op),
            Touche::Decimal => self.decimal(),
            Touche::Parenthese(p) => self.parenthese(p),
            Touche::Fonction(f) => self.fonction(f),
            Touche::Signe => self.basculer_signe(),
            Touche::ToutEffacer => self.tout_effacer(),
            Touche::Supprimer => self.supprimer(),
            Touche::Egal => self.egal(),
            Touche::BasculerMode => self.basculer_mode(),
            Touche::BasculerTheme => self.basculer_theme(),
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn chiffre(&mut self, d: char) {
        self.erreur.clear();
        self.expression.push(d);
    }

    /// Un opérateur en tête d’expression est ignoré (utiliser ± pour un négatif).
    pub fn operateur(&mut self, op: char) {
        self.erreur.clear();
        if self.expression.is_empty() {
            return;
        }
        self.expression.push(op);
    }

    pub fn decimal(&mut self) {
        self.erreur.clear();
        self.expression.push('.');
    }

    pub fn parenthese(&mut self, p: char) {
        self.erreur.clear();
        self.expression.push(p);
    }

    /// Insère "nom(" pour que l’argument suive directement.
    pub fn fonction(&mut self, f: Fonction) {
        self.erreur.clear();
        self.expression.push_str(f.nom());
        self.expression.push('(');
    }

    /// ± : bascule le signe du dernier nombre saisi.
    /// - expression vide        -> "-"
    /// - nombre final sans signe -> "-" inséré devant ("3-4" -> "3--4")
    /// - nombre final négatif    -> moins unaire retiré ("2*-5" -> "2*5")
    /// - sinon                   -> "(-" ajouté
    pub fn basculer_signe(&mut self) {
        self.erreur.clear();

        if self.expression.is_empty() {
            self.expression.push('-');
            return;
        }

        let Some(debut) = debut_nombre_final(&self.expression) else {
            self.expression.push_str("(-");
            return;
        };

        if moins_unaire_avant(&self.expression, debut) {
            self.expression.remove(debut - 1);
        } else {
            self.expression.insert(debut, '-');
        }
    }

    /* ------------------------ Édition ------------------------ */

    /// AC : remise à zéro (mode et thème conservés).
    pub fn tout_effacer(&mut self) {
        self.expression.clear();
        self.resultat = RESULTAT_INITIAL.to_string();
        self.erreur.clear();
        self.demarche = Demarche::default();
    }

    /// DEL : retire le dernier caractère.
    pub fn supprimer(&mut self) {
        self.erreur.clear();
        self.expression.pop();
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn egal(&mut self) {
        let e = evaluate(&self.expression, self.mode);
        if e.is_ok() {
            self.resultat = format_number(e.value);
            self.erreur.clear();
        } else {
            self.resultat = RESULTAT_ERREUR.to_string();
            self.erreur = e.error;
        }
        // Une erreur d’évaluation garde une démarche lisible ; sinon vide.
        self.demarche = demarche(&self.expression).unwrap_or_default();
    }

    /* ------------------------ Paramètres ------------------------ */

    pub fn basculer_mode(&mut self) {
        self.mode = self.mode.bascule();
        log::info!("mode d’angle: {}", self.mode);
    }

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.bascule();
        log::info!("thème: {}", self.theme);
    }
}

/// Indice (octets) du premier caractère du nombre qui termine l’expression.
/// Le nombre doit finir par un chiffre et contenir au plus un point.
fn debut_nombre_final(s: &str) -> Option<usize> {
    if !s.ends_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let mut debut = s.len();
    let mut point_vu = false;
    for (i, c) in s.char_indices().rev() {
        if c.is_ascii_digit() {
            debut = i;
        } else if c == '.' && !point_vu {
            point_vu = true;
            debut = i;
        } else {
            break;
        }
    }

    // un point en tête reste attaché au nombre (".5") ; "1.2.3" -> "2.3"
    Some(debut)
}

/// Vrai si le caractère avant `debut` est un moins unaire
/// (en tête, ou précédé d’un opérateur / d’une parenthèse ouvrante).
fn moins_unaire_avant(s: &str, debut: usize) -> bool {
    let avant = &s[..debut];
    let Some(sans_moins) = avant.strip_suffix('-') else {
        return false;
    };
    match sans_moins.chars().next_back() {
        None => true,
        Some(c) => matches!(c, '+' | '-' | '*' | '/' | '^' | '('),
    }
}
