//! src/app/reglages.rs
//!
//! Réglages de démarrage, lus dans l’environnement (natif) :
//! - CALC_MODE_ANGLE : DEG | RAD
//! - CALC_THEME      : clair | sombre (ou light | dark)
//!
//! Valeur absente => défaut ; valeur invalide => défaut + avertissement.

use std::fmt;
use std::str::FromStr;

use calculatrice_sci::ModeAngle;

pub const VAR_MODE_ANGLE: &str = "CALC_MODE_ANGLE";
pub const VAR_THEME: &str = "CALC_THEME";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Clair,
    Sombre,
}

impl Theme {
    pub fn bascule(self) -> Self {
        match self {
            Theme::Clair => Theme::Sombre,
            Theme::Sombre => Theme::Clair,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Clair => f.write_str("clair"),
            Theme::Sombre => f.write_str("sombre"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clair" | "light" => Ok(Theme::Clair),
            "sombre" | "dark" => Ok(Theme::Sombre),
            _ => Err(format!("thème inconnu: {s:?} (attendu clair ou sombre)")),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub mode: ModeAngle,
    pub theme: Theme,
}

impl Reglages {
    /// Lecture des variables d’environnement.
    pub fn depuis_env() -> Self {
        let mode = std::env::var(VAR_MODE_ANGLE).ok();
        let theme = std::env::var(VAR_THEME).ok();
        Self::depuis_valeurs(mode.as_deref(), theme.as_deref())
    }

    /// Cœur testable de `depuis_env`.
    pub fn depuis_valeurs(mode: Option<&str>, theme: Option<&str>) -> Self {
        let mode = match mode.map(str::parse::<ModeAngle>) {
            None => ModeAngle::default(),
            Some(Ok(m)) => m,
            Some(Err(e)) => {
                log::warn!("{VAR_MODE_ANGLE}: {e}; mode {} utilisé", ModeAngle::default());
                ModeAngle::default()
            }
        };

        let theme = match theme.map(str::parse::<Theme>) {
            None => Theme::default(),
            Some(Ok(t)) => t,
            Some(Err(e)) => {
                log::warn!("{VAR_THEME}: {e}; thème {} utilisé", Theme::default());
                Theme::default()
            }
        };

        Self { mode, theme }
    }
}
