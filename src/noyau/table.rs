// src/noyau/table.rs
//
// Tables fixes des opérateurs et des fonctions.
// - Une entrée par variante d’énumération, indexée par `variante as usize`.
// - Statiques en lecture seule : partageables entre threads sans verrou.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::erreur::EvalError;

/* ------------------------ Mode d’angle ------------------------ */

/// Interprétation des arguments trigonométriques.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ModeAngle {
    #[default]
    Deg,
    Rad,
}

impl ModeAngle {
    pub fn bascule(self) -> Self {
        match self {
            ModeAngle::Deg => ModeAngle::Rad,
            ModeAngle::Rad => ModeAngle::Deg,
        }
    }

    /// Convertit un angle exprimé dans ce mode en radians.
    pub fn en_radians(self, angle: f64) -> f64 {
        match self {
            ModeAngle::Deg => angle * std::f64::consts::PI / 180.0,
            ModeAngle::Rad => angle,
        }
    }
}

impl fmt::Display for ModeAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeAngle::Deg => f.write_str("DEG"),
            ModeAngle::Rad => f.write_str("RAD"),
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown angle mode: {0:?} (expected DEG or RAD)")]
pub struct ModeAngleInvalide(pub String);

impl FromStr for ModeAngle {
    type Err = ModeAngleInvalide;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEG" => Ok(ModeAngle::Deg),
            "RAD" => Ok(ModeAngle::Rad),
            _ => Err(ModeAngleInvalide(s.to_string())),
        }
    }
}

/* ------------------------ Opérateurs ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Assoc {
    Gauche,
    Droite,
}

/// Opérateurs résolus. `MoinsUnaire` n’existe qu’après le parseur.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    MoinsUnaire,
}

pub struct OpFiche {
    pub symbole: &'static str,
    pub precedence: u8,
    pub assoc: Assoc,
    pub arite: usize,
    /// Opérandes dans l’ordre d’empilement (gauche puis droite).
    pub appliquer: fn(&[f64]) -> Result<f64, EvalError>,
}

static OPERATEURS: [OpFiche; 6] = [
    OpFiche {
        symbole: "+",
        precedence: 2,
        assoc: Assoc::Gauche,
        arite: 2,
        appliquer: |a| binaire(a, |x, y| Ok(x + y)),
    },
    OpFiche {
        symbole: "-",
        precedence: 2,
        assoc: Assoc::Gauche,
        arite: 2,
        appliquer: |a| binaire(a, |x, y| Ok(x - y)),
    },
    OpFiche {
        symbole: "*",
        precedence: 3,
        assoc: Assoc::Gauche,
        arite: 2,
        appliquer: |a| binaire(a, |x, y| Ok(x * y)),
    },
    OpFiche {
        symbole: "/",
        precedence: 3,
        assoc: Assoc::Gauche,
        arite: 2,
        appliquer: |a| binaire(a, diviser),
    },
    OpFiche {
        symbole: "^",
        precedence: 4,
        assoc: Assoc::Droite,
        arite: 2,
        appliquer: |a| binaire(a, |x, y| Ok(x.powf(y))),
    },
    OpFiche {
        symbole: "u-",
        precedence: 5,
        assoc: Assoc::Droite,
        arite: 1,
        appliquer: |a| match *a {
            [x] => Ok(-x),
            _ => Err(EvalError::InsufficientOperands),
        },
    },
];

fn binaire(
    args: &[f64],
    f: fn(f64, f64) -> Result<f64, EvalError>,
) -> Result<f64, EvalError> {
    match *args {
        [a, b] => f(a, b),
        _ => Err(EvalError::InsufficientOperands),
    }
}

fn diviser(a: f64, b: f64) -> Result<f64, EvalError> {
    // -0.0 == 0.0 : les deux zéros sont refusés
    if b == 0.0 {
        return Err(EvalError::DivideByZero);
    }
    Ok(a / b)
}

impl Op {
    /// Opérateur binaire désigné par un symbole d’entrée.
    /// Le moins unaire n’a pas de symbole propre : c’est le parseur qui le décide.
    pub fn depuis_symbole(c: char) -> Option<Op> {
        match c {
            '+' => Some(Op::Plus),
            '-' => Some(Op::Moins),
            '*' => Some(Op::Fois),
            '/' => Some(Op::Divise),
            '^' => Some(Op::Puissance),
            _ => None,
        }
    }

    pub fn fiche(self) -> &'static OpFiche {
        &OPERATEURS[self as usize]
    }
}

/* ------------------------ Fonctions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sqrt,
    Sin,
    Cos,
    Tan,
}

pub struct FonctionFiche {
    pub nom: &'static str,
    pub arite: usize,
    pub appliquer: fn(f64, ModeAngle) -> Result<f64, EvalError>,
}

static FONCTIONS: [FonctionFiche; 4] = [
    FonctionFiche {
        nom: "sqrt",
        arite: 1,
        appliquer: |x, _| {
            if x < 0.0 {
                return Err(EvalError::InvalidDomain);
            }
            Ok(x.sqrt())
        },
    },
    FonctionFiche {
        nom: "sin",
        arite: 1,
        appliquer: |x, mode| Ok(mode.en_radians(x).sin()),
    },
    FonctionFiche {
        nom: "cos",
        arite: 1,
        appliquer: |x, mode| Ok(mode.en_radians(x).cos()),
    },
    FonctionFiche {
        nom: "tan",
        arite: 1,
        appliquer: |x, mode| Ok(mode.en_radians(x).tan()),
    },
];

impl Fonction {
    pub const TOUTES: [Fonction; 4] = [Fonction::Sqrt, Fonction::Sin, Fonction::Cos, Fonction::Tan];

    /// Correspondance exacte (sensible à la casse).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        Fonction::TOUTES.into_iter().find(|f| f.nom() == nom)
    }

    pub fn nom(self) -> &'static str {
        self.fiche().nom
    }

    pub fn fiche(self) -> &'static FonctionFiche {
        &FONCTIONS[self as usize]
    }
}
