//! Calculatrice scientifique: noyau réutilisable.
//!
//! La vue (eframe) ne consomme que `evaluate` + `format_number` ;
//! le reste est exposé pour les tests et la démarche.

pub mod noyau;

pub use noyau::{evaluate, format_number, Evaluation, ModeAngle};
