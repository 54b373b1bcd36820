//! Noyau de calcul flottant
//!
//! Organisation interne :
//! - table.rs    : opérateurs + fonctions (tables fixes), mode d’angle
//! - jetons.rs   : tokenisation
//! - rpn.rs      : shunting-yard -> RPN résolue
//! - eval.rs     : pile numérique + pipeline complet
//! - format.rs   : affichage arrondi d’un résultat
//! - erreur.rs   : taxonomie des erreurs par étape

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod table;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::{CalcError, EvalError, ParseError, TokenizeError};
pub use eval::{demarche, eval_rpn, evaluate, try_evaluate, Demarche, Evaluation};
pub use format::{format_number, NON_FINI};
pub use jetons::{tokenize, Paren, Tok};
pub use rpn::{to_rpn, RpnTok};
pub use table::{Fonction, ModeAngle, Op};
