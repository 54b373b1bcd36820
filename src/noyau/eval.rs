//! Noyau: évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile numérique -> valeur
//!
//! Sans état : chaque appel alloue ses jetons, sa RPN et sa pile, puis les jette.
//! La frontière `evaluate` replie toute erreur d’étape en `{ value, error }`.

use log::{debug, trace};

use super::erreur::{CalcError, EvalError};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{format_rpn, to_rpn, RpnTok};
use super::table::ModeAngle;

/* ------------------------ Pile numérique bornée ------------------------ */

#[derive(Debug, Default)]
struct PileNumerique {
    valeurs: Vec<f64>,
}

impl PileNumerique {
    fn empiler(&mut self, v: f64) {
        self.valeurs.push(v);
    }

    /// Retire exactement `n` valeurs, rendues dans l’ordre d’empilement.
    fn depiler_n(&mut self, n: usize) -> Result<Vec<f64>, EvalError> {
        let reste = self
            .valeurs
            .len()
            .checked_sub(n)
            .ok_or(EvalError::InsufficientOperands)?;
        Ok(self.valeurs.split_off(reste))
    }

    /// Une seule valeur doit rester en fin de séquence.
    fn valeur_finale(mut self) -> Result<f64, EvalError> {
        match self.valeurs.len() {
            1 => self.valeurs.pop().ok_or(EvalError::MalformedExpression),
            _ => Err(EvalError::MalformedExpression),
        }
    }
}

/* ------------------------ Évaluateur RPN ------------------------ */

/// Exécute une séquence postfixée sur une pile explicite.
pub fn eval_rpn(rpn: &[RpnTok], mode: ModeAngle) -> Result<f64, EvalError> {
    let mut pile = PileNumerique::default();

    for tok in rpn {
        match *tok {
            RpnTok::Num(v) => pile.empiler(v),

            RpnTok::Op(op) => {
                let fiche = op.fiche();
                let args = pile.depiler_n(fiche.arite)?;
                pile.empiler((fiche.appliquer)(&args)?);
            }

            RpnTok::Fonction(f) => {
                let fiche = f.fiche();
                let args = pile.depiler_n(fiche.arite)?;
                let [x] = *args.as_slice() else {
                    return Err(EvalError::InsufficientOperands);
                };
                pile.empiler((fiche.appliquer)(x, mode)?);
            }
        }
        trace!("pile: {:?}", pile.valeurs);
    }

    pile.valeur_finale()
}

/* ------------------------ Frontière publique ------------------------ */

/// Résultat uniforme : `error` vide <=> `value` significative.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub error: String,
}

impl Evaluation {
    pub fn is_ok(&self) -> bool {
        self.error.is_empty()
    }
}

/// Forme typée : chaque étape propage son erreur via `?`.
/// Une entrée sans jeton vaut 0 sans passer par l’évaluateur.
pub fn try_evaluate(expression: &str, mode: ModeAngle) -> Result<f64, CalcError> {
    let jetons = tokenize(expression)?;
    if jetons.is_empty() {
        return Ok(0.0);
    }
    debug!("jetons: {}", format_tokens(&jetons));

    let rpn = to_rpn(&jetons)?;
    debug!("rpn: {}", format_rpn(&rpn));

    Ok(eval_rpn(&rpn, mode)?)
}

/// API publique : évalue une expression avec le mode d’angle donné.
///
/// Succès : `{ value, error: "" }`. Échec : `{ value: NaN, error: message }`.
pub fn evaluate(expression: &str, mode: ModeAngle) -> Evaluation {
    match try_evaluate(expression, mode) {
        Ok(value) => Evaluation {
            value,
            error: String::new(),
        },
        Err(e) => {
            debug!("évaluation de {expression:?} refusée: {e}");
            Evaluation {
                value: f64::NAN,
                error: e.to_string(),
            }
        }
    }
}

/// Démarche affichable (jetons + RPN) d’une expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

pub fn demarche(expression: &str) -> Result<Demarche, CalcError> {
    let jetons = tokenize(expression)?;
    let rpn = to_rpn(&jetons)?;
    Ok(Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_rpn(&rpn),
    })
}
