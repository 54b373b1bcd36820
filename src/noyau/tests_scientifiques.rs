//! Tests scientifiques (campagne) : propriétés observables du pipeline complet.
//!
//! On passe uniquement par la frontière publique `evaluate` / `format_number`,
//! comme le ferait l’UI.

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{evaluate, format_number, Evaluation, ModeAngle, NON_FINI};

fn eval_ok(expr: &str, mode: ModeAngle) -> f64 {
    let Evaluation { value, error } = evaluate(expr, mode);
    assert!(error.is_empty(), "expr={expr:?} err={error}");
    value
}

fn eval_err(expr: &str) -> String {
    let e = evaluate(expr, ModeAngle::Deg);
    assert!(!e.is_ok(), "erreur attendue pour expr={expr:?}, valeur={}", e.value);
    assert!(e.value.is_nan(), "valeur non significative attendue (NaN)");
    e.error
}

fn affiche(expr: &str, mode: ModeAngle) -> String {
    format_number(eval_ok(expr, mode))
}

/* ------------------------ Précédence / associativité ------------------------ */

#[rstest]
#[case("2+3*4", 14.0)]
#[case("(2+3)*4", 20.0)]
#[case("2*3+4", 10.0)]
#[case("20/4*5", 25.0)]
#[case("10-4-3", 3.0)]
#[case("2^3^2", 512.0)]
#[case("(2^3)^2", 64.0)]
#[case("2*3^2", 18.0)]
#[case("1+2*3^2-4/2", 17.0)]
fn sci_precedence_associativite(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr, ModeAngle::Deg), attendu, "expr={expr:?}");
}

/* ------------------------ Moins unaire ------------------------ */

#[rstest]
#[case("-3+4", 1.0)]
#[case("3-4", -1.0)]
#[case("3*-4", -12.0)]
#[case("3--4", 7.0)]
#[case("-(2+3)", -5.0)]
#[case("(-2)^2", 4.0)]
#[case("-2^2", 4.0)]
#[case("2^-2", 0.25)]
#[case("sqrt(4)-1", 1.0)]
fn sci_moins_unaire(#[case] expr: &str, #[case] attendu: f64) {
    assert_eq!(eval_ok(expr, ModeAngle::Deg), attendu, "expr={expr:?}");
}

/* ------------------------ Mode d’angle ------------------------ */

#[test]
fn sci_mode_angle_sinus() {
    assert_eq!(affiche("sin(90)", ModeAngle::Deg), "1");

    let rad = affiche("sin(90)", ModeAngle::Rad);
    assert_ne!(rad, "1");
    assert!(rad.starts_with("0.89399666360"), "sin(90 rad) = {rad}");
}

#[rstest]
#[case("cos(60)", "0.5")]
#[case("tan(45)", "1")]
#[case("sin(30)+cos(60)", "1")]
#[case("cos(180)", "-1")]
#[case("2*sin(30)", "1")]
fn sci_trig_degres(#[case] expr: &str, #[case] attendu: &str) {
    assert_eq!(affiche(expr, ModeAngle::Deg), attendu, "expr={expr:?}");
}

#[test]
fn sci_trig_radians() {
    assert_eq!(affiche("cos(0)", ModeAngle::Rad), "1");
    assert_eq!(affiche("sin(0)", ModeAngle::Rad), "0");
    // π n’est pas un littéral : on l’approche
    assert_eq!(affiche("sin(3.141592653589793)", ModeAngle::Rad), "0");
}

#[test]
fn sci_mode_par_defaut_degres() {
    let e = evaluate("sin(90)", ModeAngle::default());
    assert_eq!(format_number(e.value), "1");
}

/* ------------------------ Erreurs ------------------------ */

#[rstest]
#[case("10/0", "Divide by zero")]
#[case("1/(2-2)", "Divide by zero")]
#[case("sqrt(-1)", "Invalid sqrt: negative argument")]
#[case("(2+3", "Mismatched parentheses")]
#[case("2+3)", "Mismatched parentheses")]
#[case("2 # 3", "Invalid character: #")]
#[case("abs(2)", "Unknown identifier: abs")]
#[case("3*", "Invalid expression: missing operand")]
#[case("2 3", "Invalid expression")]
fn sci_erreurs(#[case] expr: &str, #[case] message: &str) {
    assert_eq!(eval_err(expr), message);
}

#[test]
fn sci_entree_vide() {
    assert_eq!(
        evaluate("", ModeAngle::Deg),
        Evaluation {
            value: 0.0,
            error: String::new()
        }
    );
}

/* ------------------------ Littéraux ------------------------ */

#[test]
fn sci_points_multiples_tronques() {
    // "1.2.3" est lu comme 1.2 (tête à un seul point)
    assert_eq!(eval_ok("1.2.3", ModeAngle::Deg), 1.2);
    assert_eq!(affiche("1.2.3+1", ModeAngle::Deg), "2.2");
    assert_eq!(eval_ok(".5+.5", ModeAngle::Deg), 1.0);
}

#[test]
fn sci_multiplication_implicite_non_supportee() {
    assert_eq!(eval_err("2(3+4)"), "Invalid expression");
}

/* ------------------------ Affichage ------------------------ */

#[test]
fn sci_arrondi_affichage() {
    assert_eq!(format_number(0.1 + 0.2), "0.3");
    assert_eq!(affiche("0.1+0.2", ModeAngle::Deg), "0.3");
    assert_eq!(affiche("sqrt(2)^2", ModeAngle::Deg), "2");
    assert_eq!(affiche("1/3", ModeAngle::Deg), "0.333333333333");
}

#[test]
fn sci_resultats_non_finis() {
    // pas d’erreur : la valeur existe mais n’est pas finie
    assert_eq!(affiche("0^-1", ModeAngle::Deg), NON_FINI);
    assert_eq!(affiche("(-8)^0.5", ModeAngle::Deg), NON_FINI);
}

#[test]
fn sci_determinisme() {
    for expr in ["2+3*4", "sin(37)/cos(12)", "10/0", "((", "2^0.5^0.5"] {
        for mode in [ModeAngle::Deg, ModeAngle::Rad] {
            let a = evaluate(expr, mode);
            let b = evaluate(expr, mode);
            assert_eq!(a.error, b.error);
            assert_eq!(a.value.to_bits(), b.value.to_bits(), "expr={expr:?}");
        }
    }
}
