//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe) + proptest pour les propriétés générales
//! - profondeur bornée
//! - budget temps global
//! - invariant clé : erreur non vide => valeur NaN

use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::{evaluate, format_number, Evaluation, ModeAngle};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Helpers fuzz ------------------------ */

/// Erreurs normales pour une expression bien formée : domaine numérique seulement.
fn is_erreur_domaine(msg: &str) -> bool {
    msg == "Divide by zero" || msg == "Invalid sqrt: negative argument"
}

fn check_invariant_nan(expr: &str, e: &Evaluation) {
    if !e.is_ok() {
        assert!(e.value.is_nan(), "erreur sans NaN: expr={expr:?} err={}", e.error);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(10)),
        1 => format!("{}.{}", rng.pick(100), rng.pick(100)),
        2 => format!(".{}", rng.pick(10)),
        _ => format!("{}", rng.pick(1000)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(10) {
        0 => gen_nombre(rng),
        1 => format!("{a}+{}", gen_expr(rng, depth - 1)),
        2 => format!("{a}-{}", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("({a})/({})", gen_expr(rng, depth - 1)),
        5 => format!("({a})^{}", rng.pick(4)),
        6 => format!("-({a})"),
        7 => format!("sqrt({a})"),
        8 => format!("sin({a})"),
        _ => {
            if rng.pick(2) == 0 {
                format!("cos({a})")
            } else {
                format!("tan({a})")
            }
        }
    }
}

/// Texte quelconque sur un alphabet proche de la grammaire.
fn gen_bruit(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[&str] = &[
        "1", "2", ".", "+", "-", "*", "/", "^", "(", ")", " ", "sin", "sqrt", "x", "#",
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);
        let mode = if rng.pick(2) == 0 {
            ModeAngle::Deg
        } else {
            ModeAngle::Rad
        };

        let e = evaluate(&expr, mode);
        check_invariant_nan(&expr, &e);
        if e.is_ok() {
            seen_ok += 1;
        } else {
            // grammaire respectée : seules les erreurs de domaine sont admises
            assert!(
                is_erreur_domaine(&e.error),
                "erreur non attendue: expr={expr:?} err={}",
                e.error
            );
            seen_err += 1;
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 30, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let len = rng.pick(20) as usize;
        let expr = gen_bruit(&mut rng, len);
        let e = evaluate(&expr, ModeAngle::Deg);
        check_invariant_nan(&expr, &e);

        // l’affichage ne doit jamais échouer, même sur NaN
        assert!(!format_number(e.value).is_empty());
    }
}

#[test]
fn fuzz_safe_meme_seed_memes_sorties() {
    let passe = |seed: u64| -> Vec<(String, u64)> {
        let mut rng = Rng::new(seed);
        (0..60)
            .map(|_| {
                let e = evaluate(&gen_expr(&mut rng, 3), ModeAngle::Rad);
                (e.error, e.value.to_bits())
            })
            .collect()
    };
    assert_eq!(passe(42), passe(42));
}

#[test]
fn fuzz_safe_imbrication_profonde() {
    let t0 = Instant::now();
    let max = Duration::from_millis(2000);

    // Parseur et évaluateur itératifs : pas de récursion, pas de débordement de pile.
    let n = 5000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);
    assert_eq!(evaluate(&expr, ModeAngle::Deg).value, 1.0);

    let expr = format!("{}2", "-".repeat(n));
    assert_eq!(evaluate(&expr, ModeAngle::Deg).value, 2.0);

    let somme = vec!["0.5"; 800].join("+");
    assert_eq!(format_number(evaluate(&somme, ModeAngle::Deg).value), "400");
    budget(t0, max);
}

/* ------------------------ Propriétés (proptest) ------------------------ */

/// format(relire(format(x))) == format(x)
fn check_relecture(x: f64) -> Result<(), TestCaseError> {
    let une_fois = format_number(x);
    let relu: f64 = une_fois
        .parse()
        .map_err(|e| TestCaseError::fail(format!("{une_fois:?}: {e}")))?;
    prop_assert_eq!(format_number(relu), une_fois, "x={:?}", x);
    Ok(())
}

proptest! {
    #[test]
    fn prop_determinisme(expr in "[0-9.+*/^() sincotaqr-]{0,24}", rad in any::<bool>()) {
        let mode = if rad { ModeAngle::Rad } else { ModeAngle::Deg };
        let a = evaluate(&expr, mode);
        let b = evaluate(&expr, mode);
        prop_assert_eq!(&a.error, &b.error);
        prop_assert_eq!(a.value.to_bits(), b.value.to_bits());
    }

    #[test]
    fn prop_erreur_implique_nan(expr in "[0-9.+*/^() a-z#-]{0,24}") {
        let e = evaluate(&expr, ModeAngle::Deg);
        prop_assert!(e.is_ok() || e.value.is_nan());
    }

    #[test]
    fn prop_affichage_idempotent(x in any::<f64>().prop_filter("fini", |x| x.is_finite())) {
        check_relecture(x)?;
    }

    #[test]
    fn prop_affichage_idempotent_milliers(x in 1.0e3f64..1.0e5f64, negatif in any::<bool>()) {
        check_relecture(if negatif { -x } else { x })?;
    }

    #[test]
    fn prop_affichage_idempotent_usuel(x in -1.0e15f64..1.0e15f64) {
        check_relecture(x)?;
    }

    #[test]
    fn prop_entier_relu_tel_quel(n in 0u32..1_000_000u32) {
        let texte = n.to_string();
        prop_assert_eq!(format_number(evaluate(&texte, ModeAngle::Deg).value), texte);
    }
}
