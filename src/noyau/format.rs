// src/noyau/format.rs
//
// Affichage d’un résultat numérique.
// - Non fini (±∞, NaN) : jeton unique `NON_FINI`.
// - Fini : arrondi à 12 décimales, effectué en décimal sur l’écriture la plus
//   courte du flottant (0.1 + 0.2 -> "0.3"). Égalité : vers +∞.
//   Relire le texte produit puis le reformater redonne le même texte.
// - Écriture : exponentielle si |r| >= 1e21 ou |r| < 1e-6 ("1e21", "1e-7"),
//   décimale sinon ; zéro (y compris -0) s’écrit "0".

/// Affichage des valeurs infinies ou indéfinies.
pub const NON_FINI: &str = "∞";

const DECIMALES: i32 = 12;

/// Au-delà, écriture exponentielle ("1e21", "1.5e22").
const SEUIL_EXPONENTIEL: f64 = 1e21;

/// En deçà (hors zéro), écriture exponentielle ("1e-7").
const SEUIL_PETIT: f64 = 1e-6;

/// Chiffres significatifs et exposant décimal de |x| (x fini, non nul) :
/// |x| = 0.c0c1c2… × 10^(exposant + 1), soit c0 au rang 10^exposant.
fn chiffres_courts(x: f64) -> Option<(Vec<u8>, i32)> {
    let texte = format!("{:e}", x.abs());
    let (mantisse, exposant) = texte.split_once('e')?;
    let exposant: i32 = exposant.parse().ok()?;
    let chiffres = mantisse
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    Some((chiffres, exposant))
}

/// Arrondi décimal à 12 décimales, égalité vers +∞ (-2.5e-12 -> -2e-12).
fn arrondi_12(x: f64) -> f64 {
    if x == 0.0 {
        return x;
    }
    let Some((chiffres, exposant)) = chiffres_courts(x) else {
        return x;
    };

    // nombre de chiffres au rang 10^-12 ou au-dessus
    let gardes = exposant + DECIMALES + 1;
    if gardes >= chiffres.len() as i32 {
        return x;
    }
    if gardes < 0 {
        // |x| < 10^-13
        return 0.0 * x.signum();
    }

    let gardes = gardes as usize;
    let premier_rejete = chiffres[gardes];
    let reste_non_nul = chiffres[gardes + 1..].iter().any(|&c| c != 0);
    let vers_le_haut = match premier_rejete {
        6..=9 => true,
        5 => reste_non_nul || x > 0.0,
        _ => false,
    };

    let mut m: u64 = chiffres[..gardes]
        .iter()
        .fold(0, |acc, &c| acc * 10 + u64::from(c));
    if vers_le_haut {
        m += 1;
    }

    let puissance = exposant - gardes as i32 + 1;
    let Ok(r) = format!("{m}e{puissance}").parse::<f64>() else {
        return x;
    };
    r.copysign(x)
}

/// API publique : texte d’affichage d’un nombre. Ne peut pas échouer.
pub fn format_number(x: f64) -> String {
    if !x.is_finite() {
        return NON_FINI.to_string();
    }

    let r = arrondi_12(x);

    // couvre aussi -0.0
    if r == 0.0 {
        return "0".to_string();
    }
    if r.abs() >= SEUIL_EXPONENTIEL || r.abs() < SEUIL_PETIT {
        return format!("{r:e}");
    }
    r.to_string()
}
