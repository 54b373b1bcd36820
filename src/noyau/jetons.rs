// src/noyau/jetons.rs

use super::erreur::TokenizeError;
use super::table::Fonction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paren {
    Ouvrante,
    Fermante,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    /// Toujours fini (jamais NaN ni ±∞).
    Num(f64),

    /// Identifiant déjà résolu : seules les fonctions connues passent.
    Ident(Fonction),

    /// Symbole brut ; unaire/binaire et validité sont décidés par le parseur.
    Operator(char),

    Paren(Paren),
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (12, 3.5, .5, 5.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - fonctions sqrt, sin, cos, tan (casse exacte)
///
/// Une entrée vide (ou seulement des espaces) donne une liste vide.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, TokenizeError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : commence par un chiffre, ou par '.' suivi d’un chiffre.
        let debut_nombre = c.is_ascii_digit()
            || (c == '.' && chars.get(i + 1).is_some_and(|n| n.is_ascii_digit()));
        if debut_nombre {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let brut: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&brut)?));
            continue;
        }

        // Identifiants : lettres ASCII seulement
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            let f = Fonction::depuis_nom(&mot).ok_or(TokenizeError::UnknownIdentifier(mot))?;
            out.push(Tok::Ident(f));
            continue;
        }

        if est_operateur(c) {
            out.push(Tok::Operator(c));
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Tok::Paren(Paren::Ouvrante)),
            ')' => out.push(Tok::Paren(Paren::Fermante)),
            _ => return Err(TokenizeError::InvalidCharacter(c)),
        }
        i += 1;
    }

    Ok(out)
}

/// Conversion d’une suite de chiffres et de points.
///
/// Le nombre de points n’est pas validé : seule la plus longue tête contenant
/// au plus un point est lue ("1.2.3" -> 1.2).
fn lire_nombre(brut: &str) -> Result<f64, TokenizeError> {
    let fin = brut
        .match_indices('.')
        .nth(1)
        .map_or(brut.len(), |(pos, _)| pos);

    match brut[..fin].parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(TokenizeError::InvalidNumber(brut.to_string())),
    }
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),
            Tok::Ident(f) => f.nom().to_string(),
            Tok::Operator(c) => c.to_string(),
            Tok::Paren(Paren::Ouvrante) => "(".to_string(),
            Tok::Paren(Paren::Fermante) => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
