// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix) entièrement résolue
//   (chaque opérateur/fonction pointe vers sa table).
//
// Règles:
// - Moins unaire : '-' est unaire s’il n’y a pas de jeton précédent, ou si le
//   précédent n’est ni un nombre ni une parenthèse fermante (regard arrière seul).
// - Fonctions : gardées sur la pile, sorties après la parenthèse fermante de leur
//   argument, ou dès qu’un opérateur les rencontre au sommet.
// - Égalité de précédence : un opérateur gauche dépile, un opérateur droit non.

use super::erreur::ParseError;
use super::jetons::{Paren, Tok};
use super::table::{Assoc, Fonction, Op};

/// Élément d’une séquence postfixée.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RpnTok {
    Num(f64),
    Op(Op),
    Fonction(Fonction),
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Attente {
    Op(Op),
    Fonction(Fonction),
    ParOuvrante,
}

impl Attente {
    /// Élément de sortie correspondant (None pour une parenthèse).
    fn en_sortie(self) -> Option<RpnTok> {
        match self {
            Attente::Op(op) => Some(RpnTok::Op(op)),
            Attente::Fonction(f) => Some(RpnTok::Fonction(f)),
            Attente::ParOuvrante => None,
        }
    }
}

fn est_unaire(precedent: Option<&Tok>) -> bool {
    !matches!(
        precedent,
        Some(Tok::Num(_)) | Some(Tok::Paren(Paren::Fermante))
    )
}

/// Résout le symbole brut d’un jeton opérateur.
fn classer(symbole: char, precedent: Option<&Tok>) -> Result<Op, ParseError> {
    if symbole == '-' && est_unaire(precedent) {
        return Ok(Op::MoinsUnaire);
    }
    Op::depuis_symbole(symbole).ok_or(ParseError::UnknownOperator(symbole))
}

/// Vrai si `sommet` doit sortir avant d’empiler `entrant`.
fn doit_depiler(sommet: Op, entrant: Op) -> bool {
    let (s, e) = (sommet.fiche(), entrant.fiche());
    s.precedence > e.precedence || (s.precedence == e.precedence && e.assoc == Assoc::Gauche)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident(sin), (, Num(30), ), Operator('*'), Num(2)]
///   rpn:    [Num(30), Fonction(sin), Num(2), Op(Fois)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<RpnTok>, ParseError> {
    let mut out: Vec<RpnTok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Attente> = Vec::new();
    let mut precedent: Option<&Tok> = None;

    for tok in tokens {
        match tok {
            Tok::Num(v) => out.push(RpnTok::Num(*v)),

            // fonction : elle sortira après son argument
            Tok::Ident(f) => ops.push(Attente::Fonction(*f)),

            Tok::Operator(symbole) => {
                let op = classer(*symbole, precedent)?;

                while let Some(&top) = ops.last() {
                    match top {
                        Attente::ParOuvrante => break,
                        Attente::Op(haut) if !doit_depiler(haut, op) => break,
                        Attente::Op(haut) => out.push(RpnTok::Op(haut)),
                        Attente::Fonction(f) => out.push(RpnTok::Fonction(f)),
                    }
                    ops.pop();
                }

                ops.push(Attente::Op(op));
            }

            Tok::Paren(Paren::Ouvrante) => ops.push(Attente::ParOuvrante),

            Tok::Paren(Paren::Fermante) => {
                // dépile jusqu’à '(' ; pile vide avant => déséquilibre
                loop {
                    let top = ops.pop().ok_or(ParseError::MismatchedParentheses)?;
                    match top.en_sortie() {
                        Some(r) => out.push(r),
                        None => break,
                    }
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(&Attente::Fonction(f)) = ops.last() {
                    ops.pop();
                    out.push(RpnTok::Fonction(f));
                }
            }
        }

        precedent = Some(tok);
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        let r = top.en_sortie().ok_or(ParseError::MismatchedParentheses)?;
        out.push(r);
    }

    Ok(out)
}

/// Format utilitaire (démarche) : RPN en texte.
pub fn format_rpn(rpn: &[RpnTok]) -> String {
    rpn.iter()
        .map(|t| match t {
            RpnTok::Num(v) => v.to_string(),
            RpnTok::Op(op) => op.fiche().symbole.to_string(),
            RpnTok::Fonction(f) => f.nom().to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
