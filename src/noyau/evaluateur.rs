// src/noyau/evaluateur.rs
//
// Évaluation directe à deux piles (opérandes / opérateurs).
// Pas d’AST, pas de récursion : chaque réduction dépile un opérateur et deux
// opérandes, puis rempile le résultat.
//
// Règles:
// - opérateur entrant : on réduit tant que le sommet n’est pas '(' et que sa
//   précédence est >= à celle de l’entrant (associativité à gauche)
// - ')' : on réduit jusqu’à '(' puis on la jette
// - fin : on vide la pile d’opérateurs
// - toute réduction exige deux opérandes (sinon ExtraOperator)
// - succès = exactement une opérande restante

use num_traits::Zero;

use super::erreurs::ErreurCalcul;
use super::jetons::{Jeton, Operateur};

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum EnAttente {
    Op(Operateur),
    LPar,
}

impl EnAttente {
    fn precedence(self) -> u8 {
        match self {
            EnAttente::Op(op) => op.precedence(),
            EnAttente::LPar => 0,
        }
    }
}

struct Piles<'t> {
    nombres: Vec<f64>,
    operateurs: Vec<EnAttente>,
    // une ligne par réduction, si demandé
    trace: Option<&'t mut Vec<String>>,
}

impl Piles<'_> {
    fn sommet_reductible(&self, entrant: Operateur) -> bool {
        match self.operateurs.last() {
            None | Some(EnAttente::LPar) => false,
            Some(top) => top.precedence() >= entrant.precedence(),
        }
    }

    /// Une réduction : opérateur du sommet appliqué aux deux dernières opérandes.
    fn reduire(&mut self) -> Result<(), ErreurCalcul> {
        if self.nombres.len() < 2 {
            return Err(ErreurCalcul::ExtraOperator);
        }
        let entree = self.operateurs.pop().ok_or(ErreurCalcul::InvalidExpression)?;
        let b = self.nombres.pop().ok_or(ErreurCalcul::ExtraOperator)?;
        let a = self.nombres.pop().ok_or(ErreurCalcul::ExtraOperator)?;

        let op = match entree {
            EnAttente::Op(op) => op,
            EnAttente::LPar => return Err(ErreurCalcul::OperatorNotSupported),
        };
        let r = appliquer(a, b, op)?;

        log::trace!("réduction: {a} {} {b} = {r}", op.symbole());
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(format!("{a} {} {b} = {r}", op.symbole()));
        }

        self.nombres.push(r);
        Ok(())
    }
}

/// Opération binaire IEEE. Division par zéro exact (0 ou -0) refusée.
fn appliquer(a: f64, b: f64, op: Operateur) -> Result<f64, ErreurCalcul> {
    match op {
        Operateur::Plus => Ok(a + b),
        Operateur::Moins => Ok(a - b),
        Operateur::Fois => Ok(a * b),
        Operateur::Divise => {
            if b.is_zero() {
                return Err(ErreurCalcul::DivisionByZero);
            }
            Ok(a / b)
        }
    }
}

/// Évalue une suite de jetons.
///
/// Exemple:
///   jetons: [Num(2), Op(Fois), Num(3), Op(Plus), Num(4)]
///   piles:  2 3 * -> 6 ; 6 4 + -> 10
pub fn evaluate(tokens: &[Jeton]) -> Result<f64, ErreurCalcul> {
    evaluer(tokens, None)
}

/// Comme `evaluate`, en notant chaque réduction ("a op b = r") dans `reductions`.
pub fn evaluate_trace(tokens: &[Jeton], reductions: &mut Vec<String>) -> Result<f64, ErreurCalcul> {
    evaluer(tokens, Some(reductions))
}

fn evaluer(tokens: &[Jeton], trace: Option<&mut Vec<String>>) -> Result<f64, ErreurCalcul> {
    let mut piles = Piles {
        nombres: Vec::new(),
        operateurs: Vec::new(),
        trace,
    };

    for tok in tokens.iter().copied() {
        match tok {
            Jeton::Num(v) => piles.nombres.push(v),

            Jeton::Op(op) => {
                while piles.sommet_reductible(op) {
                    piles.reduire()?;
                }
                piles.operateurs.push(EnAttente::Op(op));
            }

            Jeton::LPar => piles.operateurs.push(EnAttente::LPar),

            Jeton::RPar => {
                while matches!(piles.operateurs.last(), Some(EnAttente::Op(_))) {
                    piles.reduire()?;
                }
                // '(' correspondante (absente si ')' orpheline)
                piles.operateurs.pop();
            }
        }
    }

    // vide la pile d’opérateurs (une '(' restante finit en OperatorNotSupported)
    while !piles.operateurs.is_empty() {
        piles.reduire()?;
    }

    if piles.nombres.len() != 1 {
        return Err(ErreurCalcul::InvalidExpression);
    }
    piles.nombres.pop().ok_or(ErreurCalcul::InvalidExpression)
}
