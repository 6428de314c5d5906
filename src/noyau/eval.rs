//! Noyau — évaluation (pipeline réel)
//!
//! espaces retirés -> équilibre des parenthèses -> jetons -> deux piles -> f64
//!
//! Pipeline linéaire : la première erreur court-circuite le reste.
//! Aucun état partagé entre deux appels.

use super::erreurs::ErreurCalcul;
use super::evaluateur::{evaluate, evaluate_trace};
use super::jetons::{format_tokens, tokenize};

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub reductions: Vec<String>,
}

/// API publique : évalue une expression arithmétique (`+ - * /`, parenthèses,
/// décimaux positifs).
pub fn calculate(expression: &str) -> Result<f64, ErreurCalcul> {
    let s = nettoyer(expression)?;
    let jetons = tokenize(&s)?;
    log::debug!("jetons: {}", format_tokens(&jetons));
    evaluate(&jetons)
}

/// Même pipeline que `calculate`, avec la démarche (jetons + réductions).
pub fn calculate_with_trace(expression: &str) -> Result<(f64, Demarche), ErreurCalcul> {
    let s = nettoyer(expression)?;
    let jetons = tokenize(&s)?;

    let mut d = Demarche {
        jetons: format_tokens(&jetons),
        reductions: Vec::new(),
    };
    let v = evaluate_trace(&jetons, &mut d.reductions)?;
    Ok((v, d))
}

/// 1) retire tous les espaces
/// 2) compte global des parenthèses (pas leur placement)
fn nettoyer(expression: &str) -> Result<String, ErreurCalcul> {
    let s: String = expression.chars().filter(|c| !c.is_whitespace()).collect();

    let ouvrantes = s.chars().filter(|&c| c == '(').count();
    let fermantes = s.chars().filter(|&c| c == ')').count();
    if ouvrantes > fermantes {
        return Err(ErreurCalcul::ExtraOpenBracket);
    }
    if ouvrantes < fermantes {
        return Err(ErreurCalcul::ExtraCloseBracket);
    }

    Ok(s)
}
