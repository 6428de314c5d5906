//! Noyau de calcul
//!
//! Organisation interne :
//! - erreurs.rs    : classification fermée des erreurs
//! - jetons.rs     : tokenisation + opérateurs typés
//! - evaluateur.rs : évaluation à deux piles (précédence, associativité à gauche)
//! - eval.rs       : pipeline complet (espaces, parenthèses, jetons, piles)
//! - format.rs     : affichage des résultats

pub mod erreurs;
pub mod eval;
pub mod evaluateur;
pub mod format;
pub mod jetons;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use eval::{calculate, calculate_with_trace};
