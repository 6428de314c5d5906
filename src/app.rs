// src/app.rs
//
// Calculatrice HTTP — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (config.rs + serveur.rs + console.rs)
// - Aucune évaluation ici : tout passe par crate::noyau::calculate
//
// Deux façons de servir le noyau:
// - serveur : HTTP (axum + tokio)
// - console : entrée standard, une expression par ligne

pub mod config;
pub mod console;
pub mod serveur;

// Ré-export pratique : `use crate::app::Config;`
pub use config::Config;
