// src/noyau/format.rs

/// Affichage fixe : exactement 6 chiffres après la virgule (ex: 8 -> "8.000000").
pub fn format_fixe(v: f64) -> String {
    format!("{v:.6}")
}

/// Affichage court pour la console : 4.2 -> "4.2", 10.0 -> "10".
pub fn format_court(v: f64) -> String {
    format!("{v}")
}
