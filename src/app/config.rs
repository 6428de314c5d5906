//! src/app/config.rs
//!
//! Résolution du port d’écoute.
//!
//! Ordre : option `--port` > variable `PORT` > 8080.
//! Une variable `PORT` vide compte comme absente.

use std::fmt;

use thiserror::Error;

pub const PORT_DEFAUT: u16 = 8080;

/// Nom de la variable d’environnement lue au démarrage.
pub const VAR_PORT: &str = "PORT";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ErreurConfig {
    #[error("valeur de PORT invalide: {0:?} (attendu: entier entre 0 et 65535)")]
    PortInvalide(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourcePort {
    LigneDeCommande,
    Environnement,
    Defaut,
}

impl fmt::Display for SourcePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourcePort::LigneDeCommande => write!(f, "option --port"),
            SourcePort::Environnement => write!(f, "variable {VAR_PORT}"),
            SourcePort::Defaut => write!(f, "défaut"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub source: SourcePort,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: PORT_DEFAUT,
            source: SourcePort::Defaut,
        }
    }
}

impl Config {
    /// Lit `PORT` dans l’environnement du processus.
    pub fn depuis_env(port_cli: Option<u16>) -> Result<Self, ErreurConfig> {
        let var = std::env::var(VAR_PORT).ok();
        Self::resoudre(port_cli, var.as_deref())
    }

    /// Résolution pure (testable sans toucher à l’environnement).
    pub fn resoudre(port_cli: Option<u16>, var_env: Option<&str>) -> Result<Self, ErreurConfig> {
        if let Some(port) = port_cli {
            return Ok(Self {
                port,
                source: SourcePort::LigneDeCommande,
            });
        }

        match var_env.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(brut) => {
                let port = brut
                    .parse::<u16>()
                    .map_err(|_| ErreurConfig::PortInvalide(brut.to_string()))?;
                Ok(Self {
                    port,
                    source: SourcePort::Environnement,
                })
            }
        }
    }

    /// Adresse d’écoute : toutes les interfaces.
    pub fn adresse(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
