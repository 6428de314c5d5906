// src/main.rs
//
// Calculatrice HTTP — point d’entrée
// ----------------------------------
// But:
// - SERVEUR (défaut) : POST /api/v1/calculate sur le port configuré
// - CONSOLE          : une expression par ligne sur stdin
//
// Logs : env_logger, niveau `info` par défaut (RUST_LOG pour changer).

use anyhow::Context;
use clap::{Parser, Subcommand};

mod app;
mod noyau;

use app::Config;

/// Évalue des expressions arithmétiques (+ - * / et parenthèses) via HTTP ou en console.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commande: Option<Commande>,
}

#[derive(Subcommand, Debug)]
enum Commande {
    /// Lance le serveur HTTP (commande par défaut).
    Serveur {
        /// Port d’écoute (sinon variable PORT, sinon 8080).
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Évalue les lignes lues sur l’entrée standard (`exit` pour quitter).
    Console {
        /// Affiche aussi les jetons et chaque réduction.
        #[arg(short, long)]
        demarche: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    match args.commande.unwrap_or(Commande::Serveur { port: None }) {
        Commande::Serveur { port } => {
            let config = Config::depuis_env(port)?;
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("démarrage du runtime tokio")?;
            runtime.block_on(app::serveur::lancer(config))
        }
        Commande::Console { demarche } => {
            app::console::lancer(demarche).context("lecture/écriture console")
        }
    }
}
