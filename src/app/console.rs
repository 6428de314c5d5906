//! src/app/console.rs
//!
//! Mode console : une expression par ligne sur l’entrée standard.
//! - ligne vide : ignorée
//! - `exit` : fin de la boucle
//! - sinon : `<expr> = <résultat>` ou `<expr> -> error: <message>`
//! - démarche (option) : jetons puis une ligne par réduction

use std::io::{self, BufRead, Write};

use crate::noyau::{calculate, calculate_with_trace, format::format_court};

const COMMANDE_FIN: &str = "exit";

/// Boucle sur `entree` jusqu’à `exit` ou fin de flux.
pub fn boucle<R: BufRead, W: Write>(entree: R, mut sortie: W, demarche: bool) -> io::Result<()> {
    for ligne in entree.lines() {
        let ligne = ligne?;
        let expr = ligne.trim();

        if expr.is_empty() {
            continue;
        }
        if expr == COMMANDE_FIN {
            log::info!("console fermée");
            break;
        }

        if demarche {
            match calculate_with_trace(expr) {
                Ok((v, d)) => {
                    writeln!(sortie, "  jetons: {}", d.jetons)?;
                    for r in &d.reductions {
                        writeln!(sortie, "  {r}")?;
                    }
                    writeln!(sortie, "{expr} = {}", format_court(v))?;
                }
                Err(e) => writeln!(sortie, "{expr} -> error: {e}")?,
            }
        } else {
            match calculate(expr) {
                Ok(v) => writeln!(sortie, "{expr} = {}", format_court(v))?,
                Err(e) => writeln!(sortie, "{expr} -> error: {e}")?,
            }
        }
        sortie.flush()?;
    }
    Ok(())
}

/// Branche la boucle sur stdin / stdout.
pub fn lancer(demarche: bool) -> io::Result<()> {
    log::info!("console prête (tapez `{COMMANDE_FIN}` pour quitter)");
    let stdin = io::stdin();
    let stdout = io::stdout();
    boucle(stdin.lock(), stdout.lock(), demarche)
}
