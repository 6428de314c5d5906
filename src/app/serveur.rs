//! src/app/serveur.rs
//!
//! Transport HTTP autour du noyau (aucune logique de calcul ici).
//!
//! Contrats :
//! - POST /api/v1/calculate, corps `{"expression": "..."}`
//! - 200 `result: x.xxxxxx` | 422 `error: <message>` | 500 `error with json`
//! - mauvaise méthode : 422 ; mauvais chemin : 404
//! - panique pendant une requête : 500 `unknown error occurred` (le processus continue)
//! - les corps d’erreur finissent par '\n', pas le corps de succès
//! - corps de requête sans limite de taille ; seule la première valeur JSON est lue

use std::any::Any;

use anyhow::Context;
use axum::{
    body::Bytes,
    extract::DefaultBodyLimit,
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use tower_http::catch_panic::CatchPanicLayer;

use super::config::Config;
use crate::noyau::{calculate, format::format_fixe};

pub const ROUTE_CALCUL: &str = "/api/v1/calculate";

#[derive(Deserialize, Debug)]
struct Requete {
    // champ absent => "" => invalid expression
    #[serde(default, alias = "Expression")]
    expression: String,
}

/// Routeur complet (route de calcul + garde-fous).
pub fn routeur() -> Router {
    let calcul = post(route_calcul)
        .fallback(methode_refusee)
        // pas de 413 : une longue expression est calculée jusqu’au bout
        .layer(DefaultBodyLimit::disable());
    proteger(Router::new().route(ROUTE_CALCUL, calcul))
}

/// Ajoute le 404 et la couche anti-panique à un ensemble de routes.
fn proteger(routes: Router) -> Router {
    routes
        .fallback(introuvable)
        .layer(CatchPanicLayer::custom(reponse_panique))
}

/// Lance le serveur et bloque jusqu’à Ctrl-C.
pub async fn lancer(config: Config) -> anyhow::Result<()> {
    let adresse = config.adresse();
    let ecoute = tokio::net::TcpListener::bind(&adresse)
        .await
        .with_context(|| format!("impossible d’écouter sur {adresse}"))?;

    log::info!(
        "serveur démarré sur le port {} (source: {})",
        config.port,
        config.source
    );

    axum::serve(ecoute, routeur())
        .with_graceful_shutdown(arret_demande())
        .await
        .context("serveur HTTP interrompu")?;

    log::info!("serveur arrêté");
    Ok(())
}

async fn arret_demande() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // sans signal, on tourne jusqu’à ce que le processus soit tué
        log::error!("écoute de Ctrl-C impossible: {e}");
        std::future::pending::<()>().await;
    }
    log::info!("arrêt demandé");
}

/* ------------------------ Handlers ------------------------ */

async fn route_calcul(corps: Bytes) -> Response {
    let requete = match lire_requete(&corps) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("json invalide: {e}");
            return texte_erreur(StatusCode::INTERNAL_SERVER_ERROR, "error with json");
        }
    };

    match calculate(&requete.expression) {
        Ok(v) => {
            let resultat = format_fixe(v);
            log::info!("expression: {} --- résultat: {resultat}", requete.expression);
            (StatusCode::OK, format!("result: {resultat}")).into_response()
        }
        Err(e) => {
            log::warn!("erreur de calcul: {e} (expression: {:?})", requete.expression);
            texte_erreur(StatusCode::UNPROCESSABLE_ENTITY, &format!("error: {e}"))
        }
    }
}

/// Première valeur JSON du corps ; ce qui suit est ignoré.
fn lire_requete(corps: &[u8]) -> Result<Requete, serde_json::Error> {
    let mut valeurs = serde_json::Deserializer::from_slice(corps).into_iter::<Requete>();
    match valeurs.next() {
        Some(r) => r,
        // corps vide (ou que des espaces)
        None => Err(serde::de::Error::custom("corps vide")),
    }
}

async fn methode_refusee(methode: Method) -> Response {
    log::warn!("méthode refusée: {methode}");
    texte_erreur(StatusCode::UNPROCESSABLE_ENTITY, "error: Unacceptable method")
}

async fn introuvable(uri: Uri) -> Response {
    log::warn!("404: {uri}");
    texte_erreur(StatusCode::NOT_FOUND, "404 page not found")
}

fn reponse_panique(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "cause inconnue".to_string()
    };
    log::error!("panique pendant une requête: {detail}");
    texte_erreur(StatusCode::INTERNAL_SERVER_ERROR, "unknown error occurred")
}

/// Corps texte brut + '\n' final.
fn texte_erreur(status: StatusCode, message: &str) -> Response {
    (status, format!("{message}\n")).into_response()
}
