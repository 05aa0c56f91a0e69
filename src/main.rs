mod config;
mod handlers;
mod models;
mod requests;
mod routes;
mod services;
mod utils;

use std::path::Path;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use dotenv::dotenv;
use tracing::info;

use crate::config::AppConfig;
use crate::services::email::{EmailService, WelcomeNotifier};
use crate::services::gateway::SignupGateway;
use crate::utils::assets::StaticAssets;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env().context("failed to read configuration")?;

    // missing images abort startup, they never fail a request
    let assets =
        StaticAssets::load(Path::new("assets")).context("failed to load email image assets")?;

    let gateway = web::Data::new(SignupGateway::new(config.signup_api_url.clone()));
    let email_service =
        EmailService::new(&config.mail, assets).context("failed to build mail transport")?;
    let notifier: web::Data<dyn WelcomeNotifier> =
        web::Data::from(Arc::new(email_service) as Arc<dyn WelcomeNotifier>);

    info!("Starting signup portal on 0.0.0.0:8080");
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(gateway.clone())
            .app_data(notifier.clone())
            .configure(routes::api::scoped_config)
    })
    .bind(("0.0.0.0", 8080))?
    .run()
    .await?;

    Ok(())
}
