use actix_web::web;

use crate::handlers;

pub fn scoped_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/local-signup").route(web::post().to(handlers::signup::local_signup)),
    );
}
