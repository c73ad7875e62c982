use actix_web::{self, middleware, web, App, HttpResponse, HttpServer};
use diesel::r2d2::ConnectionManager;
use r2d2::Pool;
use serde_json::json;

use crate::config::API_URL;
use crate::models;

use super::{errors::TodoApiError, todos_handler};

/// Liveness probe, no database round trip
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Everything is working fine" }))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Resource not found" }))
}

#[actix_web::main]
pub async fn start_server() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "todo_web=debug,actix_web=info,actix_server=info");
    }

    env_logger::init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let manager = ConnectionManager::<diesel::PgConnection>::new(database_url);

    let pool: models::Pool = Pool::builder()
        .build(manager)
        .expect("Failed to connect to PG database");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                // an unreadable body is the client's problem, but the
                // contract reports it as a generic server failure
                log::error!("Malformed request body: {}", err);
                TodoApiError::InternalServerError.into()
            }))
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api").service(
                    web::scope("/todos")
                        .route("", web::get().to(todos_handler::get_todos))
                        .route("", web::post().to(todos_handler::create_todo))
                        .route("/{id}", web::get().to(todos_handler::get_todo))
                        .route("/{id}", web::put().to(todos_handler::update_todo))
                        .route("/{id}", web::delete().to(todos_handler::delete_todo))
                        .route(
                            "/{id}/complete",
                            web::put().to(todos_handler::mark_todo_as_complete),
                        )
                        .route(
                            "/{id}/incomplete",
                            web::put().to(todos_handler::mark_todo_as_incomplete),
                        ),
                ),
            )
            .route("/health", web::get().to(health))
            .default_service(web::route().to(not_found))
    })
    .bind(API_URL.as_str())?
    .run()
    .await
}
