use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpRequest, HttpResponse, HttpServer};
use anyhow::Context as _;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use tracing::info;
use tracing_subscriber::prelude::*;

use vidboard_api::auth::TokenIssuer;
use vidboard_api::config::Config;
use vidboard_api::db;
use vidboard_api::schema::{build_schema, AppSchema};

async fn graphql_handler(
    schema: web::Data<AppSchema>,
    issuer: web::Data<TokenIssuer>,
    http_req: HttpRequest,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = req.into_inner();

    // Resolve the optional bearer token into an authenticated identity.
    // Queries and register/login stay reachable without one; authenticated
    // mutations fail later with "Unauthenticated" when it is absent.
    if let Some(user) = http_req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|header| issuer.verify_bearer(header))
    {
        request = request.data(user);
    }

    schema.execute(request).await.into()
}

async fn health_handler() -> &'static str {
    "ok"
}

/// SDL (Schema Definition Language) endpoint for schema introspection
async fn schema_handler(schema: web::Data<AppSchema>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body(schema.sdl())
}

async fn playground_handler() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

fn build_cors(allowed_origins: &str) -> Cors {
    if allowed_origins.trim() == "*" {
        return Cors::permissive();
    }

    let mut cors = Cors::default().allow_any_method().allow_any_header();
    for origin in allowed_origins.split(',') {
        cors = cors.allowed_origin(origin.trim());
    }
    cors
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,vidboard_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("Starting Vidboard API...");

    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to load configuration")?;

    let pool = db::create_pool(&config.database)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("failed to run database migrations")?;

    info!("Database migrations applied");

    let issuer = TokenIssuer::new(&config.jwt);
    let schema = build_schema(pool, issuer.clone());

    let bind_addr = format!("{}:{}", config.app.host, config.app.port);
    info!(env = %config.app.env, "Vidboard API listening on http://{}", bind_addr);

    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(&allowed_origins))
            .app_data(web::Data::new(schema.clone()))
            .app_data(web::Data::new(issuer.clone()))
            .route("/graphql", web::post().to(graphql_handler))
            .route("/graphql/schema", web::get().to(schema_handler))
            .route("/playground", web::get().to(playground_handler))
            .route("/health", web::get().to(health_handler))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
