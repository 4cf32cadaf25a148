//! Router composition.
//!
//! Read endpoints are public; every create/update/delete sits behind the
//! admin mutation gate. Uploaded files are served statically from the
//! uploads root.

use axum::{
    http::Method,
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::auth::{handlers as auth_handlers, middleware::require_admin};
use crate::handlers::{
    self, contacts, events, faqs, gallery, news, partnerships, programs,
    search, static_content, stats, team,
};
use crate::AppState;

/// Full application router: API, static uploads, CORS and tracing.
pub fn build_router(state: AppState) -> Router {
    let uploads_root = state.uploads.root().to_path_buf();

    Router::new()
        .nest("/api", api_router(state.clone()))
        .nest_service("/uploads", ServeDir::new(&uploads_root))
        .nest_service("/gallery", ServeDir::new(uploads_root.join("gallery")))
        .nest_service("/team", ServeDir::new(uploads_root.join("team")))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_router(state: AppState) -> Router<AppState> {
    Router::new()
        .merge(public_routes())
        .merge(admin_routes(state))
}

fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Content listings and detail reads
        .route("/programs", get(programs::list_programs))
        .route("/programs/{program_id}", get(programs::get_program))
        .route("/news", get(news::list_news))
        .route("/news/{news_id}", get(news::get_news))
        .route("/partnerships", get(partnerships::list_partnerships))
        .route(
            "/partnerships/{partnership_id}",
            get(partnerships::get_partnership),
        )
        .route("/team", get(team::list_team))
        .route("/team/{member_id}", get(team::get_team_member))
        .route("/events", get(events::list_events))
        .route("/events/{event_id}", get(events::get_event))
        .route("/gallery", get(gallery::list_gallery))
        .route("/gallery/{image_id}", get(gallery::get_gallery_image))
        .route("/faqs", get(faqs::list_faqs))
        .route("/static-content", get(static_content::list_static_content))
        .route(
            "/static-content/{key}",
            get(static_content::get_static_content),
        )
        // Search and stats
        .route("/search", get(search::search))
        .route("/stats", get(stats::get_stats))
        .route("/stats/extended", get(stats::get_extended_stats))
        // Form intake
        .route("/contact", post(contacts::submit_contact))
        .route("/forms/{form_type}", post(contacts::submit_typed_form))
        // Authentication entry point
        .route("/admin/login", post(auth_handlers::login))
}

/// Everything in here requires a valid bearer token.
fn admin_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin/logout", post(auth_handlers::logout))
        .route(
            "/admin/stats-config",
            get(stats::get_stats_config).put(stats::update_stats_config),
        )
        .route(
            "/admin/programs",
            get(programs::admin_list_programs).post(programs::create_program),
        )
        .route(
            "/admin/programs/{program_id}",
            put(programs::update_program).delete(programs::delete_program),
        )
        .route("/admin/news", post(news::create_news))
        .route(
            "/admin/news/{news_id}",
            put(news::update_news).delete(news::delete_news),
        )
        .route(
            "/admin/partnerships",
            post(partnerships::create_partnership),
        )
        .route(
            "/admin/partnerships/{partnership_id}",
            put(partnerships::update_partnership)
                .delete(partnerships::delete_partnership),
        )
        .route("/admin/team", post(team::create_team_member))
        .route(
            "/admin/team/{member_id}",
            put(team::update_team_member).delete(team::delete_team_member),
        )
        .route("/admin/events", post(events::create_event))
        .route(
            "/admin/events/{event_id}",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/admin/gallery", post(gallery::upload_gallery_image))
        .route(
            "/admin/gallery/{image_id}",
            put(gallery::update_gallery_image)
                .delete(gallery::delete_gallery_image),
        )
        .route("/admin/faqs", post(faqs::create_faq))
        .route(
            "/admin/faqs/{faq_id}",
            put(faqs::update_faq).delete(faqs::delete_faq),
        )
        .route(
            "/admin/static-content",
            post(static_content::create_static_content),
        )
        .route(
            "/admin/static-content/{key}",
            put(static_content::update_static_content)
                .delete(static_content::delete_static_content),
        )
        .route("/admin/contacts", get(contacts::admin_list_contacts))
        .route(
            "/admin/contacts/{contact_id}/read",
            put(contacts::mark_contact_read),
        )
        .route(
            "/admin/contacts/{contact_id}",
            delete(contacts::delete_contact),
        )
        .route_layer(middleware::from_fn_with_state(state, require_admin))
}
