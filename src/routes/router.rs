use crate::core::state::AppState;
use crate::routes::{auth, books};
use crate::utils;
use axum::{
    extract::{MatchedPath, Request},
    http::Method,
    middleware,
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{self, CorsLayer},
    trace::TraceLayer,
};
use tracing::info_span;

pub(crate) fn routes(state: AppState) -> Router {
    let authorized_routes = Router::new()
        .route("/", post(books::post))
        .route("/{id}", put(books::put).delete(books::delete))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    // /api/books/...
    let book_router = Router::new()
        .route("/", get(books::get_all))
        .route("/{id}", get(books::get))
        .merge(authorized_routes);

    let secure_router = Router::new()
        .route("/secureApi", get(auth::secure_api))
        .route("/test", get(auth::whoami))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            utils::auth::authorize,
        ));

    Router::new()
        .route("/authenticate", post(auth::authenticate))
        .route("/getBackUserInfo", get(auth::user_info))
        .merge(secure_router)
        .nest("/api/books", book_router)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                        let matched_path = request
                            .extensions()
                            .get::<MatchedPath>()
                            .map(MatchedPath::as_str);

                        info_span!(
                            "request",
                            method = ?request.method(),
                            matched_path,
                        )
                    }),
                )
                .layer(
                    CorsLayer::new()
                        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                        .allow_origin(cors::Any)
                        .allow_headers(cors::Any),
                ),
        )
}
