use axum::{
    Router,
    extract::{MatchedPath, Request},
    middleware,
    routing::{get, post, put},
};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};
use tracing::info_span;

use crate::core::error;
use crate::core::state::AppState;
use crate::routes::{chronograms, flashcards, notices, sessions, study_modules, users};
use crate::utils::auth::{authorize, require_admin};

pub(crate) fn routes(state: AppState) -> Router {
    // /users/...
    let user_router = Router::new()
        .route("/me", get(users::me).put(users::update_me))
        .route("/{id}", get(users::get).put(users::update))
        .route("/{id}/password", put(users::change_password));

    // /flashcards/...
    let flashcard_router = Router::new()
        .route("/", get(flashcards::list).post(flashcards::create))
        .route("/bulk", post(flashcards::create_many))
        .route(
            "/{id}",
            get(flashcards::get)
                .put(flashcards::update)
                .delete(flashcards::delete),
        );

    // /chronograms/...
    let chronogram_router = Router::new()
        .route("/", get(chronograms::list).post(chronograms::create))
        .route(
            "/{id}",
            get(chronograms::get)
                .put(chronograms::update)
                .delete(chronograms::delete),
        );

    // /studyModules/...
    let study_module_router = Router::new()
        .route("/", get(study_modules::list).post(study_modules::create))
        .route(
            "/{id}",
            get(study_modules::get)
                .put(study_modules::update)
                .delete(study_modules::delete),
        );

    // /notices/..., writes are admin only
    let notice_router = Router::new()
        .route(
            "/",
            get(notices::list).merge(
                post(notices::create).route_layer(middleware::from_fn(require_admin)),
            ),
        )
        .route(
            "/{id}",
            get(notices::get).merge(
                put(notices::update)
                    .delete(notices::delete)
                    .route_layer(middleware::from_fn(require_admin)),
            ),
        );

    let authorized_routes = Router::new()
        .nest("/users", user_router)
        .nest("/flashcards", flashcard_router)
        .nest("/chronograms", chronogram_router)
        .nest("/studyModules", study_module_router)
        .nest("/notices", notice_router)
        .route_layer(middleware::from_fn_with_state(state.clone(), authorize));

    Router::new()
        .route("/", get(|| async { "StudyDesk API" }))
        .route("/users", post(users::create))
        .route("/sessions", post(sessions::create))
        .merge(authorized_routes)
        .fallback(error::handle_unknown_route)
        .method_not_allowed_fallback(error::handle_unknown_route)
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
                .layer(CatchPanicLayer::custom(error::handle_panic))
                .layer(CorsLayer::permissive()),
        )
}
