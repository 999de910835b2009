use axum::{
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};

use crate::system::auth::middleware::require_admin;
use crate::{handlers, system};

/// Конфигурация всех роутов приложения
///
/// Чтение открыто; изменения и тестовые данные только для администратора.
pub fn configure_routes() -> Router {
    let admin = || middleware::from_fn(require_admin);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        .route(
            "/api/system/auth/me",
            get(system::handlers::auth::current_user.layer(admin())),
        )
        // ========================================
        // A001 Report (admin CRUD)
        // ========================================
        .route(
            "/api/report",
            get(handlers::a001_report::list_all)
                .post(handlers::a001_report::upsert.layer(admin())),
        )
        .route(
            "/api/report/list",
            get(handlers::a001_report::list_paginated),
        )
        .route(
            "/api/report/testdata",
            post(handlers::a001_report::insert_test_data.layer(admin())),
        )
        .route(
            "/api/report/:id",
            get(handlers::a001_report::get_by_id)
                .delete(handlers::a001_report::delete.layer(admin())),
        )
        // ========================================
        // A002 Auction (admin CRUD)
        // ========================================
        .route(
            "/api/auction",
            get(handlers::a002_auction::list_all)
                .post(handlers::a002_auction::upsert.layer(admin())),
        )
        .route(
            "/api/auction/list",
            get(handlers::a002_auction::list_paginated),
        )
        .route(
            "/api/auction/testdata",
            post(handlers::a002_auction::insert_test_data.layer(admin())),
        )
        .route(
            "/api/auction/:id",
            get(handlers::a002_auction::get_by_id)
                .delete(handlers::a002_auction::delete.layer(admin())),
        )
        // ========================================
        // A003 Document (read-only)
        // ========================================
        .route("/api/document", get(handlers::a003_document::list_all))
        .route(
            "/api/document/list",
            get(handlers::a003_document::list_paginated),
        )
        .route(
            "/api/document/testdata",
            post(handlers::a003_document::insert_test_data.layer(admin())),
        )
        .route(
            "/api/document/:id",
            get(handlers::a003_document::get_by_id),
        )
        // ========================================
        // A004 Emission (read-only)
        // ========================================
        .route("/api/emission", get(handlers::a004_emission::list_all))
        .route(
            "/api/emission/list",
            get(handlers::a004_emission::list_paginated),
        )
        .route(
            "/api/emission/testdata",
            post(handlers::a004_emission::insert_test_data.layer(admin())),
        )
        .route(
            "/api/emission/:id",
            get(handlers::a004_emission::get_by_id),
        )
        // ========================================
        // A005 Auction result (read-only)
        // ========================================
        .route(
            "/api/auction_result",
            get(handlers::a005_auction_result::list_all),
        )
        .route(
            "/api/auction_result/list",
            get(handlers::a005_auction_result::list_paginated),
        )
        .route(
            "/api/auction_result/testdata",
            post(handlers::a005_auction_result::insert_test_data.layer(admin())),
        )
        .route(
            "/api/auction_result/:id",
            get(handlers::a005_auction_result::get_by_id),
        )
}
