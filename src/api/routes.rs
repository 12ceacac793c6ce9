use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    admin::{delete_user, export_data, get_site_stats, purge},
    items::{add_item, delete_item, get_item, list_items},
    reviews::{add_comment, delete_comment, delete_rating, submit_rating},
    users::{get_posts, get_profile, list_profile_ratings, sign_in, sign_up, submit_profile_rating},
    views::{get_top_reviewers, search_items},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/items", get(list_items).post(add_item))
        .route("/api/items/:id", get(get_item).delete(delete_item))
        .route("/api/items/:id/ratings", post(submit_rating))
        .route("/api/items/:id/ratings/:rating_id", delete(delete_rating))
        .route("/api/items/:id/ratings/:rating_id/comments", post(add_comment))
        .route(
            "/api/items/:id/ratings/:rating_id/comments/:comment_id",
            delete(delete_comment),
        )
        .route("/api/search", get(search_items))
        .route("/api/top-reviewers", get(get_top_reviewers))
        .route("/api/users", post(sign_up))
        .route("/api/sessions", post(sign_in))
        .route("/api/users/:name/stats", get(get_profile))
        .route("/api/users/:name/posts", get(get_posts))
        .route(
            "/api/users/:name/profile-ratings",
            get(list_profile_ratings).post(submit_profile_rating),
        )
        .route("/api/admin/users/:name", delete(delete_user))
        .route("/api/admin/stats", get(get_site_stats))
        .route("/api/admin/export", post(export_data))
        .route("/api/admin/purge/:scope", post(purge))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::handlers::USER_HEADER;
    use crate::config::settings::AppConfig;
    use crate::database::{create_memory_pool, Store};

    fn app() -> (Router, Store) {
        let store = Store::new(create_memory_pool().unwrap()).unwrap();
        let state = Arc::new(AppState::new(store.clone(), AppConfig::default()));
        (create_router(state), store)
    }

    async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(name) = user {
            builder = builder.header(USER_HEADER, name);
        }
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    async fn sign_up(app: &Router, name: &str) {
        let body = json!({ "name": name, "password": "pw" });
        let (status, _) = send(app, Method::POST, "/api/users", None, Some(body)).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_review_flow() {
        let (app, _) = app();
        sign_up(&app, "alice").await;
        sign_up(&app, "bob").await;

        let duplicate = json!({ "name": "alice", "password": "x" });
        let (status, _) = send(&app, Method::POST, "/api/users", None, Some(duplicate)).await;
        assert_eq!(status, StatusCode::CONFLICT);

        let new_item = json!({
            "name": "Dune",
            "category": "books",
            "value": 4,
            "review": "Great world building"
        });
        let (status, _) = send(&app, Method::POST, "/api/items", None, Some(new_item.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, item) = send(&app, Method::POST, "/api/items", Some("alice"), Some(new_item)).await;
        assert_eq!(status, StatusCode::CREATED);
        let item_id = item["id"].as_str().unwrap().to_string();
        let alice_rating = item["ratings"][0]["id"].as_str().unwrap().to_string();

        let uri = format!("/api/items/{}/ratings", item_id);
        let rating = json!({ "value": 5, "review": "Loved it" });
        let (status, item) = send(&app, Method::POST, &uri, Some("bob"), Some(rating)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(item["averageRating"].as_f64(), Some(4.5));

        let uri = format!("/api/items/{}/ratings/{}/comments", item_id, alice_rating);
        let comment = json!({ "text": "Agreed" });
        let (status, _) = send(&app, Method::POST, &uri, Some("bob"), Some(comment)).await;
        assert_eq!(status, StatusCode::CREATED);

        let uri = format!("/api/items/{}", item_id);
        let (status, detail) = send(&app, Method::GET, &uri, Some("bob"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["otherRatings"]["status"], "stats");
        assert_eq!(detail["otherRatings"]["count"], 1);
        assert_eq!(detail["otherRatings"]["average"].as_f64(), Some(4.0));
        assert_eq!(detail["categoryDisplay"], "📚 Books");

        let (_, board) = send(&app, Method::GET, "/api/top-reviewers", None, None).await;
        assert_eq!(board.as_array().unwrap().len(), 2);
        let (_, board) = send(&app, Method::GET, "/api/top-reviewers?limit=1", None, None).await;
        assert_eq!(board.as_array().unwrap().len(), 1);

        let (_, outcome) = send(&app, Method::GET, "/api/search?q=dune", None, None).await;
        assert_eq!(outcome["results"].as_array().unwrap().len(), 1);
        assert_eq!(outcome["overall"]["rating"].as_f64(), Some(4.5));

        let (_, posts) = send(&app, Method::GET, "/api/users/bob/posts", None, None).await;
        assert_eq!(posts["reviews"].as_array().unwrap().len(), 1);
        assert_eq!(posts["comments"][0]["reviewAuthor"], "alice");

        let uri = format!("/api/items/{}", item_id);
        let (status, _) = send(&app, Method::DELETE, &uri, Some("bob"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_unknown_user_profile_is_404() {
        let (app, _) = app();
        let (status, body) = send(&app, Method::GET, "/api/users/nobody/stats", None, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("nobody"));
    }

    #[tokio::test]
    async fn test_unreadable_items_block_writes() {
        use crate::database::blobs::{get_blob, put_blob};
        use crate::database::get_connection;
        use crate::database::store::ITEMS_KEY;

        let pool = create_memory_pool().unwrap();
        let store = Store::new(pool.clone()).unwrap();
        let state = Arc::new(AppState::new(store, AppConfig::default()));
        let app = create_router(state);
        let conn = get_connection(&pool).unwrap();
        put_blob(&conn, ITEMS_KEY, "[{\"id\": 1}]").unwrap();
        drop(conn);

        let body = json!({ "name": "newbie", "password": "pw" });
        let (status, _) = send(&app, Method::POST, "/api/users", None, Some(body)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let conn = get_connection(&pool).unwrap();
        assert_eq!(get_blob(&conn, ITEMS_KEY).unwrap().as_deref(), Some("[{\"id\": 1}]"));
    }

    #[tokio::test]
    async fn test_header_alone_names_the_actor() {
        let (app, _) = app();
        sign_up(&app, "alice").await;
        let rating = json!({ "value": 4 });

        let (status, _) =
            send(&app, Method::POST, "/api/users/alice/profile-ratings", Some("ghost"), Some(rating.clone()))
                .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        sign_up(&app, "bob").await;
        let (status, saved) =
            send(&app, Method::POST, "/api/users/alice/profile-ratings", Some("bob"), Some(rating)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["raterUser"], "bob");
    }

    #[tokio::test]
    async fn test_admin_routes() {
        let (app, store) = app();
        let mut catalog = store.load_catalog().unwrap();
        catalog.ensure_admin("pw");
        store.save_catalog(&catalog).unwrap();
        sign_up(&app, "alice").await;

        let (status, _) = send(&app, Method::GET, "/api/admin/stats", Some("alice"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, stats) = send(&app, Method::GET, "/api/admin/stats", Some("Admin"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["totalUsers"], 2);

        let (status, purged) =
            send(&app, Method::POST, "/api/admin/purge/items", Some("Admin"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(purged["removed"], 0);

        let (status, _) =
            send(&app, Method::DELETE, "/api/admin/users/Admin", Some("Admin"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) =
            send(&app, Method::DELETE, "/api/admin/users/alice", Some("Admin"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(store.load_catalog().unwrap().user("alice").is_none());
    }
}
