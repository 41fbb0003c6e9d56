//! HTTP integration tests for the articles, authors and regions endpoints.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::TestApp;

// =============================================================================
// Articles - listing and reading
// =============================================================================

#[tokio::test]
async fn test_list_articles_serializes_author_and_regions() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let al = app.region("AL", "Albania").await;
    let uk = app.region("UK", "United Kingdom").await;

    let first = app.article(json!({ "title": "Fake Article 1" })).await;
    let second = app
        .article(json!({
            "title": "Fake Article 2",
            "content": "Lorem Ipsum",
            "regions": [{ "id": al.id }, { "id": uk.id }]
        }))
        .await;
    let third = app
        .article(json!({
            "title": "Fake Article 3",
            "content": "With Author",
            "author": author.id
        }))
        .await;

    let (status, body) = app.get("/articles").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {
                "id": first,
                "title": "Fake Article 1",
                "content": "",
                "author": null,
                "regions": []
            },
            {
                "id": second,
                "title": "Fake Article 2",
                "content": "Lorem Ipsum",
                "author": null,
                "regions": [
                    { "code": "AL", "name": "Albania" },
                    { "code": "UK", "name": "United Kingdom" }
                ]
            },
            {
                "id": third,
                "title": "Fake Article 3",
                "content": "With Author",
                "author": { "id": author.id, "first_name": "John", "last_name": "Doe" },
                "regions": []
            }
        ])
    );
}

#[tokio::test]
async fn test_get_article_returns_single_record() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let uk = app.region("UK", "United Kingdom").await;
    let id = app
        .article(json!({
            "title": "Fake Article 1",
            "regions": [{ "id": uk.id }, { "id": al.id }]
        }))
        .await;

    let (status, body) = app.get(&format!("/articles/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "title": "Fake Article 1",
            "content": "",
            "author": null,
            "regions": [
                { "code": "AL", "name": "Albania" },
                { "code": "UK", "name": "United Kingdom" }
            ]
        })
    );
}

#[tokio::test]
async fn test_get_missing_article_returns_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/articles/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Articles - creating
// =============================================================================

#[tokio::test]
async fn test_create_article_with_new_regions() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Fake Article 3",
                "content": "To be or not to be",
                "regions": [
                    { "code": "US", "name": "United States of America" },
                    { "code": "AU", "name": "Austria" }
                ]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": body["id"],
            "title": "Fake Article 3",
            "content": "To be or not to be",
            "author": null,
            "regions": [
                { "code": "US", "name": "United States of America" },
                { "code": "AU", "name": "Austria" }
            ]
        })
    );

    let (_, regions) = app.get("/regions").await;
    assert_eq!(regions.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_create_article_with_author_id() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Fake Article 4",
                "content": "Article with author",
                "author": author.id
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body["author"],
        json!({ "id": author.id, "first_name": "John", "last_name": "Doe" })
    );
    assert_eq!(body["regions"], json!([]));
}

#[tokio::test]
async fn test_create_article_with_author_as_string_id() {
    let app = TestApp::new().await;
    let author = app.author("Jane", "Smith").await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Fake Article 5",
                "content": "Article with author as string",
                "author": author.id.to_string()
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"]["id"], json!(author.id));
}

#[tokio::test]
async fn test_create_article_with_author_and_regions() {
    let app = TestApp::new().await;
    let author = app.author("Bob", "Johnson").await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Fake Article 6",
                "content": "Article with author and regions",
                "author": author.id,
                "regions": [{ "code": "CA", "name": "Canada" }]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"]["id"], json!(author.id));
    assert_eq!(body["regions"], json!([{ "code": "CA", "name": "Canada" }]));
}

#[tokio::test]
async fn test_create_article_with_inline_author_creates_it() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Inline",
                "author": { "first_name": "Ada", "last_name": "Lovelace" }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"]["first_name"], "Ada");

    let (_, authors) = app.get("/authors").await;
    assert_eq!(
        authors,
        json!([{ "id": body["author"]["id"], "first_name": "Ada", "last_name": "Lovelace" }])
    );
}

#[tokio::test]
async fn test_create_article_with_inline_existing_author_reuses_it() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Inline existing",
                "author": { "id": author.id, "first_name": "Ignored" }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"]["first_name"], "John");

    let (_, authors) = app.get("/authors").await;
    assert_eq!(authors.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_article_with_incomplete_inline_author_is_rolled_back() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Broken",
                "regions": [{ "code": "AL", "name": "Albania" }],
                "author": { "first_name": "Ada" }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());

    // Nothing from the failed request is kept
    let (_, articles) = app.get("/articles").await;
    let (_, regions) = app.get("/regions").await;
    assert_eq!(articles, json!([]));
    assert_eq!(regions, json!([]));
}

#[tokio::test]
async fn test_create_article_with_unknown_author_id_has_no_author() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "title": "Orphan", "author": 4242 }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"], json!(null));
}

#[tokio::test]
async fn test_create_article_with_region_id_and_fields_keeps_id() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/articles",
            json!({
                "title": "Explicit region id",
                "regions": [{ "id": 50, "code": "FR", "name": "France" }]
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, region) = app.get("/regions/50").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(region, json!({ "id": 50, "code": "FR", "name": "France" }));
}

#[tokio::test]
async fn test_create_article_with_unknown_region_id_only_is_rejected() {
    let app = TestApp::new().await;

    let (status, _) = app
        .post(
            "/articles",
            json!({ "title": "Bad region", "regions": [{ "id": 77 }] }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_article_with_existing_id_updates_it() {
    let app = TestApp::new().await;
    let id = app.article(json!({ "title": "Original", "content": "Body" })).await;

    let (status, body) = app
        .post("/articles", json!({ "id": id, "title": "Replaced" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(id));
    assert_eq!(body["title"], "Replaced");
    assert_eq!(body["content"], "Body");

    let (_, articles) = app.get("/articles").await;
    assert_eq!(articles.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_article_with_unused_id_creates_it_under_that_id() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "id": 42, "title": "Pinned", "content": "Body" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(42));

    let (status, body) = app.get("/articles/42").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Pinned");
    assert_eq!(body["content"], "Body");
}

#[tokio::test]
async fn test_create_article_with_repeated_region_links_it_once() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;

    let (status, body) = app
        .post(
            "/articles",
            json!({
                "title": "Twice",
                "regions": [{ "id": al.id }, { "id": al.id }]
            }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["regions"], json!([{ "code": "AL", "name": "Albania" }]));

    let (_, body) = app.get(&format!("/articles/{}", body["id"])).await;
    assert_eq!(body["regions"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_create_article_rejects_long_title() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "title": "x".repeat(256) }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_article_rejects_boolean_author() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "title": "Bool", "author": true }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_create_article_rejects_array_author() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "title": "Array", "author": [null, "Ann", "Lee"] }))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());

    let (_, authors) = app.get("/authors").await;
    assert_eq!(authors, json!([]));
}

#[tokio::test]
async fn test_create_article_with_out_of_range_author_id_has_no_author() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/articles", json!({ "title": "Huge id", "author": 99_999_999_999_i64 }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["author"], json!(null));
}

// =============================================================================
// Articles - updating and deleting
// =============================================================================

#[tokio::test]
async fn test_update_article_replaces_regions() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let uk = app.region("UK", "United Kingdom").await;
    let id = app
        .article(json!({
            "title": "Fake Article 1",
            "regions": [{ "id": al.id }, { "id": uk.id }]
        }))
        .await;
    let url = format!("/articles/{}", id);

    let mut payload = json!({
        "title": "Fake Article 1 (Modified)",
        "content": "To be or not to be here",
        "regions": [
            { "code": "US", "name": "United States of America" },
            { "id": uk.id }
        ]
    });
    let (status, body) = app.put(&url, payload.clone()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "title": "Fake Article 1 (Modified)",
            "content": "To be or not to be here",
            "author": null,
            "regions": [
                { "code": "UK", "name": "United Kingdom" },
                { "code": "US", "name": "United States of America" }
            ]
        })
    );

    payload["regions"] = json!([]);
    let (status, body) = app.put(&url, payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"], json!([]));

    let (_, articles) = app.get("/articles").await;
    assert_eq!(articles.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_article_keeps_regions_when_omitted() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "regions": [{ "id": al.id }] }))
        .await;

    let (status, body) = app
        .put(&format!("/articles/{}", id), json!({ "title": "Renamed" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["regions"], json!([{ "code": "AL", "name": "Albania" }]));
}

#[tokio::test]
async fn test_update_article_sets_author() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let id = app.article(json!({ "title": "Fake Article 1" })).await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({
                "title": "Fake Article 1 (With Author)",
                "content": "Updated content",
                "author": author.id
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["author"],
        json!({ "id": author.id, "first_name": "John", "last_name": "Doe" })
    );
}

#[tokio::test]
async fn test_update_article_with_author_as_string_id() {
    let app = TestApp::new().await;
    let author = app.author("Jane", "Smith").await;
    let id = app.article(json!({ "title": "Fake Article 1" })).await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({ "author": format!(" {} ", author.id) }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["id"], json!(author.id));
}

#[tokio::test]
async fn test_update_article_removes_author_with_null() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "author": author.id }))
        .await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({ "title": "Fake Article 1", "content": "Updated content", "author": null }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], json!(null));
}

#[tokio::test]
async fn test_update_article_removes_author_with_null_string() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "author": author.id }))
        .await;

    let (status, body) = app
        .put(&format!("/articles/{}", id), json!({ "author": "null" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], json!(null));
}

#[tokio::test]
async fn test_update_article_preserves_author_when_not_provided() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "author": author.id }))
        .await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({ "title": "Fake Article 1 (Modified)", "content": "Updated content" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["id"], json!(author.id));
}

#[tokio::test]
async fn test_update_article_changes_author() {
    let app = TestApp::new().await;
    let john = app.author("John", "Doe").await;
    let jane = app.author("Jane", "Smith").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "author": john.id }))
        .await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({ "title": "Fake Article 1", "content": "Updated content", "author": jane.id }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["id"], json!(jane.id));
}

#[tokio::test]
async fn test_update_article_keeps_regions_when_null() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "regions": [{ "id": al.id }] }))
        .await;

    let (status, body) = app
        .put(
            &format!("/articles/{}", id),
            json!({ "title": "Renamed", "regions": null }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["regions"], json!([{ "code": "AL", "name": "Albania" }]));
}

#[tokio::test]
async fn test_update_article_with_inline_author_creates_then_reuses_it() {
    let app = TestApp::new().await;
    let id = app.article(json!({ "title": "Fake Article 1" })).await;
    let url = format!("/articles/{}", id);

    let (status, body) = app
        .put(
            &url,
            json!({ "author": { "first_name": "Grace", "last_name": "Hopper" } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Fake Article 1");
    assert_eq!(body["author"]["first_name"], "Grace");
    let author_id = body["author"]["id"].clone();

    let (status, body) = app
        .put(
            &url,
            json!({ "author": { "id": author_id, "first_name": "Ignored" } }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"]["id"], author_id);
    assert_eq!(body["author"]["first_name"], "Grace");

    let (_, authors) = app.get("/authors").await;
    assert_eq!(authors.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_missing_article_returns_404() {
    let app = TestApp::new().await;

    let (status, body) = app
        .put("/articles/9999", json!({ "title": "Nope" }))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());

    let (_, articles) = app.get("/articles").await;
    assert_eq!(articles, json!([]));
}

#[tokio::test]
async fn test_delete_article() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let id = app
        .article(json!({ "title": "Fake Article 1", "regions": [{ "id": al.id }] }))
        .await;
    let url = format!("/articles/{}", id);

    let (status, body) = app.delete(&url).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].is_string());

    let (status, _) = app.get(&url).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete(&url).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Regions outlive the articles that used them
    let (status, _) = app.get(&format!("/regions/{}", al.id)).await;
    assert_eq!(status, StatusCode::OK);
}

// =============================================================================
// Authors
// =============================================================================

#[tokio::test]
async fn test_list_authors() {
    let app = TestApp::new().await;
    let john = app.author("John", "Doe").await;
    let jane = app.author("Jane", "Smith").await;

    let (status, body) = app.get("/authors").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            { "id": john.id, "first_name": "John", "last_name": "Doe" },
            { "id": jane.id, "first_name": "Jane", "last_name": "Smith" }
        ])
    );
}

#[tokio::test]
async fn test_create_author() {
    let app = TestApp::new().await;

    let (status, body) = app
        .post("/authors", json!({ "first_name": "Bob", "last_name": "Johnson" }))
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": body["id"], "first_name": "Bob", "last_name": "Johnson" })
    );
    assert!(body["id"].is_i64());
}

#[tokio::test]
async fn test_create_author_missing_field_returns_400() {
    let app = TestApp::new().await;

    let (status, body) = app.post("/authors", json!({ "first_name": "" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_get_author() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;

    let (status, body) = app.get(&format!("/authors/{}", author.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": author.id, "first_name": "John", "last_name": "Doe" })
    );
}

#[tokio::test]
async fn test_get_missing_author_returns_404() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/authors/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn test_update_author() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;

    let (status, body) = app
        .put(
            &format!("/authors/{}", author.id),
            json!({ "id": author.id, "first_name": "Jane", "last_name": "Smith" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": author.id, "first_name": "Jane", "last_name": "Smith" })
    );

    let (_, authors) = app.get("/authors").await;
    assert_eq!(authors.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_update_author_partial() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;

    let (status, body) = app
        .put(&format!("/authors/{}", author.id), json!({ "last_name": "Smith" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["first_name"], "John");
    assert_eq!(body["last_name"], "Smith");
}

#[tokio::test]
async fn test_delete_author_keeps_articles() {
    let app = TestApp::new().await;
    let author = app.author("John", "Doe").await;
    let article = app
        .article(json!({ "title": "Fake Article 1", "author": author.id }))
        .await;

    let (status, _) = app.delete(&format!("/authors/{}", author.id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, authors) = app.get("/authors").await;
    assert_eq!(authors, json!([]));

    let (status, body) = app.get(&format!("/articles/{}", article)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], json!(null));
}

// =============================================================================
// Regions
// =============================================================================

#[tokio::test]
async fn test_region_crud() {
    let app = TestApp::new().await;

    let (status, created) = app
        .post("/regions", json!({ "code": "AL", "name": "Albania" }))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let url = format!("/regions/{}", created["id"]);

    let (status, body) = app.put(&url, json!({ "name": "Republic of Albania" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "id": created["id"], "code": "AL", "name": "Republic of Albania" })
    );

    let (status, _) = app.delete(&url).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = app.get(&url).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_region_unlinks_articles() {
    let app = TestApp::new().await;
    let al = app.region("AL", "Albania").await;
    let uk = app.region("UK", "United Kingdom").await;
    let id = app
        .article(json!({
            "title": "Fake Article 1",
            "regions": [{ "id": al.id }, { "id": uk.id }]
        }))
        .await;

    let (status, _) = app.delete(&format!("/regions/{}", al.id)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = app.get(&format!("/articles/{}", id)).await;
    assert_eq!(body["regions"], json!([{ "code": "UK", "name": "United Kingdom" }]));
}

// =============================================================================
// Error responses
// =============================================================================

#[tokio::test]
async fn test_malformed_json_body_returns_400() {
    let app = TestApp::new().await;

    let (status, body) = app
        .request_raw(Method::POST, "/articles", r#"{"title": "Unclosed"#)
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
    assert!(body["error"]["message"].is_string());

    let (_, articles) = app.get("/articles").await;
    assert_eq!(articles, json!([]));
}

#[tokio::test]
async fn test_unparseable_path_id_returns_404_in_error_format() {
    let app = TestApp::new().await;

    for uri in ["/articles/abc", "/authors/99999999999", "/regions/1.5"] {
        let (status, body) = app.get(uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(body["error"]["code"], "NOT_FOUND", "{}", uri);
    }

    let (status, body) = app.delete("/articles/abc").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let (status, body) = app.put("/regions/abc", json!({ "name": "Nowhere" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health_reports_database() {
    let app = TestApp::new().await;

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["database"]["status"], "healthy");
}
