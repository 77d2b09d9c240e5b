// tests/graphql_glizzy.rs
use async_graphql::Request as GqlRequest;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::util::ServiceExt as _;

mod support;

use glizzy_api::application::commands::CreateGlizzyCommand;
use glizzy_api::presentation::graphql::{RequestBase, build_schema};
use support::helpers::{body_json, build_test_services};

fn test_base() -> RequestBase {
    RequestBase {
        origin: "http://testserver".into(),
        media_url: "/media/".into(),
    }
}

async fn seed_glizzy(
    services: &glizzy_api::application::services::ApplicationServices,
    name: &str,
    image: Option<&str>,
) {
    services
        .glizzy_commands
        .create(CreateGlizzyCommand {
            name: name.into(),
            short_info: format!("{name} in short."),
            long_info: format!("{name} described at length."),
            image: image.map(Into::into),
            slug: None,
        })
        .await
        .expect("seed glizzy");
}

#[tokio::test]
async fn glizzy_without_filter_arguments_errors() {
    let services = build_test_services();
    let schema = build_schema(services);

    let resp = schema
        .execute(GqlRequest::new("{ glizzy { slug } }").data(test_base()))
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert_eq!(
        resp.errors[0].message,
        "Field 'glizzy' of either arguments of 'id' of type 'ID' or 'slug' of type 'String' are required, but it was not provided."
    );
}

#[tokio::test]
async fn glizzy_with_unknown_slug_errors() {
    let services = build_test_services();
    let schema = build_schema(services);

    let resp = schema
        .execute(
            GqlRequest::new(r#"{ glizzy(slug: "no-such-glizzy") { slug } }"#).data(test_base()),
        )
        .await;

    assert_eq!(resp.errors.len(), 1);
    assert_eq!(resp.errors[0].message, "The glizzy does not exist.");
}

#[tokio::test]
async fn glizzy_lookup_by_id_and_slug() {
    let services = build_test_services();
    seed_glizzy(&services, "Chili Glizzy", None).await;
    let schema = build_schema(services);

    let by_slug = schema
        .execute(
            GqlRequest::new(r#"{ glizzy(slug: "chili-glizzy") { id name slug } }"#)
                .data(test_base()),
        )
        .await;
    assert!(by_slug.errors.is_empty(), "{:?}", by_slug.errors);
    let data = by_slug.data.into_json().unwrap();
    assert_eq!(data["glizzy"]["name"], "Chili Glizzy");

    let by_id = schema
        .execute(GqlRequest::new(r#"{ glizzy(id: "1") { slug } }"#).data(test_base()))
        .await;
    assert!(by_id.errors.is_empty(), "{:?}", by_id.errors);
    let data = by_id.data.into_json().unwrap();
    assert_eq!(data["glizzy"]["slug"], "chili-glizzy");
}

#[tokio::test]
async fn glizzys_resolve_images_against_request_base() {
    let services = build_test_services();
    seed_glizzy(&services, "Bare Glizzy", None).await;
    seed_glizzy(&services, "Photogenic Glizzy", Some("shot.png")).await;
    let schema = build_schema(services);

    let resp = schema
        .execute(GqlRequest::new("{ glizzys { name image } }").data(test_base()))
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);

    let data = resp.data.into_json().unwrap();
    let glizzys = data["glizzys"].as_array().unwrap();
    assert_eq!(glizzys.len(), 2);

    // Ordered by name; the bare one keeps a null image.
    assert_eq!(glizzys[0]["name"], "Bare Glizzy");
    assert!(glizzys[0]["image"].is_null());

    let image = glizzys[1]["image"].as_str().unwrap();
    assert!(image.starts_with("http://testserver/media/images/glizzy/Photogenic Glizzy/"));
    assert!(image.ends_with(".png"));
}

#[tokio::test]
async fn graphql_camel_cases_timestamp_fields() {
    let services = build_test_services();
    seed_glizzy(&services, "Chrono Glizzy", None).await;
    let schema = build_schema(services);

    let resp = schema
        .execute(
            GqlRequest::new(r#"{ glizzy(slug: "chrono-glizzy") { createdAt updatedAt shortInfo } }"#)
                .data(test_base()),
        )
        .await;
    assert!(resp.errors.is_empty(), "{:?}", resp.errors);
}

#[tokio::test]
async fn graphql_endpoint_uses_host_header_for_image_urls() {
    let state = support::helpers::build_test_state();
    seed_glizzy(&state.services, "Routed Glizzy", Some("pic.png")).await;
    let app = glizzy_api::presentation::http::routes::build_router(state);

    let payload = json!({"query": "{ glizzys { image } }"});
    let req = Request::builder()
        .method("POST")
        .uri("/graphql")
        .header("content-type", "application/json")
        .header("host", "api.glizzy.example")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_json(resp).await;
    let image = body["data"]["glizzys"][0]["image"].as_str().unwrap();
    assert!(
        image.starts_with("http://api.glizzy.example/media/"),
        "unexpected image url: {image}"
    );
}
