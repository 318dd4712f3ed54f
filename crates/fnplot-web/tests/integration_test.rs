//! Router-level tests driving the form endpoints end to end.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use fnplot_config::Config;
use fnplot_web::{create_router, AppState};
use tower::ServiceExt;

fn app_with_output_dir(dir: &std::path::Path) -> axum::Router {
    let mut config = Config::default();
    config.output.directory = dir.to_string_lossy().into_owned();
    create_router(AppState::new(config))
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn post_form(body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/plot")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn index_lists_functions_and_colors() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    for name in ["sin", "cos", "x^2", "sqrt(x)", "tan", "exp"] {
        assert!(page.contains(&format!("value=\"{}\"", name)), "missing {name}");
    }
    for name in ["blue", "red", "green", "purple", "orange", "pink"] {
        assert!(page.contains(&format!("value=\"{}\"", name)), "missing {name}");
    }
}

#[tokio::test]
async fn empty_selection_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app.oneshot(post_form("x_from=0&x_to=1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("Choose at least one function"));
    // The form is redisplayed for another attempt
    assert!(page.contains("name=\"x_from\""));
}

#[tokio::test]
async fn unknown_function_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(post_form("x_from=0&x_to=1&functions=log"))
        .await
        .unwrap();

    let page = body_string(response).await;
    assert!(page.contains("Invalid functions selected: log"));
}

#[tokio::test]
async fn malformed_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(post_form("x_from=abc&x_to=1&functions=sin"))
        .await
        .unwrap();

    let page = body_string(response).await;
    assert!(page.contains("is not a number"));
    // Nothing was rendered
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn duplicate_colors_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(post_form(
            "x_from=0&x_to=1&functions=sin&functions=cos&colors=blue&colors=blue",
        ))
        .await
        .unwrap();

    let page = body_string(response).await;
    assert!(page.contains("class=\"error\""));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn successful_submission_renders_and_links_the_image() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(post_form(
            "x_from=0&x_to=6.28&functions=sin&functions=cos&colors=blue&colors=red&plot_type=single",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert!(page.contains("/static/images/plot_"));
    assert!(page.contains("[0, 6.28]"));

    // Single mode wrote exactly one file into the configured directory
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].starts_with("plot_") && entries[0].ends_with(".png"));
}

#[tokio::test]
async fn multiple_mode_writes_one_file_per_function() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .oneshot(post_form(
            "x_from=-5&x_to=5&functions=x%5E2&functions=exp&plot_type=multiple",
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let page = body_string(response).await;
    assert_eq!(page.matches("/static/images/plot_").count(), 2);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn generated_image_is_served_back() {
    let dir = tempfile::tempdir().unwrap();
    let app = app_with_output_dir(dir.path());

    let response = app
        .clone()
        .oneshot(post_form("x_from=0&x_to=1&functions=sin"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let name = std::fs::read_dir(dir.path())
        .unwrap()
        .next()
        .unwrap()
        .unwrap()
        .file_name()
        .into_string()
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/static/images/{name}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
}
