//! End-to-end dispatch tests against a running server.

use eventora::AppConfig;

mod common;

#[tokio::test]
async fn test_declared_routes_are_served() {
    let server = common::start_server(AppConfig::default()).await;
    let client = common::client();

    for (path, heading) in [
        ("/", "Discover events near you"),
        ("/login", "Welcome back"),
        ("/register", "Create your account"),
        ("/organizer_dashboard", "Organizer dashboard"),
        ("/create_event", "Create a new event"),
        ("/my_event", "My events"),
    ] {
        let res = client.get(server.url(path)).send().await.expect("server unreachable");
        assert_eq!(res.status(), 200, "{path}");
        assert!(res.headers().contains_key("x-request-id"));
        let body = res.text().await.unwrap();
        assert!(body.contains(heading), "{path} should render '{heading}'");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let server = common::start_server(AppConfig::default()).await;
    let client = common::client();

    for path in ["/unknown", "/login/", "/my_events", "/organizer_dashboard/extra"] {
        let res = client.get(server.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404, "{path}");
    }

    server.stop().await;
}

#[tokio::test]
async fn test_head_is_served_without_body() {
    let server = common::start_server(AppConfig::default()).await;

    let res = common::client().head(server.url("/login")).send().await.unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert!(res.bytes().await.unwrap().is_empty());

    server.stop().await;
}

#[tokio::test]
async fn test_percent_encoded_path_is_served() {
    let server = common::start_server(AppConfig::default()).await;

    let res = common::client()
        .get(server.url("/organizer%5Fdashboard"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.text().await.unwrap().contains("Organizer dashboard"));

    server.stop().await;
}

#[tokio::test]
async fn test_method_not_allowed() {
    let server = common::start_server(AppConfig::default()).await;

    let res = common::client()
        .post(server.url("/create_event"))
        .body("title=Launch")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 405);
    assert_eq!(res.headers()["allow"], "GET, HEAD");

    server.stop().await;
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let mut config = AppConfig::default();
    config.limits.max_body_size = 16;
    let server = common::start_server(config).await;

    let res = common::client()
        .post(server.url("/login"))
        .body(vec![b'x'; 1024])
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 413);

    server.stop().await;
}

#[tokio::test]
async fn test_links_round_trip() {
    let server = common::start_server(AppConfig::default()).await;
    let client = common::client();

    let body = client.get(server.url("/")).send().await.unwrap().text().await.unwrap();
    let hrefs: Vec<&str> = body
        .split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(hrefs.len(), 6);

    for href in hrefs {
        let res = client.get(server.url(href)).send().await.unwrap();
        assert_eq!(res.status(), 200, "link {href} should resolve");
    }

    server.stop().await;
}
