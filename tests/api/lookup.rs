use crate::helpers::{LOOKUP_PATH, TestApp, solved_problem};
use boj_scaffold::solved_ac::FetchError;
use claims::{assert_matches, assert_ok};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{any, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn lookup_returns_records_for_valid_ids() {
    // Arrange
    let app = TestApp::spawn().await;
    let tags = ["그리디 알고리즘", "비트마스킹"];
    let body = json!([solved_problem(1052, "물병", 11, &tags)]);
    app.mock_lookup("1052", ResponseTemplate::new(200).set_body_json(body))
        .await;

    // Act
    let problems = assert_ok!(app.fetch(&["1052"]).await);

    // Assert
    assert_eq!(problems.len(), 1);
    let problem = &problems[0];
    assert_eq!(problem.id(), 1052);
    assert_eq!(problem.name(), "물병");
    assert_eq!(problem.level().value(), 11);
    assert_eq!(problem.difficulty(), "Gold V");
    assert_eq!(problem.url(), "https://www.acmicpc.net/problem/1052");
    assert_eq!(problem.tags(), ["그리디 알고리즘", "비트마스킹"]);
}

#[tokio::test]
async fn lookup_is_a_single_batched_request() {
    // Arrange
    let app = TestApp::spawn().await;
    let body = json!([
        solved_problem(1000, "A+B", 1, &["구현"]),
        solved_problem(1001, "A-B", 1, &["구현"]),
        solved_problem(3023, "마술사 이민혁", 6, &[]),
    ]);
    app.mock_lookup(
        "1000,1001,3023",
        ResponseTemplate::new(200).set_body_json(body),
    )
    .await;

    // Act
    let problems = assert_ok!(app.fetch(&["1000", "1001", "3023"]).await);

    // Assert
    assert_eq!(problems.len(), 3);
}

#[tokio::test]
async fn lookup_keeps_the_response_order() {
    // Arrange
    let app = TestApp::spawn().await;
    let body = json!([
        solved_problem(1001, "A-B", 1, &[]),
        solved_problem(1000, "A+B", 1, &[]),
    ]);
    app.mock_lookup("1000,1001", ResponseTemplate::new(200).set_body_json(body))
        .await;

    // Act
    let problems = assert_ok!(app.fetch(&["1000", "1001"]).await);

    // Assert
    let ids: Vec<u64> = problems.iter().map(|p| p.id()).collect();
    assert_eq!(ids, [1001, 1000]);
}

#[tokio::test]
async fn lookup_decodes_titles_and_tolerates_null_tags() {
    // Arrange
    let app = TestApp::spawn().await;
    let body = json!([{
        "problemId": 10830,
        "titleKo": "행렬 제곱 &amp; 분할 정복",
        "level": 12,
        "tags": null
    }]);
    app.mock_lookup("10830", ResponseTemplate::new(200).set_body_json(body))
        .await;

    // Act
    let problems = assert_ok!(app.fetch(&["10830"]).await);

    // Assert
    assert_eq!(problems[0].name(), "행렬 제곱 & 분할 정복");
    assert!(problems[0].tags().is_empty());
}

#[tokio::test]
async fn lookup_without_ids_is_rejected_before_any_request() {
    // Arrange
    let app = TestApp::spawn().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.server)
        .await;

    // Act
    let result = app.fetch(&[]).await;

    // Assert
    assert_matches!(result, Err(FetchError::InvalidRequest));
}

#[tokio::test]
async fn lookup_fails_on_an_error_status() {
    // Arrange
    let app = TestApp::spawn().await;
    let test_cases = vec![(400, "bad request"), (404, "not found"), (500, "server error")];

    for (status, description) in test_cases {
        app.server.reset().await;
        Mock::given(path(LOOKUP_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!([])))
            .mount(&app.server)
            .await;

        // Act
        let result = app.fetch(&["1000"]).await;

        // Assert
        assert!(
            matches!(result, Err(FetchError::RemoteLookup(_))),
            "The lookup did not fail with RemoteLookup on {}.",
            description
        );
    }
}

#[tokio::test]
async fn lookup_fails_on_a_malformed_body() {
    // Arrange
    let app = TestApp::spawn().await;
    let test_cases = vec![
        (json!({"message": "problemIds is required"}), "an object instead of a list"),
        (json!([{"problemId": 1000}]), "missing fields"),
        (json!([{"problemId": "x", "titleKo": "A+B", "level": 1}]), "non-numeric id"),
    ];

    for (body, description) in test_cases {
        app.server.reset().await;
        Mock::given(path(LOOKUP_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&app.server)
            .await;

        // Act
        let result = app.fetch(&["1000"]).await;

        // Assert
        assert!(
            matches!(result, Err(FetchError::RemoteLookup(_))),
            "The lookup did not fail with RemoteLookup on {}.",
            description
        );
    }
}

#[tokio::test]
async fn lookup_fails_on_an_unknown_tier() {
    // Arrange
    let app = TestApp::spawn().await;
    let body = json!([solved_problem(1000, "A+B", 42, &[])]);
    app.mock_lookup("1000", ResponseTemplate::new(200).set_body_json(body))
        .await;

    // Act
    let result = app.fetch(&["1000"]).await;

    // Assert
    assert_matches!(
        result,
        Err(FetchError::UnknownTier {
            problem_id: 1000,
            level: 42
        })
    );
}

#[tokio::test]
async fn lookup_times_out() {
    // Arrange
    let mut app = TestApp::spawn().await;
    app.timeout_milliseconds = 100;
    let body = json!([solved_problem(1000, "A+B", 1, &[])]);
    Mock::given(path(LOOKUP_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&app.server)
        .await;

    // Act
    let result = app.fetch(&["1000"]).await;

    // Assert
    match result {
        Err(FetchError::RemoteLookup(e)) => assert!(e.is_timeout()),
        other => panic!("Expected a timeout, got {:?}", other),
    }
}
