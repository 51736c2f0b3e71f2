use crate::helpers::TestApp;

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn_app().await;

    let response = app
        .client
        .get(format!("http://{}/health", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    assert_eq!("healthy".to_string(), response.text().await.unwrap());
}

#[tokio::test]
async fn metrics_expose_the_round_counters() {
    let app = TestApp::spawn_app().await;
    let _ = app.start_round("p1", "general", 3, "fun").await;

    let response = app
        .client
        .get(format!("http://{}/metrics", app.base_address))
        .send()
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let metrics = response.text().await.unwrap();
    assert!(metrics.contains("wordguess_rounds_started"));
    assert!(metrics.contains("wordguess_active_rounds"));
}
