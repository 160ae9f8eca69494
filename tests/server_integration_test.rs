use anyhow::Result;
use isotope_api::app::server;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_end_to_end_over_tcp() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let (stop_tx, stop_rx) = oneshot::channel::<()>();

    let handle = tokio::spawn(server::serve(listener, async move {
        let _ = stop_rx.await;
    }));

    let client = reqwest::Client::new();

    let response = client
        .get(format!("http://{}/api/isotopes/C", address))
        .send()
        .await?;
    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let body: Value = response.json().await?;
    assert_eq!(body["atomicNumber"], 6);
    assert_eq!(body["name"], "Carbon");
    assert_eq!(body["atomicWeight"].to_string(), "12.0107");
    let mass_numbers: Vec<u64> = body["isotopes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["massNumber"].as_u64().unwrap())
        .collect();
    assert_eq!(mass_numbers, vec![12, 13, 14]);

    let response = client
        .get(format!("http://{}/api/isotopes/Xx", address))
        .send()
        .await?;
    assert!(response.status().is_success());
    assert!(response.bytes().await?.is_empty());

    stop_tx.send(()).ok();
    handle.await??;
    Ok(())
}

#[tokio::test]
async fn test_bind_conflict_reports_bind_error() -> Result<()> {
    let occupied = TcpListener::bind("127.0.0.1:0").await?;
    let port = occupied.local_addr()?.port();

    let settings = isotope_api::Settings {
        host: "127.0.0.1".to_string(),
        port,
        ..Default::default()
    };

    let result = server::run(&settings).await;
    assert!(matches!(result, Err(isotope_api::ApiError::BindError { .. })));
    Ok(())
}
