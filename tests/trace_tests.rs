use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use radio_thermostat::ThermostatClient;
use radio_thermostat::server::{AppState, create_router};
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn requests_are_traced_at_info() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .init();

    let device = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/tstat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"temp": 70.0, "tmode": 1})))
        .mount(&device)
        .await;
    let device_addr = device.address();
    let client =
        ThermostatClient::new(format!("{}:{}", device_addr.ip(), device_addr.port())).unwrap();

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = create_router(AppState::new(client));
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let resp = reqwest::get(format!("http://{addr}/api/status")).await.unwrap();
    assert!(resp.status().is_success());
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    handle.abort();

    let output = logs.contents();
    assert!(
        output.contains("finished processing request"),
        "no request trace at info level:\n{output}"
    );
    assert!(output.contains("/api/status"), "span lacks uri:\n{output}");
}
