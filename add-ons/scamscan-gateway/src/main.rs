//! Axum-based scoring gateway: entry point for the ScamScan pipeline.
//! Config-driven via GatewayConfig; the STT backend is chosen once at startup
//! and shared across requests, as is the word segmenter.

mod handlers;
mod spool;
mod ui;

use axum::routing::{get, post};
use axum::Router;
use handlers::score::{analyze_post, health, index_get, process_post};
use scamscan_core::{GatewayConfig, WordSegmenter};
use scamscan_voice::{create_best_stt, SttBackend};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Shared per-process state. Everything here is read-only after startup. The
/// keyword list is not part of it: it reloads per scoring request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub stt: Arc<dyn SttBackend>,
    pub segmenter: Arc<WordSegmenter>,
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_get))
        .route("/process", post(process_post))
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze", post(analyze_post))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Log which STT backend is active at startup.
fn log_stt_status(stt: &dyn SttBackend) {
    let status = match stt.name() {
        "Remote" => "STT: [Remote] (OpenAI-compatible API)",
        _ => "STT: [Placeholder] (set STT_API_KEY for real transcription)",
    };
    info!(target: "scamscan::stt", "{}", status);
}

#[tokio::main]
async fn main() {
    // Load .env first. The STT API key stays in the backend process.
    if let Err(e) = dotenvy::dotenv() {
        eprintln!(
            "[scamscan-gateway] .env not loaded: {} (using system environment)",
            e
        );
    }

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match GatewayConfig::load() {
        Ok(config) => Arc::new(config),
        Err(e) => {
            error!(target: "scamscan::gateway", "Config load failed: {}", e);
            std::process::exit(1);
        }
    };
    if !std::path::Path::new(&config.keywords_path).exists() {
        warn!(
            target: "scamscan::gateway",
            "Keyword list {} not found; scoring requests will fail until it exists",
            config.keywords_path
        );
    }
    let state = AppState {
        config: Arc::clone(&config),
        stt: Arc::from(create_best_stt()),
        segmenter: Arc::new(WordSegmenter::new()),
    };
    log_stt_status(state.stt.as_ref());
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(
                target: "scamscan::gateway",
                "Cannot bind {}: {} (is another gateway already on port {}?)",
                addr, e, config.port
            );
            std::process::exit(1);
        }
    };
    info!(
        target: "scamscan::gateway",
        "{} listening on http://{}",
        config.app_name, addr
    );
    if let Err(e) = axum::serve(listener, app).await {
        error!(target: "scamscan::gateway", "Server error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use scamscan_voice::{PlaceholderStt, Transcription};
    use std::io::Write;
    use std::path::Path;
    use tower::ServiceExt;

    const BOUNDARY: &str = "X-SCAMSCAN-TEST-BOUNDARY";
    const WINNER_TRANSCRIPT: &str = "You are a winner, claim your free prize free now";

    fn test_state(stt: PlaceholderStt, keywords_path: &Path, spool_dir: &Path) -> AppState {
        AppState {
            config: Arc::new(GatewayConfig {
                app_name: "Test Gateway".to_string(),
                port: 8000,
                keywords_path: keywords_path.display().to_string(),
                spool_dir: spool_dir.display().to_string(),
            }),
            stt: Arc::new(stt),
            segmenter: Arc::new(WordSegmenter::new()),
        }
    }

    fn keywords_file(dir: &Path, words: &str) -> std::path::PathBuf {
        let path = dir.join("scam_words.txt");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "{}", words).unwrap();
        path
    }

    fn multipart_request(
        uri: &str,
        field: &str,
        file_name: Option<&str>,
        data: &[u8],
    ) -> Request<Body> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        let disposition = match file_name {
            Some(name) => format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, name
            ),
            None => format!("Content-Disposition: form-data; name=\"{}\"\r\n", field),
        };
        body.extend_from_slice(disposition.as_bytes());
        body.extend_from_slice(b"Content-Type: audio/wav\r\n\r\n");
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_string(res: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn index_serves_upload_form() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(PlaceholderStt::new(), &kw, dir.path()));
        let res = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let page = body_string(res).await;
        assert!(page.contains(r#"name="audio_file""#));
        assert!(page.contains(r#"action="/process""#));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(PlaceholderStt::new(), &kw, dir.path()));
        let res = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "Test Gateway");
    }

    #[tokio::test]
    async fn process_without_audio_field_redirects_to_form() {
        let dir = tempfile::tempdir().unwrap();
        let spool = dir.path().join("spool");
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(PlaceholderStt::new(), &kw, &spool));
        let res = app
            .oneshot(multipart_request(
                "/process",
                "other_field",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/");
        // Nothing was spooled: the pipeline never started.
        assert!(!spool.exists());
    }

    #[tokio::test]
    async fn process_with_empty_filename_redirects_to_form() {
        let dir = tempfile::tempdir().unwrap();
        let spool = dir.path().join("spool");
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(PlaceholderStt::new(), &kw, &spool));
        let res = app
            .oneshot(multipart_request("/process", "audio_file", Some(""), b"RIFF"))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()[header::LOCATION], "/");
        assert!(!spool.exists());
    }

    #[tokio::test]
    async fn process_scores_winner_transcript_at_thirty_percent() {
        let dir = tempfile::tempdir().unwrap();
        let spool = dir.path().join("spool");
        let kw = keywords_file(dir.path(), "free\nwinner");
        let app = build_router(test_state(
            PlaceholderStt::with_response(WINNER_TRANSCRIPT),
            &kw,
            &spool,
        ));
        let res = app
            .oneshot(multipart_request(
                "/process",
                "audio_file",
                Some("call.wav"),
                b"RIFF fake audio",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let page = body_string(res).await;
        assert!(page.contains("Fraud score: 30.0%"));
        assert!(page.contains("winner"));
        // The spool file was cleaned up after the request.
        let leftover = std::fs::read_dir(&spool).unwrap().count();
        assert_eq!(leftover, 0);
    }

    #[tokio::test]
    async fn process_renders_failure_notice_without_score() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(
            PlaceholderStt::with_outcome(Transcription::ServiceUnavailable),
            &kw,
            dir.path(),
        ));
        let res = app
            .oneshot(multipart_request(
                "/process",
                "audio_file",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let page = body_string(res).await;
        assert!(page.contains("Error with the speech recognition service."));
        assert!(!page.contains("Fraud score"));
    }

    #[tokio::test]
    async fn analyze_returns_full_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free\nwinner");
        let app = build_router(test_state(
            PlaceholderStt::with_response(WINNER_TRANSCRIPT),
            &kw,
            dir.path(),
        ));
        let res = app
            .oneshot(multipart_request(
                "/api/v1/analyze",
                "audio_file",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(json["outcome"], "success");
        assert_eq!(json["transcript"], WINNER_TRANSCRIPT);
        assert_eq!(json["scam_hits"], 3);
        assert_eq!(json["total_words"], 10);
        assert_eq!(json["score"], 30.0);
    }

    #[tokio::test]
    async fn analyze_reports_failure_outcome_without_numbers() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(
            PlaceholderStt::with_outcome(Transcription::Unintelligible),
            &kw,
            dir.path(),
        ));
        let res = app
            .oneshot(multipart_request(
                "/api/v1/analyze",
                "audio_file",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body_string(res).await).unwrap();
        assert_eq!(json["outcome"], "unintelligible");
        assert_eq!(json["transcript"], "Audio could not be understood.");
        assert!(json.get("score").is_none());
        assert!(json.get("scam_hits").is_none());
    }

    #[tokio::test]
    async fn analyze_without_file_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let kw = keywords_file(dir.path(), "free");
        let app = build_router(test_state(PlaceholderStt::new(), &kw, dir.path()));
        let res = app
            .oneshot(multipart_request(
                "/api/v1/analyze",
                "other_field",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_keyword_list_fails_the_request() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent_words.txt");
        let app = build_router(test_state(
            PlaceholderStt::with_response(WINNER_TRANSCRIPT),
            &missing,
            dir.path(),
        ));
        let res = app
            .oneshot(multipart_request(
                "/process",
                "audio_file",
                Some("call.wav"),
                b"RIFF",
            ))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
