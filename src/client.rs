use std::fmt;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::constants::{CONDUCT_PATH, HEALTH_PATH};

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResearchError {
    /// Submitted topic was empty after trimming; no request is issued.
    MissingTopic,
    /// The service answered with a non-2xx status.
    Request { status: u16, reason: String },
    /// The service reported a failure in its response body, regardless of
    /// HTTP status.
    Application(String),
    /// The request outlived the client-side timeout budget.
    Timeout,
    /// Connection-level failure before any response arrived.
    Network(String),
    /// Copy or save was requested while no report has been produced yet.
    NoReport,
}

impl fmt::Display for ResearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResearchError::MissingTopic => {
                write!(f, "Missing required field: topic")
            }
            ResearchError::Request { status, reason } => {
                if reason.is_empty() {
                    write!(f, "Research request failed with HTTP {}", status)
                } else {
                    write!(f, "Research request failed with HTTP {} ({})", status, reason)
                }
            }
            ResearchError::Application(message) => write!(f, "{}", message),
            ResearchError::Timeout => write!(
                f,
                "Research timed out after 5 minutes. Try narrowing the topic or reducing the research steps."
            ),
            ResearchError::Network(message) => {
                write!(f, "Could not reach the research service: {}", message)
            }
            ResearchError::NoReport => {
                write!(f, "No report available yet. Run a research request first.")
            }
        }
    }
}

impl std::error::Error for ResearchError {}

/// Parses the optional research-step input. Anything that is not a positive
/// integer is dropped, matching the permissive service contract.
pub fn parse_research_steps(value: &str) -> Option<u32> {
    match value.trim().parse::<u32>() {
        Ok(steps) if steps > 0 => Some(steps),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ConductRequest {
    topic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    research_steps: Option<u32>,
}

impl ConductRequest {
    pub fn new(topic: &str, research_steps: Option<u32>) -> Result<Self, ResearchError> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(ResearchError::MissingTopic);
        }

        Ok(Self {
            topic: topic.to_string(),
            research_steps: research_steps.filter(|steps| *steps > 0),
        })
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn research_steps(&self) -> Option<u32> {
        self.research_steps
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConductResponse {
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    #[allow(dead_code)]
    status: Option<String>,
}

impl ConductResponse {
    /// Treats the body as a tagged result: a reported error wins even when a
    /// summary is present or the transport succeeded.
    pub fn into_result(self) -> Result<String, ResearchError> {
        if let Some(error) = self.error {
            return Err(ResearchError::Application(error));
        }

        match self.summary {
            Some(summary) if !summary.is_empty() => Ok(summary),
            _ => Err(ResearchError::Application(
                "Research service returned an empty report".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceHealth {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key_status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ResearchClient {
    client: Client,
    endpoint: String,
}

impl ResearchClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self, BoxError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues one research request and resolves the tagged response. The
    /// topic is validated before anything touches the network.
    pub async fn conduct(
        &self,
        topic: &str,
        research_steps: Option<u32>,
    ) -> Result<String, ResearchError> {
        let request = ConductRequest::new(topic, research_steps)?;
        let url = format!("{}{}", self.endpoint, CONDUCT_PATH);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(request_error(status));
        }

        let body: ConductResponse = response
            .json()
            .await
            .map_err(|err| classify_body_error(err, "Unexpected response from research service"))?;

        body.into_result()
    }

    pub async fn health(&self) -> Result<ServiceHealth, ResearchError> {
        let url = format!("{}{}", self.endpoint, HEALTH_PATH);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(request_error(status));
        }

        response
            .json()
            .await
            .map_err(|err| classify_body_error(err, "Unexpected health response"))
    }
}

fn classify_transport_error(err: reqwest::Error) -> ResearchError {
    if err.is_timeout() {
        ResearchError::Timeout
    } else {
        ResearchError::Network(err.to_string())
    }
}

/// The timeout budget also covers reading the body, so a request that
/// stalls mid-response still surfaces as a timeout rather than a decode
/// failure.
fn classify_body_error(err: reqwest::Error, context: &str) -> ResearchError {
    if err.is_timeout() {
        ResearchError::Timeout
    } else {
        ResearchError::Application(format!("{}: {}", context, err))
    }
}

fn request_error(status: StatusCode) -> ResearchError {
    ResearchError::Request {
        status: status.as_u16(),
        reason: status
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_topics_before_any_request_exists() {
        assert_eq!(
            ConductRequest::new("", None).unwrap_err(),
            ResearchError::MissingTopic
        );
        assert_eq!(
            ConductRequest::new("   \t  ", Some(3)).unwrap_err(),
            ResearchError::MissingTopic
        );
    }

    #[test]
    fn trims_topic_and_serializes_camel_case() {
        let request = ConductRequest::new("  rust async runtimes  ", Some(4)).expect("request");
        assert_eq!(request.topic(), "rust async runtimes");

        let json = serde_json::to_value(&request).expect("json");
        assert_eq!(json["topic"], "rust async runtimes");
        assert_eq!(json["researchSteps"], 4);
    }

    #[test]
    fn omits_absent_or_non_positive_steps_from_payload() {
        let request = ConductRequest::new("quantum error correction", None).expect("request");
        let json = serde_json::to_value(&request).expect("json");
        assert!(json.get("researchSteps").is_none());

        let request = ConductRequest::new("quantum error correction", Some(0)).expect("request");
        let json = serde_json::to_value(&request).expect("json");
        assert!(json.get("researchSteps").is_none());
    }

    #[test]
    fn parses_only_positive_integer_steps() {
        assert_eq!(parse_research_steps(" 5 "), Some(5));
        assert_eq!(parse_research_steps("1"), Some(1));
        assert_eq!(parse_research_steps("0"), None);
        assert_eq!(parse_research_steps("-3"), None);
        assert_eq!(parse_research_steps("many"), None);
        assert_eq!(parse_research_steps(""), None);
        assert_eq!(parse_research_steps("2.5"), None);
    }

    #[test]
    fn summary_round_trips_exactly() {
        let body: ConductResponse =
            serde_json::from_str(r##"{"summary": "# Title\n\nBody", "status": "completed"}"##)
                .expect("parse");
        assert_eq!(body.into_result().expect("summary"), "# Title\n\nBody");
    }

    #[test]
    fn reported_error_wins_even_with_ok_transport() {
        let body: ConductResponse =
            serde_json::from_str(r#"{"error": "bad topic", "status": "failed"}"#).expect("parse");
        assert_eq!(
            body.into_result().unwrap_err(),
            ResearchError::Application("bad topic".to_string())
        );

        // A body carrying both fields is still treated as failed.
        let body: ConductResponse =
            serde_json::from_str(r##"{"summary": "# ok", "error": "bad topic"}"##).expect("parse");
        assert!(body.into_result().is_err());
    }

    #[test]
    fn empty_body_is_an_application_error() {
        let body: ConductResponse = serde_json::from_str("{}").expect("parse");
        assert!(matches!(
            body.into_result().unwrap_err(),
            ResearchError::Application(_)
        ));
    }

    #[test]
    fn request_errors_carry_the_status_code() {
        let error = request_error(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            error,
            ResearchError::Request {
                status: 500,
                reason: "Internal Server Error".to_string()
            }
        );
        assert!(error.to_string().contains("500"));
    }

    #[test]
    fn timeout_message_is_distinct_from_network_failures() {
        let timeout = ResearchError::Timeout.to_string();
        let network = ResearchError::Network("connection refused".to_string()).to_string();
        assert!(timeout.contains("narrowing the topic"));
        assert_ne!(timeout, network);
    }

    #[test]
    fn health_payload_parses_original_service_shape() {
        let health: ServiceHealth = serde_json::from_str(
            r#"{
                "status": "healthy",
                "timestamp": "2026-08-26",
                "provider": "openai",
                "model": "gpt-4o",
                "base_url": "https://api.openai.com/v1",
                "api_key_status": "configured"
            }"#,
        )
        .expect("parse");
        assert_eq!(health.status, "healthy");
        assert_eq!(health.provider.as_deref(), Some("openai"));
    }

    #[tokio::test]
    async fn stalled_body_after_ok_status_surfaces_as_timeout() {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        let addr = listener.local_addr().expect("addr");

        // Answers with valid headers, then holds the body open past the
        // client's budget.
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 2048];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"summary\": \"",
                );
                let _ = stream.flush();
                std::thread::sleep(Duration::from_secs(2));
            }
        });

        let client = ResearchClient::new(&format!("http://{}", addr), Duration::from_millis(300))
            .expect("client");
        let err = client.conduct("stalled topic", None).await.unwrap_err();
        assert_eq!(err, ResearchError::Timeout);
    }

    #[test]
    fn client_normalizes_trailing_slash_in_endpoint() {
        let client =
            ResearchClient::new("http://localhost:8080/", Duration::from_secs(1)).expect("client");
        assert_eq!(client.endpoint(), "http://localhost:8080");
    }
}
