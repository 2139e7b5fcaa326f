use crate::config::ProbeConfig;
use crate::document::LinkStatus;
use reqwest::Client;
use std::time::Duration;

/// Builds the HTTP client shared by all probe calls
///
/// # Arguments
///
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &ProbeConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Probes a single URL for reachability.
///
/// Exactly one outbound GET per invocation and no retries: a single attempt
/// is authoritative, so a flaky target is reported broken. Redirects follow
/// the transport's default policy. A 2xx or 3xx answer within the time
/// budget is `Working`; every error status and every transport-level failure
/// (timeout, DNS, connection refused, TLS) is `Broken`.
pub async fn probe_url(client: &Client, url: &str) -> LinkStatus {
    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if status.is_success() || status.is_redirection() {
                LinkStatus::Working
            } else {
                tracing::debug!("Probe of {} answered HTTP {}", url, status.as_u16());
                LinkStatus::Broken
            }
        }
        Err(e) => {
            // Classify for the logs; every transport failure is Broken
            if e.is_timeout() {
                tracing::debug!("Probe of {} timed out", url);
            } else if e.is_connect() {
                tracing::debug!("Probe of {} could not connect: {}", url, e);
            } else {
                tracing::debug!("Probe of {} failed: {}", url, e);
            }
            LinkStatus::Broken
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config() -> ProbeConfig {
        ProbeConfig {
            timeout_secs: 1,
            connect_timeout_secs: 1,
            ..ProbeConfig::default()
        }
    }

    #[test]
    fn test_build_http_client() {
        let client = build_http_client(&ProbeConfig::default());
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_reachable_url_is_working() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ok"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let status = probe_url(&client, &format!("{}/ok", server.uri())).await;
        assert_eq!(status, LinkStatus::Working);
    }

    #[tokio::test]
    async fn test_error_status_is_broken() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let status = probe_url(&client, &format!("{}/missing", server.uri())).await;
        assert_eq!(status, LinkStatus::Broken);
    }

    #[tokio::test]
    async fn test_slow_response_is_broken() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/slow"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let client = build_http_client(&test_config()).unwrap();
        let status = probe_url(&client, &format!("{}/slow", server.uri())).await;
        assert_eq!(status, LinkStatus::Broken);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_broken() {
        // Bind a listener to reserve a port, then drop it so nothing answers
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = build_http_client(&test_config()).unwrap();
        let status = probe_url(&client, &format!("http://127.0.0.1:{}/", port)).await;
        assert_eq!(status, LinkStatus::Broken);
    }
}
