use std::time::Duration;

use futures_util::StreamExt;
use reqwest::header::{CONTENT_SECURITY_POLICY, CONTENT_TYPE, X_FRAME_OPTIONS};
use scraper::{Html, Selector};

use crate::{PageInfo, ProbeError};

#[derive(Debug, Clone)]
pub struct ProbeSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Reading stops once this many bytes have arrived; the prefix is
    /// enough to extract the document title.
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 2 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
            ],
        }
    }
}

#[async_trait::async_trait]
pub trait Probe: Send + Sync {
    async fn probe(&self, url: &str) -> Result<PageInfo, ProbeError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestProbe {
    settings: ProbeSettings,
}

impl ReqwestProbe {
    pub fn new(settings: ProbeSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, ProbeError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| ProbeError::Network(err.to_string()))
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl Probe for ReqwestProbe {
    async fn probe(&self, url: &str) -> Result<PageInfo, ProbeError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| ProbeError::InvalidUrl(err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::HttpStatus(status.as_u16()));
        }

        // Sites that refuse embedding keep their readiness to themselves.
        if response.headers().contains_key(X_FRAME_OPTIONS) {
            return Err(ProbeError::EmbeddingRefused {
                header: "X-Frame-Options".to_string(),
            });
        }
        let refused_by_csp = response
            .headers()
            .get(CONTENT_SECURITY_POLICY)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains("frame-ancestors"));
        if refused_by_csp {
            return Err(ProbeError::EmbeddingRefused {
                header: "Content-Security-Policy".to_string(),
            });
        }

        let final_url = response.url().to_string();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(ProbeError::UnsupportedContentType {
                    content_type: ct.to_string(),
                });
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            bytes.extend_from_slice(&chunk);
            if bytes.len() as u64 >= self.settings.max_bytes {
                bytes.truncate(self.settings.max_bytes as usize);
                break;
            }
        }

        let title = extract_title(&String::from_utf8_lossy(&bytes));

        Ok(PageInfo {
            final_url,
            title,
            content_type,
            byte_len: bytes.len() as u64,
        })
    }
}

/// Pulls the trimmed `<title>` text out of an HTML document, if present.
pub fn extract_title(html: &str) -> Option<String> {
    // The selector literal is valid; parse cannot fail.
    let selector = Selector::parse("title").ok()?;
    let document = Html::parse_document(html);
    let element = document.select(&selector).next()?;
    let title = element.text().collect::<String>().trim().to_string();
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ProbeError {
    if err.is_timeout() {
        return ProbeError::Timeout;
    }
    ProbeError::Network(err.to_string())
}
