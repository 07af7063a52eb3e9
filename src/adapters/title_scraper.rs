use crate::domain::ports::ProductIdentifier;
use crate::utils::error::{EstimateError, Result};
use crate::utils::validation::validate_url;
use regex::{Captures, Regex};
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 5;
pub const FALLBACK_NAME: &str = "product";

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title\s*>").expect("title regex"));
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z]+);").expect("entity regex"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace regex"));

/// Names a product from the `<title>` of its web page.
pub struct TitleScraper {
    client: Client,
    url: Url,
}

impl TitleScraper {
    pub fn new(url: &str, timeout: Duration, user_agent: Option<&str>) -> Result<Self> {
        let url = validate_url("url", url)?;

        let mut builder = Client::builder().timeout(timeout);
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            client: builder.build()?,
            url,
        })
    }

    pub fn with_default_timeout(url: &str) -> Result<Self> {
        Self::new(url, Duration::from_secs(DEFAULT_TIMEOUT_SECONDS), None)
    }
}

fn decode_entity(caps: &Captures) -> String {
    let entity = &caps[1];
    let decoded = match entity {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" => Some('\''),
        "nbsp" => Some(' '),
        _ => {
            let code = if let Some(hex) = entity.strip_prefix("#x").or(entity.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()
            } else {
                entity.strip_prefix('#').and_then(|dec| dec.parse().ok())
            };
            code.and_then(char::from_u32)
        }
    };
    decoded.map_or_else(|| caps[0].to_string(), String::from)
}

/// Lowercased, whitespace-collapsed text of the first `<title>` element, if it has any text.
pub fn extract_title(html: &str) -> Option<String> {
    let raw = TITLE_RE.captures(html)?.get(1)?.as_str();
    let decoded = ENTITY_RE.replace_all(raw, decode_entity);
    let collapsed = WHITESPACE_RE.replace_all(decoded.trim(), " ");

    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.to_lowercase())
    }
}

#[async_trait::async_trait]
impl ProductIdentifier for TitleScraper {
    async fn identify(&self) -> Result<String> {
        tracing::debug!("Fetching product page: {}", self.url);
        let response = self.client.get(self.url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Product page response status: {}", status);
        if !status.is_success() {
            return Err(EstimateError::IdentificationError {
                source_ref: self.source_ref(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response.text().await?;
        match extract_title(&body) {
            Some(title) => Ok(title),
            None => {
                tracing::warn!("No title found on {}, using '{}'", self.url, FALLBACK_NAME);
                Ok(FALLBACK_NAME.to_string())
            }
        }
    }

    fn source_ref(&self) -> String {
        self.url.to_string()
    }
}
