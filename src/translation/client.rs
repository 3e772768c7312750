use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;
use url::form_urlencoded;

use super::response::parse_translation;
use super::token::compute_token;
use super::transport::{Transport, TransportError};

pub const DEFAULT_ENDPOINT: &str = "https://translate.google.com.tw";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 6.1; WOW64; rv:23.0) Gecko/20100101 Firefox/23.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const TRANSLATE_PATH: &str = "translate_a/single";

/// Response sections requested through repeated `dt` parameters.
const DATA_TYPES: &[&str] = &["at", "bd", "ex", "ld", "md", "qca", "rw", "rm", "ss", "t"];

/// Format and version flags sent with every request.
const FIXED_PARAMS: &[(&str, &str)] = &[
    ("ie", "UTF-8"),
    ("oe", "UTF-8"),
    ("clearbtn", "1"),
    ("otf", "1"),
    ("pc", "1"),
    ("srcrom", "0"),
    ("ssel", "0"),
    ("tsel", "0"),
    ("kc", "1"),
];

/// HTTP transport that signs each request with the text's token.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    base_url: Url,
}

impl TranslationClient {
    pub fn new(
        endpoint: &str,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let endpoint = endpoint.trim_end_matches('/').to_string();
        let base_url = Url::parse(&format!("{endpoint}/{TRANSLATE_PATH}")).map_err(|e| {
            TransportError::InvalidEndpoint {
                endpoint: endpoint.clone(),
                reason: e.to_string(),
            }
        })?;

        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            base_url,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Builds the signed request URL for `text`.
    pub fn request_url(&self, text: &str, source_language: &str, target_language: &str) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut query = url.query_pairs_mut();
            query
                .append_pair("client", "t")
                .append_pair("sl", source_language)
                .append_pair("tl", target_language);
            for data_type in DATA_TYPES {
                query.append_pair("dt", data_type);
            }
            for (key, value) in FIXED_PARAMS {
                query.append_pair(key, value);
            }
            query.append_pair("tk", &compute_token(text));
        }
        url
    }

    /// Posts `text` for translation and returns the unparsed response body.
    pub async fn translate_raw(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        let url = self.request_url(text, source_language, target_language);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded;charset=utf-8")
            .body(form_body(text))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::from_status(status.as_u16(), body));
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl Transport for TranslationClient {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TransportError> {
        let body = self
            .translate_raw(text, source_language, target_language)
            .await?;
        parse_translation(&body)
    }
}

fn form_body(text: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("q", text)
        .finish()
}
