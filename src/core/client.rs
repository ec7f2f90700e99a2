//! Remote access to the hierarchical version resource.
//!
//! [`LevelSource`] is the seam between the selector and the network. The
//! production implementation, [`HttpLevelSource`], issues one `GET` per path and
//! decodes the body into a [`LevelResponse`]. When the API answers `401` it
//! refreshes the session once through the refresh endpoint and replays the
//! request; it never retries anything else.

use crate::core::config::SelectorConfig;
use crate::core::error::{Result, SelectorError};
use crate::core::path::SelectionPath;
use crate::core::response::LevelResponse;
use reqwest::blocking::Client;
use reqwest::{StatusCode, Url};
use std::time::Duration;

/// Anything that can answer "what comes after this path?".
pub trait LevelSource: Send + Sync {
    /// Route prefix under which paths are resolved, e.g. `/game-versions`.
    fn resource_root(&self) -> &str;

    fn fetch(&self, path: &SelectionPath) -> Result<LevelResponse>;
}

pub struct HttpLevelSource {
    client: Client,
    base_url: Url,
    resource_root: String,
    refresh_path: String,
}

impl HttpLevelSource {
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        let base_url = Url::parse(&config.api_base_url)
            .map_err(|e| SelectorError::invalid_api_url(&config.api_base_url, e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(SelectorError::invalid_api_url(
                &config.api_base_url,
                "URL cannot be used as a base",
            ));
        }

        // Session cookies set by the refresh endpoint must ride along on the retry.
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("version-selector/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url,
            resource_root: config.resource_root.clone(),
            refresh_path: config.refresh_path.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url_for<'a, I>(&self, prefix: &str, segments: I) -> Result<Url>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|_| {
                SelectorError::invalid_api_url(self.base_url.as_str(), "URL cannot be used as a base")
            })?;
            parts.pop_if_empty();
            parts.extend(prefix.split('/').filter(|s| !s.is_empty()));
            parts.extend(segments);
        }
        Ok(url)
    }

    fn refresh_session(&self, route: &str) -> Result<()> {
        let url = self.url_for(&self.refresh_path, std::iter::empty())?;
        log::debug!("POST {url}");

        let response = self.client.post(url).send()?;
        if response.status().is_success() {
            log::debug!("Session refreshed");
            Ok(())
        } else {
            log::warn!("Session refresh failed with status {}", response.status());
            Err(SelectorError::unauthorized(route))
        }
    }
}

impl LevelSource for HttpLevelSource {
    fn resource_root(&self) -> &str {
        &self.resource_root
    }

    fn fetch(&self, path: &SelectionPath) -> Result<LevelResponse> {
        let route = path.route(&self.resource_root);
        let url = self.url_for(
            &self.resource_root,
            path.segments().iter().map(String::as_str),
        )?;
        log::debug!("GET {url}");

        let mut response = self.client.get(url.clone()).send()?;

        if response.status() == StatusCode::UNAUTHORIZED {
            log::debug!("{route} answered 401, refreshing session");
            self.refresh_session(&route)?;
            response = self.client.get(url).send()?;
            if response.status() == StatusCode::UNAUTHORIZED {
                return Err(SelectorError::unauthorized(route));
            }
        }

        let status = response.status();
        if !status.is_success() {
            return Err(SelectorError::http_status(route, status.as_u16()));
        }

        let body = response.bytes()?;
        LevelResponse::decode(&route, &body)
    }
}
