// src/core/net.rs
// Blocking HTTPS GET with timeout and a small retry budget.

use std::{thread, time::Duration};

use reqwest::{StatusCode, blocking::Client};

use crate::config::consts::{HTTP_RETRIES, HTTP_TIMEOUT_SECS, REQUEST_PAUSE_MS, USER_AGENT};
use crate::ingest::IngestError;

pub struct HttpClient {
    inner: Client,
    retries: u32,
}

impl HttpClient {
    pub fn new() -> Result<Self, IngestError> {
        let inner = Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { inner, retries: HTTP_RETRIES })
    }

    /// GET `url` and return the body.
    ///
    /// Transport errors and 5xx/429 are retried with a doubling pause;
    /// any other non-2xx status fails at once.
    pub fn get(&self, url: &str) -> Result<String, IngestError> {
        let mut pause = REQUEST_PAUSE_MS;
        let mut attempt = 0u32;
        loop {
            match self.inner.get(url).send() {
                Ok(resp) => {
                    let status = resp.status();
                    if status.is_success() {
                        return Ok(resp.text()?);
                    }
                    if !is_retryable(status) || attempt >= self.retries {
                        return Err(IngestError::Http { url: s!(url), status: status.as_u16() });
                    }
                    logd!("GET {url}: HTTP {} (attempt {})", status.as_u16(), attempt + 1);
                }
                Err(e) => {
                    if attempt >= self.retries {
                        return Err(e.into());
                    }
                    logd!("GET {url}: {e} (attempt {})", attempt + 1);
                }
            }
            thread::sleep(Duration::from_millis(pause));
            pause *= 2;
            attempt += 1;
        }
    }
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}
