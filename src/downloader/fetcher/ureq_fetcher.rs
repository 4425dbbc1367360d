use std::io::Read;

use ureq::{Agent, AgentBuilder};

use super::{FileDownloader, Response};
use crate::config::FetchConfig;

/// Blocking HTTP fetcher; one request at a time, bounded by the configured timeouts.
pub struct UReqFetcher {
    agent: Agent,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let response = self.agent.get(url).call();

        match response {
            Ok(response) => {
                let mime = response.header("Content-Type").map(str::to_string);

                let mut body = Vec::new();

                if let Err(err) = response.into_reader().read_to_end(&mut body) {
                    tracing::debug!(url, error = %err, "failed reading response body");
                    return Response::invalid_body();
                }

                Response::ok(body, mime)
            }

            Err(ureq::Error::Status(404, _)) => Response::not_found(),

            Err(ureq::Error::Status(code, _)) => Response::network_error(format!("HTTP {}", code)),

            Err(err) => Response::network_error(err.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        Self::with_config(&FetchConfig::default())
    }

    pub fn with_config(config: &FetchConfig) -> Self {
        let agent = AgentBuilder::new()
            .timeout_connect(config.timeout_connect)
            .timeout_read(config.timeout_read)
            .user_agent(&config.user_agent)
            .build();

        UReqFetcher { agent }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
