use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default port for the https status endpoint.
pub const DEFAULT_PORT: u16 = 443;

/// Default path of the status resource, relative to the endpoint base URL.
pub const DEFAULT_STATUS_PATH: &str = "services/status/";

/// Default timeout for the whole status request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Probe options as collected from the command line.
///
/// Options do not need to be valid: they are turned into a checked
/// [`Configuration`] before any request is made.
#[derive(Debug, Clone)]
pub struct Options {
    pub url: Option<String>,
    pub host: Option<String>,
    pub port: u16,
    pub status_path: String,
    pub timeout: u64,
}

/// Validated configuration: the resolved status URL and the request timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub status_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("missing url or host to check")]
    MissingCheckTarget,

    #[error("invalid check URL: {err}")]
    InvalidUrl { err: url::ParseError },
}

impl TryFrom<Options> for Configuration {
    type Error = Error;

    fn try_from(options: Options) -> Result<Self, Self::Error> {
        let base = base_url(&options)?;

        let base = Url::parse(&base).map_err(|err| Error::InvalidUrl { err })?;

        let status_url = base
            .join(&options.status_path)
            .map_err(|err| Error::InvalidUrl { err })?;

        Ok(Self {
            status_url,
            timeout: Duration::from_secs(options.timeout),
        })
    }
}

/// The base URL the status path is resolved against.
///
/// An explicit `url` wins over `host` and `port`; empty strings count as not
/// given. The base always ends with `/` so that the status path extends it
/// instead of replacing its last segment.
fn base_url(options: &Options) -> Result<String, Error> {
    let url = options.url.as_deref().filter(|url| !url.is_empty());
    let host = options.host.as_deref().filter(|host| !host.is_empty());

    let mut base = match (url, host) {
        (Some(url), _) => url.to_string(),
        (None, Some(host)) => format!("https://{host}:{}/", options.port),
        (None, None) => return Err(Error::MissingCheckTarget),
    };

    if !base.ends_with('/') {
        base.push('/');
    }

    Ok(base)
}
