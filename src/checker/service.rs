use std::sync::Arc;

use reqwest::{header, StatusCode};
use thiserror::Error;
use tracing::debug;

use super::config::Configuration;
use super::printer::Printer;
use super::resources::StatusReport;
use super::severity::Severity;

/// The reasons a status request can fail before yielding a report.
#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build a http client: {err:?}")]
    ClientBuildingError { err: Arc<reqwest::Error> },

    #[error("Failed to get a response from the status endpoint: {err:?}")]
    ResponseError { err: Arc<reqwest::Error> },

    #[error("Status endpoint returned a non-success code: \"{code}\"")]
    UnsuccessfulResponse { code: StatusCode },

    #[error("Failed to deserialize the status report: \"{err:?}\" from the response: \"{data}\"")]
    ParseReportError {
        data: String,
        err: Arc<serde_json::Error>,
    },
}

/// The probe itself: fetches the status report and prints the outcome.
pub struct Service<P: Printer> {
    pub config: Configuration,
    pub console: P,
}

impl<P: Printer> Service<P> {
    /// Runs the check once and reports its outcome on the console.
    ///
    /// The first output line is the check result in the plugin format, either
    /// `{code}: {msg}` from a fetched report or a `CRITICAL: Unable to get
    /// status, {reason}` line when no report could be fetched. Any failure
    /// degrades to [`Severity::Critical`].
    pub async fn run_check(&self) -> Severity {
        match self.fetch_status_report().await {
            Ok(report) => {
                self.console
                    .println(&format!("{}: {}", report.code, report.msg));

                Severity::from_status_code(&report.code)
            }
            Err(err) => {
                self.console
                    .println(&format!("CRITICAL: Unable to get status, {err}"));

                Severity::Critical
            }
        }
    }

    async fn fetch_status_report(&self) -> Result<StatusReport, Error> {
        debug!("Querying {} for status", self.config.status_url);

        let client = reqwest::Client::builder()
            .timeout(self.config.timeout)
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        let response = client
            .get(self.config.status_url.clone())
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| Error::ResponseError { err: e.into() })?;

        if !response.status().is_success() {
            return Err(Error::UnsuccessfulResponse {
                code: response.status(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::ResponseError { err: e.into() })?;

        debug!("Full status response: {body}");

        serde_json::from_str(&body).map_err(|err| Error::ParseReportError {
            data: body,
            err: err.into(),
        })
    }
}
