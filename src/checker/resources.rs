//! The status report served by the notebooks endpoint.

use serde::{Deserialize, Serialize};

/// The JSON payload of the status resource.
///
/// ```json
/// {
///   "code": "OK",
///   "msg": "all systems operational"
/// }
/// ```
///
/// `code` is mandatory; a report without a `msg` is read as having an empty
/// one.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub code: String,
    #[serde(default)]
    pub msg: String,
}
