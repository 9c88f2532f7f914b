use serde::{Deserialize, Serialize};

/// Raw report selection as received from a frontend.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ReportParams {
    pub window: Option<String>,
    pub now: Option<String>,
}
