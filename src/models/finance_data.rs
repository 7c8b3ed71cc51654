//! The bundled finance data set.

use serde::{Deserialize, Serialize};

use super::{BalanceSnapshot, Job, WorkLog};

/// All finance data bundled together.
///
/// This is both the on-disk shape of the data file and the response body
/// of the "list everything" API the kiosk polls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceData {
    /// Known pay sources.
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Work session history.
    #[serde(default)]
    pub work_logs: Vec<WorkLog>,
    /// Balance history.
    #[serde(default)]
    pub balance_snapshots: Vec<BalanceSnapshot>,
}
