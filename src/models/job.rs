//! Job model.

use serde::{Deserialize, Serialize};

/// A pay source that work logs reference by id.
///
/// Jobs are created and edited out-of-band of the pay engine; the engine
/// only uses the id to partition work logs. Deleting a job does not
/// cascade to its work logs.
///
/// # Example
///
/// ```
/// use finance_display::models::Job;
///
/// let job = Job {
///     id: "grocery".to_string(),
///     name: "Grocery Store".to_string(),
/// };
/// assert_eq!(job.id, "grocery");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique identifier for the job (stable, human-chosen).
    pub id: String,
    /// Display name for the job.
    pub name: String,
}
