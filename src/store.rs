//! JSON file record store.
//!
//! The whole data set lives in one pretty-printed JSON file and is loaded
//! wholesale into memory at startup. Every mutation rewrites the file.
//! There are no transactions and no indexes; a household's lifetime of
//! manual entries stays small enough that linear scans are fine.
//!
//! The store itself is synchronous; the server wraps it in
//! `Arc<RwLock<FinanceStore>>` so concurrent request handlers take a
//! consistent read snapshot and writes are serialized (single-writer
//! discipline, which prevents lost updates between two near-simultaneous
//! entry submissions).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::{BalanceSnapshot, FinanceData, Job, WorkLog};

/// In-memory finance data backed by a JSON file.
#[derive(Debug)]
pub struct FinanceStore {
    data: FinanceData,
    next_id: i32,
    data_file: PathBuf,
}

impl FinanceStore {
    /// Loads the store from `data_file`, or starts empty if the file does
    /// not exist yet.
    ///
    /// Integer ids are assigned from `max(existing) + 1`, counting both
    /// work logs and balance snapshots so ids stay unique across kinds.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StoreIo`] if the file exists but cannot be
    /// read, or [`EngineError::StoreParse`] if it is not valid finance
    /// data. The legacy server silently started empty on a corrupt file;
    /// this one refuses, so a typo'd edit cannot wipe years of history.
    pub fn load<P: AsRef<Path>>(data_file: P) -> EngineResult<Self> {
        let data_file = data_file.as_ref().to_path_buf();
        let path_str = data_file.display().to_string();

        let data = if data_file.exists() {
            let content = fs::read_to_string(&data_file).map_err(|e| EngineError::StoreIo {
                path: path_str.clone(),
                message: e.to_string(),
            })?;
            serde_json::from_str(&content).map_err(|e| EngineError::StoreParse {
                path: path_str,
                message: e.to_string(),
            })?
        } else {
            FinanceData::default()
        };

        let next_id = Self::max_id(&data) + 1;

        Ok(Self {
            data,
            next_id,
            data_file,
        })
    }

    fn max_id(data: &FinanceData) -> i32 {
        let logs = data.work_logs.iter().map(|l| l.id).max().unwrap_or(0);
        let snaps = data.balance_snapshots.iter().map(|s| s.id).max().unwrap_or(0);
        logs.max(snaps)
    }

    /// Returns the full data set.
    pub fn data(&self) -> &FinanceData {
        &self.data
    }

    /// Returns the work log history.
    pub fn work_logs(&self) -> &[WorkLog] {
        &self.data.work_logs
    }

    /// Returns the balance history.
    pub fn balance_snapshots(&self) -> &[BalanceSnapshot] {
        &self.data.balance_snapshots
    }

    /// Returns the known jobs.
    pub fn jobs(&self) -> &[Job] {
        &self.data.jobs
    }

    /// Adds a work log, assigning the next id, and persists.
    pub fn add_work_log(&mut self, mut log: WorkLog) -> EngineResult<WorkLog> {
        log.id = self.take_next_id();
        self.data.work_logs.push(log.clone());
        self.data.work_logs.sort_by(|a, b| a.date.cmp(&b.date));
        self.save()?;
        Ok(log)
    }

    /// Replaces the work log with `id` in place, carrying the id forward.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no work log has that id.
    pub fn replace_work_log(&mut self, id: i32, mut log: WorkLog) -> EngineResult<WorkLog> {
        let slot = self
            .data
            .work_logs
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(EngineError::RecordNotFound {
                kind: "work log",
                id: id.to_string(),
            })?;
        log.id = id;
        *slot = log.clone();
        self.data.work_logs.sort_by(|a, b| a.date.cmp(&b.date));
        self.save()?;
        Ok(log)
    }

    /// Deletes the work log with `id` and persists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no work log has that id.
    pub fn delete_work_log(&mut self, id: i32) -> EngineResult<()> {
        let before = self.data.work_logs.len();
        self.data.work_logs.retain(|l| l.id != id);
        if self.data.work_logs.len() == before {
            return Err(EngineError::RecordNotFound {
                kind: "work log",
                id: id.to_string(),
            });
        }
        self.save()
    }

    /// Adds a balance snapshot, assigning the next id, and persists.
    pub fn add_snapshot(&mut self, mut snapshot: BalanceSnapshot) -> EngineResult<BalanceSnapshot> {
        snapshot.id = self.take_next_id();
        self.data.balance_snapshots.push(snapshot.clone());
        self.data.balance_snapshots.sort_by(|a, b| a.date.cmp(&b.date));
        self.save()?;
        Ok(snapshot)
    }

    /// Replaces the snapshot with `id` in place, carrying the id forward.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no snapshot has that id.
    pub fn replace_snapshot(
        &mut self,
        id: i32,
        mut snapshot: BalanceSnapshot,
    ) -> EngineResult<BalanceSnapshot> {
        let slot = self
            .data
            .balance_snapshots
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(EngineError::RecordNotFound {
                kind: "balance snapshot",
                id: id.to_string(),
            })?;
        snapshot.id = id;
        *slot = snapshot.clone();
        self.data.balance_snapshots.sort_by(|a, b| a.date.cmp(&b.date));
        self.save()?;
        Ok(snapshot)
    }

    /// Deletes the snapshot with `id` and persists.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no snapshot has that id.
    pub fn delete_snapshot(&mut self, id: i32) -> EngineResult<()> {
        let before = self.data.balance_snapshots.len();
        self.data.balance_snapshots.retain(|s| s.id != id);
        if self.data.balance_snapshots.len() == before {
            return Err(EngineError::RecordNotFound {
                kind: "balance snapshot",
                id: id.to_string(),
            });
        }
        self.save()
    }

    /// Inserts or updates a job by its string id, and persists.
    pub fn upsert_job(&mut self, job: Job) -> EngineResult<Job> {
        match self.data.jobs.iter_mut().find(|j| j.id == job.id) {
            Some(slot) => *slot = job.clone(),
            None => self.data.jobs.push(job.clone()),
        }
        self.save()?;
        Ok(job)
    }

    /// Deletes a job by id and persists.
    ///
    /// Work logs referencing the job are left untouched; there are no
    /// cascading deletes.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RecordNotFound`] if no job has that id.
    pub fn delete_job(&mut self, id: &str) -> EngineResult<()> {
        let before = self.data.jobs.len();
        self.data.jobs.retain(|j| j.id != id);
        if self.data.jobs.len() == before {
            return Err(EngineError::RecordNotFound {
                kind: "job",
                id: id.to_string(),
            });
        }
        self.save()
    }

    fn take_next_id(&mut self) -> i32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn save(&self) -> EngineResult<()> {
        let path_str = self.data_file.display().to_string();
        let content = serde_json::to_string_pretty(&self.data).map_err(|e| {
            EngineError::StoreParse {
                path: path_str.clone(),
                message: e.to_string(),
            }
        })?;
        fs::write(&self.data_file, content).map_err(|e| EngineError::StoreIo {
            path: path_str,
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct TempFile(PathBuf);

    impl TempFile {
        fn new() -> Self {
            Self(std::env::temp_dir().join(format!("finance-store-{}.json", Uuid::new_v4())))
        }
    }

    impl Drop for TempFile {
        fn drop(&mut self) {
            let _ = fs::remove_file(&self.0);
        }
    }

    fn work_log(date: &str, hours: f64) -> WorkLog {
        WorkLog {
            id: 0,
            date: date.to_string(),
            job_id: "grocery".to_string(),
            hours,
            pay_rate: 10.0,
            tax_rate: 0.25,
            pay_cashed: false,
        }
    }

    fn snapshot(date: &str, checking: f64) -> BalanceSnapshot {
        BalanceSnapshot {
            id: 0,
            date: date.to_string(),
            checking,
            credit_available: 500.0,
            credit_limit: 1000.0,
            personal_debt: 0.0,
            note: String::new(),
        }
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let file = TempFile::new();
        let store = FinanceStore::load(&file.0).unwrap();
        assert!(store.work_logs().is_empty());
        assert!(store.jobs().is_empty());
    }

    #[test]
    fn test_ids_are_assigned_sequentially() {
        let file = TempFile::new();
        let mut store = FinanceStore::load(&file.0).unwrap();
        let a = store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
        let b = store.add_snapshot(snapshot("2025-01-06", 100.0)).unwrap();
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn test_data_survives_reload() {
        let file = TempFile::new();
        {
            let mut store = FinanceStore::load(&file.0).unwrap();
            store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
            store
                .upsert_job(Job {
                    id: "grocery".to_string(),
                    name: "Grocery Store".to_string(),
                })
                .unwrap();
        }
        let store = FinanceStore::load(&file.0).unwrap();
        assert_eq!(store.work_logs().len(), 1);
        assert_eq!(store.jobs().len(), 1);
    }

    #[test]
    fn test_next_id_continues_after_reload() {
        let file = TempFile::new();
        {
            let mut store = FinanceStore::load(&file.0).unwrap();
            store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
            store.add_work_log(work_log("2025-01-07", 8.0)).unwrap();
        }
        let mut store = FinanceStore::load(&file.0).unwrap();
        let c = store.add_work_log(work_log("2025-01-08", 8.0)).unwrap();
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_work_logs_kept_sorted_by_date() {
        let file = TempFile::new();
        let mut store = FinanceStore::load(&file.0).unwrap();
        store.add_work_log(work_log("2025-01-08", 8.0)).unwrap();
        store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
        let dates: Vec<&str> = store.work_logs().iter().map(|l| l.date.as_str()).collect();
        assert_eq!(dates, vec!["2025-01-06", "2025-01-08"]);
    }

    #[test]
    fn test_replace_keeps_id() {
        let file = TempFile::new();
        let mut store = FinanceStore::load(&file.0).unwrap();
        let original = store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
        let replaced = store
            .replace_work_log(original.id, work_log("2025-01-06", 6.0))
            .unwrap();
        assert_eq!(replaced.id, original.id);
        assert_eq!(store.work_logs()[0].hours, 6.0);
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let file = TempFile::new();
        let mut store = FinanceStore::load(&file.0).unwrap();
        let err = store.delete_work_log(99).unwrap_err();
        assert!(matches!(err, EngineError::RecordNotFound { .. }));
    }

    #[test]
    fn test_deleting_job_leaves_work_logs() {
        let file = TempFile::new();
        let mut store = FinanceStore::load(&file.0).unwrap();
        store
            .upsert_job(Job {
                id: "grocery".to_string(),
                name: "Grocery Store".to_string(),
            })
            .unwrap();
        store.add_work_log(work_log("2025-01-06", 8.0)).unwrap();
        store.delete_job("grocery").unwrap();
        assert!(store.jobs().is_empty());
        assert_eq!(store.work_logs().len(), 1);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let file = TempFile::new();
        fs::write(&file.0, "{ not json").unwrap();
        let err = FinanceStore::load(&file.0).unwrap_err();
        assert!(matches!(err, EngineError::StoreParse { .. }));
    }
}
