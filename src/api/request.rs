//! Request types for the finance display API.
//!
//! Creation and edit requests are the stored records minus the id, which
//! the store assigns (or, for edits, carries forward). Validation happens
//! here at the boundary, and rejects rather than clamps: a negative hours
//! entry is a typo the user should see immediately, not a figure to guess
//! a correction for.

use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::error::{EngineError, EngineResult};
use crate::models::{BalanceSnapshot, WorkLog};

/// Request body for creating or replacing a work log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWorkLog {
    /// The session date as `YYYY-MM-DD`.
    pub date: String,
    /// The job the session was worked for.
    pub job_id: String,
    /// Hours worked.
    pub hours: f64,
    /// Pay rate in dollars per hour.
    pub pay_rate: f64,
    /// Flat withholding rate.
    pub tax_rate: f64,
    /// Pay-period-closed signal.
    #[serde(default)]
    pub pay_cashed: bool,
}

impl NewWorkLog {
    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for a malformed date and
    /// [`EngineError::InvalidWorkLog`] for a negative `hours` or
    /// `payRate`, or a `taxRate` outside `[0, 1)`.
    pub fn validate(&self) -> EngineResult<()> {
        calendar::parse_date(&self.date)?;
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(EngineError::InvalidWorkLog {
                field: "hours".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        if !self.pay_rate.is_finite() || self.pay_rate < 0.0 {
            return Err(EngineError::InvalidWorkLog {
                field: "payRate".to_string(),
                message: "must be a non-negative number".to_string(),
            });
        }
        if !self.tax_rate.is_finite() || self.tax_rate < 0.0 || self.tax_rate >= 1.0 {
            return Err(EngineError::InvalidWorkLog {
                field: "taxRate".to_string(),
                message: "must be at least 0 and below 1".to_string(),
            });
        }
        Ok(())
    }
}

impl From<NewWorkLog> for WorkLog {
    fn from(req: NewWorkLog) -> Self {
        WorkLog {
            // Placeholder; the store assigns the real id.
            id: 0,
            date: req.date,
            job_id: req.job_id,
            hours: req.hours,
            pay_rate: req.pay_rate,
            tax_rate: req.tax_rate,
            pay_cashed: req.pay_cashed,
        }
    }
}

/// Request body for creating or replacing a balance snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBalanceSnapshot {
    /// The snapshot date as `YYYY-MM-DD`.
    pub date: String,
    /// Checking account balance.
    pub checking: f64,
    /// Available credit.
    pub credit_available: f64,
    /// Total credit limit.
    pub credit_limit: f64,
    /// Personal debt.
    pub personal_debt: f64,
    /// Chart annotation text.
    #[serde(default)]
    pub note: String,
}

impl NewBalanceSnapshot {
    /// Validates the request fields.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidDate`] for a malformed date and
    /// [`EngineError::InvalidSnapshot`] for non-finite amounts.
    pub fn validate(&self) -> EngineResult<()> {
        calendar::parse_date(&self.date)?;
        for (field, value) in [
            ("checking", self.checking),
            ("creditAvailable", self.credit_available),
            ("creditLimit", self.credit_limit),
            ("personalDebt", self.personal_debt),
        ] {
            if !value.is_finite() {
                return Err(EngineError::InvalidSnapshot {
                    field: field.to_string(),
                    message: "must be a finite number".to_string(),
                });
            }
        }
        Ok(())
    }
}

impl From<NewBalanceSnapshot> for BalanceSnapshot {
    fn from(req: NewBalanceSnapshot) -> Self {
        BalanceSnapshot {
            id: 0,
            date: req.date,
            checking: req.checking,
            credit_available: req.credit_available,
            credit_limit: req.credit_limit,
            personal_debt: req.personal_debt,
            note: req.note,
        }
    }
}
