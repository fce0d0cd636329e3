use crate::utils::error::{HrError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Upper bound on the configurable minimum wage.
pub const MINIMUM_WAGE_CAP: f64 = 3000.0;

const DEFAULT_MINIMUM_WAGE: f64 = 1000.0;

/// Payroll policy shared by all employees. Held by the caller and passed
/// into every salary-validating operation, so tests can isolate threshold
/// changes per case instead of mutating global state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSettings {
    minimum_wage: f64,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            minimum_wage: DEFAULT_MINIMUM_WAGE,
        }
    }
}

impl PayrollSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_minimum_wage(minimum_wage: f64) -> Result<Self> {
        let mut settings = Self::default();
        settings.set_minimum_wage(minimum_wage)?;
        Ok(settings)
    }

    pub fn minimum_wage(&self) -> f64 {
        self.minimum_wage
    }

    /// Updates the wage floor seen by all future validations. The current
    /// salary of already-constructed employees is not revisited.
    pub fn set_minimum_wage(&mut self, new_wage: f64) -> Result<()> {
        if new_wage > MINIMUM_WAGE_CAP {
            return Err(HrError::validation(format!(
                "Minimum wage cannot exceed ${}",
                MINIMUM_WAGE_CAP
            )));
        }
        tracing::debug!(new_wage, "minimum wage updated");
        self.minimum_wage = new_wage;
        Ok(())
    }

    pub fn check_salary(&self, salary: f64) -> Result<()> {
        if salary < self.minimum_wage {
            return Err(HrError::validation(format!(
                "Minimum wage is ${}",
                self.minimum_wage
            )));
        }
        Ok(())
    }
}

/// Whole years between `birth_date` and `today`, decremented by one when
/// today's (month, day) precedes the birth (month, day).
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age.max(0) as u32
}
