use crate::domain::payroll::PayrollSettings;
use crate::utils::error::Result;

/// Anything that can supply a wage floor, typically a CLI or TOML config.
pub trait SettingsProvider {
    fn minimum_wage(&self) -> f64;

    fn payroll_settings(&self) -> Result<PayrollSettings> {
        PayrollSettings::with_minimum_wage(self.minimum_wage())
    }
}
