pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use domain::model::{
    Developer, DeveloperSnapshot, Employee, EmployeeSnapshot, FixedFields, Project, Tester,
};
pub use domain::payroll::{age_on, PayrollSettings, MINIMUM_WAGE_CAP};
pub use domain::ports::SettingsProvider;
pub use utils::error::{HrError, Result};
