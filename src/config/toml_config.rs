use crate::domain::payroll::MINIMUM_WAGE_CAP;
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub company: CompanyConfig,
    pub payroll: PayrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollConfig {
    pub minimum_wage: f64,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}

impl SettingsProvider for TomlConfig {
    fn minimum_wage(&self) -> f64 {
        self.payroll.minimum_wage
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("company.name", &self.company.name)?;
        validate_range(
            "payroll.minimum_wage",
            self.payroll.minimum_wage,
            0.0,
            MINIMUM_WAGE_CAP,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[company]
name = "Acme Corp"
description = "Teaching example"

[payroll]
minimum_wage = 1500
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.company.name, "Acme Corp");
        assert_eq!(config.minimum_wage(), 1500.0);
        assert!(config.validate().is_ok());

        let settings = config.payroll_settings().unwrap();
        assert_eq!(settings.minimum_wage(), 1500.0);
    }

    #[test]
    fn test_config_validation_rejects_wage_above_cap() {
        let toml_content = r#"
[company]
name = "Acme Corp"

[payroll]
minimum_wage = 3500
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
        assert!(config.payroll_settings().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[company]
name = "File Test Inc"

[payroll]
minimum_wage = 1000
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.company.name, "File Test Inc");
        assert_eq!(config.minimum_wage(), 1000.0);
    }
}
