pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use crate::domain::payroll::MINIMUM_WAGE_CAP;
    use crate::domain::ports::SettingsProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_non_negative, validate_range, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "small-hr")]
    #[command(about = "A small employee/payroll modeling demo")]
    pub struct CliConfig {
        /// Wage floor applied to every salary
        #[arg(long, default_value = "1000")]
        pub minimum_wage: f64,

        /// Load payroll settings from a TOML file instead of flags
        #[arg(long)]
        pub settings_file: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl SettingsProvider for CliConfig {
        fn minimum_wage(&self) -> f64 {
            self.minimum_wage
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_non_negative("minimum-wage", self.minimum_wage)?;
            validate_range("minimum-wage", self.minimum_wage, 0.0, MINIMUM_WAGE_CAP)?;
            Ok(())
        }
    }
}
