use clap::Parser;
use small_hr::utils::{logger, validation::Validate};
use small_hr::{
    CliConfig, Developer, FixedFields, PayrollSettings, Project, SettingsProvider, Tester,
    TomlConfig,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting small-hr demo");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let settings = match &config.settings_file {
        Some(path) => {
            tracing::info!("Loading payroll settings from {}", path);
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            toml_config.payroll_settings()?
        }
        None => config.payroll_settings()?,
    };

    run_demo(&settings)?;

    tracing::info!("Demo completed");
    Ok(())
}

// Walkthrough: build a project and a developer, raise the salary by 10%,
// print the description, then prove the snapshot round-trip.
fn run_demo(settings: &PayrollSettings) -> small_hr::Result<()> {
    let project = Project::new("Website Redesign", 5000, "Acme Corp");

    let mut developer = Developer::new("Ji-Soo", 38, 1200.0, "Flask", project.clone(), settings)?;
    println!("{}", developer.has_fixed_field_set());

    developer.increase_salary(10.0, 0.0, settings)?;
    developer.info();
    println!("Annual salary: ${:.2}", developer.annual_salary());

    let json = developer.to_json()?;
    println!("{}", json);

    let restored = Developer::from_json(&json, settings)?;
    println!("{}", restored);

    let tester = Tester::new("Min-Jun", 29, settings.minimum_wage(), project, settings)?;
    tester.run_tests();
    tester.employee().project().notify_client();

    Ok(())
}
