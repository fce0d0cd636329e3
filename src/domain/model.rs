use crate::domain::payroll::{age_on, PayrollSettings};
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;

/// Types whose instances carry a fixed, pre-declared field set and accept
/// no dynamic attributes. Rust structs always satisfy this, so the default
/// method holds unconditionally.
pub trait FixedFields {
    fn has_fixed_field_set(&self) -> bool {
        true
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub payment: i64,
    pub client: String,
}

impl Project {
    pub fn new(name: impl Into<String>, payment: i64, client: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            payment,
            client: client.into(),
        }
    }

    pub fn notify_client(&self) {
        println!(
            "Notifying the client about the progress of the {}...",
            self.name
        );
        tracing::info!(project = %self.name, client = %self.client, "client notified");
    }
}

/// Serialized form of an employee. Reconstructing from a snapshot goes
/// through the same floor validation as a fresh construction, so a
/// round-trip never produces a state a constructor would reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeSnapshot {
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub project: Project,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeveloperSnapshot {
    pub name: String,
    pub age: u32,
    pub salary: f64,
    pub framework: String,
    pub project: Project,
}

#[derive(Debug, Clone)]
pub struct Employee {
    name: String,
    age: u32,
    salary: f64,
    // Lazily computed, reset whenever the salary changes.
    annual_salary: Cell<Option<f64>>,
    project: Project,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        project: Project,
        settings: &PayrollSettings,
    ) -> Result<Self> {
        settings.check_salary(salary)?;
        Ok(Self {
            name: name.into(),
            age,
            salary,
            annual_salary: Cell::new(None),
            project,
        })
    }

    /// Hires at the current minimum wage, deriving age from the birth date.
    pub fn with_birth_date(
        name: impl Into<String>,
        birth_date: NaiveDate,
        project: Project,
        settings: &PayrollSettings,
    ) -> Result<Self> {
        let age = age_on(birth_date, Local::now().date_naive());
        Self::new(name, age, settings.minimum_wage(), project, settings)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_salary(&mut self, salary: f64, settings: &PayrollSettings) -> Result<()> {
        settings.check_salary(salary)?;
        self.annual_salary.set(None);
        self.salary = salary;
        tracing::debug!(employee = %self.name, salary, "salary updated");
        Ok(())
    }

    /// Cached as `salary * 12`; stable across reads until the next salary
    /// change.
    pub fn annual_salary(&self) -> f64 {
        match self.annual_salary.get() {
            Some(cached) => cached,
            None => {
                let annual = self.salary * 12.0;
                self.annual_salary.set(Some(annual));
                annual
            }
        }
    }

    /// Raises the salary by `percent`. Negative percentages are accepted;
    /// the resulting salary must still clear the wage floor.
    pub fn increase_salary(&mut self, percent: f64, settings: &PayrollSettings) -> Result<()> {
        let raised = self.salary + self.salary * (percent / 100.0);
        self.set_salary(raised, settings)
    }

    pub fn info(&self) {
        println!("{}", self);
    }

    pub fn snapshot(&self) -> EmployeeSnapshot {
        EmployeeSnapshot {
            name: self.name.clone(),
            age: self.age,
            salary: self.salary,
            project: self.project.clone(),
        }
    }

    pub fn from_snapshot(snapshot: EmployeeSnapshot, settings: &PayrollSettings) -> Result<Self> {
        Self::new(
            snapshot.name,
            snapshot.age,
            snapshot.salary,
            snapshot.project,
            settings,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn from_json(json: &str, settings: &PayrollSettings) -> Result<Self> {
        let snapshot: EmployeeSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, settings)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is {} years old. Employee has a salary of ${:.2}",
            self.name, self.age, self.salary
        )
    }
}

impl FixedFields for Employee {}

#[derive(Debug, Clone)]
pub struct Developer {
    employee: Employee,
    framework: String,
}

impl Developer {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        framework: impl Into<String>,
        project: Project,
        settings: &PayrollSettings,
    ) -> Result<Self> {
        Ok(Self {
            employee: Employee::new(name, age, salary, project, settings)?,
            framework: framework.into(),
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn name(&self) -> &str {
        self.employee.name()
    }

    pub fn age(&self) -> u32 {
        self.employee.age()
    }

    pub fn project(&self) -> &Project {
        self.employee.project()
    }

    pub fn framework(&self) -> &str {
        &self.framework
    }

    pub fn salary(&self) -> f64 {
        self.employee.salary()
    }

    pub fn set_salary(&mut self, salary: f64, settings: &PayrollSettings) -> Result<()> {
        self.employee.set_salary(salary, settings)
    }

    pub fn annual_salary(&self) -> f64 {
        self.employee.annual_salary()
    }

    /// Base percentage raise, then a flat bonus on top. Pass `0.0` for no
    /// bonus.
    pub fn increase_salary(
        &mut self,
        percent: f64,
        bonus: f64,
        settings: &PayrollSettings,
    ) -> Result<()> {
        self.employee.increase_salary(percent, settings)?;
        self.employee
            .set_salary(self.employee.salary() + bonus, settings)
    }

    pub fn info(&self) {
        self.employee.info();
    }

    pub fn snapshot(&self) -> DeveloperSnapshot {
        DeveloperSnapshot {
            name: self.employee.name().to_string(),
            age: self.employee.age(),
            salary: self.employee.salary(),
            framework: self.framework.clone(),
            project: self.employee.project().clone(),
        }
    }

    pub fn from_snapshot(snapshot: DeveloperSnapshot, settings: &PayrollSettings) -> Result<Self> {
        Self::new(
            snapshot.name,
            snapshot.age,
            snapshot.salary,
            snapshot.framework,
            snapshot.project,
            settings,
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    pub fn from_json(json: &str, settings: &PayrollSettings) -> Result<Self> {
        let snapshot: DeveloperSnapshot = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot, settings)
    }
}

impl fmt::Display for Developer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.employee, f)
    }
}

impl FixedFields for Developer {}

#[derive(Debug, Clone)]
pub struct Tester {
    employee: Employee,
}

impl Tester {
    pub fn new(
        name: impl Into<String>,
        age: u32,
        salary: f64,
        project: Project,
        settings: &PayrollSettings,
    ) -> Result<Self> {
        Ok(Self {
            employee: Employee::new(name, age, salary, project, settings)?,
        })
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn run_tests(&self) {
        println!("{} is running tests.", self.employee.name());
    }
}

impl fmt::Display for Tester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.employee, f)
    }
}

impl FixedFields for Tester {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        Project::new("Website Redesign", 5000, "Acme Corp")
    }

    #[test]
    fn test_display_format() {
        let settings = PayrollSettings::new();
        let employee =
            Employee::new("Ji-Soo", 38, 1200.0, sample_project(), &settings).unwrap();
        assert_eq!(
            employee.to_string(),
            "Ji-Soo is 38 years old. Employee has a salary of $1200.00"
        );
    }

    #[test]
    fn test_developer_display_matches_employee_format() {
        let settings = PayrollSettings::new();
        let mut developer = Developer::new(
            "Ji-Soo",
            38,
            1200.0,
            "Flask",
            sample_project(),
            &settings,
        )
        .unwrap();
        developer.increase_salary(10.0, 0.0, &settings).unwrap();
        assert_eq!(
            developer.to_string(),
            "Ji-Soo is 38 years old. Employee has a salary of $1320.00"
        );
    }

    #[test]
    fn test_fixed_field_set() {
        let settings = PayrollSettings::new();
        let developer = Developer::new(
            "Ji-Soo",
            38,
            1200.0,
            "Flask",
            sample_project(),
            &settings,
        )
        .unwrap();
        assert!(developer.has_fixed_field_set());
    }

    #[test]
    fn test_hire_at_minimum_wage() {
        let settings = PayrollSettings::with_minimum_wage(1500.0).unwrap();
        let birth_date = NaiveDate::from_ymd_opt(1985, 6, 15).unwrap();
        let employee =
            Employee::with_birth_date("Ji-Soo", birth_date, sample_project(), &settings)
                .unwrap();
        assert_eq!(employee.salary(), 1500.0);
        assert!(employee.age() >= 38);
    }
}
