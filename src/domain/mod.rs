// Domain layer: employee/project models and payroll policy. No external
// dependencies beyond std/serde/chrono.

pub mod model;
pub mod payroll;
pub mod ports;
