//! Employee use cases. `email` is unique across employees and `fullName` is
//! always derived from the name parts.

mod create;
mod delete;
mod query;
mod update;

pub use create::{CreateEmployeeUseCase, DEFAULT_CURRENCY};
pub use delete::{DeleteEmployeeUseCase, TERMINATED_STATUS};
pub use query::{EmployeeListWithStats, GetAllEmployeesUseCase, GetEmployeeByIdUseCase};
pub use update::UpdateEmployeeUseCase;

pub(crate) const ENTITY: &str = "Employee";
