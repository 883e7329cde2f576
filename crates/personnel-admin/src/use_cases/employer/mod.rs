//! Employer use cases. Company and individual employers are validated by
//! their own variant rules; `email` and `registrationNumber` are unique when
//! present.

mod create;
mod delete;
mod query;
mod update;

pub use create::CreateEmployerUseCase;
pub use delete::{DeleteEmployerUseCase, INACTIVE_STATUS};
pub use query::{EmployerListWithStats, GetAllEmployersUseCase, GetEmployerByIdUseCase};
pub use update::UpdateEmployerUseCase;

pub(crate) const ENTITY: &str = "Employer";
