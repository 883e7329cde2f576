//! Visa use cases.

mod create;
mod delete;
mod query;
mod update;

pub use create::CreateVisaUseCase;
pub use delete::DeleteVisaUseCase;
pub use query::{GetAllVisasUseCase, GetExpiringVisasUseCase, GetVisaByIdUseCase, VisaListWithStats};
pub use update::UpdateVisaUseCase;

pub(crate) const ENTITY: &str = "Visa";
