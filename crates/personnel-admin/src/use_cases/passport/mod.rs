//! Passport use cases. Passport numbers are stored upper-cased and must be
//! unique; validity requires `expiryDate` strictly after `issueDate`.

mod create;
mod delete;
mod query;
mod update;

pub use create::CreatePassportUseCase;
pub use delete::{DeletePassportUseCase, EXPIRED_STATUS};
pub use query::{
    GetAllPassportsUseCase, GetExpiringPassportsUseCase, GetPassportByIdUseCase,
    PassportListWithStats,
};
pub use update::UpdatePassportUseCase;

pub(crate) const ENTITY: &str = "Passport";
