use serde::{Deserialize, Serialize};

/// Kind of record a travel document belongs to; paired with a `personId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PersonType {
    Employee,
    Employer,
    Dependent,
}

impl PersonType {
    pub const fn label(self) -> &'static str {
        match self {
            PersonType::Employee => "EMPLOYEE",
            PersonType::Employer => "EMPLOYER",
            PersonType::Dependent => "DEPENDENT",
        }
    }
}
