use chrono::{Days, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use personnel_admin::domain::{
    CompanyIdentity, EmployerIdentity, NewEmployee, NewEmployer, NewPassport, NewVisa, PersonType,
};
use personnel_admin::http::PersonnelRepositories;
use personnel_admin::repository::{
    InMemoryEmployeeRepository, InMemoryEmployerRepository, InMemoryPassportRepository,
    InMemoryVisaRepository,
};
use personnel_admin::use_cases::employee::CreateEmployeeUseCase;
use personnel_admin::use_cases::employer::CreateEmployerUseCase;
use personnel_admin::use_cases::passport::CreatePassportUseCase;
use personnel_admin::use_cases::visa::CreateVisaUseCase;
use personnel_admin::use_cases::UseCaseResult;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type MemoryRepositories = PersonnelRepositories<
    InMemoryEmployeeRepository,
    InMemoryEmployerRepository,
    InMemoryPassportRepository,
    InMemoryVisaRepository,
>;

pub(crate) fn in_memory_repositories() -> MemoryRepositories {
    PersonnelRepositories {
        employees: Arc::new(InMemoryEmployeeRepository::default()),
        employers: Arc::new(InMemoryEmployerRepository::default()),
        passports: Arc::new(InMemoryPassportRepository::default()),
        visas: Arc::new(InMemoryVisaRepository::default()),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct SeedSummary {
    pub(crate) employers: usize,
    pub(crate) employees: usize,
    pub(crate) passports: usize,
    pub(crate) visas: usize,
}

/// Loads a small, consistent data set through the create use cases.
///
/// Document dates are relative to `today` so the expiring endpoints have
/// something to report.
pub(crate) async fn seed_demo_records(
    repositories: &MemoryRepositories,
    today: NaiveDate,
) -> UseCaseResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    let create_employer = CreateEmployerUseCase::new(Arc::clone(&repositories.employers));
    let mut company = NewEmployer::with_identity(EmployerIdentity::Company(CompanyIdentity {
        company_name: Some("Northwind Logistics".to_string()),
        trading_name: Some("Northwind".to_string()),
        registration_number: Some("NW-2019-0042".to_string()),
        industry: Some("Logistics".to_string()),
        ..CompanyIdentity::default()
    }));
    company.email = Some("hr@northwind.example".to_string());
    company.country = Some("Ghana".to_string());
    company.status = Some("ACTIVE".to_string());
    let employer = create_employer.execute(company).await?;
    summary.employers += 1;

    let create_employee = CreateEmployeeUseCase::new(Arc::clone(&repositories.employees));
    let create_passport = CreatePassportUseCase::new(Arc::clone(&repositories.passports));
    let create_visa = CreateVisaUseCase::new(Arc::clone(&repositories.visas));

    let people = [
        ("Kwame", "Mensah", "Operations", "Dispatcher", 40, "GH1002003"),
        ("Abena", "Boateng", "Finance", "Accountant", 800, "GH2004005"),
    ];
    for (first, last, department, position, passport_days, passport_number) in people {
        let employee = create_employee
            .execute(NewEmployee {
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                email: Some(format!(
                    "{}.{}@northwind.example",
                    first.to_lowercase(),
                    last.to_lowercase()
                )),
                department: Some(department.to_string()),
                position: Some(position.to_string()),
                employer_id: Some(employer.id),
                status: Some("ACTIVE".to_string()),
                hire_date: today.checked_sub_days(Days::new(365)),
                ..NewEmployee::default()
            })
            .await?;
        summary.employees += 1;

        create_passport
            .execute(NewPassport {
                passport_number: Some(passport_number.to_string()),
                issuing_country: Some("Ghana".to_string()),
                nationality: Some("Ghanaian".to_string()),
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                issue_date: today.checked_sub_days(Days::new(3000)),
                expiry_date: today.checked_add_days(Days::new(passport_days)),
                person_type: Some(PersonType::Employee),
                person_id: Some(employee.id),
                status: Some("VALID".to_string()),
                ..NewPassport::default()
            })
            .await?;
        summary.passports += 1;

        create_visa
            .execute(NewVisa {
                visa_number: Some(format!("UK-{passport_number}")),
                visa_type: Some("WORK".to_string()),
                issuing_country: Some("United Kingdom".to_string()),
                destination_country: Some("United Kingdom".to_string()),
                first_name: Some(first.to_string()),
                last_name: Some(last.to_string()),
                nationality: Some("Ghanaian".to_string()),
                passport_number: Some(passport_number.to_string()),
                person_type: Some(PersonType::Employee),
                person_id: Some(employee.id),
                issue_date: today.checked_sub_days(Days::new(30)),
                expiry_date: today.checked_add_days(Days::new(passport_days / 2)),
                visa_status: Some("ACTIVE".to_string()),
                ..NewVisa::default()
            })
            .await?;
        summary.visas += 1;
    }

    info!(
        employers = summary.employers,
        employees = summary.employees,
        passports = summary.passports,
        visas = summary.visas,
        "demo records seeded"
    );
    Ok(summary)
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use personnel_admin::use_cases::passport::GetExpiringPassportsUseCase;

    #[tokio::test]
    async fn seeding_creates_linked_records() {
        let repositories = in_memory_repositories();
        let today = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
        let summary = seed_demo_records(&repositories, today)
            .await
            .expect("seed succeeds");
        assert_eq!(
            summary,
            SeedSummary {
                employers: 1,
                employees: 2,
                passports: 2,
                visas: 2,
            }
        );

        // Seeding twice collides on the unique email and registration number.
        assert!(seed_demo_records(&repositories, today).await.is_err());
    }

    #[tokio::test]
    async fn seeded_passports_include_one_expiring_soon() {
        let repositories = in_memory_repositories();
        let today = chrono::Utc::now().date_naive();
        seed_demo_records(&repositories, today)
            .await
            .expect("seed succeeds");

        let expiring = GetExpiringPassportsUseCase::new(Arc::clone(&repositories.passports))
            .execute(None)
            .await
            .expect("expiring");
        assert_eq!(expiring.len(), 1);
        assert_eq!(expiring[0].passport_number, "GH1002003");
    }

    #[test]
    fn parse_date_reports_the_raw_value() {
        assert!(parse_date(" 2026-10-18 ").is_ok());
        let message = parse_date("tomorrow").expect_err("not a date");
        assert!(message.contains("tomorrow"));
    }
}
