use std::sync::Arc;

use chrono::{Days, Utc};
use personnel_admin::domain::{
    CompanyIdentity, EmployeeFilters, EmployeePatch, EmployerIdentity, NewEmployee, NewEmployer,
    NewPassport, NewVisa, PassportPatch, PersonType,
};
use personnel_admin::repository::{
    InMemoryEmployeeRepository, InMemoryEmployerRepository, InMemoryPassportRepository,
    InMemoryVisaRepository,
};
use personnel_admin::use_cases::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetAllEmployeesUseCase, UpdateEmployeeUseCase,
    TERMINATED_STATUS,
};
use personnel_admin::use_cases::employer::CreateEmployerUseCase;
use personnel_admin::use_cases::passport::{
    CreatePassportUseCase, DeletePassportUseCase, GetExpiringPassportsUseCase,
    UpdatePassportUseCase, EXPIRED_STATUS,
};
use personnel_admin::use_cases::visa::{CreateVisaUseCase, GetExpiringVisasUseCase};
use personnel_admin::use_cases::UseCaseError;

fn field_errors(error: UseCaseError) -> Vec<String> {
    error
        .validation()
        .map(|validation| validation.fields().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

#[tokio::test]
async fn onboarding_an_employee_with_travel_documents() {
    let employers = Arc::new(InMemoryEmployerRepository::default());
    let employees = Arc::new(InMemoryEmployeeRepository::default());
    let passports = Arc::new(InMemoryPassportRepository::default());
    let visas = Arc::new(InMemoryVisaRepository::default());
    let today = Utc::now().date_naive();

    let mut employer_request = NewEmployer::with_identity(EmployerIdentity::Company(CompanyIdentity {
        company_name: Some("Harbor Freight Lines".to_string()),
        registration_number: Some("hfl-2291".to_string()),
        industry: Some("Shipping".to_string()),
        ..CompanyIdentity::default()
    }));
    employer_request.status = Some("ACTIVE".to_string());
    let employer = CreateEmployerUseCase::new(Arc::clone(&employers))
        .execute(employer_request)
        .await
        .expect("employer created");
    assert_eq!(employer.registration_number.as_deref(), Some("hfl-2291"));

    let employee = CreateEmployeeUseCase::new(Arc::clone(&employees))
        .execute(NewEmployee {
            first_name: Some("Nia".to_string()),
            last_name: Some("Achieng".to_string()),
            email: Some("Nia.Achieng@Harbor.example".to_string()),
            status: Some("ACTIVE".to_string()),
            department: Some("Operations".to_string()),
            employer_id: Some(employer.id),
            ..NewEmployee::default()
        })
        .await
        .expect("employee created");
    assert_eq!(employee.email, "nia.achieng@harbor.example");
    assert_eq!(employee.full_name, "Nia Achieng");

    let duplicate = CreateEmployeeUseCase::new(Arc::clone(&employees))
        .execute(NewEmployee {
            first_name: Some("Other".to_string()),
            last_name: Some("Person".to_string()),
            email: Some("NIA.ACHIENG@harbor.example".to_string()),
            status: Some("ACTIVE".to_string()),
            ..NewEmployee::default()
        })
        .await
        .expect_err("email taken");
    assert_eq!(field_errors(duplicate), vec!["email"]);

    let renamed = UpdateEmployeeUseCase::new(Arc::clone(&employees))
        .execute(
            employee.id,
            EmployeePatch {
                middle_name: Some("Wairimu".to_string()),
                ..EmployeePatch::default()
            },
        )
        .await
        .expect("employee updated");
    assert_eq!(renamed.full_name, "Nia Wairimu Achieng");

    let passport = CreatePassportUseCase::new(Arc::clone(&passports))
        .execute(NewPassport {
            passport_number: Some(" ak0093311 ".to_string()),
            issuing_country: Some("Kenya".to_string()),
            nationality: Some("Kenyan".to_string()),
            first_name: Some("Nia".to_string()),
            last_name: Some("Achieng".to_string()),
            issue_date: today.checked_sub_days(Days::new(3000)),
            expiry_date: today.checked_add_days(Days::new(400)),
            person_type: Some(PersonType::Employee),
            person_id: Some(employee.id),
            status: Some("VALID".to_string()),
            ..NewPassport::default()
        })
        .await
        .expect("passport created");
    assert_eq!(passport.passport_number, "AK0093311");

    let expiring = GetExpiringPassportsUseCase::new(Arc::clone(&passports));
    assert!(expiring.execute(None).await.expect("expiring").is_empty());

    UpdatePassportUseCase::new(Arc::clone(&passports))
        .execute(
            passport.id,
            PassportPatch {
                expiry_date: today.checked_add_days(Days::new(45)),
                ..PassportPatch::default()
            },
        )
        .await
        .expect("expiry moved up");
    let soon = expiring.execute(None).await.expect("expiring");
    assert_eq!(soon.len(), 1);
    assert!(expiring.execute(Some(30)).await.expect("expiring").is_empty());

    let visa = CreateVisaUseCase::new(Arc::clone(&visas))
        .execute(NewVisa {
            visa_number: Some("uk-wv-7781".to_string()),
            visa_type: Some("WORK".to_string()),
            issuing_country: Some("United Kingdom".to_string()),
            destination_country: Some("United Kingdom".to_string()),
            first_name: Some("Nia".to_string()),
            middle_name: Some("Wairimu".to_string()),
            last_name: Some("Achieng".to_string()),
            nationality: Some("Kenyan".to_string()),
            passport_number: Some("ak0093311".to_string()),
            person_type: Some(PersonType::Employee),
            person_id: Some(employee.id),
            issue_date: Some(today),
            expiry_date: today.checked_add_days(Days::new(10)),
            visa_status: Some("ACTIVE".to_string()),
            ..NewVisa::default()
        })
        .await
        .expect("visa created");
    assert_eq!(visa.person_name, "Nia Wairimu Achieng");
    assert_eq!(visa.passport_number.as_deref(), Some("AK0093311"));
    let expiring_visas = GetExpiringVisasUseCase::new(Arc::clone(&visas))
        .execute(Some(14))
        .await
        .expect("expiring visas");
    assert_eq!(expiring_visas.len(), 1);

    let retired = DeletePassportUseCase::new(Arc::clone(&passports))
        .soft_delete(passport.id)
        .await
        .expect("passport retired");
    assert_eq!(retired.status, EXPIRED_STATUS);

    let terminated = DeleteEmployeeUseCase::new(Arc::clone(&employees))
        .soft_delete(employee.id)
        .await
        .expect("employee terminated");
    assert_eq!(terminated.status, TERMINATED_STATUS);
    assert_eq!(terminated.termination_date, Some(today));

    let listing = GetAllEmployeesUseCase::new(employees)
        .execute_with_stats(&EmployeeFilters::default())
        .await
        .expect("stats");
    assert_eq!(listing.employees.len(), 1);
    assert_eq!(listing.departments, vec!["Operations"]);
    assert_eq!(listing.status_counts[0].status, TERMINATED_STATUS);
}
