use std::sync::Arc;

use chrono::{Days, Utc};

use super::common::*;
use crate::domain::{VisaFilters, VisaPatch, VisaRequirementsPatch};
use crate::repository::{InMemoryVisaRepository, VisaRepository};
use crate::use_cases::visa::{
    CreateVisaUseCase, DeleteVisaUseCase, GetAllVisasUseCase, GetExpiringVisasUseCase,
    GetVisaByIdUseCase, UpdateVisaUseCase,
};
use crate::use_cases::UseCaseError;

fn repository() -> Arc<InMemoryVisaRepository> {
    Arc::new(InMemoryVisaRepository::default())
}

#[tokio::test]
async fn create_applies_process_defaults() {
    let visa = CreateVisaUseCase::new(repository())
        .execute(visa_request("uk-001"))
        .await
        .expect("visa created");

    assert_eq!(visa.visa_number, "UK-001");
    assert_eq!(visa.application_status, "PENDING");
    assert_eq!(visa.priority, "NORMAL");
    assert!(visa.is_active);
    let flags = visa.requirements;
    assert!(
        !(flags.photo_required
            || flags.biometrics_required
            || flags.interview_required
            || flags.invitation_letter
            || flags.bank_statement
            || flags.sponsor_support
            || flags.insurance_coverage
            || flags.refused_before
            || flags.appeal_possible
            || flags.renewal_eligible
            || flags.vaccination_required
            || flags.quarantine_required)
    );
}

#[tokio::test]
async fn person_name_includes_middle_name() {
    let mut request = visa_request("UK-001");
    request.middle_name = Some("Efua".to_string());

    let visa = CreateVisaUseCase::new(repository())
        .execute(request)
        .await
        .expect("visa created");

    assert_eq!(visa.person_name, "Ama Efua Owusu");
}

#[tokio::test]
async fn explicit_flags_and_status_are_kept() {
    let mut request = visa_request("UK-001");
    request.requirements = VisaRequirementsPatch {
        interview_required: Some(true),
        refused_before: Some(true),
        ..VisaRequirementsPatch::default()
    };
    request.is_active = Some(false);
    request.priority = Some("URGENT".to_string());

    let visa = CreateVisaUseCase::new(repository())
        .execute(request)
        .await
        .expect("visa created");

    assert!(visa.requirements.interview_required);
    assert!(visa.requirements.refused_before);
    assert!(!visa.requirements.photo_required);
    assert!(!visa.is_active);
    assert_eq!(visa.priority, "URGENT");
}

#[tokio::test]
async fn missing_fields_and_bad_dates() {
    let create = CreateVisaUseCase::new(repository());
    let error = create
        .execute(Default::default())
        .await
        .expect_err("empty request");
    assert_eq!(expect_validation(error).len(), 12);

    let mut backwards = visa_request("UK-001");
    backwards.expiry_date = backwards.issue_date;
    let error = create.execute(backwards).await.expect_err("same-day expiry");
    assert_eq!(expect_validation(error)[0].0, "expiryDate");
}

#[tokio::test]
async fn expiry_one_day_after_issue_is_accepted() {
    let repository = repository();
    let mut request = visa_request("UK-001");
    request.issue_date = Some(date(2024, 5, 1));
    request.expiry_date = Some(date(2024, 5, 2));
    let short = CreateVisaUseCase::new(repository.clone())
        .execute(request)
        .await
        .expect("next-day expiry is valid");
    assert_eq!(short.expiry_date, date(2024, 5, 2));

    let standard = CreateVisaUseCase::new(repository.clone())
        .execute(visa_request("UK-002"))
        .await
        .expect("second visa");
    let updated = UpdateVisaUseCase::new(repository)
        .execute(
            standard.id,
            VisaPatch {
                issue_date: Some(date(2027, 4, 29)),
                ..VisaPatch::default()
            },
        )
        .await
        .expect("issue one day before stored expiry");
    assert_eq!(updated.issue_date, date(2027, 4, 29));
    assert_eq!(updated.expiry_date, date(2027, 4, 30));
}

#[tokio::test]
async fn duplicate_visa_number_is_rejected() {
    let repository = repository();
    let create = CreateVisaUseCase::new(repository.clone());
    create.execute(visa_request("UK-001")).await.expect("first visa");

    let error = create
        .execute(visa_request("uk-001"))
        .await
        .expect_err("number taken");

    assert_eq!(
        expect_validation(error),
        vec![("visaNumber".to_string(), "Visa number already exists".to_string())]
    );
    assert_eq!(repository.find_all().await.expect("list").len(), 1);
}

#[tokio::test]
async fn update_merges_flags_and_recomputes_person_name() {
    let repository = repository();
    let created = CreateVisaUseCase::new(repository.clone())
        .execute(visa_request("UK-001"))
        .await
        .expect("visa created");

    let updated = UpdateVisaUseCase::new(repository)
        .execute(
            created.id,
            VisaPatch {
                last_name: Some("Boateng".to_string()),
                application_status: Some("APPROVED".to_string()),
                requirements: VisaRequirementsPatch {
                    biometrics_required: Some(true),
                    ..VisaRequirementsPatch::default()
                },
                ..VisaPatch::default()
            },
        )
        .await
        .expect("visa updated");

    assert_eq!(updated.person_name, "Ama Boateng");
    assert_eq!(updated.application_status, "APPROVED");
    assert!(updated.requirements.biometrics_required);
    assert_eq!(updated.visa_status, "ACTIVE");
}

#[tokio::test]
async fn update_rejects_backdated_expiry_and_taken_number() {
    let repository = repository();
    let create = CreateVisaUseCase::new(repository.clone());
    let first = create.execute(visa_request("UK-001")).await.expect("first");
    create.execute(visa_request("UK-002")).await.expect("second");
    let update = UpdateVisaUseCase::new(repository);

    let error = update
        .execute(
            first.id,
            VisaPatch {
                issue_date: Some(date(2028, 1, 1)),
                ..VisaPatch::default()
            },
        )
        .await
        .expect_err("issue after stored expiry");
    assert_eq!(expect_validation(error)[0].0, "expiryDate");

    let error = update
        .execute(
            first.id,
            VisaPatch {
                visa_number: Some("UK-002".to_string()),
                ..VisaPatch::default()
            },
        )
        .await
        .expect_err("number taken");
    assert_eq!(expect_validation(error)[0].0, "visaNumber");
}

#[tokio::test]
async fn soft_delete_expires_visa_status() {
    let repository = repository();
    let created = CreateVisaUseCase::new(repository.clone())
        .execute(visa_request("UK-001"))
        .await
        .expect("visa created");

    DeleteVisaUseCase::new(repository.clone())
        .soft_delete(created.id)
        .await
        .expect("soft delete");

    let stored = GetVisaByIdUseCase::new(repository)
        .execute(created.id)
        .await
        .expect("row kept");
    assert_eq!(stored.visa_status, "EXPIRED");
}

#[tokio::test]
async fn delete_rejects_invalid_id() {
    let error = DeleteVisaUseCase::new(repository())
        .execute(0)
        .await
        .expect_err("invalid id");
    assert_eq!(error.to_string(), "Invalid Visa ID");
    assert!(matches!(error, UseCaseError::InvalidId { .. }));
}

#[tokio::test]
async fn expiring_window_and_stats() {
    let repository = repository();
    let create = CreateVisaUseCase::new(repository.clone());
    let today = Utc::now().date_naive();
    for (number, visa_type, destination, offset) in [
        ("UK-001", "WORK", "United Kingdom", 10),
        ("DE-001", "STUDENT", "Germany", 200),
    ] {
        let mut request = visa_request(number);
        request.visa_type = Some(visa_type.to_string());
        request.destination_country = Some(destination.to_string());
        request.issue_date = Some(date(2020, 1, 1));
        request.expiry_date = today.checked_add_days(Days::new(offset));
        create.execute(request).await.expect("created");
    }

    let expiring = GetExpiringVisasUseCase::new(repository.clone())
        .execute(Some(30))
        .await
        .expect("expiring");
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].visa_number, "UK-001");

    let list = GetAllVisasUseCase::new(repository);
    let students = list
        .execute(&VisaFilters {
            visa_type: Some("student".to_string()),
            ..VisaFilters::default()
        })
        .await
        .expect("students");
    assert_eq!(students.len(), 1);

    let stats = list
        .execute_with_stats(&VisaFilters::default())
        .await
        .expect("stats");
    assert_eq!(stats.visa_types, vec!["STUDENT", "WORK"]);
    assert_eq!(stats.destination_countries, vec!["Germany", "United Kingdom"]);
    assert_eq!(stats.status_counts[0].status, "ACTIVE");
    assert_eq!(stats.status_counts[0].count, 2);
}
