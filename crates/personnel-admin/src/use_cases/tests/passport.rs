use std::sync::Arc;

use chrono::{Days, Utc};

use super::common::*;
use crate::domain::{PassportFilters, PassportPatch, PersonType};
use crate::repository::{InMemoryPassportRepository, PassportRepository};
use crate::use_cases::passport::{
    CreatePassportUseCase, DeletePassportUseCase, GetAllPassportsUseCase,
    GetExpiringPassportsUseCase, UpdatePassportUseCase,
};

fn repository() -> Arc<InMemoryPassportRepository> {
    Arc::new(InMemoryPassportRepository::default())
}

#[tokio::test]
async fn create_normalizes_number_and_derives_name() {
    let mut request = passport_request(" g1234567 ");
    request.middle_name = Some("Efua".to_string());

    let passport = CreatePassportUseCase::new(repository())
        .execute(request)
        .await
        .expect("passport created");

    assert_eq!(passport.passport_number, "G1234567");
    assert_eq!(passport.full_name, "Ama Efua Owusu");
    assert_eq!(passport.person_type, PersonType::Employee);
}

#[tokio::test]
async fn expiry_before_issue_is_rejected() {
    let mut request = passport_request("G1234567");
    request.issue_date = Some(date(2024, 1, 1));
    request.expiry_date = Some(date(2023, 1, 1));

    let error = CreatePassportUseCase::new(repository())
        .execute(request)
        .await
        .expect_err("expiry before issue");

    assert_eq!(
        expect_validation(error),
        vec![(
            "expiryDate".to_string(),
            "Expiry date must be after issue date".to_string()
        )]
    );
}

#[tokio::test]
async fn expiry_one_day_after_issue_is_accepted() {
    let same_day = {
        let mut request = passport_request("G1");
        request.issue_date = Some(date(2024, 1, 1));
        request.expiry_date = Some(date(2024, 1, 1));
        request
    };
    let next_day = {
        let mut request = passport_request("G2");
        request.issue_date = Some(date(2024, 1, 1));
        request.expiry_date = Some(date(2024, 1, 2));
        request
    };
    let create = CreatePassportUseCase::new(repository());

    let error = create.execute(same_day).await.expect_err("same day");
    assert_eq!(expect_validation(error)[0].0, "expiryDate");
    create.execute(next_day).await.expect("next day is valid");
}

#[tokio::test]
async fn missing_fields_are_batched() {
    let error = CreatePassportUseCase::new(repository())
        .execute(Default::default())
        .await
        .expect_err("empty request");

    let fields: Vec<_> = expect_validation(error)
        .into_iter()
        .map(|(field, _)| field)
        .collect();
    assert_eq!(
        fields,
        vec![
            "passportNumber",
            "issuingCountry",
            "nationality",
            "firstName",
            "lastName",
            "issueDate",
            "expiryDate",
            "personType",
            "personId",
            "status",
        ]
    );
}

#[tokio::test]
async fn duplicate_passport_number_is_rejected() {
    let repository = repository();
    let create = CreatePassportUseCase::new(repository.clone());
    create
        .execute(passport_request("G1234567"))
        .await
        .expect("first passport");

    let error = create
        .execute(passport_request("g1234567"))
        .await
        .expect_err("number taken");

    assert_eq!(
        expect_validation(error),
        vec![(
            "passportNumber".to_string(),
            "Passport number already exists".to_string()
        )]
    );
}

#[tokio::test]
async fn update_checks_effective_dates_and_number() {
    let repository = repository();
    let create = CreatePassportUseCase::new(repository.clone());
    let first = create
        .execute(passport_request("G1"))
        .await
        .expect("first");
    create
        .execute(passport_request("G2"))
        .await
        .expect("second");
    let update = UpdatePassportUseCase::new(repository);

    let error = update
        .execute(
            first.id,
            PassportPatch {
                expiry_date: Some(date(2020, 1, 1)),
                ..PassportPatch::default()
            },
        )
        .await
        .expect_err("expiry now before stored issue date");
    assert_eq!(expect_validation(error)[0].0, "expiryDate");

    let error = update
        .execute(
            first.id,
            PassportPatch {
                passport_number: Some("g2".to_string()),
                ..PassportPatch::default()
            },
        )
        .await
        .expect_err("number taken");
    assert_eq!(expect_validation(error)[0].0, "passportNumber");

    let renewed = update
        .execute(
            first.id,
            PassportPatch {
                passport_number: Some("g1".to_string()),
                first_name: Some("Abena".to_string()),
                expiry_date: Some(date(2035, 1, 1)),
                ..PassportPatch::default()
            },
        )
        .await
        .expect("renewed");
    assert_eq!(renewed.passport_number, "G1");
    assert_eq!(renewed.full_name, "Abena Owusu");
    assert_eq!(renewed.expiry_date, date(2035, 1, 1));
}

#[tokio::test]
async fn soft_delete_marks_expired() {
    let repository = repository();
    let created = CreatePassportUseCase::new(repository.clone())
        .execute(passport_request("G1"))
        .await
        .expect("created");

    let expired = DeletePassportUseCase::new(repository.clone())
        .soft_delete(created.id)
        .await
        .expect("soft delete");

    assert_eq!(expired.status, "EXPIRED");
    assert!(repository.exists(created.id).await.expect("lookup"));
}

#[tokio::test]
async fn expiring_defaults_to_ninety_days() {
    let repository = repository();
    let create = CreatePassportUseCase::new(repository.clone());
    let today = Utc::now().date_naive();
    for (number, offset) in [("SOON", 30), ("LATER", 120), ("EDGE", 90)] {
        let mut request = passport_request(number);
        request.issue_date = Some(date(2015, 1, 1));
        request.expiry_date = today.checked_add_days(Days::new(offset));
        create.execute(request).await.expect("created");
    }
    let expiring = GetExpiringPassportsUseCase::new(repository);

    let default_window = expiring.execute(None).await.expect("expiring");
    assert_eq!(
        default_window
            .iter()
            .map(|passport| passport.passport_number.as_str())
            .collect::<Vec<_>>(),
        vec!["SOON", "EDGE"]
    );

    let wide = expiring.execute(Some(365)).await.expect("expiring");
    assert_eq!(wide.len(), 3);
}

#[tokio::test]
async fn list_by_holder_and_stats() {
    let repository = repository();
    let create = CreatePassportUseCase::new(repository.clone());
    create.execute(passport_request("G1")).await.expect("g1");
    let mut other = passport_request("K1");
    other.nationality = Some("Kenyan".to_string());
    other.issuing_country = Some("Kenya".to_string());
    other.person_type = Some(PersonType::Dependent);
    other.person_id = Some(9);
    create.execute(other).await.expect("k1");
    let list = GetAllPassportsUseCase::new(repository);

    let dependents = list
        .execute(&PassportFilters {
            person_type: Some(PersonType::Dependent),
            person_id: Some(9),
            ..PassportFilters::default()
        })
        .await
        .expect("dependents");
    assert_eq!(dependents.len(), 1);
    assert_eq!(dependents[0].passport_number, "K1");

    let stats = list
        .execute_with_stats(&PassportFilters::default())
        .await
        .expect("stats");
    assert_eq!(stats.nationalities, vec!["Ghanaian", "Kenyan"]);
    assert_eq!(stats.issuing_countries, vec!["Ghana", "Kenya"]);
}
