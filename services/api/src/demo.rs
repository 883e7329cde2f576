use crate::infra::{in_memory_repositories, seed_demo_records, MemoryRepositories};
use chrono::{NaiveDate, Utc};
use clap::Args;
use personnel_admin::domain::{
    EmployeeFilters, EmployeePatch, NewEmployee, PassportFilters, VisaFilters,
};
use personnel_admin::error::AppError;
use personnel_admin::use_cases::employee::{
    CreateEmployeeUseCase, DeleteEmployeeUseCase, GetAllEmployeesUseCase, UpdateEmployeeUseCase,
};
use personnel_admin::use_cases::passport::{
    DeletePassportUseCase, GetAllPassportsUseCase, GetExpiringPassportsUseCase,
};
use personnel_admin::use_cases::visa::{GetAllVisasUseCase, GetExpiringVisasUseCase};
use personnel_admin::use_cases::DEFAULT_EXPIRY_WINDOW_DAYS;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reference date for the seeded document dates (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Look-ahead for the expiring-document report, in days.
    #[arg(long)]
    pub(crate) expiring_within: Option<u32>,
    /// Skip the validation walkthrough.
    #[arg(long)]
    pub(crate) skip_validation: bool,
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        today,
        expiring_within,
        skip_validation,
    } = args;

    let today = today.unwrap_or_else(|| Utc::now().date_naive());
    let window = expiring_within.unwrap_or(DEFAULT_EXPIRY_WINDOW_DAYS);
    let repositories = in_memory_repositories();

    println!("Personnel admin demo ({today})");
    let seeded = seed_demo_records(&repositories, today).await?;
    println!(
        "- seeded {} employer | {} employees | {} passports | {} visas",
        seeded.employers, seeded.employees, seeded.passports, seeded.visas
    );

    if !skip_validation {
        render_validation_walkthrough(&repositories).await;
    }

    let employees = GetAllEmployeesUseCase::new(Arc::clone(&repositories.employees))
        .execute(&EmployeeFilters::default())
        .await?;
    if let Some(first) = employees.first() {
        let promoted = UpdateEmployeeUseCase::new(Arc::clone(&repositories.employees))
            .execute(
                first.id,
                EmployeePatch {
                    position: Some("Operations Lead".to_string()),
                    ..EmployeePatch::default()
                },
            )
            .await?;
        println!(
            "\nUpdated {} ({}) -> {}",
            promoted.full_name,
            promoted.emp_id,
            promoted.position.as_deref().unwrap_or("-")
        );
    }
    if let Some(last) = employees.last() {
        let terminated = DeleteEmployeeUseCase::new(Arc::clone(&repositories.employees))
            .soft_delete(last.id)
            .await?;
        println!(
            "Deactivated {} -> status {}",
            terminated.full_name, terminated.status
        );
    }

    let passports = GetExpiringPassportsUseCase::new(Arc::clone(&repositories.passports))
        .execute(Some(window))
        .await?;
    let visas = GetExpiringVisasUseCase::new(Arc::clone(&repositories.visas))
        .execute(Some(window))
        .await?;
    println!("\nDocuments expiring within {window} days");
    if passports.is_empty() && visas.is_empty() {
        println!("  none");
    }
    for passport in &passports {
        println!(
            "  passport {} | {} | expires {}",
            passport.passport_number, passport.full_name, passport.expiry_date
        );
    }
    for visa in &visas {
        println!(
            "  visa {} ({}) | {} | expires {}",
            visa.visa_number, visa.visa_type, visa.person_name, visa.expiry_date
        );
    }

    if let Some(passport) = passports.first() {
        let retired = DeletePassportUseCase::new(Arc::clone(&repositories.passports))
            .soft_delete(passport.id)
            .await?;
        println!(
            "Retired passport {} -> status {}",
            retired.passport_number, retired.status
        );
    }

    render_stats(&repositories).await
}

async fn render_validation_walkthrough(repositories: &MemoryRepositories) {
    println!("\nValidation walkthrough");
    let create = CreateEmployeeUseCase::new(Arc::clone(&repositories.employees));
    let attempt = create
        .execute(NewEmployee {
            first_name: Some("Kwame".to_string()),
            email: Some("KWAME.MENSAH@northwind.example".to_string()),
            salary: Some(-10.0),
            ..NewEmployee::default()
        })
        .await;

    match attempt {
        Ok(employee) => println!("  Unexpectedly accepted {}", employee.emp_id),
        Err(err) => {
            println!("  Rejected: {err}");
            if let Some(validation) = err.validation() {
                for field_error in validation.errors() {
                    println!("    {}: {}", field_error.field, field_error.message);
                }
            }
        }
    }
}

async fn render_stats(repositories: &MemoryRepositories) -> Result<(), AppError> {
    let employees = GetAllEmployeesUseCase::new(Arc::clone(&repositories.employees))
        .execute_with_stats(&EmployeeFilters::default())
        .await?;
    let passports = GetAllPassportsUseCase::new(Arc::clone(&repositories.passports))
        .execute_with_stats(&PassportFilters::default())
        .await?;
    let visas = GetAllVisasUseCase::new(Arc::clone(&repositories.visas))
        .execute_with_stats(&VisaFilters::default())
        .await?;

    println!("\nStatus breakdown");
    for (label, counts) in [
        ("employees", &employees.status_counts),
        ("passports", &passports.status_counts),
        ("visas", &visas.status_counts),
    ] {
        let rendered: Vec<String> = counts
            .iter()
            .map(|bucket| format!("{} {}", bucket.count, bucket.status))
            .collect();
        println!("  {label}: {}", rendered.join(", "));
    }
    println!("  departments: {}", employees.departments.join(", "));
    println!("  destinations: {}", visas.destination_countries.join(", "));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn demo_runs_against_a_fixed_date() {
        let args = DemoArgs {
            today: NaiveDate::from_ymd_opt(2026, 10, 18),
            expiring_within: Some(30),
            skip_validation: false,
        };
        run_demo(args).await.expect("demo completes");
    }
}
