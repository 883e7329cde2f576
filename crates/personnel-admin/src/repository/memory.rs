use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{DateTime, Days, NaiveDate, Utc};

use super::{
    EmployeeRepository, EmployerRepository, PassportRepository, RepositoryError,
    RepositoryResult, StatusCount, VisaRepository,
};
use crate::domain::{
    Employee, EmployeeFilters, Employer, EmployerFilters, Passport, PassportFilters, Visa,
    VisaFilters,
};

/// Row stored in a [`MemoryTable`].
trait Record: Clone + Send + 'static {
    fn id(&self) -> i64;
    fn created_at(&self) -> DateTime<Utc>;
    fn stamp(&mut self, id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>);
    /// `(field, normalized key)` pairs that must be unique across the table.
    fn unique_keys(&self) -> Vec<(&'static str, String)>;
}

struct TableState<T> {
    next_id: i64,
    rows: BTreeMap<i64, T>,
}

impl<T> Default for TableState<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// Mutex-guarded id-keyed table enforcing unique keys at write time.
struct MemoryTable<T> {
    state: Mutex<TableState<T>>,
}

impl<T> Default for MemoryTable<T> {
    fn default() -> Self {
        Self {
            state: Mutex::new(TableState::default()),
        }
    }
}

impl<T: Record> MemoryTable<T> {
    fn lock(&self) -> RepositoryResult<MutexGuard<'_, TableState<T>>> {
        self.state
            .lock()
            .map_err(|_| RepositoryError::Unavailable("in-memory table lock poisoned".to_string()))
    }

    fn get(&self, id: i64) -> RepositoryResult<Option<T>> {
        Ok(self.lock()?.rows.get(&id).cloned())
    }

    fn select(&self, predicate: impl Fn(&T) -> bool) -> RepositoryResult<Vec<T>> {
        Ok(self
            .lock()?
            .rows
            .values()
            .filter(|row| predicate(row))
            .cloned()
            .collect())
    }

    fn find_first(&self, predicate: impl Fn(&T) -> bool) -> RepositoryResult<Option<T>> {
        Ok(self.lock()?.rows.values().find(|row| predicate(row)).cloned())
    }

    fn insert(&self, mut row: T) -> RepositoryResult<T> {
        let mut state = self.lock()?;
        ensure_unique(&state.rows, &row, None)?;

        let id = state.next_id;
        state.next_id += 1;
        let now = Utc::now();
        row.stamp(id, now, now);
        state.rows.insert(id, row.clone());
        Ok(row)
    }

    fn replace(&self, id: i64, mut row: T) -> RepositoryResult<Option<T>> {
        let mut state = self.lock()?;
        let created_at = match state.rows.get(&id) {
            Some(existing) => existing.created_at(),
            None => return Ok(None),
        };
        ensure_unique(&state.rows, &row, Some(id))?;

        row.stamp(id, created_at, Utc::now());
        state.rows.insert(id, row.clone());
        Ok(Some(row))
    }

    fn remove(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.lock()?.rows.remove(&id).is_some())
    }

    fn contains(&self, id: i64) -> RepositoryResult<bool> {
        Ok(self.lock()?.rows.contains_key(&id))
    }

    fn status_histogram(&self, status: impl Fn(&T) -> &str) -> RepositoryResult<Vec<StatusCount>> {
        let state = self.lock()?;
        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for row in state.rows.values() {
            *counts.entry(status(row).to_string()).or_default() += 1;
        }

        Ok(counts
            .into_iter()
            .map(|(status, count)| StatusCount { status, count })
            .collect())
    }

    fn distinct(&self, value: impl Fn(&T) -> Option<&str>) -> RepositoryResult<Vec<String>> {
        let state = self.lock()?;
        let values: BTreeSet<String> = state
            .rows
            .values()
            .filter_map(|row| value(row))
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        Ok(values.into_iter().collect())
    }

    fn expiring(&self, days: u32, expiry: impl Fn(&T) -> NaiveDate) -> RepositoryResult<Vec<T>> {
        let today = Utc::now().date_naive();
        let until = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);

        let mut rows = self.select(|row| {
            let date = expiry(row);
            date >= today && date <= until
        })?;
        rows.sort_by_key(|row| (expiry(row), row.id()));
        Ok(rows)
    }
}

fn ensure_unique<T: Record>(
    rows: &BTreeMap<i64, T>,
    candidate: &T,
    except: Option<i64>,
) -> RepositoryResult<()> {
    for (field, key) in candidate.unique_keys() {
        let taken = rows
            .values()
            .filter(|row| Some(row.id()) != except)
            .any(|row| {
                row.unique_keys()
                    .iter()
                    .any(|(other_field, other_key)| *other_field == field && *other_key == key)
            });
        if taken {
            return Err(RepositoryError::UniqueViolation {
                field: field.to_string(),
            });
        }
    }
    Ok(())
}

fn email_key(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

fn document_key(number: &str) -> String {
    number.trim().to_ascii_uppercase()
}

macro_rules! stamped_record {
    ($entity:ty, |$row:ident| $keys:expr) => {
        impl Record for $entity {
            fn id(&self) -> i64 {
                self.id
            }

            fn created_at(&self) -> DateTime<Utc> {
                self.created_at
            }

            fn stamp(&mut self, id: i64, created_at: DateTime<Utc>, updated_at: DateTime<Utc>) {
                self.id = id;
                self.created_at = created_at;
                self.updated_at = updated_at;
            }

            fn unique_keys(&self) -> Vec<(&'static str, String)> {
                let $row = self;
                $keys
            }
        }
    };
}

stamped_record!(Employee, |row| vec![("email", email_key(&row.email))]);
stamped_record!(Employer, |row| {
    let mut keys = Vec::new();
    if let Some(email) = row.email.as_deref().filter(|email| !email.trim().is_empty()) {
        keys.push(("email", email_key(email)));
    }
    if let Some(number) = row
        .registration_number
        .as_deref()
        .filter(|number| !number.trim().is_empty())
    {
        keys.push(("registrationNumber", document_key(number)));
    }
    keys
});
stamped_record!(Passport, |row| vec![(
    "passportNumber",
    document_key(&row.passport_number)
)]);
stamped_record!(Visa, |row| vec![("visaNumber", document_key(&row.visa_number))]);

#[derive(Default, Clone)]
pub struct InMemoryEmployeeRepository {
    table: Arc<MemoryTable<Employee>>,
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Employee>> {
        self.table.get(id)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employee>> {
        self.table.select(|_| true)
    }

    async fn find_by_filters(&self, filters: &EmployeeFilters) -> RepositoryResult<Vec<Employee>> {
        self.table.select(|employee| filters.matches(employee))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        let key = email_key(email);
        self.table
            .find_first(|employee| email_key(&employee.email) == key)
    }

    async fn create(&self, employee: Employee) -> RepositoryResult<Employee> {
        self.table.insert(employee)
    }

    async fn update(&self, id: i64, employee: Employee) -> RepositoryResult<Option<Employee>> {
        self.table.replace(id, employee)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.table.remove(id)
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        self.table.contains(id)
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        self.table.status_histogram(|employee| employee.status.as_str())
    }

    async fn get_distinct_departments(&self) -> RepositoryResult<Vec<String>> {
        self.table
            .distinct(|employee| employee.department.as_deref())
    }

    async fn get_distinct_positions(&self) -> RepositoryResult<Vec<String>> {
        self.table.distinct(|employee| employee.position.as_deref())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryEmployerRepository {
    table: Arc<MemoryTable<Employer>>,
}

#[async_trait]
impl EmployerRepository for InMemoryEmployerRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Employer>> {
        self.table.get(id)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Employer>> {
        self.table.select(|_| true)
    }

    async fn find_by_filters(&self, filters: &EmployerFilters) -> RepositoryResult<Vec<Employer>> {
        self.table.select(|employer| filters.matches(employer))
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<Employer>> {
        let key = email_key(email);
        self.table.find_first(|employer| {
            employer
                .email
                .as_deref()
                .is_some_and(|email| email_key(email) == key)
        })
    }

    async fn find_by_registration_number(
        &self,
        registration_number: &str,
    ) -> RepositoryResult<Option<Employer>> {
        let key = document_key(registration_number);
        self.table.find_first(|employer| {
            employer
                .registration_number
                .as_deref()
                .is_some_and(|number| document_key(number) == key)
        })
    }

    async fn create(&self, employer: Employer) -> RepositoryResult<Employer> {
        self.table.insert(employer)
    }

    async fn update(&self, id: i64, employer: Employer) -> RepositoryResult<Option<Employer>> {
        self.table.replace(id, employer)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.table.remove(id)
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        self.table.contains(id)
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        self.table.status_histogram(|employer| employer.status.as_str())
    }

    async fn get_distinct_industries(&self) -> RepositoryResult<Vec<String>> {
        self.table.distinct(|employer| employer.industry.as_deref())
    }

    async fn get_distinct_countries(&self) -> RepositoryResult<Vec<String>> {
        self.table.distinct(|employer| employer.country.as_deref())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryPassportRepository {
    table: Arc<MemoryTable<Passport>>,
}

#[async_trait]
impl PassportRepository for InMemoryPassportRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Passport>> {
        self.table.get(id)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Passport>> {
        self.table.select(|_| true)
    }

    async fn find_by_filters(&self, filters: &PassportFilters) -> RepositoryResult<Vec<Passport>> {
        self.table.select(|passport| filters.matches(passport))
    }

    async fn find_by_passport_number(
        &self,
        passport_number: &str,
    ) -> RepositoryResult<Option<Passport>> {
        let key = document_key(passport_number);
        self.table
            .find_first(|passport| document_key(&passport.passport_number) == key)
    }

    async fn create(&self, passport: Passport) -> RepositoryResult<Passport> {
        self.table.insert(passport)
    }

    async fn update(&self, id: i64, passport: Passport) -> RepositoryResult<Option<Passport>> {
        self.table.replace(id, passport)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.table.remove(id)
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        self.table.contains(id)
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        self.table.status_histogram(|passport| passport.status.as_str())
    }

    async fn get_distinct_nationalities(&self) -> RepositoryResult<Vec<String>> {
        self.table
            .distinct(|passport| Some(passport.nationality.as_str()))
    }

    async fn get_distinct_issuing_countries(&self) -> RepositoryResult<Vec<String>> {
        self.table
            .distinct(|passport| Some(passport.issuing_country.as_str()))
    }

    async fn find_expiring_within_days(&self, days: u32) -> RepositoryResult<Vec<Passport>> {
        self.table.expiring(days, |passport| passport.expiry_date)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryVisaRepository {
    table: Arc<MemoryTable<Visa>>,
}

#[async_trait]
impl VisaRepository for InMemoryVisaRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Visa>> {
        self.table.get(id)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Visa>> {
        self.table.select(|_| true)
    }

    async fn find_by_filters(&self, filters: &VisaFilters) -> RepositoryResult<Vec<Visa>> {
        self.table.select(|visa| filters.matches(visa))
    }

    async fn find_by_visa_number(&self, visa_number: &str) -> RepositoryResult<Option<Visa>> {
        let key = document_key(visa_number);
        self.table
            .find_first(|visa| document_key(&visa.visa_number) == key)
    }

    async fn create(&self, visa: Visa) -> RepositoryResult<Visa> {
        self.table.insert(visa)
    }

    async fn update(&self, id: i64, visa: Visa) -> RepositoryResult<Option<Visa>> {
        self.table.replace(id, visa)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        self.table.remove(id)
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        self.table.contains(id)
    }

    async fn get_stats_by_status(&self) -> RepositoryResult<Vec<StatusCount>> {
        self.table.status_histogram(|visa| visa.visa_status.as_str())
    }

    async fn get_distinct_visa_types(&self) -> RepositoryResult<Vec<String>> {
        self.table.distinct(|visa| Some(visa.visa_type.as_str()))
    }

    async fn get_distinct_destination_countries(&self) -> RepositoryResult<Vec<String>> {
        self.table
            .distinct(|visa| Some(visa.destination_country.as_str()))
    }

    async fn find_expiring_within_days(&self, days: u32) -> RepositoryResult<Vec<Visa>> {
        self.table.expiring(days, |visa| visa.expiry_date)
    }
}
