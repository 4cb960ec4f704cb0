use std::time::Duration;

use dsqlbench::bench::BenchSettings;
use dsqlbench::constants::{COMPLEX_QUERY, SEED_ROWS, SIMPLE_QUERY};
use dsqlbench::query::MockQueryBackend;

pub const DB_LATENCY: Duration = Duration::from_millis(15);

/// The seed table as the simple query returns it.
pub fn users1_rows() -> Vec<Vec<Option<String>>> {
    SEED_ROWS
        .iter()
        .map(|(id, name, email, age, department, salary, hire_date)| {
            vec![
                Some(id.to_string()),
                Some(name.to_string()),
                Some(email.to_string()),
                Some(age.to_string()),
                Some(department.to_string()),
                Some(salary.to_string()),
                Some(hire_date.to_string()),
                Some("t".to_string()),
                None,
            ]
        })
        .collect()
}

/// One aggregated user row from the complex query.
pub fn complex_rows() -> Vec<Vec<Option<String>>> {
    vec![vec![
        Some("1".to_string()),
        Some("John Doe".to_string()),
        Some("john.doe@company.com".to_string()),
        Some("Engineering".to_string()),
        Some("admin".to_string()),
        None,
        Some("4".to_string()),
        Some("6".to_string()),
        Some("412.50".to_string()),
        Some("68.75".to_string()),
        Some("online, store".to_string()),
    ]]
}

pub fn backend() -> MockQueryBackend {
    MockQueryBackend::new(DB_LATENCY)
        .with_result(SIMPLE_QUERY, users1_rows())
        .with_result(COMPLEX_QUERY, complex_rows())
}

pub fn settings() -> BenchSettings {
    BenchSettings {
        cache_hits: 9,
        ttl: Duration::from_secs(30),
    }
}
