//! Fixed SQL used by the demo workloads and the seed table.
//!
//! The workload queries double as cache keys, so their exact text (including
//! the trailing semicolon) must not change between runs that share a cache.

/// Full scan of the seeded `users1` table.
pub const SIMPLE_QUERY: &str = "SELECT * FROM users1;";

/// Join + aggregation over `users` and `orders` (tables provisioned separately).
pub const COMPLEX_QUERY: &str = "SELECT u.user_id, u.name, u.email, u.department, u.role, u.last_login, COUNT(DISTINCT o.order_date) as active_days, COUNT(o.order_id) as recent_orders, COALESCE(SUM(o.order_amount), 0) as recent_spending, COALESCE(AVG(o.order_amount), 0) as avg_order_size, STRING_AGG(DISTINCT o.order_type, ', ') as order_types FROM users u LEFT JOIN orders o ON u.user_id = o.user_id AND o.order_date >= CURRENT_DATE - INTERVAL '30 days' WHERE u.user_id = 1 GROUP BY u.user_id, u.name, u.email, u.department, u.role, u.last_login;";

pub const SEED_TABLE: &str = "users1";

pub const SEED_TABLE_EXISTS_SQL: &str = "SELECT EXISTS (SELECT FROM information_schema.tables WHERE table_schema = 'public' AND table_name = 'users1')";

pub const SEED_COUNT_SQL: &str = "SELECT COUNT(*) FROM users1";

pub const SEED_CREATE_SQL: &str = "CREATE TABLE users1 (
    id INTEGER PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    age INTEGER,
    department VARCHAR(50),
    salary DECIMAL(10,2),
    hire_date DATE,
    is_active BOOLEAN
)";

pub const SEED_SAMPLE_SQL: &str = "SELECT id, name, email, department FROM users1 ORDER BY id LIMIT 3";

/// One seed row: id, name, email, age, department, salary, hire date.
pub type SeedRow = (i32, &'static str, &'static str, i32, &'static str, &'static str, &'static str);

pub const SEED_ROWS: [SeedRow; 10] = [
    (1, "John Doe", "john.doe@company.com", 30, "Engineering", "75000.00", "2022-01-15"),
    (2, "Jane Smith", "jane.smith@company.com", 28, "Marketing", "65000.00", "2022-02-20"),
    (3, "Mike Johnson", "mike.johnson@company.com", 35, "Engineering", "85000.00", "2021-11-10"),
    (4, "Sarah Wilson", "sarah.wilson@company.com", 32, "Sales", "70000.00", "2022-03-05"),
    (5, "David Brown", "david.brown@company.com", 29, "Engineering", "78000.00", "2022-01-25"),
    (6, "Lisa Garcia", "lisa.garcia@company.com", 31, "HR", "62000.00", "2022-04-12"),
    (7, "Tom Davis", "tom.davis@company.com", 27, "Marketing", "58000.00", "2022-05-18"),
    (8, "Emma Martinez", "emma.martinez@company.com", 33, "Engineering", "82000.00", "2021-12-08"),
    (9, "Chris Anderson", "chris.anderson@company.com", 26, "Sales", "67000.00", "2022-06-22"),
    (10, "Amy Taylor", "amy.taylor@company.com", 34, "Engineering", "88000.00", "2021-10-15"),
];

/// Number of cache-hit iterations after the initial miss.
pub const DEFAULT_CACHE_HITS: usize = 9;
