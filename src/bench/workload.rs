use crate::constants::{COMPLEX_QUERY, SIMPLE_QUERY};

/// Which fixed query the benchmark runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workload {
    /// Table scan over the seeded `users1` table.
    Simple,
    /// Join + aggregation over `users` and `orders`.
    #[default]
    Complex,
}

impl Workload {
    #[inline]
    pub fn query(&self) -> &'static str {
        match self {
            Workload::Simple => SIMPLE_QUERY,
            Workload::Complex => COMPLEX_QUERY,
        }
    }

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::Simple => "simple",
            Workload::Complex => "complex",
        }
    }

    /// The simple workload reads a table this tool can create itself.
    #[inline]
    pub fn seeds_own_table(&self) -> bool {
        matches!(self, Workload::Simple)
    }

    /// Parses a user-supplied name, falling back to [`Workload::Complex`] for
    /// anything unrecognised.
    pub fn from_name_lossy(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::warn!(name, "unknown query type, using complex");
            Workload::Complex
        })
    }
}

impl std::str::FromStr for Workload {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" | "1" => Ok(Self::Simple),
            "complex" | "2" => Ok(Self::Complex),
            _ => Err(format!("Unknown query type: {}", s)),
        }
    }
}

impl std::fmt::Display for Workload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
