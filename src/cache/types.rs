use std::time::Duration;

/// Outcome of a timed cache read.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup {
    Hit {
        result: String,
        /// Round-trip time of the `GET`.
        access_time: Duration,
        /// Query duration recorded when the entry was hydrated.
        original_dsql_time: Duration,
    },
    Miss {
        access_time: Duration,
    },
}

impl CacheLookup {
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheLookup::Hit { .. })
    }

    #[inline]
    pub fn access_time(&self) -> Duration {
        match self {
            CacheLookup::Hit { access_time, .. } | CacheLookup::Miss { access_time } => {
                *access_time
            }
        }
    }

    pub fn result(&self) -> Option<&str> {
        match self {
            CacheLookup::Hit { result, .. } => Some(result),
            CacheLookup::Miss { .. } => None,
        }
    }
}

impl std::fmt::Display for CacheLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheLookup::Hit { .. } => write!(f, "HIT"),
            CacheLookup::Miss { .. } => write!(f, "MISS"),
        }
    }
}
