/// Default page number for list endpoints
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

/// Length of the random suffix appended to colliding slugs
pub const SLUG_SUFFIX_LEN: usize = 4;
