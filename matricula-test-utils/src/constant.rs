//! Standard values used by fixtures & factories.

/// City of the mock campus
pub const TEST_CITY: &str = "Campinas";

/// Unit of the mock campus
pub const TEST_UNIT: &str = "Vila Industrial";

/// Street address of the mock campus
pub const TEST_ADDRESS: &str = "Rua Dr. Sales de Oliveira, nº 1661 - Vila Industrial - Campinas";

/// Unit name used by distance learning courses
pub const TEST_DISTANCE_UNIT: &str = "Polo EaD";

/// Domain of generated student e-mail addresses
pub const TEST_EMAIL_DOMAIN: &str = "example.com";
