//! Property identifiers and ecosystem classification
//!
//! Properties live in one of two ecosystems. The main ecosystem is fully
//! height-gated; the test ecosystem is a parallel namespace exempted from
//! height restrictions so new transaction types can be exercised before
//! their mainstream activation.

/// The native coin of the host chain, used as a wildcard property
pub const PROPERTY_NATIVE: u32 = 0;
/// The main-ecosystem protocol token
pub const PROPERTY_MAIN_TOKEN: u32 = 1;
/// The test-ecosystem protocol token
pub const PROPERTY_TEST_TOKEN: u32 = 2;
/// First property identifier assigned in the test ecosystem
pub const PROPERTY_TEST_ECO_FIRST: u32 = 0x8000_0003;

/// Whether a property belongs to the test ecosystem
pub const fn is_test_ecosystem(property_id: u32) -> bool {
    property_id == PROPERTY_TEST_TOKEN || property_id >= 0x8000_0000
}

/// Whether a property belongs to the main ecosystem
///
/// The native coin is neither: it is the wildcard, not an overlay property.
pub const fn is_main_ecosystem(property_id: u32) -> bool {
    property_id != PROPERTY_NATIVE && !is_test_ecosystem(property_id)
}
