//! Utility functions used across the fnplot application

use uuid::Uuid;

/// Generate a short random hexadecimal identifier suitable for
/// collision-resistant filenames.
///
/// Eight hex characters of a v4 UUID give 32 bits of randomness, which is
/// plenty for a directory of generated images that is never cleaned up.
pub fn short_hex_id() -> String {
    Uuid::new_v4().simple().to_string()[..8].to_string()
}
