//! Byte-size conversion helpers.
//!
//! Sizes are reported in binary units: one KB is 1024 bytes and one MB is
//! 1024 * 1024 bytes. Both derived views are computed from the same byte
//! count, so they can never disagree with each other.

/// Number of bytes in one kilobyte (binary).
pub const BYTES_PER_KB: u64 = 1_024;

/// Number of bytes in one megabyte (binary).
pub const BYTES_PER_MB: u64 = 1_048_576;

/// Convert a byte count to kilobytes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn kilobytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_KB as f64
}

/// Convert a byte count to megabytes.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn megabytes(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_kilobytes_exact_values() {
        assert_close(kilobytes(0), 0.0);
        assert_close(kilobytes(512), 0.5);
        assert_close(kilobytes(1_024), 1.0);
        assert_close(kilobytes(2_048), 2.0);
        assert_close(kilobytes(1_536), 1.5);
    }

    #[test]
    fn test_megabytes_exact_values() {
        assert_close(megabytes(0), 0.0);
        assert_close(megabytes(524_288), 0.5);
        assert_close(megabytes(1_048_576), 1.0);
        assert_close(megabytes(1_572_864), 1.5);
    }

    #[test]
    fn test_views_derive_from_the_same_byte_count() {
        let bytes = 3_407_872; // 3.25 MB
        assert_close(kilobytes(bytes) / 1_024.0, megabytes(bytes));
    }

    #[test]
    fn test_two_decimal_rendering() {
        assert_eq!(format!("{:.2}", kilobytes(2_048)), "2.00");
        assert_eq!(format!("{:.2}", kilobytes(1_100)), "1.07");
        assert_eq!(format!("{:.2}", megabytes(1_572_864)), "1.50");
    }
}
