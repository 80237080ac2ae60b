//! Satoshi/BTC conversion and formatting
//!
//! Raw explorer values arrive in satoshis; every reported amount is a
//! BTC value at 8 decimal places.

/// Satoshis per Bitcoin
pub const SATS_PER_BTC: f64 = 100_000_000.0;

/// Convert a satoshi amount to BTC.
///
/// # Examples
/// ```
/// use btc_address_analyser::utils::currency::sats_to_btc;
///
/// assert_eq!(sats_to_btc(50_000_000), 0.5);
/// assert_eq!(sats_to_btc(0), 0.0);
/// ```
#[inline]
pub fn sats_to_btc(sats: u64) -> f64 {
    sats as f64 / SATS_PER_BTC
}

/// Format a BTC amount at satoshi precision.
///
/// # Examples
/// ```
/// use btc_address_analyser::utils::currency::format_btc;
///
/// assert_eq!(format_btc(281.2535185), "281.25351850");
/// assert_eq!(format_btc(0.00005471), "0.00005471");
/// ```
pub fn format_btc(btc: f64) -> String {
    format!("{:.8}", btc)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sats_to_btc() {
        assert_eq!(sats_to_btc(100_000_000), 1.0);
        assert_eq!(sats_to_btc(50_000_000), 0.5);
        assert_eq!(sats_to_btc(1), 0.00000001);
        assert_eq!(sats_to_btc(0), 0.0);
    }

    #[test]
    fn test_format_btc() {
        assert_eq!(format_btc(1.0), "1.00000000");
        assert_eq!(format_btc(0.5), "0.50000000");
        assert_eq!(format_btc(0.0), "0.00000000");
        assert_eq!(format_btc(281.2535185), "281.25351850");
    }

    #[test]
    fn test_precision_survives_round_trip() {
        // Satoshi precision holds through the f64 conversion
        assert_eq!(format_btc(sats_to_btc(1)), "0.00000001");
        assert_eq!(format_btc(sats_to_btc(2_100_000_000_000_000)), "21000000.00000000");
    }
}
