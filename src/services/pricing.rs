//! Pricing calculator: pure tier selection and surcharge arithmetic.

use crate::error::{QuoteError, QuoteResult};
use crate::models::PricingTier;

/// Compute the price for a single visit.
///
/// Tiers are scanned in declaration order and the first one whose
/// `max_distance_km` is at or above the travel distance applies. A distance
/// beyond every threshold falls back to the last tier: overflow is priced at
/// the top bracket, not rejected. The caller is responsible for keeping the
/// table sorted ascending; the calculator does not re-sort.
///
/// Surcharges: a flat `holiday_surcharge` when `is_holiday`, plus
/// `(cat_count - 1) * extra_cat_surcharge` beyond the first cat. No rounding
/// is applied; fractional prices propagate unchanged.
pub fn visit_price(
    distance_km: f64,
    cat_count: u32,
    is_holiday: bool,
    tiers: &[PricingTier],
    holiday_surcharge: f64,
    extra_cat_surcharge: f64,
) -> QuoteResult<f64> {
    let last = tiers.last().ok_or(QuoteError::InvalidConfiguration)?;

    let tier = tiers
        .iter()
        .find(|t| distance_km <= t.max_distance_km)
        .unwrap_or(last);

    let mut price = tier.price;

    if is_holiday {
        price += holiday_surcharge;
    }

    if cat_count > 1 {
        price += f64::from(cat_count - 1) * extra_cat_surcharge;
    }

    Ok(price)
}
