//! Quote builder: orchestrates distance lookup, per-date holiday
//! classification and pricing into a multi-day quote.

use crate::client::GeocodingProvider;
use crate::error::{QuoteError, QuoteResult};
use crate::models::appointment::is_holiday;
use crate::models::{Appointment, AppointmentStatus, DateCharge, Quote, Settings};
use crate::services::pricing::visit_price;
use chrono::{NaiveDate, NaiveTime};
use std::sync::Arc;
use uuid::Uuid;

/// Client details supplied when a quote is confirmed.
#[derive(Debug, Clone)]
pub struct ConfirmDetails {
    /// Client name
    pub client_name: String,

    /// Visit address (the quote's destination)
    pub address: String,

    /// Clock time for every visit of the batch
    pub time: NaiveTime,

    /// Number of cats
    pub cat_count: u32,

    /// Door/key-box code
    pub lock_code: String,

    /// Free-form notes
    pub notes: String,
}

/// Builds quotes against the injected geocoding provider.
///
/// Quote building is pure orchestration: it never touches the appointment
/// book, and two concurrent quote requests run independently.
pub struct QuoteBuilder {
    provider: Arc<dyn GeocodingProvider>,
}

impl QuoteBuilder {
    /// Create a new quote builder.
    pub fn new(provider: Arc<dyn GeocodingProvider>) -> Self {
        Self { provider }
    }

    /// Build a quote for visiting `destination` on each of `dates`.
    ///
    /// The travel distance is resolved once for the whole batch; every date
    /// is then classified and priced independently. The returned quote's
    /// `total_price` equals the exact sum of its per-date prices.
    pub async fn build_quote(
        &self,
        destination: &str,
        dates: &[NaiveDate],
        cat_count: u32,
        settings: &Settings,
    ) -> QuoteResult<Quote> {
        if destination.trim().is_empty() {
            return Err(QuoteError::MissingAddress);
        }
        if settings.base_address.trim().is_empty() {
            return Err(QuoteError::MissingOrigin);
        }
        if dates.is_empty() {
            return Err(QuoteError::NoDatesSelected);
        }

        // The expensive, failure-prone step; aborts the whole quote on error
        let route = self
            .provider
            .resolve_distance(&settings.base_address, destination)
            .await?;

        tracing::debug!(
            distance_km = route.distance_km,
            duration_min = route.duration_min,
            "route resolved for quote"
        );

        let mut per_date = Vec::with_capacity(dates.len());
        let mut total_price = 0.0;

        for &date in dates {
            let holiday = is_holiday(date);
            let price = visit_price(
                route.distance_km,
                cat_count,
                holiday,
                &settings.pricing_tiers,
                settings.holiday_surcharge,
                settings.extra_cat_surcharge,
            )?;
            total_price += price;
            per_date.push(DateCharge {
                date,
                is_holiday: holiday,
                price,
            });
        }

        let breakdown = build_breakdown(&route_summary(&route), &per_date, cat_count, total_price);

        Ok(Quote {
            distance_km: route.distance_km,
            duration_min: route.duration_min,
            total_price,
            per_date,
            breakdown,
        })
    }

    /// Materialize one pending appointment per quoted date.
    ///
    /// Each appointment receives a fresh identifier and that date's
    /// individually computed price, never an even split of the total.
    pub fn confirm_quote(quote: &Quote, details: &ConfirmDetails) -> Vec<Appointment> {
        quote
            .per_date
            .iter()
            .map(|charge| Appointment {
                id: Uuid::new_v4().to_string(),
                client_name: details.client_name.clone(),
                address: details.address.clone(),
                date: charge.date,
                time: details.time,
                cat_count: details.cat_count,
                distance_km: quote.distance_km,
                duration_min: quote.duration_min,
                total_price: charge.price,
                lock_code: details.lock_code.clone(),
                notes: details.notes.clone(),
                is_holiday: charge.is_holiday,
                status: AppointmentStatus::Pending,
            })
            .collect()
    }
}

fn route_summary(route: &crate::client::RouteInfo) -> String {
    format!(
        "Route: {:.1} km, about {} min travel",
        route.distance_km,
        route.duration_min.round() as i64
    )
}

/// Assemble the human-readable breakdown lines.
fn build_breakdown(
    route_line: &str,
    per_date: &[DateCharge],
    cat_count: u32,
    total_price: f64,
) -> Vec<String> {
    let mut lines = vec![route_line.to_string()];

    if per_date.len() == 1 {
        lines.push("1 visit day".to_string());
    } else {
        lines.push(format!("{} visit days", per_date.len()));
    }

    let holidays = per_date.iter().filter(|c| c.is_holiday).count();
    if holidays > 0 {
        lines.push(format!("{} weekend/holiday day(s) with surcharge", holidays));
    }

    if cat_count > 1 {
        lines.push(format!("{} extra cat(s)", cat_count - 1));
    }

    lines.push(format!("Total: {}", total_price));
    lines
}
