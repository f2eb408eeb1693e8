use std::collections::BTreeMap;

use log::warn;

use crate::dates::month_key;
use crate::models::{MonthlySummary, Trip};

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn estimated_deduction(miles: f64, rate_per_mile: f64) -> f64 {
    round_cents(miles * rate_per_mile)
}

/// Groups trips by month, newest month first. Trips with unreadable dates
/// are skipped.
pub fn monthly_totals(trips: &[Trip], rate_per_mile: f64) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<String, (f64, u32)> = BTreeMap::new();

    for trip in trips {
        let Some(month) = month_key(&trip.date) else {
            warn!("Skipping trip {} with unreadable date {:?}", trip.id, trip.date);
            continue;
        };
        let entry = months.entry(month).or_insert((0.0, 0));
        entry.0 += trip.miles;
        entry.1 += 1;
    }

    months
        .into_iter()
        .rev()
        .map(|(month, (total_miles, trip_count))| MonthlySummary {
            month,
            total_miles: (total_miles * 10.0).round() / 10.0,
            trip_count,
            estimated_deduction: estimated_deduction(total_miles, rate_per_mile),
        })
        .collect()
}

pub fn total_miles(trips: &[Trip]) -> f64 {
    trips.iter().map(|trip| trip.miles).sum()
}

pub fn format_miles(miles: f64) -> String {
    format!("{:.1} mi", miles)
}

/// `$1,234.56`
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = (cents / 100).to_string();

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, digit) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(id: i64, date: &str, miles: f64) -> Trip {
        Trip {
            id,
            date: date.to_string(),
            client_id: None,
            client_name: None,
            purpose: "Visit".to_string(),
            start_location: String::new(),
            end_location: String::new(),
            miles,
            round_trip: false,
            notes: None,
            created_at: None,
        }
    }

    #[test]
    fn test_estimated_deduction_rounds_to_cents() {
        assert_eq!(estimated_deduction(100.0, 0.67), 67.0);
        assert_eq!(estimated_deduction(12.0, 0.655), 7.86);
        assert_eq!(estimated_deduction(0.0, 0.67), 0.0);
    }

    #[test]
    fn test_monthly_totals_group_and_sort() {
        let trips = vec![
            trip(1, "2024-01-05", 10.0),
            trip(2, "2024-02-10", 20.5),
            trip(3, "2024-01-20T08:00:00Z", 5.0),
            trip(4, "garbage", 99.0),
        ];
        let summary = monthly_totals(&trips, 0.5);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].month, "2024-02");
        assert_eq!(summary[0].trip_count, 1);
        assert_eq!(summary[1].month, "2024-01");
        assert_eq!(summary[1].total_miles, 15.0);
        assert_eq!(summary[1].trip_count, 2);
        assert_eq!(summary[1].estimated_deduction, 7.5);
    }

    #[test]
    fn test_monthly_totals_empty() {
        assert!(monthly_totals(&[], 0.67).is_empty());
        assert_eq!(total_miles(&[]), 0.0);
    }

    #[test]
    fn test_formatting() {
        assert_eq!(format_miles(12.345), "12.3 mi");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(67.5), "$67.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-12.0), "-$12.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }
}
