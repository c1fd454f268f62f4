use crate::listings::types::{Duration, SearchCriteria};
use crate::models::Listing;

/// Currency prefix used for every displayed price
pub const CURRENCY: &str = "KES";

impl SearchCriteria {
    /// Whether a single listing passes every criterion
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(location) = &self.location {
            let q = location.to_lowercase();
            if !listing.city.to_lowercase().contains(&q)
                && !listing.county.to_lowercase().contains(&q)
            {
                return false;
            }
        }

        if let Some(storage_type) = self.storage_type {
            if listing.storage_type != storage_type {
                return false;
            }
        }

        if let Some(band) = self.price_band {
            match listing.price_per_month {
                Some(price) if band.contains(price) => {}
                _ => return false,
            }
        }

        !self.parcel_only || listing.parcel_drop_off
    }
}

/// Listings passing `criteria`, in their original order
pub fn filter_listings(listings: &[Listing], criteria: &SearchCriteria) -> Vec<Listing> {
    listings
        .iter()
        .filter(|listing| criteria.matches(listing))
        .cloned()
        .collect()
}

/// Price for the chosen period
pub fn price_for(listing: &Listing, duration: Duration) -> Option<f64> {
    match duration {
        Duration::Day => listing.price_per_day,
        Duration::Week => listing.price_per_week,
        Duration::Month => listing.price_per_month,
    }
}

/// Display price, e.g. `KES 18,000/mo`
pub fn format_price(listing: &Listing, duration: Duration) -> String {
    match price_for(listing, duration) {
        Some(amount) => format!("{CURRENCY} {}{}", group_thousands(amount), duration.suffix()),
        None => "Price on request".to_string(),
    }
}

/// Comma-grouped amount with at most three decimals
pub fn group_thousands(amount: f64) -> String {
    let rounded = (amount * 1000.0).round() / 1000.0;
    let digits = (rounded.trunc() as u64).to_string();

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let fraction = format!("{:.3}", rounded.fract());
    let fraction = fraction.trim_start_matches('0').trim_end_matches('0');
    if fraction.len() > 1 {
        out.push_str(fraction);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::seed::demo_listings;
    use crate::listings::types::PriceBand;
    use crate::models::StorageType;

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_matches_everything_in_order() {
        let all = demo_listings();
        let found = filter_listings(&all, &SearchCriteria::default());
        assert_eq!(ids(&found), vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_location_matches_city_or_county_case_insensitively() {
        let all = demo_listings();

        let found = filter_listings(&all, &SearchCriteria::default().with_location("MACHAKOS"));
        assert_eq!(ids(&found), vec!["5"]);

        let found = filter_listings(&all, &SearchCriteria::default().with_location("athi"));
        assert_eq!(ids(&found), vec!["5"]);

        let found = filter_listings(&all, &SearchCriteria::default().with_location("mom"));
        assert_eq!(ids(&found), vec!["8"]);
    }

    #[test]
    fn test_nairobi_in_10k_20k_band() {
        let all = demo_listings();
        let criteria = SearchCriteria::default()
            .with_location("Nairobi")
            .with_price_band(PriceBand::From10kTo20k);

        let found = filter_listings(&all, &criteria);
        // Listing 2 sits exactly on the lower edge at 10,000
        assert_eq!(ids(&found), vec!["1", "2"]);
        assert!(found.iter().all(|l| {
            let price = l.price_per_month.unwrap();
            (10_000.0..=20_000.0).contains(&price)
        }));
    }

    #[test]
    fn test_parcel_only() {
        let all = demo_listings();
        let found = filter_listings(&all, &SearchCriteria::default().parcel_only());
        assert_eq!(ids(&found), vec!["1", "3", "6", "7"]);
    }

    #[test]
    fn test_storage_type_exact_match() {
        let all = demo_listings();
        let criteria = SearchCriteria::default().with_storage_type(StorageType::Residential);
        assert_eq!(ids(&filter_listings(&all, &criteria)), vec!["2", "8"]);
    }

    #[test]
    fn test_missing_monthly_price_never_in_a_band() {
        let mut all = demo_listings();
        all[0].price_per_month = None;
        let criteria = SearchCriteria::default().with_price_band(PriceBand::From10kTo20k);
        assert_eq!(ids(&filter_listings(&all, &criteria)), vec!["2"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = demo_listings();
        let criteria = SearchCriteria::default()
            .with_location("nairobi")
            .parcel_only();
        let once = filter_listings(&all, &criteria);
        let twice = filter_listings(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let all = demo_listings();
        let combined = SearchCriteria::default()
            .with_location("nairobi")
            .with_storage_type(StorageType::Warehouse)
            .with_price_band(PriceBand::From10kTo20k)
            .parcel_only();

        let singles = [
            SearchCriteria::default().with_location("nairobi"),
            SearchCriteria::default().with_storage_type(StorageType::Warehouse),
            SearchCriteria::default().with_price_band(PriceBand::From10kTo20k),
            SearchCriteria::default().parcel_only(),
        ];
        let intersection: Vec<Listing> = all
            .iter()
            .filter(|l| {
                singles
                    .iter()
                    .all(|c| filter_listings(&all, c).iter().any(|m| m.id == l.id))
            })
            .cloned()
            .collect();

        assert_eq!(filter_listings(&all, &combined), intersection);
        assert_eq!(ids(&intersection), vec!["1"]);
    }

    #[test]
    fn test_filter_leaves_input_untouched() {
        let all = demo_listings();
        let before = all.clone();
        let _ = filter_listings(&all, &SearchCriteria::default().parcel_only());
        assert_eq!(all, before);
    }

    #[test]
    fn test_format_price_per_duration() {
        let all = demo_listings();
        assert_eq!(format_price(&all[0], Duration::Month), "KES 18,000/mo");
        assert_eq!(format_price(&all[0], Duration::Week), "KES 4,800/wk");
        assert_eq!(format_price(&all[0], Duration::Day), "KES 800/day");

        let mut listing = all[0].clone();
        listing.price_per_day = None;
        assert_eq!(format_price(&listing, Duration::Day), "Price on request");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(999.0), "999");
        assert_eq!(group_thousands(1_000.0), "1,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
        assert_eq!(group_thousands(2_500.5), "2,500.5");
        assert_eq!(group_thousands(99.125), "99.125");
    }
}
