use chrono::{DateTime, Utc};

use crate::listings::catalog;
use crate::models::{Listing, ParcelDetails, SecurityFeature, SizeUnit, StorageType};

use SecurityFeature::{Alarm, Cctv, GatedArea, Guard, LockedUnit};

struct SeedRow {
    id: &'static str,
    title: &'static str,
    storage_type: StorageType,
    address: &'static str,
    city: &'static str,
    county: &'static str,
    size: f64,
    prices: [f64; 3],
    rating: f64,
    review_count: u32,
    security: &'static [SecurityFeature],
    parcel_drop_off: bool,
}

const SEED_ROWS: [SeedRow; 8] = [
    SeedRow {
        id: "1",
        title: "Secure 120 sqft unit — Industrial Area",
        storage_type: StorageType::Warehouse,
        address: "Industrial Area",
        city: "Nairobi",
        county: "Nairobi",
        size: 120.0,
        prices: [800.0, 4_800.0, 18_000.0],
        rating: 4.8,
        review_count: 24,
        security: &[Cctv, Guard, LockedUnit, GatedArea],
        parcel_drop_off: true,
    },
    SeedRow {
        id: "2",
        title: "Residential garage — Kilimani",
        storage_type: StorageType::Residential,
        address: "Kilimani",
        city: "Nairobi",
        county: "Nairobi",
        size: 200.0,
        prices: [500.0, 3_000.0, 10_000.0],
        rating: 4.9,
        review_count: 12,
        security: &[Cctv, LockedUnit],
        parcel_drop_off: false,
    },
    SeedRow {
        id: "3",
        title: "Commercial shelf space — Westlands",
        storage_type: StorageType::Shelf,
        address: "Westlands",
        city: "Nairobi",
        county: "Nairobi",
        size: 50.0,
        prices: [300.0, 1_800.0, 6_000.0],
        rating: 4.6,
        review_count: 8,
        security: &[Cctv, Alarm],
        parcel_drop_off: true,
    },
    SeedRow {
        id: "4",
        title: "Budget unit — Mombasa Road",
        storage_type: StorageType::Budget,
        address: "Mombasa Road",
        city: "Nairobi",
        county: "Nairobi",
        size: 80.0,
        prices: [350.0, 2_100.0, 7_000.0],
        rating: 4.4,
        review_count: 31,
        security: &[LockedUnit, GatedArea],
        parcel_drop_off: false,
    },
    SeedRow {
        id: "5",
        title: "Open yard — Athi River",
        storage_type: StorageType::OpenYard,
        address: "Athi River",
        city: "Athi River",
        county: "Machakos",
        size: 500.0,
        prices: [1_500.0, 8_000.0, 28_000.0],
        rating: 4.7,
        review_count: 15,
        security: &[Guard, GatedArea],
        parcel_drop_off: false,
    },
    SeedRow {
        id: "6",
        title: "Parcel drop-off point — CBD",
        storage_type: StorageType::ParcelDropOff,
        address: "CBD",
        city: "Nairobi",
        county: "Nairobi",
        size: 0.0,
        prices: [100.0, 600.0, 2_000.0],
        rating: 4.9,
        review_count: 45,
        security: &[Cctv, Guard, LockedUnit],
        parcel_drop_off: true,
    },
    SeedRow {
        id: "7",
        title: "Commercial storefront storage — Kisumu",
        storage_type: StorageType::Commercial,
        address: "Kisumu",
        city: "Kisumu",
        county: "Kisumu",
        size: 300.0,
        prices: [1_200.0, 7_000.0, 25_000.0],
        rating: 4.5,
        review_count: 6,
        security: &[Cctv, Guard, Alarm],
        parcel_drop_off: true,
    },
    SeedRow {
        id: "8",
        title: "Small residential unit — Mombasa",
        storage_type: StorageType::Residential,
        address: "Mombasa",
        city: "Mombasa",
        county: "Mombasa",
        size: 60.0,
        prices: [400.0, 2_400.0, 8_000.0],
        rating: 4.8,
        review_count: 18,
        security: &[Cctv, LockedUnit, GatedArea],
        parcel_drop_off: false,
    },
];

/// Fixed demonstration set loaded into the transient store
pub fn demo_listings() -> Vec<Listing> {
    let created_at = DateTime::<Utc>::from_timestamp(1_735_689_600, 0).unwrap_or_default();

    SEED_ROWS
        .iter()
        .map(|row| {
            let [day, week, month] = row.prices;
            Listing {
                id: row.id.to_string(),
                title: row.title.to_string(),
                storage_type: row.storage_type,
                description: catalog::details(row.storage_type).description.to_string(),
                size: Some(row.size),
                size_unit: SizeUnit::Sqft,
                access_hours: None,
                security: row.security.to_vec(),
                rental_min_days: None,
                rental_max_days: None,
                price_per_day: Some(day),
                price_per_week: Some(week),
                price_per_month: Some(month),
                security_deposit: None,
                long_term_discount: false,
                address: row.address.to_string(),
                city: row.city.to_string(),
                county: row.county.to_string(),
                map_pin: None,
                parcel_drop_off: row.parcel_drop_off,
                parcel: row.parcel_drop_off.then(ParcelDetails::default),
                photo_count: None,
                rating: Some(row.rating),
                review_count: Some(row.review_count),
                created_at,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_matches_reference_values() {
        let listings = demo_listings();
        assert_eq!(listings.len(), 8);

        let first = &listings[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.title, "Secure 120 sqft unit — Industrial Area");
        assert_eq!(first.storage_type, StorageType::Warehouse);
        assert_eq!(first.city, "Nairobi");
        assert_eq!(first.price_per_month, Some(18_000.0));
        assert!(first.parcel_drop_off);
    }

    #[test]
    fn test_parcel_sub_record_tracks_flag() {
        for listing in demo_listings() {
            assert_eq!(listing.parcel.is_some(), listing.parcel_drop_off, "{}", listing.id);
        }
    }
}
