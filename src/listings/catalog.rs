use serde::Serialize;

use crate::models::StorageType;

/// Marketing copy for a storage type
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageTypeDetails {
    pub slug: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub ideal_use: &'static str,
}

pub fn details(storage_type: StorageType) -> StorageTypeDetails {
    let (description, ideal_use) = match storage_type {
        StorageType::Residential => (
            "Secure spare rooms, garages, and home units suitable for boxes, furniture, and household items. Great when you are moving, renovating, or decluttering and need a clean, locked space close to home.",
            "Household items, seasonal items, personal belongings.",
        ),
        StorageType::Commercial => (
            "Dedicated space for shops, SMEs, and businesses that need extra back-room or off-site storage for stock, equipment, or documents. Often closer to business districts with better loading access.",
            "Retail stock, documents, small equipment, business supplies.",
        ),
        StorageType::Warehouse => (
            "Larger spaces in industrial or logistics areas with better access for trucks and pallets. Ideal for businesses with pallets, bulk inventory, or frequent dispatch and delivery needs.",
            "Bulk inventory, pallets, long-term business storage.",
        ),
        StorageType::OpenYard => (
            "Open, usually fenced outdoor areas for vehicles, containers, construction material, or other weather-tolerant items. Often accessible for trucks with flexible access hours.",
            "Vehicles, containers, machinery, and construction materials.",
        ),
        StorageType::Shelf => (
            "Smaller shelf or rack space inside shops or warehouses. Pay only for the shelf or pallet space you need instead of a whole unit. Great for small merchants and e-commerce sellers.",
            "Small boxes, e-commerce inventory, documents, light stock.",
        ),
        StorageType::Budget => (
            "Lower-priced units with basic features for cost-conscious renters. May be slightly smaller or in less central locations but still secure and locked.",
            "Price-sensitive storage, students, short-term overflow.",
        ),
        StorageType::ParcelDropOff => (
            "Verified locations where customers can drop or pick up parcels. Hosts handle check-in and short-term holding of parcels, often integrated with local delivery routes.",
            "Short-term parcel holding and pickup/drop-off.",
        ),
    };

    StorageTypeDetails {
        slug: storage_type.slug(),
        label: storage_type.label(),
        description,
        ideal_use,
    }
}

/// Every storage type, in menu order
pub fn all() -> Vec<StorageTypeDetails> {
    StorageType::ALL.into_iter().map(details).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_type_once() {
        let entries = all();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[3].slug, "yard");
        assert_eq!(entries[3].label, "Open Yard Storage");
    }
}
