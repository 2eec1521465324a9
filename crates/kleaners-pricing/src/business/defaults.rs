use serde::Serialize;

use super::domain::{
    BusinessDetails, BusinessType, CleaningFrequency, ContractType, FloorType, Priority,
};

/// Starting point offered when a customer picks a business type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessTypeDefaults {
    pub cleaning_frequency: CleaningFrequency,
    pub priority: Priority,
    pub floor_type: FloorType,
    pub cleaning_count: u32,
    pub contract_type: ContractType,
    pub description: &'static str,
    pub features: Vec<&'static str>,
}

pub fn business_type_defaults(business_type: BusinessType) -> BusinessTypeDefaults {
    match business_type {
        BusinessType::Office => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Weekly,
            priority: Priority::Reliability,
            floor_type: FloorType::Carpet,
            cleaning_count: 2,
            contract_type: ContractType::TwelveMonth,
            description: "Professional office cleaning to keep workspaces tidy and productive.",
            features: vec![
                "Desk and workstation sanitizing",
                "Kitchen and break room cleaning",
                "Restroom servicing",
                "Trash and recycling removal",
            ],
        },
        BusinessType::Medical => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Daily,
            priority: Priority::Quality,
            floor_type: FloorType::Vinyl,
            cleaning_count: 1,
            contract_type: ContractType::TwelveMonth,
            description: "Clinical-grade cleaning for practices, clinics, and treatment rooms.",
            features: vec![
                "Hospital-grade disinfection",
                "Waiting room and reception sanitizing",
                "Exam room turnover cleaning",
                "Infection-control checklists",
            ],
        },
        BusinessType::Retail => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Daily,
            priority: Priority::Reliability,
            floor_type: FloorType::Tile,
            cleaning_count: 1,
            contract_type: ContractType::SixMonth,
            description: "Storefront cleaning that keeps the sales floor customer-ready.",
            features: vec![
                "Sales floor mopping and vacuuming",
                "Display and glass cleaning",
                "Fitting room tidying",
                "Entrance and window care",
            ],
        },
        BusinessType::Restaurant => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Daily,
            priority: Priority::Quality,
            floor_type: FloorType::Tile,
            cleaning_count: 2,
            contract_type: ContractType::TwelveMonth,
            description: "Front- and back-of-house cleaning built around food-safety standards.",
            features: vec![
                "Kitchen degreasing",
                "Dining area sanitizing",
                "Restroom servicing",
                "Floor scrubbing",
            ],
        },
        BusinessType::Gym => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Daily,
            priority: Priority::Quality,
            floor_type: FloorType::Vinyl,
            cleaning_count: 2,
            contract_type: ContractType::SixMonth,
            description: "High-traffic fitness cleaning focused on equipment and locker rooms.",
            features: vec![
                "Equipment disinfection",
                "Locker room and shower cleaning",
                "Mat and studio floor care",
                "Odor control",
            ],
        },
        BusinessType::Salon => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Weekly,
            priority: Priority::Quality,
            floor_type: FloorType::Laminate,
            cleaning_count: 3,
            contract_type: ContractType::SixMonth,
            description: "Salon and spa cleaning for stations, basins, and treatment rooms.",
            features: vec![
                "Hair and product residue removal",
                "Station and mirror cleaning",
                "Wash basin sanitizing",
                "Towel area tidying",
            ],
        },
        BusinessType::Warehouse => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Monthly,
            priority: Priority::Price,
            floor_type: FloorType::Concrete,
            cleaning_count: 2,
            contract_type: ContractType::SixMonth,
            description: "Industrial cleaning for storage floors, loading bays, and staff areas.",
            features: vec![
                "Concrete floor sweeping and scrubbing",
                "Loading dock cleaning",
                "Staff break area cleaning",
                "Dust control on racking",
            ],
        },
        BusinessType::Other => BusinessTypeDefaults {
            cleaning_frequency: CleaningFrequency::Weekly,
            priority: Priority::Reliability,
            floor_type: FloorType::Hardwood,
            cleaning_count: 1,
            contract_type: ContractType::OneTime,
            description: "Flexible commercial cleaning tailored to your space.",
            features: vec![
                "Customizable cleaning checklist",
                "General surface cleaning",
                "Restroom servicing",
            ],
        },
    }
}

/// Fills unset fields of `current` from the defaults for `business_type`.
///
/// Fields the customer already chose are kept; `business_type` is always
/// replaced by the one passed in.
pub fn apply_business_defaults(
    business_type: BusinessType,
    current: &BusinessDetails,
) -> BusinessDetails {
    let defaults = business_type_defaults(business_type);

    BusinessDetails {
        business_type: Some(business_type),
        square_footage: current.square_footage,
        cleaning_frequency: current
            .cleaning_frequency
            .or(Some(defaults.cleaning_frequency)),
        cleaning_count: current.cleaning_count.or(Some(defaults.cleaning_count)),
        floor_type: current.floor_type.or(Some(defaults.floor_type)),
        visitor_count: current.visitor_count,
        visitor_frequency: current.visitor_frequency,
        priority: current.priority.or(Some(defaults.priority)),
        contract_type: current.contract_type.or(Some(defaults.contract_type)),
    }
}
