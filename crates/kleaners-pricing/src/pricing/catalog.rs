use serde::{Deserialize, Serialize};

/// Minutes every add-on adds to the visit.
pub const ADD_ON_MINUTES: u32 = 30;

/// Optional extra task priced on top of the base service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub duration_minutes: u32,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percentage,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discount {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub value: f64,
}

impl Discount {
    /// Amount taken off a pre-discount amount of base service plus add-ons.
    pub fn amount(&self, pre_discount: f64) -> f64 {
        match self.kind {
            DiscountKind::Percentage => pre_discount * self.value / 100.0,
            DiscountKind::Fixed => self.value,
        }
    }
}

fn add_on(id: &str, name: &str, price: f64) -> AddOn {
    AddOn {
        id: id.to_string(),
        name: name.to_string(),
        price,
        duration_minutes: ADD_ON_MINUTES,
        selected: false,
    }
}

pub fn add_on_catalog() -> Vec<AddOn> {
    vec![
        add_on("window_cleaning", "Interior Window Cleaning", 25.0),
        add_on("appliance_cleaning", "Appliance Cleaning", 35.0),
        add_on("cabinet_cleaning", "Inside Cabinets", 30.0),
        add_on("fridge_cleaning", "Inside Fridge", 40.0),
        add_on("oven_cleaning", "Inside Oven", 45.0),
        add_on("garage_cleaning", "Garage Cleaning", 50.0),
    ]
}

pub fn discount_catalog() -> Vec<Discount> {
    vec![
        Discount {
            id: "first_time".to_string(),
            name: "First-Time Customer".to_string(),
            kind: DiscountKind::Percentage,
            value: 15.0,
        },
        Discount {
            id: "regular_cleaning".to_string(),
            name: "Regular Cleaning".to_string(),
            kind: DiscountKind::Percentage,
            value: 10.0,
        },
        Discount {
            id: "referral".to_string(),
            name: "Referral Credit".to_string(),
            kind: DiscountKind::Fixed,
            value: 20.0,
        },
    ]
}
