//! Common types and data structures

use chrono::NaiveDate;
use uuid::Uuid;

pub type PlanId = Uuid;
pub type ItemId = Uuid;

/// Trip category shown in the form dropdown and on each plan row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    #[default]
    Business,
    Leisure,
    Family,
    Adventure,
    Educational,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Business,
        Category::Leisure,
        Category::Family,
        Category::Adventure,
        Category::Educational,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Business => "Business",
            Category::Leisure => "Leisure",
            Category::Family => "Family",
            Category::Adventure => "Adventure",
            Category::Educational => "Educational",
        }
    }
}

/// Trip priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Single entry on a packing checklist
#[derive(Debug, Clone, PartialEq)]
pub struct PackingItem {
    pub id: ItemId,
    pub item: String,
    pub packed: bool,
}

impl PackingItem {
    pub fn new(item: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            item: item.into(),
            packed: false,
        }
    }
}

/// A saved travel plan
#[derive(Debug, Clone, PartialEq)]
pub struct TravelPlan {
    pub id: PlanId,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub notes: String,
    pub budget: f64,
    pub category: Category,
    pub priority: Priority,
    pub packing_list: Vec<PackingItem>,
}
