use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CityName, ShopId, ShopName, TypeConstraintError};

/// What a listed shop primarily does.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShopCategory {
    TireSales,
    Repair,
    Alignment,
    Wheels,
    Fleet,
}

impl ShopCategory {
    pub const ALL: [ShopCategory; 5] = [
        ShopCategory::TireSales,
        ShopCategory::Repair,
        ShopCategory::Alignment,
        ShopCategory::Wheels,
        ShopCategory::Fleet,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShopCategory::TireSales => "tire_sales",
            ShopCategory::Repair => "repair",
            ShopCategory::Alignment => "alignment",
            ShopCategory::Wheels => "wheels",
            ShopCategory::Fleet => "fleet",
        }
    }
}

impl Display for ShopCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShopCategory {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShopCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown category `{s}`")))
    }
}

/// Moderation state of a listing. Only `Active` listings are public.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShopStatus {
    #[default]
    Pending,
    Active,
    Suspended,
}

impl ShopStatus {
    pub const ALL: [ShopStatus; 3] = [ShopStatus::Pending, ShopStatus::Active, ShopStatus::Suspended];

    pub fn as_str(self) -> &'static str {
        match self {
            ShopStatus::Pending => "pending",
            ShopStatus::Active => "active",
            ShopStatus::Suspended => "suspended",
        }
    }
}

impl Display for ShopStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShopStatus {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShopStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown status `{s}`")))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Shop {
    pub id: ShopId,
    pub name: ShopName,
    pub city: CityName,
    pub category: ShopCategory,
    pub status: ShopStatus,
    /// Set once an administrator has confirmed the business exists.
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewShop {
    pub name: ShopName,
    pub city: CityName,
    pub category: ShopCategory,
    pub status: ShopStatus,
    pub verified: bool,
    pub created_at: NaiveDateTime,
}

impl NewShop {
    #[must_use]
    pub fn new(
        name: ShopName,
        city: CityName,
        category: ShopCategory,
        status: ShopStatus,
        verified: bool,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            name,
            city,
            category,
            status,
            verified,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in ShopCategory::ALL {
            assert_eq!(category.as_str().parse::<ShopCategory>(), Ok(category));
        }
        assert!("bicycles".parse::<ShopCategory>().is_err());
    }

    #[test]
    fn status_serializes_snake_case() {
        let json = serde_json::to_string(&ShopStatus::Suspended).unwrap();
        assert_eq!(json, "\"suspended\"");
        assert_eq!("active".parse::<ShopStatus>(), Ok(ShopStatus::Active));
    }
}
