use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::shop::{NewShop as DomainNewShop, Shop as DomainShop};
use crate::domain::types::{CityName, ShopId, ShopName, TypeConstraintError};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::shops)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
/// Diesel model for [`crate::domain::shop::Shop`].
pub struct Shop {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub category: String,
    pub status: String,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shops)]
/// Insertable form of [`Shop`].
pub struct NewShop<'a> {
    pub name: &'a str,
    pub city: &'a str,
    pub category: &'a str,
    pub status: &'a str,
    pub verified: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TryFrom<Shop> for DomainShop {
    type Error = TypeConstraintError;

    fn try_from(shop: Shop) -> Result<Self, Self::Error> {
        Ok(Self {
            id: ShopId::new(shop.id)?,
            name: ShopName::new(shop.name)?,
            city: CityName::new(shop.city)?,
            category: shop.category.parse()?,
            status: shop.status.parse()?,
            verified: shop.verified,
            created_at: shop.created_at,
            updated_at: shop.updated_at,
        })
    }
}

impl<'a> From<&'a DomainNewShop> for NewShop<'a> {
    fn from(shop: &'a DomainNewShop) -> Self {
        Self {
            name: shop.name.as_str(),
            city: shop.city.as_str(),
            category: shop.category.as_str(),
            status: shop.status.as_str(),
            verified: shop.verified,
            created_at: shop.created_at,
            updated_at: shop.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::shop::{ShopCategory, ShopStatus};

    fn sample_row(category: &str) -> Shop {
        let now = Utc::now().naive_utc();
        Shop {
            id: 7,
            name: "Tread Lightly".to_string(),
            city: "Denver".to_string(),
            category: category.to_string(),
            status: "active".to_string(),
            verified: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn row_into_domain() {
        let shop = DomainShop::try_from(sample_row("alignment")).unwrap();
        assert_eq!(shop.id.get(), 7);
        assert_eq!(shop.name.as_str(), "Tread Lightly");
        assert_eq!(shop.category, ShopCategory::Alignment);
        assert_eq!(shop.status, ShopStatus::Active);
        assert!(shop.verified);
    }

    #[test]
    fn row_with_unknown_category_is_rejected() {
        assert!(DomainShop::try_from(sample_row("boats")).is_err());
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewShop::new(
            ShopName::new("Wheel Deal").unwrap(),
            CityName::new("Tulsa").unwrap(),
            ShopCategory::Wheels,
            ShopStatus::Pending,
            false,
            Utc::now().naive_utc(),
        );
        let row: NewShop = (&domain).into();
        assert_eq!(row.name, "Wheel Deal");
        assert_eq!(row.category, "wheels");
        assert_eq!(row.status, "pending");
        assert_eq!(row.updated_at, domain.created_at);
    }
}
