//! Column mappings for the generated entities.

use super::{SqlRecord, SqlTimestamp, SqlValue};
use crate::generators::{GeneratedDemand, GeneratedItem, GeneratedUser};

impl SqlRecord for GeneratedUser {
    const TABLE: &'static str = "users";
    const COLUMNS: &'static [&'static str] = &[
        "username",
        "password_hash",
        "contact_phone",
        "contact_email",
        "status",
        "role",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::text(&self.username),
            SqlValue::text(&self.password_hash),
            SqlValue::text(&self.contact_phone),
            SqlValue::text(&self.contact_email),
            SqlValue::text(self.status.as_str()),
            SqlValue::text(self.role.as_str()),
        ]
    }
}

impl SqlRecord for GeneratedItem {
    const TABLE: &'static str = "items";
    const COLUMNS: &'static [&'static str] = &[
        "seller_id",
        "title",
        "description",
        "category",
        "price",
        "condition",
        "status",
        "images",
        "created_at",
        "updated_at",
    ];

    fn values(&self) -> Vec<SqlValue> {
        let (created_at, updated_at) = SqlTimestamp::pair(&self.timestamps);
        vec![
            SqlValue::Integer(i64::from(self.seller_id)),
            SqlValue::text(&self.title),
            SqlValue::text(&self.description),
            SqlValue::text(self.category.as_str()),
            SqlValue::Decimal(self.price),
            SqlValue::text(self.condition.as_str()),
            SqlValue::text(self.status.as_str()),
            SqlValue::TextArray(vec![self.image_url.clone()]),
            SqlValue::Timestamp(created_at),
            SqlValue::Timestamp(updated_at),
        ]
    }
}

impl SqlRecord for GeneratedDemand {
    const TABLE: &'static str = "demands";
    const COLUMNS: &'static [&'static str] = &[
        "buyer_id",
        "title",
        "description",
        "category",
        "expected_price",
        "status",
        "created_at",
        "updated_at",
    ];

    fn values(&self) -> Vec<SqlValue> {
        let (created_at, updated_at) = SqlTimestamp::pair(&self.timestamps);
        vec![
            SqlValue::Integer(i64::from(self.buyer_id)),
            SqlValue::text(&self.title),
            SqlValue::text(&self.description),
            SqlValue::text(self.category.as_str()),
            SqlValue::Decimal(self.expected_price),
            SqlValue::text(self.status.as_str()),
            SqlValue::Timestamp(created_at),
            SqlValue::Timestamp(updated_at),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;
    use crate::condition::Condition;
    use crate::generators::{
        DemandStatus, DerivedTimestamps, ItemStatus, Price, RecordAge, UserGenerator,
    };
    use crate::sql::{SqlRenderer, TimestampStyle};
    use time::{Duration, OffsetDateTime};

    fn timestamps() -> DerivedTimestamps {
        let now = OffsetDateTime::UNIX_EPOCH + Duration::days(100);
        DerivedTimestamps {
            created_at: now - Duration::days(4) - Duration::hours(2),
            updated_at: now - Duration::days(3),
            age: RecordAge {
                days_ago: 4,
                hours_ago: 2,
            },
        }
    }

    #[test]
    fn test_user_row() {
        let user = UserGenerator::new().generate(40, 40);
        let row = SqlRenderer::default().render_row(&user.values()).unwrap();

        assert_eq!(
            row,
            "('user_40', 'password', '13800000040', 'user40@example.com', 'disabled', 'ADMIN')"
        );
    }

    #[test]
    fn test_item_row_matches_column_order() {
        let item = GeneratedItem {
            seller_id: 12,
            category: Category::Clothing,
            title: "Arc'teryx fleece jacket".to_string(),
            description: "Warm".to_string(),
            price: Price::from_cents(45000),
            condition: Condition::LikeNew,
            status: ItemStatus::Active,
            image_url: "/demo-assets/real/clothing_1.jpg".to_string(),
            timestamps: timestamps(),
        };

        assert_eq!(item.values().len(), GeneratedItem::COLUMNS.len());

        let row = SqlRenderer::new(TimestampStyle::RelativeToNow)
            .render_row(&item.values())
            .unwrap();
        assert_eq!(
            row,
            "(12, 'Arc''teryx fleece jacket', 'Warm', 'clothing', 450.00, 'like_new', 'active', \
             ARRAY['/demo-assets/real/clothing_1.jpg'], \
             now() - INTERVAL '4' DAY - INTERVAL '2' HOUR, now() - INTERVAL '3' DAY)"
        );
    }

    #[test]
    fn test_demand_row_matches_column_order() {
        let demand = GeneratedDemand {
            buyer_id: 3,
            category: Category::Books,
            title: "Wanted: CSAPP".to_string(),
            description: "Around 80.00".to_string(),
            expected_price: Price::from_cents(8000),
            status: DemandStatus::Active,
            timestamps: timestamps(),
        };

        assert_eq!(demand.values().len(), GeneratedDemand::COLUMNS.len());

        let values = demand.values();
        assert_eq!(values[0], SqlValue::Integer(3));
        assert_eq!(values[4], SqlValue::Decimal(Price::from_cents(8000)));
        assert_eq!(values[5], SqlValue::text("active"));
    }
}
