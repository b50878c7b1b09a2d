use chrono::Utc;
use common::{VillaCreateDto, VillaDto, VillaUpdateDto};
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "villa")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub details: String,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    pub image_url: String,
    pub amenity: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Comparison key for names in memory; uniqueness is case-insensitive.
///
/// In the database the fold is the backend's `LOWER`: Postgres folds
/// Unicode letters, SQLite only ASCII.
pub fn name_key(name: &str) -> String {
    name.to_lowercase()
}

impl From<Model> for VillaDto {
    fn from(m: Model) -> Self {
        VillaDto {
            id: m.id,
            name: m.name,
            details: m.details,
            rate: m.rate,
            occupancy: m.occupancy,
            sqft: m.sqft,
            image_url: m.image_url,
            amenity: m.amenity,
        }
    }
}

impl From<Model> for VillaUpdateDto {
    fn from(m: Model) -> Self {
        VillaUpdateDto {
            id: m.id,
            name: m.name,
            details: m.details,
            rate: m.rate,
            occupancy: m.occupancy,
            sqft: m.sqft,
            image_url: m.image_url,
            amenity: m.amenity,
        }
    }
}

/// Insertable row for a new villa; the id is left to the database.
pub fn new_active_model(dto: VillaCreateDto) -> ActiveModel {
    let now: DateTimeWithTimeZone = Utc::now().into();
    ActiveModel {
        id: NotSet,
        name: Set(dto.name),
        details: Set(dto.details),
        rate: Set(dto.rate),
        occupancy: Set(dto.occupancy),
        sqft: Set(dto.sqft),
        image_url: Set(dto.image_url),
        amenity: Set(dto.amenity),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// Full replacement of every business column of row `dto.id`.
/// `created_at` is never overwritten.
pub fn replacement_active_model(dto: VillaUpdateDto) -> ActiveModel {
    ActiveModel {
        id: Set(dto.id),
        name: Set(dto.name),
        details: Set(dto.details),
        rate: Set(dto.rate),
        occupancy: Set(dto.occupancy),
        sqft: Set(dto.sqft),
        image_url: Set(dto.image_url),
        amenity: Set(dto.amenity),
        created_at: NotSet,
        updated_at: Set(Utc::now().into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> Model {
        Model {
            id: 7,
            name: "Diamond Villa".into(),
            details: "Top floor".into(),
            rate: 550.5,
            occupancy: 4,
            sqft: 1100,
            image_url: "https://img.example.com/diamond.jpg".into(),
            amenity: "Jacuzzi".into(),
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }
    }

    #[test]
    fn model_to_view_dto_copies_business_fields() {
        let dto = VillaDto::from(model());
        assert_eq!(dto.id, 7);
        assert_eq!(dto.name, "Diamond Villa");
        assert_eq!(dto.details, "Top floor");
        assert_eq!(dto.rate, 550.5);
        assert_eq!(dto.occupancy, 4);
        assert_eq!(dto.sqft, 1100);
        assert_eq!(dto.image_url, "https://img.example.com/diamond.jpg");
        assert_eq!(dto.amenity, "Jacuzzi");
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("createdAt").is_none());
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn model_to_update_dto_keeps_id() {
        let dto = VillaUpdateDto::from(model());
        assert_eq!(dto.id, 7);
        assert_eq!(dto.amenity, "Jacuzzi");
    }

    #[test]
    fn create_dto_leaves_id_to_database() {
        let am = new_active_model(VillaCreateDto {
            name: "Beach Hut".into(),
            details: String::new(),
            rate: 80.0,
            occupancy: 2,
            sqft: 300,
            image_url: String::new(),
            amenity: String::new(),
        });
        assert!(matches!(am.id, NotSet));
        assert_eq!(am.name, Set("Beach Hut".to_string()));
        assert_eq!(am.created_at, am.updated_at);
    }

    #[test]
    fn replacement_sets_every_business_column() {
        let am = replacement_active_model(VillaUpdateDto::from(model()));
        assert_eq!(am.id, Set(7));
        assert_eq!(am.rate, Set(550.5));
        assert_eq!(am.image_url, Set("https://img.example.com/diamond.jpg".to_string()));
        assert!(matches!(am.created_at, NotSet));
        assert!(matches!(am.updated_at, sea_orm::ActiveValue::Set(_)));
    }

    #[test]
    fn name_key_ignores_case() {
        assert_eq!(name_key("Royal VILLA"), "royal villa");
    }
}
