//! Domain models for the amenity catalog.

/// A bookable amenity, shared between hotels and rooms through join tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub id: i32,
    /// Unique slug used by search filters, e.g. `"wifi"`.
    pub code: String,
    pub label: String,
}

impl Amenity {
    /// Converts an entity model to an amenity domain model at the repository boundary.
    pub fn from_entity(entity: entity::amenity::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            label: entity.label,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAmenityParams {
    pub code: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAmenityParams {
    pub code: Option<String>,
    pub label: Option<String>,
}
