use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// A single field-scoped validation failure.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct FieldErrorDto {
    pub field: String,
    pub message: String,
}

/// Body of a 422 response: one entry per violation, the whole request is
/// rejected as a unit.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ValidationReportDto {
    pub errors: Vec<FieldErrorDto>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ConflictingHotelDto {
    pub id: i32,
    pub name: String,
}

/// Body of a 409 response when a hotel create or relocate lands within the
/// configured radius of an existing hotel in the same city.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct ProximityConflictDto {
    pub radius_meters: f64,
    pub conflicts: Vec<ConflictingHotelDto>,
}
