use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct AmenityDto {
    pub id: i32,
    pub code: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct CreateAmenityDto {
    pub code: String,
    pub label: String,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug)]
pub struct UpdateAmenityDto {
    pub code: Option<String>,
    pub label: Option<String>,
}
