use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Route {
    pub destination: String,
    #[serde(deserialize_with = "super::number_or_string")]
    pub distance_from_college: u32,
    pub seat_zone: String,
}
