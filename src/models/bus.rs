use serde::{Deserialize, Serialize};

use super::number_or_string;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bus {
    #[serde(rename = "BusID", default)]
    pub bus_id: Option<String>,
    pub bus_number: String,
    #[serde(default)]
    pub time_slot: Option<String>,
    #[serde(deserialize_with = "number_or_string")]
    pub total_seats: u32,
    #[serde(deserialize_with = "number_or_string")]
    pub booked_seats: u32,
    #[serde(default, deserialize_with = "optional_number_or_string")]
    pub available_seats: Option<u32>,
    #[serde(default)]
    pub is_reused: Option<String>,
    #[serde(default)]
    pub reused_from: Option<String>,
}

fn optional_number_or_string<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    number_or_string(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_counters_as_strings_or_numbers() {
        let raw = r#"[
            {"BusID":"B1","BusNumber":"BUS1","TimeSlot":"11AM","TotalSeats":"40","BookedSeats":"0","AvailableSeats":"40","IsReused":"False","ReusedFrom":""},
            {"BusNumber":"BUS2","TotalSeats":40,"BookedSeats":3}
        ]"#;
        let buses: Vec<Bus> = serde_json::from_str(raw).unwrap();

        assert_eq!(buses[0].bus_id.as_deref(), Some("B1"));
        assert_eq!(buses[0].total_seats, 40);
        assert_eq!(buses[0].available_seats, Some(40));
        assert_eq!(buses[1].booked_seats, 3);
        assert_eq!(buses[1].available_seats, None);
    }

    #[test]
    fn rejects_non_numeric_counter() {
        let raw = r#"{"BusNumber":"BUS1","TotalSeats":"forty","BookedSeats":0}"#;
        assert!(serde_json::from_str::<Bus>(raw).is_err());
    }
}
