//! The closed set of car feature flags.
//!
//! The backend stores exactly these fifteen booleans per car; the features
//! step submits them all at once and requires at least one to be selected.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Feature flags for a car. Field names match the backend columns exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarFeatures {
    #[serde(default)]
    pub airconditions: bool,
    #[serde(default)]
    pub child_seat: bool,
    #[serde(default)]
    pub gps: bool,
    #[serde(default)]
    pub luggage: bool,
    #[serde(default)]
    pub music: bool,
    #[serde(default)]
    pub seat_belt: bool,
    #[serde(default)]
    pub sleeping_bed: bool,
    #[serde(default)]
    pub water: bool,
    #[serde(default)]
    pub bluetooth: bool,
    #[serde(default)]
    pub onboard_computer: bool,
    #[serde(default)]
    pub audio_input: bool,
    #[serde(default)]
    pub long_term_trips: bool,
    #[serde(default)]
    pub car_kit: bool,
    #[serde(default)]
    pub remote_central_locking: bool,
    #[serde(default)]
    pub climate_control: bool,
}

/// Feature keys paired with their human-readable labels, in display order.
pub const FEATURE_LABELS: &[(&str, &str)] = &[
    ("airconditions", "Air Conditioning"),
    ("child_seat", "Child Seat"),
    ("gps", "GPS Navigation"),
    ("luggage", "Luggage Space"),
    ("music", "Music System"),
    ("seat_belt", "Seat Belt"),
    ("sleeping_bed", "Sleeping Bed"),
    ("water", "Water"),
    ("bluetooth", "Bluetooth"),
    ("onboard_computer", "Onboard Computer"),
    ("audio_input", "Audio Input"),
    ("long_term_trips", "Long Term Trips"),
    ("car_kit", "Car Kit"),
    ("remote_central_locking", "Remote Central Locking"),
    ("climate_control", "Climate Control"),
];

impl CarFeatures {
    /// All flags as `(key, value)` pairs, in [`FEATURE_LABELS`] order.
    pub fn flags(&self) -> [(&'static str, bool); 15] {
        [
            ("airconditions", self.airconditions),
            ("child_seat", self.child_seat),
            ("gps", self.gps),
            ("luggage", self.luggage),
            ("music", self.music),
            ("seat_belt", self.seat_belt),
            ("sleeping_bed", self.sleeping_bed),
            ("water", self.water),
            ("bluetooth", self.bluetooth),
            ("onboard_computer", self.onboard_computer),
            ("audio_input", self.audio_input),
            ("long_term_trips", self.long_term_trips),
            ("car_kit", self.car_kit),
            ("remote_central_locking", self.remote_central_locking),
            ("climate_control", self.climate_control),
        ]
    }

    /// Number of selected features.
    pub fn selected_count(&self) -> usize {
        self.flags().iter().filter(|(_, v)| *v).count()
    }

    /// Validate that at least one feature is selected.
    pub fn validate_any_selected(&self) -> Result<(), CoreError> {
        if self.selected_count() == 0 {
            return Err(CoreError::Validation(
                "Select at least one feature".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nothing_selected() {
        let features = CarFeatures::default();
        assert_eq!(features.selected_count(), 0);
        assert!(features.validate_any_selected().is_err());
    }

    #[test]
    fn counting_selected_flags() {
        let features = CarFeatures {
            gps: true,
            bluetooth: true,
            ..Default::default()
        };
        assert_eq!(features.selected_count(), 2);
        assert!(features.validate_any_selected().is_ok());
    }

    #[test]
    fn labels_cover_every_flag() {
        assert_eq!(FEATURE_LABELS.len(), CarFeatures::default().flags().len());
        for ((label_key, _), (flag_key, _)) in
            FEATURE_LABELS.iter().zip(CarFeatures::default().flags())
        {
            assert_eq!(*label_key, flag_key);
        }
    }

    #[test]
    fn missing_fields_deserialize_as_false() {
        let features: CarFeatures =
            serde_json::from_value(serde_json::json!({ "gps": true })).unwrap();
        assert!(features.gps);
        assert!(!features.bluetooth);
        assert_eq!(features.selected_count(), 1);
    }
}
