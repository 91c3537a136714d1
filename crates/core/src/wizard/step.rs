//! Wizard step enumeration and the per-step strategy table.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::features::FEATURE_LABELS;

/// Total number of steps in the wizard.
pub const STEP_COUNT: usize = 6;

/// The six steps of the add-car wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Details,
    Registration,
    Insurance,
    Features,
    Images,
    Availability,
}

impl WizardStep {
    /// Convert a 0-based step index to a `WizardStep`.
    pub fn from_index(index: usize) -> Result<Self, CoreError> {
        match index {
            0 => Ok(Self::Details),
            1 => Ok(Self::Registration),
            2 => Ok(Self::Insurance),
            3 => Ok(Self::Features),
            4 => Ok(Self::Images),
            5 => Ok(Self::Availability),
            _ => Err(CoreError::Validation(format!(
                "Invalid step index {index}. Must be below {STEP_COUNT}"
            ))),
        }
    }

    /// The 0-based position of this step.
    pub fn index(self) -> usize {
        match self {
            Self::Details => 0,
            Self::Registration => 1,
            Self::Insurance => 2,
            Self::Features => 3,
            Self::Images => 4,
            Self::Availability => 5,
        }
    }

    /// Human-readable label for progress headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Details => "Car Details",
            Self::Registration => "Registration Details",
            Self::Insurance => "Insurance",
            Self::Features => "Features",
            Self::Images => "Images",
            Self::Availability => "Availability",
        }
    }

    /// The step after this one, or `None` from the last step.
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1).ok()
    }

    /// The step before this one, or `None` from the first step.
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(|i| Self::from_index(i).ok())
    }
}

// ---------------------------------------------------------------------------
// Accumulated-data field names
// ---------------------------------------------------------------------------

pub const FIELD_MAKE: &str = "make";
pub const FIELD_MODEL: &str = "model";
pub const FIELD_YEAR: &str = "year";
pub const FIELD_DESCRIPTION: &str = "description";

pub const FIELD_OWNER_NAME: &str = "owner_name";
pub const FIELD_RC_NUMBER: &str = "rc_number";
pub const FIELD_CITY_OF_REGISTRATION: &str = "city_of_registration";
pub const FIELD_RC_VALID_TILL: &str = "rc_valid_till";
pub const FIELD_HAND_TYPE: &str = "hand_type";
pub const FIELD_REGISTRATION_TYPE: &str = "registration_type";

pub const FIELD_INSURANCE_COMPANY: &str = "insurance_company";
pub const FIELD_INSURANCE_VALID_TILL: &str = "insurance_valid_till";
pub const FIELD_INSURANCE_IDV_VALUE: &str = "insurance_idv_value";

pub const FIELD_PHOTO_COUNT: &str = "photo_count";

pub const FIELD_PRICE_PER_HOUR: &str = "price_per_hour";
pub const FIELD_AVAILABLE_FROM: &str = "available_from";
pub const FIELD_AVAILABLE_TILL: &str = "available_till";

// ---------------------------------------------------------------------------
// Step definitions
// ---------------------------------------------------------------------------

/// Static definition of one wizard step: its ordinal, the accumulated-data
/// fields it owns, and a pure completeness predicate over a data map.
///
/// The predicate gates the proceed action; it checks presence and basic
/// shape only. Full field validation lives with each step's form type.
pub struct StepDefinition {
    pub step: WizardStep,
    pub fields: &'static [&'static str],
    pub is_complete: fn(&Map<String, Value>) -> bool,
}

const DETAILS_FIELDS: &[&str] = &[FIELD_MAKE, FIELD_MODEL, FIELD_YEAR, FIELD_DESCRIPTION];

const REGISTRATION_FIELDS: &[&str] = &[
    FIELD_OWNER_NAME,
    FIELD_RC_NUMBER,
    FIELD_CITY_OF_REGISTRATION,
    FIELD_RC_VALID_TILL,
    FIELD_HAND_TYPE,
    FIELD_REGISTRATION_TYPE,
];

const INSURANCE_FIELDS: &[&str] = &[
    FIELD_INSURANCE_COMPANY,
    FIELD_INSURANCE_VALID_TILL,
    FIELD_INSURANCE_IDV_VALUE,
];

const FEATURES_FIELDS: &[&str] = &[
    "airconditions",
    "child_seat",
    "gps",
    "luggage",
    "music",
    "seat_belt",
    "sleeping_bed",
    "water",
    "bluetooth",
    "onboard_computer",
    "audio_input",
    "long_term_trips",
    "car_kit",
    "remote_central_locking",
    "climate_control",
];

const IMAGES_FIELDS: &[&str] = &[FIELD_PHOTO_COUNT];

const AVAILABILITY_FIELDS: &[&str] = &[
    FIELD_PRICE_PER_HOUR,
    FIELD_AVAILABLE_FROM,
    FIELD_AVAILABLE_TILL,
];

/// The strategy table driving the wizard, one entry per step in order.
pub const STEP_DEFINITIONS: [StepDefinition; STEP_COUNT] = [
    StepDefinition {
        step: WizardStep::Details,
        fields: DETAILS_FIELDS,
        is_complete: details_complete,
    },
    StepDefinition {
        step: WizardStep::Registration,
        fields: REGISTRATION_FIELDS,
        is_complete: registration_complete,
    },
    StepDefinition {
        step: WizardStep::Insurance,
        fields: INSURANCE_FIELDS,
        is_complete: insurance_complete,
    },
    StepDefinition {
        step: WizardStep::Features,
        fields: FEATURES_FIELDS,
        is_complete: features_complete,
    },
    StepDefinition {
        step: WizardStep::Images,
        fields: IMAGES_FIELDS,
        is_complete: images_complete,
    },
    StepDefinition {
        step: WizardStep::Availability,
        fields: AVAILABILITY_FIELDS,
        is_complete: availability_complete,
    },
];

/// Look up the definition for a step.
pub fn definition(step: WizardStep) -> &'static StepDefinition {
    &STEP_DEFINITIONS[step.index()]
}

fn has_text(data: &Map<String, Value>, key: &str) -> bool {
    data.get(key)
        .and_then(Value::as_str)
        .is_some_and(|s| !s.is_empty())
}

fn details_complete(data: &Map<String, Value>) -> bool {
    // Description is optional.
    has_text(data, FIELD_MAKE) && has_text(data, FIELD_MODEL) && has_text(data, FIELD_YEAR)
}

fn registration_complete(data: &Map<String, Value>) -> bool {
    has_text(data, FIELD_OWNER_NAME)
        && has_text(data, FIELD_RC_NUMBER)
        && has_text(data, FIELD_CITY_OF_REGISTRATION)
        && has_text(data, FIELD_RC_VALID_TILL)
}

fn insurance_complete(data: &Map<String, Value>) -> bool {
    has_text(data, FIELD_INSURANCE_COMPANY) && has_text(data, FIELD_INSURANCE_VALID_TILL)
}

fn features_complete(data: &Map<String, Value>) -> bool {
    FEATURE_LABELS
        .iter()
        .any(|(key, _)| data.get(*key).and_then(Value::as_bool).unwrap_or(false))
}

fn images_complete(data: &Map<String, Value>) -> bool {
    data.get(FIELD_PHOTO_COUNT)
        .and_then(Value::as_u64)
        .is_some_and(|n| (3..=10).contains(&n))
}

fn availability_complete(data: &Map<String, Value>) -> bool {
    let price_ok = data
        .get(FIELD_PRICE_PER_HOUR)
        .and_then(Value::as_f64)
        .is_some_and(|p| p > 0.0);
    price_ok && has_text(data, FIELD_AVAILABLE_FROM) && has_text(data, FIELD_AVAILABLE_TILL)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
