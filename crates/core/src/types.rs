//! Record types shared across the client and store layers.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::features::CarFeatures;

/// Database row identifier, as assigned by the car service.
pub type DbId = i64;

/// Server-assigned identifier for a car resource.
pub type CarId = DbId;

// ---------------------------------------------------------------------------
// Users and roles
// ---------------------------------------------------------------------------

/// User role discriminator. Hosts may list cars for rental; guests may
/// only book them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Guest,
    Host,
}

impl Role {
    /// Parse a role string from the backend.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "guest" => Ok(Self::Guest),
            "host" => Ok(Self::Host),
            _ => Err(CoreError::Validation(format!(
                "Invalid role '{s}'. Must be one of: guest, host"
            ))),
        }
    }

    /// Parse a role string, falling back to [`Role::Guest`] for anything
    /// unrecognized (the backend and token claims are not always in sync).
    pub fn from_str_or_guest(s: &str) -> Self {
        Self::from_str_db(s).unwrap_or(Self::Guest)
    }

    /// Convert to the backend's string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Guest => "guest",
            Self::Host => "host",
        }
    }
}

/// An authenticated user as held by the session store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: DbId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    pub role: Role,
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A car as returned by the public listing endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub kms_driven: Option<i64>,
    #[serde(default)]
    pub available_from: Option<String>,
    #[serde(default)]
    pub available_till: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub documents: Option<CarDocuments>,
}

/// A single uploaded photo of a car.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarPhoto {
    pub id: DbId,
    pub photo_url: String,
}

/// The document bundle attached to a car during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDocuments {
    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub rc_number: Option<String>,
    #[serde(default)]
    pub rc_valid_till: Option<String>,
    #[serde(default)]
    pub city_of_registration: Option<String>,
    #[serde(default)]
    pub rc_image_front: Option<String>,
    #[serde(default)]
    pub rc_image_back: Option<String>,
    #[serde(default)]
    pub insurance_company: Option<String>,
    #[serde(default)]
    pub insurance_valid_till: Option<String>,
    #[serde(default)]
    pub insurance_idv_value: Option<String>,
    #[serde(default)]
    pub insurance_image: Option<String>,
}

/// Full car detail record, as returned by the detail endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarDetails {
    pub id: CarId,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub price_per_hour: Option<f64>,
    #[serde(default)]
    pub features: Option<CarFeatures>,
    #[serde(default)]
    pub photos: Vec<CarPhoto>,
    #[serde(default)]
    pub documents: Option<CarDocuments>,
    #[serde(default)]
    pub reviews: Vec<String>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
