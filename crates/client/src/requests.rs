//! Request and response payloads for the car service endpoints.
//!
//! Field names match the backend wire format exactly. Structs for
//! file-bearing calls are plain data; the multipart encoding happens in
//! [`crate::api`].

use serde::{Deserialize, Serialize};
use ziptrip_core::features::CarFeatures;
use ziptrip_core::types::{Car, CarId, DbId};
use ziptrip_core::wizard::ImageFile;

// ---------------------------------------------------------------------------
// Wizard step 0: create car
// ---------------------------------------------------------------------------

/// Body for `POST /cars/addCar`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCarRequest {
    pub make: String,
    pub model: String,
    pub year: String,
    pub description: String,
}

/// Response from `POST /cars/addCar`. Older deployments return the id
/// under `id` instead of `car_id`.
#[derive(Debug, Deserialize)]
pub struct CreateCarResponse {
    #[serde(default)]
    pub car_id: Option<CarId>,
    #[serde(default)]
    pub id: Option<CarId>,
}

impl CreateCarResponse {
    /// The assigned car id, whichever field carried it.
    pub fn car_id(&self) -> Option<CarId> {
        self.car_id.or(self.id)
    }
}

// ---------------------------------------------------------------------------
// Wizard steps 1-2: multipart uploads
// ---------------------------------------------------------------------------

/// Payload for `POST /cars/addRC` (multipart).
#[derive(Debug, Clone)]
pub struct RegistrationUpload {
    pub car_id: CarId,
    pub owner_name: String,
    pub rc_number: String,
    pub rc_valid_till: String,
    pub city_of_registration: String,
    pub hand_type: String,
    pub registration_type: String,
    pub rc_image_front: ImageFile,
    pub rc_image_back: ImageFile,
}

/// Payload for `POST /cars/addInsurance` (multipart).
#[derive(Debug, Clone)]
pub struct InsuranceUpload {
    pub car_id: CarId,
    pub insurance_company: String,
    pub insurance_valid_till: String,
    pub insurance_idv_value: Option<i64>,
    pub insurance_image: ImageFile,
}

// ---------------------------------------------------------------------------
// Wizard steps 3 and 5: JSON bodies
// ---------------------------------------------------------------------------

/// Body for `POST /car-features`.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturesUpload {
    pub car_id: CarId,
    #[serde(flatten)]
    pub features: CarFeatures,
}

/// Body for `POST /cars/addAvailability`.
#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityUpload {
    pub car_id: CarId,
    pub price_per_hour: f64,
    pub available_from: String,
    pub available_till: String,
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Body for `POST /car-details/getCarDetails`.
#[derive(Debug, Clone, Serialize)]
pub struct CarDetailsRequest {
    pub car_id: CarId,
}

/// Response from the host's own-cars listing.
#[derive(Debug, Deserialize)]
pub struct MyCarsResponse {
    #[serde(default)]
    pub cars: Vec<Car>,
}

// ---------------------------------------------------------------------------
// Auth
// ---------------------------------------------------------------------------

/// Body for `POST /users/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body for `POST /users/register`.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// `"guest"` or `"host"`.
    pub role: String,
}

/// The user record embedded in auth responses. The role is resolved by
/// the session store (record, then token claim, then guest).
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: DbId,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Option<String>,
}

/// Response from both auth endpoints.
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<AuthUser>,
}
