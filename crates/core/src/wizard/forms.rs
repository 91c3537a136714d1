//! Per-step form state and validation.
//!
//! Each form owns the local field state for one wizard step and exposes the
//! same contract: build from the session's accumulated defaults, a pure
//! [`validate`] over the current fields (the proceed action stays disabled
//! while it fails), and a projection of the submitted fields into the
//! session's accumulated-data map. Validation never touches the network;
//! a form that fails validation is never submitted.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use crate::catalog::{validate_city, validate_insurer, validate_make, validate_model};
use crate::error::CoreError;
use crate::features::CarFeatures;
use crate::wizard::image::ImageFile;
use crate::wizard::step::{
    FIELD_AVAILABLE_FROM, FIELD_AVAILABLE_TILL, FIELD_CITY_OF_REGISTRATION, FIELD_DESCRIPTION,
    FIELD_HAND_TYPE, FIELD_INSURANCE_COMPANY, FIELD_INSURANCE_IDV_VALUE,
    FIELD_INSURANCE_VALID_TILL, FIELD_MAKE, FIELD_MODEL, FIELD_OWNER_NAME, FIELD_PHOTO_COUNT,
    FIELD_PRICE_PER_HOUR, FIELD_RC_NUMBER, FIELD_RC_VALID_TILL, FIELD_REGISTRATION_TYPE,
    FIELD_YEAR,
};

/// Maximum description length accepted by the details step.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// Minimum number of photos required by the images step.
pub const MIN_IMAGES: usize = 3;

/// Maximum number of photos accepted by the images step.
pub const MAX_IMAGES: usize = 10;

fn text(defaults: &Map<String, Value>, key: &str) -> String {
    defaults
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn require_text(value: &str, what: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{what} is required")));
    }
    Ok(())
}

fn parse_date(value: &str, what: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| CoreError::Validation(format!("{what} must be a YYYY-MM-DD date")))
}

// ---------------------------------------------------------------------------
// Step 0: car details
// ---------------------------------------------------------------------------

/// Make, model, year, and optional description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CarDetailsForm {
    pub make: String,
    pub model: String,
    pub year: String,
    pub description: String,
}

impl CarDetailsForm {
    pub fn from_defaults(defaults: &Map<String, Value>) -> Self {
        Self {
            make: text(defaults, FIELD_MAKE),
            model: text(defaults, FIELD_MODEL),
            year: text(defaults, FIELD_YEAR),
            description: text(defaults, FIELD_DESCRIPTION),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.make, "Make")?;
        validate_make(&self.make)?;
        require_text(&self.model, "Model")?;
        validate_model(&self.make, &self.model)?;
        if self.year.len() != 4 || !self.year.chars().all(|c| c.is_ascii_digit()) {
            return Err(CoreError::Validation(
                "Year must be a 4-digit number".to_string(),
            ));
        }
        if self.description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(CoreError::Validation(format!(
                "Description must be at most {MAX_DESCRIPTION_LEN} characters"
            )));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(FIELD_MAKE.to_string(), Value::from(self.make.clone()));
        data.insert(FIELD_MODEL.to_string(), Value::from(self.model.clone()));
        data.insert(FIELD_YEAR.to_string(), Value::from(self.year.clone()));
        data.insert(
            FIELD_DESCRIPTION.to_string(),
            Value::from(self.description.clone()),
        );
        data
    }
}

// ---------------------------------------------------------------------------
// Step 1: registration
// ---------------------------------------------------------------------------

/// First or second owner, as recorded on the registration certificate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HandType {
    #[default]
    First,
    Second,
}

impl HandType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::First => "First",
            Self::Second => "Second",
        }
    }

    /// Parse from the backend string, defaulting to `First`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Second" => Self::Second,
            _ => Self::First,
        }
    }
}

/// Private or commercial registration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegistrationType {
    #[default]
    Private,
    Commercial,
}

impl RegistrationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Private => "Private",
            Self::Commercial => "Commercial",
        }
    }

    /// Parse from the backend string, defaulting to `Private`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "Commercial" => Self::Commercial,
            _ => Self::Private,
        }
    }
}

/// Registration certificate details plus front/back document scans.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub owner_name: String,
    pub registration_no: String,
    pub city_of_registration: String,
    /// RC validity date, `YYYY-MM-DD`.
    pub valid_till: String,
    pub hand_type: HandType,
    pub registration_type: RegistrationType,
    pub front_image: Option<ImageFile>,
    pub back_image: Option<ImageFile>,
}

impl RegistrationForm {
    /// Pre-fill text fields from accumulated data. Document scans are not
    /// carried in the accumulated map and must be re-attached on re-entry.
    pub fn from_defaults(defaults: &Map<String, Value>) -> Self {
        Self {
            owner_name: text(defaults, FIELD_OWNER_NAME),
            registration_no: text(defaults, FIELD_RC_NUMBER),
            city_of_registration: text(defaults, FIELD_CITY_OF_REGISTRATION),
            valid_till: text(defaults, FIELD_RC_VALID_TILL),
            hand_type: HandType::from_str_or_default(&text(defaults, FIELD_HAND_TYPE)),
            registration_type: RegistrationType::from_str_or_default(&text(
                defaults,
                FIELD_REGISTRATION_TYPE,
            )),
            front_image: None,
            back_image: None,
        }
    }

    /// The registration number as submitted: case-normalized to uppercase.
    pub fn normalized_registration_no(&self) -> String {
        self.registration_no.to_uppercase()
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.owner_name, "Owner name")?;
        require_text(&self.registration_no, "Registration number")?;
        require_text(&self.city_of_registration, "City of registration")?;
        validate_city(&self.city_of_registration)?;
        require_text(&self.valid_till, "RC valid-till date")?;
        parse_date(&self.valid_till, "RC valid-till date")?;
        if self.front_image.is_none() || self.back_image.is_none() {
            return Err(CoreError::Validation(
                "Both RC front and back images are required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            FIELD_OWNER_NAME.to_string(),
            Value::from(self.owner_name.clone()),
        );
        data.insert(
            FIELD_RC_NUMBER.to_string(),
            Value::from(self.normalized_registration_no()),
        );
        data.insert(
            FIELD_CITY_OF_REGISTRATION.to_string(),
            Value::from(self.city_of_registration.clone()),
        );
        data.insert(
            FIELD_RC_VALID_TILL.to_string(),
            Value::from(self.valid_till.clone()),
        );
        data.insert(
            FIELD_HAND_TYPE.to_string(),
            Value::from(self.hand_type.as_str()),
        );
        data.insert(
            FIELD_REGISTRATION_TYPE.to_string(),
            Value::from(self.registration_type.as_str()),
        );
        data
    }
}

// ---------------------------------------------------------------------------
// Step 2: insurance
// ---------------------------------------------------------------------------

/// Current insurance policy details plus the policy document scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsuranceForm {
    pub company: String,
    /// Policy validity date, `YYYY-MM-DD`.
    pub valid_till: String,
    /// Insured declared value, optional.
    pub idv_value: Option<i64>,
    pub document: Option<ImageFile>,
}

impl InsuranceForm {
    pub fn from_defaults(defaults: &Map<String, Value>) -> Self {
        Self {
            company: text(defaults, FIELD_INSURANCE_COMPANY),
            valid_till: text(defaults, FIELD_INSURANCE_VALID_TILL),
            idv_value: defaults
                .get(FIELD_INSURANCE_IDV_VALUE)
                .and_then(Value::as_i64),
            document: None,
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        require_text(&self.company, "Insurance company")?;
        validate_insurer(&self.company)?;
        require_text(&self.valid_till, "Insurance valid-till date")?;
        parse_date(&self.valid_till, "Insurance valid-till date")?;
        if self.document.is_none() {
            return Err(CoreError::Validation(
                "Insurance document image is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            FIELD_INSURANCE_COMPANY.to_string(),
            Value::from(self.company.clone()),
        );
        data.insert(
            FIELD_INSURANCE_VALID_TILL.to_string(),
            Value::from(self.valid_till.clone()),
        );
        if let Some(idv) = self.idv_value {
            data.insert(FIELD_INSURANCE_IDV_VALUE.to_string(), Value::from(idv));
        }
        data
    }
}

// ---------------------------------------------------------------------------
// Step 3: features
// ---------------------------------------------------------------------------

/// The feature-flag selection. At least one feature must be selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeaturesForm {
    pub features: CarFeatures,
}

impl FeaturesForm {
    pub fn from_defaults(defaults: &Map<String, Value>) -> Self {
        let features =
            serde_json::from_value(Value::Object(defaults.clone())).unwrap_or_default();
        Self { features }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        self.features.validate_any_selected()
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        match serde_json::to_value(self.features) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Step 4: images
// ---------------------------------------------------------------------------

/// The photo set, constrained to between [`MIN_IMAGES`] and [`MAX_IMAGES`]
/// images. Additions past the maximum are rejected locally, before any
/// network call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImagesForm {
    images: Vec<ImageFile>,
}

impl ImagesForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn images(&self) -> &[ImageFile] {
        &self.images
    }

    pub fn count(&self) -> usize {
        self.images.len()
    }

    /// Stage one image. Fails once [`MAX_IMAGES`] are already staged.
    pub fn add_image(&mut self, image: ImageFile) -> Result<(), CoreError> {
        if self.images.len() >= MAX_IMAGES {
            return Err(CoreError::Validation(format!(
                "You can upload a maximum of {MAX_IMAGES} images. You currently have {} image(s)",
                self.images.len()
            )));
        }
        self.images.push(image);
        Ok(())
    }

    /// Stage a batch of images. The whole batch is rejected if it would
    /// push the count past [`MAX_IMAGES`].
    pub fn add_images(&mut self, batch: Vec<ImageFile>) -> Result<(), CoreError> {
        if self.images.len() + batch.len() > MAX_IMAGES {
            return Err(CoreError::Validation(format!(
                "You can upload a maximum of {MAX_IMAGES} images. You currently have {} image(s)",
                self.images.len()
            )));
        }
        self.images.extend(batch);
        Ok(())
    }

    /// Remove the image at `index`, if any. The consuming UI is expected
    /// to confirm with the user before calling this.
    pub fn remove_image(&mut self, index: usize) -> Option<ImageFile> {
        if index < self.images.len() {
            Some(self.images.remove(index))
        } else {
            None
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if self.images.len() < MIN_IMAGES {
            return Err(CoreError::Validation(format!(
                "Please upload at least {MIN_IMAGES} images. You currently have {} image(s)",
                self.images.len()
            )));
        }
        // add_image enforces the upper bound, so this only trips if the
        // vector was built by hand.
        if self.images.len() > MAX_IMAGES {
            return Err(CoreError::Validation(format!(
                "You can upload a maximum of {MAX_IMAGES} images"
            )));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            FIELD_PHOTO_COUNT.to_string(),
            Value::from(self.images.len()),
        );
        data
    }
}

// ---------------------------------------------------------------------------
// Step 5: availability and pricing
// ---------------------------------------------------------------------------

/// Rental price and the availability window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityForm {
    pub price_per_hour: f64,
    /// First available date, `YYYY-MM-DD`.
    pub available_from: String,
    /// Last available date, `YYYY-MM-DD`. Must be strictly after
    /// `available_from`.
    pub available_till: String,
}

impl AvailabilityForm {
    pub fn from_defaults(defaults: &Map<String, Value>) -> Self {
        Self {
            price_per_hour: defaults
                .get(FIELD_PRICE_PER_HOUR)
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            available_from: text(defaults, FIELD_AVAILABLE_FROM),
            available_till: text(defaults, FIELD_AVAILABLE_TILL),
        }
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.price_per_hour.is_finite() || self.price_per_hour <= 0.0 {
            return Err(CoreError::Validation(
                "Price per hour must be greater than zero".to_string(),
            ));
        }
        require_text(&self.available_from, "Available-from date")?;
        let from = parse_date(&self.available_from, "Available-from date")?;
        require_text(&self.available_till, "Available-till date")?;
        let till = parse_date(&self.available_till, "Available-till date")?;
        if till <= from {
            return Err(CoreError::Validation(
                "Available-till date must be after the available-from date".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn to_step_data(&self) -> Map<String, Value> {
        let mut data = Map::new();
        data.insert(
            FIELD_PRICE_PER_HOUR.to_string(),
            Value::from(self.price_per_hour),
        );
        data.insert(
            FIELD_AVAILABLE_FROM.to_string(),
            Value::from(self.available_from.clone()),
        );
        data.insert(
            FIELD_AVAILABLE_TILL.to_string(),
            Value::from(self.available_till.clone()),
        );
        data
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn sample_image(name: &str) -> ImageFile {
        ImageFile::jpeg(name, vec![0xFF, 0xD8, 0xFF])
    }

    fn valid_details() -> CarDetailsForm {
        CarDetailsForm {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            description: String::new(),
        }
    }

    fn valid_registration() -> RegistrationForm {
        RegistrationForm {
            owner_name: "A. Singh".to_string(),
            registration_no: "dl01ab1234".to_string(),
            city_of_registration: "Delhi".to_string(),
            valid_till: "2027-06-30".to_string(),
            hand_type: HandType::First,
            registration_type: RegistrationType::Private,
            front_image: Some(sample_image("rc_front.jpg")),
            back_image: Some(sample_image("rc_back.jpg")),
        }
    }

    // -- car details --

    #[test]
    fn details_valid_form_passes() {
        assert!(valid_details().validate().is_ok());
        assert!(valid_details().is_complete());
    }

    #[test]
    fn details_empty_fields_fail() {
        let mut form = valid_details();
        form.make = String::new();
        assert_matches!(form.validate(), Err(CoreError::Validation(_)));

        let mut form = valid_details();
        form.model = String::new();
        assert!(!form.is_complete());
    }

    #[test]
    fn details_year_must_be_four_digits() {
        for year in ["", "202", "20201", "20x0", "two thousand twenty"] {
            let mut form = valid_details();
            form.year = year.to_string();
            assert!(!form.is_complete(), "year {year:?} should be rejected");
        }
        let mut form = valid_details();
        form.year = "1999".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn details_model_checked_against_make() {
        let mut form = valid_details();
        form.model = "Civic".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn details_description_capped_at_200_chars() {
        let mut form = valid_details();
        form.description = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(form.is_complete());
        form.description.push('x');
        assert!(!form.is_complete());
    }

    #[test]
    fn details_roundtrips_through_step_data() {
        let form = valid_details();
        let restored = CarDetailsForm::from_defaults(&form.to_step_data());
        assert_eq!(restored, form);
    }

    // -- registration --

    #[test]
    fn registration_valid_form_passes() {
        assert!(valid_registration().is_complete());
    }

    #[test]
    fn registration_number_is_uppercased() {
        let form = valid_registration();
        assert_eq!(form.normalized_registration_no(), "DL01AB1234");
        assert_eq!(
            form.to_step_data().get("rc_number"),
            Some(&json!("DL01AB1234"))
        );
    }

    #[test]
    fn registration_requires_both_images() {
        let mut form = valid_registration();
        form.back_image = None;
        assert!(!form.is_complete());

        let mut form = valid_registration();
        form.front_image = None;
        assert!(!form.is_complete());
    }

    #[test]
    fn registration_rejects_unknown_city() {
        let mut form = valid_registration();
        form.city_of_registration = "Mumbai".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn registration_rejects_malformed_date() {
        let mut form = valid_registration();
        form.valid_till = "30/06/2027".to_string();
        assert!(!form.is_complete());
    }

    #[test]
    fn registration_prefills_from_defaults_without_images() {
        let defaults = valid_registration().to_step_data();
        let restored = RegistrationForm::from_defaults(&defaults);
        assert_eq!(restored.owner_name, "A. Singh");
        assert_eq!(restored.registration_no, "DL01AB1234");
        assert_eq!(restored.hand_type, HandType::First);
        assert!(restored.front_image.is_none());
        // Incomplete until the scans are re-attached.
        assert!(!restored.is_complete());
    }

    #[test]
    fn hand_and_registration_types_default_on_unknown_input() {
        assert_eq!(HandType::from_str_or_default("Second"), HandType::Second);
        assert_eq!(HandType::from_str_or_default("third"), HandType::First);
        assert_eq!(
            RegistrationType::from_str_or_default("Commercial"),
            RegistrationType::Commercial
        );
        assert_eq!(
            RegistrationType::from_str_or_default(""),
            RegistrationType::Private
        );
    }

    // -- insurance --

    #[test]
    fn insurance_requires_company_date_and_document() {
        let valid = InsuranceForm {
            company: "HDFC ERGO".to_string(),
            valid_till: "2027-01-01".to_string(),
            idv_value: None,
            document: Some(sample_image("insurance.jpg")),
        };
        assert!(valid.is_complete());

        let mut form = valid.clone();
        form.document = None;
        assert!(!form.is_complete());

        let mut form = valid.clone();
        form.company = "Unknown Insurer Ltd".to_string();
        assert!(!form.is_complete());

        let mut form = valid;
        form.valid_till = String::new();
        assert!(!form.is_complete());
    }

    #[test]
    fn insurance_idv_is_optional_and_only_serialized_when_set() {
        let mut form = InsuranceForm {
            company: "TATA AIG".to_string(),
            valid_till: "2027-01-01".to_string(),
            idv_value: None,
            document: Some(sample_image("insurance.jpg")),
        };
        assert!(!form.to_step_data().contains_key("insurance_idv_value"));

        form.idv_value = Some(450_000);
        assert_eq!(
            form.to_step_data().get("insurance_idv_value"),
            Some(&json!(450_000))
        );
    }

    // -- features --

    #[test]
    fn features_requires_at_least_one_selection() {
        let mut form = FeaturesForm::default();
        assert!(!form.is_complete());

        form.features.gps = true;
        assert!(form.is_complete());
    }

    #[test]
    fn features_roundtrip_through_step_data() {
        let mut form = FeaturesForm::default();
        form.features.bluetooth = true;
        form.features.climate_control = true;

        let restored = FeaturesForm::from_defaults(&form.to_step_data());
        assert_eq!(restored, form);
    }

    // -- images --

    #[test]
    fn images_adding_fourth_when_two_present_succeeds() {
        let mut form = ImagesForm::new();
        form.add_images(vec![sample_image("1.jpg"), sample_image("2.jpg")])
            .unwrap();
        assert!(form.add_image(sample_image("3.jpg")).is_ok());
        assert!(form.add_image(sample_image("4.jpg")).is_ok());
        assert_eq!(form.count(), 4);
    }

    #[test]
    fn images_rejects_additions_past_ten() {
        let mut form = ImagesForm::new();
        for i in 0..MAX_IMAGES {
            form.add_image(sample_image(&format!("{i}.jpg"))).unwrap();
        }
        assert_matches!(
            form.add_image(sample_image("extra.jpg")),
            Err(CoreError::Validation(_))
        );
        assert_eq!(form.count(), MAX_IMAGES);
    }

    #[test]
    fn images_rejects_batch_that_would_overflow() {
        let mut form = ImagesForm::new();
        for i in 0..9 {
            form.add_image(sample_image(&format!("{i}.jpg"))).unwrap();
        }
        let batch = vec![sample_image("a.jpg"), sample_image("b.jpg")];
        assert!(form.add_images(batch).is_err());
        // Nothing from the rejected batch was staged.
        assert_eq!(form.count(), 9);
    }

    #[test]
    fn images_removal_below_three_disables_proceed() {
        let mut form = ImagesForm::new();
        for i in 0..MIN_IMAGES {
            form.add_image(sample_image(&format!("{i}.jpg"))).unwrap();
        }
        assert!(form.is_complete());

        let removed = form.remove_image(0);
        assert!(removed.is_some());
        assert!(!form.is_complete());
    }

    #[test]
    fn images_remove_out_of_range_is_none() {
        let mut form = ImagesForm::new();
        assert!(form.remove_image(0).is_none());
    }

    #[test]
    fn images_step_data_carries_the_count() {
        let mut form = ImagesForm::new();
        for i in 0..4 {
            form.add_image(sample_image(&format!("{i}.jpg"))).unwrap();
        }
        assert_eq!(form.to_step_data().get("photo_count"), Some(&json!(4)));
    }

    // -- availability --

    #[test]
    fn availability_till_must_be_strictly_after_from() {
        let mut form = AvailabilityForm {
            price_per_hour: 10.0,
            available_from: "2026-09-01".to_string(),
            available_till: "2026-09-01".to_string(),
        };
        assert!(!form.is_complete());

        form.available_till = "2026-09-02".to_string();
        assert!(form.is_complete());
    }

    #[test]
    fn availability_price_must_be_positive() {
        let mut form = AvailabilityForm {
            price_per_hour: 0.0,
            available_from: "2026-09-01".to_string(),
            available_till: "2026-09-02".to_string(),
        };
        assert!(!form.is_complete());

        form.price_per_hour = -5.0;
        assert!(!form.is_complete());

        form.price_per_hour = 0.01;
        assert!(form.is_complete());
    }

    #[test]
    fn availability_rejects_malformed_dates() {
        let form = AvailabilityForm {
            price_per_hour: 10.0,
            available_from: "September 1".to_string(),
            available_till: "2026-09-02".to_string(),
        };
        assert!(!form.is_complete());
    }

    #[test]
    fn availability_roundtrips_through_step_data() {
        let form = AvailabilityForm {
            price_per_hour: 12.5,
            available_from: "2026-09-01".to_string(),
            available_till: "2026-10-01".to_string(),
        };
        let restored = AvailabilityForm::from_defaults(&form.to_step_data());
        assert_eq!(restored, form);
    }
}
