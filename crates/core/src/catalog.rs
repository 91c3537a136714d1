//! Closed enumerations backing the wizard's picker fields.
//!
//! Make, model, registration city, and insurer are all selected from fixed
//! lists; free-text values outside these lists never reach the network.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Makes and models
// ---------------------------------------------------------------------------

/// All makes offered by the make picker.
pub const CAR_MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Volkswagen",
    "Nissan",
    "Hyundai",
    "Kia",
    "Mazda",
    "Lexus",
    "Subaru",
    "Tesla",
    "Porsche",
    "Jeep",
    "Ram",
    "Dodge",
    "GMC",
    "Cadillac",
    "Volvo",
    "Jaguar",
    "Land Rover",
];

/// Fallback model list shown for makes without a curated list.
pub const GENERIC_MODELS: &[&str] = &[
    "Sedan",
    "SUV",
    "Truck",
    "Coupe",
    "Hatchback",
    "Convertible",
    "Wagon",
    "Minivan",
    "Crossover",
];

/// Model list for a given make. Makes without a curated list fall back
/// to [`GENERIC_MODELS`].
pub fn models_for_make(make: &str) -> &'static [&'static str] {
    match make {
        "Toyota" => &[
            "Camry", "Corolla", "RAV4", "Highlander", "Tacoma", "Tundra", "Prius", "4Runner",
        ],
        "Honda" => &[
            "Civic", "Accord", "CR-V", "Pilot", "Odyssey", "HR-V", "Ridgeline",
        ],
        "Ford" => &[
            "F-150", "Mustang", "Explorer", "Escape", "Edge", "Bronco", "Ranger",
        ],
        "Chevrolet" => &[
            "Silverado", "Tahoe", "Equinox", "Malibu", "Traverse", "Camaro", "Colorado",
        ],
        "BMW" => &[
            "3 Series", "5 Series", "X3", "X5", "7 Series", "X1", "4 Series",
        ],
        "Tesla" => &["Model 3", "Model S", "Model X", "Model Y"],
        _ => GENERIC_MODELS,
    }
}

// ---------------------------------------------------------------------------
// Registration cities
// ---------------------------------------------------------------------------

/// Cities accepted for the registration step's city-of-registration field.
pub const REGISTRATION_CITIES: &[&str] = &[
    "Delhi",
    "Agra",
    "Noida",
    "Meerut",
    "Gurgaon",
    "Faridabad",
    "Ghaziabad",
];

// ---------------------------------------------------------------------------
// Insurance companies
// ---------------------------------------------------------------------------

/// Insurers accepted by the insurance step, ending with a catch-all "Other".
pub const INSURANCE_COMPANIES: &[&str] = &[
    "ICICI Lombard",
    "HDFC ERGO",
    "Bajaj Allianz",
    "TATA AIG",
    "Reliance General Insurance",
    "National Insurance",
    "New India Assurance",
    "Oriental Insurance",
    "United India Insurance",
    "Digit Insurance",
    "Acko General Insurance",
    "Go Digit General Insurance",
    "Royal Sundaram",
    "Cholamandalam MS",
    "Future Generali",
    "Liberty General Insurance",
    "Shriram General Insurance",
    "Bharti AXA General Insurance",
    "Kotak Mahindra General Insurance",
    "Magma HDI General Insurance",
    "Raheja QBE General Insurance",
    "SBI General Insurance",
    "Universal Sompo General Insurance",
    "Iffco Tokio General Insurance",
    "Other",
];

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate that a value is present in a known list, returning a
/// descriptive error if not.
fn validate_known_value(value: &str, known: &[&str], what: &str) -> Result<(), CoreError> {
    if known.contains(&value) {
        return Ok(());
    }
    Err(CoreError::Validation(format!(
        "Unknown {what} '{value}'"
    )))
}

/// Validate a car make against [`CAR_MAKES`].
pub fn validate_make(make: &str) -> Result<(), CoreError> {
    validate_known_value(make, CAR_MAKES, "car make")
}

/// Validate a model against the selected make's model list.
pub fn validate_model(make: &str, model: &str) -> Result<(), CoreError> {
    validate_known_value(model, models_for_make(make), "model")
}

/// Validate a registration city against [`REGISTRATION_CITIES`].
pub fn validate_city(city: &str) -> Result<(), CoreError> {
    validate_known_value(city, REGISTRATION_CITIES, "registration city")
}

/// Validate an insurer against [`INSURANCE_COMPANIES`].
pub fn validate_insurer(company: &str) -> Result<(), CoreError> {
    validate_known_value(company, INSURANCE_COMPANIES, "insurance company")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
