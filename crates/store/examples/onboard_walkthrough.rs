//! Walks the full add-car flow against a live car service.
//!
//! Reads its configuration from the environment (a `.env` file is picked
//! up if present):
//!
//! | Variable                        | Required | Purpose                              |
//! |---------------------------------|----------|--------------------------------------|
//! | `ZIPTRIP_BASE_URL`              | yes      | Base URL of the car service          |
//! | `ZIPTRIP_EMAIL`                 | yes      | Host account email                   |
//! | `ZIPTRIP_PASSWORD`              | yes      | Host account password                |
//! | `ZIPTRIP_RC_FRONT`              | yes      | Path to the RC front scan (JPEG)     |
//! | `ZIPTRIP_RC_BACK`               | yes      | Path to the RC back scan (JPEG)      |
//! | `ZIPTRIP_INSURANCE_DOC`         | yes      | Path to the insurance scan (JPEG)    |
//! | `ZIPTRIP_PHOTOS`                | yes      | Comma-separated car photo paths (3+) |
//!
//! Run with:
//!
//! ```text
//! cargo run -p ziptrip-store --example onboard_walkthrough
//! ```

use std::env;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use ziptrip_client::{ApiConfig, CarServiceApi};
use ziptrip_core::wizard::{
    AvailabilityForm, CarDetailsForm, FeaturesForm, HandType, ImageFile, ImagesForm,
    InsuranceForm, RegistrationForm, RegistrationType,
};
use ziptrip_store::{SessionStore, WizardController};

fn require_env(name: &str) -> anyhow::Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

fn load_jpeg(path: &str) -> anyhow::Result<ImageFile> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {path}"))?;
    let file_name = Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image.jpg");
    Ok(ImageFile::jpeg(file_name, bytes))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let api = Arc::new(CarServiceApi::new(ApiConfig::from_env()));
    let session = Arc::new(SessionStore::new(api.clone()));
    let wizard = WizardController::new(api, session.clone());

    let email = require_env("ZIPTRIP_EMAIL")?;
    let password = require_env("ZIPTRIP_PASSWORD")?;
    let user = session.login(&email, &password).await?;
    tracing::info!(user_id = user.id, "Authenticated as {} {}", user.first_name, user.last_name);

    wizard
        .submit_details(&CarDetailsForm {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            description: "Well maintained, single owner".to_string(),
        })
        .await?;
    tracing::info!(car_id = wizard.car_id().await, "Details accepted");

    wizard
        .submit_registration(&RegistrationForm {
            owner_name: format!("{} {}", user.first_name, user.last_name),
            registration_no: "dl01ab1234".to_string(),
            city_of_registration: "Delhi".to_string(),
            valid_till: "2028-06-30".to_string(),
            hand_type: HandType::First,
            registration_type: RegistrationType::Private,
            front_image: Some(load_jpeg(&require_env("ZIPTRIP_RC_FRONT")?)?),
            back_image: Some(load_jpeg(&require_env("ZIPTRIP_RC_BACK")?)?),
        })
        .await?;

    wizard
        .submit_insurance(&InsuranceForm {
            company: "HDFC ERGO".to_string(),
            valid_till: "2027-12-31".to_string(),
            idv_value: Some(450_000),
            document: Some(load_jpeg(&require_env("ZIPTRIP_INSURANCE_DOC")?)?),
        })
        .await?;

    let mut features = FeaturesForm::default();
    features.features.airconditions = true;
    features.features.gps = true;
    features.features.bluetooth = true;
    wizard.submit_features(&features).await?;

    let mut images = ImagesForm::new();
    for path in require_env("ZIPTRIP_PHOTOS")?.split(',') {
        images.add_image(load_jpeg(path.trim())?)?;
    }
    wizard.submit_images(&images).await?;

    wizard
        .submit_availability(&AvailabilityForm {
            price_per_hour: 12.5,
            available_from: "2026-09-01".to_string(),
            available_till: "2026-12-01".to_string(),
        })
        .await?;

    let car_id = wizard.car_id().await;
    tracing::info!(car_id, "Car fully onboarded");
    Ok(())
}
