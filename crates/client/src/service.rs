//! The car service seam used by the wizard controller.
//!
//! Covers exactly the six wizard operations. The controller is generic
//! over this trait so its transition logic can be exercised against a
//! mock service, without a backend.

use async_trait::async_trait;

use ziptrip_core::types::CarId;
use ziptrip_core::wizard::ImageFile;

use crate::api::CarServiceApi;
use crate::error::ApiError;
use crate::requests::{
    AvailabilityUpload, CreateCarRequest, FeaturesUpload, InsuranceUpload, RegistrationUpload,
};

/// The backend operations the add-car wizard depends on.
#[async_trait]
pub trait CarService: Send + Sync {
    /// Create the car row and return its id.
    async fn create_car(&self, token: &str, request: &CreateCarRequest)
        -> Result<CarId, ApiError>;

    /// Attach the registration certificate.
    async fn upload_registration(
        &self,
        token: &str,
        upload: &RegistrationUpload,
    ) -> Result<(), ApiError>;

    /// Attach the insurance policy.
    async fn add_insurance(&self, token: &str, upload: &InsuranceUpload) -> Result<(), ApiError>;

    /// Attach the feature flags.
    async fn add_features(&self, token: &str, upload: &FeaturesUpload) -> Result<(), ApiError>;

    /// Attach the photo set.
    async fn add_images(
        &self,
        token: &str,
        car_id: CarId,
        images: &[ImageFile],
    ) -> Result<(), ApiError>;

    /// Attach the availability window and pricing.
    async fn set_availability(
        &self,
        token: &str,
        upload: &AvailabilityUpload,
    ) -> Result<(), ApiError>;
}

#[async_trait]
impl CarService for CarServiceApi {
    async fn create_car(
        &self,
        token: &str,
        request: &CreateCarRequest,
    ) -> Result<CarId, ApiError> {
        CarServiceApi::create_car(self, token, request).await
    }

    async fn upload_registration(
        &self,
        token: &str,
        upload: &RegistrationUpload,
    ) -> Result<(), ApiError> {
        CarServiceApi::upload_registration(self, token, upload).await
    }

    async fn add_insurance(&self, token: &str, upload: &InsuranceUpload) -> Result<(), ApiError> {
        CarServiceApi::add_insurance(self, token, upload).await
    }

    async fn add_features(&self, token: &str, upload: &FeaturesUpload) -> Result<(), ApiError> {
        CarServiceApi::add_features(self, token, upload).await
    }

    async fn add_images(
        &self,
        token: &str,
        car_id: CarId,
        images: &[ImageFile],
    ) -> Result<(), ApiError> {
        CarServiceApi::add_images(self, token, car_id, images).await
    }

    async fn set_availability(
        &self,
        token: &str,
        upload: &AvailabilityUpload,
    ) -> Result<(), ApiError> {
        CarServiceApi::set_availability(self, token, upload).await
    }
}
