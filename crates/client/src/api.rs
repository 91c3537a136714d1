//! HTTP client for the car service REST endpoints.
//!
//! Wraps every endpoint with [`reqwest`], one method per backend
//! operation. File-bearing calls build `multipart/form-data` bodies where
//! each file part carries a filename and MIME type.

use reqwest::multipart::{Form, Part};
use reqwest::StatusCode;

use ziptrip_core::types::{Car, CarDetails, CarId};
use ziptrip_core::wizard::ImageFile;

use crate::config::ApiConfig;
use crate::error::{is_conflict_message, ApiError};
use crate::requests::{
    AuthResponse, AvailabilityUpload, CarDetailsRequest, CreateCarRequest, CreateCarResponse,
    FeaturesUpload, InsuranceUpload, LoginRequest, MyCarsResponse, RegistrationUpload,
    SignupRequest,
};

/// HTTP client for one car service deployment.
pub struct CarServiceApi {
    client: reqwest::Client,
    base_url: String,
}

impl CarServiceApi {
    /// Create a client from configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self {
            client,
            base_url: config.base_url,
        }
    }

    /// Create a client reusing an existing [`reqwest::Client`] (useful
    /// for connection pooling across services).
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL of the car service.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ---- wizard: step 0 ----

    /// Create a car row with its identity fields and return the assigned
    /// id. Fails with [`ApiError::MissingCarId`] when the backend answers
    /// 2xx without an identifier.
    pub async fn create_car(
        &self,
        token: &str,
        request: &CreateCarRequest,
    ) -> Result<CarId, ApiError> {
        let response = self
            .client
            .post(format!("{}/cars/addCar", self.base_url))
            .bearer_auth(token)
            .json(request)
            .send()
            .await?;

        let body: CreateCarResponse = Self::parse_response(response).await?;
        let car_id = body.car_id().ok_or(ApiError::MissingCarId)?;

        tracing::info!(car_id, make = %request.make, model = %request.model, "Created car");
        Ok(car_id)
    }

    // ---- wizard: steps 1-5 ----

    /// Attach the registration certificate (multipart: text fields plus
    /// front and back scans).
    pub async fn upload_registration(
        &self,
        token: &str,
        upload: &RegistrationUpload,
    ) -> Result<(), ApiError> {
        let form = Form::new()
            .text("car_id", upload.car_id.to_string())
            .text("owner_name", upload.owner_name.clone())
            .text("rc_number", upload.rc_number.clone())
            .text("rc_valid_till", upload.rc_valid_till.clone())
            .text("city_of_registration", upload.city_of_registration.clone())
            .text("hand_type", upload.hand_type.clone())
            .text("registration_type", upload.registration_type.clone())
            .part("rc_image_front", Self::image_part(&upload.rc_image_front)?)
            .part("rc_image_back", Self::image_part(&upload.rc_image_back)?);

        let response = self
            .client
            .post(format!("{}/cars/addRC", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(car_id = upload.car_id, "Uploaded registration certificate");
        Ok(())
    }

    /// Attach the insurance policy (multipart: policy fields plus the
    /// document scan).
    pub async fn add_insurance(
        &self,
        token: &str,
        upload: &InsuranceUpload,
    ) -> Result<(), ApiError> {
        let mut form = Form::new()
            .text("car_id", upload.car_id.to_string())
            .text("insurance_company", upload.insurance_company.clone())
            .text("insurance_valid_till", upload.insurance_valid_till.clone())
            .part(
                "insurance_image",
                Self::image_part(&upload.insurance_image)?,
            );
        if let Some(idv) = upload.insurance_idv_value {
            form = form.text("insurance_idv_value", idv.to_string());
        }

        let response = self
            .client
            .post(format!("{}/cars/addInsurance", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(car_id = upload.car_id, "Uploaded insurance policy");
        Ok(())
    }

    /// Attach the feature flags (JSON).
    pub async fn add_features(&self, token: &str, upload: &FeaturesUpload) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/car-features", self.base_url))
            .bearer_auth(token)
            .json(upload)
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(
            car_id = upload.car_id,
            selected = upload.features.selected_count(),
            "Saved car features"
        );
        Ok(())
    }

    /// Attach the photo set (multipart: one `photos` part per image).
    pub async fn add_images(
        &self,
        token: &str,
        car_id: CarId,
        images: &[ImageFile],
    ) -> Result<(), ApiError> {
        let mut form = Form::new().text("car_id", car_id.to_string());
        for image in images {
            form = form.part("photos", Self::image_part(image)?);
        }

        let response = self
            .client
            .post(format!("{}/cars/addImages", self.base_url))
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(car_id, count = images.len(), "Uploaded car photos");
        Ok(())
    }

    /// Attach the availability window and hourly price (JSON).
    pub async fn set_availability(
        &self,
        token: &str,
        upload: &AvailabilityUpload,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/cars/addAvailability", self.base_url))
            .bearer_auth(token)
            .json(upload)
            .send()
            .await?;

        Self::check_status(response).await?;
        tracing::info!(car_id = upload.car_id, "Saved availability and pricing");
        Ok(())
    }

    // ---- catalog ----

    /// Fetch the public car listing.
    pub async fn list_cars(&self) -> Result<Vec<Car>, ApiError> {
        let response = self
            .client
            .get(format!("{}/cars", self.base_url))
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Fetch the full detail record for one car. A bearer token is
    /// attached when available but the endpoint does not require one.
    pub async fn get_car_details(
        &self,
        token: Option<&str>,
        car_id: CarId,
    ) -> Result<CarDetails, ApiError> {
        let mut request = self
            .client
            .post(format!("{}/car-details/getCarDetails", self.base_url))
            .json(&CarDetailsRequest { car_id });
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        Self::parse_response(response).await
    }

    /// Fetch the authenticated host's own cars.
    pub async fn list_my_cars(&self, token: &str) -> Result<Vec<Car>, ApiError> {
        let response = self
            .client
            .post(format!("{}/cars/myCars", self.base_url))
            .bearer_auth(token)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let body: MyCarsResponse = Self::parse_response(response).await?;
        Ok(body.cars)
    }

    // ---- auth ----

    /// Exchange credentials for a bearer token and user record.
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/users/login", self.base_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Register a new account and return its token and user record.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/users/register", self.base_url))
            .json(request)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    // ---- private helpers ----

    /// Build a multipart file part carrying the image's filename and MIME
    /// type.
    fn image_part(image: &ImageFile) -> Result<Part, ApiError> {
        let part = Part::bytes(image.bytes.clone())
            .file_name(image.file_name.clone())
            .mime_str(&image.mime_type)?;
        Ok(part)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success; maps uniqueness violations (HTTP 409 or a
    /// duplicate/unique message) to [`ApiError::Conflict`] and everything
    /// else to [`ApiError::Api`].
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        if status == StatusCode::CONFLICT || is_conflict_message(&body) {
            return Err(ApiError::Conflict(body));
        }
        Err(ApiError::Api {
            status: status.as_u16(),
            body,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn image_part_rejects_a_malformed_mime_type() {
        let image = ImageFile::new("front.jpg", "not a mime", vec![1, 2, 3]);
        assert_matches!(
            CarServiceApi::image_part(&image),
            Err(ApiError::Request(_))
        );
    }

    #[test]
    fn image_part_accepts_the_default_jpeg_mime() {
        let image = ImageFile::jpeg("front.jpg", vec![1, 2, 3]);
        assert!(CarServiceApi::image_part(&image).is_ok());
    }

    #[tokio::test]
    async fn unreachable_service_surfaces_a_request_error() {
        // Port 9 (discard) is closed on loopback; the connection is refused
        // without leaving the host.
        let api = CarServiceApi::new(ApiConfig::new("http://127.0.0.1:9"));
        assert_matches!(api.list_cars().await, Err(ApiError::Request(_)));
    }
}
