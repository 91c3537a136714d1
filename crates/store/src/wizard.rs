//! The add-car wizard controller.
//!
//! Owns the [`WizardSession`] and bridges each step's form to the car
//! service. Submission is step-owned: every `submit_*` method validates
//! its form locally, performs that step's network call, and only feeds
//! the session's pure transition on success. A failed call leaves the
//! session exactly where it was (same step, same data, same car id) and
//! the caller keeps the entered form values for retry.
//!
//! One submission at a time: a second submit or a back-navigation while
//! a call is in flight is refused with [`StoreError::SubmissionInFlight`].

use std::sync::Arc;

use serde_json::{Map, Value};
use tokio::sync::RwLock;

use ziptrip_client::requests::{
    AvailabilityUpload, CreateCarRequest, FeaturesUpload, InsuranceUpload, RegistrationUpload,
};
use ziptrip_client::{ApiError, CarService};
use ziptrip_core::types::CarId;
use ziptrip_core::wizard::{
    AvailabilityForm, CarDetailsForm, FeaturesForm, ImagesForm, InsuranceForm, RegistrationForm,
    Retreat, WizardSession, WizardState, WizardStep,
};
use ziptrip_core::CoreError;

use crate::error::StoreError;
use crate::session::SessionStore;

struct ControllerState {
    session: WizardSession,
    submitting: bool,
}

/// Drives one six-step onboarding flow against a car service.
///
/// Generic over [`CarService`] so the transition logic can be exercised
/// with a mock; production code passes the `CarServiceApi` client.
pub struct WizardController<S: CarService> {
    service: Arc<S>,
    session_store: Arc<SessionStore>,
    state: RwLock<ControllerState>,
}

impl<S: CarService> WizardController<S> {
    pub fn new(service: Arc<S>, session_store: Arc<SessionStore>) -> Self {
        Self {
            service,
            session_store,
            state: RwLock::new(ControllerState {
                session: WizardSession::new(),
                submitting: false,
            }),
        }
    }

    // ---- observers ----

    pub async fn current_step(&self) -> WizardStep {
        self.state.read().await.session.current_step()
    }

    pub async fn car_id(&self) -> Option<CarId> {
        self.state.read().await.session.car_id()
    }

    pub async fn is_completed(&self) -> bool {
        self.state.read().await.session.is_completed()
    }

    /// Whether a submission is in flight. The UI disables the proceed
    /// and back controls while this is true.
    pub async fn is_submitting(&self) -> bool {
        self.state.read().await.submitting
    }

    /// Pre-fill values for `step` from the accumulated data.
    pub async fn defaults_for(&self, step: WizardStep) -> Map<String, Value> {
        self.state.read().await.session.defaults_for(step)
    }

    /// The accumulated data merged across all submitted steps.
    pub async fn accumulated_data(&self) -> Map<String, Value> {
        self.state.read().await.session.data().clone()
    }

    // ---- step submissions ----

    /// Submit the details step. On the first pass this creates the car
    /// remotely and records the returned id; when the user has navigated
    /// back after creation, resubmission only merges the edited fields
    /// and advances (the car is created at most once per session).
    pub async fn submit_details(&self, form: &CarDetailsForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Details).await?;

        let already_created = {
            let state = self.state.read().await;
            !matches!(state.session.state(), WizardState::AwaitingCreation)
        };
        if already_created {
            let mut state = self.state.write().await;
            state.session.advance(form.to_step_data())?;
            return Ok(());
        }

        let token = self.require_token().await?;
        let request = CreateCarRequest {
            make: form.make.clone(),
            model: form.model.clone(),
            year: form.year.clone(),
            description: form.description.clone(),
        };

        self.begin_submission().await?;
        let result = self.service.create_car(&token, &request).await;
        self.finish_submission().await;

        let car_id = match result {
            Ok(car_id) => car_id,
            Err(ApiError::MissingCarId) => {
                return Err(StoreError::CreationFailed(
                    "the car service did not return a car id".to_string(),
                ));
            }
            Err(err) => return Err(err.into()),
        };

        let mut state = self.state.write().await;
        state.session.begin_editing(car_id, form.to_step_data())?;
        tracing::info!(car_id, "Car created, advancing to registration");
        Ok(())
    }

    /// Submit the registration step. The registration number is
    /// case-normalized to uppercase before upload; a uniqueness rejection
    /// is surfaced as [`StoreError::DuplicateRegistration`].
    pub async fn submit_registration(&self, form: &RegistrationForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Registration).await?;
        let car_id = self.require_car_id().await?;
        let token = self.require_token().await?;

        let (Some(front), Some(back)) = (form.front_image.clone(), form.back_image.clone()) else {
            return Err(CoreError::Validation(
                "Both RC front and back images are required".to_string(),
            )
            .into());
        };
        let rc_number = form.normalized_registration_no();
        let upload = RegistrationUpload {
            car_id,
            owner_name: form.owner_name.clone(),
            rc_number: rc_number.clone(),
            rc_valid_till: form.valid_till.clone(),
            city_of_registration: form.city_of_registration.clone(),
            hand_type: form.hand_type.as_str().to_string(),
            registration_type: form.registration_type.as_str().to_string(),
            rc_image_front: front,
            rc_image_back: back,
        };

        self.begin_submission().await?;
        let result = self.service.upload_registration(&token, &upload).await;
        self.finish_submission().await;

        match result {
            Ok(()) => self.advance(form.to_step_data()).await,
            Err(ApiError::Conflict(_)) => Err(StoreError::DuplicateRegistration(rc_number)),
            Err(err) => Err(err.into()),
        }
    }

    /// Submit the insurance step.
    pub async fn submit_insurance(&self, form: &InsuranceForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Insurance).await?;
        let car_id = self.require_car_id().await?;
        let token = self.require_token().await?;

        let Some(document) = form.document.clone() else {
            return Err(CoreError::Validation(
                "Insurance document image is required".to_string(),
            )
            .into());
        };
        let upload = InsuranceUpload {
            car_id,
            insurance_company: form.company.clone(),
            insurance_valid_till: form.valid_till.clone(),
            insurance_idv_value: form.idv_value,
            insurance_image: document,
        };

        self.begin_submission().await?;
        let result = self.service.add_insurance(&token, &upload).await;
        self.finish_submission().await;

        result?;
        self.advance(form.to_step_data()).await
    }

    /// Submit the features step.
    pub async fn submit_features(&self, form: &FeaturesForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Features).await?;
        let car_id = self.require_car_id().await?;
        let token = self.require_token().await?;

        let upload = FeaturesUpload {
            car_id,
            features: form.features,
        };

        self.begin_submission().await?;
        let result = self.service.add_features(&token, &upload).await;
        self.finish_submission().await;

        result?;
        self.advance(form.to_step_data()).await
    }

    /// Submit the images step. The 3-10 window is enforced locally; an
    /// out-of-range set never reaches the network.
    pub async fn submit_images(&self, form: &ImagesForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Images).await?;
        let car_id = self.require_car_id().await?;
        let token = self.require_token().await?;

        self.begin_submission().await?;
        let result = self
            .service
            .add_images(&token, car_id, form.images())
            .await;
        self.finish_submission().await;

        result?;
        self.advance(form.to_step_data()).await
    }

    /// Submit the availability step. On success the session is complete
    /// and the consumer should leave the wizard.
    pub async fn submit_availability(&self, form: &AvailabilityForm) -> Result<(), StoreError> {
        form.validate()?;
        self.ensure_step(WizardStep::Availability).await?;
        let car_id = self.require_car_id().await?;
        let token = self.require_token().await?;

        let upload = AvailabilityUpload {
            car_id,
            price_per_hour: form.price_per_hour,
            available_from: form.available_from.clone(),
            available_till: form.available_till.clone(),
        };

        self.begin_submission().await?;
        let result = self.service.set_availability(&token, &upload).await;
        self.finish_submission().await;

        result?;
        self.advance(form.to_step_data()).await?;
        tracing::info!(car_id, "Add-car wizard completed");
        Ok(())
    }

    // ---- navigation ----

    /// Move back one step, keeping all accumulated data. Refused while a
    /// submission is in flight. From the first step this signals the
    /// consumer to exit the wizard.
    pub async fn back(&self) -> Result<Retreat, StoreError> {
        let mut state = self.state.write().await;
        if state.submitting {
            return Err(StoreError::SubmissionInFlight);
        }
        Ok(state.session.retreat()?)
    }

    /// Discard the session, e.g. when the wizard unmounts. Returns the
    /// car id if one was created but the flow did not complete, in which
    /// case a draft car row remains on the server.
    pub async fn reset(&self) -> Option<CarId> {
        let mut state = self.state.write().await;
        let abandoned = match state.session.state() {
            WizardState::Editing { car_id } => Some(car_id),
            _ => None,
        };
        if let Some(car_id) = abandoned {
            tracing::warn!(car_id, "Wizard abandoned mid-flow; a draft car remains");
        }
        state.session = WizardSession::new();
        state.submitting = false;
        abandoned
    }

    // ---- private helpers ----

    async fn ensure_step(&self, expected: WizardStep) -> Result<(), StoreError> {
        let state = self.state.read().await;
        if state.session.is_completed() {
            return Err(CoreError::InvalidTransition(
                "the wizard has already completed".to_string(),
            )
            .into());
        }
        let current = state.session.current_step();
        if current != expected {
            return Err(CoreError::InvalidTransition(format!(
                "expected the {} step, currently on {}",
                expected.label(),
                current.label()
            ))
            .into());
        }
        Ok(())
    }

    async fn require_token(&self) -> Result<String, StoreError> {
        self.session_store
            .token()
            .await
            .ok_or(StoreError::NotAuthenticated)
    }

    async fn require_car_id(&self) -> Result<CarId, StoreError> {
        self.state
            .read()
            .await
            .session
            .car_id()
            .ok_or_else(|| {
                CoreError::InvalidTransition("no car has been created yet".to_string()).into()
            })
    }

    async fn begin_submission(&self) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        if state.submitting {
            return Err(StoreError::SubmissionInFlight);
        }
        state.submitting = true;
        Ok(())
    }

    async fn finish_submission(&self) {
        self.state.write().await.submitting = false;
    }

    async fn advance(&self, step_data: Map<String, Value>) -> Result<(), StoreError> {
        let mut state = self.state.write().await;
        state.session.advance(step_data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;
    use ziptrip_client::{ApiConfig, CarServiceApi};
    use ziptrip_core::types::{Role, User};
    use ziptrip_core::wizard::{HandType, ImageFile, RegistrationType};

    /// Scripted stand-in for the car service, recording every call.
    #[derive(Default)]
    struct MockCarService {
        create_car_id: Option<CarId>,
        fail_create: bool,
        registration_conflict: bool,
        fail_insurance: bool,
        calls: Mutex<Vec<&'static str>>,
    }

    impl MockCarService {
        fn returning_car_id(car_id: CarId) -> Self {
            Self {
                create_car_id: Some(car_id),
                ..Default::default()
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CarService for MockCarService {
        async fn create_car(
            &self,
            _token: &str,
            _request: &CreateCarRequest,
        ) -> Result<CarId, ApiError> {
            self.record("create_car");
            if self.fail_create {
                return Err(ApiError::Api {
                    status: 500,
                    body: "boom".to_string(),
                });
            }
            self.create_car_id.ok_or(ApiError::MissingCarId)
        }

        async fn upload_registration(
            &self,
            _token: &str,
            _upload: &RegistrationUpload,
        ) -> Result<(), ApiError> {
            self.record("upload_registration");
            if self.registration_conflict {
                return Err(ApiError::Conflict(
                    "Duplicate entry for key 'rc_number'".to_string(),
                ));
            }
            Ok(())
        }

        async fn add_insurance(
            &self,
            _token: &str,
            _upload: &InsuranceUpload,
        ) -> Result<(), ApiError> {
            self.record("add_insurance");
            if self.fail_insurance {
                return Err(ApiError::Api {
                    status: 502,
                    body: "bad gateway".to_string(),
                });
            }
            Ok(())
        }

        async fn add_features(
            &self,
            _token: &str,
            _upload: &FeaturesUpload,
        ) -> Result<(), ApiError> {
            self.record("add_features");
            Ok(())
        }

        async fn add_images(
            &self,
            _token: &str,
            _car_id: CarId,
            _images: &[ImageFile],
        ) -> Result<(), ApiError> {
            self.record("add_images");
            Ok(())
        }

        async fn set_availability(
            &self,
            _token: &str,
            _upload: &AvailabilityUpload,
        ) -> Result<(), ApiError> {
            self.record("set_availability");
            Ok(())
        }
    }

    async fn session_store() -> Arc<SessionStore> {
        let api = Arc::new(CarServiceApi::new(ApiConfig::new("http://127.0.0.1:9")));
        let store = Arc::new(SessionStore::new(api));
        store
            .install_for_tests(
                User {
                    id: 1,
                    first_name: "Asha".to_string(),
                    last_name: "Singh".to_string(),
                    email: "asha@example.com".to_string(),
                    role: Role::Host,
                },
                "test-token",
            )
            .await;
        store
    }

    async fn controller(
        mock: MockCarService,
    ) -> (Arc<MockCarService>, WizardController<MockCarService>) {
        let service = Arc::new(mock);
        let controller = WizardController::new(service.clone(), session_store().await);
        (service, controller)
    }

    fn sample_image(name: &str) -> ImageFile {
        ImageFile::jpeg(name, vec![0xFF, 0xD8, 0xFF])
    }

    fn details_form() -> CarDetailsForm {
        CarDetailsForm {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: "2020".to_string(),
            description: String::new(),
        }
    }

    fn registration_form() -> RegistrationForm {
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

    fn insurance_form() -> InsuranceForm {
        InsuranceForm {
            company: "HDFC ERGO".to_string(),
            valid_till: "2027-01-01".to_string(),
            idv_value: Some(450_000),
            document: Some(sample_image("insurance.jpg")),
        }
    }

    fn features_form() -> FeaturesForm {
        let mut form = FeaturesForm::default();
        form.features.gps = true;
        form.features.bluetooth = true;
        form
    }

    fn images_form() -> ImagesForm {
        let mut form = ImagesForm::new();
        for i in 0..3 {
            form.add_image(sample_image(&format!("{i}.jpg"))).unwrap();
        }
        form
    }

    fn availability_form() -> AvailabilityForm {
        AvailabilityForm {
            price_per_hour: 12.5,
            available_from: "2026-09-01".to_string(),
            available_till: "2026-10-01".to_string(),
        }
    }

    #[tokio::test]
    async fn details_submission_creates_the_car_and_advances() {
        let (service, controller) = controller(MockCarService::returning_car_id(42)).await;

        controller.submit_details(&details_form()).await.unwrap();

        assert_eq!(controller.current_step().await, WizardStep::Registration);
        assert_eq!(controller.car_id().await, Some(42));
        assert_eq!(service.calls(), vec!["create_car"]);

        let data = controller.accumulated_data().await;
        assert_eq!(data.get("make"), Some(&json!("Toyota")));
        assert_eq!(data.get("model"), Some(&json!("Camry")));
        assert_eq!(data.get("year"), Some(&json!("2020")));
        assert_eq!(data.get("description"), Some(&json!("")));
    }

    #[tokio::test]
    async fn missing_car_id_is_a_creation_failure_with_no_partial_state() {
        let (service, controller) = controller(MockCarService::default()).await;

        let err = controller.submit_details(&details_form()).await.unwrap_err();
        assert_matches!(err, StoreError::CreationFailed(_));

        assert_eq!(controller.current_step().await, WizardStep::Details);
        assert_eq!(controller.car_id().await, None);
        assert!(controller.accumulated_data().await.is_empty());
        assert_eq!(service.calls(), vec!["create_car"]);
    }

    #[tokio::test]
    async fn transport_failure_at_creation_keeps_the_session_untouched() {
        let mock = MockCarService {
            fail_create: true,
            ..Default::default()
        };
        let (_, controller) = controller(mock).await;

        let err = controller.submit_details(&details_form()).await.unwrap_err();
        assert_matches!(err, StoreError::Api(_));
        assert_eq!(controller.current_step().await, WizardStep::Details);
        assert_eq!(controller.car_id().await, None);
    }

    #[tokio::test]
    async fn invalid_details_never_reach_the_network() {
        let (service, controller) = controller(MockCarService::returning_car_id(42)).await;

        let mut form = details_form();
        form.year = "20".to_string();
        let err = controller.submit_details(&form).await.unwrap_err();
        assert_matches!(err, StoreError::Validation(_));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn duplicate_registration_is_a_conflict_and_does_not_advance() {
        let mock = MockCarService {
            create_car_id: Some(42),
            registration_conflict: true,
            ..Default::default()
        };
        let (_, controller) = controller(mock).await;
        controller.submit_details(&details_form()).await.unwrap();

        let err = controller
            .submit_registration(&registration_form())
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::DuplicateRegistration(ref n) if n == "DL01AB1234");

        // Session untouched: same step, same car id.
        assert_eq!(controller.current_step().await, WizardStep::Registration);
        assert_eq!(controller.car_id().await, Some(42));
    }

    #[tokio::test]
    async fn full_flow_runs_every_step_in_order_and_completes() {
        let (service, controller) = controller(MockCarService::returning_car_id(7)).await;

        controller.submit_details(&details_form()).await.unwrap();
        controller
            .submit_registration(&registration_form())
            .await
            .unwrap();
        controller.submit_insurance(&insurance_form()).await.unwrap();
        controller.submit_features(&features_form()).await.unwrap();
        controller.submit_images(&images_form()).await.unwrap();
        controller
            .submit_availability(&availability_form())
            .await
            .unwrap();

        assert!(controller.is_completed().await);
        assert_eq!(controller.car_id().await, Some(7));
        assert_eq!(
            service.calls(),
            vec![
                "create_car",
                "upload_registration",
                "add_insurance",
                "add_features",
                "add_images",
                "set_availability",
            ]
        );
    }

    #[tokio::test]
    async fn steps_cannot_be_submitted_out_of_order() {
        let (service, controller) = controller(MockCarService::returning_car_id(7)).await;

        let err = controller
            .submit_insurance(&insurance_form())
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Validation(CoreError::InvalidTransition(_)));
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn back_then_resubmit_overwrites_only_that_steps_keys() {
        let (service, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();
        controller
            .submit_registration(&registration_form())
            .await
            .unwrap();

        assert_eq!(
            controller.back().await.unwrap(),
            Retreat::ToStep(WizardStep::Registration)
        );

        // Pre-filled defaults carry the previously submitted values.
        let defaults = controller.defaults_for(WizardStep::Registration).await;
        assert_eq!(defaults.get("owner_name"), Some(&json!("A. Singh")));
        assert_eq!(defaults.get("rc_number"), Some(&json!("DL01AB1234")));

        let mut edited = registration_form();
        edited.owner_name = "B. Kaur".to_string();
        controller.submit_registration(&edited).await.unwrap();

        let data = controller.accumulated_data().await;
        assert_eq!(data.get("owner_name"), Some(&json!("B. Kaur")));
        assert_eq!(data.get("make"), Some(&json!("Toyota")));
        assert_eq!(service.calls().len(), 3);
    }

    #[tokio::test]
    async fn returning_to_details_does_not_create_a_second_car() {
        let (service, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();

        assert_eq!(
            controller.back().await.unwrap(),
            Retreat::ToStep(WizardStep::Details)
        );

        let mut edited = details_form();
        edited.description = "Low mileage, non-smoker".to_string();
        controller.submit_details(&edited).await.unwrap();

        assert_eq!(controller.car_id().await, Some(7));
        assert_eq!(controller.current_step().await, WizardStep::Registration);
        // Exactly one creation call across both submissions.
        assert_eq!(service.calls(), vec!["create_car"]);
        assert_eq!(
            controller.accumulated_data().await.get("description"),
            Some(&json!("Low mileage, non-smoker"))
        );
    }

    #[tokio::test]
    async fn back_from_the_first_step_exits_the_wizard() {
        let (_, controller) = controller(MockCarService::returning_car_id(7)).await;
        assert_eq!(controller.back().await.unwrap(), Retreat::ExitWizard);
    }

    #[tokio::test]
    async fn navigation_and_submission_are_refused_while_in_flight() {
        let (_, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();

        controller.state.write().await.submitting = true;
        assert_matches!(
            controller.back().await,
            Err(StoreError::SubmissionInFlight)
        );
        assert_matches!(
            controller.submit_registration(&registration_form()).await,
            Err(StoreError::SubmissionInFlight)
        );
        assert!(controller.is_submitting().await);
    }

    #[tokio::test]
    async fn unauthenticated_submission_fails_before_the_network() {
        let api = Arc::new(CarServiceApi::new(ApiConfig::new("http://127.0.0.1:9")));
        let anonymous = Arc::new(SessionStore::new(api));
        let service = Arc::new(MockCarService::returning_car_id(7));
        let controller = WizardController::new(service.clone(), anonymous);

        let err = controller.submit_details(&details_form()).await.unwrap_err();
        assert_matches!(err, StoreError::NotAuthenticated);
        assert!(service.calls().is_empty());
    }

    #[tokio::test]
    async fn too_few_images_never_reach_the_network() {
        let (service, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();
        controller
            .submit_registration(&registration_form())
            .await
            .unwrap();
        controller.submit_insurance(&insurance_form()).await.unwrap();
        controller.submit_features(&features_form()).await.unwrap();

        let mut form = ImagesForm::new();
        form.add_image(sample_image("only.jpg")).unwrap();
        let err = controller.submit_images(&form).await.unwrap_err();
        assert_matches!(err, StoreError::Validation(_));
        assert!(!service.calls().contains(&"add_images"));
    }

    #[tokio::test]
    async fn failed_step_keeps_the_user_on_the_same_step() {
        let mock = MockCarService {
            create_car_id: Some(7),
            fail_insurance: true,
            ..Default::default()
        };
        let (_, controller) = controller(mock).await;
        controller.submit_details(&details_form()).await.unwrap();
        controller
            .submit_registration(&registration_form())
            .await
            .unwrap();

        let err = controller
            .submit_insurance(&insurance_form())
            .await
            .unwrap_err();
        assert_matches!(err, StoreError::Api(_));
        assert_eq!(controller.current_step().await, WizardStep::Insurance);
        assert!(!controller.is_submitting().await);
    }

    #[tokio::test]
    async fn reset_reports_an_abandoned_draft() {
        let (_, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();

        assert_eq!(controller.reset().await, Some(7));
        assert_eq!(controller.current_step().await, WizardStep::Details);
        assert_eq!(controller.car_id().await, None);
    }

    #[tokio::test]
    async fn reset_after_completion_reports_no_draft() {
        let (_, controller) = controller(MockCarService::returning_car_id(7)).await;
        controller.submit_details(&details_form()).await.unwrap();
        controller
            .submit_registration(&registration_form())
            .await
            .unwrap();
        controller.submit_insurance(&insurance_form()).await.unwrap();
        controller.submit_features(&features_form()).await.unwrap();
        controller.submit_images(&images_form()).await.unwrap();
        controller
            .submit_availability(&availability_form())
            .await
            .unwrap();

        assert_eq!(controller.reset().await, None);
    }
}
