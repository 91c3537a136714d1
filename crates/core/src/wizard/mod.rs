//! The six-step add-car onboarding wizard.
//!
//! Step 0 creates the car resource remotely and yields its id; every later
//! step attaches one category of data to that id. [`session::WizardSession`]
//! is the pure state machine; [`forms`] holds the per-step field state and
//! validation; the network side effects live in `ziptrip-store`'s wizard
//! controller.

pub mod forms;
pub mod image;
pub mod session;
pub mod step;

pub use forms::{
    AvailabilityForm, CarDetailsForm, FeaturesForm, HandType, ImagesForm, InsuranceForm,
    RegistrationForm, RegistrationType,
};
pub use image::ImageFile;
pub use session::{Retreat, WizardSession, WizardState};
pub use step::{StepDefinition, WizardStep, STEP_COUNT};
