//! The wizard session state machine.
//!
//! A session starts in [`WizardState::AwaitingCreation`] with no car id.
//! The only way out of that state is [`WizardSession::begin_editing`],
//! which records the server-assigned id, so a car id is guaranteed to
//! exist on every step past the first. There is no transition back to
//! `AwaitingCreation`, which makes the create-car call once-per-session
//! by construction.
//!
//! Transitions are pure: the network side effects happen before a
//! transition is requested, and a failed call simply never reaches the
//! session.

use serde_json::{Map, Value};

use crate::error::CoreError;
use crate::types::CarId;
use crate::wizard::step::{definition, WizardStep};

/// Where the session is in its lifecycle, with the car id made
/// unrepresentable until creation has succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Step 0: no car exists yet.
    AwaitingCreation,
    /// Steps 1..=5: the car row exists and is being enriched.
    Editing { car_id: CarId },
    /// The availability step has been submitted; the flow is done.
    Completed { car_id: CarId },
}

/// Result of a retreat request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retreat {
    /// Moved back to the given step.
    ToStep(WizardStep),
    /// Retreated from the first step; the consumer should leave the wizard.
    ExitWizard,
}

/// Aggregate state of one onboarding flow: lifecycle, position, and the
/// union of every submitted step's fields.
#[derive(Debug, Clone)]
pub struct WizardSession {
    state: WizardState,
    current_step: WizardStep,
    data: Map<String, Value>,
}

impl Default for WizardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardSession {
    /// A fresh session at the car-details step with no accumulated data.
    pub fn new() -> Self {
        Self {
            state: WizardState::AwaitingCreation,
            current_step: WizardStep::Details,
            data: Map::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// The server-assigned car id. `None` exactly while awaiting creation.
    pub fn car_id(&self) -> Option<CarId> {
        match self.state {
            WizardState::AwaitingCreation => None,
            WizardState::Editing { car_id } | WizardState::Completed { car_id } => Some(car_id),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, WizardState::Completed { .. })
    }

    /// The accumulated data merged across all submitted steps.
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Record a successful car creation and move to the registration step.
    ///
    /// Only valid from `AwaitingCreation`. Merges the details step's
    /// fields into the accumulated data.
    pub fn begin_editing(
        &mut self,
        car_id: CarId,
        step_data: Map<String, Value>,
    ) -> Result<(), CoreError> {
        if self.state != WizardState::AwaitingCreation {
            return Err(CoreError::InvalidTransition(
                "car has already been created for this session".to_string(),
            ));
        }
        self.merge(step_data);
        self.state = WizardState::Editing { car_id };
        self.current_step = WizardStep::Registration;
        Ok(())
    }

    /// Advance past the current step after its submission succeeded.
    ///
    /// Pure transition: merges the step's fields (overwriting only the
    /// submitted keys) and increments the step, or moves to `Completed`
    /// from the final step. Invalid from step 0 (which must go through
    /// [`begin_editing`](Self::begin_editing)) and after completion.
    pub fn advance(&mut self, step_data: Map<String, Value>) -> Result<(), CoreError> {
        let car_id = match self.state {
            WizardState::Editing { car_id } => car_id,
            WizardState::AwaitingCreation => {
                return Err(CoreError::InvalidTransition(
                    "the details step must create the car before advancing".to_string(),
                ));
            }
            WizardState::Completed { .. } => {
                return Err(CoreError::InvalidTransition(
                    "the wizard has already completed".to_string(),
                ));
            }
        };

        self.merge(step_data);
        match self.current_step.next() {
            Some(next) => self.current_step = next,
            None => self.state = WizardState::Completed { car_id },
        }
        Ok(())
    }

    /// Move back one step, or signal that the consumer should exit the
    /// wizard when already on the first step. Accumulated data is kept so
    /// re-rendered steps can pre-fill.
    pub fn retreat(&mut self) -> Result<Retreat, CoreError> {
        if self.is_completed() {
            return Err(CoreError::InvalidTransition(
                "cannot retreat after completion".to_string(),
            ));
        }
        match self.current_step.prev() {
            Some(prev) => {
                self.current_step = prev;
                Ok(Retreat::ToStep(prev))
            }
            None => Ok(Retreat::ExitWizard),
        }
    }

    /// The subset of accumulated data owned by `step`, for pre-filling
    /// that step's form on re-entry.
    pub fn defaults_for(&self, step: WizardStep) -> Map<String, Value> {
        let mut defaults = Map::new();
        for field in definition(step).fields {
            if let Some(value) = self.data.get(*field) {
                defaults.insert((*field).to_string(), value.clone());
            }
        }
        defaults
    }

    /// Whether `step`'s completeness predicate holds over the accumulated
    /// data.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        (definition(step).is_complete)(&self.data)
    }

    fn merge(&mut self, step_data: Map<String, Value>) {
        for (key, value) in step_data {
            self.data.insert(key, value);
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
