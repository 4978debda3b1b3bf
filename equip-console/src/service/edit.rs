//! edit workflow

use std::borrow::Cow;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use equip_common::{compose_quantity, magnitude_of, sanitize_magnitude};
use equip_common::{Asset, AssetUpdateCmd, EventHub};
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::{Validate, ValidateArgs, ValidationError};

use crate::service::classify::classify;
use crate::service::notify::Notification;
use crate::service::store::AssetStore;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
const SAVE_OK_MSG: &str = "Asset updated successfully.";

/// Working copy of one asset's editable fields. The magnitude is tracked
/// apart from the composed `suggested_quantity` string.
#[derive(Debug, Clone, Default, Validate)]
#[validate(context = DraftContext)]
pub struct AssetDraft {
    pub function: String,
    pub location: String,
    pub criticality: String,
    #[validate(custom(function = validate_magnitude, use_context))]
    pub magnitude: String,
    pub suggested_quantity: String,
    #[validate(custom(function = validate_egress, use_context))]
    pub egress_date: String,
    pub oil_analysis: bool,
    pub observations: String,
}

/// Per-asset facts the field rules depend on.
#[derive(Debug, Clone)]
pub struct DraftContext {
    pub capacity: f64,
    pub admission_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

fn validate_magnitude(value: &str, ctx: &DraftContext) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let magnitude = match value.parse::<f64>() {
        Ok(v) if v > 0.0 => v,
        _ => {
            return Err(ValidationError::new("magnitude")
                .with_message(Cow::Borrowed("Must be a number greater than 0")))
        }
    };
    if ctx.capacity > 0.0 && magnitude > ctx.capacity {
        return Err(ValidationError::new("magnitude").with_message(Cow::Owned(format!(
            "Must be less than or equal to capacity ({})",
            ctx.capacity
        ))));
    }
    Ok(())
}

fn validate_egress(value: &str, ctx: &DraftContext) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    let date = match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(d) => d,
        Err(_) => {
            return Err(ValidationError::new("egress_date").with_message(Cow::Borrowed("Invalid date")))
        }
    };
    if date <= ctx.today {
        return Err(
            ValidationError::new("egress_date").with_message(Cow::Borrowed("Must be a future date"))
        );
    }
    if let Some(admission) = ctx.admission_date {
        if date <= admission {
            return Err(ValidationError::new("egress_date").with_message(Cow::Owned(format!(
                "Must be after admission date ({})",
                admission.format(DATE_FORMAT)
            ))));
        }
    }
    Ok(())
}

fn field_error(result: Result<(), ValidationError>) -> Option<String> {
    result.err().map(|e| {
        e.message
            .map(|m| m.to_string())
            .unwrap_or_else(|| e.code.to_string())
    })
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Touched {
    pub magnitude: bool,
    pub egress_date: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub magnitude: Option<String>,
    pub egress_date: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.magnitude.is_none() && self.egress_date.is_none()
    }
}

/// One open edit over a deep copy of an asset's editable subset. Field
/// errors only become visible once their field is touched.
#[derive(Debug, Clone)]
pub struct EditSession {
    token: Uuid,
    asset_id: i64,
    measure_unit: String,
    context: DraftContext,
    draft: AssetDraft,
    touched: Touched,
    errors: FieldErrors,
}

impl EditSession {
    pub fn new(asset: &Asset, today: NaiveDate) -> Self {
        let draft = AssetDraft {
            function: asset.function.clone(),
            location: asset.location.clone(),
            criticality: asset.criticality.clone(),
            magnitude: magnitude_of(&asset.suggested_quantity),
            suggested_quantity: asset.suggested_quantity.clone(),
            egress_date: asset
                .egress_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            oil_analysis: asset.oil_analysis,
            observations: asset.observations.clone().unwrap_or_default(),
        };
        Self {
            token: Uuid::new_v4(),
            asset_id: asset.id,
            measure_unit: asset.measure_unit.clone(),
            context: DraftContext {
                capacity: asset.capacity,
                admission_date: asset.admission_date,
                today,
            },
            draft,
            touched: Touched::default(),
            errors: FieldErrors::default(),
        }
    }

    pub fn token(&self) -> Uuid {
        self.token
    }

    pub fn asset_id(&self) -> i64 {
        self.asset_id
    }

    pub fn draft(&self) -> &AssetDraft {
        &self.draft
    }

    pub fn set_function(&mut self, value: impl Into<String>) {
        self.draft.function = value.into();
    }

    pub fn set_location(&mut self, value: impl Into<String>) {
        self.draft.location = value.into();
    }

    pub fn set_criticality(&mut self, value: impl Into<String>) {
        self.draft.criticality = value.into();
    }

    pub fn set_observations(&mut self, value: impl Into<String>) {
        self.draft.observations = value.into();
    }

    pub fn set_oil_analysis(&mut self, value: bool) {
        self.draft.oil_analysis = value;
    }

    /// Sanitizes the input to digits and recomposes the quantity string.
    pub fn set_magnitude(&mut self, input: &str) {
        self.draft.magnitude = sanitize_magnitude(input);
        self.draft.suggested_quantity =
            compose_quantity(&self.draft.magnitude, &self.measure_unit);
    }

    pub fn set_egress_date(&mut self, input: &str) {
        self.draft.egress_date = input.trim().to_string();
    }

    pub fn blur_magnitude(&mut self) {
        self.touched.magnitude = true;
        self.errors.magnitude = field_error(validate_magnitude(&self.draft.magnitude, &self.context));
    }

    pub fn blur_egress_date(&mut self) {
        self.touched.egress_date = true;
        self.errors.egress_date = field_error(validate_egress(&self.draft.egress_date, &self.context));
    }

    /// Field errors gated by the touched flags.
    pub fn visible_errors(&self) -> FieldErrors {
        FieldErrors {
            magnitude: self
                .touched
                .magnitude
                .then(|| self.errors.magnitude.clone())
                .flatten(),
            egress_date: self
                .touched
                .egress_date
                .then(|| self.errors.egress_date.clone())
                .flatten(),
        }
    }

    /// Forces every field touched, refreshes field errors, and runs the
    /// whole-form validation. Save proceeds only when this returns true.
    pub fn validate_all(&mut self) -> bool {
        self.touched.magnitude = true;
        self.touched.egress_date = true;
        self.errors.magnitude = field_error(validate_magnitude(&self.draft.magnitude, &self.context));
        self.errors.egress_date = field_error(validate_egress(&self.draft.egress_date, &self.context));
        self.draft.validate_with_args(&self.context).is_ok()
    }

    /// One day after the later of today and the admission date. Constrains a
    /// date picker's interactive minimum; validation stays authoritative.
    pub fn min_egress_date(&self) -> NaiveDate {
        let base = match self.context.admission_date {
            Some(a) if a > self.context.today => a,
            _ => self.context.today,
        };
        base.succ_opt().unwrap_or(base)
    }

    fn build_cmd(&self) -> AssetUpdateCmd {
        AssetUpdateCmd {
            id: self.asset_id,
            function: self.draft.function.clone(),
            location: self.draft.location.clone(),
            criticality: self.draft.criticality.clone(),
            suggested_quantity: self.draft.suggested_quantity.clone(),
            egress_date: NaiveDate::parse_from_str(&self.draft.egress_date, DATE_FORMAT).ok(),
            oil_analysis: self.draft.oil_analysis,
            observations: if self.draft.observations.is_empty() {
                None
            } else {
                Some(self.draft.observations.clone())
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// No draft open; nothing to save.
    NotOpen,
    /// Validation failed; the dialog stays open with field errors visible.
    Invalid,
    /// Saved and reloaded; the dialog is closed.
    Saved(Notification),
    /// The remote call failed; the dialog stays open with the draft intact.
    Failed(Notification),
}

/// Owns at most one edit session at a time and commits it through the
/// store. A session token makes completions of superseded sessions inert.
#[derive(Clone)]
pub struct EditWorkflow {
    store: AssetStore,
    notifier: EventHub<Notification>,
    session: Arc<RwLock<Option<EditSession>>>,
}

impl EditWorkflow {
    pub fn new(store: AssetStore) -> Self {
        Self {
            store,
            notifier: EventHub::default(),
            session: Arc::new(RwLock::new(None)),
        }
    }

    pub fn subscribe_notifications(&self) -> tokio::sync::broadcast::Receiver<Notification> {
        self.notifier.subscribe()
    }

    /// Opens an edit over `asset`. An already-open draft is replaced.
    pub async fn open_edit(&self, asset: &Asset) {
        let session = EditSession::new(asset, Local::now().date_naive());
        *self.session.write().await = Some(session);
    }

    pub async fn close(&self) {
        *self.session.write().await = None;
    }

    pub async fn is_open(&self) -> bool {
        self.session.read().await.is_some()
    }

    pub async fn session(&self) -> Option<EditSession> {
        self.session.read().await.clone()
    }

    /// Applies `f` to the open session, if any.
    pub async fn with_session(&self, f: impl FnOnce(&mut EditSession)) {
        if let Some(session) = self.session.write().await.as_mut() {
            f(session);
        }
    }

    pub async fn save(&self) -> SaveOutcome {
        // step1. validate before any network call
        let (token, cmd) = {
            let mut guard = self.session.write().await;
            let Some(session) = guard.as_mut() else {
                return SaveOutcome::NotOpen;
            };
            if !session.validate_all() {
                return SaveOutcome::Invalid;
            }
            (session.token(), session.build_cmd())
        };
        // step2. update then reload, strictly in that order
        match self.store.update(cmd).await {
            Ok(()) => {
                let mut guard = self.session.write().await;
                // only the session that started this save may be closed by it
                if guard.as_ref().map(|s| s.token()) == Some(token) {
                    *guard = None;
                }
                drop(guard);
                let notification = Notification::success(SAVE_OK_MSG);
                self.notifier.publish(notification.clone());
                SaveOutcome::Saved(notification)
            }
            Err(e) => {
                tracing::error!("save asset failed: {:?}", e);
                let notification = Notification::error(classify(&e));
                self.notifier.publish(notification.clone());
                SaveOutcome::Failed(notification)
            }
        }
    }
}
