use std::collections::HashMap;

use serde::Serialize;

use crate::busy::{BusyFlag, BusyGuard};
use crate::results::SeoResult;
use crate::types::{ContentSubType, Feature, SeoRequest};
use crate::{Error, Result};

/// Holds the active tab, its form fields and whatever the last generation
/// produced. Switching tabs resets the form and discards the displayed
/// result and error.
#[derive(Debug, Default)]
pub struct FeatureSelector {
    feature: Feature,
    sub_type: ContentSubType,
    fields: HashMap<String, String>,
    result: Option<SeoResult>,
    error: Option<String>,
    busy: BusyFlag,
    epoch: u64,
}

/// Proof that a generation was started. Holding it keeps the selector busy.
#[derive(Debug)]
pub struct Ticket {
    epoch: u64,
    feature: Feature,
    _guard: BusyGuard,
}

impl Ticket {
    pub fn feature(&self) -> Feature {
        self.feature
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectorSnapshot {
    pub feature: Feature,
    pub sub_type: ContentSubType,
    pub fields: HashMap<String, String>,
    pub result: Option<SeoResult>,
    pub error: Option<String>,
    pub busy: bool,
}

impl FeatureSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feature(&self) -> Feature {
        self.feature
    }

    pub fn sub_type(&self) -> ContentSubType {
        self.sub_type
    }

    pub fn result(&self) -> Option<&SeoResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }

    pub fn select(&mut self, feature: Feature) {
        self.feature = feature;
        self.sub_type = ContentSubType::default();
        self.fields.clear();
        self.result = None;
        self.error = None;
        self.epoch += 1;
    }

    pub fn set_sub_type(&mut self, sub_type: ContentSubType) {
        self.sub_type = sub_type;
    }

    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn set_fields(&mut self, fields: HashMap<String, String>) {
        self.fields.extend(fields);
    }

    /// Validates the current fields for the active tab. A blank field is
    /// recorded as the displayed error.
    pub fn request(&mut self) -> Result<SeoRequest> {
        match SeoRequest::from_fields(self.feature, self.sub_type, &self.fields) {
            Ok(request) => Ok(request),
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn begin(&mut self) -> Result<Ticket> {
        let guard = self.busy.try_acquire().ok_or(Error::Busy)?;
        Ok(Ticket {
            epoch: self.epoch,
            feature: self.feature,
            _guard: guard,
        })
    }

    /// Stores a finished result unless the tab changed since `begin`.
    /// Returns whether the result was kept.
    pub fn complete(&mut self, ticket: Ticket, result: SeoResult) -> bool {
        if ticket.epoch != self.epoch {
            tracing::debug!(feature = %ticket.feature, "discarding result for a tab that is no longer active");
            return false;
        }
        self.error = None;
        self.result = Some(result);
        true
    }

    pub fn fail(&mut self, ticket: Ticket, message: impl Into<String>) -> bool {
        if ticket.epoch != self.epoch {
            return false;
        }
        self.result = None;
        self.error = Some(message.into());
        true
    }

    pub fn snapshot(&self) -> SelectorSnapshot {
        SelectorSnapshot {
            feature: self.feature,
            sub_type: self.sub_type,
            fields: self.fields.clone(),
            result: self.result.clone(),
            error: self.error.clone(),
            busy: self.busy.is_busy(),
        }
    }
}
