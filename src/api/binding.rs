use std::time::Instant;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::backend::ChartBackend;
use crate::error::BindResult;
use crate::host::HostElement;

use super::payload::{self, PayloadShape};
use super::theme;

/// How an update call treats a payload identical to the last applied one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdatePolicy {
    /// Skip the backend call when the raw payload text is byte-identical to
    /// the retained fingerprint. Comparison is on the serialized text, not
    /// the parsed structure, so key reordering in the source json defeats
    /// the skip.
    SkipIdenticalPayload,
    /// Re-apply on every update, without comparing.
    AlwaysApply,
}

/// What an update call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Skipped,
    Applied,
}

/// Per-binding setup, fixed at mount time.
///
/// Serializable so host applications can persist binding setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BindingOptions {
    pub shape: PayloadShape,
    pub update_policy: UpdatePolicy,
    /// Template used when the element carries no template attribute.
    #[serde(default)]
    pub fallback_template: Option<Value>,
}

impl BindingOptions {
    /// Series-overlay binding: template plus series attributes, identical
    /// payloads skipped.
    #[must_use]
    pub fn series_overlay() -> Self {
        Self {
            shape: PayloadShape::series(),
            update_policy: UpdatePolicy::SkipIdenticalPayload,
            fallback_template: None,
        }
    }

    /// Full-figure binding: one data attribute, the built-in dark layout as
    /// fallback template, every update re-applied.
    #[must_use]
    pub fn full_figure() -> Self {
        Self {
            shape: PayloadShape::figure(),
            update_policy: UpdatePolicy::AlwaysApply,
            fallback_template: Some(theme::dark_layout_template()),
        }
    }

    #[must_use]
    pub fn with_update_policy(mut self, policy: UpdatePolicy) -> Self {
        self.update_policy = policy;
        self
    }

    #[must_use]
    pub fn with_fallback_template(mut self, template: Value) -> Self {
        self.fallback_template = Some(template);
        self
    }
}

/// Associates one host element with one backend-owned chart instance.
///
/// A value of this type only exists in the mounted state: `mount` constructs
/// the chart synchronously, and dropping the binding releases the instance
/// when the host removes the element. At most one live instance per binding;
/// the retained fingerprint always reflects the payload actually applied to
/// it, never ahead of or behind.
#[derive(Debug)]
pub struct ChartBinding<B: ChartBackend> {
    backend: B,
    instance: B::Instance,
    options: BindingOptions,
    applied_payload: String,
}

impl<B: ChartBackend> ChartBinding<B> {
    /// Handles the host's mount callback: parses the element's template and
    /// payload attributes, merges them, and constructs and renders a chart.
    ///
    /// Parse and backend errors propagate untranslated; on failure no
    /// binding (and no instance) exists.
    pub fn mount(
        mut backend: B,
        element: &dyn HostElement,
        options: BindingOptions,
    ) -> BindResult<Self> {
        let started = Instant::now();
        let raw = payload::extract_raw(element, &options.shape)?;
        let merged = payload::merge_config(
            raw.template,
            raw.payload,
            &options.shape.payload_key,
            options.fallback_template.as_ref(),
        )?;
        let mut instance = backend.create(element, &merged)?;
        backend.render(&mut instance)?;
        let applied_payload = raw.payload.to_owned();
        debug!(
            element = element.id(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "mounted chart binding"
        );
        Ok(Self {
            backend,
            instance,
            options,
            applied_payload,
        })
    }

    /// Handles the host's update callback for the bound element.
    ///
    /// Under `SkipIdenticalPayload`, a payload byte-identical to the retained
    /// fingerprint is a no-op; the host re-renders elements for unrelated
    /// reasons and the skip avoids a redundant backend re-render. Otherwise
    /// the merged configuration is re-applied in place and the fingerprint
    /// advances. The fingerprint changes if and only if an apply happened:
    /// both attribute texts are deserialized before the single backend call,
    /// so a failed update leaves the instance and fingerprint at their last
    /// applied state.
    pub fn update(&mut self, element: &dyn HostElement) -> BindResult<UpdateOutcome> {
        let started = Instant::now();
        let raw = payload::extract_raw(element, &self.options.shape)?;

        if self.options.update_policy == UpdatePolicy::SkipIdenticalPayload
            && raw.payload == self.applied_payload
        {
            trace!(element = element.id(), "chart payload unchanged, skipping");
            return Ok(UpdateOutcome::Skipped);
        }

        let merged = payload::merge_config(
            raw.template,
            raw.payload,
            &self.options.shape.payload_key,
            self.options.fallback_template.as_ref(),
        )?;
        self.backend.update_options(&mut self.instance, &merged)?;
        self.applied_payload = raw.payload.to_owned();
        debug!(
            element = element.id(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "updated chart binding"
        );
        Ok(UpdateOutcome::Applied)
    }

    /// Raw payload text last applied to the instance.
    #[must_use]
    pub fn applied_payload(&self) -> &str {
        &self.applied_payload
    }

    #[must_use]
    pub fn options(&self) -> &BindingOptions {
        &self.options
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    #[must_use]
    pub fn instance(&self) -> &B::Instance {
        &self.instance
    }
}
