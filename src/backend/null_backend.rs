use serde_json::Value;

use crate::error::{BindError, BindResult};
use crate::host::HostElement;

use super::ChartBackend;

/// No-op backend used by tests and headless binding usage.
///
/// It still validates that a merged configuration is a JSON object so tests
/// can catch shape bugs before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullBackend {
    pub created_count: usize,
    /// When set, every call fails with `BindError::Backend(reason)`.
    pub reject_reason: Option<String>,
}

/// Chart handle produced by [`NullBackend`], recording every applied config.
#[derive(Debug, Clone)]
pub struct NullChartInstance {
    pub element_id: String,
    pub applied_config: Value,
    pub render_calls: usize,
    pub update_calls: usize,
}

impl NullBackend {
    fn check(&self, config: &Value) -> BindResult<()> {
        if let Some(reason) = &self.reject_reason {
            return Err(BindError::Backend(reason.clone()));
        }
        if !config.is_object() {
            return Err(BindError::Backend(
                "merged configuration must be a json object".to_owned(),
            ));
        }
        Ok(())
    }
}

impl ChartBackend for NullBackend {
    type Instance = NullChartInstance;

    fn create(&mut self, element: &dyn HostElement, config: &Value) -> BindResult<Self::Instance> {
        self.check(config)?;
        self.created_count += 1;
        Ok(NullChartInstance {
            element_id: element.id().to_owned(),
            applied_config: config.clone(),
            render_calls: 0,
            update_calls: 0,
        })
    }

    fn render(&mut self, instance: &mut Self::Instance) -> BindResult<()> {
        if let Some(reason) = &self.reject_reason {
            return Err(BindError::Backend(reason.clone()));
        }
        instance.render_calls += 1;
        Ok(())
    }

    fn update_options(&mut self, instance: &mut Self::Instance, config: &Value) -> BindResult<()> {
        self.check(config)?;
        instance.applied_config = config.clone();
        instance.update_calls += 1;
        Ok(())
    }
}
