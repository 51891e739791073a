mod null_backend;

pub use null_backend::{NullBackend, NullChartInstance};

use serde_json::Value;

use crate::error::BindResult;
use crate::host::HostElement;

/// Contract implemented by any charting backend.
///
/// A binding consumes its library through exactly three operations, so the
/// controller logic stays library-agnostic and testable with a fake. One
/// adapter per concrete library; adapters live with their hosts.
pub trait ChartBackend {
    /// Opaque chart handle owned by the binding that created it.
    type Instance;

    /// Constructs a chart against the element using a fully merged configuration.
    fn create(&mut self, element: &dyn HostElement, config: &Value) -> BindResult<Self::Instance>;

    /// Performs the initial draw. Libraries that draw on construction may no-op.
    fn render(&mut self, instance: &mut Self::Instance) -> BindResult<()>;

    /// Re-applies a merged configuration to an existing chart in place.
    fn update_options(&mut self, instance: &mut Self::Instance, config: &Value) -> BindResult<()>;
}
