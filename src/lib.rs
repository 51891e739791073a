//! chart-bind: view bindings between host-framework elements and charting backends.
//!
//! A binding reads chart configuration serialized as JSON attributes on a
//! host-managed element, constructs a chart through a narrow backend trait,
//! and keeps it synchronized across host re-renders. A raw-text fingerprint
//! of the last applied payload short-circuits updates whose payload did not
//! change, so unrelated host re-renders never trigger a backend re-render.

pub mod api;
pub mod backend;
pub mod error;
pub mod host;
pub mod telemetry;

pub use api::{BindingOptions, ChartBinding, UpdateOutcome, UpdatePolicy};
pub use error::{BindError, BindResult};
