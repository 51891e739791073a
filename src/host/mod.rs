//! Inbound seam toward the host UI framework.
//!
//! The host owns element lifecycle and re-rendering; this crate only reads
//! serialized configuration off an element's attributes. Keeping the element
//! behind a trait lets the controller run against real host elements or the
//! in-memory stand-in used by tests and headless hosts.

mod memory_element;

pub use memory_element::MemoryElement;

/// A host-managed element carrying chart configuration as attribute text.
///
/// Implementations are expected to be cheap to query; the controller reads at
/// most two attributes per lifecycle callback.
pub trait HostElement {
    /// Stable identifier for the element, used only for logging.
    fn id(&self) -> &str;

    /// Raw attribute text, if the attribute is present.
    fn attribute(&self, name: &str) -> Option<&str>;
}
