//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are events the page reacts to: viewport intersections,
/// scroll keys, terminal resizes. Reducers consume them to produce
/// new states.
pub trait Intent: Send + 'static {}
