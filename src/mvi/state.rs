//! Base trait for state values.

/// Marker trait for state objects.
///
/// States are plain values: cloned to derive new ones, compared to
/// detect changes, and defaulted to their initial value.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
