/// Marker trait for UI state.
///
/// `Default` lets the owner move the state out with `std::mem::take`
/// while the reducer runs.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
