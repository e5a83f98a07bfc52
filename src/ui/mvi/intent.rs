/// Marker trait for intents: user gestures or timer events that the
/// reducer turns into a new state.
pub trait Intent: Send + 'static {}
