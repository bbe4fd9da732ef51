//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (typing a search term, picking a page)
/// - System events (API responses, debounce timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
