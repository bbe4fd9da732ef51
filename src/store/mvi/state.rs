//! Base trait for store state in MVI architecture.

/// Marker trait for state held by a [`Store`](crate::store::Store).
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}
