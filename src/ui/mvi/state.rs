/// Marker for a renderable state snapshot.
///
/// `PartialEq` lets tests compare whole states; `Default` is the freshly
/// opened form.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
