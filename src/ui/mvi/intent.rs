/// Marker for anything a reducer accepts: key edits, selector changes,
/// request lifecycle events.
pub trait Intent: Send + 'static {}
