// Read-only portfolio surface: the static content object and its query
// endpoints. Nothing here mutates state.

pub mod data;
pub mod handlers;
