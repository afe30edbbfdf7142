//! DTOs for todos_sea adapter.

/// Mutable task fields, shared by create and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoFields {
    pub title: String,
    pub description: String,
    pub priority: i32,
    pub complete: bool,
}
