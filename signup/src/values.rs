//! Form value snapshots.

use serde::{Deserialize, Serialize};

/// Snapshot of the three registration fields at a point in time.
///
/// Serializes with the wire spelling the presentation layer uses for field
/// names (`passwordConfirmation`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Email address as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Password confirmation as typed.
    pub password_confirmation: String,
}
