//! Shared types used across the codebase

use serde::{Deserialize, Serialize};

/// Intent of a single resource call, as seen by the access policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    List,
    Create,
    Update,
    Delete,
}

/// Role identifier that grants unrestricted access to user writes
pub const ADMIN_ROLE: i64 = 2;
