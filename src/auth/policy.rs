use serde::{Deserialize, Serialize};

use super::Claims;
use crate::types::{Action, ADMIN_ROLE};

/// Authenticated actor attached to a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub role_id: i64,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.role_id == ADMIN_ROLE
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            role_id: claims.role_id,
        }
    }
}

/// Decides whether a principal may perform an action on a target record.
/// A request without a principal is never authorized.
pub trait AccessPolicy: Send + Sync {
    fn evaluate(&self, principal: Option<&Principal>, action: Action, target_id: Option<i64>) -> bool;
}

/// User write rule: creation needs the administrator role; update and delete
/// need the administrator role or the principal acting on its own record.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdminOrSelf;

impl AccessPolicy for AdminOrSelf {
    fn evaluate(&self, principal: Option<&Principal>, action: Action, target_id: Option<i64>) -> bool {
        let Some(principal) = principal else {
            return false;
        };

        match action {
            Action::List => true,
            Action::Create => principal.is_admin(),
            Action::Update | Action::Delete => {
                principal.is_admin() || target_id == Some(principal.id)
            }
        }
    }
}
