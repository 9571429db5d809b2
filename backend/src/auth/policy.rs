//! Role-based authorization policy.
//!
//! Every operation's access rule is declared once in a single stateless
//! function, so it can be tested in isolation. Token verification happens
//! upstream; a verification failure denies before this policy runs.

use crate::auth::models::Claims;

/// Role name granted unrestricted account management.
pub const ADMIN_ROLE: &str = "admin";

/// The operations gated by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Authenticate with credentials; no prior token exists.
    Login,
    /// Create a new account.
    Register,
    /// List every account.
    ListUsers,
    /// Modify the account with the given id.
    UpdateUser { target_id: i32 },
    /// Remove the account with the given id.
    DeleteUser,
}

/// Decide whether the verified claims permit the requested operation.
pub fn authorize(claims: &Claims, operation: Operation) -> bool {
    match operation {
        Operation::Login => true,
        Operation::Register | Operation::ListUsers | Operation::DeleteUser => {
            claims.role == ADMIN_ROLE
        }
        Operation::UpdateUser { target_id } => {
            claims.user_id == target_id || claims.role == ADMIN_ROLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(user_id: i32, role: &str) -> Claims {
        Claims {
            user_id,
            username: "ana".into(),
            role: role.into(),
            iat: 0,
            exp: i64::MAX,
        }
    }

    #[test]
    fn login_needs_no_role() {
        assert!(authorize(&claims(1, "usuario"), Operation::Login));
    }

    #[test]
    fn admin_operations_require_admin_role() {
        let admin = claims(1, "admin");
        let user = claims(2, "usuario");

        for op in [Operation::Register, Operation::ListUsers, Operation::DeleteUser] {
            assert!(authorize(&admin, op));
            assert!(!authorize(&user, op));
        }
    }

    #[test]
    fn update_allows_self_or_admin() {
        let user = claims(2, "usuario");
        assert!(authorize(&user, Operation::UpdateUser { target_id: 2 }));
        assert!(!authorize(&user, Operation::UpdateUser { target_id: 3 }));

        let admin = claims(1, "admin");
        assert!(authorize(&admin, Operation::UpdateUser { target_id: 3 }));
    }

    #[test]
    fn role_comparison_is_exact() {
        assert!(!authorize(&claims(1, "Admin"), Operation::ListUsers));
        assert!(!authorize(&claims(1, "administrator"), Operation::ListUsers));
    }
}
