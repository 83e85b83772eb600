// admintool/src/restore/verification.rs
use sqlx::{Pool, Postgres};

use crate::errors::{AppError, Result};
use crate::utils::users::{fetch_user_by_email, UserRecord};

/// Re-reads the account after a promotion and confirms the stored row says
/// role = 'admin' and active = true. The UPDATE's row count alone is not
/// treated as proof that the right values landed.
pub async fn verify_admin_state(
    db_pool: &Pool<Postgres>,
    email: &str,
) -> Result<UserRecord> {
    let user = fetch_user_by_email(db_pool, email)
        .await?
        .ok_or_else(|| {
            AppError::Verification(format!("user {} disappeared after the update", email))
        })?;

    check_admin_state(&user)?;
    Ok(user)
}

fn check_admin_state(user: &UserRecord) -> Result<()> {
    if !user.is_admin() || !user.is_active {
        return Err(AppError::Verification(format!(
            "re-read of {} returned role '{}', active {} (expected role 'admin', active true)",
            user.email, user.role, user.is_active
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored_user(role: &str, is_active: bool) -> UserRecord {
        UserRecord {
            id: 7,
            email: "x@y.z".to_string(),
            first_name: None,
            last_name: None,
            role: role.to_string(),
            is_active,
        }
    }

    #[test]
    fn test_check_admin_state_accepts_promoted_row() {
        assert!(check_admin_state(&stored_user("admin", true)).is_ok());
    }

    #[test]
    fn test_check_admin_state_rejects_everything_else() {
        assert!(check_admin_state(&stored_user("admin", false)).is_err());
        assert!(check_admin_state(&stored_user("user", true)).is_err());
        assert!(check_admin_state(&stored_user("user", false)).is_err());
    }
}
