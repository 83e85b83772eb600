// admintool/src/utils/users.rs
use sqlx::{FromRow, Pool, Postgres};

use crate::errors::Result;

/// The privileged role value this tool grants.
pub const ADMIN_ROLE: &str = "admin";

// The surrounding application verifies passwords with bcrypt at this cost,
// so seeded accounts must match.
const BCRYPT_COST: u32 = 10;

/// One row of the application's `"User"` table, projected down to the
/// fields this tool reads or writes.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i32,
    pub email: String,
    #[sqlx(rename = "firstName")]
    pub first_name: Option<String>,
    #[sqlx(rename = "lastName")]
    pub last_name: Option<String>,
    pub role: String,
    #[sqlx(rename = "isActive")]
    pub is_active: bool,
}

impl UserRecord {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn display_name(&self) -> String {
        let full_name = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        );
        let trimmed = full_name.trim();
        if trimmed.is_empty() {
            "N/A".to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// Fetches the unique row matching `email`, or `None` if no account exists.
pub async fn fetch_user_by_email(
    db_pool: &Pool<Postgres>,
    email: &str,
) -> Result<Option<UserRecord>> {
    let user = sqlx::query_as::<_, UserRecord>(
        r#"SELECT id, email, "firstName", "lastName", role, "isActive" FROM "User" WHERE email = $1"#,
    )
    .bind(email)
    .fetch_optional(db_pool)
    .await?;
    Ok(user)
}

/// Sets role = 'admin' and the active flag on the row matching `email`.
/// Returns the number of rows the UPDATE touched (0 or 1, email is unique).
pub async fn promote_to_admin(db_pool: &Pool<Postgres>, email: &str) -> Result<u64> {
    let result = sqlx::query(r#"UPDATE "User" SET role = $1, "isActive" = true WHERE email = $2"#)
        .bind(ADMIN_ROLE)
        .bind(email)
        .execute(db_pool)
        .await?;
    Ok(result.rows_affected())
}

/// Inserts a brand-new admin account and returns the stored row.
pub async fn insert_admin_user(
    db_pool: &Pool<Postgres>,
    email: &str,
    password_hash: &str,
    first_name: Option<&str>,
    last_name: Option<&str>,
) -> Result<UserRecord> {
    let user = sqlx::query_as::<_, UserRecord>(
        r#"INSERT INTO "User" (email, password, "firstName", "lastName", role, "isActive", "emailVerified")
           VALUES ($1, $2, $3, $4, $5, true, true)
           RETURNING id, email, "firstName", "lastName", role, "isActive""#,
    )
    .bind(email)
    .bind(password_hash)
    .bind(first_name)
    .bind(last_name)
    .bind(ADMIN_ROLE)
    .fetch_one(db_pool)
    .await?;
    Ok(user)
}

pub fn hash_password(plain: &str) -> Result<String> {
    Ok(bcrypt::hash(plain, BCRYPT_COST)?)
}

/// Prints the before/after status block both flows report.
pub fn print_user_summary(heading: &str, user: &UserRecord) {
    println!("\n{}:", heading);
    println!("   ID: {}", user.id);
    println!("   Email: {}", user.email);
    println!("   Name: {}", user.display_name());
    println!("   Role: {}", user.role);
    println!("   Active: {}", if user.is_active { "Yes" } else { "No" });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user(role: &str, is_active: bool) -> UserRecord {
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
    fn test_is_admin_decision() {
        assert!(sample_user("admin", true).is_admin());
        assert!(!sample_user("user", false).is_admin());
        assert!(!sample_user("coach", true).is_admin());
        // Role comparison is exact, "Admin" is some other role.
        assert!(!sample_user("Admin", true).is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_na() {
        assert_eq!(sample_user("user", true).display_name(), "N/A");
    }

    #[test]
    fn test_display_name_single_field_has_no_stray_whitespace() {
        let mut user = sample_user("user", true);
        user.first_name = Some("Clement".to_string());
        assert_eq!(user.display_name(), "Clement");

        user.first_name = None;
        user.last_name = Some("Roy".to_string());
        assert_eq!(user.display_name(), "Roy");
    }

    #[test]
    fn test_display_name_joins_both_fields() {
        let mut user = sample_user("user", true);
        user.first_name = Some("Clement".to_string());
        user.last_name = Some("Roy".to_string());
        assert_eq!(user.display_name(), "Clement Roy");
    }

    #[test]
    fn test_hash_password_round_trips_with_bcrypt() -> anyhow::Result<()> {
        let hash = hash_password("Admin123!")?;
        assert!(hash.starts_with("$2"));
        assert!(bcrypt::verify("Admin123!", &hash)?);
        assert!(!bcrypt::verify("wrong-password", &hash)?);
        Ok(())
    }
}
