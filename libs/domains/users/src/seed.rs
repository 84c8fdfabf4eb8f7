//! First-boot seeding of the default administrator account.

use crate::models::CreateUser;
use crate::profile;
use crate::repository::UserRepository;
use crate::service::UserService;

/// Well-known administrator account for first-run environments.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@example.com";
const DEFAULT_ADMIN_NAME: &str = "Administrator";
const DEFAULT_ADMIN_PASSWORD: &str = "admin123";
const DEFAULT_ADMIN_AGE: i32 = 30;

/// Ensure an administrator account exists, creating it if absent.
///
/// Runs once at startup, before the server accepts requests. Best-effort:
/// failures are logged and never abort startup. The check-then-create pair
/// is not transactional, so two processes booting an empty store at the
/// same instant could both seed; the unique email index makes the loser
/// fail harmlessly.
pub async fn ensure_default_admin<R: UserRepository>(service: &UserService<R>) {
    match service.find_by_email(DEFAULT_ADMIN_EMAIL).await {
        Ok(Some(_)) => {
            tracing::debug!("Default admin account already present");
        }
        Ok(None) => {
            let input = CreateUser {
                name: DEFAULT_ADMIN_NAME.to_string(),
                email: DEFAULT_ADMIN_EMAIL.to_string(),
                password: DEFAULT_ADMIN_PASSWORD.to_string(),
                age: DEFAULT_ADMIN_AGE,
                profile_code: profile::ADMIN_PROFILE_CODE.to_string(),
            };

            match service.create_user(input).await {
                Ok(user) => {
                    tracing::info!(user_id = %user.id, email = %user.email, "Seeded default admin account");
                }
                Err(e) => {
                    tracing::warn!("Failed to seed default admin account: {}", e);
                }
            }
        }
        Err(e) => {
            tracing::warn!("Could not check for default admin account: {}", e);
        }
    }
}
