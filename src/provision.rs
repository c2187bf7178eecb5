//! User provisioning for verified identities.
//!
//! Runs after the identity provider's token has been checked upstream. A user
//! record is created once per distinct email; later calls return the id of the
//! existing record.

use chrono::Utc;
use uuid::Uuid;

use crate::db::Store;
use crate::domain::User;
use crate::error::StoreError;

pub const DEFAULT_PROVIDER: &str = "google";

pub fn ensure_user(
    store: &dyn Store,
    email: &str,
    name: &str,
    provider: &str,
) -> Result<String, StoreError> {
    if let Some(user_id) = store.find_user_id_by_email(email)? {
        return Ok(user_id);
    }

    let user = User {
        id: Uuid::new_v4().to_string(),
        email: email.to_string(),
        name: name.to_string(),
        created_at: Utc::now(),
        provider: provider.to_string(),
    };

    // Conditional insert: a concurrent provisioning call may have won the race
    let user_id = store.put_user_if_absent(&user)?;
    if user_id == user.id {
        tracing::info!("User {} stored successfully", email);
    }
    Ok(user_id)
}
