//! Session context - the authenticated user, established once at startup
//! and passed explicitly into the app state instead of living in a global.

use crate::models::User;

/// Read-only session handed to the app at startup. Dropped (together with
/// all screen state) when the user logs out or quits.
#[derive(Clone, Debug)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Session { user }
    }

    pub fn user(&self) -> &User {
        &self.user
    }
}
