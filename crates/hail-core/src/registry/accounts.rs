//! Account operations: authentication, signup, approval, removal.

use tracing::info;

use crate::errors::{RegistryError, RegistryResult};
use crate::models::identity::{Identity, IdentityKind};

use super::Registry;

impl Registry {
    /// Exact-match scan over usernames.
    pub fn username_taken(&self, username: &str) -> bool {
        self.identity(username).is_some()
    }

    /// Exact username and password match. No lockout, no rate limiting;
    /// passwords are compared as plain text (see DESIGN.md).
    pub fn authenticate(&self, username: &str, password: &str) -> RegistryResult<&Identity> {
        self.identity(username)
            .filter(|identity| identity.password == password)
            .ok_or(RegistryError::InvalidCredentials)
    }

    pub fn register_rider(
        &mut self,
        name: &str,
        phone: &str,
        username: &str,
        password: &str,
    ) -> RegistryResult<()> {
        if self.username_taken(username) {
            return Err(RegistryError::UsernameExists(username.to_string()));
        }
        self.insert_identity(Identity::rider(name, phone, username, password));
        self.persist();
        info!(username, "Rider registered");
        Ok(())
    }

    /// The new driver starts unapproved and offline, pending admin
    /// approval.
    pub fn register_driver(
        &mut self,
        name: &str,
        phone: &str,
        vehicle_no: &str,
        username: &str,
        password: &str,
    ) -> RegistryResult<()> {
        if self.username_taken(username) {
            return Err(RegistryError::UsernameExists(username.to_string()));
        }
        self.insert_identity(Identity::driver(name, phone, vehicle_no, username, password));
        self.persist();
        info!(username, vehicle_no, "Driver registered, pending approval");
        Ok(())
    }

    pub fn approve_driver(&mut self, username: &str) -> RegistryResult<()> {
        match self.identity_mut(username) {
            Some(Identity {
                kind: IdentityKind::Driver { approved, .. },
                ..
            }) => {
                *approved = true;
            }
            _ => return Err(RegistryError::DriverNotFound(username.to_string())),
        }
        self.persist();
        info!(username, "Driver approved");
        Ok(())
    }

    /// Removes the identity. Never cascades into rides: historical rides
    /// keep the username and receipt resolution degrades to a
    /// placeholder.
    pub fn remove_user(&mut self, username: &str) -> RegistryResult<()> {
        let slot = *self
            .by_username
            .get(username)
            .ok_or_else(|| RegistryError::UserNotFound(username.to_string()))?;
        self.identities.remove(slot);
        self.reindex_identities();
        self.persist();
        info!(username, "User removed");
        Ok(())
    }

    /// Flips the online flag; requires admin approval first. Returns the
    /// new state.
    pub fn toggle_online(&mut self, username: &str) -> RegistryResult<bool> {
        let now_online;
        match self.identity_mut(username) {
            Some(Identity {
                kind:
                    IdentityKind::Driver {
                        approved, online, ..
                    },
                ..
            }) => {
                if !*approved {
                    return Err(RegistryError::DriverNotApproved(username.to_string()));
                }
                *online = !*online;
                now_online = *online;
            }
            _ => return Err(RegistryError::DriverNotFound(username.to_string())),
        }
        self.persist();
        info!(username, online = now_online, "Driver availability toggled");
        Ok(now_online)
    }
}
