//! Accounts
//!
//! Guests and managers share one type; the role is a flag.

use super::Reservation;

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Guest,
    Manager,
}

impl Role {
    /// Map the on-disk `isManager` flag to a role
    pub fn from_manager_flag(is_manager: bool) -> Self {
        if is_manager {
            Role::Manager
        } else {
            Role::Guest
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Guest => "guest",
            Role::Manager => "manager",
        }
    }
}

/// A user account and the reservations it owns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    name: String,
    username: String,
    /// Stored and compared in plain text
    password: String,
    role: Role,
    /// Load-order hint; `None` for accounts created at runtime
    index: Option<usize>,
    reservations: Vec<Reservation>,
}

impl Account {
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            role,
            index: None,
            reservations: Vec::new(),
        }
    }

    pub fn guest(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(name, username, password, Role::Guest)
    }

    pub fn manager(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::new(name, username, password, Role::Manager)
    }

    /// Attach a load-order index
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Append a reservation. No duplicate or overlap check.
    pub fn add_reservation(&mut self, mut reservation: Reservation) -> &Reservation {
        // The owning account is the back-reference, whatever the caller passed.
        reservation.rebind(&self.username);
        self.reservations.push(reservation);
        &self.reservations[self.reservations.len() - 1]
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }
}
