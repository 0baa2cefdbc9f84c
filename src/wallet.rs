//! Cosmetic wallet session
//!
//! "Wallet mode" shown beside the game is display-only: the balance is a
//! fixed display value, not a ledger, and nothing in [`crate::sim`] reads
//! any of this. The session object is passed explicitly to whatever UI
//! wants wallet status; there is no module-level connection state.

use log::warn;
use thiserror::Error;

/// Balance string shown while connected. Display value only.
pub const DISPLAY_BALANCE: &str = "100.0000000 XLM";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("wallet provider is not installed")]
    NotInstalled,
    #[error("user denied the connection request")]
    Denied,
}

/// Host-side wallet extension (browser extension, test double, ...)
pub trait WalletProvider {
    fn installed(&self) -> bool;
    /// Ask the provider for account access; returns the account address
    fn request_access(&mut self) -> Result<String, WalletError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WalletStatus {
    #[default]
    Disconnected,
    Connected {
        address: String,
    },
}

/// Connection state for one UI session
#[derive(Debug, Clone, Default)]
pub struct WalletSession {
    status: WalletStatus,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &WalletStatus {
        &self.status
    }

    pub fn is_connected(&self) -> bool {
        matches!(self.status, WalletStatus::Connected { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match &self.status {
            WalletStatus::Connected { address } => Some(address),
            WalletStatus::Disconnected => None,
        }
    }

    /// Balance string for the wallet badge; `None` while disconnected
    pub fn display_balance(&self) -> Option<&'static str> {
        self.is_connected().then_some(DISPLAY_BALANCE)
    }

    /// Connect through the provider. On any failure the session stays
    /// disconnected.
    pub fn connect(&mut self, provider: &mut dyn WalletProvider) -> Result<(), WalletError> {
        if !provider.installed() {
            warn!("wallet provider not installed");
            return Err(WalletError::NotInstalled);
        }
        let address = provider.request_access()?;
        self.status = WalletStatus::Connected { address };
        Ok(())
    }

    /// Disconnect is idempotent
    pub fn disconnect(&mut self) {
        self.status = WalletStatus::Disconnected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakeProvider {
        installed: bool,
        grants: bool,
    }

    impl WalletProvider for FakeProvider {
        fn installed(&self) -> bool {
            self.installed
        }

        fn request_access(&mut self) -> Result<String, WalletError> {
            if self.grants {
                Ok("GDEMOADDRESS".to_string())
            } else {
                Err(WalletError::Denied)
            }
        }
    }

    #[test]
    fn test_connect_happy_path() {
        let mut session = WalletSession::new();
        let mut provider = FakeProvider {
            installed: true,
            grants: true,
        };

        assert!(session.connect(&mut provider).is_ok());
        assert!(session.is_connected());
        assert_eq!(session.address(), Some("GDEMOADDRESS"));
        assert_eq!(session.display_balance(), Some(DISPLAY_BALANCE));
    }

    #[test]
    fn test_denied_leaves_session_disconnected() {
        let mut session = WalletSession::new();
        let mut provider = FakeProvider {
            installed: true,
            grants: false,
        };

        assert_eq!(session.connect(&mut provider), Err(WalletError::Denied));
        assert!(!session.is_connected());
        assert_eq!(session.display_balance(), None);
    }

    #[test]
    fn test_missing_provider() {
        let mut session = WalletSession::new();
        let mut provider = FakeProvider {
            installed: false,
            grants: true,
        };

        assert_eq!(
            session.connect(&mut provider),
            Err(WalletError::NotInstalled)
        );
        assert!(!session.is_connected());
    }

    #[test]
    fn test_disconnect_is_idempotent() {
        let mut session = WalletSession::new();
        let mut provider = FakeProvider {
            installed: true,
            grants: true,
        };
        session.connect(&mut provider).expect("connects");

        session.disconnect();
        session.disconnect();
        assert_eq!(session.status(), &WalletStatus::Disconnected);
    }
}
