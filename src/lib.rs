//! Wallet Verifier Library
//!
//! Proves control of an Ethereum account to a verification server: the
//! wallet provider signs a fixed challenge embedding the account address and
//! the signature is posted, together with the link token, to `/verify`.

pub mod challenge;
pub mod config;
pub mod error;
pub mod provider;
pub mod session;
pub mod verify;
pub mod view;
pub mod widget;

pub use config::Config;
pub use error::{WidgetError, WidgetResult};
pub use session::{Session, SessionState};
pub use verify::{VerificationOutcome, VerifyRequest};
pub use widget::Widget;
