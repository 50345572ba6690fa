mod bridge;
mod session;

pub use bridge::{TestBridge, WizardSnapshot};
pub use session::{BrowserConfig, BrowserKind, new_session};
