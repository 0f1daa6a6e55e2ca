// Library for testable modules
pub mod auth;
pub mod banner;
pub mod config;
pub mod data;
pub mod logging;
pub mod state;
pub mod status_symbols;
pub mod validation;

// Re-export main types used in tests and benches
pub use auth::{AuthState, View};
pub use banner::BannerTimer;
pub use config::{Config, Theme};
pub use data::{Directory, User};
pub use state::{Field, FieldError, FormErrors, LoginForm, RegisterForm};
pub use validation::{check_password_strength, is_valid_email, Strength};
