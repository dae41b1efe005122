//! Business logic services for the application layer.

pub mod auth_service;
pub mod error_service;
pub mod extension_service;
pub mod feature_decision_service;
pub mod qr_code_service;
pub mod search_service;
pub mod url_service;

pub use auth_service::{AuthService, SignInProvider};
pub use error_service::ErrorService;
pub use extension_service::BrowserExtensionService;
pub use feature_decision_service::{FeatureDecisionService, StaticConfigDecisionService};
pub use qr_code_service::{QrCodeError, QrCodeService};
pub use search_service::SearchService;
pub use url_service::UrlService;
