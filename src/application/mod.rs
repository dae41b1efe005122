//! Application layer services implementing the client's business logic.
//!
//! Services consume the infrastructure traits and expose a small API to the
//! view layer.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Validation, captcha and the `createURL` mutation
//! - [`services::error_service::ErrorService`] - Error code to display error lookup
//! - [`services::auth_service::AuthService`] - Auth token caching and sign-in links
//! - [`services::qr_code_service::QrCodeService`] - QR codes for short links
//! - [`services::search_service::SearchService`] - Autocomplete over created links
//! - [`services::extension_service::BrowserExtensionService`] - Companion extension probe
//! - [`services::feature_decision_service::FeatureDecisionService`] - Optional UI toggles

pub mod services;
