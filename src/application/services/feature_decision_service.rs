//! Feature toggles for optional parts of the front end.

use crate::application::services::SignInProvider;

/// Decides which optional controls are offered to the user.
pub trait FeatureDecisionService: Send + Sync {
    fn include_search_bar(&self) -> bool;
    fn include_github_sign_button(&self) -> bool;
    fn include_google_sign_button(&self) -> bool;
    fn include_facebook_sign_button(&self) -> bool;

    /// Sign-in providers enabled by the decisions above.
    fn sign_in_providers(&self) -> Vec<SignInProvider> {
        SignInProvider::ALL
            .into_iter()
            .filter(|provider| match provider {
                SignInProvider::Github => self.include_github_sign_button(),
                SignInProvider::Google => self.include_google_sign_button(),
                SignInProvider::Facebook => self.include_facebook_sign_button(),
            })
            .collect()
    }
}

/// Decisions fixed at build time.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticConfigDecisionService;

impl FeatureDecisionService for StaticConfigDecisionService {
    fn include_search_bar(&self) -> bool {
        true
    }

    fn include_github_sign_button(&self) -> bool {
        false
    }

    fn include_google_sign_button(&self) -> bool {
        true
    }

    fn include_facebook_sign_button(&self) -> bool {
        true
    }
}
