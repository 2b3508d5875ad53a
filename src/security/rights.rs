//! Named-right decisions per caller.

use std::collections::{HashMap, HashSet};

use crate::config::schema::AuthConfig;
use crate::security::identity::CallerIdentity;

/// Boolean "has right" decisions per identity and right name.
///
/// The feed handlers depend on this trait rather than on the concrete
/// store, so tests can substitute their own deciders.
pub trait RightsChecker: Send + Sync {
    /// Does `caller` hold the named right?
    fn user_has_right(&self, caller: &CallerIdentity, right: &str) -> bool;
}

/// Config-backed rights store.
///
/// Registered principals are matched by bearer token; their rights are
/// keyed by principal name. Anonymous callers share one rights set.
pub struct TokenRights {
    anonymous_rights: HashSet<String>,
    names_by_token: HashMap<String, String>,
    rights_by_name: HashMap<String, HashSet<String>>,
}

impl TokenRights {
    /// Build the store from the auth section of the config.
    pub fn from_config(auth: &AuthConfig) -> Self {
        let mut names_by_token = HashMap::new();
        let mut rights_by_name = HashMap::new();

        for principal in &auth.principals {
            names_by_token.insert(principal.token.clone(), principal.name.clone());
            rights_by_name.insert(
                principal.name.clone(),
                principal.rights.iter().cloned().collect(),
            );
        }

        Self {
            anonymous_rights: auth.anonymous_rights.iter().cloned().collect(),
            names_by_token,
            rights_by_name,
        }
    }

    /// Resolve a presented bearer token to a registered identity.
    pub fn identity_for_token(&self, token: &str) -> Option<CallerIdentity> {
        self.names_by_token
            .get(token)
            .map(|name| CallerIdentity::registered(name.clone()))
    }
}

impl RightsChecker for TokenRights {
    fn user_has_right(&self, caller: &CallerIdentity, right: &str) -> bool {
        if caller.registered {
            self.rights_by_name
                .get(&caller.name)
                .is_some_and(|rights| rights.contains(right))
        } else {
            self.anonymous_rights.contains(right)
        }
    }
}
