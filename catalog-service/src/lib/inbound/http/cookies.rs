use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;
use time::Duration;

use crate::config::CookieConfig;
use crate::config::SameSitePolicy;

/// Builds the cookie that transports the session token.
///
/// Every authentication response regenerates the cookie with the same fixed
/// attribute set: HttpOnly keeps it away from client script, Secure restricts
/// it to encrypted transport, and SameSite=None (the reference policy) lets
/// the browser send it on cross-site requests since the cookie-setting domain
/// and the API-consuming origin differ. Pure construction, no failure modes.
#[derive(Debug, Clone)]
pub struct SessionCookieBuilder {
    name: String,
    domain: String,
    same_site: SameSite,
    max_age_seconds: i64,
}

impl SessionCookieBuilder {
    /// Create a builder from configuration.
    ///
    /// # Arguments
    /// * `config` - Cookie name, domain and SameSite policy
    /// * `max_age_seconds` - Session cookie lifetime, equal to the token lifetime
    pub fn new(config: &CookieConfig, max_age_seconds: i64) -> Self {
        let same_site = match config.same_site {
            SameSitePolicy::None => SameSite::None,
            SameSitePolicy::Lax => SameSite::Lax,
            SameSitePolicy::Strict => SameSite::Strict,
        };

        Self {
            name: config.name.clone(),
            domain: config.domain.clone(),
            same_site,
            max_age_seconds,
        }
    }

    /// Name of the session cookie.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Build the cookie carrying a freshly issued token.
    pub fn session_cookie(&self, token: &str) -> Cookie<'static> {
        self.cookie(token.to_string(), Duration::seconds(self.max_age_seconds))
    }

    /// Build the clearing cookie used on logout.
    ///
    /// Empty value and Max-Age=0 make the browser drop the cookie
    /// immediately.
    pub fn clear_cookie(&self) -> Cookie<'static> {
        self.cookie(String::new(), Duration::ZERO)
    }

    fn cookie(&self, value: String, max_age: Duration) -> Cookie<'static> {
        Cookie::build((self.name.clone(), value))
            .http_only(true)
            .secure(true)
            .same_site(self.same_site)
            .domain(self.domain.clone())
            .path("/")
            .max_age(max_age)
            .build()
    }
}
