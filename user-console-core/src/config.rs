//! Environment configuration

/// Preferred environment variable for the service base address.
pub const ENV_USERS_API_URL: &str = "USERS_API_URL";
/// Legacy variable name, consulted second.
pub const ENV_USERS_API_BASE_URL: &str = "USERS_API_BASE_URL";

/// Read the configured base address from the environment.
///
/// The first variable whose trimmed value is non-empty wins. Returns an empty
/// string when neither is set, which the endpoint resolver maps to the
/// built-in default.
#[must_use]
pub fn base_url_from_env() -> String {
    for key in [ENV_USERS_API_URL, ENV_USERS_API_BASE_URL] {
        if let Ok(value) = std::env::var(key) {
            if !value.trim().is_empty() {
                return value;
            }
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the process environment is shared between test threads.
    #[test]
    fn env_lookup_order() {
        std::env::remove_var(ENV_USERS_API_URL);
        std::env::remove_var(ENV_USERS_API_BASE_URL);
        assert_eq!(base_url_from_env(), "");

        std::env::set_var(ENV_USERS_API_BASE_URL, "http://legacy:8080");
        assert_eq!(base_url_from_env(), "http://legacy:8080");

        std::env::set_var(ENV_USERS_API_URL, "http://primary:8080");
        assert_eq!(base_url_from_env(), "http://primary:8080");

        // Blank values do not win.
        std::env::set_var(ENV_USERS_API_URL, "   ");
        assert_eq!(base_url_from_env(), "http://legacy:8080");

        std::env::remove_var(ENV_USERS_API_URL);
        std::env::remove_var(ENV_USERS_API_BASE_URL);
    }
}
