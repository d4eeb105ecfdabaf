use std::env;

/// Fallback port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 3000;

/// # Server Port Resolution
///
/// Reads the listening port from the `PORT` environment variable. A missing
/// or non-integer value falls back to [`DEFAULT_PORT`] rather than failing
/// startup.
pub fn server_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test covering all PORT states; tests run in parallel and the
    // environment is process-wide.
    #[test]
    fn test_server_port_resolution() {
        unsafe {
            std::env::remove_var("PORT");
        }
        assert_eq!(server_port(), DEFAULT_PORT);

        unsafe {
            std::env::set_var("PORT", "8080");
        }
        assert_eq!(server_port(), 8080);

        unsafe {
            std::env::set_var("PORT", "not-a-number");
        }
        assert_eq!(server_port(), DEFAULT_PORT);

        unsafe {
            std::env::set_var("PORT", "-1");
        }
        assert_eq!(server_port(), DEFAULT_PORT);

        unsafe {
            std::env::remove_var("PORT");
        }
    }
}
