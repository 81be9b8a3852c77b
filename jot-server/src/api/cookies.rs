use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Opaque session token. HTTP-only so page scripts never see it.
pub const SESSION_COOKIE: &str = "session_id";

/// Client-held guest usage counter for the organize endpoint. Soft
/// limit only: clearing cookies resets it, which is accepted.
pub const GUEST_COOKIE: &str = "guest_organize_count";

pub fn session_cookie(token: &str, ttl_days: i64, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::days(ttl_days))
        .build()
}

pub fn clear_session_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

pub fn guest_cookie(count: u32, window_days: i64) -> Cookie<'static> {
    Cookie::build((GUEST_COOKIE, count.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::days(window_days))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_is_http_only_and_scoped_to_root() {
        let cookie = session_cookie("abc", 7, false);

        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.max_age(), Some(Duration::days(7)));
    }

    #[test]
    fn clear_cookie_expires_immediately() {
        let cookie = clear_session_cookie(true);

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.secure(), Some(true));
    }

    #[test]
    fn guest_cookie_carries_the_count() {
        let cookie = guest_cookie(2, 30);

        assert_eq!(cookie.name(), GUEST_COOKIE);
        assert_eq!(cookie.value(), "2");
        assert_eq!(cookie.max_age(), Some(Duration::days(30)));
    }
}
