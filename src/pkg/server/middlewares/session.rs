use std::sync::Arc;

use axum::{
    extract::Request,
    http::{header::SET_COOKIE, HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "_Host_session";
const MAX_SESSION_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct Session {
    pub session_id: String,
}

fn well_formed(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_SESSION_LEN
        && id.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Attaches the caller's seeker session, issuing a fresh one when the
/// cookie is missing or malformed.
pub async fn establish(headers: HeaderMap, mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(&headers);
    let existing = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| well_formed(id));
    let issued = existing.is_none();
    let session_id = existing.unwrap_or_else(|| Uuid::new_v4().to_string());
    if issued {
        tracing::debug!("no session cookie, issued {}", &session_id);
    }
    request.extensions_mut().insert(Arc::new(Session {
        session_id: session_id.clone(),
    }));

    let mut response = next.run(request).await;
    if issued {
        match HeaderValue::from_str(&format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, session_id
        )) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(e) => tracing::warn!("could not set session cookie: {}", e),
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_session_ids() {
        assert!(well_formed(&Uuid::new_v4().to_string()));
        assert!(well_formed("abc123"));
        assert!(!well_formed(""));
        assert!(!well_formed("a;b"));
        assert!(!well_formed(&"x".repeat(MAX_SESSION_LEN + 1)));
    }
}
