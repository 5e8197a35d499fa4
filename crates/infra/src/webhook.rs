//! Inbound webhook authentication
//!
//! Callers present `Authorization: <scheme> base64(client_id:client_secret)`.
//! Validation matches the decoded pair against a static user set; any
//! malformed header falls through to `None` rather than an error so the
//! caller can answer with a plain 401.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use stockbridge_domain::WebhookUser;
use tracing::debug;

/// Resolve an Authorization header value to a known active user.
pub fn validate_bearer_token<'a>(
    users: &'a [WebhookUser],
    header: &str,
) -> Option<&'a WebhookUser> {
    if header.trim().is_empty() {
        return None;
    }

    // Scheme word first, credential second; anything after is ignored.
    let encoded = header.split_whitespace().nth(1)?;
    let decoded = BASE64.decode(encoded).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    if decoded.trim().is_empty() {
        return None;
    }

    let (client_id, client_secret) = decoded.split_once(':')?;

    let user = users.iter().find(|user| {
        user.active && user.client_id == client_id && user.client_secret == client_secret
    });
    if user.is_none() {
        debug!("webhook credential did not match any active user");
    }
    user
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Vec<WebhookUser> {
        vec![
            WebhookUser {
                user_name: "CartonCloudAPIWebhook".to_string(),
                client_id: "hook-id".to_string(),
                client_secret: "hook-secret".to_string(),
                active: true,
            },
            WebhookUser {
                user_name: "RetiredHook".to_string(),
                client_id: "old-id".to_string(),
                client_secret: "old-secret".to_string(),
                active: false,
            },
        ]
    }

    fn bearer(credential: &str) -> String {
        format!("Bearer {}", BASE64.encode(credential))
    }

    #[test]
    fn matching_credential_resolves_the_user() {
        let users = users();
        let user = validate_bearer_token(&users, &bearer("hook-id:hook-secret"))
            .expect("user resolved");
        assert_eq!(user.user_name, "CartonCloudAPIWebhook");
    }

    #[test]
    fn inactive_users_never_match() {
        let users = users();
        assert!(validate_bearer_token(&users, &bearer("old-id:old-secret")).is_none());
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let users = users();
        assert!(validate_bearer_token(&users, &bearer("hook-id:wrong")).is_none());
    }

    #[test]
    fn malformed_headers_are_rejected_not_errors() {
        let users = users();
        assert!(validate_bearer_token(&users, "").is_none());
        assert!(validate_bearer_token(&users, "   ").is_none());
        assert!(validate_bearer_token(&users, "Bearer").is_none());
        assert!(validate_bearer_token(&users, "Bearer not-base64!!").is_none());
        // Valid base64 but no colon separator.
        let no_colon = format!("Bearer {}", BASE64.encode("justoneword"));
        assert!(validate_bearer_token(&users, &no_colon).is_none());
    }

    #[test]
    fn scheme_word_is_not_inspected() {
        let users = users();
        let basic = format!("Basic {}", BASE64.encode("hook-id:hook-secret"));
        assert!(validate_bearer_token(&users, &basic).is_some());
    }
}
