//! # Request Interceptor
//!
//! Attaches `Authorization: Bearer <token>` to outgoing requests, except for the
//! public auth routes and the GraphQL endpoint.

use reqwest::RequestBuilder;

/// Routes that must never carry a bearer token.
pub const PUBLIC_ROUTES: [&str; 3] = ["/api/auth/login", "/api/auth/register", "/api/auth/recovery-password"];

/// Whether a request to `url` should carry the token.
pub fn should_attach_token(url: &str, token: Option<&str>, graphql_url: &str) -> bool {
    let Some(token) = token else {
        return false;
    };
    if token.is_empty() {
        return false;
    }
    if PUBLIC_ROUTES.iter().any(|route| url.contains(route)) {
        return false;
    }
    !url.starts_with(graphql_url)
}

/// Add the bearer header when [`should_attach_token`] allows it.
pub fn authorize(builder: RequestBuilder, url: &str, token: Option<&str>, graphql_url: &str) -> RequestBuilder {
    match token {
        Some(token) if should_attach_token(url, Some(token), graphql_url) => builder.bearer_auth(token),
        _ => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAPHQL: &str = "https://api.test/graphql";

    #[test]
    fn test_token_attached_to_protected_routes() {
        assert!(should_attach_token("https://api.test/api/v1/products", Some("t"), GRAPHQL));
        assert!(should_attach_token("https://api.test/api/auth/me", Some("t"), GRAPHQL));
        assert!(should_attach_token("https://api.test/api/users?page=1", Some("t"), GRAPHQL));
    }

    #[test]
    fn test_public_routes_and_graphql_are_skipped() {
        for route in PUBLIC_ROUTES {
            let url = format!("https://api.test{}", route);
            assert!(!should_attach_token(&url, Some("t"), GRAPHQL), "{}", url);
        }
        assert!(!should_attach_token(GRAPHQL, Some("t"), GRAPHQL));
    }

    #[test]
    fn test_no_token_means_no_header() {
        assert!(!should_attach_token("https://api.test/api/v1/orders", None, GRAPHQL));
        assert!(!should_attach_token("https://api.test/api/v1/orders", Some(""), GRAPHQL));
    }

    #[test]
    fn test_authorize_sets_bearer_header() {
        let client = reqwest::Client::new();
        let url = "https://api.test/api/v1/orders";
        let request = authorize(client.get(url), url, Some("abc"), GRAPHQL).build().unwrap();
        assert_eq!(
            request.headers().get(reqwest::header::AUTHORIZATION).unwrap(),
            "Bearer abc"
        );

        let login = "https://api.test/api/auth/login";
        let request = authorize(client.post(login), login, Some("abc"), GRAPHQL).build().unwrap();
        assert!(request.headers().get(reqwest::header::AUTHORIZATION).is_none());
    }
}
