use crate::error::TtError;
use actix_web::HttpRequest;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tt_reminders_domain::{User, ID};
use tt_reminders_infra::TtContext;

pub const ADMIN_SECRET_HEADER: &str = "tt-reminders-admin-secret";

/// Claims of the user tokens handed out at login
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub id: ID,
    pub email: String,
    pub name: String,
    /// Expiration as a unix timestamp in seconds
    pub exp: usize,
}

fn parse_bearer_token(http_req: &HttpRequest) -> Option<&str> {
    let value = http_req.headers().get("authorization")?.to_str().ok()?;
    value
        .strip_prefix("Bearer ")
        .or_else(|| value.strip_prefix("bearer "))
}

fn decode_user_token(token: &str, secret: &str) -> Result<Claims, TtError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
    .map_err(|e| TtError::Unauthorized(format!("Invalid token provided: {}", e)))
}

/// Finds the `User` the bearer token of the request was issued to
pub async fn protect_route(http_req: &HttpRequest, ctx: &TtContext) -> Result<User, TtError> {
    let token = parse_bearer_token(http_req).ok_or_else(|| {
        TtError::Unauthorized("Missing `Authorization: Bearer <token>` header".into())
    })?;
    let claims = decode_user_token(token, &ctx.config.jwt_secret)?;

    ctx.repos.users.find(&claims.id).await.ok_or_else(|| {
        TtError::Unauthorized(format!("The user with id: {} was not found", claims.id))
    })
}

/// Only lets requests through that carry the admin secret
pub fn protect_admin_route(http_req: &HttpRequest, ctx: &TtContext) -> Result<(), TtError> {
    let secret = http_req
        .headers()
        .get(ADMIN_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());

    match secret {
        Some(secret) if secret == ctx.config.admin_secret => Ok(()),
        Some(_) => Err(TtError::Unauthorized("Invalid admin secret provided".into())),
        None => Err(TtError::Unauthorized(format!(
            "Missing `{}` header",
            ADMIN_SECRET_HEADER
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn token_for(user: &User, secret: &str, exp: usize) -> String {
        let claims = Claims {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    // Far in the future
    const EXP: usize = 4_102_444_800;

    #[actix_web::main]
    #[test]
    async fn it_resolves_the_user_of_a_valid_token() {
        let ctx = TtContext::create_inmemory();
        let user = User::new("Ada".into(), "ada@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();

        let req = TestRequest::default()
            .insert_header((
                "Authorization",
                format!("Bearer {}", token_for(&user, &ctx.config.jwt_secret, EXP)),
            ))
            .to_http_request();
        assert_eq!(protect_route(&req, &ctx).await.unwrap(), user);
    }

    #[actix_web::main]
    #[test]
    async fn it_rejects_bad_tokens() {
        let ctx = TtContext::create_inmemory();
        let user = User::new("Ada".into(), "ada@example.com".into());
        ctx.repos.users.insert(&user).await.unwrap();
        let unknown_user = User::new("Bob".into(), "bob@example.com".into());

        let bad_tokens = vec![
            token_for(&user, "some other secret", EXP),
            token_for(&user, &ctx.config.jwt_secret, 1000),
            token_for(&unknown_user, &ctx.config.jwt_secret, EXP),
            "not-a-token".to_string(),
        ];
        for token in bad_tokens {
            let req = TestRequest::default()
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .to_http_request();
            assert!(matches!(
                protect_route(&req, &ctx).await,
                Err(TtError::Unauthorized(_))
            ));
        }

        let req = TestRequest::default().to_http_request();
        assert!(protect_route(&req, &ctx).await.is_err());
    }

    #[actix_web::main]
    #[test]
    async fn admin_routes_require_the_admin_secret() {
        let ctx = TtContext::create_inmemory();

        let req = TestRequest::default()
            .insert_header((ADMIN_SECRET_HEADER, ctx.config.admin_secret.clone()))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_ok());

        let req = TestRequest::default()
            .insert_header((ADMIN_SECRET_HEADER, "guess"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());

        let req = TestRequest::default().to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());
    }
}
