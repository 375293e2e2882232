/// Request extractors
///
/// `Caller` pulls the asserted identity out of the `x-user-role` and
/// `x-user-id` headers. Extraction is infallible: public routes simply see
/// an empty identity, and protected handlers decide what to do with a
/// missing or unrecognized role (the answer is 403, per the access-control
/// contract).
///
/// `BodyJson` wraps axum's `Json` so that malformed bodies and missing
/// required keys are answered with 400 instead of the default 422.

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use eventdesk_shared::auth::identity::CallerIdentity;
use std::convert::Infallible;

/// Header carrying the asserted role
pub const USER_ROLE_HEADER: &str = "x-user-role";

/// Header carrying the asserted user id
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the caller's asserted identity
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub CallerIdentity);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = parts
            .headers
            .get(USER_ROLE_HEADER)
            .and_then(|v| v.to_str().ok());
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok());

        Ok(Caller(CallerIdentity::from_asserted(role, user_id)))
    }
}

/// JSON body extractor that rejects with 400
///
/// A request body missing a required key fails deserialization; the
/// external contract answers that with 400 Bad Request, not axum's default
/// 422. The deserializer's own message is forwarded so the caller can see
/// which field was missing.
#[derive(Debug, Clone, Copy)]
pub struct BodyJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for BodyJson<T>
where
    axum::Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(BodyJson(value)),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use eventdesk_shared::models::user::UserRole;
    use uuid::Uuid;

    async fn extract(req: Request<()>) -> CallerIdentity {
        let (mut parts, _) = req.into_parts();
        let Caller(identity) = Caller::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        identity
    }

    #[tokio::test]
    async fn test_extracts_role_and_id() {
        let user_id = Uuid::new_v4();
        let req = Request::builder()
            .header(USER_ROLE_HEADER, "organizer")
            .header(USER_ID_HEADER, user_id.to_string())
            .body(())
            .unwrap();

        let identity = extract(req).await;
        assert_eq!(identity.role, Some(UserRole::Organizer));
        assert_eq!(identity.user_id, Some(user_id));
    }

    #[tokio::test]
    async fn test_missing_headers_yield_empty_identity() {
        let identity = extract(Request::builder().body(()).unwrap()).await;
        assert_eq!(identity, CallerIdentity::default());
    }

    #[tokio::test]
    async fn test_body_json_missing_key_maps_to_bad_request() {
        #[derive(Debug, serde::Deserialize)]
        struct Payload {
            #[allow(dead_code)]
            name: String,
        }

        let req = Request::builder()
            .method("POST")
            .header("content-type", "application/json")
            .body(axum::body::Body::from("{}"))
            .unwrap();

        let err = BodyJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_role_is_dropped() {
        let req = Request::builder()
            .header(USER_ROLE_HEADER, "superuser")
            .body(())
            .unwrap();

        let identity = extract(req).await;
        assert_eq!(identity.role, None);
    }
}
