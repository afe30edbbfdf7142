use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::gate::decode_and_authorize;
use crate::auth::identity::Identity;
use crate::error::AppError;
use crate::extractors::auth_token::AuthToken;
use crate::state::app_state::AppState;

/// The authenticated caller, decoded from the bearer token.
///
/// Purely token-based: no store lookup happens here. Handlers that need the
/// user row fetch it themselves and treat absence as not-found.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub Identity);

impl CurrentUser {
    pub fn into_inner(self) -> Identity {
        self.0
    }

    pub(crate) fn from_request_sync(req: &HttpRequest) -> Result<Self, AppError> {
        let token = AuthToken::from_req(req)?;

        let state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not available"))?;

        decode_and_authorize(&token.token, &state.security).map(CurrentUser)
    }
}

impl Deref for CurrentUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = Self::from_request_sync(req);
        Box::pin(async move { result })
    }
}
