use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::auth::identity::{require_role, Identity, ADMIN_ROLE};
use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;

/// A caller whose token carries the admin role.
#[derive(Debug, Clone)]
pub struct AdminUser(pub Identity);

impl Deref for AdminUser {
    type Target = Identity;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequest for AdminUser {
    type Error = AppError;
    type Future = std::pin::Pin<Box<dyn std::future::Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = CurrentUser::from_request_sync(req).and_then(|user| {
            require_role(&user, ADMIN_ROLE)?;
            Ok(AdminUser(user.into_inner()))
        });
        Box::pin(async move { result })
    }
}
