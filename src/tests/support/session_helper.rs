use actix_session::storage::CookieSessionStore;
use actix_session::SessionMiddleware;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{get, test, web, HttpResponse, Responder};

use crate::modules::auth::adapter::incoming::web::session::SessionContext;
use crate::modules::auth::application::domain::entities::UserId;
use crate::SESSION_COOKIE_NAME;

/// Cookie session middleware with a throwaway key, usable over plain http.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_string())
        .cookie_secure(false)
        .build()
}

/// Signs in as any user id without checking credentials.
#[get("/__test/sign-in/{user_id}")]
pub async fn test_sign_in(path: web::Path<i32>, session: SessionContext) -> impl Responder {
    match session.sign_in(UserId::from(path.into_inner())) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => HttpResponse::InternalServerError().body(e.to_string()),
    }
}

/// Session cookie for `user_id`. The app must mount [`test_sign_in`].
pub async fn session_cookie<S, B>(app: &S, user_id: i32) -> Cookie<'static>
where
    S: Service<actix_http::Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
{
    let req = test::TestRequest::get()
        .uri(&format!("/__test/sign-in/{user_id}"))
        .to_request();
    let resp = test::call_service(app, req).await;
    assert!(
        resp.status().is_success(),
        "test sign-in failed with {}",
        resp.status()
    );

    resp.response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .expect("session cookie set")
        .into_owned()
}
