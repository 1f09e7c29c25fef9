use dioxus_logger::tracing;

use crate::{
    api::{ApiGateway, Navigator, RequestOptions, Transport},
    error::AuthError,
    model::session::{LoginDto, LoginResponseDto, Session},
    session::KeyValueStorage,
};

pub const LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const LOGOUT_REDIRECT: &str = "/?logout=success";
pub const LOGIN_REDIRECT: &str = "/?login=success";

/// Exchange credentials for a token and store the new session.
///
/// Any stored session is dropped before the request is sent.
pub async fn login<T, S, N>(
    gateway: &ApiGateway<T, S, N>,
    email: &str,
    password: &str,
) -> Result<Session, AuthError>
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    let body = LoginDto {
        email: email.to_string(),
        password: password.to_string(),
    };
    let options = RequestOptions::post().json(&body)?.anonymous();

    // A failed attempt must not leave an earlier session usable.
    gateway.session().clear();

    let response: LoginResponseDto = gateway.fetch(LOGIN_ENDPOINT, options).await?;
    let session = response.into_session(email);
    gateway.session().begin(&session)?;

    tracing::info!("Logged in as user {} ({})", session.user_id, session.role);

    Ok(session)
}

/// Drop the session and return to the landing page.
pub fn logout<T, S, N>(gateway: &ApiGateway<T, S, N>)
where
    T: Transport,
    S: KeyValueStorage,
    N: Navigator,
{
    gateway.session().clear();
    gateway.navigator().redirect(LOGOUT_REDIRECT);
}
