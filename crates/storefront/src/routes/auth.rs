//! Merchant authentication route handlers.
//!
//! Handles login and registration against the commerce API. Failed
//! submissions re-render the form with the extracted error message and
//! everything except the password fields preserved.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::Result;
use crate::filters;
use crate::models::session::clear_auth;
use crate::models::{AuthFields, AuthFormState, AuthMode};
use crate::services::auth::{
    AuthError, MERCHANT_PORTAL_PATH, PendingRedirect, SessionWrites, complete_auth,
    failure_message,
};
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub email: String,
    pub username: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: String,
    pub business_name: String,
    pub business_type: String,
}

impl From<LoginForm> for AuthFields {
    fn from(form: LoginForm) -> Self {
        Self {
            email: form.email,
            password: form.password,
            ..Self::default()
        }
    }
}

impl From<RegisterForm> for AuthFields {
    fn from(form: RegisterForm) -> Self {
        Self {
            email: form.email,
            username: form.username,
            password: form.password,
            password_confirm: form.password_confirm,
            first_name: form.first_name,
            last_name: form.last_name,
            phone_number: form.phone_number,
            business_name: form.business_name,
            business_type: form.business_type,
        }
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Merchant login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/merchant_login.html")]
pub struct MerchantLoginTemplate {
    pub form: AuthFormState,
}

/// Merchant registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/merchant_register.html")]
pub struct MerchantRegisterTemplate {
    pub form: AuthFormState,
}

fn render_form(form: AuthFormState) -> Response {
    match form.mode {
        AuthMode::Login => MerchantLoginTemplate { form }.into_response(),
        AuthMode::Register => MerchantRegisterTemplate { form }.into_response(),
    }
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the merchant login page.
pub async fn login_page() -> impl IntoResponse {
    MerchantLoginTemplate {
        form: AuthFormState::new(AuthMode::Login),
    }
}

/// Handle login form submission.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    let mut form_state = AuthFormState::new(AuthMode::Login);
    form_state.fields = form.into();

    submit(&state, &session, form_state).await
}

// =============================================================================
// Registration Routes
// =============================================================================

/// Display the merchant registration page.
pub async fn register_page() -> impl IntoResponse {
    MerchantRegisterTemplate {
        form: AuthFormState::new(AuthMode::Register),
    }
}

/// Handle registration form submission.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<RegisterForm>,
) -> Result<Response> {
    let mut form_state = AuthFormState::new(AuthMode::Register);
    form_state.fields = form.into();

    submit(&state, &session, form_state).await
}

// =============================================================================
// Submission
// =============================================================================

/// Run one submission through the form state machine.
///
/// Success persists the session artifacts and redirects to the merchant
/// portal. Failure re-renders the form with the error message and the
/// password fields cleared.
async fn submit(
    state: &AppState,
    session: &Session,
    mut form_state: AuthFormState,
) -> Result<Response> {
    if !form_state.begin_submit() {
        return Ok(render_form(form_state));
    }

    let outcome = match form_state.mode {
        AuthMode::Login => state.commerce().login(&form_state.login_request()).await,
        AuthMode::Register => {
            state
                .commerce()
                .register(&form_state.register_request())
                .await
        }
    };

    match outcome {
        Ok(auth) => {
            let mut writes = SessionWrites::default();
            let mut redirect = PendingRedirect::default();
            complete_auth(&auth, &mut writes, &mut redirect, |user| {
                tracing::info!(user = %user, "Merchant authenticated");
            });
            writes.persist(session).await?;

            let target = redirect.target().unwrap_or(MERCHANT_PORTAL_PATH);
            Ok(Redirect::to(target).into_response())
        }
        Err(e) => {
            tracing::warn!("Merchant auth failed: {}", e);
            form_state.finish_submit(Err(failure_message(&e)));
            form_state.fields.password = String::new();
            form_state.fields.password_confirm = String::new();
            Ok(render_form(form_state))
        }
    }
}

// =============================================================================
// Logout
// =============================================================================

/// Handle logout: clear session auth artifacts and return home.
pub async fn logout(session: Session) -> Result<Response> {
    clear_auth(&session).await.map_err(AuthError::from)?;
    Ok(Redirect::to("/").into_response())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_maps_onto_fields() {
        let fields: AuthFields = LoginForm {
            email: "m@example.com".to_owned(),
            password: "hunter22".to_owned(),
        }
        .into();

        assert_eq!(fields.email, "m@example.com");
        assert_eq!(fields.password, "hunter22");
        assert!(fields.business_name.is_empty());
    }

    #[test]
    fn test_failed_submit_renders_login_page_with_error() {
        let mut form = AuthFormState::new(AuthMode::Login);
        form.fields.email = "m@example.com".to_owned();
        assert!(form.begin_submit());
        form.finish_submit(Err("Invalid credentials".to_owned()));
        form.fields.password = String::new();

        let html = MerchantLoginTemplate { form }.render().unwrap();
        assert!(html.contains("Invalid credentials"));
        assert!(html.contains("m@example.com"));
    }

    #[test]
    fn test_register_page_has_toggle_to_login() {
        let html = MerchantRegisterTemplate {
            form: AuthFormState::new(AuthMode::Register),
        }
        .render()
        .unwrap();

        assert!(html.contains("/merchant/login"));
    }

    #[test]
    fn test_login_page_has_toggle_to_register() {
        let html = MerchantLoginTemplate {
            form: AuthFormState::new(AuthMode::Login),
        }
        .render()
        .unwrap();

        assert!(html.contains("/merchant/register"));
    }
}
