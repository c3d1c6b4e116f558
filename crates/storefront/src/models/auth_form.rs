//! Merchant auth form state.
//!
//! Models the two-state login/register form: the full field set, the inline
//! error banner, and the in-flight submission guard. Switching modes resets
//! everything; no field survives a mode switch.

use crate::commerce::types::{LoginRequest, RegisterRequest};

/// Which auth operation the form submits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl AuthMode {
    /// The opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Login => Self::Register,
            Self::Register => Self::Login,
        }
    }

    /// Whether this is the registration mode.
    #[must_use]
    pub const fn is_register(self) -> bool {
        matches!(self, Self::Register)
    }
}

/// The complete set of form fields.
///
/// Login consults only `email` and `password`; registration consults all of
/// them. Keeping one struct for both modes matches the reset-on-toggle
/// semantics: a toggle replaces the whole set with defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFields {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub phone_number: String,
    pub business_name: String,
    pub business_type: String,
}

/// Form state for the merchant auth form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub fields: AuthFields,
    /// Inline error banner content, if any.
    pub error: Option<String>,
    in_flight: bool,
}

impl AuthFormState {
    /// Create a fresh form in the given mode.
    #[must_use]
    pub fn new(mode: AuthMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Switch between login and registration.
    ///
    /// Every field and any visible error is cleared, regardless of prior
    /// content.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.fields = AuthFields::default();
        self.error = None;
    }

    /// Whether a submission is currently in flight.
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Attempt to start a submission.
    ///
    /// Returns `false` (and changes nothing) while a previous submission is
    /// still in flight; only one submission per form instance may be
    /// outstanding. On success the error banner is cleared and the busy
    /// state is set.
    pub fn begin_submit(&mut self) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.error = None;
        true
    }

    /// Record the outcome of a submission, clearing the busy state.
    pub fn finish_submit(&mut self, result: Result<(), String>) {
        self.in_flight = false;
        self.error = result.err();
    }

    /// Build the login payload: exactly email and password.
    #[must_use]
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            email: self.fields.email.clone(),
            password: self.fields.password.clone(),
        }
    }

    /// Build the registration payload.
    ///
    /// `user_type` is always `"merchant"`; an empty phone number travels as
    /// the empty string.
    #[must_use]
    pub fn register_request(&self) -> RegisterRequest {
        RegisterRequest {
            email: self.fields.email.clone(),
            username: self.fields.username.clone(),
            first_name: self.fields.first_name.clone(),
            last_name: self.fields.last_name.clone(),
            user_type: "merchant".to_owned(),
            phone_number: self.fields.phone_number.clone(),
            business_name: self.fields.business_name.clone(),
            business_type: self.fields.business_type.clone(),
            password: self.fields.password.clone(),
            password_confirm: self.fields.password_confirm.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form(mode: AuthMode) -> AuthFormState {
        let mut form = AuthFormState::new(mode);
        form.fields = AuthFields {
            email: "a@b.com".to_owned(),
            password: "hunter22".to_owned(),
            password_confirm: "hunter22".to_owned(),
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            username: "ada".to_owned(),
            phone_number: "+1 555 0100".to_owned(),
            business_name: "Analytical Goods".to_owned(),
            business_type: "retail".to_owned(),
        };
        form.error = Some("old error".to_owned());
        form
    }

    #[test]
    fn test_toggle_clears_all_fields_and_error() {
        let mut form = filled_form(AuthMode::Login);
        form.toggle_mode();

        assert_eq!(form.mode, AuthMode::Register);
        assert_eq!(form.fields, AuthFields::default());
        assert_eq!(form.error, None);

        // And back again, from a freshly refilled register form
        let mut form = filled_form(AuthMode::Register);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::Login);
        assert_eq!(form.fields, AuthFields::default());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_in_flight_guard_refuses_second_submit() {
        let mut form = filled_form(AuthMode::Login);
        assert!(form.begin_submit());
        assert!(form.is_in_flight());

        // Re-invoking submit has no additional effect
        assert!(!form.begin_submit());
        assert!(form.is_in_flight());

        form.finish_submit(Ok(()));
        assert!(!form.is_in_flight());
        assert!(form.begin_submit());
    }

    #[test]
    fn test_begin_submit_clears_previous_error() {
        let mut form = filled_form(AuthMode::Login);
        assert!(form.begin_submit());
        assert_eq!(form.error, None);
    }

    #[test]
    fn test_finish_submit_records_failure() {
        let mut form = filled_form(AuthMode::Login);
        form.begin_submit();
        form.finish_submit(Err("Invalid credentials.".to_owned()));
        assert!(!form.is_in_flight());
        assert_eq!(form.error.as_deref(), Some("Invalid credentials."));
    }

    #[test]
    fn test_login_payload_is_exactly_email_and_password() {
        let form = filled_form(AuthMode::Login);
        let body = serde_json::to_value(form.login_request()).unwrap();
        let map = body.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("email").unwrap(), "a@b.com");
        assert_eq!(map.get("password").unwrap(), "hunter22");
    }

    #[test]
    fn test_register_payload_shape() {
        let form = filled_form(AuthMode::Register);
        let body = serde_json::to_value(form.register_request()).unwrap();
        let map = body.as_object().unwrap();

        assert_eq!(map.get("user_type").unwrap(), "merchant");
        assert_eq!(map.get("business_name").unwrap(), "Analytical Goods");
        assert_eq!(map.get("business_type").unwrap(), "retail");
        assert_eq!(map.get("password_confirm").unwrap(), "hunter22");
        assert_eq!(map.len(), 10);
    }

    #[test]
    fn test_register_payload_defaults_empty_phone() {
        let mut form = filled_form(AuthMode::Register);
        form.fields.phone_number = String::new();
        let body = serde_json::to_value(form.register_request()).unwrap();
        assert_eq!(body.get("phone_number").unwrap(), "");
    }
}
