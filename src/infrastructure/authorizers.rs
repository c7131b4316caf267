use crate::domain::ports::Authorizer;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::info;

/// Authorizes once an SMS code has been confirmed.
///
/// The code itself is not checked; any confirmation authorizes. The flag only
/// ever moves from `false` to `true`, so it is kept in an `AtomicBool` and
/// confirmation works through a shared reference.
#[derive(Debug, Default)]
pub struct SmsAuthorizer {
    authorized: AtomicBool,
}

impl SmsAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirm_authorization(&self, code: &str) {
        info!("Authorized with the SMS code: {code}");
        self.authorized.store(true, Ordering::Release);
    }
}

impl Authorizer for SmsAuthorizer {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::Acquire)
    }
}

/// Authorizes once the caller acknowledges it is not a robot.
#[derive(Debug, Default)]
pub struct NotARobot {
    authorized: AtomicBool,
}

impl NotARobot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn not_a_robot(&self) {
        info!("Confirming that I am not a robot.");
        self.authorized.store(true, Ordering::Release);
    }
}

impl Authorizer for NotARobot {
    fn is_authorized(&self) -> bool {
        self.authorized.load(Ordering::Acquire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sms_authorizer_starts_unauthorized() {
        let authorizer = SmsAuthorizer::new();
        assert!(!authorizer.is_authorized());
    }

    #[test]
    fn test_sms_authorizer_accepts_any_code() {
        let authorizer = SmsAuthorizer::new();
        authorizer.confirm_authorization("");
        assert!(authorizer.is_authorized());
    }

    #[test]
    fn test_not_a_robot_is_monotonic() {
        let authorizer = NotARobot::new();
        assert!(!authorizer.is_authorized());

        authorizer.not_a_robot();
        assert!(authorizer.is_authorized());

        // Confirming again keeps it authorized.
        authorizer.not_a_robot();
        assert!(authorizer.is_authorized());
    }
}
