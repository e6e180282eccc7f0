//! Domain counters

use crate::application::KeyValidation;

pub fn record_user_registered() {
    metrics::counter!("apikey_users_registered_total").increment(1);
}

pub fn record_key_issued() {
    metrics::counter!("apikey_keys_issued_total").increment(1);
}

pub fn record_key_validation(outcome: &KeyValidation) {
    let label = match outcome {
        KeyValidation::Valid { .. } => "valid",
        KeyValidation::NotFound => "not_found",
        KeyValidation::Expired { .. } => "expired",
    };
    metrics::counter!("apikey_key_validations_total", "outcome" => label).increment(1);
}

pub fn record_admin_login(success: bool) {
    let label = if success { "success" } else { "failure" };
    metrics::counter!("apikey_admin_logins_total", "outcome" => label).increment(1);
}
