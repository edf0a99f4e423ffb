use validator::{ValidateEmail, ValidationError, ValidationErrors};

use crate::app_error::FieldError;

/// Validates that the input looks like a valid email address.
///
/// Surrounding whitespace is not stripped, so `" a@b.com"` is rejected the same way
/// the request validator rejects it.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.validate_email() && validate_email_domain(email).is_ok()
}

/// Requires a dotted hostname ending in an alphabetic TLD of at least two letters.
///
/// Runs alongside the `email` rule, which also accepts `x@localhost`, `x@example.c`
/// and `x@[127.0.0.1]`. Input without an `@` is left to the `email` rule.
pub fn validate_email_domain(email: &str) -> Result<(), ValidationError> {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return Ok(());
    };

    if is_dotted_hostname(domain) {
        Ok(())
    } else {
        let mut error = ValidationError::new("email_domain");
        error.message = Some("Invalid email format".into());
        Err(error)
    }
}

fn is_dotted_hostname(domain: &str) -> bool {
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() || tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
        return false;
    }

    rest.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// Flattens `validator` errors into one entry per violated rule, sorted by field name.
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}
