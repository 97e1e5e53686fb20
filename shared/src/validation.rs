//! Input validation helpers
//!
//! Client-side checks mirror the form rules of the web app: required
//! fields, email syntax, password length and a non-negative salary.
//! The server stays authoritative; these only stop obviously bad input
//! before a round trip.

use thiserror::Error;
use validator::Validate;

/// Input rejected before it reached the server
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct InvalidInput(pub String);

/// Run the `validator` rules on `value` and flatten failures into one message.
///
/// Field errors are sorted by field name so the message is stable.
pub fn check<T: Validate>(value: &T) -> Result<(), InvalidInput> {
    let Err(errors) = value.validate() else {
        return Ok(());
    };

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let parts: Vec<String> = fields
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => msg.to_string(),
                None => format!("{field} is invalid ({})", e.code),
            })
        })
        .collect();

    Err(InvalidInput(parts.join("; ")))
}
