//! Person names and email addresses.

use fake::faker::internet::en::FreeEmail;
use fake::Fake;
use rand::seq::IndexedRandom;
use rand::Rng;

/// Mail domains for addresses derived from a customer's name.
pub const EMAIL_DOMAINS: [&str; 6] = [
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "hotmail.com",
    "email.com",
    "mail.com",
];

/// Domain of a malformed address. It has no top-level domain.
pub const INVALID_DOMAIN: &str = "invalid";

/// Lowercased first and last word of a full name, if it has at least two.
pub fn name_handle(full_name: &str) -> Option<(String, String)> {
    let lower = full_name.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();
    match parts.as_slice() {
        [first, .., last] => Some((first.to_string(), last.to_string())),
        _ => None,
    }
}

/// Replace the domain of an address with [`INVALID_DOMAIN`].
pub fn malform_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or(email);
    format!("{local}@{INVALID_DOMAIN}")
}

/// Whether an address has a local part and a dotted domain.
pub fn is_well_formed_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Email for a customer row.
///
/// With a usable name the address is `first.last@domain`; otherwise faker
/// supplies one. `malformed` swaps the domain for [`INVALID_DOMAIN`].
pub fn customer_email<D: Rng, F: Rng>(
    name: Option<&str>,
    malformed: bool,
    decisions: &mut D,
    faker: &mut F,
) -> String {
    match name.and_then(name_handle) {
        Some((first, last)) => {
            let domain = if malformed {
                INVALID_DOMAIN
            } else {
                EMAIL_DOMAINS.choose(decisions).copied().unwrap_or("email.com")
            };
            format!("{first}.{last}@{domain}")
        }
        None => {
            let email: String = FreeEmail().fake_with_rng(faker);
            if malformed {
                malform_email(&email)
            } else {
                email
            }
        }
    }
}
