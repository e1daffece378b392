//! Token-boundary resolver.
//!
//! Commands receive a flat list of whitespace-separated tokens: a contact
//! name followed by a payload (phone, address, email, note text or tag),
//! with no delimiter between the two. The policies below locate the split
//! point:
//!
//! - **greedy prefix**: probe increasingly long name prefixes against the
//!   book; the first (shortest) prefix naming an existing contact wins.
//! - **fixed suffix**: the payload is the last `k` tokens, the rest is the
//!   name whether or not it exists.
//! - **content sniffing**: used by `addcontact`; the first 10-digit token
//!   starts the phone list, so everything before it is the name.
//!
//! The greedy policy prefers the shorter of two names when one is a prefix of
//! the other (`Ann` wins over `Ann Marie` for `Ann Marie called`). This is a
//! simple heuristic, not a guarantee for every name collision.

use crate::book::AddressBook;
use crate::domain::{format_address, looks_like_phone, normalize_name, ValidationError};
use crate::error::{CommandError, CommandResult};
use crate::models::Note;

/// How much of the token list may be left for the payload in a greedy scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadRule {
    /// At least one payload token must remain.
    Required,

    /// The name may consume every token.
    Optional,

    /// At least this many tokens must remain after the name.
    ReserveTrailing(usize),
}

/// A resolved contact name and the tokens following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Normalized name of an existing contact (greedy) or of the candidate
    /// contact (fixed suffix)
    pub name: String,

    pub payload: &'a [String],
}

impl Resolution<'_> {
    /// Payload tokens joined with single spaces.
    pub fn payload_text(&self) -> String {
        self.payload.join(" ")
    }
}

/// Greedy-prefix policy: the shortest prefix naming an existing contact.
///
/// # Errors
///
/// `CommandError::ContactNotFound` when no allowed prefix names a contact.
pub fn greedy_prefix<'a>(
    tokens: &'a [String],
    book: &AddressBook,
    rule: PayloadRule,
) -> CommandResult<Resolution<'a>> {
    let max_len = match rule {
        PayloadRule::Required => tokens.len().saturating_sub(1),
        PayloadRule::Optional => tokens.len(),
        PayloadRule::ReserveTrailing(k) => tokens.len().saturating_sub(k),
    };

    for len in 1..=max_len {
        let candidate = normalize_name(&tokens[..len].join(" "));
        if book.exists(&candidate) {
            tracing::debug!(name = %candidate, split = len, "Greedy prefix resolved");
            return Ok(Resolution {
                name: candidate,
                payload: &tokens[len..],
            });
        }
    }

    Err(CommandError::ContactNotFound)
}

/// Fixed-suffix policy: the last `k` tokens are the payload.
///
/// # Errors
///
/// `CommandError::MissingArguments` unless at least one name token precedes
/// the suffix.
pub fn fixed_suffix(tokens: &[String], k: usize) -> CommandResult<Resolution<'_>> {
    if tokens.len() <= k {
        return Err(CommandError::MissingArguments);
    }
    let split = tokens.len() - k;
    Ok(Resolution {
        name: normalize_name(&tokens[..split].join(" ")),
        payload: &tokens[split..],
    })
}

/// Fields recognized in an `addcontact` argument list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phones: Vec<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

/// Content-sniffing policy for `addcontact`.
///
/// Layout: `<name...> <phone> [<phone>...] [<email>] [<address...>]`. After
/// the phones, a token containing `@` is the email (the last one wins) and
/// every other token belongs to the address, which is cosmetically
/// formatted.
///
/// # Errors
///
/// `CommandError::ValidationFailed` when there is no 10-digit token or no
/// name before it.
pub fn sniff_contact(tokens: &[String]) -> CommandResult<ContactDraft> {
    let phone_start = tokens
        .iter()
        .position(|t| looks_like_phone(t))
        .ok_or_else(|| {
            CommandError::ValidationFailed(ValidationError::InvalidPhoneFormat(String::new()))
        })?;

    let name = normalize_name(&tokens[..phone_start].join(" "));
    if name.is_empty() {
        return Err(ValidationError::EmptyName.into());
    }

    let phones: Vec<String> = tokens[phone_start..]
        .iter()
        .take_while(|t| looks_like_phone(t))
        .cloned()
        .collect();

    let mut email = None;
    let mut address_parts = Vec::new();
    for token in &tokens[phone_start + phones.len()..] {
        if token.contains('@') {
            email = Some(token.trim().to_string());
        } else {
            address_parts.push(token.as_str());
        }
    }

    let address = Some(format_address(&address_parts.join(" "))).filter(|a| !a.is_empty());

    Ok(ContactDraft {
        name,
        phones,
        email,
        address,
    })
}

/// Nested scan used by `editnote`: the first split point whose prefix equals
/// an existing note's text. Returns `(old_text, new_text)`.
pub fn match_note_prefix<'a>(
    tokens: &'a [String],
    notes: &[Note],
) -> Option<(String, &'a [String])> {
    (1..tokens.len()).find_map(|split| {
        let candidate = tokens[..split].join(" ");
        notes
            .iter()
            .any(|n| n.same_text(&candidate))
            .then(|| (candidate, &tokens[split..]))
    })
}
