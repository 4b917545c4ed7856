//! Entity resolution
//!
//! Turns a partial, case-insensitive name fragment into exactly one account
//! or category, or fails. An exact name match wins outright (so "Card"
//! resolves even when "Card Plus" exists); otherwise substring containment
//! applies and must be unique. The explicit input always beats the
//! configured default, which beats nothing.

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{Account, Category};

/// Resolve `fragment` to exactly one candidate by name
///
/// `entity` names the candidate type in error messages.
fn resolve_unique<'a, T>(
    entity: &'static str,
    fragment: &str,
    candidates: &'a [T],
    name_of: impl Fn(&T) -> &str,
) -> TallyResult<&'a T> {
    let needle = fragment.to_lowercase();

    let exact: Vec<&T> = candidates
        .iter()
        .filter(|c| name_of(c).to_lowercase() == needle)
        .collect();
    if exact.len() == 1 {
        return Ok(exact[0]);
    }

    let matches: Vec<&T> = candidates
        .iter()
        .filter(|c| name_of(c).to_lowercase().contains(&needle))
        .collect();

    match matches.len() {
        0 => Err(TallyError::NotFound {
            entity,
            input: fragment.to_string(),
        }),
        1 => Ok(matches[0]),
        _ => Err(TallyError::Ambiguous {
            entity,
            input: fragment.to_string(),
            matches: matches.iter().map(|c| name_of(c).to_string()).collect(),
        }),
    }
}

/// Resolve an account by partial name
pub fn resolve_account<'a>(accounts: &'a [Account], fragment: &str) -> TallyResult<&'a Account> {
    if accounts.is_empty() {
        return Err(TallyError::MissingInput(
            "no accounts exist yet; create one in Satchel first".into(),
        ));
    }
    resolve_unique("Account", fragment, accounts, |a| a.name.as_str())
}

/// Resolve a category by partial name
pub fn resolve_category<'a>(
    categories: &'a [Category],
    fragment: &str,
) -> TallyResult<&'a Category> {
    if categories.is_empty() {
        return Err(TallyError::MissingInput(
            "no categories exist yet; create one in Satchel first".into(),
        ));
    }
    resolve_unique("Category", fragment, categories, |c| c.name.as_str())
}

/// Resolve an account from the explicit flag, falling back to the configured
/// default
pub fn resolve_account_or_default<'a>(
    accounts: &'a [Account],
    explicit: Option<&str>,
    settings: &Settings,
) -> TallyResult<&'a Account> {
    match explicit.or(settings.default_account.as_deref()) {
        Some(fragment) => resolve_account(accounts, fragment),
        None => Err(TallyError::MissingInput(
            "no account given and no default configured; pass -a, or run \
             'tally config set default_account <name>'"
                .into(),
        )),
    }
}

/// Resolve a category from the explicit flag, falling back to the configured
/// default
pub fn resolve_category_or_default<'a>(
    categories: &'a [Category],
    explicit: Option<&str>,
    settings: &Settings,
) -> TallyResult<&'a Category> {
    match explicit.or(settings.default_category.as_deref()) {
        Some(fragment) => resolve_category(categories, fragment),
        None => Err(TallyError::MissingInput(
            "no category given and no default configured; pass -c, or run \
             'tally config set default_category <name>'"
                .into(),
        )),
    }
}
