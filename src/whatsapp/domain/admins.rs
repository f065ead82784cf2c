//! Phone allow-list for admin commands.

use std::collections::BTreeSet;

/// Normalizes a phone number for allow-list comparison.
///
/// Surrounding whitespace and one leading `+` are removed.
///
/// ```
/// use maitre::whatsapp::domain::normalize_phone;
///
/// assert_eq!(normalize_phone(" +447700900123 "), "447700900123");
/// ```
#[must_use]
pub fn normalize_phone(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix('+').unwrap_or(trimmed)
}

/// Phone numbers allowed to send admin commands.
///
/// Built once from configuration and never changed at runtime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminAllowList {
    phones: BTreeSet<String>,
}

impl AdminAllowList {
    /// Builds an allow-list, dropping blank entries.
    #[must_use]
    pub fn new<I, S>(phones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let phones = phones
            .into_iter()
            .map(|phone| normalize_phone(phone.as_ref()).to_owned())
            .filter(|phone| !phone.is_empty())
            .collect();
        Self { phones }
    }

    /// Parses a comma-separated list such as `+4477...,4478...`.
    #[must_use]
    pub fn parse(list: &str) -> Self {
        Self::new(list.split(','))
    }

    /// Returns `true` when `phone` is on the list.
    #[must_use]
    pub fn contains(&self, phone: &str) -> bool {
        self.phones.contains(normalize_phone(phone))
    }

    /// Returns the number of allowed phones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.phones.len()
    }

    /// Returns `true` when nobody is allowed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phones.is_empty()
    }
}
