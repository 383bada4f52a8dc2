//! Location-aware naming capability.
//!
//! The hosting site may run a location plugin that knows the current
//! service area and its phone number. The core depends on that plugin only
//! through the narrow [`LocationProvider`] contract; host wiring decides
//! whether a real or null implementation is supplied.

/// Token substituted with the location's display name.
pub const LOCATION_TOKEN: &str = "[location]";

/// Token substituted with the location's phone number.
pub const TELEPHONE_TOKEN: &str = "[meta_telephone]";

/// Narrow contract onto the optional location plugin.
pub trait LocationProvider: Send + Sync {
    /// Phone number attribute of the current location, if known.
    fn telephone(&self) -> Option<String>;

    /// Substitute location tokens in a copy string.
    ///
    /// Implementations must leave unknown text untouched; a provider with
    /// no data returns the input unchanged.
    fn apply_tokens(&self, input: &str) -> String;
}

/// Provider used when no location plugin is wired. Supplies no phone and
/// performs no substitution.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLocation;

impl LocationProvider for NullLocation {
    fn telephone(&self) -> Option<String> {
        None
    }

    fn apply_tokens(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Fixed single-location provider configured at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticLocation {
    pub name: Option<String>,
    pub telephone: Option<String>,
}

impl LocationProvider for StaticLocation {
    fn telephone(&self) -> Option<String> {
        self.telephone.clone()
    }

    fn apply_tokens(&self, input: &str) -> String {
        let mut out = input.to_string();
        if let Some(name) = &self.name {
            out = out.replace(LOCATION_TOKEN, name);
        }
        if let Some(phone) = &self.telephone {
            out = out.replace(TELEPHONE_TOKEN, phone);
        }
        out
    }
}

/// Resolve the display phone number through a provider.
///
/// The provider's phone attribute wins when non-blank. Otherwise the token
/// substitution mechanism is queried with the raw telephone token, and its
/// result is accepted only if the substitution actually changed the token
/// (a no-op substitution would echo the unresolved placeholder back).
/// Returns a trimmed string; empty when no phone is resolvable.
#[must_use]
pub fn display_phone(provider: &dyn LocationProvider) -> String {
    if let Some(phone) = provider.telephone() {
        let phone = phone.trim();
        if !phone.is_empty() {
            return phone.to_string();
        }
    }

    let substituted = provider.apply_tokens(TELEPHONE_TOKEN);
    if substituted == TELEPHONE_TOKEN {
        return String::new();
    }
    substituted.trim().to_string()
}
