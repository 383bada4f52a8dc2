//! Page metadata access and override extraction.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::content::{ContentField, PageOverride};

/// Meta key for the explicit intent override.
pub const INTENT_KEY: &str = "hb_intent";

/// Meta key disabling the hero and sticky bar for a page.
pub const HERO_OFF_KEY: &str = "hb_hero_off";

/// Meta key for the per-page background-image reference.
pub const BACKGROUND_IMAGE_KEY: &str = "hb_background_image";

/// String key/value metadata for a single page.
///
/// Each canonical name is reachable under two spellings: the protected form
/// with a leading underscore (`_hb_title`) and the bare form (`hb_title`).
/// The protected form is tried first, the bare form second. Compatibility
/// shim: both spellings exist in the wild because different CMS
/// field-editing UIs write different forms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageMeta(pub BTreeMap<String, String>);

impl PageMeta {
    /// Look up a canonical meta name under both key spellings.
    ///
    /// Returns the first non-blank value, trimmed. Blank values are treated
    /// as absent so an empty protected field does not shadow a populated
    /// bare one.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<String> {
        let protected = format!("_{name}");
        [protected.as_str(), name]
            .iter()
            .filter_map(|key| self.0.get(*key))
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .map(ToOwned::to_owned)
    }

    /// Explicit intent override for this page, if any.
    ///
    /// The raw token is returned rather than a parsed intent so the
    /// classifier keeps its documented fall-through on unknown tokens.
    #[must_use]
    pub fn intent_override(&self) -> Option<String> {
        self.lookup(INTENT_KEY)
    }

    /// Whether the hero (and sticky bar) is disabled for this page.
    ///
    /// Only the values `yes` and `1` disable; anything else leaves the hero
    /// enabled.
    #[must_use]
    pub fn hero_off(&self) -> bool {
        self.lookup(HERO_OFF_KEY)
            .is_some_and(|v| v == "yes" || v == "1")
    }

    /// Build the per-page override set from this metadata.
    ///
    /// Each copy field is looked up under `hb_<field key>` (both spellings);
    /// blank values are skipped. The background image is carried separately
    /// from the copy fields.
    #[must_use]
    pub fn overrides(&self) -> PageOverride {
        let mut out = PageOverride::default();
        for field in ContentField::ALL {
            let name = format!("hb_{}", field.key());
            if let Some(value) = self.lookup(&name) {
                out.fields.insert(field, value);
            }
        }
        out.background_image = self.lookup(BACKGROUND_IMAGE_KEY);
        out
    }
}
