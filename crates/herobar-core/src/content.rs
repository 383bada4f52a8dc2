//! Copy records, the per-intent static table, and override resolution.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::intent::Intent;

/// Names of the overridable copy fields on a [`ContentRecord`].
///
/// The canonical string key (see [`ContentField::key`]) is what page
/// metadata and the registry file use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ContentField {
    TopLabel,
    TopBullet1,
    TopBullet2,
    TopBullet3,
    Title,
    Subtitle,
    Usp1Title,
    Usp1Desc,
    Usp2Title,
    Usp2Desc,
    Usp3Title,
    Usp3Desc,
    Usp4Title,
    Usp4Desc,
    CtaText,
    Microcopy,
    Badge1,
    Badge2,
    Badge3,
    Badge4,
    StickyCta,
}

impl ContentField {
    /// Every overridable field, in record order.
    pub const ALL: [ContentField; 21] = [
        ContentField::TopLabel,
        ContentField::TopBullet1,
        ContentField::TopBullet2,
        ContentField::TopBullet3,
        ContentField::Title,
        ContentField::Subtitle,
        ContentField::Usp1Title,
        ContentField::Usp1Desc,
        ContentField::Usp2Title,
        ContentField::Usp2Desc,
        ContentField::Usp3Title,
        ContentField::Usp3Desc,
        ContentField::Usp4Title,
        ContentField::Usp4Desc,
        ContentField::CtaText,
        ContentField::Microcopy,
        ContentField::Badge1,
        ContentField::Badge2,
        ContentField::Badge3,
        ContentField::Badge4,
        ContentField::StickyCta,
    ];

    /// Canonical string key for this field.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            ContentField::TopLabel => "top_label",
            ContentField::TopBullet1 => "top_bullet_1",
            ContentField::TopBullet2 => "top_bullet_2",
            ContentField::TopBullet3 => "top_bullet_3",
            ContentField::Title => "title",
            ContentField::Subtitle => "subtitle",
            ContentField::Usp1Title => "usp_1_title",
            ContentField::Usp1Desc => "usp_1_desc",
            ContentField::Usp2Title => "usp_2_title",
            ContentField::Usp2Desc => "usp_2_desc",
            ContentField::Usp3Title => "usp_3_title",
            ContentField::Usp3Desc => "usp_3_desc",
            ContentField::Usp4Title => "usp_4_title",
            ContentField::Usp4Desc => "usp_4_desc",
            ContentField::CtaText => "cta_text",
            ContentField::Microcopy => "microcopy",
            ContentField::Badge1 => "badge_1",
            ContentField::Badge2 => "badge_2",
            ContentField::Badge3 => "badge_3",
            ContentField::Badge4 => "badge_4",
            ContentField::StickyCta => "sticky_cta",
        }
    }
}

/// One fully-populated copy variant for the hero and sticky bar.
///
/// Copy texts may carry `[location]` tokens; the pipeline substitutes them
/// through the location provider before the host renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Label on the top strip, next to the phone link.
    pub top_label: String,
    pub top_bullet_1: String,
    pub top_bullet_2: String,
    pub top_bullet_3: String,
    /// Page H1.
    pub title: String,
    pub subtitle: String,
    pub usp_1_title: String,
    pub usp_1_desc: String,
    pub usp_2_title: String,
    pub usp_2_desc: String,
    pub usp_3_title: String,
    pub usp_3_desc: String,
    pub usp_4_title: String,
    pub usp_4_desc: String,
    /// Hero call-to-action button text.
    pub cta_text: String,
    pub microcopy: String,
    pub badge_1: String,
    pub badge_2: String,
    pub badge_3: String,
    pub badge_4: String,
    /// Sticky-bar call-to-action text.
    pub sticky_cta: String,
}

impl ContentRecord {
    /// Read a field by name.
    #[must_use]
    pub fn field(&self, field: ContentField) -> &str {
        match field {
            ContentField::TopLabel => &self.top_label,
            ContentField::TopBullet1 => &self.top_bullet_1,
            ContentField::TopBullet2 => &self.top_bullet_2,
            ContentField::TopBullet3 => &self.top_bullet_3,
            ContentField::Title => &self.title,
            ContentField::Subtitle => &self.subtitle,
            ContentField::Usp1Title => &self.usp_1_title,
            ContentField::Usp1Desc => &self.usp_1_desc,
            ContentField::Usp2Title => &self.usp_2_title,
            ContentField::Usp2Desc => &self.usp_2_desc,
            ContentField::Usp3Title => &self.usp_3_title,
            ContentField::Usp3Desc => &self.usp_3_desc,
            ContentField::Usp4Title => &self.usp_4_title,
            ContentField::Usp4Desc => &self.usp_4_desc,
            ContentField::CtaText => &self.cta_text,
            ContentField::Microcopy => &self.microcopy,
            ContentField::Badge1 => &self.badge_1,
            ContentField::Badge2 => &self.badge_2,
            ContentField::Badge3 => &self.badge_3,
            ContentField::Badge4 => &self.badge_4,
            ContentField::StickyCta => &self.sticky_cta,
        }
    }

    /// Replace a field by name.
    pub fn set_field(&mut self, field: ContentField, value: String) {
        match field {
            ContentField::TopLabel => self.top_label = value,
            ContentField::TopBullet1 => self.top_bullet_1 = value,
            ContentField::TopBullet2 => self.top_bullet_2 = value,
            ContentField::TopBullet3 => self.top_bullet_3 = value,
            ContentField::Title => self.title = value,
            ContentField::Subtitle => self.subtitle = value,
            ContentField::Usp1Title => self.usp_1_title = value,
            ContentField::Usp1Desc => self.usp_1_desc = value,
            ContentField::Usp2Title => self.usp_2_title = value,
            ContentField::Usp2Desc => self.usp_2_desc = value,
            ContentField::Usp3Title => self.usp_3_title = value,
            ContentField::Usp3Desc => self.usp_3_desc = value,
            ContentField::Usp4Title => self.usp_4_title = value,
            ContentField::Usp4Desc => self.usp_4_desc = value,
            ContentField::CtaText => self.cta_text = value,
            ContentField::Microcopy => self.microcopy = value,
            ContentField::Badge1 => self.badge_1 = value,
            ContentField::Badge2 => self.badge_2 = value,
            ContentField::Badge3 => self.badge_3 = value,
            ContentField::Badge4 => self.badge_4 = value,
            ContentField::StickyCta => self.sticky_cta = value,
        }
    }

    /// Map every copy field through `f` in place.
    pub fn map_fields<F>(&mut self, mut f: F)
    where
        F: FnMut(&str) -> String,
    {
        for field in ContentField::ALL {
            let replaced = f(self.field(field));
            self.set_field(field, replaced);
        }
    }
}

/// Per-page partial record: fields that replace the base copy, plus an
/// optional background-image reference. Built fresh per request from page
/// metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOverride {
    pub fields: BTreeMap<ContentField, String>,
    pub background_image: Option<String>,
}

impl PageOverride {
    /// True when no field overrides and no background image are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.background_image.is_none()
    }
}

/// Compiled-in copy spec for one intent.
struct RecordSpec {
    intent: Intent,
    top_label: &'static str,
    top_bullet_1: &'static str,
    top_bullet_2: &'static str,
    top_bullet_3: &'static str,
    title: &'static str,
    subtitle: &'static str,
    usp_1_title: &'static str,
    usp_1_desc: &'static str,
    usp_2_title: &'static str,
    usp_2_desc: &'static str,
    usp_3_title: &'static str,
    usp_3_desc: &'static str,
    usp_4_title: &'static str,
    usp_4_desc: &'static str,
    cta_text: &'static str,
    microcopy: &'static str,
    badge_1: &'static str,
    badge_2: &'static str,
    badge_3: &'static str,
    badge_4: &'static str,
    sticky_cta: &'static str,
}

impl RecordSpec {
    fn to_record(&self) -> ContentRecord {
        ContentRecord {
            top_label: self.top_label.to_string(),
            top_bullet_1: self.top_bullet_1.to_string(),
            top_bullet_2: self.top_bullet_2.to_string(),
            top_bullet_3: self.top_bullet_3.to_string(),
            title: self.title.to_string(),
            subtitle: self.subtitle.to_string(),
            usp_1_title: self.usp_1_title.to_string(),
            usp_1_desc: self.usp_1_desc.to_string(),
            usp_2_title: self.usp_2_title.to_string(),
            usp_2_desc: self.usp_2_desc.to_string(),
            usp_3_title: self.usp_3_title.to_string(),
            usp_3_desc: self.usp_3_desc.to_string(),
            usp_4_title: self.usp_4_title.to_string(),
            usp_4_desc: self.usp_4_desc.to_string(),
            cta_text: self.cta_text.to_string(),
            microcopy: self.microcopy.to_string(),
            badge_1: self.badge_1.to_string(),
            badge_2: self.badge_2.to_string(),
            badge_3: self.badge_3.to_string(),
            badge_4: self.badge_4.to_string(),
            sticky_cta: self.sticky_cta.to_string(),
        }
    }
}

/// Emergency copy. Also the defensive fallback for a missing table entry.
static EMERGENCY_RECORD: RecordSpec = RecordSpec {
    intent: Intent::Emergency,
    top_label: "Call Now",
    top_bullet_1: "Available 24/7",
    top_bullet_2: "No call-out fee",
    top_bullet_3: "30-min response time",
    title: "Emergency Locksmith [location]",
    subtitle: "Locked out? Key snapped? Fast emergency locksmith service with 30-minute response – from lockouts to jammed locks, we get you back in quickly with minimal damage",
    usp_1_title: "30-Minute Emergency Response",
    usp_1_desc: "Emergency calls are prioritized – we get to you fast when you're locked out of your home or business",
    usp_2_title: "Transparent Pricing",
    usp_2_desc: "Clear quotes before work starts – no hidden charges or surprise fees, even for out-of-hours callouts",
    usp_3_title: "Non-Destructive Entry First",
    usp_3_desc: "Lock-picking and non-destructive methods come first, saving your locks and avoiding costly replacements where possible",
    usp_4_title: "24/7 Availability Across [location]",
    usp_4_desc: "Locked out at 3am? Available around the clock for lost keys, keys inside, snapped keys, and jammed locks",
    cta_text: "Call Now For Emergency Help",
    microcopy: "30-min response • 24/7 availability • Non-destructive entry",
    badge_1: "30-min response",
    badge_2: "No call-out fee",
    badge_3: "Non-destructive entry",
    badge_4: "24/7 availability",
    sticky_cta: "Call Now For Emergency Help",
};

static SAME_DAY_RECORD: RecordSpec = RecordSpec {
    intent: Intent::SameDay,
    top_label: "Call Now",
    top_bullet_1: "Same day service",
    top_bullet_2: "No call-out fee",
    top_bullet_3: "From £59",
    title: "Same-Day Locksmith Service [location]",
    subtitle: "Lock stiff, grinding, or key won't turn? Same-day repairs for all lock types – from uPVC multipoint mechanisms to mortice and cylinder locks",
    usp_1_title: "Same-Day Repairs",
    usp_1_desc: "Fast response for lock issues – stiff locks, worn mechanisms, and misaligned multipoint systems fixed professionally",
    usp_2_title: "Clear Pricing from £59",
    usp_2_desc: "Transparent rates quoted upfront – parts charged separately only when needed",
    usp_3_title: "Repair-First Specialists",
    usp_3_desc: "Existing locks are diagnosed and repaired rather than automatically replaced, saving money when repair is viable",
    usp_4_title: "All Lock Types Across [location]",
    usp_4_desc: "Euro cylinders, multipoint mechanisms, mortice locks, rim cylinders, and window locks – common parts carried",
    cta_text: "Call Now To Book Same-Day Service",
    microcopy: "Same-day service • Repair-first approach • All lock types",
    badge_1: "Same-day service",
    badge_2: "From £59",
    badge_3: "Repair-focused",
    badge_4: "All lock types",
    sticky_cta: "Call Now For Same-Day Help",
};

static PLANNED_RECORD: RecordSpec = RecordSpec {
    intent: Intent::Planned,
    top_label: "Call us 24/7",
    top_bullet_1: "Free quotes",
    top_bullet_2: "No call-out fee",
    top_bullet_3: "DBS checked",
    title: "Lock Changes & Security Upgrades [location]",
    subtitle: "Moving home or upgrading security? Professional lock changes, installations, and security surveys – clear quotes, insurance-approved fittings",
    usp_1_title: "Flexible Scheduling",
    usp_1_desc: "Book at your convenience – appointments that fit around your schedule for planned lock work",
    usp_2_title: "Free Quotes",
    usp_2_desc: "Transparent quotes for all work – from basic lock upgrades to full smart-lock installations",
    usp_3_title: "Insurance-Compliant Installations",
    usp_3_desc: "BS3621 and TS007 rated locks fitted to insurer requirements, with proper alignment and testing",
    usp_4_title: "All Lock Types Across [location]",
    usp_4_desc: "Mortice deadlocks, euro cylinders, multipoint systems, smart locks, and keyed-alike options available",
    cta_text: "Call For A Free Quote",
    microcopy: "Free quotes • Insurance-approved • Professional fitting",
    badge_1: "Free quotes",
    badge_2: "Insurance-approved",
    badge_3: "DBS checked",
    badge_4: "All lock types",
    sticky_cta: "Call For A Free Quote",
};

/// The static copy table. One entry per intent other than `Off`.
static RECORDS: &[&RecordSpec] = &[&EMERGENCY_RECORD, &SAME_DAY_RECORD, &PLANNED_RECORD];

/// Look up the static record for an intent.
///
/// Falls back to the emergency record if the table ever lacked an entry;
/// the table is compiled in, so the fallback should not fire.
fn base_record(intent: Intent) -> ContentRecord {
    RECORDS
        .iter()
        .find(|spec| spec.intent == intent)
        .copied()
        .unwrap_or(&EMERGENCY_RECORD)
        .to_record()
}

/// Resolve the copy record for an intent with page overrides applied.
///
/// `Off` returns `None`; the caller must suppress hero and sticky-bar
/// rendering entirely. Otherwise each non-empty override field replaces the
/// base value, field by field; untouched fields keep the base copy. The
/// override's background image is not part of the record and passes through
/// on the decision instead.
#[must_use]
pub fn resolve(intent: Intent, overrides: &PageOverride) -> Option<ContentRecord> {
    if intent == Intent::Off {
        return None;
    }

    let mut record = base_record(intent);
    for (&field, value) in &overrides.fields {
        if !value.trim().is_empty() {
            record.set_field(field, value.clone());
        }
    }
    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_intent_has_a_complete_record() {
        for intent in [Intent::Emergency, Intent::SameDay, Intent::Planned] {
            let record = resolve(intent, &PageOverride::default()).unwrap();
            for field in ContentField::ALL {
                assert!(
                    !record.field(field).trim().is_empty(),
                    "{intent} record has empty field {}",
                    field.key()
                );
            }
        }
    }

    #[test]
    fn off_resolves_to_none() {
        assert_eq!(resolve(Intent::Off, &PageOverride::default()), None);
        let mut overrides = PageOverride::default();
        overrides
            .fields
            .insert(ContentField::Title, "Ignored".to_string());
        assert_eq!(resolve(Intent::Off, &overrides), None);
    }

    #[test]
    fn empty_overrides_return_base_record_unchanged() {
        let base = resolve(Intent::Planned, &PageOverride::default()).unwrap();
        let again = resolve(Intent::Planned, &PageOverride::default()).unwrap();
        assert_eq!(base, again);
        assert_eq!(base.title, "Lock Changes & Security Upgrades [location]");
    }

    #[test]
    fn single_override_replaces_only_that_field() {
        let base = resolve(Intent::Emergency, &PageOverride::default()).unwrap();

        let mut overrides = PageOverride::default();
        overrides
            .fields
            .insert(ContentField::CtaText, "Ring Us Right Now".to_string());
        let merged = resolve(Intent::Emergency, &overrides).unwrap();

        assert_eq!(merged.cta_text, "Ring Us Right Now");
        for field in ContentField::ALL {
            if field != ContentField::CtaText {
                assert_eq!(merged.field(field), base.field(field));
            }
        }
    }

    #[test]
    fn blank_override_value_keeps_base_copy() {
        let base = resolve(Intent::SameDay, &PageOverride::default()).unwrap();

        let mut overrides = PageOverride::default();
        overrides
            .fields
            .insert(ContentField::Subtitle, "   ".to_string());
        let merged = resolve(Intent::SameDay, &overrides).unwrap();

        assert_eq!(merged.subtitle, base.subtitle);
    }

    #[test]
    fn field_roundtrip_via_set_field() {
        let mut record = resolve(Intent::Planned, &PageOverride::default()).unwrap();
        record.set_field(ContentField::Badge3, "Vetted".to_string());
        assert_eq!(record.field(ContentField::Badge3), "Vetted");
    }

    #[test]
    fn map_fields_touches_every_field() {
        let mut record = resolve(Intent::Emergency, &PageOverride::default()).unwrap();
        record.map_fields(|s| format!("x{s}"));
        for field in ContentField::ALL {
            assert!(record.field(field).starts_with('x'));
        }
    }

    #[test]
    fn override_is_empty_reflects_contents() {
        let mut overrides = PageOverride::default();
        assert!(overrides.is_empty());
        overrides.background_image = Some("/img/hero.jpg".to_string());
        assert!(!overrides.is_empty());
    }

    #[test]
    fn record_serializes_with_snake_case_keys() {
        let record = resolve(Intent::Emergency, &PageOverride::default()).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("sticky_cta").is_some());
        assert!(json.get("usp_4_desc").is_some());
    }
}
