//! Per-request decision pipeline.
//!
//! The hosting site invokes one entry point per page view. Internally the
//! engine runs an ordered list of named stages built once at startup;
//! every stage is a pure step over the request and the accumulating
//! decision.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::content::{resolve, ContentRecord};
use crate::intent::{classify, Intent};
use crate::location::{display_phone, LocationProvider};
use crate::meta::PageMeta;
use crate::phone::to_dial_href;

/// CSS class token gating sticky-bar visibility on the page root element.
pub const STICKY_BODY_CLASS: &str = "hb-has-sticky-call";

/// Request-scoped context signals supplied by the host.
///
/// Any true flag suppresses hero and sticky-bar output unconditionally.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RequestFlags {
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub is_feed: bool,
    #[serde(default)]
    pub is_robots: bool,
    #[serde(default)]
    pub is_attachment: bool,
}

impl RequestFlags {
    /// True when the request context alone rules out rendering.
    #[must_use]
    pub fn suppresses(self) -> bool {
        self.is_admin || self.is_feed || self.is_robots || self.is_attachment
    }
}

/// One page view as seen by the engine.
#[derive(Debug, Clone, Default)]
pub struct PageRequest {
    pub path: String,
    pub title: String,
    pub meta: PageMeta,
    pub flags: RequestFlags,
}

/// The fully computed outcome for one page view.
///
/// Consumed by the host's template renderer; this crate renders nothing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Decision {
    pub intent: Intent,
    /// True when hero and sticky bar must not render at all.
    pub suppressed: bool,
    /// Merged, token-substituted copy. `None` when suppressed or `off`.
    pub content: Option<ContentRecord>,
    /// Per-page background-image reference, passed through untouched.
    pub background_image: Option<String>,
    /// Class token for the page root element, when the sticky bar shows.
    pub body_class: Option<String>,
    /// Display phone for the CTA links; may be empty.
    pub phone_display: String,
    /// Dialable href for the hero and sticky-bar CTAs; empty renders an
    /// inert placeholder link.
    pub phone_href: String,
}

struct Stage {
    name: &'static str,
    run: fn(&Engine, &PageRequest, &mut Decision) -> StageOutcome,
}

#[derive(Debug, PartialEq, Eq)]
enum StageOutcome {
    Continue,
    /// Stop the run; later stages would have nothing to act on.
    Halt,
}

/// Decision engine: the location provider plus the stage list, built once
/// at startup and shared read-only across requests.
pub struct Engine {
    provider: Arc<dyn LocationProvider>,
    stages: Vec<Stage>,
}

impl Engine {
    #[must_use]
    pub fn new(provider: Arc<dyn LocationProvider>) -> Self {
        let stages = vec![
            Stage {
                name: "suppress",
                run: stage_suppress,
            },
            Stage {
                name: "classify",
                run: stage_classify,
            },
            Stage {
                name: "resolve",
                run: stage_resolve,
            },
            Stage {
                name: "phone",
                run: stage_phone,
            },
            Stage {
                name: "tokens",
                run: stage_tokens,
            },
            Stage {
                name: "body_class",
                run: stage_body_class,
            },
        ];
        Self { provider, stages }
    }

    /// Run the pipeline for one page view.
    ///
    /// Total over its inputs; stateless across requests.
    #[must_use]
    pub fn decide(&self, request: &PageRequest) -> Decision {
        let mut decision = Decision {
            intent: Intent::Emergency,
            suppressed: false,
            content: None,
            background_image: None,
            body_class: None,
            phone_display: String::new(),
            phone_href: String::new(),
        };

        for stage in &self.stages {
            let outcome = (stage.run)(self, request, &mut decision);
            tracing::debug!(
                stage = stage.name,
                path = %request.path,
                intent = %decision.intent,
                suppressed = decision.suppressed,
                "pipeline stage complete"
            );
            if outcome == StageOutcome::Halt {
                break;
            }
        }

        decision
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.stages.iter().map(|s| s.name).collect();
        f.debug_struct("Engine").field("stages", &names).finish()
    }
}

/// Request flags or the page's hero-off meta short-circuit everything.
fn stage_suppress(_: &Engine, request: &PageRequest, decision: &mut Decision) -> StageOutcome {
    if request.flags.suppresses() || request.meta.hero_off() {
        decision.suppressed = true;
        return StageOutcome::Halt;
    }
    StageOutcome::Continue
}

fn stage_classify(_: &Engine, request: &PageRequest, decision: &mut Decision) -> StageOutcome {
    let explicit = request.meta.intent_override();
    decision.intent = classify(&request.path, &request.title, explicit.as_deref());
    StageOutcome::Continue
}

fn stage_resolve(_: &Engine, request: &PageRequest, decision: &mut Decision) -> StageOutcome {
    let overrides = request.meta.overrides();
    decision.content = resolve(decision.intent, &overrides);
    decision.background_image = overrides.background_image;
    if decision.content.is_none() {
        // Intent is off: no copy, no phone work, no body class.
        return StageOutcome::Halt;
    }
    StageOutcome::Continue
}

fn stage_phone(engine: &Engine, _: &PageRequest, decision: &mut Decision) -> StageOutcome {
    decision.phone_display = display_phone(engine.provider.as_ref());
    decision.phone_href = to_dial_href(&decision.phone_display);
    StageOutcome::Continue
}

fn stage_tokens(engine: &Engine, _: &PageRequest, decision: &mut Decision) -> StageOutcome {
    if let Some(content) = decision.content.as_mut() {
        content.map_fields(|field| engine.provider.apply_tokens(field));
    }
    StageOutcome::Continue
}

/// The sticky-bar class is emitted only on non-admin requests with a
/// rendering intent. Content suppression was already handled upstream.
fn stage_body_class(_: &Engine, request: &PageRequest, decision: &mut Decision) -> StageOutcome {
    if !request.flags.is_admin && decision.intent != Intent::Off && decision.content.is_some() {
        decision.body_class = Some(STICKY_BODY_CLASS.to_string());
    }
    StageOutcome::Continue
}
