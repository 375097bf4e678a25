// preflight-core/src/runtime/router.rs
// ============================================================================
// Module: Decision Router
// Description: Cost-aware routing of queries between cheap and expensive paths.
// Purpose: Classify queries deterministically via a data-driven rule ladder.
// Dependencies: crate::core, rule-ladder, serde, thiserror, time
// ============================================================================

//! ## Overview
//! The router turns a query plus optional context into a routing decision by
//! evaluating a first-match rule ladder. The rule set, including its order,
//! is data: deployments reorder or retune rules without code changes, and the
//! ladder's mandatory fallback keeps routing total. Every decision carries a
//! non-empty reason; the traced form additionally reports which rules were
//! consulted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use rule_ladder::Ladder;
use rule_ladder::LadderBuilder;
use rule_ladder::LadderError;
use rule_ladder::LadderTrace;
use rule_ladder::RungPredicate;
use rule_ladder::Verdict;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;
use time::Duration;
use time::OffsetDateTime;

use crate::core::Query;
use crate::core::RoutingDecision;
use crate::core::Urgency;

// ============================================================================
// SECTION: Canonical Reasons
// ============================================================================

/// Reason attached when an informational query is served from known data.
pub const REASON_KNOWN_DATA: &str = "answerable from known data";

/// Reason attached when an operational query needs live verification.
pub const REASON_LIVE_VALIDATION: &str = "requires live validation";

/// Reason attached when declared urgency forces the expensive path.
pub const REASON_HIGH_URGENCY: &str = "high urgency requires fresh check";

/// Reason attached when no rule matched and routing stays authoritative.
pub const REASON_DEFAULT_AUTHORITATIVE: &str = "default to authoritative check";

// ============================================================================
// SECTION: Rule Data Model
// ============================================================================

/// Identity of one routing rule in the configurable order.
///
/// The fallback is not listed here: it is mandatory and always last, which is
/// what keeps routing total no matter how a deployment orders these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteRuleKind {
    /// Cheap path for queries matching the informational pattern list.
    InformationalLexical,
    /// Expensive path when declared urgency is high.
    UrgencyEscalation,
    /// Cheap path when a cached result is younger than the freshness window.
    FreshnessWindow,
    /// Expensive path for queries matching the operational pattern list.
    OperationalLexical,
}

impl RouteRuleKind {
    /// Returns the stable snake_case rule label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InformationalLexical => "informational_lexical",
            Self::UrgencyEscalation => "urgency_escalation",
            Self::FreshnessWindow => "freshness_window",
            Self::OperationalLexical => "operational_lexical",
        }
    }
}

impl fmt::Display for RouteRuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label under which the mandatory fallback appears in traces and verdicts.
pub const FALLBACK_RULE_LABEL: &str = "default_authoritative";

/// Complete routing rule set, order included.
///
/// This is configuration, not code: the ladder the router evaluates is built
/// from this data, so rule priority is exactly the `order` field. Fields
/// omitted when deserializing fall back to the shipped defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouterRules {
    /// Substring patterns marking a query informational (matched lowercase).
    pub informational_patterns: Vec<String>,
    /// Substring patterns marking a query operational (matched lowercase).
    pub operational_patterns: Vec<String>,
    /// Cache age below which a cached result still answers, in minutes.
    pub freshness_window_minutes: u32,
    /// Rule evaluation order; earlier entries take priority.
    pub order: Vec<RouteRuleKind>,
}

impl Default for RouterRules {
    /// The shipped rule set.
    ///
    /// Informational matching outranks everything, so mixed phrasing like
    /// "is the price broken" is served from known data. Urgency and cache
    /// freshness are consulted before operational matching: an operational
    /// query with a fresh cached answer is served cheap, and only once the
    /// cache is stale does it fall through to live validation.
    fn default() -> Self {
        Self {
            informational_patterns: vec![
                "price".to_string(),
                "cost".to_string(),
                "how much".to_string(),
                "feature".to_string(),
                "include".to_string(),
                "offer".to_string(),
            ],
            operational_patterns: vec![
                "work".to_string(),
                "broken".to_string(),
                "validate".to_string(),
                "verify".to_string(),
                "check".to_string(),
                "available".to_string(),
            ],
            freshness_window_minutes: 5,
            order: vec![
                RouteRuleKind::InformationalLexical,
                RouteRuleKind::UrgencyEscalation,
                RouteRuleKind::FreshnessWindow,
                RouteRuleKind::OperationalLexical,
            ],
        }
    }
}

/// Router rule set validation errors.
#[derive(Debug, Error)]
pub enum RouterRulesError {
    /// The freshness window was zero.
    #[error("freshness window must be at least one minute")]
    ZeroFreshnessWindow,
    /// A rule appeared more than once in the order.
    #[error("rule {rule} listed more than once in the evaluation order")]
    DuplicateRule {
        /// The repeated rule.
        rule: RouteRuleKind,
    },
    /// A lexical rule was ordered but has no patterns to match.
    #[error("rule {rule} requires at least one pattern")]
    MissingPatterns {
        /// The pattern-less rule.
        rule: RouteRuleKind,
    },
    /// A pattern was empty after trimming.
    #[error("rule {rule} contains an empty pattern")]
    EmptyPattern {
        /// The rule owning the empty pattern.
        rule: RouteRuleKind,
    },
    /// The assembled ladder failed structural validation.
    #[error(transparent)]
    Ladder(#[from] LadderError),
}

// ============================================================================
// SECTION: Route Predicates
// ============================================================================

/// Predicate forms a routing rule can take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RoutePredicate {
    /// Matches when the lowercased query text contains any pattern.
    LexicalAny {
        /// Patterns, already lowercased at construction.
        patterns: Vec<String>,
    },
    /// Matches when declared urgency is at least the threshold.
    UrgencyAtLeast {
        /// Minimum urgency that matches.
        threshold: Urgency,
    },
    /// Matches when a cached result exists and is younger than the window.
    CacheFresh {
        /// Freshness window in minutes; strict upper bound on cache age.
        window_minutes: u32,
    },
}

/// Input one routing evaluation inspects.
///
/// Built once per decision: the lowercased text is computed a single time no
/// matter how many lexical rules the ladder holds.
pub struct RouteInput<'a> {
    /// The query under evaluation.
    query: &'a Query,
    /// Query text lowercased for case-insensitive matching.
    text_lower: String,
    /// Host-supplied evaluation instant.
    now: OffsetDateTime,
}

impl<'a> RouteInput<'a> {
    /// Prepares the evaluation input for a query at the given instant.
    #[must_use]
    pub fn new(query: &'a Query, now: OffsetDateTime) -> Self {
        Self {
            query,
            text_lower: query.text.to_lowercase(),
            now,
        }
    }

    /// Returns whole minutes elapsed since the last check, clamped at zero.
    ///
    /// `None` when the context carries no last-check instant. Future
    /// timestamps (clock skew) clamp to zero rather than going negative.
    #[must_use]
    pub fn cache_age_minutes(&self) -> Option<i64> {
        let context = self.query.context.as_ref()?;
        let last_check_at = context.last_check_at?;
        Some((self.now - last_check_at).whole_minutes().max(0))
    }
}

impl RungPredicate for RoutePredicate {
    type Input<'a> = RouteInput<'a>;

    fn matches(&self, input: &Self::Input<'_>) -> bool {
        match self {
            Self::LexicalAny {
                patterns,
            } => patterns.iter().any(|pattern| input.text_lower.contains(pattern.as_str())),
            Self::UrgencyAtLeast {
                threshold,
            } => input.query.urgency().is_some_and(|urgency| urgency >= *threshold),
            Self::CacheFresh {
                window_minutes,
            } => {
                let Some(context) = input.query.context.as_ref() else {
                    return false;
                };
                if context.cached_result_available != Some(true) {
                    return false;
                }
                context.last_check_at.is_some_and(|last_check_at| {
                    input.now - last_check_at < Duration::minutes(i64::from(*window_minutes))
                })
            }
        }
    }
}

// ============================================================================
// SECTION: Route Outcomes
// ============================================================================

/// Outcome a matched rule selects, with its reason still unrendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteOutcome {
    /// Whether the expensive path should run.
    expensive: bool,
    /// How to render the decision reason.
    reason: ReasonTemplate,
}

/// Reason forms an outcome can carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum ReasonTemplate {
    /// A fixed reason string.
    Fixed(String),
    /// A reason citing the cache age in whole minutes.
    CacheAge,
}

impl RouteOutcome {
    /// Builds an outcome with a fixed reason.
    fn fixed(expensive: bool, reason: &str) -> Self {
        Self {
            expensive,
            reason: ReasonTemplate::Fixed(reason.to_string()),
        }
    }

    /// Builds the cheap outcome whose reason cites cache age.
    const fn cache_age() -> Self {
        Self {
            expensive: false,
            reason: ReasonTemplate::CacheAge,
        }
    }

    /// Renders the outcome into a decision for the given cache age.
    fn render(&self, cache_age_minutes: Option<i64>) -> RoutingDecision {
        let reason = match &self.reason {
            ReasonTemplate::Fixed(text) => text.clone(),
            ReasonTemplate::CacheAge => {
                let minutes = cache_age_minutes.unwrap_or(0);
                let unit = if minutes == 1 { "minute" } else { "minutes" };
                format!("cached result from {minutes} {unit} ago is recent enough")
            }
        };
        RoutingDecision {
            use_expensive_path: self.expensive,
            reason,
        }
    }
}

// ============================================================================
// SECTION: Route Trace
// ============================================================================

/// One consulted rule and whether it matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTraceEntry {
    /// The consulted rule's label.
    pub rule: String,
    /// Whether it matched.
    pub matched: bool,
}

/// Record of one routing evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteTrace {
    /// Rules consulted in evaluation order, the deciding one last.
    pub entries: Vec<RouteTraceEntry>,
    /// Label of the rule (or fallback) that decided the outcome.
    pub selected: String,
}

/// Trace collector bridging ladder callbacks into [`RouteTrace`] entries.
#[derive(Default)]
struct TraceCollector {
    /// Entries captured during evaluation.
    entries: Vec<RouteTraceEntry>,
}

impl LadderTrace<RoutePredicate> for TraceCollector {
    fn on_rung_evaluated(
        &mut self,
        _index: usize,
        label: &str,
        _predicate: &RoutePredicate,
        matched: bool,
    ) {
        self.entries.push(RouteTraceEntry {
            rule: label.to_string(),
            matched,
        });
    }

    fn on_fallback_selected(&mut self, _label: &str) {}
}

// ============================================================================
// SECTION: Decision Router
// ============================================================================

/// Deterministic query router over a data-driven rule ladder.
#[derive(Debug, Clone)]
pub struct DecisionRouter {
    /// The validated rule ladder evaluated per decision.
    ladder: Ladder<RoutePredicate, RouteOutcome>,
}

impl DecisionRouter {
    /// Builds a router from a rule set.
    ///
    /// # Errors
    ///
    /// Returns [`RouterRulesError`] when the rule set is invalid: zero
    /// freshness window, duplicate rules in the order, or a lexical rule
    /// without usable patterns.
    pub fn new(rules: &RouterRules) -> Result<Self, RouterRulesError> {
        Ok(Self {
            ladder: build_ladder(rules)?,
        })
    }

    /// Routes a query at the given instant.
    ///
    /// Total: never fails, empty input included, and the reason is never
    /// empty.
    #[must_use]
    pub fn decide(&self, query: &Query, now: OffsetDateTime) -> RoutingDecision {
        let input = RouteInput::new(query, now);
        let verdict = self.ladder.evaluate(&input);
        render_verdict(&verdict, &input)
    }

    /// Routes a query and reports which rules were consulted.
    #[must_use]
    pub fn decide_with_trace(
        &self,
        query: &Query,
        now: OffsetDateTime,
    ) -> (RoutingDecision, RouteTrace) {
        let input = RouteInput::new(query, now);
        let mut collector = TraceCollector::default();
        let verdict = self.ladder.evaluate_with_trace(&input, &mut collector);
        let decision = render_verdict(&verdict, &input);
        let trace = RouteTrace {
            entries: collector.entries,
            selected: verdict.label,
        };
        (decision, trace)
    }

    /// Returns the rule labels in evaluation order, fallback last.
    #[must_use]
    pub fn rule_labels(&self) -> Vec<String> {
        let mut labels: Vec<String> =
            self.ladder.rungs().iter().map(|rung| rung.label().to_string()).collect();
        labels.push(self.ladder.fallback().label().to_string());
        labels
    }
}

// ============================================================================
// SECTION: Private Helpers
// ============================================================================

/// Renders a ladder verdict into the caller-facing decision.
fn render_verdict(verdict: &Verdict<RouteOutcome>, input: &RouteInput<'_>) -> RoutingDecision {
    verdict.outcome.render(input.cache_age_minutes())
}

/// Builds the validated ladder a rule set describes.
fn build_ladder(rules: &RouterRules) -> Result<Ladder<RoutePredicate, RouteOutcome>, RouterRulesError> {
    if rules.freshness_window_minutes == 0 {
        return Err(RouterRulesError::ZeroFreshnessWindow);
    }

    let mut builder = LadderBuilder::new();
    let mut seen: Vec<RouteRuleKind> = Vec::new();
    for kind in &rules.order {
        if seen.contains(kind) {
            return Err(RouterRulesError::DuplicateRule {
                rule: *kind,
            });
        }
        seen.push(*kind);
        builder = builder.rung(kind.as_str(), predicate_for(*kind, rules)?, outcome_for(*kind));
    }

    let ladder = builder.fallback(
        FALLBACK_RULE_LABEL,
        RouteOutcome::fixed(true, REASON_DEFAULT_AUTHORITATIVE),
    )?;
    Ok(ladder)
}

/// Resolves the predicate for one ordered rule.
fn predicate_for(kind: RouteRuleKind, rules: &RouterRules) -> Result<RoutePredicate, RouterRulesError> {
    match kind {
        RouteRuleKind::InformationalLexical => Ok(RoutePredicate::LexicalAny {
            patterns: normalize_patterns(&rules.informational_patterns, kind)?,
        }),
        RouteRuleKind::OperationalLexical => Ok(RoutePredicate::LexicalAny {
            patterns: normalize_patterns(&rules.operational_patterns, kind)?,
        }),
        RouteRuleKind::UrgencyEscalation => Ok(RoutePredicate::UrgencyAtLeast {
            threshold: Urgency::High,
        }),
        RouteRuleKind::FreshnessWindow => Ok(RoutePredicate::CacheFresh {
            window_minutes: rules.freshness_window_minutes,
        }),
    }
}

/// Resolves the outcome for one ordered rule.
fn outcome_for(kind: RouteRuleKind) -> RouteOutcome {
    match kind {
        RouteRuleKind::InformationalLexical => RouteOutcome::fixed(false, REASON_KNOWN_DATA),
        RouteRuleKind::UrgencyEscalation => RouteOutcome::fixed(true, REASON_HIGH_URGENCY),
        RouteRuleKind::FreshnessWindow => RouteOutcome::cache_age(),
        RouteRuleKind::OperationalLexical => RouteOutcome::fixed(true, REASON_LIVE_VALIDATION),
    }
}

/// Lowercases and checks one lexical rule's pattern list.
fn normalize_patterns(
    patterns: &[String],
    rule: RouteRuleKind,
) -> Result<Vec<String>, RouterRulesError> {
    if patterns.is_empty() {
        return Err(RouterRulesError::MissingPatterns {
            rule,
        });
    }
    patterns
        .iter()
        .map(|pattern| {
            let trimmed = pattern.trim();
            if trimmed.is_empty() {
                Err(RouterRulesError::EmptyPattern {
                    rule,
                })
            } else {
                Ok(trimmed.to_lowercase())
            }
        })
        .collect()
}
