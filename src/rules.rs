//! First-match rule cascades.
//!
//! Every classifier and scorer in this crate is an ordered list of
//! (predicate, outcome) pairs evaluated left to right; the first predicate
//! that holds decides the edge. Keeping the cascades as plain rule tables
//! keeps their priority order auditable and testable in isolation.
//!
//! A predicate sees the edge plus a cascade-specific environment: the tag
//! schema for the splitters, the resolved numeric attributes for the
//! scorers.

use crate::error::Error;
use crate::model::{EdgeRecord, RuleId};

/// Numeric attributes resolved ahead of scoring. `speed` is on the km/h
/// scale of the generic resolver, `width` is in meters and present only
/// when genuinely numeric.
#[derive(Debug, Clone, Copy)]
pub struct Resolved {
    pub lanes: u32,
    pub speed: u32,
    pub width: Option<f64>,
}

/// One prioritized rule: a predicate over the edge and environment, and
/// the outcome attached when it is the first to match.
pub struct Rule<E, T> {
    pub id: RuleId,
    pub value: T,
    pub matches: fn(&EdgeRecord, &E) -> bool,
}

/// An ordered rule cascade with an optional catch-all outcome.
pub struct RuleSet<E, T> {
    name: &'static str,
    rules: Vec<Rule<E, T>>,
    fallback: Option<(RuleId, T)>,
}

impl<E, T: Copy> RuleSet<E, T> {
    pub fn new(name: &'static str, rules: Vec<Rule<E, T>>) -> Self {
        Self {
            name,
            rules,
            fallback: None,
        }
    }

    #[must_use]
    pub fn with_fallback(mut self, id: RuleId, value: T) -> Self {
        self.fallback = Some((id, value));
        self
    }

    /// The first matching rule's outcome, or `None` when nothing matched.
    pub fn first_match(&self, edge: &EdgeRecord, env: &E) -> Option<(RuleId, T)> {
        self.rules
            .iter()
            .find(|rule| (rule.matches)(edge, env))
            .map(|rule| (rule.id, rule.value))
    }

    /// The first matching rule's outcome, falling back to the catch-all.
    /// A cascade without a catch-all that matches nothing is an invariant
    /// violation and surfaces as [`Error::UnmatchedRule`].
    pub fn outcome(&self, edge: &EdgeRecord, env: &E) -> Result<(RuleId, T), Error> {
        self.first_match(edge, env)
            .or(self.fallback)
            .ok_or(Error::UnmatchedRule {
                table: self.name,
                edge: edge.id,
            })
    }

    /// Rule ids in priority order, for auditing the cascade.
    pub fn rule_ids(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.rules.iter().map(|rule| rule.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EdgeId;

    fn table() -> RuleSet<(), u8> {
        RuleSet::new(
            "test",
            vec![
                Rule {
                    id: RuleId("t1"),
                    value: 1,
                    matches: |edge, _| edge.tag_is("kind", "both") || edge.tag_is("kind", "first"),
                },
                Rule {
                    id: RuleId("t2"),
                    value: 2,
                    matches: |edge, _| edge.tag_is("kind", "both") || edge.tag_is("kind", "second"),
                },
            ],
        )
    }

    #[test]
    fn earlier_rule_wins_when_both_match() {
        let edge = EdgeRecord::new(1).with_tag("kind", "both");
        let (id, value) = table().first_match(&edge, &()).unwrap();
        assert_eq!(id, RuleId("t1"));
        assert_eq!(value, 1);
    }

    #[test]
    fn falls_through_to_later_rule() {
        let edge = EdgeRecord::new(1).with_tag("kind", "second");
        let (id, _) = table().first_match(&edge, &()).unwrap();
        assert_eq!(id, RuleId("t2"));
    }

    #[test]
    fn unmatched_without_fallback_is_an_error() {
        let edge = EdgeRecord::new(9).with_tag("kind", "neither");
        let err = table().outcome(&edge, &()).unwrap_err();
        assert!(matches!(err, Error::UnmatchedRule { edge: EdgeId(9), .. }));
    }

    #[test]
    fn fallback_applies_when_nothing_matches() {
        let edge = EdgeRecord::new(9);
        let table = table().with_fallback(RuleId("t0"), 0);
        let (id, value) = table.outcome(&edge, &()).unwrap();
        assert_eq!(id, RuleId("t0"));
        assert_eq!(value, 0);
    }

    #[test]
    fn rule_ids_report_priority_order() {
        let ids: Vec<_> = table().rule_ids().map(|r| r.0).collect();
        assert_eq!(ids, vec!["t1", "t2"]);
    }
}
