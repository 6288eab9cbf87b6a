//! Response selector: maps the latest user message to one canned paragraph.
//!
//! Rules are an ordered table of (topic, keywords, response). The message is
//! lower-cased and tested against each rule in order; the first rule with a
//! keyword contained anywhere in the message wins. No rule matching means the
//! fallback paragraph.
//!
//! Containment is plain substring search with no word boundaries, so "remove"
//! selects the moving-out topic and "parent" selects rent payment. Known and
//! kept as-is.

use crate::chat::responses::{
    COURT_PREPARATION_RESPONSE, FALLBACK_RESPONSE, LEGAL_HELP_RESPONSE, MOVING_OUT_RESPONSE,
    RENT_PAYMENT_RESPONSE,
};

/// Which canned answer was chosen. Logged per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    RentPayment,
    CourtPreparation,
    MovingOut,
    LegalHelp,
    General,
}

impl Topic {
    /// Log tag for the topic.
    pub fn as_str(self) -> &'static str {
        match self {
            Topic::RentPayment => "rent_payment",
            Topic::CourtPreparation => "court_preparation",
            Topic::MovingOut => "moving_out",
            Topic::LegalHelp => "legal_help",
            Topic::General => "general",
        }
    }
}

/// One row of the dispatch table. Keywords must be lower-case.
#[derive(Debug, Clone, Copy)]
pub struct ResponseRule {
    pub topic: Topic,
    pub keywords: &'static [&'static str],
    pub response: &'static str,
}

impl ResponseRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Default rule table, highest precedence first.
pub const DEFAULT_RULES: &[ResponseRule] = &[
    ResponseRule {
        topic: Topic::RentPayment,
        keywords: &["pay", "payment", "rent"],
        response: RENT_PAYMENT_RESPONSE,
    },
    ResponseRule {
        topic: Topic::CourtPreparation,
        keywords: &["court", "hearing"],
        response: COURT_PREPARATION_RESPONSE,
    },
    ResponseRule {
        topic: Topic::MovingOut,
        keywords: &["move", "leave"],
        response: MOVING_OUT_RESPONSE,
    },
    ResponseRule {
        topic: Topic::LegalHelp,
        keywords: &["lawyer", "attorney", "legal aid"],
        response: LEGAL_HELP_RESPONSE,
    },
];

/// The selected reply along with the topic that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub topic: Topic,
    pub response: &'static str,
}

#[derive(Debug, Clone)]
pub struct ResponseSelector {
    rules: &'static [ResponseRule],
    fallback: &'static str,
}

impl Default for ResponseSelector {
    fn default() -> Self {
        Self::new(DEFAULT_RULES, FALLBACK_RESPONSE)
    }
}

impl ResponseSelector {
    pub fn new(rules: &'static [ResponseRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    pub fn select(&self, message: &str) -> Selection {
        let lowered = message.to_lowercase();

        self.rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| Selection {
                topic: rule.topic,
                response: rule.response,
            })
            .unwrap_or(Selection {
                topic: Topic::General,
                response: self.fallback,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn select(message: &str) -> Selection {
        ResponseSelector::default().select(message)
    }

    #[test]
    fn test_each_keyword_selects_its_topic() {
        let cases = [
            ("pay", Topic::RentPayment),
            ("payment", Topic::RentPayment),
            ("rent", Topic::RentPayment),
            ("court", Topic::CourtPreparation),
            ("hearing", Topic::CourtPreparation),
            ("move", Topic::MovingOut),
            ("leave", Topic::MovingOut),
            ("lawyer", Topic::LegalHelp),
            ("attorney", Topic::LegalHelp),
            ("legal aid", Topic::LegalHelp),
        ];
        for (message, topic) in cases {
            assert_eq!(select(message).topic, topic, "message: {message}");
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        assert_eq!(select("WHEN IS MY HEARING").topic, Topic::CourtPreparation);
        assert_eq!(select("Legal Aid near me").topic, Topic::LegalHelp);
    }

    #[test]
    fn test_rent_beats_court() {
        let selection = select("I owe rent and have a court date");
        assert_eq!(selection.topic, Topic::RentPayment);
        assert_eq!(selection.response, RENT_PAYMENT_RESPONSE);
    }

    #[test]
    fn test_court_beats_moving_out() {
        assert_eq!(
            select("Should I leave before the court date?").topic,
            Topic::CourtPreparation
        );
    }

    #[test]
    fn test_moving_out_beats_legal_help() {
        assert_eq!(
            select("My attorney says I should move").topic,
            Topic::MovingOut
        );
    }

    #[test]
    fn test_free_lawyer_question() {
        let selection = select("Can I get a free lawyer?");
        assert_eq!(selection.topic, Topic::LegalHelp);
        assert!(selection
            .response
            .starts_with("Getting legal help is one of the best steps you can take"));
    }

    #[test]
    fn test_empty_message_falls_back() {
        let selection = select("");
        assert_eq!(selection.topic, Topic::General);
        assert_eq!(selection.response, FALLBACK_RESPONSE);
    }

    #[test]
    fn test_substring_matches_are_not_word_bounded() {
        // "remove" and "leaves" hit the moving-out keywords; "parent" contains "rent".
        assert_eq!(select("how do I remove a stain").topic, Topic::MovingOut);
        assert_eq!(select("the leaves fell").topic, Topic::MovingOut);
        assert_eq!(select("my parent called").topic, Topic::RentPayment);
    }

    #[test]
    fn test_topic_log_tags() {
        let tags: Vec<&str> = [
            Topic::RentPayment,
            Topic::CourtPreparation,
            Topic::MovingOut,
            Topic::LegalHelp,
            Topic::General,
        ]
        .into_iter()
        .map(Topic::as_str)
        .collect();
        assert_eq!(
            tags,
            vec!["rent_payment", "court_preparation", "moving_out", "legal_help", "general"]
        );
        assert_eq!(select("my hearing").topic.as_str(), "court_preparation");
    }

    #[test]
    fn test_custom_rule_table() {
        const RULES: &[ResponseRule] = &[ResponseRule {
            topic: Topic::LegalHelp,
            keywords: &["help"],
            response: "custom",
        }];
        let selector = ResponseSelector::new(RULES, "nothing");
        assert_eq!(selector.select("HELP").response, "custom");
        assert_eq!(selector.select("rent").response, "nothing");
    }

    fn no_keyword_text() -> impl Strategy<Value = String> {
        // Letters that cannot spell any keyword: every keyword needs one of a, e, o, u.
        "[bcdfghijklmnqrstvwxyz ?!.,0-9]{0,80}"
    }

    proptest! {
        #[test]
        fn prop_rent_anywhere_selects_rent_payment(
            prefix in ".{0,40}",
            suffix in ".{0,40}",
            upper in any::<bool>(),
        ) {
            let keyword = if upper { "RENT" } else { "Rent" };
            let message = format!("{prefix}{keyword}{suffix}");
            prop_assert_eq!(select(&message).topic, Topic::RentPayment);
        }

        #[test]
        fn prop_no_keyword_returns_fallback_verbatim(message in no_keyword_text()) {
            prop_assert_eq!(select(&message).response, FALLBACK_RESPONSE);
        }

        #[test]
        fn prop_selection_is_deterministic(message in ".{0,120}") {
            let selector = ResponseSelector::default();
            prop_assert_eq!(selector.select(&message), selector.select(&message));
        }
    }
}
