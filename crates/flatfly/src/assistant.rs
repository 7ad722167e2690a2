//! Keyword help responder.
//!
//! A static lookup table, not a model: the first topic whose keyword
//! appears in the lowercased message wins, checked in a fixed priority
//! order. Messages matching nothing get the generic fallback.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpTopic {
    Housing,
    Documents,
    University,
    Career,
    Greeting,
    Gratitude,
}

impl HelpTopic {
    /// Priority order for classification. Topical matches outrank the
    /// greeting so "hi, about housing" lands on housing advice.
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Housing,
            Self::Documents,
            Self::University,
            Self::Career,
            Self::Greeting,
            Self::Gratitude,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Documents => "Documents",
            Self::University => "University",
            Self::Career => "Career",
            Self::Greeting => "Greeting",
            Self::Gratitude => "Gratitude",
        }
    }

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Housing => &["housing", "apartment", "house"],
            Self::Documents => &["document", "visa", "passport"],
            Self::University => &["university", "study", "course"],
            Self::Career => &["job", "work", "career"],
            Self::Greeting => &["hello", "hi", "hey"],
            Self::Gratitude => &["thank"],
        }
    }

    pub const fn canned_reply(self) -> &'static str {
        match self {
            Self::Housing => {
                "I can help you with housing! Here are some tips:\n\n🏠 Use filters to narrow down your search\n📍 Check the location and transport connections\n💰 Consider all costs (rent, utilities, deposit)\n📄 Prepare your documents in advance\n\nWould you like specific advice on any of these areas?"
            }
            Self::Documents => {
                "Document assistance is one of my specialties! I can help with:\n\n📄 University enrollment documents\n🛂 Visa applications and renewals\n🏦 Bank account requirements\n🏥 Health insurance documentation\n\nWhat specific documents do you need help with?"
            }
            Self::University => {
                "University life guidance coming right up! 🎓\n\n📚 Course registration and schedules\n👥 Student organizations and clubs\n📖 Library and study resources\n🎯 Academic support services\n\nWhat aspect of university life interests you most?"
            }
            Self::Career => {
                "Great question about work opportunities! 💼\n\n🔍 Job search platforms and websites\n📝 CV/Resume optimization\n🤝 Networking opportunities\n⚖️ Work permit requirements\n\nAre you looking for part-time work or career opportunities?"
            }
            Self::Greeting => {
                "Hello! 👋 Nice to meet you! I'm here to help make your experience easier. Whether you need help with housing, documents, university life, or anything else, just ask away!"
            }
            Self::Gratitude => {
                "You're very welcome! 😊 I'm always here to help. Don't hesitate to ask if you have more questions!"
            }
        }
    }
}

pub const FALLBACK_REPLY: &str = "That's an interesting question! While I try to help with everything, I'm especially good at:\n\n🏠 Housing assistance\n📄 Document guidance\n🎓 University support\n💼 Career advice\n\nCould you tell me more about what specific help you need?";

pub fn classify(message: &str) -> Option<HelpTopic> {
    let lowered = message.to_lowercase();
    HelpTopic::ordered()
        .into_iter()
        .find(|topic| topic.keywords().iter().any(|keyword| lowered.contains(keyword)))
}

pub fn reply(message: &str) -> &'static str {
    classify(message)
        .map(HelpTopic::canned_reply)
        .unwrap_or(FALLBACK_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_topics_by_keyword() {
        assert_eq!(classify("Where do I find an apartment?"), Some(HelpTopic::Housing));
        assert_eq!(classify("My VISA expires soon"), Some(HelpTopic::Documents));
        assert_eq!(classify("course registration help"), Some(HelpTopic::University));
        assert_eq!(classify("part-time job hunt"), Some(HelpTopic::Career));
        assert_eq!(classify("hello there"), Some(HelpTopic::Greeting));
        assert_eq!(classify("thanks a lot"), Some(HelpTopic::Gratitude));
    }

    #[test]
    fn topical_keywords_outrank_the_greeting() {
        assert_eq!(classify("hi, I need housing advice"), Some(HelpTopic::Housing));
    }

    #[test]
    fn unmatched_messages_fall_back() {
        assert_eq!(classify("????"), None);
        assert_eq!(reply("????"), FALLBACK_REPLY);
    }

    #[test]
    fn replies_are_the_canned_table_entries() {
        assert_eq!(reply("apartment hunting"), HelpTopic::Housing.canned_reply());
        assert!(reply("apartment hunting").contains("Use filters"));
    }
}
