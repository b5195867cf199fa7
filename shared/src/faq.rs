//! Rule-based irrigation FAQ matcher
//!
//! Answers chat questions from a fixed, ordered question → answer table.
//! Matching is a heuristic, not a ranking:
//!
//! 1. Containment pass: the question contains a table key, or a key
//!    contains the question.
//! 2. Keyword pass: any question word longer than three characters occurs
//!    inside a key.
//!
//! Within each pass the first entry in table order wins. The keyword pass
//! can match unrelated entries that merely share a word; it only runs when
//! no entry matched by containment.

use serde::Serialize;

/// Reply when nothing in the table matches
pub const FALLBACK_ANSWER: &str =
    "I don't have specific information on that. Perhaps try another gardening question about irrigation needs or methods?";

/// First message shown when the chat opens
pub const GREETING: &str = "Hello! I'm your garden irrigation assistant. How can I help you today?";

/// Suggested questions offered as one-tap buttons
pub const QUICK_QUESTIONS: [&str; 6] = [
    "What's the best irrigation method for roses?",
    "How much water do tomatoes need?",
    "Is irrigation needed if humidity is high?",
    "How to reduce evaporation loss?",
    "How often should I water succulents?",
    "Best time to water plants?",
];

const DEFAULT_ENTRIES: [(&str, &str); 9] = [
    (
        "What's the best irrigation method for roses?",
        "Roses generally do best with drip irrigation, which delivers water directly to the root zone. This helps prevent fungal diseases by keeping the foliage dry.",
    ),
    (
        "How much water do tomatoes need?",
        "Tomatoes require consistent moisture, typically 1-2 inches of water per week (about 2-3 liters per day). Water deeply a few times a week rather than frequent shallow watering.",
    ),
    (
        "Is irrigation needed if humidity is high?",
        "Even in high humidity, plants still need irrigation, though perhaps less. While evaporation slows in humid conditions, soil can still dry out. Monitor soil moisture rather than relying solely on humidity levels.",
    ),
    (
        "How to reduce evaporation loss?",
        "To reduce evaporation: 1) Use mulch around plants (2-3 inches), 2) Water in the early morning or evening, 3) Use drip irrigation instead of sprinklers, 4) Add organic matter to soil to improve water retention.",
    ),
    (
        "How often should I water succulents?",
        "Most succulents should be watered deeply but infrequently - typically every 2-3 weeks. Always allow the soil to dry completely between waterings to prevent root rot.",
    ),
    (
        "Best time to water plants?",
        "The best time to water plants is early morning, ideally between 5-9 AM. This allows water to reach the roots before evaporation becomes significant and gives foliage time to dry, reducing disease risk.",
    ),
    (
        "Signs of overwatering?",
        "Signs of overwatering include yellowing leaves, soft or mushy stems, wilting despite wet soil, fungus or mold growth, and a rotting smell from the soil. Allow soil to dry between waterings if you notice these symptoms.",
    ),
    (
        "Drought resistant plants?",
        "Good drought-resistant plants include lavender, rosemary, sage, succulents, cacti, yarrow, Russian sage, and ornamental grasses like blue fescue and feather reed grass.",
    ),
    (
        "How does soil type affect irrigation?",
        "Sandy soils drain quickly and need frequent, light watering. Clay soils hold water longer but need slow, infrequent watering to avoid waterlogging. Loamy soils have balanced drainage and are ideal for most plants.",
    ),
];

/// Minimum length (exclusive) of a word used for keyword matching
const MIN_KEYWORD_LEN: usize = 3;

/// One question/answer pair, keyed by the normalized question
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

/// Ordered question → answer table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqTable {
    entries: Vec<FaqEntry>,
}

impl Default for FaqTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_ENTRIES)
    }
}

impl FaqTable {
    /// Build a table, normalizing every question key
    pub fn from_pairs<I, Q, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: AsRef<str>,
        A: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .map(|(question, answer)| FaqEntry {
                question: normalize(question.as_ref()),
                answer: answer.into(),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Answer a question, falling back to [`FALLBACK_ANSWER`]
    pub fn answer(&self, question: &str) -> &str {
        answer(question, self)
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Find the entry answering `question`, if any
pub fn find_entry<'a>(question: &str, table: &'a FaqTable) -> Option<&'a FaqEntry> {
    let input = normalize(question);
    if input.is_empty() {
        return None;
    }

    let contained = table
        .entries
        .iter()
        .find(|entry| input.contains(&entry.question) || entry.question.contains(&input));
    if contained.is_some() {
        return contained;
    }

    let keywords: Vec<&str> = input
        .split(' ')
        .filter(|word| word.chars().count() > MIN_KEYWORD_LEN)
        .collect();
    table
        .entries
        .iter()
        .find(|entry| keywords.iter().any(|word| entry.question.contains(word)))
}

/// Answer a question from `table`, falling back to [`FALLBACK_ANSWER`]
pub fn answer<'a>(question: &str, table: &'a FaqTable) -> &'a str {
    find_entry(question, table)
        .map(|entry| entry.answer.as_str())
        .unwrap_or(FALLBACK_ANSWER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn answer_for(question: &str) -> String {
        let table = FaqTable::default();
        table
            .entries()
            .iter()
            .find(|e| e.question == question.to_lowercase())
            .map(|e| e.answer.clone())
            .unwrap()
    }

    #[test]
    fn test_exact_question_matches_its_answer() {
        let table = FaqTable::default();
        let reply = answer("how often should I water succulents?", &table);
        assert_eq!(reply, answer_for("How often should I water succulents?"));
        assert!(reply.starts_with("Most succulents"));
    }

    #[test]
    fn test_nonsense_falls_back() {
        let table = FaqTable::default();
        assert_eq!(answer("xyz nonsense", &table), FALLBACK_ANSWER);
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn test_empty_question_falls_back(#[case] question: &str) {
        assert_eq!(FaqTable::default().answer(question), FALLBACK_ANSWER);
    }

    #[test]
    fn test_partial_question_contained_in_key() {
        let table = FaqTable::default();
        let reply = answer("signs of overwatering", &table);
        assert!(reply.starts_with("Signs of overwatering"));
    }

    #[test]
    fn test_question_containing_key() {
        let table = FaqTable::default();
        let reply = answer("Hi there! Best time to water plants? Thanks", &table);
        assert!(reply.starts_with("The best time to water plants"));
    }

    #[test]
    fn test_first_match_in_table_order_wins() {
        let table = FaqTable::default();
        // "water" first appears in the tomatoes key
        let reply = answer("water", &table);
        assert!(reply.starts_with("Tomatoes"));

        let reply = answer("my mulch and evaporation worries", &table);
        assert!(reply.starts_with("To reduce evaporation"));
    }

    #[test]
    fn test_short_words_do_not_match() {
        let table = FaqTable::default();
        assert_eq!(answer("why do I", &table), FALLBACK_ANSWER);
    }

    #[test]
    fn test_custom_table_preserves_order() {
        let table = FaqTable::from_pairs([("Pruning roses?", "Prune in late winter."), ("Roses?", "Roses love sun.")]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0].question, "pruning roses?");
        assert_eq!(table.answer("roses"), "Prune in late winter.");
    }

    #[test]
    fn test_quick_questions_have_answers() {
        let table = FaqTable::default();
        for question in QUICK_QUESTIONS {
            let entry = find_entry(question, &table).unwrap();
            assert_eq!(entry.question, question.to_lowercase());
        }
    }
}
