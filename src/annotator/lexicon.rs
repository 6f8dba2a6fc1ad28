/// Coarse part-of-speech tags assigned by the rule-based tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Determiner,
    Preposition,
    Conjunction,
    Pronoun,
    Auxiliary,
    Verb,
    Adverb,
    Adjective,
    Number,
    Noun,
    ProperNoun,
    Punctuation,
}

impl PosTag {
    pub fn is_noun(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Pre-nominal modifiers allowed inside a noun chunk.
    pub fn is_modifier(&self) -> bool {
        matches!(self, PosTag::Adjective | PosTag::Number)
    }
}

/// Tag a single word given the tag of the word before it.
///
/// Closed-class words are looked up first; open-class words fall back to
/// suffix heuristics and finally to noun. `sentence_start` suppresses the
/// capitalisation cue for proper nouns.
pub fn tag_word(word: &str, prev: Option<PosTag>, sentence_start: bool) -> PosTag {
    if !word.chars().any(char::is_alphanumeric) {
        return PosTag::Punctuation;
    }
    if is_numeric(word) {
        return PosTag::Number;
    }

    let lower = word.to_lowercase();
    if let Some(tag) = closed_class(&lower) {
        return tag;
    }

    // A content word right after an auxiliary ("may be terminated", "shall keep")
    if matches!(prev, Some(PosTag::Auxiliary)) && !starts_uppercase(word) {
        return PosTag::Verb;
    }

    if !sentence_start && starts_uppercase(word) {
        return PosTag::ProperNoun;
    }

    open_class_by_suffix(&lower, prev)
}

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().map_or(false, char::is_uppercase)
}

fn is_numeric(word: &str) -> bool {
    let digits = word.chars().any(|c| c.is_ascii_digit())
        && word
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/' | '-'));
    digits || NUMBER_WORDS.contains(&word.to_lowercase().as_str())
}

const NUMBER_WORDS: &[&str] = &[
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
    "twelve", "fifteen", "twenty", "thirty", "forty", "fifty", "sixty", "ninety", "hundred",
    "thousand", "million", "billion",
];

fn closed_class(lower: &str) -> Option<PosTag> {
    let tag = match lower {
        "the" | "a" | "an" | "this" | "that" | "these" | "those" | "any" | "all" | "each"
        | "every" | "either" | "neither" | "no" | "such" | "some" | "its" | "their" | "his"
        | "her" | "our" | "your" | "my" | "another" | "both" => PosTag::Determiner,

        "of" | "in" | "on" | "at" | "by" | "for" | "with" | "upon" | "to" | "from" | "under"
        | "within" | "without" | "into" | "over" | "between" | "after" | "before" | "during"
        | "against" | "through" | "per" | "as" | "about" | "among" | "throughout" | "until"
        | "prior" | "pursuant" | "except" | "notwithstanding" | "regarding" | "via" => {
            PosTag::Preposition
        }

        "and" | "or" | "but" | "nor" | "if" | "unless" | "whether" | "because" | "while"
        | "although" | "than" | "so" | "where" | "when" => PosTag::Conjunction,

        "it" | "they" | "he" | "she" | "we" | "you" | "i" | "which" | "who" | "whom" | "whose"
        | "them" | "him" | "us" | "me" | "itself" | "themselves" | "hereof" | "hereto"
        | "hereunder" | "herein" | "thereof" | "therein" | "thereto" => PosTag::Pronoun,

        "shall" | "may" | "will" | "must" | "can" | "could" | "would" | "should" | "might"
        | "be" | "is" | "are" | "was" | "were" | "been" | "being" | "have" | "has" | "had"
        | "do" | "does" | "did" => PosTag::Auxiliary,

        "not" | "also" | "only" | "then" | "thereafter" | "immediately" | "hereby" | "very"
        | "there" | "here" | "otherwise" | "however" => PosTag::Adverb,

        _ => return None,
    };
    Some(tag)
}

fn open_class_by_suffix(lower: &str, prev: Option<PosTag>) -> PosTag {
    if lower.ends_with("ly") && !LY_NOUNS.contains(&lower) {
        return PosTag::Adverb;
    }
    if lower.ends_with("ed") && lower.len() > 4 {
        // "the terminated agreement" vs "the Company terminated"
        return if matches!(prev, Some(PosTag::Determiner)) {
            PosTag::Adjective
        } else {
            PosTag::Verb
        };
    }
    if lower.ends_with("ing") && lower.len() > 5 {
        return PosTag::Adjective;
    }

    let adjective_suffix = ["al", "ive", "ous", "ful", "able", "ible", "ic", "less", "ant"]
        .iter()
        .any(|suffix| lower.ends_with(suffix));
    if adjective_suffix && lower.len() > 4 && !SUFFIX_NOUNS.contains(&lower) {
        return PosTag::Adjective;
    }

    PosTag::Noun
}

/// Words ending in "-ly" that are not adverbs.
const LY_NOUNS: &[&str] = &[
    "supply", "reply", "family", "assembly", "apply", "comply", "rely", "july", "italy",
    "anomaly", "monopoly",
];

/// Nouns that would otherwise be caught by an adjective suffix.
const SUFFIX_NOUNS: &[&str] = &[
    "approval", "renewal", "proposal", "removal", "referral", "withdrawal", "disposal",
    "rental", "arrival", "trial", "principal", "capital", "individual", "incentive",
    "representative", "executive", "objective", "directive", "initiative", "receivable",
    "payable", "tenant", "applicant", "consultant", "covenant", "grant", "warrant",
    "defendant", "plaintiff", "merchant", "servant", "participant", "republic", "topic",
    "traffic",
];

/// Lowercased tokens after which a period does not end a sentence.
pub const ABBREVIATIONS: &[&str] = &[
    "dr", "mr", "mrs", "ms", "prof", "sr", "jr", "inc", "ltd", "corp", "co", "llc", "e.g",
    "i.e", "vs", "etc", "approx", "u.s", "u.k", "p.m", "a.m", "st", "ave", "dept", "fig",
    "no", "sec", "art", "para", "cf",
];
