//! Survey categories and the fixed Likert rating tables.
//!
//! Each category carries a declarative ordered list of (phrase, score) pairs.
//! Matching is substring containment on the trimmed response, and the first
//! matching entry wins, so the order of the tables is load-bearing: a response
//! containing more than one phrase resolves to the earliest entry. The
//! nervousness and wtc tables intentionally share phrase strings; the
//! category is always supplied by the caller, so a response is never checked
//! against the wrong table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Confidence,
    Nervousness,
    Wtc,
}

pub const ALL_CATEGORIES: [Category; 3] =
    [Category::Confidence, Category::Nervousness, Category::Wtc];

#[derive(Debug, Clone, Copy)]
pub struct RatingEntry {
    pub phrase: &'static str,
    pub score: i64,
}

const CONFIDENCE_RATINGS: &[RatingEntry] = &[
    RatingEntry { phrase: "絶対できない", score: 0 },
    RatingEntry { phrase: "あまりできない", score: 1 },
    RatingEntry { phrase: "場合によりけり", score: 2 },
    RatingEntry { phrase: "多分できる", score: 3 },
    RatingEntry { phrase: "機会があればやってみたい", score: 4 },
    RatingEntry { phrase: "簡単にできる", score: 5 },
];

const NERVOUSNESS_RATINGS: &[RatingEntry] = &[
    RatingEntry { phrase: "すごく緊張する", score: 0 },
    RatingEntry { phrase: "できれば避けたい", score: 1 },
    RatingEntry { phrase: "かなり緊張する", score: 2 },
    RatingEntry { phrase: "すこしは緊張する", score: 3 },
    RatingEntry { phrase: "緊張しない", score: 4 },
];

const WTC_RATINGS: &[RatingEntry] = &[
    RatingEntry { phrase: "できれば避けたい", score: 0 },
    RatingEntry { phrase: "機会があればやってみたい", score: 1 },
    RatingEntry { phrase: "多分できる", score: 2 },
    RatingEntry { phrase: "簡単にできる", score: 3 },
];

impl Category {
    /// Marker substring used to select this category's columns from a table.
    /// Case-sensitive containment on the original, untrimmed header name.
    pub fn column_marker(self) -> &'static str {
        match self {
            Category::Confidence => "自信",
            Category::Nervousness => "緊張",
            Category::Wtc => "やる気",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Confidence => "Confidence",
            Category::Nervousness => "Nervousness",
            Category::Wtc => "WtC",
        }
    }

    pub fn ratings(self) -> &'static [RatingEntry] {
        match self {
            Category::Confidence => CONFIDENCE_RATINGS,
            Category::Nervousness => NERVOUSNESS_RATINGS,
            Category::Wtc => WTC_RATINGS,
        }
    }
}

/// Map a raw response cell to this category's ordinal score.
///
/// The cell is trimmed before matching; an empty cell or one containing none
/// of the category's phrases yields `None`, which callers must propagate as a
/// missing value rather than zero.
pub fn map_rating(raw: &str, category: Category) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    for entry in category.ratings() {
        if trimmed.contains(entry.phrase) {
            return Some(entry.score);
        }
    }
    None
}
