//! Expense category classification.
//!
//! Every keyword of a category found anywhere in the lower-cased text (plain
//! substring match) adds 10 to that category. The strictly highest score
//! wins, ties go to the category declared first, and a receipt with no hits
//! at all is `Miscellaneous`.

use crate::engine::NormalizedText;
use serde::{Deserialize, Serialize};
use std::fmt;

const KEYWORD_WEIGHT: u32 = 10;

/// The fixed expense taxonomy, in declaration (tie-break) order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Fuel,
    Transportation,
    Accommodation,
    Meals,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Communication,
    Entertainment,
    Medical,
    Parking,
    #[default]
    Miscellaneous,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Fuel,
        Category::Transportation,
        Category::Accommodation,
        Category::Meals,
        Category::OfficeSupplies,
        Category::Communication,
        Category::Entertainment,
        Category::Medical,
        Category::Parking,
        Category::Miscellaneous,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Fuel => "Fuel",
            Category::Transportation => "Transportation",
            Category::Accommodation => "Accommodation",
            Category::Meals => "Meals",
            Category::OfficeSupplies => "Office Supplies",
            Category::Communication => "Communication",
            Category::Entertainment => "Entertainment",
            Category::Medical => "Medical",
            Category::Parking => "Parking",
            Category::Miscellaneous => "Miscellaneous",
        }
    }

    /// Substrings that count towards this category.
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Category::Fuel => &[
                "fuel",
                "petrol",
                "diesel",
                "gas",
                "petroleum",
                "hp",
                "iocl",
                "bpcl",
                "shell",
                "essar",
                "reliance petroleum",
                "nayara",
            ],
            Category::Transportation => &[
                "uber", "ola", "taxi", "cab", "transport", "bus", "train", "metro", "railway", "auto", "rickshaw",
                "rapido", "toll",
            ],
            Category::Accommodation => &[
                "hotel",
                "accommodation",
                "lodge",
                "resort",
                "guest house",
                "inn",
                "motel",
                "hostel",
                "airbnb",
                "oyo",
            ],
            Category::Meals => &[
                "restaurant",
                "food",
                "cafe",
                "coffee",
                "meal",
                "dinner",
                "lunch",
                "breakfast",
                "zomato",
                "swiggy",
                "dominos",
                "mcdonald",
                "kfc",
                "pizza",
                "burger",
            ],
            Category::OfficeSupplies => {
                &["stationery", "office", "supplies", "paper", "pen", "printer", "toner", "cartridge"]
            }
            Category::Communication => {
                &["mobile", "phone", "internet", "broadband", "recharge", "data", "airtel", "jio", "vodafone", "vi"]
            }
            Category::Entertainment => {
                &["movie", "cinema", "theatre", "entertainment", "ticket", "show", "pvr", "inox"]
            }
            Category::Medical => {
                &["medical", "hospital", "pharmacy", "medicine", "doctor", "clinic", "apollo", "medplus"]
            }
            Category::Parking => &["parking", "park", "valet"],
            Category::Miscellaneous => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category keyword scores, in taxonomy order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryScores {
    scores: Vec<(Category, u32)>,
}

impl CategoryScores {
    pub fn score(&self, category: Category) -> u32 {
        self.scores.iter().find(|(c, _)| *c == category).map_or(0, |(_, s)| *s)
    }

    /// Strictly highest score, first declared on a tie, `Miscellaneous` when
    /// nothing scored.
    pub fn winner(&self) -> Category {
        let mut best = (Category::Miscellaneous, 0);
        for &(category, score) in &self.scores {
            if score > best.1 {
                best = (category, score);
            }
        }
        best.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        self.scores.iter().copied()
    }
}

/// Score every category against the text.
pub fn category_scores(text: &NormalizedText) -> CategoryScores {
    let haystack = text.full_text_lower();

    let scores = Category::ALL
        .iter()
        .map(|&category| {
            let hits = category.keywords().iter().filter(|k| haystack.contains(*k)).count() as u32;
            (category, hits * KEYWORD_WEIGHT)
        })
        .collect();

    CategoryScores { scores }
}

/// Classify the receipt into one category of the taxonomy.
pub fn classify(text: &NormalizedText) -> Category {
    category_scores(text).winner()
}
