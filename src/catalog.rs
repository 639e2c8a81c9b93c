//! The fixed quote dataset and category filtering.
//!
//! The dataset is a compile-time constant: 25 quotes, five per category,
//! with stable ids 1–25. Category tags form a closed set, so an unknown
//! tag is rejected at the parse boundary (CLI/config) and can never reach
//! the selection or favorites logic.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Stable identifier of a quote. Persisted favorites reference these.
pub type QuoteId = u32;

/// An immutable quote record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub text: &'static str,
    pub author: &'static str,
    pub category: Category,
}

/// Topical tag of a quote. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Success,
    Love,
    Coding,
    Life,
    Motivation,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Success,
        Category::Love,
        Category::Coding,
        Category::Life,
        Category::Motivation,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Category::Success => "success",
            Category::Love => "love",
            Category::Coding => "coding",
            Category::Life => "life",
            Category::Motivation => "motivation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Active category filter: a single category, or the `all` sentinel
/// meaning no filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Every selectable filter, in tab-bar order.
    pub const CHOICES: [CategoryFilter; 6] = [
        CategoryFilter::All,
        CategoryFilter::Only(Category::Success),
        CategoryFilter::Only(Category::Love),
        CategoryFilter::Only(Category::Coding),
        CategoryFilter::Only(Category::Life),
        CategoryFilter::Only(Category::Motivation),
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.tag(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(only) => *only == category,
        }
    }

    /// The next filter in tab-bar order, wrapping around.
    pub fn next(self) -> Self {
        let index = self.choice_index();
        Self::CHOICES[(index + 1) % Self::CHOICES.len()]
    }

    /// The previous filter in tab-bar order, wrapping around.
    pub fn prev(self) -> Self {
        let index = self.choice_index();
        Self::CHOICES[(index + Self::CHOICES.len() - 1) % Self::CHOICES.len()]
    }

    fn choice_index(self) -> usize {
        Self::CHOICES
            .iter()
            .position(|choice| *choice == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unknown category tag at the parse boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized category '{0}' (expected one of: all, success, love, coding, life, motivation)")]
pub struct ParseCategoryError(pub String);

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CategoryFilter::CHOICES
            .iter()
            .find(|choice| choice.tag() == s)
            .copied()
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// A read-only, ordered collection of quotes.
pub struct Catalog {
    quotes: &'static [Quote],
}

static BUILTIN: Catalog = Catalog { quotes: &QUOTES };

impl Catalog {
    pub const fn new(quotes: &'static [Quote]) -> Self {
        Self { quotes }
    }

    /// The fixed built-in dataset.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Full ordered list; identical on every call.
    pub fn all(&self) -> &[Quote] {
        self.quotes
    }

    /// Quotes matching the filter, preserving original order.
    /// `All` returns the full list unfiltered.
    pub fn by_category(&self, filter: CategoryFilter) -> Vec<&Quote> {
        self.quotes
            .iter()
            .filter(|quote| filter.matches(quote.category))
            .collect()
    }

    pub fn find(&self, id: QuoteId) -> Option<&Quote> {
        self.quotes.iter().find(|quote| quote.id == id)
    }
}

const fn quote(
    id: QuoteId,
    text: &'static str,
    author: &'static str,
    category: Category,
) -> Quote {
    Quote {
        id,
        text,
        author,
        category,
    }
}

static QUOTES: [Quote; 25] = [
    quote(1, "The only way to do great work is to love what you do.", "Steve Jobs", Category::Success),
    quote(2, "Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill", Category::Success),
    quote(3, "Success usually comes to those who are too busy to be looking for it.", "Henry David Thoreau", Category::Success),
    quote(4, "Don't be afraid to give up the good to go for the great.", "John D. Rockefeller", Category::Success),
    quote(5, "I find that the harder I work, the more luck I seem to have.", "Thomas Jefferson", Category::Success),
    quote(6, "The best thing to hold onto in life is each other.", "Audrey Hepburn", Category::Love),
    quote(7, "Love is composed of a single soul inhabiting two bodies.", "Aristotle", Category::Love),
    quote(8, "Where there is love there is life.", "Mahatma Gandhi", Category::Love),
    quote(9, "The greatest happiness of life is the conviction that we are loved.", "Victor Hugo", Category::Love),
    quote(10, "To love and be loved is to feel the sun from both sides.", "David Viscott", Category::Love),
    quote(11, "First, solve the problem. Then, write the code.", "John Johnson", Category::Coding),
    quote(12, "Code is like humor. When you have to explain it, it's bad.", "Cory House", Category::Coding),
    quote(13, "Any fool can write code that a computer can understand. Good programmers write code that humans can understand.", "Martin Fowler", Category::Coding),
    quote(14, "Experience is the name everyone gives to their mistakes.", "Oscar Wilde", Category::Coding),
    quote(15, "The most disastrous thing that you can ever learn is your first programming language.", "Alan Kay", Category::Coding),
    quote(16, "In the end, it's not the years in your life that count. It's the life in your years.", "Abraham Lincoln", Category::Life),
    quote(17, "Life is what happens when you're busy making other plans.", "John Lennon", Category::Life),
    quote(18, "The purpose of our lives is to be happy.", "Dalai Lama", Category::Life),
    quote(19, "Life is really simple, but we insist on making it complicated.", "Confucius", Category::Life),
    quote(20, "Get busy living or get busy dying.", "Stephen King", Category::Life),
    quote(21, "The only impossible journey is the one you never begin.", "Tony Robbins", Category::Motivation),
    quote(22, "Everything you've ever wanted is on the other side of fear.", "George Addair", Category::Motivation),
    quote(23, "Believe you can and you're halfway there.", "Theodore Roosevelt", Category::Motivation),
    quote(24, "The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt", Category::Motivation),
    quote(25, "It does not matter how slowly you go as long as you do not stop.", "Confucius", Category::Motivation),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_25_quotes_with_unique_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.all().len(), 25);
        for (index, quote) in catalog.all().iter().enumerate() {
            assert_eq!(quote.id, index as QuoteId + 1);
        }
    }

    #[test]
    fn each_category_has_five_quotes() {
        let catalog = Catalog::builtin();
        for category in Category::ALL {
            let pool = catalog.by_category(CategoryFilter::Only(category));
            assert_eq!(pool.len(), 5, "category {category}");
            assert!(pool.iter().all(|quote| quote.category == category));
        }
    }

    #[test]
    fn all_filter_returns_full_list_in_order() {
        let catalog = Catalog::builtin();
        let pool = catalog.by_category(CategoryFilter::All);
        assert_eq!(pool.len(), 25);
        assert_eq!(pool[0].id, 1);
        assert_eq!(pool[24].id, 25);
    }

    #[test]
    fn find_resolves_known_and_unknown_ids() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find(12).map(|q| q.author), Some("Cory House"));
        assert!(catalog.find(999).is_none());
    }

    #[test]
    fn tags_round_trip_through_parse() {
        for choice in CategoryFilter::CHOICES {
            let parsed: CategoryFilter = choice.tag().parse().unwrap();
            assert_eq!(parsed, choice);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_with_recognized_set() {
        let err = "pizza".parse::<CategoryFilter>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("'pizza'"));
        assert!(message.contains("motivation"));
    }

    #[test]
    fn cycling_covers_every_filter_and_wraps() {
        let mut filter = CategoryFilter::All;
        let mut seen = Vec::new();
        for _ in 0..CategoryFilter::CHOICES.len() {
            seen.push(filter);
            filter = filter.next();
        }
        assert_eq!(filter, CategoryFilter::All);
        assert_eq!(seen, CategoryFilter::CHOICES);
        assert_eq!(CategoryFilter::All.prev(), CategoryFilter::Only(Category::Motivation));
    }
}
