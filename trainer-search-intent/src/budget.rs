//! Ordered rules that pull a maximum hourly rate out of a query.
//!
//! Rules with a literal amount come before heuristic words, so "cheap, under
//! $40" resolves to 40 rather than the fixed value for "cheap". Heuristic
//! words sit on ASCII word boundaries: accented letters next to them do not
//! count as part of the word.

use std::sync::LazyLock;

use regex::Regex;

/// How a matching rule turns into an amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetAmount {
    /// The first capture group holds the digits.
    Captured,
    /// The rule implies a fixed amount.
    Fixed(u32),
}

/// One budget pattern and its extractor.
#[derive(Debug)]
pub struct BudgetRule {
    pattern: Regex,
    amount: BudgetAmount,
}

impl BudgetRule {
    /// The compiled pattern.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// How the amount is derived.
    #[must_use]
    pub const fn amount(&self) -> BudgetAmount {
        self.amount
    }

    /// Apply the rule to `text`, returning the amount when it matches.
    ///
    /// Digit runs too large for `u32` saturate to `u32::MAX`.
    #[must_use]
    pub fn apply(&self, text: &str) -> Option<u32> {
        match self.amount {
            BudgetAmount::Fixed(value) => self.pattern.is_match(text).then_some(value),
            BudgetAmount::Captured => {
                let digits = self.pattern.captures(text)?.get(1)?.as_str();
                Some(digits.parse().unwrap_or(u32::MAX))
            }
        }
    }
}

const RULE_SOURCES: &[(&str, BudgetAmount)] = &[
    (r"under\s*\$?\s*([0-9]+)", BudgetAmount::Captured),
    (r"less than\s*\$?\s*([0-9]+)", BudgetAmount::Captured),
    (r"below\s*\$?\s*([0-9]+)", BudgetAmount::Captured),
    (r"max\s*\$?\s*([0-9]+)", BudgetAmount::Captured),
    (r"budget\s*(?:of\s*)?\$?\s*([0-9]+)", BudgetAmount::Captured),
    (
        r"\$([0-9]+)\s*(?:per hour|/hr|/hour|an hour)",
        BudgetAmount::Captured,
    ),
    (
        r"([0-9]+)\s*(?:dollars|usd)\s*(?:per hour|/hr|an hour)",
        BudgetAmount::Captured,
    ),
    (r"(?-u:\b)cheap(?-u:\b)", BudgetAmount::Fixed(50)),
    (r"(?-u:\b)affordable(?-u:\b)", BudgetAmount::Fixed(75)),
];

static RULES: LazyLock<Vec<BudgetRule>> = LazyLock::new(|| {
    RULE_SOURCES
        .iter()
        .map(|&(source, amount)| BudgetRule {
            pattern: compile(source),
            amount,
        })
        .collect()
});

#[expect(
    clippy::expect_used,
    reason = "rule sources are constants exercised by the unit tests"
)]
fn compile(source: &str) -> Regex {
    Regex::new(&format!("(?i){source}")).expect("budget pattern should compile")
}

/// Budget rules in priority order.
#[must_use]
pub fn rules() -> &'static [BudgetRule] {
    &RULES
}

/// Return the amount from the first rule that matches `text`.
///
/// # Examples
/// ```
/// use trainer_search_intent::extract_max_rate;
///
/// assert_eq!(extract_max_rate("cheap trainer under $40"), Some(40));
/// assert_eq!(extract_max_rate("affordable coach"), Some(75));
/// assert_eq!(extract_max_rate("any coach"), None);
/// ```
#[must_use]
pub fn extract_max_rate(text: &str) -> Option<u32> {
    rules().iter().find_map(|rule| rule.apply(text))
}
