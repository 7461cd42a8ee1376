//! Daily improvement task generation.
//!
//! Maps category scores to a short list of suggestions aimed at the weakest
//! categories. Selection is deterministic: the pick within a category's pool
//! rotates with the calendar date, so the same scores on the same day always
//! yield the same tasks.

use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::domain::models::{Category, CategoryScoreSet, TaskSuggestion};

/// Default number of suggestions per batch.
pub const DEFAULT_TASK_LIMIT: usize = 2;

/// Candidate task texts per category.
pub fn task_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Findability => &[
            "Write a unique meta description for your homepage that names your main service and location.",
            "Add descriptive alt text to the five most important images on your site.",
            "Submit an XML sitemap to Google Search Console and fix any reported crawl errors.",
        ],
        Category::TrustProof => &[
            "Add three recent customer testimonials with full names and photos to your homepage.",
            "Display your business address, phone number, and any certifications in the site footer.",
            "Link to your Google Business reviews from a prominent spot on the landing page.",
        ],
        Category::ConversionReadiness => &[
            "Place one clear call-to-action button above the fold on your homepage.",
            "Cut your contact form down to the three fields you actually need.",
            "Add a short 'what happens next' note beside your main call-to-action.",
        ],
        Category::MobileUsability => &[
            "Open your site on a phone and make every button large enough to tap with a thumb.",
            "Compress the largest images on your homepage to speed up mobile loading.",
            "Make your phone number a tap-to-call link on mobile.",
        ],
        Category::OfferClarity => &[
            "Rewrite your homepage headline to say exactly what you offer and who it is for.",
            "List your three core services with a one-sentence benefit for each.",
            "Add a starting price or pricing range so visitors can qualify themselves.",
        ],
    }
}

/// Day-dependent rotation offset: year + month + day.
pub fn date_seed(today: NaiveDate) -> usize {
    let sum = i64::from(today.year()) + i64::from(today.month()) + i64::from(today.day());
    usize::try_from(sum.unsigned_abs()).unwrap_or(0)
}

/// Deterministic task generator.
#[derive(Debug, Clone, Copy)]
pub struct TaskGenerator {
    limit: usize,
}

impl Default for TaskGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_LIMIT)
    }
}

impl TaskGenerator {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Suggest tasks for the weakest categories in `scores`.
    ///
    /// The weakest `limit` categories (stable by input order on ties) each
    /// claim a slot. A slot whose category has no task pool stays empty.
    /// Keys that differ only in case name the same category; the first one
    /// in input order wins.
    pub fn generate(
        &self,
        scores: Option<&CategoryScoreSet>,
        today: NaiveDate,
    ) -> Vec<TaskSuggestion> {
        let Some(scores) = scores.filter(|s| !s.is_empty()) else {
            return Vec::new();
        };

        let mut seen = HashSet::new();
        let mut ranked: Vec<(String, f64)> = scores
            .iter()
            .filter_map(|(key, score)| {
                let key = key.to_lowercase();
                if !seen.insert(key.clone()) {
                    return None;
                }
                let score = score.filter(|v| v.is_finite()).unwrap_or(0.0);
                Some((key, score))
            })
            .collect();
        ranked.sort_by(|a, b| a.1.total_cmp(&b.1));

        let seed = date_seed(today);

        ranked
            .iter()
            .take(self.limit)
            .enumerate()
            .filter_map(|(position, (key, _))| {
                let category = Category::from_str(key)?;
                let pool = task_pool(category);
                if pool.is_empty() {
                    return None;
                }
                let pick = (seed + position) % pool.len();
                Some(TaskSuggestion::new(pool[pick], category.as_str()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_scores() -> CategoryScoreSet {
        CategoryScoreSet::new()
            .with_score("findability", 10.0)
            .with_score("trustProof", 90.0)
            .with_score("conversionReadiness", 50.0)
            .with_score("mobileUsability", 95.0)
            .with_score("offerClarity", 99.0)
    }

    #[test]
    fn test_date_seed_sums_components() {
        assert_eq!(date_seed(day(2026, 10, 19)), 2026 + 10 + 19);
        assert_eq!(date_seed(day(2024, 1, 1)), 2026);
    }

    #[test]
    fn test_weakest_two_in_order() {
        let tasks = TaskGenerator::default().generate(Some(&sample_scores()), day(2026, 10, 19));

        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].category, "findability");
        assert_eq!(tasks[1].category, "conversionReadiness");
        assert!(task_pool(Category::Findability).contains(&tasks[0].text.as_str()));
        assert!(task_pool(Category::ConversionReadiness).contains(&tasks[1].text.as_str()));
    }

    #[test]
    fn test_pick_uses_seed_plus_position() {
        let today = day(2026, 10, 19);
        let seed = date_seed(today);
        let tasks = TaskGenerator::default().generate(Some(&sample_scores()), today);

        let findability = task_pool(Category::Findability);
        let conversion = task_pool(Category::ConversionReadiness);
        assert_eq!(tasks[0].text, findability[seed % findability.len()]);
        assert_eq!(tasks[1].text, conversion[(seed + 1) % conversion.len()]);
    }

    #[test]
    fn test_deterministic_for_same_day() {
        let generator = TaskGenerator::default();
        let today = day(2026, 3, 14);
        let first = generator.generate(Some(&sample_scores()), today);
        let second = generator.generate(Some(&sample_scores()), today);
        assert_eq!(first, second);
    }

    #[test]
    fn test_rotates_across_days() {
        let generator = TaskGenerator::default();
        let monday = generator.generate(Some(&sample_scores()), day(2026, 3, 16));
        let tuesday = generator.generate(Some(&sample_scores()), day(2026, 3, 17));
        assert_ne!(monday[0].text, tuesday[0].text);
    }

    #[test]
    fn test_empty_and_missing_scores() {
        let generator = TaskGenerator::default();
        let today = day(2026, 3, 14);
        assert!(generator.generate(None, today).is_empty());
        assert!(generator.generate(Some(&CategoryScoreSet::new()), today).is_empty());
    }

    #[test]
    fn test_single_category_yields_single_task() {
        let scores = CategoryScoreSet::new().with_score("mobileUsability", 30.0);
        let tasks = TaskGenerator::default().generate(Some(&scores), day(2026, 3, 14));
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].category, "mobileUsability");
    }

    #[test]
    fn test_unknown_category_consumes_slot_without_fallback() {
        let scores = CategoryScoreSet::new()
            .with_score("pageSpeed", 1.0)
            .with_score("findability", 20.0)
            .with_score("trustProof", 30.0);
        let tasks = TaskGenerator::default().generate(Some(&scores), day(2026, 3, 14));

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].category, "findability");
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let scores = CategoryScoreSet::new()
            .with_score("OFFERCLARITY", 5.0)
            .with_score("TrustProof", 6.0)
            .with_score("findability", 70.0);
        let tasks = TaskGenerator::default().generate(Some(&scores), day(2026, 3, 14));

        assert_eq!(tasks[0].category, "offerClarity");
        assert_eq!(tasks[1].category, "trustProof");
    }

    #[test]
    fn test_case_variant_keys_yield_one_task_per_category() {
        let scores = CategoryScoreSet::new()
            .with_score("offerClarity", 10.0)
            .with_score("OFFERCLARITY", 5.0)
            .with_score("findability", 30.0);
        let tasks = TaskGenerator::default().generate(Some(&scores), day(2026, 10, 19));

        let categories: Vec<&str> = tasks.iter().map(|t| t.category.as_str()).collect();
        assert_eq!(categories, ["offerClarity", "findability"]);

        let pool = task_pool(Category::OfferClarity);
        assert_eq!(tasks[0].text, pool[date_seed(day(2026, 10, 19)) % pool.len()]);
    }

    #[test]
    fn test_missing_scores_count_as_zero_and_ties_keep_order() {
        let mut scores = CategoryScoreSet::new().with_score("findability", 40.0);
        scores.insert("mobileUsability", None);
        scores.insert("trustProof", Some(0.0));
        let tasks = TaskGenerator::default().generate(Some(&scores), day(2026, 3, 14));

        assert_eq!(tasks[0].category, "mobileUsability");
        assert_eq!(tasks[1].category, "trustProof");
    }

    #[test]
    fn test_custom_limit() {
        let tasks = TaskGenerator::new(3).generate(Some(&sample_scores()), day(2026, 3, 14));
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[2].category, "trustProof");
    }
}
