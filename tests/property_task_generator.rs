//! Property tests for daily task selection.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use sitegenome::domain::models::{Category, CategoryScoreSet};
use sitegenome::services::task_generator::{date_seed, task_pool, TaskGenerator};

fn category_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("findability".to_string()),
        Just("trustProof".to_string()),
        Just("conversionReadiness".to_string()),
        Just("mobileUsability".to_string()),
        Just("offerClarity".to_string()),
        Just("OFFERCLARITY".to_string()),
        "[a-z]{3,10}",
    ]
}

fn score() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        4 => (0.0f64..=100.0).prop_map(Some),
        1 => Just(None),
        1 => Just(Some(f64::NAN)),
    ]
}

fn score_set() -> impl Strategy<Value = CategoryScoreSet> {
    prop::collection::vec((category_key(), score()), 0..8).prop_map(|entries| {
        let mut set = CategoryScoreSet::new();
        for (key, value) in entries {
            set.insert(key, value);
        }
        set
    })
}

fn any_day() -> impl Strategy<Value = NaiveDate> {
    (0i64..20_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    })
}

proptest! {
    /// Never more suggestions than the limit, and never more than the distinct
    /// known categories that have a task pool.
    #[test]
    fn prop_output_is_bounded(scores in score_set(), today in any_day(), limit in 1usize..=5) {
        let tasks = TaskGenerator::new(limit).generate(Some(&scores), today);
        let known: HashSet<Category> = scores
            .iter()
            .filter_map(|(key, _)| Category::from_str(key))
            .filter(|category| !task_pool(*category).is_empty())
            .collect();

        prop_assert!(tasks.len() <= limit);
        prop_assert!(tasks.len() <= known.len());

        let distinct: HashSet<&str> = tasks.iter().map(|t| t.category.as_str()).collect();
        prop_assert_eq!(distinct.len(), tasks.len());
    }

    /// Same scores on the same day always give the same tasks.
    #[test]
    fn prop_deterministic(scores in score_set(), today in any_day()) {
        let generator = TaskGenerator::default();
        prop_assert_eq!(generator.generate(Some(&scores), today), generator.generate(Some(&scores), today));
    }

    /// Every suggestion comes from its category's pool at the date-rotated slot.
    #[test]
    fn prop_suggestions_come_from_pool(scores in score_set(), today in any_day()) {
        for task in TaskGenerator::default().generate(Some(&scores), today) {
            let category = Category::from_str(&task.category).expect("known category");
            prop_assert_eq!(category.as_str(), task.category.as_str());
            prop_assert!(task_pool(category).contains(&task.text.as_str()));
        }
    }

    /// The first suggestion targets a lowest-scoring category.
    #[test]
    fn prop_first_task_targets_minimum(
        a in 0.0f64..=100.0,
        b in 0.0f64..=100.0,
        today in any_day(),
    ) {
        let scores = CategoryScoreSet::new()
            .with_score("findability", a)
            .with_score("trustProof", b);
        let tasks = TaskGenerator::default().generate(Some(&scores), today);
        prop_assert_eq!(tasks.len(), 2);

        let expected = if b < a { "trustProof" } else { "findability" };
        prop_assert_eq!(tasks[0].category.as_str(), expected);

        let pool = task_pool(Category::from_str(expected).unwrap());
        prop_assert_eq!(tasks[0].text.as_str(), pool[date_seed(today) % pool.len()]);
    }
}
