use crate::content::{Category, ExperienceRecord};

/// Records of `category`, in input order.
pub fn filter_by_category(
    records: &[ExperienceRecord],
    category: Category,
) -> Vec<&ExperienceRecord> {
    records.iter().filter(|r| r.category == category).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadingOut { next: Category },
    FadingIn,
}

/// Active category plus the two-phase transition between category views.
///
/// A change is only accepted while [`Phase::Idle`]; the caller drives the
/// phases forward once each animation finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryFilter {
    active: Category,
    phase: Phase,
}

impl Default for CategoryFilter {
    fn default() -> Self {
        Self::new(Category::Leadership)
    }
}

impl CategoryFilter {
    pub fn new(active: Category) -> Self {
        Self {
            active,
            phase: Phase::Idle,
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_busy(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Starts fading out the current cards. Returns false when the request is
    /// ignored: same category, or a transition already running.
    pub fn select(&mut self, category: Category) -> bool {
        if category == self.active || self.is_busy() {
            return false;
        }
        self.phase = Phase::FadingOut { next: category };
        true
    }

    /// Swaps in the pending category and starts the fade-in.
    pub fn finish_fade_out(&mut self) {
        if let Phase::FadingOut { next } = self.phase {
            self.active = next;
            self.phase = Phase::FadingIn;
        }
    }

    pub fn finish_fade_in(&mut self) {
        if self.phase == Phase::FadingIn {
            self.phase = Phase::Idle;
        }
    }

    pub fn visible<'a>(&self, records: &'a [ExperienceRecord]) -> Vec<&'a ExperienceRecord> {
        filter_by_category(records, self.active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, category: Category) -> ExperienceRecord {
        let json = format!(
            r#"{{
                "id": "{id}",
                "category": "{}",
                "title": "Event {id}",
                "role": "Role",
                "date": "2024",
                "location": "Somewhere",
                "description": "d",
                "responsibilities": [],
                "results": "r"
            }}"#,
            category.label()
        );
        serde_json::from_str(&json).unwrap()
    }

    fn sample() -> Vec<ExperienceRecord> {
        vec![
            record("a", Category::Leadership),
            record("b", Category::Programming),
            record("c", Category::Leadership),
            record("d", Category::PublicSpeaking),
            record("e", Category::Leadership),
            record("f", Category::Programming),
        ]
    }

    fn ids(records: &[&ExperienceRecord]) -> Vec<String> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn test_filter_is_exact_and_ordered_for_every_category() {
        let records = sample();
        for category in Category::ALL {
            let shown = filter_by_category(&records, category);
            let expected = records
                .iter()
                .filter(|r| r.category == category)
                .map(|r| r.id.clone())
                .collect::<Vec<_>>();
            assert_eq!(ids(&shown), expected);
            assert!(shown.iter().all(|r| r.category == category));
        }
        assert_eq!(
            ids(&filter_by_category(&records, Category::Leadership)),
            vec!["a", "c", "e"]
        );
    }

    #[test]
    fn test_creative_with_no_records_is_empty() {
        let records = sample();
        let mut filter = CategoryFilter::default();
        assert!(filter.select(Category::Creative));
        filter.finish_fade_out();
        assert_eq!(filter.active(), Category::Creative);
        assert!(filter.visible(&records).is_empty());
    }

    #[test]
    fn test_transition_runs_both_phases() {
        let records = sample();
        let mut filter = CategoryFilter::default();
        assert_eq!(ids(&filter.visible(&records)), vec!["a", "c", "e"]);

        assert!(filter.select(Category::Programming));
        assert_eq!(
            filter.phase(),
            Phase::FadingOut {
                next: Category::Programming
            }
        );
        // old cards stay until the fade-out finishes
        assert_eq!(filter.active(), Category::Leadership);

        filter.finish_fade_out();
        assert_eq!(filter.phase(), Phase::FadingIn);
        assert_eq!(ids(&filter.visible(&records)), vec!["b", "f"]);

        filter.finish_fade_in();
        assert_eq!(filter.phase(), Phase::Idle);
        assert!(!filter.is_busy());
    }

    #[test]
    fn test_changes_are_blocked_while_busy() {
        let mut filter = CategoryFilter::default();
        assert!(filter.select(Category::Programming));
        assert!(!filter.select(Category::Creative));
        filter.finish_fade_out();
        assert!(!filter.select(Category::Creative));
        filter.finish_fade_in();
        assert_eq!(filter.active(), Category::Programming);
        assert!(filter.select(Category::Creative));
    }

    #[test]
    fn test_selecting_active_category_is_noop() {
        let mut filter = CategoryFilter::new(Category::Creative);
        assert!(!filter.select(Category::Creative));
        assert_eq!(filter.phase(), Phase::Idle);
    }

    #[test]
    fn test_out_of_order_completions_are_ignored() {
        let mut filter = CategoryFilter::default();
        filter.finish_fade_in();
        filter.finish_fade_out();
        assert_eq!(filter, CategoryFilter::default());

        assert!(filter.select(Category::Creative));
        filter.finish_fade_in();
        assert_eq!(
            filter.phase(),
            Phase::FadingOut {
                next: Category::Creative
            }
        );
    }
}
