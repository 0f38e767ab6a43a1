//! Optimization list generation.
//!
//! Expands each category's improvement strings into prioritized
//! `AtsOptimization` entries. Categories are processed in the fixed order
//! formatting → keywords → structure → readability with one shared priority
//! counter, then the list is stable-sorted by impact so equal-impact items
//! keep their generation order.

use crate::models::ats::{
    AtsOptimization, CategoryScore, Effort, Impact, OptimizationType, ScoreBreakdown,
};

/// A category percentage below this makes its optimizations high-impact.
const HIGH_IMPACT_THRESHOLD: u32 = 50;

struct CategoryPlan {
    id_prefix: &'static str,
    kind: OptimizationType,
    title: &'static str,
    /// Impact when the category is not failing badly.
    base_impact: Impact,
    effort: Effort,
    auto_fixable: bool,
}

pub(crate) fn generate_optimizations(breakdown: &ScoreBreakdown) -> Vec<AtsOptimization> {
    let plans: [(&CategoryScore, CategoryPlan); 4] = [
        (
            &breakdown.formatting,
            CategoryPlan {
                id_prefix: "opt-format",
                kind: OptimizationType::Formatting,
                title: "Format Optimization",
                base_impact: Impact::Medium,
                effort: Effort::Easy,
                auto_fixable: false,
            },
        ),
        (
            &breakdown.keywords,
            CategoryPlan {
                id_prefix: "opt-keyword",
                kind: OptimizationType::Keywords,
                title: "Keyword Optimization",
                base_impact: Impact::Medium,
                effort: Effort::Medium,
                auto_fixable: false,
            },
        ),
        (
            &breakdown.structure,
            CategoryPlan {
                id_prefix: "opt-structure",
                kind: OptimizationType::Structure,
                title: "Structure Optimization",
                base_impact: Impact::Medium,
                effort: Effort::Easy,
                auto_fixable: true,
            },
        ),
        (
            &breakdown.readability,
            CategoryPlan {
                id_prefix: "opt-read",
                kind: OptimizationType::Content,
                title: "Readability Improvement",
                base_impact: Impact::Low,
                effort: Effort::Medium,
                auto_fixable: false,
            },
        ),
    ];

    let mut optimizations = Vec::new();
    let mut priority = 1u32;

    for (category, plan) in &plans {
        let impact = if category.percentage < HIGH_IMPACT_THRESHOLD {
            Impact::High
        } else {
            plan.base_impact
        };

        for improvement in &category.improvements {
            optimizations.push(AtsOptimization {
                id: format!("{}-{priority}", plan.id_prefix),
                kind: plan.kind,
                priority,
                title: plan.title.to_string(),
                description: improvement.clone(),
                impact,
                effort: plan.effort,
                auto_fixable: plan.auto_fixable,
            });
            priority += 1;
        }
    }

    // sort_by_key is stable: equal-impact entries keep generation order.
    optimizations.sort_by_key(|opt| opt.impact.rank());
    optimizations
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn category(percentage: i32, improvements: &[&str]) -> CategoryScore {
        CategoryScore::from_raw(
            percentage,
            vec![],
            improvements.iter().map(|s| s.to_string()).collect(),
        )
    }

    fn breakdown(
        formatting: CategoryScore,
        keywords: CategoryScore,
        structure: CategoryScore,
        readability: CategoryScore,
    ) -> ScoreBreakdown {
        ScoreBreakdown {
            formatting,
            keywords,
            structure,
            readability,
        }
    }

    #[test]
    fn test_no_improvements_yields_empty_list() {
        let b = breakdown(
            category(100, &[]),
            category(100, &[]),
            category(100, &[]),
            category(100, &[]),
        );
        assert!(generate_optimizations(&b).is_empty());
    }

    #[test]
    fn test_priority_counter_shared_across_categories() {
        let b = breakdown(
            category(80, &["fix tables", "fix columns"]),
            category(80, &["add keywords"]),
            category(80, &["add skills section"]),
            category(80, &[]),
        );
        let opts = generate_optimizations(&b);
        let mut priorities: Vec<u32> = opts.iter().map(|o| o.priority).collect();
        priorities.sort_unstable();
        assert_eq!(priorities, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_id_prefix_and_priority_agree() {
        let b = breakdown(
            category(80, &["fix tables"]),
            category(80, &["add keywords"]),
            category(100, &[]),
            category(100, &[]),
        );
        let opts = generate_optimizations(&b);
        for opt in &opts {
            assert!(opt.id.ends_with(&format!("-{}", opt.priority)));
        }
        assert!(opts.iter().any(|o| o.id == "opt-format-1"));
        assert!(opts.iter().any(|o| o.id == "opt-keyword-2"));
    }

    #[test]
    fn test_low_category_percentage_makes_high_impact() {
        let b = breakdown(
            category(40, &["fix tables"]),
            category(90, &["add keywords"]),
            category(100, &[]),
            category(100, &[]),
        );
        let opts = generate_optimizations(&b);
        let formatting = opts.iter().find(|o| o.kind == OptimizationType::Formatting).unwrap();
        let keywords = opts.iter().find(|o| o.kind == OptimizationType::Keywords).unwrap();
        assert_eq!(formatting.impact, Impact::High);
        assert_eq!(keywords.impact, Impact::Medium);
    }

    #[test]
    fn test_readability_maps_to_content_type_and_low_impact() {
        let b = breakdown(
            category(100, &[]),
            category(100, &[]),
            category(100, &[]),
            category(80, &["be concise"]),
        );
        let opts = generate_optimizations(&b);
        assert_eq!(opts.len(), 1);
        assert_eq!(opts[0].kind, OptimizationType::Content);
        assert_eq!(opts[0].impact, Impact::Low);
        assert_eq!(opts[0].effort, Effort::Medium);
        assert!(opts[0].id.starts_with("opt-read-"));
    }

    #[test]
    fn test_only_structure_is_auto_fixable() {
        let b = breakdown(
            category(80, &["fix tables"]),
            category(80, &["add keywords"]),
            category(80, &["rename headers"]),
            category(80, &["be concise"]),
        );
        let opts = generate_optimizations(&b);
        for opt in &opts {
            assert_eq!(opt.auto_fixable, opt.kind == OptimizationType::Structure);
        }
    }

    #[test]
    fn test_high_impact_sorts_before_medium_and_low() {
        // Formatting at 40 is high impact and must precede keywords at 90.
        let b = breakdown(
            category(40, &["fix tables", "fix columns"]),
            category(90, &["add keywords"]),
            category(100, &[]),
            category(80, &["be concise"]),
        );
        let opts = generate_optimizations(&b);
        let ranks: Vec<u8> = opts.iter().map(|o| o.impact.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort_unstable();
        assert_eq!(ranks, sorted, "list must be ordered by impact rank");
        assert_eq!(opts[0].kind, OptimizationType::Formatting);
        assert_eq!(opts.last().unwrap().kind, OptimizationType::Content);
    }

    #[test]
    fn test_equal_impact_preserves_generation_order() {
        let b = breakdown(
            category(40, &["first", "second", "third"]),
            category(100, &[]),
            category(100, &[]),
            category(100, &[]),
        );
        let opts = generate_optimizations(&b);
        let descriptions: Vec<&str> = opts.iter().map(|o| o.description.as_str()).collect();
        assert_eq!(descriptions, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_boundary_percentage_50_is_not_high_impact() {
        let b = breakdown(
            category(50, &["fix tables"]),
            category(100, &[]),
            category(100, &[]),
            category(100, &[]),
        );
        let opts = generate_optimizations(&b);
        assert_eq!(opts[0].impact, Impact::Medium);
    }
}
