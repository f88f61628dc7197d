use dioxus::prelude::*;

use crate::models::analysis::AnalysisResults;

const SECTION_HEADING: &str = "text-lg font-semibold mb-2";

#[allow(non_snake_case)]
#[component]
fn ProgressBar(value: f64) -> Element {
    let width = value.clamp(0.0, 100.0);
    rsx! {
        div {
            class: "relative h-2 w-full overflow-hidden rounded-full bg-gray-200",
            role: "progressbar",
            "aria-valuemin": "0",
            "aria-valuemax": "100",
            "aria-valuenow": "{width}",
            div { class: "h-full bg-blue-600 transition-all", style: "width: {width}%" }
        }
    }
}

/// Results panel. Renders nothing when there are no results.
#[allow(non_snake_case)]
#[component]
pub fn ResultsDisplay(#[props(!optional)] results: Option<AnalysisResults>) -> Element {
    let Some(results) = results else {
        return rsx! {};
    };

    rsx! {
        div { class: "bg-white rounded-lg shadow p-6 space-y-6",
            div {
                h3 { class: SECTION_HEADING, "Overall Match Score" }
                div { class: "flex items-center gap-2",
                    ProgressBar { value: results.match_score }
                    span { class: "text-sm font-medium", "{results.match_score}%" }
                }
            }

            div {
                h3 { class: SECTION_HEADING, "Skills Analysis" }
                div { class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                    for skill in results.skills_match.iter() {
                        div { class: "bg-gray-50 p-3 rounded",
                            div { class: "flex justify-between mb-1",
                                span { class: "text-sm font-medium", "{skill.name}" }
                                span { class: "text-sm text-gray-600", "{skill.match_score}%" }
                            }
                            ProgressBar { value: skill.match_score }
                        }
                    }
                }
            }

            div {
                h3 { class: SECTION_HEADING, "Experience Analysis" }
                p { class: "text-gray-700", "{results.experience_analysis}" }
            }

            div {
                h3 { class: SECTION_HEADING, "Recommendations" }
                ul { class: "list-disc pl-5 space-y-2",
                    for rec in results.recommendations.iter() {
                        li { class: "text-gray-700", "{rec}" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis::SkillMatch;
    use crate::ui::document::render_fragment;

    fn render_results_display(results: Option<AnalysisResults>) -> String {
        let mut dom = VirtualDom::new_with_props(ResultsDisplay, ResultsDisplayProps { results });
        dom.rebuild_in_place();
        render_fragment(&dom)
    }

    fn sample() -> AnalysisResults {
        AnalysisResults {
            match_score: 75.0,
            skills_match: vec![SkillMatch {
                name: "Python".to_string(),
                match_score: 90.0,
            }],
            experience_analysis: "Strong backend experience".to_string(),
            recommendations: vec!["Add more quantified achievements".to_string()],
            experience: None,
            job_id: None,
            analyzed_at: None,
        }
    }

    #[test]
    fn test_no_results_renders_nothing() {
        assert!(render_results_display(None).trim().is_empty());
    }

    #[test]
    fn test_results_render_all_values() {
        let html = render_results_display(Some(sample()));
        assert!(html.contains("75%"));
        assert!(html.contains("Python"));
        assert!(html.contains("90%"));
        assert!(html.contains("Strong backend experience"));
        assert!(html.contains("Add more quantified achievements"));
    }

    #[test]
    fn test_four_sections_always_present() {
        let mut results = sample();
        results.skills_match.clear();
        results.recommendations.clear();
        let html = render_results_display(Some(results));
        for heading in [
            "Overall Match Score",
            "Skills Analysis",
            "Experience Analysis",
            "Recommendations",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
    }

    #[test]
    fn test_skills_render_in_listed_order() {
        let mut results = sample();
        results.skills_match.push(SkillMatch {
            name: "Kubernetes".to_string(),
            match_score: 40.5,
        });
        let html = render_results_display(Some(results));
        let python = html.find("Python").unwrap();
        let kubernetes = html.find("Kubernetes").unwrap();
        assert!(python < kubernetes);
        assert!(html.contains("40.5%"));
    }

    #[test]
    fn test_progress_width_clamped() {
        let mut results = sample();
        results.match_score = 130.0;
        let html = render_results_display(Some(results));
        assert!(html.contains("width: 100%"));
        assert!(html.contains("130%"));
    }

    #[test]
    fn test_experience_text_is_escaped() {
        let mut results = sample();
        results.experience_analysis = "<script>alert(1)</script>".to_string();
        let html = render_results_display(Some(results));
        assert!(!html.contains("<script>"));
    }
}
