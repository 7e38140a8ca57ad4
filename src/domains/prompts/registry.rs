//! Prompt registry - central registration of all prompts.
//!
//! Each prompt is a [`PromptTemplate`] value that chains the server's SEO
//! tools into a guided workflow. Adding a prompt means adding a template
//! here; the service picks it up automatically.

use super::templates::{PromptTemplate, optional_arg, required_arg};

/// Get all registered prompt templates.
pub fn get_all_prompts() -> Vec<PromptTemplate> {
    vec![
        PromptTemplate {
            name: "keyword_research",
            description: "Research keywords around a seed topic: volume, difficulty and \
                related ideas",
            arguments: vec![
                required_arg("topic", "The seed topic or keyword to research"),
                optional_arg("location", "Target market location, defaults to United States"),
            ],
            template: "Run a keyword research workflow for the topic \"{{topic}}\" in the \
                {{location}} market. Use dataforseo_labs_google_keyword_suggestions and \
                dataforseo_labs_google_keyword_ideas to collect candidate keywords, then \
                dataforseo_labs_bulk_keyword_difficulty to score the most promising ones. \
                Summarize the best opportunities as a table of keyword, search volume, \
                CPC and difficulty.",
        },
        PromptTemplate {
            name: "competitor_analysis",
            description: "Analyze a domain's organic competitors and keyword overlap",
            arguments: vec![
                required_arg("domain", "The domain to analyze, without https:// or www."),
                optional_arg("location", "Target market location, defaults to United States"),
            ],
            template: "Analyze the competitive landscape for {{domain}} in the {{location}} \
                market. Use dataforseo_labs_google_competitors_domain to find competing \
                domains, then dataforseo_labs_google_ranked_keywords on the top two \
                competitors to see which keywords they rank for. Highlight keywords where \
                {{domain}} is absent but competitors rank in the top 10.",
        },
        PromptTemplate {
            name: "serp_snapshot",
            description: "Capture and interpret the current SERP for a keyword",
            arguments: vec![
                required_arg("keyword", "The keyword to inspect"),
                optional_arg("location", "Search location, defaults to United States"),
            ],
            template: "Take a snapshot of the Google results for \"{{keyword}}\" in \
                {{location}} using serp_organic_live_advanced. Describe which SERP \
                features appear, who holds the top organic positions, and what content \
                formats dominate the first page.",
        },
        PromptTemplate {
            name: "onpage_audit",
            description: "Start an OnPage crawl and report technical issues",
            arguments: vec![required_arg("target", "The domain to audit")],
            template: "Audit the technical SEO of {{target}}. Start a crawl with \
                onpage_task_post, poll onpage_summary until crawl_progress is finished, \
                then use onpage_pages sorted by onpage_score ascending to list the worst \
                pages and their failed checks.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_all_prompts() {
        let prompts = get_all_prompts();
        assert_eq!(prompts.len(), 4);

        let names: Vec<_> = prompts.iter().map(|p| p.name).collect();
        assert!(names.contains(&"keyword_research"));
        assert!(names.contains(&"competitor_analysis"));
        assert!(names.contains(&"serp_snapshot"));
        assert!(names.contains(&"onpage_audit"));
    }

    #[test]
    fn test_every_required_argument_appears_in_its_template() {
        for prompt in get_all_prompts() {
            for arg in &prompt.arguments {
                if arg.required == Some(true) {
                    let placeholder = format!("{{{{{}}}}}", arg.name);
                    assert!(
                        prompt.template.contains(&placeholder),
                        "{} missing {}",
                        prompt.name,
                        placeholder
                    );
                }
            }
        }
    }
}
