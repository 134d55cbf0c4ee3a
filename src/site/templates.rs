// Askama page templates
//
// Each page renders to a complete String before anything is sent, so a
// failure part-way never leaves a half-written page.

use askama::Template;

use crate::site::view_models::{ErrorState, ProjectCard, ProjectPageData};

pub const SITE_TITLE: &str = "Portfolio";

// ============================================================================
// Catalog Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate {
    pub title: String,
    pub cards: Vec<ProjectCard>,
    pub load_failed: bool,
}

impl HomeTemplate {
    pub fn with_cards(cards: Vec<ProjectCard>) -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            cards,
            load_failed: false,
        }
    }

    /// Grid replaced by the "unable to load" message
    pub fn load_failed() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            cards: Vec::new(),
            load_failed: true,
        }
    }
}

// ============================================================================
// Detail Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/project.html")]
pub struct ProjectTemplate {
    pub title: String,
    pub page: ProjectPageData,
}

impl ProjectTemplate {
    pub fn new(page: ProjectPageData) -> Self {
        Self {
            title: page.page_title.clone(),
            page,
        }
    }
}

#[derive(Template)]
#[template(path = "pages/project_error.html")]
pub struct ProjectErrorTemplate {
    pub title: String,
    pub message: String,
}

impl ProjectErrorTemplate {
    pub fn new(state: ErrorState) -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            message: state.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Project, Section, Subsection};
    use crate::site::view_builder::{build_cards, build_project_page};

    fn sample_project() -> Project {
        Project {
            id: "engine".to_string(),
            title: "Cache Engine".to_string(),
            description: "An LRU cache".to_string(),
            image: "images/engine.png".to_string(),
            tags: vec!["Rust".to_string(), "Storage".to_string()],
            read_time: "7 min read".to_string(),
            sections: vec![
                Section {
                    id: "intro".to_string(),
                    title: "Introduction".to_string(),
                    content: Some("<p>Why a cache?</p>".to_string()),
                    subsections: None,
                },
                Section {
                    id: "design".to_string(),
                    title: "Design".to_string(),
                    content: None,
                    subsections: Some(vec![Subsection {
                        id: "design-eviction".to_string(),
                        title: "Eviction".to_string(),
                        content: Some("<p>LRU</p>".to_string()),
                    }]),
                },
            ],
        }
    }

    #[test]
    fn test_home_renders_one_card_per_project() {
        let mut second = sample_project();
        second.id = "parser".to_string();
        second.title = "Parser".to_string();

        let html = HomeTemplate::with_cards(build_cards(&[sample_project(), second]))
            .render()
            .unwrap();

        assert_eq!(html.matches("class=\"project-card\"").count(), 2);
        let engine = html.find("data-project-id=\"engine\"").unwrap();
        let parser = html.find("data-project-id=\"parser\"").unwrap();
        assert!(engine < parser);

        assert!(html.contains("project.html?id=engine"));
        assert!(html.contains("<span class=\"tag\">Rust</span>"));
        assert!(html.contains("7 min read"));
        assert!(html.contains("An LRU cache"));
        assert!(html.contains("text=Cache%20Engine"));
        assert!(!html.contains("Unable to load projects"));
    }

    #[test]
    fn test_home_load_failure_message() {
        let html = HomeTemplate::load_failed().render().unwrap();

        assert!(html.contains("Unable to load projects. Please try again later."));
        assert!(!html.contains("class=\"project-card\""));
        assert!(html.contains("id=\"projects-grid\""));
    }

    #[test]
    fn test_project_page_toc_and_body() {
        let html = ProjectTemplate::new(build_project_page(&sample_project()))
            .render()
            .unwrap();

        assert!(html.contains("<title>Cache Engine | Portfolio</title>"));
        assert!(html.contains("<a href=\"#intro\">00. Introduction</a>"));
        assert!(html.contains("<a href=\"#design\">01. Design</a>"));
        assert!(html.contains("<li><a href=\"#design-eviction\">Eviction</a></li>"));
        assert!(html.contains("<section id=\"intro\">"));
        assert!(html.contains("<h2>00. Introduction</h2>"));
        assert!(html.contains("<h2>01. Design</h2>"));
        assert!(html.contains("<div id=\"design-eviction\">"));
        assert!(html.contains("<h3>Eviction</h3>"));

        // Trusted content is emitted unescaped
        assert!(html.contains("<p>Why a cache?</p>"));
        assert!(html.contains("<p>LRU</p>"));

        // Header comes before TOC, TOC before article
        let header = html.find("id=\"project-header\"").unwrap();
        let toc = html.find("id=\"toc-nav\"").unwrap();
        let article = html.find("id=\"project-article\"").unwrap();
        assert!(header < toc && toc < article);
    }

    #[test]
    fn test_project_page_wires_smooth_scroll() {
        let html = ProjectTemplate::new(build_project_page(&sample_project()))
            .render()
            .unwrap();

        let article = html.find("id=\"project-article\"").unwrap();
        let script = html.find("querySelectorAll('.toc-nav a')").unwrap();
        assert!(script > article);
        assert!(html.contains("e.preventDefault();"));
        assert!(html.contains("scrollIntoView({ behavior: 'smooth', block: 'start' })"));
    }

    #[test]
    fn test_subsection_titles_unnumbered_in_page() {
        let html = ProjectTemplate::new(build_project_page(&sample_project()))
            .render()
            .unwrap();

        assert!(!html.contains(". Eviction"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut project = sample_project();
        project.title = "<script>alert(1)</script>".to_string();

        let html = ProjectTemplate::new(build_project_page(&project)).render().unwrap();
        assert!(!html.contains("<h1 class=\"project-title\"><script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_hides_toc_and_article() {
        for state in [ErrorState::MissingId, ErrorState::NotFound, ErrorState::LoadFailed] {
            let html = ProjectErrorTemplate::new(state).render().unwrap();

            assert!(html.contains("Oops!"));
            assert!(html.contains(state.message()));
            assert!(html.contains("href=\"index.html\""));
            assert!(html.contains("id=\"toc-section\" class=\"toc-section\" hidden"));
            assert!(html.contains("id=\"project-article\" class=\"project-article\" hidden"));
        }
    }
}
