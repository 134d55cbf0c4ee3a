//! View Builder - Converts project data to view models
//!
//! TOC and article headings go through the same `numbered_title` helper so a
//! section always carries the same number in both places.

use crate::models::{Project, Section, Subsection};
use crate::site::view_models::*;

/// Placeholder image service used when a project image fails to load
const PLACEHOLDER_BASE: &str = "https://via.placeholder.com";
const PLACEHOLDER_COLORS: &str = "1a1d21/5fb4a2";

pub const CARD_IMAGE_SIZE: &str = "600x300";
pub const HEADER_IMAGE_SIZE: &str = "900x400";

/// Detail page path, relative to the catalog page
pub const DETAIL_PAGE: &str = "project.html";

/// Zero-padded to at least two digits: 0 -> "00", 10 -> "10", 100 -> "100"
pub fn section_number(index: usize) -> String {
    format!("{:02}", index)
}

pub fn numbered_title(index: usize, title: &str) -> String {
    format!("{}. {}", section_number(index), title)
}

pub fn placeholder_image_url(size: &str, title: &str) -> String {
    format!(
        "{}/{}/{}?text={}",
        PLACEHOLDER_BASE,
        size,
        PLACEHOLDER_COLORS,
        urlencoding::encode(title)
    )
}

pub fn detail_href(id: &str) -> String {
    format!("{}?id={}", DETAIL_PAGE, urlencoding::encode(id))
}

pub fn page_title(project_title: &str) -> String {
    format!("{} | Portfolio", project_title)
}

fn image_view(project: &Project, size: &str) -> ImageView {
    ImageView {
        src: project.image.clone(),
        alt: project.title.clone(),
        fallback_src: placeholder_image_url(size, &project.title),
    }
}

// ============================================================================
// Catalog
// ============================================================================

pub fn build_card(project: &Project) -> ProjectCard {
    ProjectCard {
        id: project.id.clone(),
        href: detail_href(&project.id),
        image: image_view(project, CARD_IMAGE_SIZE),
        tags: project.tags.clone(),
        read_time: project.read_time.clone(),
        title: project.title.clone(),
        description: project.description.clone(),
    }
}

/// One card per project, in input order
pub fn build_cards(projects: &[Project]) -> Vec<ProjectCard> {
    projects.iter().map(build_card).collect()
}

// ============================================================================
// Detail
// ============================================================================

pub fn build_header(project: &Project) -> ProjectHeader {
    ProjectHeader {
        image: image_view(project, HEADER_IMAGE_SIZE),
        tags: project.tags.clone(),
        title: project.title.clone(),
        read_time: project.read_time.clone(),
        description: project.description.clone(),
    }
}

pub fn build_toc(sections: &[Section]) -> Vec<TocEntry> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| TocEntry {
            anchor: section.id.clone(),
            label: numbered_title(index, &section.title),
            children: section
                .subsections()
                .iter()
                .map(|sub| TocChild {
                    anchor: sub.id.clone(),
                    title: sub.title.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn build_article(sections: &[Section]) -> Vec<ArticleSection> {
    sections
        .iter()
        .enumerate()
        .map(|(index, section)| ArticleSection {
            anchor: section.id.clone(),
            heading: numbered_title(index, &section.title),
            content: section.content.clone().unwrap_or_default(),
            subsections: section.subsections().iter().map(build_subsection).collect(),
        })
        .collect()
}

fn build_subsection(sub: &Subsection) -> ArticleSubsection {
    ArticleSubsection {
        anchor: sub.id.clone(),
        title: sub.title.clone(),
        content: sub.content.clone().unwrap_or_default(),
    }
}

pub fn build_project_page(project: &Project) -> ProjectPageData {
    ProjectPageData {
        page_title: page_title(&project.title),
        header: build_header(project),
        toc: build_toc(&project.sections),
        article: build_article(&project.sections),
    }
}
