use chrono::{DateTime, Utc};
use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

/// Parsed project lists keyed by tag filter ("" for all projects).
pub static GLOBAL_PROJECT_CACHE: LazyLock<DashMap<String, Vec<Project>>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "projects"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    description: String,
    date: DateTime<Utc>,
    tags: Vec<String>,
    repo: Option<String>,
    demo: Option<String>,
    #[serde(default)]
    featured: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub tags: Vec<String>,
    pub repo: Option<String>,
    pub demo: Option<String>,
    pub featured: bool,
}

impl ProjectMeta {
    pub fn has_tag(&self, tag: &str) -> bool {
        tag.is_empty() || self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMeta,
    pub content_html: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectError {
    #[error("Project not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse project {0}")]
    Parse(String),
}

/// File stem of an embedded markdown file.
pub fn project_name(file: &str) -> &str {
    file.strip_suffix(".md").unwrap_or(file)
}

/// Every tag used by the given projects, sorted and deduplicated ignoring case.
#[cfg(feature = "ssr")]
pub fn all_tags(projects: &[Project]) -> Vec<String> {
    let mut tags = projects
        .iter()
        .flat_map(|p| p.meta.tags.iter().cloned())
        .collect::<Vec<_>>();
    tags.sort_by_key(|t| t.to_lowercase());
    tags.dedup_by(|a, b| a.eq_ignore_ascii_case(b));
    tags
}

#[cfg(feature = "ssr")]
pub fn parse_project(file: &str, content: &str) -> Result<Project, ProjectError> {
    let matter = Matter::<YAML>::new();
    let fm = matter
        .parse_with_struct::<FrontMatter>(content)
        .ok_or_else(|| ProjectError::Parse(file.to_string()))?;

    let parser = Parser::new_ext(&fm.content, Options::all());
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Ok(Project {
        meta: ProjectMeta {
            name: project_name(file).to_string(),
            title: fm.data.title,
            description: fm.data.description,
            date: fm.data.date,
            tags: fm.data.tags,
            repo: fm.data.repo,
            demo: fm.data.demo,
            featured: fm.data.featured,
        },
        content_html: html_output,
    })
}

/// Featured projects first, then newest first.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        b.meta
            .featured
            .cmp(&a.meta.featured)
            .then_with(|| b.meta.date.cmp(&a.meta.date))
    });
}

#[cfg(feature = "ssr")]
fn load_projects() -> Result<Vec<Project>, ProjectError> {
    Assets::iter()
        .filter(|s| s.ends_with(".md"))
        .map(|s| {
            let file = Assets::get(&s).ok_or_else(|| ProjectError::NotFound(s.to_string()))?;
            let content = String::from_utf8(file.data.into())
                .map_err(|_| ProjectError::Parse(s.to_string()))?;
            parse_project(&s, &content)
        })
        .collect()
}

#[cfg(feature = "ssr")]
pub async fn get_projects(tag: String) -> Result<Vec<Project>, ProjectError> {
    let cache = &*GLOBAL_PROJECT_CACHE;
    if let Some(r) = cache.get(&tag) {
        return Ok(r.clone());
    }

    let mut projects = load_projects()
        .inspect_err(|e| tracing::warn!("failed to load projects: {e}"))?
        .into_iter()
        .filter(|p| p.meta.has_tag(&tag))
        .collect::<Vec<_>>();
    sort_projects(&mut projects);

    cache.insert(tag, projects.clone());
    Ok(projects)
}

#[cfg(feature = "ssr")]
pub async fn get_tags() -> Result<Vec<String>, ProjectError> {
    let projects = get_projects(String::new()).await?;
    Ok(all_tags(&projects))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn project(name: &str, featured: bool, year: i32) -> Project {
        Project {
            meta: ProjectMeta {
                name: name.to_string(),
                title: name.to_string(),
                description: String::new(),
                date: Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap(),
                tags: vec!["Rust".to_string()],
                repo: None,
                demo: None,
                featured,
            },
            content_html: String::new(),
        }
    }

    #[test]
    fn test_project_name() {
        assert_eq!(project_name("pixel-garden.md"), "pixel-garden");
        assert_eq!(project_name("notes"), "notes");
    }

    #[test]
    fn test_has_tag_ignores_case() {
        let p = project("a", false, 2024);
        assert!(p.meta.has_tag(""));
        assert!(p.meta.has_tag("rust"));
        assert!(p.meta.has_tag("RUST"));
        assert!(!p.meta.has_tag("go"));
    }

    #[test]
    fn test_sort_featured_then_newest() {
        let mut projects = vec![
            project("old", false, 2021),
            project("new", false, 2024),
            project("star", true, 2020),
        ];
        sort_projects(&mut projects);
        let names = projects
            .iter()
            .map(|p| p.meta.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["star", "new", "old"]);
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project() {
        let content = "---\ntitle: Demo\ndescription: A demo\ndate: 2024-03-01T00:00:00Z\ntags: [Rust, WASM]\nrepo: https://github.com/example/demo\n---\n\n# Heading\n\nSome *text*.\n";
        let p = parse_project("demo.md", content).unwrap();
        assert_eq!(p.meta.name, "demo");
        assert_eq!(p.meta.title, "Demo");
        assert_eq!(p.meta.tags, vec!["Rust", "WASM"]);
        assert_eq!(p.meta.repo.as_deref(), Some("https://github.com/example/demo"));
        assert_eq!(p.meta.demo, None);
        assert!(!p.meta.featured);
        assert!(p.content_html.contains("<h1>Heading</h1>"));
        assert!(p.content_html.contains("<em>text</em>"));
        assert!(!p.content_html.contains("title: Demo"));
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_parse_project_without_front_matter() {
        assert_eq!(
            parse_project("bare.md", "# just markdown"),
            Err(ProjectError::Parse("bare.md".to_string()))
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn test_embedded_projects_parse() {
        let projects = load_projects().unwrap();
        assert!(!projects.is_empty());
        let tags = all_tags(&projects);
        assert!(tags.iter().any(|t| t == "Rust"));
        let mut sorted = tags.clone();
        sorted.sort_by_key(|t| t.to_lowercase());
        assert_eq!(tags, sorted);
    }
}
