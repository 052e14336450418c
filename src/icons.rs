//! Skill badge resolution
//!
//! Maps a skill name to a simpleicons.org slug. Unmapped skills get a
//! placeholder dot. A mapped badge that fails to load is retried once with
//! the color variant of the same slug, and never again after that.

use std::collections::HashMap;

const ICON_CDN: &str = "https://cdn.simpleicons.org";

/// Skill name to icon slug
const SKILL_SLUGS: &[(&str, &str)] = &[
    // Languages
    ("Java", "openjdk"),
    ("Python", "python"),
    ("C", "c"),
    ("HTML/CSS", "html5"),
    ("JavaScript", "javascript"),
    ("Bash", "gnubash"),
    // DevOps tools
    ("Docker", "docker"),
    ("Jenkins", "jenkins"),
    ("Kubernetes", "kubernetes"),
    ("Ansible", "ansible"),
    ("Terraform", "terraform"),
    ("Prometheus", "prometheus"),
    ("Grafana", "grafana"),
    ("Git", "git"),
    // Frameworks
    ("Spring Boot", "springboot"),
    ("React.js", "react"),
    ("Tailwind", "tailwindcss"),
    ("Bootstrap", "bootstrap"),
    ("Material-UI", "mui"),
    // Cloud
    ("AWS", "amazonaws"),
    ("Azure", "microsoftazure"),
    ("Google Cloud", "googlecloud"),
    // Databases
    ("MySQL", "mysql"),
    ("MongoDB", "mongodb"),
    ("PostgreSQL", "postgresql"),
    // Operating systems
    ("Windows", "windows11"),
    ("MacOS", "apple"),
    ("Linux", "linux"),
    // Developer tools
    ("GitHub", "github"),
    ("VS Code", "visualstudiocode"),
    ("PyCharm", "pycharm"),
    ("Kaggle", "kaggle"),
    ("Google Colab", "googlecolab"),
    ("IntelliJ IDEA", "intellijidea"),
    ("Postman", "postman"),
];

/// Which URL variant a badge is currently on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeAttempt {
    Primary,
    Fallback,
    /// Fallback failed too; rendered as broken
    Exhausted,
}

/// Resolved icon for a skill
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// No mapping: render a generic dot, fetch nothing
    Placeholder,
    Badge {
        slug: &'static str,
        attempt: BadgeAttempt,
    },
}

impl Icon {
    /// URL for the current attempt, None for a placeholder
    pub fn url(&self) -> Option<String> {
        match self {
            Icon::Placeholder => None,
            Icon::Badge { slug, attempt } => Some(match attempt {
                BadgeAttempt::Primary => primary_url(slug),
                BadgeAttempt::Fallback | BadgeAttempt::Exhausted => fallback_url(slug),
            }),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Icon::Placeholder)
    }

    pub fn is_broken(&self) -> bool {
        matches!(
            self,
            Icon::Badge {
                attempt: BadgeAttempt::Exhausted,
                ..
            }
        )
    }
}

pub fn primary_url(slug: &str) -> String {
    format!("{}/{}", ICON_CDN, slug)
}

pub fn fallback_url(slug: &str) -> String {
    format!("{}/{}/000", ICON_CDN, slug)
}

/// Resolves skill names to badges and remembers load failures per skill
#[derive(Debug, Clone)]
pub struct IconResolver {
    slugs: HashMap<&'static str, &'static str>,
    attempts: HashMap<String, BadgeAttempt>,
}

impl Default for IconResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl IconResolver {
    pub fn new() -> Self {
        Self {
            slugs: SKILL_SLUGS.iter().copied().collect(),
            attempts: HashMap::new(),
        }
    }

    pub fn slug(&self, skill: &str) -> Option<&'static str> {
        self.slugs.get(skill).copied()
    }

    pub fn resolve(&self, skill: &str) -> Icon {
        match self.slug(skill) {
            None => Icon::Placeholder,
            Some(slug) => Icon::Badge {
                slug,
                attempt: self
                    .attempts
                    .get(skill)
                    .copied()
                    .unwrap_or(BadgeAttempt::Primary),
            },
        }
    }

    /// Report that the current URL for `skill` failed to load.
    ///
    /// Returns the fallback URL the first time a primary fails. Returns
    /// None for placeholders and for any failure after the fallback.
    pub fn report_load_error(&mut self, skill: &str) -> Option<String> {
        let slug = self.slug(skill)?;
        let attempt = self
            .attempts
            .entry(skill.to_string())
            .or_insert(BadgeAttempt::Primary);

        match *attempt {
            BadgeAttempt::Primary => {
                *attempt = BadgeAttempt::Fallback;
                tracing::debug!(skill, slug, "icon primary failed, trying fallback");
                Some(fallback_url(slug))
            }
            BadgeAttempt::Fallback => {
                *attempt = BadgeAttempt::Exhausted;
                tracing::debug!(skill, slug, "icon fallback failed");
                None
            }
            BadgeAttempt::Exhausted => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_skill_resolves_primary() {
        let resolver = IconResolver::new();
        let icon = resolver.resolve("Docker");
        assert_eq!(
            icon.url().as_deref(),
            Some("https://cdn.simpleicons.org/docker")
        );
    }

    #[test]
    fn test_unknown_skill_is_placeholder() {
        let resolver = IconResolver::new();
        let icon = resolver.resolve("UnknownTool");
        assert!(icon.is_placeholder());
        assert_eq!(icon.url(), None);
    }

    #[test]
    fn test_single_fallback() {
        let mut resolver = IconResolver::new();
        assert_eq!(
            resolver.report_load_error("Kubernetes").as_deref(),
            Some("https://cdn.simpleicons.org/kubernetes/000")
        );
        assert_eq!(
            resolver.resolve("Kubernetes").url().as_deref(),
            Some("https://cdn.simpleicons.org/kubernetes/000")
        );

        // Second and later failures produce no further requests
        assert_eq!(resolver.report_load_error("Kubernetes"), None);
        assert_eq!(resolver.report_load_error("Kubernetes"), None);
        assert!(resolver.resolve("Kubernetes").is_broken());
    }

    #[test]
    fn test_failures_are_per_skill() {
        let mut resolver = IconResolver::new();
        resolver.report_load_error("Git");
        assert_eq!(
            resolver.resolve("GitHub").url().as_deref(),
            Some("https://cdn.simpleicons.org/github")
        );
    }

    #[test]
    fn test_placeholder_failure_is_ignored() {
        let mut resolver = IconResolver::new();
        assert_eq!(resolver.report_load_error("UnknownTool"), None);
        assert!(resolver.resolve("UnknownTool").is_placeholder());
    }

    #[test]
    fn test_every_builtin_skill_is_mapped() {
        let resolver = IconResolver::new();
        let store = crate::content::ContentStore::builtin();
        for skill in store.all_skills() {
            assert!(resolver.slug(skill).is_some(), "{} has no icon", skill);
        }
    }
}
