//! The ordered badge table.
//!
//! Each [`BadgeRule`] pairs an applicability check with a renderer. Order
//! in [`CATALOG`] is the order new badges are inserted in. Adding a badge
//! means adding a row here; reconciliation does not change.

use crate::detection::RepoContext;

use super::badge::{Badge, BadgeCategory};

/// Identity of any static version badge, whatever number it embeds.
pub const STATIC_VERSION_MARKER: &str = "img.shields.io/badge/version-";

/// Prefix shared by every tag-based version badge.
pub const TAG_VERSION_MARKER: &str = "img.shields.io/github/v/tag/";

/// One row of the badge table.
pub struct BadgeRule {
    /// Category the rendered badge belongs to.
    pub category: BadgeCategory,
    /// Whether the badge applies to this repository.
    pub applies: fn(&RepoContext) -> bool,
    /// Render the badge. Only called when `applies` is true.
    pub render: fn(&RepoContext) -> Badge,
}

/// All known badges, in insertion order.
///
/// The two version rows are mutually exclusive: the tag-based badge is
/// preferred, the static one is the fallback.
pub static CATALOG: &[BadgeRule] = &[
    BadgeRule {
        category: BadgeCategory::Version,
        applies: |ctx| ctx.has_tags,
        render: tag_version_badge,
    },
    BadgeRule {
        category: BadgeCategory::Version,
        applies: |ctx| !ctx.has_tags && ctx.version.is_some(),
        render: static_version_badge,
    },
    BadgeRule {
        category: BadgeCategory::Python,
        applies: |ctx| ctx.python_project,
        render: python_badge,
    },
    BadgeRule {
        category: BadgeCategory::License,
        applies: |ctx| ctx.mit_license,
        render: license_badge,
    },
    BadgeRule {
        category: BadgeCategory::Coverage,
        applies: |ctx| ctx.codecov,
        render: codecov_badge,
    },
    BadgeRule {
        category: BadgeCategory::Lint,
        applies: |ctx| ctx.has_workflow("lint"),
        render: |ctx| workflow_badge(ctx, BadgeCategory::Lint, "Code Quality", "lint"),
    },
    BadgeRule {
        category: BadgeCategory::Tests,
        applies: |ctx| ctx.has_workflow("tests"),
        render: |ctx| workflow_badge(ctx, BadgeCategory::Tests, "Tests", "tests"),
    },
    BadgeRule {
        category: BadgeCategory::StaticAnalysis,
        applies: |ctx| ctx.has_workflow("codeql"),
        render: |ctx| workflow_badge(ctx, BadgeCategory::StaticAnalysis, "CodeQL", "codeql"),
    },
    BadgeRule {
        category: BadgeCategory::Black,
        applies: |ctx| ctx.black,
        render: |_| {
            Badge::new(
                BadgeCategory::Black,
                "Code style: black",
                "https://img.shields.io/badge/code%20style-black-000000.svg",
                Some("https://github.com/psf/black"),
            )
        },
    },
    BadgeRule {
        category: BadgeCategory::Ruff,
        applies: |ctx| ctx.ruff,
        render: |_| {
            Badge::new(
                BadgeCategory::Ruff,
                "Ruff",
                "https://img.shields.io/endpoint?url=https://raw.githubusercontent.com/astral-sh/ruff/main/assets/badge/v2.json",
                Some("https://github.com/astral-sh/ruff"),
            )
        },
    },
    BadgeRule {
        category: BadgeCategory::Docs,
        applies: |ctx| ctx.docs,
        render: docs_badge,
    },
    BadgeRule {
        category: BadgeCategory::Maintenance,
        applies: |_| true,
        render: maintenance_badge,
    },
    BadgeRule {
        category: BadgeCategory::LastCommit,
        applies: |_| true,
        render: last_commit_badge,
    },
];

/// Badges that apply to `ctx`, in table order.
pub fn applicable_badges(ctx: &RepoContext) -> Vec<Badge> {
    CATALOG
        .iter()
        .filter(|rule| (rule.applies)(ctx))
        .map(|rule| {
            let badge = (rule.render)(ctx);
            tracing::debug!(category = %rule.category, "Badge applies");
            badge
        })
        .collect()
}

/// Escape a value for a shields.io static badge path segment.
fn shields_escape(value: &str) -> String {
    value
        .replace('-', "--")
        .replace('_', "__")
        .replace(' ', "%20")
}

fn tag_version_badge(ctx: &RepoContext) -> Badge {
    let (owner, name) = (&ctx.slug.owner, &ctx.slug.name);
    Badge::new(
        BadgeCategory::Version,
        "Version",
        &format!(
            "https://img.shields.io/github/v/tag/{}/{}?label=version",
            owner, name
        ),
        Some(&format!("https://github.com/{}/{}/tags", owner, name)),
    )
    // The query delimiter ends the repo name so `owner/re` never matches `owner/repo`.
    .with_identity(&format!("{}{}/{}?", TAG_VERSION_MARKER, owner, name))
    .superseding(STATIC_VERSION_MARKER)
}

fn static_version_badge(ctx: &RepoContext) -> Badge {
    let version = ctx.version.as_deref().unwrap_or_default();
    Badge::new(
        BadgeCategory::Version,
        "Version",
        &format!(
            "https://img.shields.io/badge/version-{}-blue",
            shields_escape(version)
        ),
        None,
    )
    .with_identity(STATIC_VERSION_MARKER)
    .also_matching(TAG_VERSION_MARKER)
}

fn python_badge(ctx: &RepoContext) -> Badge {
    let version = ctx.python_version.as_deref().unwrap_or("3.8+");
    Badge::new(
        BadgeCategory::Python,
        "Python",
        &format!(
            "https://img.shields.io/badge/python-{}-blue.svg",
            shields_escape(version)
        ),
        Some("https://www.python.org/downloads/"),
    )
    .with_identity("img.shields.io/badge/python-")
}

fn license_badge(_: &RepoContext) -> Badge {
    Badge::new(
        BadgeCategory::License,
        "License: MIT",
        "https://img.shields.io/badge/License-MIT-yellow.svg",
        Some("https://opensource.org/licenses/MIT"),
    )
    .with_identity("img.shields.io/badge/License-MIT")
}

fn codecov_badge(ctx: &RepoContext) -> Badge {
    let (owner, name) = (&ctx.slug.owner, &ctx.slug.name);
    Badge::new(
        BadgeCategory::Coverage,
        "codecov",
        &format!(
            "https://codecov.io/gh/{}/{}/branch/{}/graph/badge.svg",
            owner, name, ctx.branch
        ),
        Some(&format!("https://codecov.io/gh/{}/{}", owner, name)),
    )
}

fn workflow_badge(ctx: &RepoContext, category: BadgeCategory, alt: &str, workflow: &str) -> Badge {
    let page = format!(
        "https://github.com/{}/{}/actions/workflows/{}.yml",
        ctx.slug.owner, ctx.slug.name, workflow
    );
    Badge::new(category, alt, &format!("{}/badge.svg", page), Some(&page))
}

fn docs_badge(ctx: &RepoContext) -> Badge {
    Badge::new(
        BadgeCategory::Docs,
        "Docs",
        "https://img.shields.io/badge/docs-GitHub%20Pages-blue",
        Some(&format!(
            "https://{}.github.io/{}/",
            ctx.slug.owner, ctx.slug.name
        )),
    )
}

fn maintenance_badge(ctx: &RepoContext) -> Badge {
    Badge::new(
        BadgeCategory::Maintenance,
        "Maintenance",
        "https://img.shields.io/badge/Maintained%3F-yes-green.svg",
        Some(&format!(
            "https://github.com/{}/{}/graphs/commit-activity",
            ctx.slug.owner, ctx.slug.name
        )),
    )
}

fn last_commit_badge(ctx: &RepoContext) -> Badge {
    Badge::new(
        BadgeCategory::LastCommit,
        "Last commit",
        &format!(
            "https://img.shields.io/github/last-commit/{}/{}",
            ctx.slug.owner, ctx.slug.name
        ),
        None,
    )
    .with_identity("img.shields.io/github/last-commit")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RepoSlug;

    fn context() -> RepoContext {
        RepoContext::new(RepoSlug::new("owner", "repo"), "main")
    }

    fn categories(badges: &[Badge]) -> Vec<BadgeCategory> {
        badges.iter().map(|b| b.category).collect()
    }

    #[test]
    fn bare_repository_gets_maintenance_and_recency() {
        let badges = applicable_badges(&context());
        assert_eq!(
            categories(&badges),
            vec![BadgeCategory::Maintenance, BadgeCategory::LastCommit]
        );
        assert_eq!(
            badges[1].markdown,
            "![Last commit](https://img.shields.io/github/last-commit/owner/repo)"
        );
    }

    #[test]
    fn tag_badge_preferred_over_static_version() {
        let mut ctx = context();
        ctx.has_tags = true;
        ctx.version = Some("1.2.3".to_string());

        let badges = applicable_badges(&ctx);
        let version: Vec<_> = badges
            .iter()
            .filter(|b| b.category == BadgeCategory::Version)
            .collect();

        assert_eq!(version.len(), 1);
        assert!(version[0]
            .markdown
            .contains("img.shields.io/github/v/tag/owner/repo"));
        assert!(!version[0].markdown.contains("1.2.3"));
        assert!(!version[0].image_url.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn tag_badge_identity_ends_at_repo_name() {
        let mut ctx = RepoContext::new(RepoSlug::new("owner", "re"), "main");
        ctx.has_tags = true;
        let short = applicable_badges(&ctx).remove(0);

        let readme = "[![Version](https://img.shields.io/github/v/tag/owner/repo?label=version)](https://github.com/owner/repo/tags)\n";
        assert!(!short.is_present_in(readme));
        assert!(short.is_present_in(&short.markdown));
    }

    #[test]
    fn static_version_without_tags() {
        let mut ctx = context();
        ctx.version = Some("1.2.3".to_string());

        let badges = applicable_badges(&ctx);
        assert_eq!(badges[0].category, BadgeCategory::Version);
        assert!(badges[0]
            .markdown
            .contains("img.shields.io/badge/version-1.2.3-blue"));
    }

    #[test]
    fn no_version_badge_without_tags_or_version() {
        let badges = applicable_badges(&context());
        assert!(!badges.iter().any(|b| b.category == BadgeCategory::Version));
    }

    #[test]
    fn prerelease_version_is_escaped() {
        let mut ctx = context();
        ctx.version = Some("1.0.0-rc_1".to_string());
        let badges = applicable_badges(&ctx);
        assert!(badges[0].image_url.contains("version-1.0.0--rc__1-blue"));
    }

    #[test]
    fn python_badge_defaults_constraint() {
        let mut ctx = context();
        ctx.python_project = true;
        let badges = applicable_badges(&ctx);
        assert!(badges[0].image_url.contains("python-3.8+-blue.svg"));

        ctx.python_version = Some("3.11+".to_string());
        let badges = applicable_badges(&ctx);
        assert!(badges[0].image_url.contains("python-3.11+-blue.svg"));
    }

    #[test]
    fn full_context_follows_table_order() {
        let mut ctx = context()
            .with_workflow("lint")
            .with_workflow("tests")
            .with_workflow("codeql");
        ctx.has_tags = true;
        ctx.python_project = true;
        ctx.mit_license = true;
        ctx.codecov = true;
        ctx.black = true;
        ctx.ruff = true;
        ctx.docs = true;

        let badges = applicable_badges(&ctx);
        assert_eq!(
            categories(&badges),
            vec![
                BadgeCategory::Version,
                BadgeCategory::Python,
                BadgeCategory::License,
                BadgeCategory::Coverage,
                BadgeCategory::Lint,
                BadgeCategory::Tests,
                BadgeCategory::StaticAnalysis,
                BadgeCategory::Black,
                BadgeCategory::Ruff,
                BadgeCategory::Docs,
                BadgeCategory::Maintenance,
                BadgeCategory::LastCommit,
            ]
        );
    }

    #[test]
    fn codecov_badge_uses_branch() {
        let mut ctx = context();
        ctx.codecov = true;
        let badges = applicable_badges(&ctx);
        assert_eq!(
            badges[0].markdown,
            "[![codecov](https://codecov.io/gh/owner/repo/branch/main/graph/badge.svg)](https://codecov.io/gh/owner/repo)"
        );
    }

    #[test]
    fn workflow_badge_markup() {
        let ctx = context().with_workflow("lint");
        let badges = applicable_badges(&ctx);
        assert_eq!(
            badges[0].markdown,
            "[![Code Quality](https://github.com/owner/repo/actions/workflows/lint.yml/badge.svg)](https://github.com/owner/repo/actions/workflows/lint.yml)"
        );
    }
}
