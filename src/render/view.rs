//! Template view models. Everything a template reads is computed here so
//! templates stay free of logic.

use serde::Serialize;
use std::collections::BTreeMap;

use super::decor::{self, Star, TelemetryReading};
use super::PageContext;
use crate::aesthetics::{is_feature_enabled, FeatureKey, PageType};
use crate::content::{timeline_sorted, Project, TimelineKind, COURSES, PROFILE, PROJECTS};
use crate::i18n::{Locale, Messages};
use crate::layout::{Displacement, LayoutIntensity, LayoutMemo};
use crate::routes::SiteRoute;
use crate::utils::truncate_text;

const CARD_SUMMARY_CHARS: usize = 96;
const STAGGER_MS: u32 = 60;
const CV_MILESTONES: usize = 3;

#[derive(Debug, Serialize)]
pub struct NavLinks {
    pub cv: String,
    pub projects: String,
    pub education: String,
}

impl NavLinks {
    fn for_locale(locale: Locale) -> Self {
        Self {
            cv: SiteRoute::Cv.path(locale),
            projects: SiteRoute::Projects.path(locale),
            education: SiteRoute::Education.path(locale),
        }
    }
}

/// Shared page frame: head, navigation, decorations, footer
#[derive(Debug, Serialize)]
pub struct ChromeView {
    pub lang: &'static str,
    pub locale: &'static str,
    pub page_type: PageType,
    pub title: String,
    pub owner: &'static str,
    pub messages: &'static Messages,
    pub links: NavLinks,
    pub switch_href: String,
    pub body_class: String,
    pub fx_style: String,
    /// Live features keyed by their config name
    pub fx: BTreeMap<&'static str, bool>,
    pub stars: Vec<Star>,
    pub telemetry: Vec<TelemetryReading>,
}

impl ChromeView {
    pub fn build(ctx: &PageContext, title: &str) -> Self {
        let locale = ctx.locale;
        let messages = locale.messages();
        let owner = PROFILE.name.get(locale);
        let fx = FeatureKey::ALL
            .iter()
            .map(|key| (key.as_str(), is_feature_enabled(&ctx.aesthetics, *key)))
            .collect();

        Self {
            lang: locale.html_lang(),
            locale: locale.as_str(),
            page_type: ctx.page_type,
            title: format!("{} · {}", title, owner),
            owner,
            messages,
            links: NavLinks::for_locale(locale),
            switch_href: ctx.route.as_ref().map_or_else(
                || SiteRoute::Cv.path(locale.other()),
                |route| route.path(locale.other()),
            ),
            body_class: decor::body_class(ctx.page_type.as_str(), &ctx.aesthetics),
            fx_style: decor::fx_style(&ctx.aesthetics),
            fx,
            stars: decor::starfield(&ctx.aesthetics),
            telemetry: decor::telemetry_readings(&ctx.aesthetics),
        }
    }
}

/// Transform values handed to CSS custom properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MotionView {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
    pub scale: f64,
    pub skew: f64,
    pub delay_ms: u32,
}

impl MotionView {
    fn new(displacement: &Displacement, index: usize, staggered: bool) -> Self {
        let d = displacement.rounded();
        Self {
            x: d.x,
            y: d.y,
            rotation: d.rotation,
            scale: d.scale,
            skew: d.skew,
            delay_ms: if staggered { index as u32 * STAGGER_MS } else { 0 },
        }
    }
}

fn motions(ctx: &PageContext, memo: &mut LayoutMemo, count: usize) -> Vec<MotionView> {
    let intensity = LayoutIntensity::from_config(&ctx.aesthetics);
    let staggered = is_feature_enabled(&ctx.aesthetics, FeatureKey::ScatterEntrance);
    memo.displacements(count, &intensity)
        .iter()
        .enumerate()
        .map(|(index, d)| MotionView::new(d, index, staggered))
        .collect()
}

#[derive(Debug, Serialize)]
pub struct ProfileView {
    pub name: &'static str,
    pub headline: &'static str,
    pub location: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub github: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CourseView {
    pub code: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HighlightView {
    pub href: String,
    pub title: &'static str,
    pub summary: &'static str,
    pub year: u16,
}

#[derive(Debug, Serialize)]
pub struct MilestoneView {
    pub date: String,
    pub title: &'static str,
    pub organisation: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CvView {
    pub chrome: ChromeView,
    pub profile: ProfileView,
    pub courses: Vec<CourseView>,
    pub highlights: Vec<HighlightView>,
    pub milestones: Vec<MilestoneView>,
}

impl CvView {
    pub fn build(ctx: &PageContext) -> Self {
        let locale = ctx.locale;
        let messages = locale.messages();

        Self {
            chrome: ChromeView::build(ctx, messages.site_title),
            profile: ProfileView {
                name: PROFILE.name.get(locale),
                headline: PROFILE.headline.get(locale),
                location: PROFILE.location.get(locale),
                summary: PROFILE.summary.get(locale),
                email: PROFILE.email,
                github: PROFILE.github,
            },
            courses: COURSES
                .iter()
                .map(|course| CourseView { code: course.code, name: course.name.get(locale) })
                .collect(),
            highlights: PROJECTS
                .iter()
                .filter(|project| project.featured)
                .map(|project| HighlightView {
                    href: SiteRoute::Project(project.slug.to_string()).path(locale),
                    title: project.title.get(locale),
                    summary: project.summary.get(locale),
                    year: project.year,
                })
                .collect(),
            milestones: timeline_sorted()
                .into_iter()
                .take(CV_MILESTONES)
                .map(|event| MilestoneView {
                    date: event.date_label(locale),
                    title: event.title.get(locale),
                    organisation: event.organisation.get(locale),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectCardView {
    pub slug: &'static str,
    pub href: String,
    pub title: &'static str,
    pub summary: String,
    pub year: u16,
    pub tech: &'static [&'static str],
    pub motion: MotionView,
}

#[derive(Debug, Serialize)]
pub struct ProjectsView {
    pub chrome: ChromeView,
    pub cards: Vec<ProjectCardView>,
}

impl ProjectsView {
    pub fn build(ctx: &PageContext, memo: &mut LayoutMemo) -> Self {
        let locale = ctx.locale;
        let motions = motions(ctx, memo, PROJECTS.len());

        let cards = PROJECTS
            .iter()
            .zip(motions)
            .map(|(project, motion)| ProjectCardView {
                slug: project.slug,
                href: SiteRoute::Project(project.slug.to_string()).path(locale),
                title: project.title.get(locale),
                summary: truncate_text(project.summary.get(locale), CARD_SUMMARY_CHARS).into_owned(),
                year: project.year,
                tech: project.tech,
                motion,
            })
            .collect();

        Self {
            chrome: ChromeView::build(ctx, locale.messages().projects_heading),
            cards,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailView {
    pub title: &'static str,
    pub summary: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub year: u16,
    pub repository: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub chrome: ChromeView,
    pub project: ProjectDetailView,
    pub back_href: String,
}

impl ProjectView {
    pub fn build(ctx: &PageContext, project: &'static Project) -> Self {
        let locale = ctx.locale;
        let title = project.title.get(locale);
        Self {
            chrome: ChromeView::build(ctx, title),
            project: ProjectDetailView {
                title,
                summary: project.summary.get(locale),
                description: project.description.get(locale),
                tech: project.tech,
                year: project.year,
                repository: project.repository,
            },
            back_href: SiteRoute::Projects.path(locale),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimelineItemView {
    pub date: String,
    pub kind: TimelineKind,
    pub kind_label: &'static str,
    pub title: &'static str,
    pub organisation: &'static str,
    pub description: &'static str,
    pub motion: MotionView,
}

#[derive(Debug, Serialize)]
pub struct EducationView {
    pub chrome: ChromeView,
    pub events: Vec<TimelineItemView>,
}

impl EducationView {
    pub fn build(ctx: &PageContext, memo: &mut LayoutMemo) -> Self {
        let locale = ctx.locale;
        let messages = locale.messages();
        let sorted = timeline_sorted();
        let motions = motions(ctx, memo, sorted.len());

        let events = sorted
            .into_iter()
            .zip(motions)
            .map(|(event, motion)| TimelineItemView {
                date: event.date_label(locale),
                kind: event.kind,
                kind_label: match event.kind {
                    TimelineKind::Education => messages.kind_education,
                    TimelineKind::Work => messages.kind_work,
                    TimelineKind::Award => messages.kind_award,
                },
                title: event.title.get(locale),
                organisation: event.organisation.get(locale),
                description: event.description.get(locale),
                motion,
            })
            .collect();

        Self {
            chrome: ChromeView::build(ctx, messages.education_heading),
            events,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NotFoundView {
    pub chrome: ChromeView,
    pub path: String,
}

impl NotFoundView {
    pub fn build(ctx: &PageContext) -> Self {
        Self {
            chrome: ChromeView::build(ctx, ctx.locale.messages().not_found_title),
            path: ctx.nav.pathname.clone(),
        }
    }
}
