//! Rendering Module
//!
//! Handlebars pages. Every page is rendered with the aesthetic configuration
//! its route is entitled to, so the CV landing page is plain whatever the
//! site settings say.

pub mod decor;
pub mod view;

use handlebars::Handlebars;
use thiserror::Error;
use tracing::debug;

use crate::aesthetics::{effective_aesthetics, AestheticConfig, NavigationContext, PageType};
use crate::content::{project_by_slug, Project};
use crate::i18n::Locale;
use crate::layout::LayoutMemo;
use crate::routes::SiteRoute;
use view::{CvView, EducationView, NotFoundView, ProjectView, ProjectsView};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template registration failed: {0}")]
    Template(#[from] handlebars::TemplateError),
    #[error("template rendering failed: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Everything a page needs to know about the request it answers
#[derive(Debug, Clone)]
pub struct PageContext {
    pub locale: Locale,
    /// `None` for the not-found page
    pub route: Option<SiteRoute>,
    pub nav: NavigationContext,
    pub page_type: PageType,
    pub aesthetics: AestheticConfig,
}

impl PageContext {
    pub fn new(locale: Locale, route: Option<SiteRoute>, pathname: &str, site: &AestheticConfig) -> Self {
        let nav = NavigationContext::new(pathname, locale.as_str());
        let page_type = nav.page_type();
        let aesthetics = effective_aesthetics(&nav, site);
        Self {
            locale,
            route,
            nav,
            page_type,
            aesthetics,
        }
    }

    /// Context for a resolved route, using its canonical path
    pub fn for_route(locale: Locale, route: SiteRoute, site: &AestheticConfig) -> Self {
        let pathname = route.path(locale);
        Self::new(locale, Some(route), &pathname, site)
    }
}

pub struct Renderer {
    registry: Handlebars<'static>,
}

impl Renderer {
    pub fn new() -> Result<Self, RenderError> {
        let mut registry = Handlebars::new();
        registry.register_partial("head", include_str!("templates/head.hbs"))?;
        registry.register_partial("nav", include_str!("templates/nav.hbs"))?;
        registry.register_partial("footer", include_str!("templates/footer.hbs"))?;
        registry.register_template_string("cv", include_str!("templates/cv.hbs"))?;
        registry.register_template_string("projects", include_str!("templates/projects.hbs"))?;
        registry.register_template_string("project", include_str!("templates/project.hbs"))?;
        registry.register_template_string("education", include_str!("templates/education.hbs"))?;
        registry.register_template_string("not_found", include_str!("templates/not_found.hbs"))?;
        Ok(Self { registry })
    }

    /// Render whatever `ctx.route` points at. `None` when the route names a
    /// project that does not exist.
    pub fn render_route(&self, ctx: &PageContext) -> Result<Option<String>, RenderError> {
        let Some(route) = &ctx.route else {
            return self.render_not_found(ctx).map(Some);
        };
        debug!("Rendering {:?} as {} page", route, ctx.page_type);
        let html = match route {
            SiteRoute::Cv => self.render_cv(ctx)?,
            SiteRoute::Projects => self.render_projects(ctx)?,
            SiteRoute::Project(slug) => match project_by_slug(slug) {
                Some(project) => self.render_project(ctx, project)?,
                None => return Ok(None),
            },
            SiteRoute::Education => self.render_education(ctx)?,
        };
        Ok(Some(html))
    }

    pub fn render_cv(&self, ctx: &PageContext) -> Result<String, RenderError> {
        Ok(self.registry.render("cv", &CvView::build(ctx))?)
    }

    pub fn render_projects(&self, ctx: &PageContext) -> Result<String, RenderError> {
        let mut memo = LayoutMemo::new();
        Ok(self.registry.render("projects", &ProjectsView::build(ctx, &mut memo))?)
    }

    pub fn render_project(&self, ctx: &PageContext, project: &'static Project) -> Result<String, RenderError> {
        Ok(self.registry.render("project", &ProjectView::build(ctx, project))?)
    }

    pub fn render_education(&self, ctx: &PageContext) -> Result<String, RenderError> {
        let mut memo = LayoutMemo::new();
        Ok(self.registry.render("education", &EducationView::build(ctx, &mut memo))?)
    }

    pub fn render_not_found(&self, ctx: &PageContext) -> Result<String, RenderError> {
        Ok(self.registry.render("not_found", &NotFoundView::build(ctx))?)
    }
}
