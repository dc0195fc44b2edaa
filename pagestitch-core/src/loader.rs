// Header/footer loading with candidate base paths

use crate::fallback::{Component, load_fallback_component};
use crate::page::Page;
use futures::future::join;
use pagestitch_fetch::Fetch;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Candidate locations of the `components/` directory, relative to the page
pub const DEFAULT_BASE_PATHS: [&str; 3] = ["./components/", "../components/", "/components/"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot resolve {path} against {location}: {source}")]
    Resolve {
        path: String,
        location: String,
        #[source]
        source: url::ParseError,
    },
}

/// Options for configuring a loader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
    pub base_paths: Vec<String>,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            base_paths: DEFAULT_BASE_PATHS.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Where the markup injected for a component came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FragmentOrigin {
    Fetched { url: String },
    Fallback { url: Option<String>, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOutcome {
    pub component: Component,
    pub origin: FragmentOrigin,
    /// False when the page has no placeholder for the component
    pub injected: bool,
}

/// Summary of one `load_all_components` run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadReport {
    pub location: String,
    pub attempted: Vec<String>,
    pub resolved_base: Option<String>,
    pub components: Vec<ComponentOutcome>,
    /// Every candidate failed and both placeholders got the built-in markup
    pub last_resort: bool,
    pub navigation_bound: bool,
    pub active_link: Option<String>,
}

impl LoadReport {
    pub fn outcome(&self, component: Component) -> Option<&ComponentOutcome> {
        self.components.iter().find(|o| o.component == component)
    }

    pub fn fallback_count(&self) -> usize {
        self.components
            .iter()
            .filter(|o| matches!(o.origin, FragmentOrigin::Fallback { .. }))
            .count()
    }
}

struct Fragment {
    markup: String,
    origin: FragmentOrigin,
}

pub struct ComponentLoader<F> {
    fetcher: F,
    base_paths: Vec<String>,
}

impl<F: Fetch + Sync> ComponentLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self::with_options(fetcher, LoaderOptions::default())
    }

    pub fn with_options(fetcher: F, options: LoaderOptions) -> Self {
        Self {
            fetcher,
            base_paths: options.base_paths,
        }
    }

    pub fn with_base_paths(mut self, base_paths: Vec<String>) -> Self {
        self.base_paths = base_paths;
        self
    }

    pub fn base_paths(&self) -> &[String] {
        &self.base_paths
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch one component from `url` into its placeholder.
    ///
    /// Any failure is replaced by the component's built-in markup; nothing is
    /// returned as an error.
    pub async fn load_component(
        &self,
        page: &mut Page,
        component: Component,
        url: &Url,
    ) -> ComponentOutcome {
        let fragment = self.fetch_fragment(component, url).await;
        inject(page, component, fragment)
    }

    /// Try each candidate base path in order, inject the first pair that loads,
    /// then initialize navigation.
    ///
    /// Fetch failures are absorbed per component, so a candidate only fails when
    /// its URLs cannot be built from the page location.
    pub async fn load_all_components(&self, page: &mut Page) -> LoadReport {
        let mut report = LoadReport {
            location: page.location().to_string(),
            ..Default::default()
        };

        for base_path in &self.base_paths {
            report.attempted.push(base_path.clone());
            debug!("Trying components at {}", base_path);

            match self.try_candidate(page, base_path).await {
                Ok(components) => {
                    info!("Components loaded using base path {}", base_path);
                    report.resolved_base = Some(base_path.clone());
                    report.components = components;
                    finish(page, &mut report);
                    return report;
                }
                Err(e) => {
                    debug!("Skipping base path {}: {}", base_path, e);
                    continue;
                }
            }
        }

        warn!(
            "No usable base path for {}, using built-in header and footer",
            page.location()
        );
        report.last_resort = true;
        report.components = Component::ALL
            .into_iter()
            .map(|component| ComponentOutcome {
                component,
                origin: FragmentOrigin::Fallback {
                    url: None,
                    reason: "no usable candidate base path".to_string(),
                },
                injected: load_fallback_component(page.document_mut(), component.element_id()),
            })
            .collect();
        finish(page, &mut report);
        report
    }

    async fn try_candidate(
        &self,
        page: &mut Page,
        base_path: &str,
    ) -> Result<Vec<ComponentOutcome>, LoadError> {
        let header_url = candidate_url(page.location(), base_path, Component::Header)?;
        let footer_url = candidate_url(page.location(), base_path, Component::Footer)?;

        let (header, footer) = join(
            self.fetch_fragment(Component::Header, &header_url),
            self.fetch_fragment(Component::Footer, &footer_url),
        )
        .await;

        Ok(vec![
            inject(page, Component::Header, header),
            inject(page, Component::Footer, footer),
        ])
    }

    async fn fetch_fragment(&self, component: Component, url: &Url) -> Fragment {
        match self.fetcher.fetch_text(url).await {
            Ok(markup) => Fragment {
                markup,
                origin: FragmentOrigin::Fetched {
                    url: url.to_string(),
                },
            },
            Err(e) => {
                warn!("Failed to load {} from {}: {}", component, url, e);
                Fragment {
                    markup: component.fallback_markup().to_string(),
                    origin: FragmentOrigin::Fallback {
                        url: Some(url.to_string()),
                        reason: e.to_string(),
                    },
                }
            }
        }
    }
}

/// `{base_path}{file_name}` resolved against the page location
pub fn candidate_url(
    location: &Url,
    base_path: &str,
    component: Component,
) -> Result<Url, LoadError> {
    let path = format!("{}{}", base_path, component.file_name());
    location.join(&path).map_err(|source| LoadError::Resolve {
        path,
        location: location.to_string(),
        source,
    })
}

fn inject(page: &mut Page, component: Component, fragment: Fragment) -> ComponentOutcome {
    let injected = page
        .document_mut()
        .set_inner_html_by_id(component.element_id(), &fragment.markup);
    if !injected {
        debug!("No #{} placeholder on page", component.element_id());
    }

    ComponentOutcome {
        component,
        origin: fragment.origin,
        injected,
    }
}

fn finish(page: &mut Page, report: &mut LoadReport) {
    let active = page.initialize_navigation();
    report.navigation_bound = page.navigation().is_some();
    report.active_link = active.and_then(|link| {
        page.document()
            .attribute(link, "href")
            .map(|href| href.to_string())
    });
}
