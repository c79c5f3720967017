//! Culture provider strategies and their composition.

use std::fmt;
use std::sync::Arc;

use crate::culture::context::{CultureSource, RequestContext, Resolution, ResolvedCulture};

/// A strategy that may determine the culture of a request.
///
/// Providers are consulted in order by a [`ProviderChain`]; the first one
/// returning `Some` decides the request.
pub trait CultureProvider: Send + Sync {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Returns `None` when this provider has no opinion about the request.
    fn determine(&self, request: &RequestContext<'_>) -> Option<Resolution>;
}

/// Ordered list of providers with a default fallback.
#[derive(Clone)]
pub struct ProviderChain {
    providers: Vec<Arc<dyn CultureProvider>>,
    default: ResolvedCulture,
}

impl ProviderChain {
    pub fn new(default: ResolvedCulture) -> Self {
        Self {
            providers: Vec::new(),
            default,
        }
    }

    /// Append a provider; it is consulted after those already added.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn CultureProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Resolve using the first provider that determines a culture.
    pub fn resolve(&self, request: &RequestContext<'_>) -> Resolution {
        for provider in &self.providers {
            if let Some(resolution) = provider.determine(request) {
                tracing::trace!(
                    provider = provider.name(),
                    culture = %resolution.culture.culture,
                    "culture provider matched"
                );
                return resolution;
            }
        }
        Resolution::new(self.default.clone(), CultureSource::Default)
    }
}

impl fmt::Debug for ProviderChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.providers.iter().map(|p| p.name()).collect();
        f.debug_struct("ProviderChain")
            .field("providers", &names)
            .field("default", &self.default)
            .finish()
    }
}
