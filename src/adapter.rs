use tracing::debug;

use crate::catalog::ResourceCatalog;
use crate::embed::EmbedResolver;
use crate::sink::{FrameRequest, RenderSink};

/// Front door for trigger events. Owns the catalog, the embed resolver, and
/// the render sink; exposes the two page-reachable entry points plus the
/// download trigger path. All failure modes are silent no-ops, per the
/// reveal contract: no content, no action.
pub struct LinkGateway<S: RenderSink> {
    catalog: ResourceCatalog,
    resolver: EmbedResolver,
    sink: S,
}

impl<S: RenderSink> LinkGateway<S> {
    pub fn new(catalog: ResourceCatalog, resolver: EmbedResolver, sink: S) -> Self {
        Self {
            catalog,
            resolver,
            sink,
        }
    }

    /// Auto-resolve the first listed module, if one exists.
    pub fn initialize(&mut self) -> bool {
        match self.resolver.first_module() {
            Some(key) => self.resolve_and_render(&key),
            None => false,
        }
    }

    /// Resolve a module key and hand the result to the sink. Returns whether
    /// anything was rendered.
    pub fn resolve_and_render(&mut self, module_key: &str) -> bool {
        match self.resolver.resolve(module_key) {
            Some(resolution) => {
                self.sink.embed(FrameRequest {
                    url: resolution.url,
                    restricted: resolution.restricted,
                });
                self.sink.mark_active(module_key);
                true
            }
            None => {
                debug!(module_key, "nothing resolved; render skipped");
                false
            }
        }
    }

    /// Resolve a download index and open it. Returns whether a window was
    /// requested.
    pub fn open_download(&mut self, index: usize) -> bool {
        match self.catalog.extract(index) {
            Some(content) => {
                self.sink.open_window(content);
                true
            }
            None => {
                debug!(index, "no catalog entry; nothing opened");
                false
            }
        }
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    pub fn resolver(&self) -> &EmbedResolver {
        &self.resolver
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
