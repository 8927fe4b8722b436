use crate::{
    engine::engine::Engine,
    engine::source::ScrollSource,
    foundation::error::ScrollyteError,
    foundation::ids::{GroupHandle, RegionHandle, ScopeId},
    page::model::PageDef,
};

/// Handles produced by [`Engine::mount`].
#[derive(Debug)]
pub struct MountedPage {
    /// Scope holding every registration of the page.
    pub scope: ScopeId,
    /// Registered regions by name.
    pub regions: Vec<(String, RegionHandle)>,
    /// Registered slide groups by name.
    pub groups: Vec<(String, GroupHandle)>,
    /// Definitions that failed to register; their targets keep their static state.
    pub failed: Vec<(String, ScrollyteError)>,
}

impl MountedPage {
    /// Handle of the region named `name`.
    pub fn region(&self, name: &str) -> Option<RegionHandle> {
        self.regions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| *h)
    }

    /// Handle of the slide group named `name`.
    pub fn group(&self, name: &str) -> Option<GroupHandle> {
        self.groups
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, h)| *h)
    }
}

impl<S: ScrollSource> Engine<S> {
    /// Register every region and group of `page` in a fresh scope.
    ///
    /// A definition that fails is skipped and reported in [`MountedPage::failed`]; the rest
    /// of the page still mounts. Unmount with [`Engine::revert_scope`].
    #[tracing::instrument(skip(self, page), fields(regions = page.regions.len(), groups = page.groups.len()))]
    pub fn mount(&mut self, page: &PageDef) -> MountedPage {
        let scope = self.create_scope();
        let mut mounted = MountedPage {
            scope,
            regions: Vec::with_capacity(page.regions.len()),
            groups: Vec::with_capacity(page.groups.len()),
            failed: Vec::new(),
        };

        for r in &page.regions {
            let name = r.region.name.clone();
            let result = r
                .all_bindings()
                .and_then(|bindings| self.register_in(scope, r.region.clone(), bindings));
            match result {
                Ok(handle) => mounted.regions.push((name, handle)),
                Err(err) => {
                    tracing::warn!(region = %name, error = %err, "region skipped");
                    mounted.failed.push((name, err));
                }
            }
        }

        for g in &page.groups {
            match self.register_group_in(scope, g.clone()) {
                Ok(handle) => mounted.groups.push((g.name.clone(), handle)),
                Err(err) => {
                    tracing::warn!(group = %g.name, error = %err, "slide group skipped");
                    mounted.failed.push((g.name.clone(), err));
                }
            }
        }
        mounted
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/mount.rs"]
mod tests;
