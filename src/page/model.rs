use crate::{
    animation::binding::BindingDef,
    animation::stagger::StaggerDef,
    foundation::error::{ScrollyteError, ScrollyteResult},
    region::def::RegionDef,
    region::group::SlideGroupDef,
};

/// Declarative description of every scroll effect on one page.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageDef {
    /// Regions in registration order; earlier pinned regions win overlaps.
    #[serde(default)]
    pub regions: Vec<PageRegionDef>,
    /// Horizontal slide groups, registered after the regions.
    #[serde(default)]
    pub groups: Vec<SlideGroupDef>,
}

/// Region definition together with the bindings it drives.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PageRegionDef {
    /// Region fields.
    #[serde(flatten)]
    pub region: RegionDef,
    /// Explicit property bindings.
    #[serde(default)]
    pub bindings: Vec<BindingDef>,
    /// Staggered bindings, expanded after the explicit ones.
    #[serde(default)]
    pub staggers: Vec<StaggerDef>,
}

impl PageRegionDef {
    /// Explicit bindings followed by every expanded stagger.
    pub fn all_bindings(&self) -> ScrollyteResult<Vec<BindingDef>> {
        let mut out = self.bindings.clone();
        for stagger in &self.staggers {
            out.extend(stagger.expand()?);
        }
        Ok(out)
    }
}

impl PageDef {
    /// Parse a JSON page definition.
    ///
    /// Only the document shape is checked here; call [`PageDef::validate`] for the static
    /// checks, or mount it and inspect the failures.
    pub fn from_json_str(s: &str) -> ScrollyteResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Check every definition that can be checked without layout.
    pub fn validate(&self) -> ScrollyteResult<()> {
        for r in &self.regions {
            r.region.validate()?;
            for b in r.all_bindings()? {
                b.validate()?;
            }
        }
        for g in &self.groups {
            g.validate()?;
        }

        let mut names: Vec<&str> = self
            .regions
            .iter()
            .map(|r| r.region.name.as_str())
            .chain(self.groups.iter().map(|g| g.name.as_str()))
            .collect();
        names.sort_unstable();
        if let Some(dup) = names.windows(2).find(|w| w[0] == w[1]) {
            return Err(ScrollyteError::validation(format!(
                "duplicate region name `{}`",
                dup[0]
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/model.rs"]
mod tests;
