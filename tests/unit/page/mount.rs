use super::*;
use crate::engine::config::EngineConfig;
use crate::region::def::RegionDef;
use crate::region::group::SlideGroupDef;
use crate::page::model::PageRegionDef;

fn region(def: RegionDef) -> PageRegionDef {
    PageRegionDef {
        region: def,
        bindings: Vec::new(),
        staggers: Vec::new(),
    }
}

#[test]
fn failing_definitions_are_skipped() {
    let page = PageDef {
        regions: vec![
            region(RegionDef::new("hero", 0.0, 800.0)),
            region(RegionDef::new("broken", 900.0, 900.0)),
        ],
        groups: vec![SlideGroupDef::new("museum", [".a", ".b", ".c"], 2000.0, 4000.0)],
    };
    let mut engine = Engine::manual(EngineConfig::default()).unwrap();
    let mounted = engine.mount(&page);

    assert!(mounted.region("hero").is_some());
    assert!(mounted.region("broken").is_none());
    assert!(mounted.group("museum").is_some());
    assert_eq!(mounted.failed.len(), 1);
    assert_eq!(mounted.failed[0].0, "broken");
    assert!(mounted.failed[0].1.is_invalid_range());
    assert_eq!(engine.region_count(), 4);

    assert_eq!(engine.revert_scope(mounted.scope), 2);
    assert_eq!(engine.region_count(), 0);
}
