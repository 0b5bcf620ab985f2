use folio_core::catalog::fallback_records;
use folio_core::gallery::Catalog;
use folio_core::project::RawProject;

fn record(id: &str, name: &str) -> RawProject {
    RawProject {
        project_id: Some(id.to_string()),
        project_name: Some(name.to_string()),
        ..Default::default()
    }
}

fn sample_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("alpha", "Alpha"),
        record("beta", "Beta"),
        record("gamma", "Gamma"),
    ])
}

#[test]
fn first_entry_is_active_after_build() {
    let catalog = Catalog::from_records(fallback_records());
    assert_eq!(catalog.active_id(), Some("project_ahmad_portfolio_scss"));
    let active = catalog.active_project().expect("active project");
    assert_eq!(active.project_name, "Portfolio SCSS");
    assert!(active.has_url());
}

#[test]
fn empty_catalog_has_no_selection() {
    let catalog = Catalog::from_records(Vec::new());
    assert!(catalog.is_empty());
    assert_eq!(catalog.active_id(), None);
    assert!(catalog.active_project().is_none());
}

#[test]
fn select_moves_the_active_entry_and_reports_the_previous_one() {
    let mut catalog = sample_catalog();
    let change = catalog.select("beta").expect("beta is known");
    assert_eq!(change.previous.as_deref(), Some("alpha"));
    assert_eq!(change.current, "beta");
    assert_eq!(catalog.active_id(), Some("beta"));
}

#[test]
fn unknown_ids_are_ignored() {
    let mut catalog = sample_catalog();
    assert!(catalog.select("delta").is_none());
    assert_eq!(catalog.active_id(), Some("alpha"));
}

#[test]
fn reselecting_the_active_entry_is_idempotent() {
    let mut catalog = sample_catalog();
    catalog.select("gamma").expect("gamma is known");
    let change = catalog.select("gamma").expect("still known");
    assert_eq!(change.previous.as_deref(), Some("gamma"));
    assert_eq!(change.current, "gamma");
    assert_eq!(catalog.active_id(), Some("gamma"));
}

#[test]
fn exactly_one_entry_is_active_at_all_times() {
    let mut catalog = sample_catalog();
    for id in ["beta", "beta", "missing", "gamma", "alpha"] {
        let _ = catalog.select(id);
        let active: Vec<_> = catalog
            .entries()
            .iter()
            .filter(|project| Some(project.project_id.as_str()) == catalog.active_id())
            .collect();
        assert_eq!(active.len(), 1);
    }
}

#[test]
fn duplicate_ids_keep_the_latest_record_for_lookup() {
    let catalog = Catalog::from_records(vec![
        record("alpha", "First"),
        record("alpha", "Second"),
    ]);
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("alpha").map(|p| p.project_name.as_str()), Some("Second"));
}

#[test]
fn normalization_backfills_ids_used_for_selection() {
    let mut catalog = Catalog::from_records(vec![RawProject::default(), record("beta", "Beta")]);
    assert_eq!(catalog.active_id(), Some("project_1"));
    assert!(catalog.select("project_1").is_some());
}
