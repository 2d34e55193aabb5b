use cme::{Activity, CatalogError, LoadedCatalog};
use pretty_assertions::assert_eq;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn sample_catalog() -> LoadedCatalog {
    let mut catalog = LoadedCatalog::empty();
    let specs = [
        ("CPD", "Thayers", "Skin Care", Activity::NonActive),
        ("CPD", "John", "Skin Care", Activity::Active),
        ("CPD", "Michael", "Hair, Care", Activity::Active),
    ];
    for (division, brand, category, activity) in specs {
        let id = catalog.push_empty();
        let row = catalog.row_mut(id).expect("just pushed");
        row.division = division.to_string();
        row.brand = brand.to_string();
        row.category = category.to_string();
        row.franchise = "Body Moisturizer".to_string();
        row.sub_franchise = "Body".to_string();
        row.parent_tag = "Skin CareBody Moisturizer".to_string();
        row.activity = activity;
    }
    catalog
}

fn field_tuples(catalog: &LoadedCatalog) -> Vec<Vec<String>> {
    catalog
        .rows
        .iter()
        .map(|r| {
            vec![
                r.division.clone(),
                r.brand.clone(),
                r.category.clone(),
                r.franchise.clone(),
                r.sub_franchise.clone(),
                r.parent_tag.clone(),
                r.activity.as_str().to_string(),
            ]
        })
        .collect()
}

#[test]
fn save_then_load_reproduces_rows_in_order() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.csv");

    let mut catalog = sample_catalog();
    catalog.save_to_path(&path)?;
    assert!(!catalog.dirty);
    assert_eq!(catalog.source_path.as_deref(), Some(path.as_path()));

    let reloaded = LoadedCatalog::load_path(&path)?;
    assert_eq!(field_tuples(&reloaded), field_tuples(&catalog));
    Ok(())
}

#[test]
fn values_with_delimiters_survive_the_round_trip() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.csv");

    let mut catalog = LoadedCatalog::empty();
    let id = catalog.push_empty();
    let row = catalog.row_mut(id).expect("just pushed");
    row.brand = "Crabtree, Evelyn & \"Co\"".to_string();
    row.parent_tag = "multi\nline".to_string();

    catalog.save_to_path(&path)?;
    let reloaded = LoadedCatalog::load_path(&path)?;
    assert_eq!(reloaded.rows.len(), 1);
    assert_eq!(reloaded.rows[0].brand, "Crabtree, Evelyn & \"Co\"");
    assert_eq!(reloaded.rows[0].parent_tag, "multi\nline");
    Ok(())
}

#[test]
fn empty_catalog_saves_a_bare_header_row() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("catalog.csv");

    LoadedCatalog::empty().save_to_path(&path)?;
    let text = std::fs::read_to_string(&path)?;
    assert_eq!(
        text.trim_end(),
        "Division,Brand,Category,Franchise,SubFranchise,ParentTag,Activity"
    );

    let reloaded = LoadedCatalog::load_path(&path)?;
    assert!(reloaded.rows.is_empty());
    Ok(())
}

#[test]
fn load_or_empty_falls_back_on_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("does_not_exist.csv");

    let catalog = LoadedCatalog::load_or_empty(&path);
    assert!(catalog.rows.is_empty());
    assert!(!catalog.dirty);
    // The path is kept so a later save still targets it.
    assert_eq!(catalog.source_path.as_deref(), Some(path.as_path()));
}

#[test]
fn load_or_empty_falls_back_on_garbage_content() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("garbage.csv");
    std::fs::write(&path, b"Wrong,Header\n1,2\n")?;

    let catalog = LoadedCatalog::load_or_empty(&path);
    assert!(catalog.rows.is_empty());
    Ok(())
}

#[test]
fn load_path_reports_header_mismatch() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("bad_header.csv");
    std::fs::write(&path, b"Brand,Division\nA,B\n")?;

    let err = LoadedCatalog::load_path(&path).unwrap_err();
    assert!(
        err.chain()
            .any(|c| matches!(c.downcast_ref::<CatalogError>(), Some(CatalogError::HeaderMismatch { .. }))),
        "unexpected error: {err:#}"
    );
    Ok(())
}

#[test]
fn failed_save_leaves_the_store_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;

    let mut catalog = sample_catalog();
    catalog.mark_dirty();
    let before = field_tuples(&catalog);

    // A directory is not a writable file target.
    let result = catalog.save_to_path(dir.path());
    assert!(result.is_err());
    assert_eq!(field_tuples(&catalog), before);
    assert!(catalog.dirty);
    Ok(())
}
