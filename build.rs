use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/bacteria.json");
    validate_catalog_file(catalog_path);
    set_build_dependencies();
}

fn validate_catalog_file(catalog_path: &Path) {
    // Ensure catalog exists at build time
    assert!(
        catalog_path.exists(),
        "\n\nCATALOG BUILD ERROR: File not found\n\
         Path: {}\n\
         Please create the catalog file before building.\n",
        catalog_path.display()
    );

    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    let catalog: serde_json::Value = serde_json::from_str(&catalog_contents).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Invalid JSON\n\
             Path: {}\n\
             Error: {e}\n\
             Hint: Check for missing commas, brackets, or invalid syntax.\n",
            catalog_path.display()
        );
    });

    validate_catalog_structure(&catalog);
}

fn validate_catalog_structure(catalog: &serde_json::Value) {
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let records = catalog.get("records").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'records' field\n\
             The catalog must have a top-level 'records' array.\n"
        );
    });

    let records = records.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'records' must be an array\n\
             Got: {records}\n"
        );
    });

    let total_aliases = validate_records(records);

    println!(
        "cargo:warning=Validated catalog: {} records, {total_aliases} total aliases",
        records.len()
    );
}

fn validate_records(records: &[serde_json::Value]) -> usize {
    let mut seen_keys = HashSet::new();
    let mut total_aliases = 0;

    for (i, record) in records.iter().enumerate() {
        let key = record
            .get("key")
            .and_then(|v| v.as_str())
            .unwrap_or("<unknown>");

        validate_record_fields(record, key, i);

        assert!(
            key == key.to_lowercase(),
            "\n\nCATALOG BUILD ERROR: Record key '{key}' (index {i}) must be lowercase\n"
        );
        assert!(
            seen_keys.insert(key.to_string()),
            "\n\nCATALOG BUILD ERROR: Duplicate record key '{key}' (index {i})\n\
             Canonical keys must be unique.\n"
        );

        total_aliases += validate_record_aliases(record, key);
    }

    total_aliases
}

fn validate_record_fields(record: &serde_json::Value, key: &str, index: usize) {
    for field in ["key", "display_name", "classification", "description"] {
        let value = record.get(field).and_then(|v| v.as_str());
        assert!(
            value.is_some_and(|v| !v.trim().is_empty()),
            "\n\nCATALOG BUILD ERROR: Record '{key}' (index {index}) missing or blank '{field}' field\n"
        );
    }
}

fn validate_record_aliases(record: &serde_json::Value, key: &str) -> usize {
    let Some(aliases) = record.get("aliases").and_then(|a| a.as_array()) else {
        return 0;
    };

    for (j, alias) in aliases.iter().enumerate() {
        let alias = alias.as_str().unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Record '{key}' alias {j} is not a string\n");
        });
        assert!(
            !alias.trim().is_empty(),
            "\n\nCATALOG BUILD ERROR: Record '{key}' alias {j} is blank\n\
             Blank aliases would match every query.\n"
        );
    }

    aliases.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/bacteria.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
