use std::collections::HashSet;
use std::path::Path;

fn main() {
    let catalog_path = Path::new("catalogs/parts.json");
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

    // Read catalog file
    let catalog_contents = std::fs::read_to_string(catalog_path).unwrap_or_else(|e| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Failed to read file\n\
             Path: {}\n\
             Error: {e}\n",
            catalog_path.display()
        );
    });

    // Parse and validate JSON
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
    // Validate structure
    assert!(
        catalog.is_object(),
        "\n\nCATALOG BUILD ERROR: Root must be a JSON object\n\
         Got: {catalog}\n"
    );

    let items = catalog.get("items").unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: Missing 'items' field\n\
             The catalog must have a top-level 'items' array.\n"
        );
    });

    let items = items.as_array().unwrap_or_else(|| {
        panic!(
            "\n\nCATALOG BUILD ERROR: 'items' must be an array\n\
             Got: {items}\n"
        );
    });

    let articles = validate_items(items);
    let keys = validate_key_table(catalog, &articles);

    println!(
        "cargo:warning=Validated catalog: {} items, {keys} key-table rows",
        items.len()
    );
}

fn validate_items(items: &[serde_json::Value]) -> HashSet<String> {
    let mut articles = HashSet::new();

    for (i, item) in items.iter().enumerate() {
        let article = item
            .get("article")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Item at index {i} missing 'article' field\n")
            });
        assert!(
            item.get("name").and_then(|v| v.as_str()).is_some(),
            "\n\nCATALOG BUILD ERROR: Item '{article}' (index {i}) missing 'name' field\n"
        );
        assert!(
            item.get("price").is_some(),
            "\n\nCATALOG BUILD ERROR: Item '{article}' (index {i}) missing 'price' field\n"
        );
        articles.insert(article.to_string());
    }

    articles
}

fn validate_key_table(catalog: &serde_json::Value, articles: &HashSet<String>) -> usize {
    let Some(rows) = catalog.get("key_table").and_then(|k| k.as_array()) else {
        return 0;
    };

    for (i, row) in rows.iter().enumerate() {
        let key = row.get("key").and_then(|v| v.as_str()).unwrap_or_else(|| {
            panic!("\n\nCATALOG BUILD ERROR: Key-table row {i} missing 'key' field\n")
        });
        let article = row
            .get("article")
            .and_then(|v| v.as_str())
            .unwrap_or_else(|| {
                panic!("\n\nCATALOG BUILD ERROR: Key-table row '{key}' missing 'article' field\n")
            });

        // Every table row must point at a real item
        assert!(
            articles.contains(article),
            "\n\nCATALOG BUILD ERROR: Key-table row '{key}' references unknown article '{article}'\n"
        );
    }

    rows.len()
}

fn set_build_dependencies() {
    // Tell cargo to rerun if catalog changes
    println!("cargo:rerun-if-changed=catalogs/parts.json");

    // Tell cargo to rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
