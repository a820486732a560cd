use std::path::{Path, PathBuf};

#[allow(dead_code)]
pub const NS: &str = "urn:ietf:params:xml:ns:iris-transport";

#[allow(dead_code)]
pub fn fixture(group: &str, name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(group)
        .join(name)
}

#[allow(dead_code)]
pub fn collect_xml_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(read_dir) = std::fs::read_dir(dir) {
        for entry in read_dir.flatten() {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "xml") {
                files.push(path);
            }
        }
    }
    files.sort();
    files
}

/// Wrap `body` in a root element declaring the transport namespace.
#[allow(dead_code)]
pub fn transport_document(root: &str, attributes: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<{root} xmlns="{NS}"{attributes}>{body}</{root}>"#
    )
}
