use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes a zip archive holding `entries` in the given order.
pub fn create_jar(path: &Path, entries: &[(&str, &[u8])]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let file = File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();
    for (name, bytes) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(bytes).unwrap();
    }
    zip.finish().unwrap();
}

/// A library jar carrying Maven metadata for `group:artifact:version`.
pub fn create_maven_library(path: &Path, group: &str, artifact: &str, version: &str) {
    let metadata = format!("META-INF/maven/{}/{}/pom.properties", group, artifact);
    let properties = format!(
        "groupId={}\nartifactId={}\nversion={}\n",
        group, artifact, version
    );
    create_jar(
        path,
        &[
            ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n"),
            (metadata.as_str(), properties.as_bytes()),
        ],
    );
}

const SAMPLE_GRAPH: &str = r#"
[[bundle]]
symbolic_name = "org.example.core"
version = "1.0.0"
location = "bundles/org.example.core"
classpath = [".", "lib/wurst.jar"]

[[bundle.requires]]
symbolic_name = "org.example.api"
range = "[1.0,2.0)"

[[bundle]]
symbolic_name = "org.example.api"
version = "1.2.0"
location = "bundles/org.example.api_1.2.0.jar"

[[bundle]]
symbolic_name = "org.example.core.source"
version = "1.0.0"
location = "bundles/org.example.core.source_1.0.0.jar"
headers = { "Eclipse-SourceBundle" = "org.example.core;version=\"1.0.0\"" }
"#;

/// Lays out a small resolved graph under `dir` and returns the graph file.
///
/// `org.example.core` is an exploded bundle embedding `hans:wurst:3`; it
/// requires the `org.example.api` jar and has an attached source bundle.
pub fn create_sample_graph(dir: &Path) -> PathBuf {
    let core = dir.join("bundles/org.example.core");
    fs::create_dir_all(core.join("META-INF")).unwrap();
    fs::write(core.join("META-INF/MANIFEST.MF"), "Manifest-Version: 1.0\n").unwrap();
    create_maven_library(&core.join("lib/wurst.jar"), "hans", "wurst", "3");

    create_jar(
        &dir.join("bundles/org.example.api_1.2.0.jar"),
        &[("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\n")],
    );
    create_jar(
        &dir.join("bundles/org.example.core.source_1.0.0.jar"),
        &[("org/example/core/Core.java", b"class Core {}")],
    );

    write_graph(dir, SAMPLE_GRAPH)
}

pub fn write_graph(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("bundles.toml");
    fs::write(&path, content).unwrap();
    path
}
