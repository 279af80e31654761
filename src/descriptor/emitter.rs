// src/descriptor/emitter.rs

//! ESP-IDF component descriptor generation

use super::{DescriptorError, SourceList};
use std::io::Write;
use std::path::Path;
use tempfile::Builder;
use tracing::debug;

/// Fixed settings baked into every generated component descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmissionConfig {
    /// `INCLUDE_DIRS` entries, relative to the component directory
    pub include_dirs: &'static [&'static str],
    /// `REQUIRES` entries
    pub requires: &'static [&'static str],
    /// Private compile options applied to `${COMPONENT_LIB}`
    pub compile_options: &'static [&'static str],
}

impl Default for EmissionConfig {
    fn default() -> Self {
        Self {
            include_dirs: &[".", "screens", "components", "images"],
            requires: &["lvgl"],
            compile_options: &["-Wno-unused-variable", "-Wno-unused-function"],
        }
    }
}

const ENTRY_INDENT: &str = "        ";
const OPTION_INDENT: &str = "    ";

/// Render the component descriptor for `sources`
///
/// Output depends only on the inputs, so the same source list always
/// produces byte-identical text. Sources are quoted as-is, in order.
pub fn render(sources: &SourceList, config: &EmissionConfig) -> String {
    let mut out = String::new();

    out.push_str("# ESP-IDF Component CMakeLists.txt\n");
    out.push_str("# Auto-generated from SquareLine Studio export\n");
    out.push('\n');
    out.push_str("idf_component_register(\n");

    // The exporter's layout keeps a trailing space after each keyword
    out.push_str("    SRCS \n");
    let separator = format!("\n{}", ENTRY_INDENT);
    let quoted: Vec<String> = sources.iter().map(|src| format!("\"{}\"", src)).collect();
    out.push_str(&format!("{}{}\n", ENTRY_INDENT, quoted.join(separator.as_str())));

    out.push_str("    INCLUDE_DIRS \n");
    for dir in config.include_dirs {
        out.push_str(&format!("{}\"{}\"\n", ENTRY_INDENT, dir));
    }

    out.push_str("    REQUIRES \n");
    for dep in config.requires {
        out.push_str(&format!("{}{}\n", ENTRY_INDENT, dep));
    }
    out.push_str(")\n");

    out.push('\n');
    out.push_str("# Add compile options if needed\n");
    out.push_str("target_compile_options(${COMPONENT_LIB} PRIVATE\n");
    for option in config.compile_options {
        out.push_str(&format!("{}{}\n", OPTION_INDENT, option));
    }
    out.push_str(")\n");

    out
}

/// Render and write the component descriptor to `path`
///
/// Any previous content is replaced. The text is written to a uniquely named
/// hidden temp file next to `path` and renamed into place, so `path` is either
/// the old file or the complete new one and no other file in the directory is
/// touched.
pub fn write_component(
    path: &Path,
    sources: &SourceList,
    config: &EmissionConfig,
) -> Result<(), DescriptorError> {
    let content = render(sources, config);
    let io_err = |source| DescriptorError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let prefix = match path.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".component.".to_string(),
    };

    // Dropping `temp` on an early return removes it
    let mut temp = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(io_err)?;
    temp.write_all(content.as_bytes()).map_err(io_err)?;

    // tempfile creates 0600; the descriptor is a normal project file
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(io_err)?;
    }

    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;

    debug!("Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sources(entries: &[&str]) -> SourceList {
        SourceList::new(entries.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_render_full_layout() {
        let text = render(
            &sources(&["ui.c", "ui_helpers.c", "ui_events.c"]),
            &EmissionConfig::default(),
        );
        let expected = concat!(
            "# ESP-IDF Component CMakeLists.txt\n",
            "# Auto-generated from SquareLine Studio export\n",
            "\n",
            "idf_component_register(\n",
            "    SRCS \n",
            "        \"ui.c\"\n",
            "        \"ui_helpers.c\"\n",
            "        \"ui_events.c\"\n",
            "    INCLUDE_DIRS \n",
            "        \".\"\n",
            "        \"screens\"\n",
            "        \"components\"\n",
            "        \"images\"\n",
            "    REQUIRES \n",
            "        lvgl\n",
            ")\n",
            "\n",
            "# Add compile options if needed\n",
            "target_compile_options(${COMPONENT_LIB} PRIVATE\n",
            "    -Wno-unused-variable\n",
            "    -Wno-unused-function\n",
            ")\n",
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_render_deterministic() {
        let list = sources(&["b.c", "a.c"]);
        let config = EmissionConfig::default();
        assert_eq!(render(&list, &config), render(&list, &config));
    }

    #[test]
    fn test_render_preserves_order() {
        let text = render(&sources(&["z.c", "a.c", "m.c"]), &EmissionConfig::default());
        let z = text.find("\"z.c\"").unwrap();
        let a = text.find("\"a.c\"").unwrap();
        let m = text.find("\"m.c\"").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn test_render_empty_sources() {
        let text = render(&SourceList::default(), &EmissionConfig::default());
        assert!(text.contains("    SRCS \n        \n    INCLUDE_DIRS \n"));
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        fs::write(&path, "old content that should disappear").unwrap();

        write_component(&path, &sources(&["ui.c"]), &EmissionConfig::default()).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("old content"));
        assert!(content.contains("\"ui.c\""));
        let names: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["CMakeLists.txt"]);
    }

    #[test]
    fn test_write_leaves_neighbouring_tmp_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        let neighbour = temp_dir.path().join("CMakeLists.tmp");
        fs::write(&neighbour, "user notes").unwrap();

        write_component(&path, &sources(&["ui.c"]), &EmissionConfig::default()).unwrap();

        assert_eq!(fs::read_to_string(&neighbour).unwrap(), "user notes");
        assert!(fs::read_to_string(&path).unwrap().contains("\"ui.c\""));
    }

    #[cfg(unix)]
    #[test]
    fn test_write_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("CMakeLists.txt");
        write_component(&path, &sources(&["ui.c"]), &EmissionConfig::default()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("CMakeLists.txt");
        let err = write_component(&path, &sources(&["ui.c"]), &EmissionConfig::default())
            .unwrap_err();
        assert!(matches!(err, DescriptorError::Io { .. }));
    }
}
