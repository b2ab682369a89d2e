#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    /// Relative paths of every directory and `.rs` file below `dir`
    fn relative_tree(dir: &Path, base: &Path, out: &mut BTreeSet<String>) -> io::Result<()> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                out.insert(relative);
                relative_tree(&path, base, out)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                out.insert(relative);
            }
        }
        Ok(())
    }

    fn tree(root: &str) -> BTreeSet<String> {
        let base = Path::new(root);
        let mut paths = BTreeSet::new();
        let result = relative_tree(base, base, &mut paths);
        assert!(result.is_ok(), "Failed to read {root}: {result:?}");
        paths
    }

    fn requires_counterpart(path: &str) -> bool {
        !(path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs"))
    }

    #[test]
    fn test_all_src_files_have_unit_tests() {
        let tests = tree(UNIT);
        let missing: Vec<String> = tree(SRC)
            .into_iter()
            .filter(|path| requires_counterpart(path) && !tests.contains(path))
            .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
            .collect();

        assert!(
            missing.is_empty(),
            "Source modules without unit tests:\n{}",
            missing.join("\n")
        );
    }

    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let sources = tree(SRC);
        let orphaned: Vec<String> = tree(UNIT)
            .into_iter()
            .filter(|path| !path.ends_with("mod.rs") && !sources.contains(path))
            .map(|path| format!("  - tests/unit/{path} (no src/{path})"))
            .collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests for modules that no longer exist:\n{}",
            orphaned.join("\n")
        );
    }

    #[test]
    fn test_all_test_files_contain_tests() {
        let without_tests: Vec<String> = tree("tests")
            .into_iter()
            .filter(|path| {
                Path::new(path).extension().is_some_and(|ext| ext == "rs")
                    && !path.ends_with("mod.rs")
            })
            .filter(|path| {
                fs::read_to_string(Path::new("tests").join(path))
                    .is_ok_and(|content| !content.contains("#[test]"))
            })
            .map(|path| format!("  - tests/{path}"))
            .collect();

        assert!(
            without_tests.is_empty(),
            "Test files without any #[test] function:\n{}",
            without_tests.join("\n")
        );
    }

    #[test]
    fn test_all_public_modules_are_documented() {
        let undocumented: Vec<String> = tree(SRC)
            .into_iter()
            .filter(|path| path.ends_with("mod.rs"))
            .flat_map(|path| {
                let content = fs::read_to_string(Path::new(SRC).join(&path)).unwrap_or_default();
                let lines: Vec<&str> = content.lines().collect();
                lines
                    .iter()
                    .enumerate()
                    .filter(|(_, line)| line.starts_with("pub mod "))
                    .filter(|(index, _)| {
                        index
                            .checked_sub(1)
                            .and_then(|previous| lines.get(previous))
                            .is_none_or(|previous| !previous.trim_start().starts_with("///"))
                    })
                    .map(|(_, line)| format!("  - src/{path}: {line}"))
                    .collect::<Vec<_>>()
            })
            .collect();

        assert!(
            undocumented.is_empty(),
            "Public modules without a doc line:\n{}",
            undocumented.join("\n")
        );
    }

    // Tests every module declared by a test root resolves to a file
    // Verified by dropping the path attribute from a unit module
    #[test]
    fn test_test_roots_reference_existing_modules() {
        let mut unresolved = Vec::new();

        for root in ["tests/unit.rs", "tests/meta.rs"] {
            let content = fs::read_to_string(root).unwrap_or_default();
            let lines: Vec<&str> = content.lines().map(str::trim).collect();

            for (index, line) in lines.iter().enumerate() {
                let Some(name) = line.strip_prefix("mod ").and_then(|rest| rest.strip_suffix(';'))
                else {
                    continue;
                };

                let attribute = index
                    .checked_sub(1)
                    .and_then(|previous| lines.get(previous))
                    .and_then(|previous| previous.strip_prefix("#[path = \""))
                    .and_then(|rest| rest.strip_suffix("\"]"));

                let target = attribute.map_or_else(
                    || Path::new("tests").join(format!("{name}.rs")),
                    |relative| Path::new("tests").join(relative),
                );

                if !target.is_file() {
                    unresolved.push(format!("  - {root}: mod {name} -> {}", target.display()));
                }
            }
        }

        assert!(
            unresolved.is_empty(),
            "Test crate modules that do not resolve to a file:\n{}",
            unresolved.join("\n")
        );
    }
}
