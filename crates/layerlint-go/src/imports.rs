//! Import extraction from Go source text.
//!
//! Line-oriented: handles single imports, aliased imports (including `_`
//! and `.`), parenthesized import blocks, line and block comments, and
//! both interpreted (`"x"`) and raw (`` `x` ``) import paths. Scanning
//! stops at the first top-level declaration since Go requires imports to
//! precede them.

/// Extracts import paths in source order, duplicates preserved.
#[must_use]
pub fn extract_imports(source: &str) -> Vec<String> {
    let mut imports = Vec::new();
    let mut in_block = false;
    let mut in_comment = false;

    for raw in source.lines() {
        let mut line = raw.trim();

        if in_comment {
            match line.find("*/") {
                Some(end) => {
                    line = line[end + 2..].trim();
                    in_comment = false;
                }
                None => continue,
            }
        }
        if let Some(start) = line.find("/*") {
            // Comment openers inside an import path cannot occur: Go
            // import paths may not contain '*'.
            if !line[start..].contains("*/") {
                in_comment = true;
            }
            line = line[..start].trim();
        }
        if line.is_empty() {
            continue;
        }

        if in_block {
            if line.starts_with(')') {
                in_block = false;
                continue;
            }
            if let Some(path) = import_path(line) {
                imports.push(path.to_string());
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("import") {
            let rest = rest.trim_start();
            if let Some(entries) = rest.strip_prefix('(') {
                if let Some(path) = import_path(entries) {
                    imports.push(path.to_string());
                }
                // `import ("fmt")` opens and closes the group on one line.
                in_block = !closes_group(entries);
            } else if let Some(path) = import_path(rest) {
                imports.push(path.to_string());
            }
            continue;
        }

        // Imports precede all other top-level declarations.
        if line.starts_with("func ")
            || line.starts_with("type ")
            || line.starts_with("var ")
            || line.starts_with("const ")
        {
            break;
        }
    }

    imports
}

/// Whether an import group opened on this line also closes on it.
///
/// Import paths cannot contain `)`, so any one found after the quoted
/// path (and outside a trailing line comment) ends the group.
fn closes_group(entry: &str) -> bool {
    let entry = match entry.find("//") {
        Some(pos) => &entry[..pos],
        None => entry,
    };
    entry
        .rsplit(['"', '`'])
        .next()
        .is_some_and(|tail| tail.contains(')'))
}

/// The first quoted or backquoted path in an import entry, skipping any
/// alias (`alias "x"`, `_ "x"`, `. "x"`) and trailing comments.
fn import_path(entry: &str) -> Option<&str> {
    // Valid import paths never contain `//`, so anything after one is a
    // line comment.
    let entry = match entry.find("//") {
        Some(pos) => &entry[..pos],
        None => entry,
    };
    for delim in ['"', '`'] {
        if let Some(start) = entry.find(delim) {
            let rest = &entry[start + 1..];
            let end = rest.find(delim)?;
            return Some(&rest[..end]);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_import() {
        let src = "package main\n\nimport \"fmt\"\n";
        assert_eq!(extract_imports(src), ["fmt"]);
    }

    #[test]
    fn aliased_imports() {
        let src = r#"package main

import f "fmt"
import _ "net/http/pprof"
import . "math"
"#;
        assert_eq!(extract_imports(src), ["fmt", "net/http/pprof", "math"]);
    }

    #[test]
    fn import_block() {
        let src = r#"package repo

import (
	"context"
	"database/sql"

	pq "github.com/lib/pq"
	_ "embed"
)

func New() {}
"#;
        assert_eq!(
            extract_imports(src),
            ["context", "database/sql", "github.com/lib/pq", "embed"]
        );
    }

    #[test]
    fn comments_are_ignored() {
        let src = r#"package main

// import "os"
import (
	"fmt" // formatting
	/* "commented/out" */
	// "commented/too"
	"errors"
)
"#;
        assert_eq!(extract_imports(src), ["fmt", "errors"]);
    }

    #[test]
    fn multiline_block_comment() {
        let src = "package main\n/*\nimport \"os\"\n*/\nimport \"fmt\"\n";
        assert_eq!(extract_imports(src), ["fmt"]);
    }

    #[test]
    fn one_line_import_group_does_not_leak_into_the_body() {
        // The string literal in the body must not be harvested.
        let src = r#"package main

import ("fmt")

func main() {
	fmt.Println("m/infra")
}
"#;
        assert_eq!(extract_imports(src), ["fmt"]);
    }

    #[test]
    fn one_line_import_group_with_spacing_and_comment() {
        let src = "package main\nimport ( \"fmt\" ) // stdlib\nimport \"errors\"\n";
        assert_eq!(extract_imports(src), ["fmt", "errors"]);
    }

    #[test]
    fn empty_import_group() {
        assert_eq!(extract_imports("package p\nimport ()\n"), Vec::<String>::new());
        assert_eq!(
            extract_imports("package p\nimport ()\nimport \"fmt\"\n"),
            ["fmt"]
        );
    }

    #[test]
    fn raw_string_import_path() {
        let src = "package main\nimport `fmt`\n";
        assert_eq!(extract_imports(src), ["fmt"]);
    }

    #[test]
    fn stops_at_first_declaration() {
        // The string literal below must not be mistaken for an import.
        let src = r#"package main

import "fmt"

func main() {
	fmt.Println("import \"bufio\"")
}
"#;
        assert_eq!(extract_imports(src), ["fmt"]);
    }

    #[test]
    fn no_imports() {
        assert_eq!(extract_imports("package empty\n"), Vec::<String>::new());
    }

    #[test]
    fn duplicates_preserved_in_order() {
        let src = "package p\nimport \"fmt\"\nimport \"fmt\"\n";
        assert_eq!(extract_imports(src), ["fmt", "fmt"]);
    }
}
