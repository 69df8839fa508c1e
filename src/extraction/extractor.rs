//! Exported method extraction for Go packages.
//!
//! Every Go file in the target directory is parsed before any method is
//! collected, so a single syntax error aborts the scan with no partial result.
//! Type text is sliced from the parser's byte ranges, which keeps multi-line
//! type expressions intact.
//!
//! # Usage
//!
//! ```rust,ignore
//! use goiface::config::GoifaceConfig;
//! use goiface::extraction::extract_directory;
//! use std::path::Path;
//!
//! let set = extract_directory(Path::new("./pkg/store"), &GoifaceConfig::default())?;
//! for (key, receiver) in set.iter() {
//!     println!("{} has {} exported methods", key, receiver.methods.len());
//! }
//! ```

use super::parser::{new_parser, node_line, node_text, parse_source, GoAst};
use crate::config::GoifaceConfig;
use crate::core::{is_exported, InterfaceSet, Method, ReceiverKey, Result, SourceLocation};
use crate::io::{find_go_files, read_source};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Parser};

/// Parses Go files and groups them by package
pub struct PackageLoader {
    parser: Parser,
    packages: BTreeMap<String, Vec<GoAst>>,
}

impl PackageLoader {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: new_parser()?,
            packages: BTreeMap::new(),
        })
    }

    /// Read and parse one file from disk
    pub fn load_file(&mut self, path: &Path) -> Result<()> {
        let content = read_source(path)?;
        self.load_source(path, content)
    }

    /// Parse already-read source text attributed to `path`
    pub fn load_source(&mut self, path: &Path, content: String) -> Result<()> {
        let ast = parse_source(&mut self.parser, content, path)?;
        // parse_source guarantees a package clause
        let package = ast.package_name().unwrap_or_default().to_string();
        log::debug!("Parsed {} (package {})", path.display(), package);
        self.packages.entry(package).or_default().push(ast);
        Ok(())
    }

    /// Packages in name order, files in load order
    pub fn packages(&self) -> impl Iterator<Item = (&str, &[GoAst])> {
        self.packages
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    pub fn file_count(&self) -> usize {
        self.packages.values().map(Vec::len).sum()
    }
}

/// Scan `dir` and aggregate the exported methods of every named receiver
pub fn extract_directory(dir: &Path, config: &GoifaceConfig) -> Result<InterfaceSet> {
    let files = find_go_files(dir, config)?;
    log::info!("Scanning {} Go files in {}", files.len(), dir.display());

    let mut loader = PackageLoader::new()?;
    for file in &files {
        loader.load_file(file)?;
    }

    collect_interfaces(&loader, config)
}

/// Aggregate methods from already-parsed packages
pub fn collect_interfaces(loader: &PackageLoader, config: &GoifaceConfig) -> Result<InterfaceSet> {
    let mut set = InterfaceSet::new();

    for (package, files) in loader.packages() {
        for ast in files {
            let methods = extract_methods(ast);
            log::debug!(
                "Found {} exported methods in {}",
                methods.len(),
                ast.path.display()
            );

            for method in methods {
                let key = if config.group_by_package {
                    ReceiverKey::qualified(package, &method.receiver)
                } else {
                    ReceiverKey::bare(&method.receiver)
                };
                set.add_method(key, method, config.strict_duplicates)?;
            }
        }
    }

    log::info!(
        "Extracted {} methods on {} receiver types from {} files",
        set.method_count(),
        set.len(),
        loader.file_count()
    );
    Ok(set)
}

/// Exported methods with a named receiver, in declaration order
pub fn extract_methods(ast: &GoAst) -> Vec<Method> {
    let root = ast.root();
    let mut cursor = root.walk();
    root.named_children(&mut cursor)
        .filter(|node| node.kind() == "method_declaration")
        .filter_map(|node| method_from_declaration(&node, &ast.source, &ast.path))
        .collect()
}

fn method_from_declaration(node: &Node, source: &str, path: &Path) -> Option<Method> {
    let name = node_text(&node.child_by_field_name("name")?, source);
    if !is_exported(name) {
        return None;
    }

    let Some(receiver) = receiver_type_name(node, source) else {
        log::warn!(
            "{}:{}: skipping method {}: receiver is not a named type",
            path.display(),
            node_line(node),
            name
        );
        return None;
    };

    let params = node
        .child_by_field_name("parameters")
        .map(|list| field_types(&list, source))
        .unwrap_or_default();

    let results = match node.child_by_field_name("result") {
        None => vec![],
        Some(list) if list.kind() == "parameter_list" => field_types(&list, source),
        Some(single) => vec![node_text(&single, source).to_string()],
    };

    Some(Method {
        name: name.to_string(),
        receiver,
        params,
        results,
        location: SourceLocation::new(PathBuf::from(path), node_line(node)),
    })
}

/// `T` and `*T` yield `T`; generic or parenthesized receivers yield nothing
fn receiver_type_name(node: &Node, source: &str) -> Option<String> {
    let list = node.child_by_field_name("receiver")?;
    let mut cursor = list.walk();
    let decl = list
        .named_children(&mut cursor)
        .find(|n| n.kind() == "parameter_declaration")?;
    let ty = decl.child_by_field_name("type")?;

    let named = match ty.kind() {
        "type_identifier" => ty,
        "pointer_type" => ty.named_child(0).filter(|n| n.kind() == "type_identifier")?,
        _ => return None,
    };
    Some(node_text(&named, source).to_string())
}

/// One entry per declared name: `a, b int` contributes `int` twice
fn field_types(list: &Node, source: &str) -> Vec<String> {
    let mut types = Vec::new();
    let mut cursor = list.walk();

    for decl in list.named_children(&mut cursor) {
        match decl.kind() {
            "parameter_declaration" => {
                let Some(ty) = decl.child_by_field_name("type") else {
                    continue;
                };
                let text = node_text(&ty, source);
                let mut names = decl.walk();
                let count = decl.children_by_field_name("name", &mut names).count().max(1);
                types.extend(std::iter::repeat_n(text.to_string(), count));
            }
            "variadic_parameter_declaration" => {
                if let Some(text) = variadic_type_text(&decl, source) {
                    types.push(text.to_string());
                }
            }
            _ => {}
        }
    }

    types
}

/// Type text of a variadic parameter including its `...` marker
fn variadic_type_text<'a>(decl: &Node, source: &'a str) -> Option<&'a str> {
    let ty = decl.child_by_field_name("type")?;
    let mut cursor = decl.walk();
    let start = decl
        .children(&mut cursor)
        .find(|c| c.kind() == "...")
        .map(|c| c.start_byte())
        .unwrap_or(ty.start_byte());
    Some(&source[start..ty.end_byte()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use indoc::indoc;

    fn load(files: &[(&str, &str)]) -> Result<PackageLoader> {
        let mut loader = PackageLoader::new().unwrap();
        for (name, source) in files {
            loader.load_source(Path::new(name), source.to_string())?;
        }
        Ok(loader)
    }

    fn methods_of(source: &str) -> Vec<Method> {
        let loader = load(&[("box.go", source)]).unwrap();
        let (_, files) = loader.packages().next().unwrap();
        extract_methods(&files[0])
    }

    #[test]
    fn test_extracts_pointer_and_value_receivers() {
        let methods = methods_of(indoc! {r#"
            package box

            type Box struct{}

            func (b *Box) Get() string { return "" }
            func (b Box) Pair() (int, error) { return 0, nil }
        "#});

        assert_eq!(methods.len(), 2);
        assert_eq!(methods[0].receiver, "Box");
        assert_eq!(methods[0].name, "Get");
        assert!(methods[0].params.is_empty());
        assert_eq!(methods[0].results, vec!["string"]);
        assert_eq!(methods[0].location.line, 5);
        assert_eq!(methods[1].receiver, "Box");
        assert_eq!(methods[1].results, vec!["int", "error"]);
    }

    #[test]
    fn test_skips_unexported_and_free_functions() {
        let methods = methods_of(indoc! {r#"
            package box

            type Box struct{}

            func (b *Box) get() string { return "" }
            func New() *Box { return &Box{} }
            func (b *Box) Put(v string) {}
        "#});

        let names: Vec<_> = methods.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Put"]);
    }

    #[test]
    fn test_type_text_is_verbatim() {
        let methods = methods_of(indoc! {r#"
            package store

            func (s *Store) Load(ctx context.Context, keys []string, opts map[string]*Option) ([]*Record, error) {
                return nil, nil
            }
        "#});

        assert_eq!(
            methods[0].params,
            vec!["context.Context", "[]string", "map[string]*Option"]
        );
        assert_eq!(methods[0].results, vec!["[]*Record", "error"]);
    }

    #[test]
    fn test_grouped_names_repeat_type() {
        let methods = methods_of(indoc! {r#"
            package geo

            func (p Point) Move(dx, dy int, label string) (x, y int) { return 0, 0 }
        "#});

        assert_eq!(methods[0].params, vec!["int", "int", "string"]);
        assert_eq!(methods[0].results, vec!["int", "int"]);
    }

    #[test]
    fn test_variadic_and_func_types() {
        let methods = methods_of(indoc! {r#"
            package log

            func (l *Logger) Printf(format string, args ...interface{}) {}
            func (l *Logger) Hook(fn func(string) error) chan<- struct{} { return nil }
        "#});

        assert_eq!(methods[0].params, vec!["string", "...interface{}"]);
        assert_eq!(methods[1].params, vec!["func(string) error"]);
        assert_eq!(methods[1].results, vec!["chan<- struct{}"]);
    }

    #[test]
    fn test_multiline_type_is_preserved() {
        let methods = methods_of(indoc! {r#"
            package cfg

            func (c *Config) Apply(opts struct {
                Name string
            }) {}
        "#});

        assert_eq!(methods[0].params, vec!["struct {\n    Name string\n}"]);
    }

    #[test]
    fn test_generic_receiver_is_skipped() {
        let methods = methods_of(indoc! {r#"
            package list

            func (l *List[T]) Len() int { return 0 }
            func (l *Plain) Len() int { return 0 }
        "#});

        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].receiver, "Plain");
    }

    #[test]
    fn test_unnamed_receiver_and_params() {
        let methods = methods_of(indoc! {r#"
            package box

            func (*Box) Swap(int, string) (string, int) { return "", 0 }
        "#});

        assert_eq!(methods[0].receiver, "Box");
        assert_eq!(methods[0].params, vec!["int", "string"]);
        assert_eq!(methods[0].results, vec!["string", "int"]);
    }

    #[test]
    fn test_collect_merges_files_by_bare_name() {
        let loader = load(&[
            ("a.go", "package box\n\nfunc (b *Box) Get() string { return \"\" }\n"),
            ("b.go", "package box\n\nfunc (b *Box) Set(v string) {}\n"),
        ])
        .unwrap();

        let set = collect_interfaces(&loader, &GoifaceConfig::default()).unwrap();
        let names: Vec<_> = set
            .get(&ReceiverKey::bare("Box"))
            .unwrap()
            .methods
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Get", "Set"]);
    }

    #[test]
    fn test_collect_groups_by_package() {
        let loader = load(&[
            ("a.go", "package alpha\n\nfunc (c *Client) Do() {}\n"),
            ("b.go", "package beta\n\nfunc (c *Client) Do() {}\n"),
        ])
        .unwrap();

        let merged = collect_interfaces(&loader, &GoifaceConfig::default()).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.find("Client").unwrap().methods.len(), 2);

        let config = GoifaceConfig {
            group_by_package: true,
            ..Default::default()
        };
        let set = collect_interfaces(&loader, &config).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.get(&ReceiverKey::qualified("alpha", "Client")).is_some());
        assert!(set.get(&ReceiverKey::qualified("beta", "Client")).is_some());
    }

    #[test]
    fn test_collect_keeps_build_tag_duplicates() {
        let loader = load(&[
            ("sys_darwin.go", "//go:build darwin\n\npackage sys\n\nfunc (s *Sys) Name() string { return \"\" }\n"),
            ("sys_linux.go", "//go:build linux\n\npackage sys\n\nfunc (s *Sys) Name() string { return \"\" }\n"),
        ])
        .unwrap();

        let set = collect_interfaces(&loader, &GoifaceConfig::default()).unwrap();
        assert_eq!(set.find("Sys").unwrap().methods.len(), 2);

        let strict = GoifaceConfig {
            strict_duplicates: true,
            ..Default::default()
        };
        let err = collect_interfaces(&loader, &strict).unwrap_err();
        assert!(matches!(err, Error::DuplicateMethod { .. }));
    }

    #[test]
    fn test_load_source_rejects_syntax_error() {
        let result = load(&[("bad.go", "package box\n\nfunc (b *Box) Get( {\n")]);
        assert!(matches!(result, Err(Error::Parse { .. })));
    }
}
