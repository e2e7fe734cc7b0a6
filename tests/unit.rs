use repotree::{
    build_hierarchy,
    render_tree,
    Entry,
    TreeItem,
};

fn items(paths: &[&str]) -> Vec<TreeItem> {
    paths.iter().map(|p| TreeItem::new(*p)).collect()
}

fn render(paths: &[&str]) -> String {
    render_tree(&build_hierarchy(&items(paths)), "")
}

#[test]
fn test_example_repository() {
    let tree = render(&["src/index.ts", "src/utils/helper.ts", "README.md"]);
    let expected = "\
├─ src
│  ├─ utils
│  │  └─ helper.ts
│  └─ index.ts
└─ README.md
";
    assert_eq!(tree, expected);
}

#[test]
fn test_empty_input_renders_empty() {
    assert_eq!(render(&[]), "");
}

#[test]
fn test_single_file() {
    assert_eq!(render(&["README.md"]), "└─ README.md\n");
}

#[test]
fn test_deterministic() {
    let paths = ["src/a.rs", "src/b.rs", "docs/guide.md"];
    assert_eq!(render(&paths), render(&paths));
}

#[test]
fn test_input_order_does_not_leak() {
    let forward = render(&["src/index.ts", "src/utils/helper.ts", "README.md"]);
    let backward = render(&["README.md", "src/utils/helper.ts", "src/index.ts"]);
    let shuffled = render(&["src/utils/helper.ts", "README.md", "src/index.ts"]);
    assert_eq!(forward, backward);
    assert_eq!(forward, shuffled);
}

#[test]
fn test_directories_sort_before_files() {
    // Directory "zeta" beats file "alpha.txt" despite the name order.
    let tree = render(&["alpha.txt", "zeta/inner.txt"]);
    let expected = "\
├─ zeta
│  └─ inner.txt
└─ alpha.txt
";
    assert_eq!(tree, expected);
}

#[test]
fn test_case_insensitive_name_order() {
    // "a.txt" before "B.txt": names compare ignoring case.
    let tree = render(&["B.txt", "a.txt"]);
    assert_eq!(tree, "├─ a.txt\n└─ B.txt\n");
}

#[test]
fn test_exactly_one_last_connector_per_sibling_group() {
    let tree = render(&["a.txt", "b.txt", "c.txt", "d.txt"]);
    let lines: Vec<&str> = tree.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.iter().filter(|l| l.starts_with("└─ ")).count(), 1);
    assert_eq!(lines.iter().filter(|l| l.starts_with("├─ ")).count(), 3);
    assert_eq!(lines[3], "└─ d.txt");
}

#[test]
fn test_prefix_under_non_last_directory() {
    // "src" has a sibling after it, so its children carry "│  ".
    let tree = render(&["src/lib.rs", "zz.txt"]);
    assert!(tree.contains("│  └─ lib.rs"));
}

#[test]
fn test_prefix_under_last_directory() {
    // "src" is the last sibling, so its children carry blank indentation.
    let tree = render(&["src/lib.rs"]);
    assert_eq!(tree, "└─ src\n   └─ lib.rs\n");
}

#[test]
fn test_deep_nesting_prefixes() {
    let tree = render(&["a/b/c/d.txt", "a/x.txt"]);
    let expected = "\
└─ a
   ├─ b
   │  └─ c
   │     └─ d.txt
   └─ x.txt
";
    assert_eq!(tree, expected);
}

#[test]
fn test_file_then_directory_conflict() {
    // "a" arrives as a file first, then as a directory; the directory wins.
    let tree = render(&["a", "a/b"]);
    assert_eq!(tree, "└─ a\n   └─ b\n");
}

#[test]
fn test_directory_then_file_conflict() {
    // Reverse order: a later file path must not erase "a"'s children.
    let tree = render(&["a/b", "a"]);
    assert_eq!(tree, "└─ a\n   └─ b\n");
}

#[test]
fn test_empty_segments_are_filtered() {
    assert_eq!(render(&["a//b"]), render(&["a/b"]));
    assert_eq!(render(&["/a/b/"]), render(&["a/b"]));
}

#[test]
fn test_all_empty_path_is_skipped() {
    assert_eq!(render(&["//", ""]), "");
}

#[test]
fn test_hierarchy_lookup() {
    let root = build_hierarchy(&items(&["src/lib.rs", "README.md"]));
    assert!(matches!(root.get("README.md"), Some(Entry::File)));
    match root.get("src") {
        Some(Entry::Directory(src)) => {
            assert!(matches!(src.get("lib.rs"), Some(Entry::File)));
        }
        other => panic!("expected src to be a directory, got {:?}", other),
    }
    assert!(root.get("missing").is_none());
}

#[test]
fn test_render_does_not_mutate_input() {
    let root = build_hierarchy(&items(&["src/a.rs", "src/b.rs"]));
    let before = root.clone();
    let _ = render_tree(&root, "");
    assert_eq!(root, before);
}
