//! Textual renderings of a built tree.
//!
//! All renderers are pure: they read the tree and the header it was built for and return a
//! fresh string. The tree must be consistent with the header (see `Node::check_against`).

use super::*;

/// Indentation unit of the text rendering, repeated once per depth level.
pub const TEXT_INDENT: &str = "|  ";

/// Renders the tree as indented text.
///
/// Each branch starts on a new line, indented by `"|  "` per depth level, as
/// `attribute = value`. A branch leading to a leaf ends with `": label"`, or `": null"` for an
/// empty leaf. A tree that is a single leaf renders as just `": label"`.
///
/// # Example
///
/// ```text
///
/// outlook = sunny
/// |  humidity = high: no
/// |  humidity = normal: yes
/// outlook = overcast: yes
/// ```
pub fn to_text(root: &Node, header: &Header) -> String {
    let mut output = String::new();
    write_text(root, header, 0, &mut output);
    output
}

fn write_text(node: &Node, header: &Header, level: usize, output: &mut String) {
    match node {
        Node::Leaf { class_value, .. } => {
            output.push_str(": ");
            output.push_str(leaf_label(header, *class_value).unwrap_or("null"));
        }
        Node::Internal {
            attribute,
            children,
            ..
        } => {
            let attr = &header.attributes()[*attribute];
            for (value, child) in attr.values().iter().zip(children) {
                output.push('\n');
                output.push_str(&TEXT_INDENT.repeat(level));
                output.push_str(&format!("{} = {}", attr.name(), value));
                write_text(child, header, level + 1, output);
            }
        }
    }
}

/// Renders the tree in the Graphviz DOT language.
///
/// The graph is named `ID3Tree`. Each node is declared as `N<id>` using the identifiers
/// assigned at build time: internal nodes are labelled with their attribute name, leaves with
/// their class label (`null` when empty) and drawn as filled boxes. Each edge is labelled
/// `= value`. Nodes and edges are emitted in pre-order.
pub fn to_graph(root: &Node, header: &Header) -> String {
    let mut output = String::from("digraph ID3Tree {\n");
    write_graph(root, header, &mut output);
    output.push_str("}\n");
    output
}

fn write_graph(node: &Node, header: &Header, output: &mut String) {
    match node {
        Node::Leaf { id, class_value, .. } => {
            output.push_str(&format!(
                "N{} [label=\"{}\" shape=box style=filled ]\n",
                id,
                escape_dot(leaf_label(header, *class_value).unwrap_or("null"))
            ));
        }
        Node::Internal {
            id,
            attribute,
            children,
        } => {
            let attr = &header.attributes()[*attribute];
            output.push_str(&format!("N{} [label=\"{}\" ]\n", id, escape_dot(attr.name())));
            for (value, child) in attr.values().iter().zip(children) {
                output.push_str(&format!(
                    "N{}->N{} [label=\"= {}\"]\n",
                    id,
                    child.id(),
                    escape_dot(value)
                ));
                write_graph(child, header, output);
            }
        }
    }
}

/// Renders the tree as Rust source code for a standalone decision procedure.
///
/// The output is a module named `name` holding a public
/// `classify(i: &[Option<&str>]) -> Result<Option<usize>, String>` function. Its input holds
/// one label per attribute in column order (`None` for a missing value) and its output is the
/// predicted class index, or `None` for an empty leaf. Each tree node becomes a function
/// `node<k>`, numbered in pre-order from 0. An internal node rejects a missing value for its
/// attribute with `"Null values are not allowed!"` and a value without a branch with
/// `"Value '<v>' is not allowed!"`.
///
/// # Errors
///
/// - `ModelError::InputValidationError` - If `name` is not a valid Rust identifier or is a keyword
pub fn to_source(root: &Node, header: &Header, name: &str) -> Result<String, ModelError> {
    if !is_identifier(name) {
        return Err(ModelError::InputValidationError(format!(
            "'{}' is not a valid module name",
            name
        )));
    }

    let mut nodes = String::new();
    write_source(root, header, 0, &mut nodes);

    let mut output = String::new();
    output.push_str(&format!("pub mod {} {{\n", name));
    output.push_str("    #[allow(dead_code)]\n");
    output.push_str(
        "    fn check_missing(i: &[Option<&str>], index: usize) -> Result<(), String> {\n",
    );
    output.push_str("        if i[index].is_none() {\n");
    output.push_str("            return Err(\"Null values are not allowed!\".to_string());\n");
    output.push_str("        }\n");
    output.push_str("        Ok(())\n");
    output.push_str("    }\n\n");
    output.push_str("    pub fn classify(i: &[Option<&str>]) -> Result<Option<usize>, String> {\n");
    output.push_str("        node0(i)\n");
    output.push_str("    }\n");
    output.push_str(&nodes);
    output.push_str("}\n");

    Ok(output)
}

/// Writes the function for `node`, numbered `id`, followed by the functions of its subtree.
///
/// Returns the largest number used in the subtree.
fn write_source(node: &Node, header: &Header, id: usize, output: &mut String) -> usize {
    // Leaves ignore their input
    let input = if node.is_leaf() { "_i" } else { "i" };
    output.push_str(&format!(
        "\n    fn node{}({}: &[Option<&str>]) -> Result<Option<usize>, String> {{\n",
        id, input
    ));

    match node {
        Node::Leaf { class_value, .. } => {
            match (class_value, leaf_label(header, *class_value)) {
                (Some(c), Some(label)) => output.push_str(&format!(
                    "        Ok(Some({})) // {}\n",
                    c,
                    single_line(label)
                )),
                _ => output.push_str("        Ok(None)\n"),
            }
            output.push_str("    }\n");
            id
        }
        Node::Internal {
            attribute,
            children,
            ..
        } => {
            let attr = &header.attributes()[*attribute];
            let column = attr.index();
            output.push_str(&format!("        check_missing(i, {})?;\n\n", column));
            output.push_str(&format!("        // {}\n", single_line(attr.name())));

            let mut subtrees = Vec::with_capacity(children.len());
            let mut last_id = id;
            for (branch, (value, child)) in attr.values().iter().zip(children).enumerate() {
                let child_id = last_id + 1;
                let keyword = if branch == 0 { "        if" } else { " else if" };
                output.push_str(&format!(
                    "{} i[{}] == Some({:?}) {{\n            node{}(i)\n        }}",
                    keyword, column, value, child_id
                ));

                let mut subtree = String::new();
                last_id = write_source(child, header, child_id, &mut subtree);
                subtrees.push(subtree);
            }

            output.push_str(&format!(
                " else {{\n            Err(format!(\"Value '{{}}' is not allowed!\", i[{}].unwrap_or_default()))\n        }}\n",
                column
            ));
            output.push_str("    }\n");
            for subtree in subtrees {
                output.push_str(&subtree);
            }
            last_id
        }
    }
}

fn leaf_label(header: &Header, class_value: Option<usize>) -> Option<&str> {
    class_value.and_then(|c| header.class_label(c))
}

fn escape_dot(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

fn single_line(text: &str) -> String {
    text.replace(['\n', '\r'], " ")
}

/// Strict and reserved keywords of Rust 2024, none of which can name a module.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv",
    "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    name != "_"
        && !RUST_KEYWORDS.contains(&name)
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
