use crate::ast::Expr;

/// Renders an expression tree as indented text.
///
/// The traversal is pre-order: each node emits one line of the form
/// `<label>: <shape>`, with `: <value>` appended for leaves, indented by two
/// spaces per depth level. Children are labeled `lhs` and `rhs`. The output
/// is deterministic and purely diagnostic; rendering never touches the tree.
///
/// # Parameters
/// - `expr`: Root of the tree to render.
/// - `label`: Label for the root line, conventionally `"expr"`.
///
/// # Returns
/// The rendered tree, one `\n`-terminated line per node.
///
/// # Example
/// ```
/// use numera::{interpreter::printer::render, parse};
///
/// let expr = parse("2 * (3 + 4)").unwrap();
/// let tree = render(&expr, "expr");
///
/// assert!(tree.starts_with("expr: Mul\n"));
/// assert!(tree.contains("  rhs: Add\n"));
/// ```
#[must_use]
pub fn render(expr: &Expr, label: &str) -> String {
    let mut out = String::new();
    render_node(&mut out, expr, label, 0);
    out
}

/// Appends one node's line to the output and recurses into its children.
///
/// # Parameters
/// - `out`: Accumulated output buffer.
/// - `expr`: Node to render.
/// - `label`: Label for this node's line.
/// - `depth`: Nesting depth, two spaces of indentation per level.
fn render_node(out: &mut String, expr: &Expr, label: &str, depth: usize) {
    let indent = "  ".repeat(depth);
    match expr {
        Expr::Number { value } => {
            out.push_str(&format!("{indent}{label}: {}: {value}\n", expr.variant_name()));
        },
        Expr::Add { lhs, rhs }
        | Expr::Sub { lhs, rhs }
        | Expr::Mul { lhs, rhs }
        | Expr::Div { lhs, rhs } => {
            out.push_str(&format!("{indent}{label}: {}\n", expr.variant_name()));
            render_node(out, lhs, "lhs", depth + 1);
            render_node(out, rhs, "rhs", depth + 1);
        },
    }
}
