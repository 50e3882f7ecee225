use std::fmt::Write;

use loupe_domain::Note;
use loupe_engine::{FacetCatalog, GroupChildren, GroupNode, NoteBrowser};

/// Textual mirror of the grouped view: one line per group with an
/// expanded/collapsed marker and the path key used to address it, indented
/// note cards under expanded leaves, collapsed subtrees elided.
pub fn render_tree(browser: &NoteBrowser) -> String {
	let tree = browser.visible_tree();

	if tree.is_empty() {
		return "No results.\n".to_string();
	}

	let mut out = String::new();

	render_node(browser, tree, 0, &mut out);

	out
}

pub fn render_catalog(catalog: &FacetCatalog) -> String {
	let mut out = String::new();

	for (facet, values) in catalog.iter() {
		let _ = writeln!(out, "{facet}: {}", values.join(", "));
	}

	out
}

pub fn render_notes(notes: &[Note]) -> String {
	let mut out = String::new();

	for note in notes {
		let _ = write!(out, "#{} {}", note.id, note.description);

		if !note.tags.is_empty() {
			let _ = write!(out, "  [{}]", note.tags.join(", "));
		}

		out.push('\n');
	}

	out
}

pub fn render_help() -> String {
	"\
search <term>            narrow by free text (bare 'search' clears)
filter <facet> <v1,v2>   constrain a facet to the listed values
clear <facet>            lift a facet constraint
toggle <path-key>        collapse or expand a group
add <desc> | <tags> | <facet=value,...>
tree                     print the grouped view
catalog                  print the observed facet values
notes                    print every stored note
quit                     leave the shell
"
	.to_string()
}

fn render_node(browser: &NoteBrowser, node: &GroupNode, depth: usize, out: &mut String) {
	match node.children() {
		GroupChildren::Groups(children) =>
			for child in children {
				let path = child.node.path();
				let expanded = browser.is_expanded(path);
				let marker = if expanded { '-' } else { '+' };

				indent(out, depth);

				let _ = writeln!(out, "{marker} {}  ({path})", child.value);

				if expanded {
					render_node(browser, &child.node, depth + 1, out);
				}
			},
		GroupChildren::Notes(notes) =>
			for note in notes {
				indent(out, depth);

				let _ = write!(out, "* {}", note.description);

				if !note.tags.is_empty() {
					let _ = write!(out, "  [{}]", note.tags.join(", "));
				}

				out.push('\n');
			},
	}
}

fn indent(out: &mut String, depth: usize) {
	for _ in 0..depth {
		out.push_str("  ");
	}
}
