use std::io::{self, BufRead, Write};

use loupe_engine::NoteBrowser;

use crate::{command::Command, render};

/// Drives the browser from a line-oriented command stream. Everything the
/// engine computes is printed through `output`, so tests can run a whole
/// session over in-memory buffers.
pub fn run_session<R, W>(mut browser: NoteBrowser, input: R, output: &mut W) -> io::Result<()>
where
	R: BufRead,
	W: Write,
{
	writeln!(output, "{} notes loaded. Type 'help' for commands.", browser.notes().len())?;
	prompt(output)?;

	for line in input.lines() {
		let line = line?;

		match Command::parse(&line) {
			Ok(None) => {},
			Ok(Some(Command::Quit)) => return Ok(()),
			Ok(Some(command)) => apply(&mut browser, command, output)?,
			Err(err) => writeln!(output, "{err}")?,
		}

		prompt(output)?;
	}

	Ok(())
}

fn apply<W: Write>(browser: &mut NoteBrowser, command: Command, output: &mut W) -> io::Result<()> {
	match command {
		Command::Search(term) => {
			browser.set_search_term(term);

			write!(output, "{}", render::render_tree(browser))?;
		},
		Command::Filter(facet, values) => {
			browser.set_filter_selection(facet, values);

			write!(output, "{}", render::render_tree(browser))?;
		},
		Command::Clear(facet) => {
			browser.clear_filter_selection(facet);

			write!(output, "{}", render::render_tree(browser))?;
		},
		Command::Toggle(key) => {
			// Keys are matched against the rendered tree rather than parsed:
			// path identity lives in the segment list, not the string.
			let path = browser
				.visible_tree()
				.path_keys()
				.into_iter()
				.find(|path| path.to_string() == key);

			match path {
				Some(path) => {
					browser.toggle(&path);

					write!(output, "{}", render::render_tree(browser))?;
				},
				None => writeln!(output, "No group named '{key}' in the current tree.")?,
			}
		},
		Command::Add(draft) => {
			let note = browser.add_note(draft);

			writeln!(output, "Added note #{}.", note.id)?;
			write!(output, "{}", render::render_tree(browser))?;
		},
		Command::Tree => write!(output, "{}", render::render_tree(browser))?,
		Command::Catalog => write!(output, "{}", render::render_catalog(browser.facet_catalog()))?,
		Command::Notes => write!(output, "{}", render::render_notes(browser.notes()))?,
		Command::Help => write!(output, "{}", render::render_help())?,
		Command::Quit => {},
	}

	Ok(())
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
	write!(output, "> ")?;
	output.flush()
}
