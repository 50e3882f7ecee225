use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = loupe_shell::Args::parse();
	loupe_shell::run(args)
}
