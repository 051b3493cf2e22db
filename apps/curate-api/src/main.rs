use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = curate_api::Args::parse();
	curate_api::run(args).await
}
