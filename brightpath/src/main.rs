use brightpath::{app::SampleNetwork, config::SearchConfig, model::RouteError};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct BrightpathArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// run the built-in sample network and print the route picks as JSON
    Sample {
        #[arg(long, help = "path to .toml or .json file with search parameters")]
        configuration_file: Option<String>,
    },
}

pub fn run(app: &App) -> Result<(), RouteError> {
    match app {
        App::Sample { configuration_file } => {
            let conf = match configuration_file {
                None => Ok(SearchConfig::default()),
                Some(f) => {
                    log::info!("reading search configuration from {f}");
                    SearchConfig::try_from(f)
                }
            }?;
            let paths = SampleNetwork::default().solve(&conf)?;
            println!("{}", serde_json::to_string_pretty(&paths)?);
            Ok(())
        }
    }
}

fn main() {
    env_logger::init();
    let args = BrightpathArguments::parse();
    if let Err(e) = run(&args.app) {
        log::error!("brightpath failed: {e}");
        eprintln!("{e}");
        std::process::exit(1);
    }
}
