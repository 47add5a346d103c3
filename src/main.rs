use clap::Parser;
use mechanic_shop::console::{Console, EditorInput, LineSource, PlainInput};
use mechanic_shop::logging::init_tracing;
use mechanic_shop::{ConnectionArgs, MechanicShop, OutputFormat, PgClient, ShopConfig};
use std::io::{self, IsTerminal};
use std::process;

/// Mechanic shop menu client
#[derive(Parser, Debug)]
#[command(name = "mechanic_shop")]
#[command(about = "Menu-driven client for the MechanicShop database", long_about = None)]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// Result set rendering: tsv or table
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// Log every SQL statement to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let config = match ShopConfig::load(&args.connection) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error - {e}");
            process::exit(1);
        }
    };
    let format = args.format.unwrap_or(config.format);
    let settings = config.connection();

    println!("{}", settings.banner());
    let client = match PgClient::connect(&settings).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Error - Unable to Connect to Database: {e}");
            println!("Make sure you started postgres on this machine");
            process::exit(1);
        }
    };
    println!("Done");

    let input: Box<dyn LineSource> = if io::stdin().is_terminal() {
        Box::new(EditorInput::new(EditorInput::default_history_file())?)
    } else {
        Box::new(PlainInput::new(io::stdin().lock()))
    };

    let mut shop = MechanicShop::new(client, Console::new(input, io::stdout()), format);
    let outcome = shop.run().await;

    let (client, mut console) = shop.into_parts();
    console.finish()?;

    print!("Disconnecting from database...");
    client.close().await?;
    println!("Done\n\nBye !");

    outcome?;
    Ok(())
}
