use clap::Parser;
use mechanic_shop::logging::init_tracing;
use mechanic_shop::schema::{self, split_sql_statements};
use mechanic_shop::{ConnectionArgs, PgClient, ShopConfig, SqlClient};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shop_initdb")]
#[command(about = "Create the MechanicShop tables in a PostgreSQL database", long_about = None)]
struct Args {
    #[command(flatten)]
    connection: ConnectionArgs,

    /// SQL file to apply instead of the bundled schema
    #[arg(short = 'i', long)]
    input: Option<PathBuf>,

    /// Drop the shop tables and domains before creating them
    #[arg(long)]
    drop: bool,

    /// Print the statements without executing them
    #[arg(long)]
    dry_run: bool,

    /// Log every statement to stderr
    #[arg(short = 'v', long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("Warning: logging disabled: {e}");
    }

    let script = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => schema::CREATE_TABLES.to_string(),
    };

    let mut statements = Vec::new();
    if args.drop {
        statements.extend(split_sql_statements(schema::DROP_TABLES));
    }
    statements.extend(split_sql_statements(&script));

    if args.input.is_none() && !schema::covers_shop_tables(&statements) {
        return Err("bundled schema does not define every shop table".into());
    }

    if args.dry_run {
        for statement in &statements {
            println!("{statement}\n");
        }
        println!("Dry run: {} SQL statements", statements.len());
        return Ok(());
    }

    let config = ShopConfig::load(&args.connection)?;
    let settings = config.connection();
    println!("Connecting to {}...", settings.display_url());
    let mut client = PgClient::connect(&settings).await?;

    let mut executed = 0;
    for statement in &statements {
        if let Err(e) = client.execute(statement).await {
            eprintln!("Execution error in statement:\n{statement}\nError: {e}");
            client.close().await?;
            return Err(e.into());
        }
        executed += 1;
    }

    client.close().await?;
    println!("Schema applied: {executed} statements executed");
    Ok(())
}
