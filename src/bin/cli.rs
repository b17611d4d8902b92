use std::io::Write;
use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use pressbox::tools::{account, import, Context, Result};
use pressbox::{config, db, server};
use tokio::net::TcpListener;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    // config file
    #[arg(long)]
    config: Option<PathBuf>,
    // address of the database to connect to
    #[arg(long,default_value_t = String::from("memory"))]
    database: String,
}

#[derive(Subcommand)]
enum Commands {
    Server {
        // ip and port to listen on
        #[arg(default_value_t = SocketAddr::from(([127, 0, 0, 1], 3000)))]
        address: SocketAddr,
    },
    Import {
        // file or globbing to register as articles
        pattern: PathBuf,
        // username recorded as the author of imported articles
        #[arg(long)]
        author: Option<String>,
    },
    AddUser {
        username: String,
        #[arg(long)]
        display_name: Option<String>,
        #[arg(long)]
        admin: bool,
    },
    WriteConfig {
        // where to write the default configuration
        path: PathBuf,
    },
}

fn take_input(prompt:&str) -> Result<String>
{
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

#[tokio::main]
async fn main() -> Result<()>
{
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "pressbox=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Cli::parse();
    if let Commands::WriteConfig {path} = &args.command {
        return config::write(path.clone());
    }

    let settings = config::load(args.config)?;
    db::init(args.database.as_str()).await.context(format!("connecting to {}",args.database))?;

    match args.command {
        Commands::Server {address} => {
            let listener = TcpListener::bind(address).await
                .context(format!("binding {address}"))?;
            server::serve(listener,settings).await?;
        }
        Commands::Import {pattern, author} => {
            let pattern = pattern.to_str().expect("Invalid string");
            for result in import::import_glob(pattern, author).await? {
                println!("{}",serde_json::to_string(&result)?);
            }
        }
        Commands::AddUser {username, display_name, admin} => {
            let password = take_input("Password: ")?;
            let user = account::register(&username, display_name.as_deref().unwrap_or(""), &password, admin).await?;
            println!("created user {} ({})",user.username,user.display_name);
        }
        Commands::WriteConfig {..} => unreachable!(),
    }
    Ok(())
}
