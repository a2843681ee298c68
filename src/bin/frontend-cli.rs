use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "frontend-cli")]
#[command(about = "Fetch the JSON form of the Authentication API front-end pages", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Landing document with the section index
    Index,
    /// API name, version and status
    Api,
    /// Authentication endpoint map
    Auth,
}

impl Commands {
    fn path(&self) -> &'static str {
        match self {
            Commands::Index => "/",
            Commands::Api => "/api",
            Commands::Auth => "/api/auth",
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let url = format!("{}{}", cli.url.trim_end_matches('/'), cli.command.path());
    let res = client
        .get(url)
        .query(&[("format", "json")])
        .send()
        .await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if status.is_success() {
        let json: Value = res.json().await?;
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("Error: {} - {}", status, res.text().await?);
    }
    Ok(())
}
