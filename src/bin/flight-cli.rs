use clap::{Parser, Subcommand};
use serde_json::Value;

use flight_gateway::http::ErrorEnvelope;

#[derive(Parser)]
#[command(name = "flight-cli")]
#[command(about = "Command-line client for the flight gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:5001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check gateway health
    Health,
    /// Search departures from an airport on a date
    Search {
        /// Departure airport IATA code
        #[arg(short, long)]
        origin: String,
        /// Only show flights landing at this IATA code
        #[arg(short, long)]
        destination: Option<String>,
        /// Travel date, YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client.get(format!("{}/health", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::Search {
            origin,
            destination,
            date,
        } => {
            let mut query = vec![("origin", origin), ("date", date)];
            if let Some(destination) = destination {
                query.push(("destination", destination));
            }
            let res = client
                .get(format!("{}/api/flights", cli.url))
                .query(&query)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;

    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        match serde_json::from_str::<ErrorEnvelope>(&text) {
            Ok(envelope) => eprintln!("{}", envelope.message),
            Err(_) => eprintln!("Response: {}", text),
        }
        return Ok(());
    }

    let json: Value = serde_json::from_str(&text)?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
