//! Example: List the payment rails BlindPay supports.
//!
//! Reads `BLINDPAY_API_KEY` and `BLINDPAY_INSTANCE_ID` from the environment
//! (or a `.env` file).
//!
//! Run with: cargo run --example get_rails

use blindpay_client::auth::EnvCredentials;
use blindpay_client::{BlindPay, Configuration};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(credentials) = EnvCredentials::try_from_env() else {
        println!("Set BLINDPAY_API_KEY and BLINDPAY_INSTANCE_ID to run this example.");
        return Ok(());
    };

    let client = BlindPay::from_credentials(&credentials, &Configuration::default())?;

    match client.available().rails().await {
        Ok(response) => match response.into_result() {
            Ok(Some(rails)) => {
                for rail in rails {
                    println!("{:<24} {:<20} {}", rail.label, rail.value, rail.country);
                }
            }
            Ok(None) => println!("No rails returned"),
            Err(api_error) => println!("API error: {}", api_error),
        },
        Err(err) => println!("Request failed: {}", err),
    }

    Ok(())
}
