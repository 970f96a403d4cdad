/*
[INPUT]:  YOBIT_API_KEY / YOBIT_API_SECRET environment variables
[OUTPUT]: Balances and active orders for one account
[POS]:    Examples - authenticated account queries through the registry
[UPDATE]: When trading API changes
*/

use std::env;

use yobit_adapter::*;

/// Example: Signed requests (requires an API key with "info" rights)
///
/// Order placement is left commented out so running the example never trades.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== YoBit Trading Example ===\n");

    let (key, secret) = match (env::var("YOBIT_API_KEY"), env::var("YOBIT_API_SECRET")) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set YOBIT_API_KEY and YOBIT_API_SECRET to run this example");
            return;
        }
    };

    let yobit = match Yobit::new(ClientConfig::default()) {
        Ok(y) => y,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let account = yobit.add_account("main", Credentials::new(key, secret));

    match account.client().get_info().await {
        Ok(info) => {
            for (coin, amount) in info.funds.iter().filter(|(_, a)| !a.is_zero()) {
                println!("  {}: {}", coin, amount);
            }
            println!("✓ {} open orders", info.open_orders);
        }
        Err(YobitError::Exchange { message }) => println!("✗ Rejected: {}", message),
        Err(e) => println!("✗ Error: {}", e),
    }

    let market = account.market("btc_usd");
    match market.active_orders().await {
        Ok(orders) => {
            for (id, order) in &orders {
                println!("  #{} {} {} @ {}", id, order.side, order.amount, order.rate);
            }
        }
        Err(e) => println!("✗ Active orders error: {}", e),
    }

    // let response = market.buy(dec!(10000), dec!(0.0001)).await?;

    println!("\n✓ Trading example complete");
}
