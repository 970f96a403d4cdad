/*
[INPUT]:  Pair identifiers (e.g., "btc_usd")
[OUTPUT]: Market data (exchange info, ticker, depth, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use yobit_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== YoBit Market Data Example ===\n");

    let client = match PublicClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };

    let pair = "btc_usd";

    match client.info().await {
        Ok(info) => println!("✓ Server time {}, {} pairs listed", info.server_time, info.pairs.len()),
        Err(e) => println!("✗ Info error: {}", e),
    }

    match client.ticker(Some(pair), true).await {
        Ok(tickers) => {
            if let Some(ticker) = tickers.get(pair) {
                println!("✓ {} last {} (bid {}, ask {})", pair, ticker.last, ticker.buy, ticker.sell);
            }
        }
        Err(e) => println!("✗ Ticker error: {}", e),
    }

    match client.depth(Some(pair), true, 5).await {
        Ok(depth) => {
            if let Some(book) = depth.get(pair) {
                for level in &book.asks {
                    println!("  ask {} x {}", level.price(), level.amount());
                }
                for level in &book.bids {
                    println!("  bid {} x {}", level.price(), level.amount());
                }
            }
        }
        Err(e) => println!("✗ Depth error: {}", e),
    }

    match client.trades(Some(pair), true, 10).await {
        Ok(trades) => println!("✓ {} recent trades", trades.get(pair).map_or(0, Vec::len)),
        Err(e) => println!("✗ Trades error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
