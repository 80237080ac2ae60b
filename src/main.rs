#[tokio::main]
async fn main() {
    if let Err(e) = btc_address_analyser::cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
