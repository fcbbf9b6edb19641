//! Equity Server Binary
//!
//! Serves Monte Carlo equity over HTTP. Listens on `BIND_ADDR`.

use robobrain::*;

#[tokio::main]
async fn main() {
    log();
    kys();
    hosting::Server::run().await.unwrap();
}
