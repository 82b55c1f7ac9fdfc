//! Stockdesk binary entry point.
//!
//! Everything lives in the library; this just drives [`stockdesk_terminal::run`]
//! on a current-thread runtime, since each store operation runs to completion
//! before the next line of input is read.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = stockdesk_terminal::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
