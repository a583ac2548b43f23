#[tokio::main]
async fn main() {
    if let Err(e) = postboard::run().await {
        eprintln!("postboard: {e}");
        std::process::exit(1);
    }
}
