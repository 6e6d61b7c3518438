#[tokio::main]
async fn main() {
    if let Err(e) = studydesk::run().await {
        eprintln!("{:?}", e);
        std::process::exit(1);
    }
}
