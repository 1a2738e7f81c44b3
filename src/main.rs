#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tutor_classes::run().await
}
