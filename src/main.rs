mod chat;
mod constants;
mod dispatch;
mod normalize;
mod palette;

use std::env;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let client = reqwest::Client::new();

    let code = dispatch::run(&client, &args).await;
    std::process::exit(code);
}
