use matrubot_lib::config::Config;

#[tokio::main]
async fn main() {
    matrubot_lib::init_tracing();

    let result = match Config::from_env() {
        Ok(config) => matrubot_lib::run(config).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
