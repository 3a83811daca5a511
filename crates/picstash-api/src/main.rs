use picstash_core::Config;

// Use mimalloc as the global allocator for better performance and lower
// fragmentation, especially on musl-based systems inside containers.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    picstash_api::telemetry::init_tracing();

    let config = Config::from_env()?;

    let (_state, router) = picstash_api::setup::initialize_app(config.clone()).await?;

    picstash_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
