use aws_config::{BehaviorVersion, meta::region::RegionProviderChain};
use figment::{Figment, providers::Env};

pub trait ContextProvider<Config> {
    fn new(
        config: Config,
        aws_config: aws_config::SdkConfig,
    ) -> impl Future<Output = Self>;
}

/// Installs the global JSON `tracing` subscriber.
///
/// The log level comes from `RUST_LOG`. Must be called at most once per
/// process.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        // span fields such as op and request_id still appear in the span list
        .with_current_span(false)
        // CloudWatch renders ANSI codes literally
        .with_ansi(false)
        // CloudWatch adds the ingestion time
        .without_time()
        .with_target(false)
        .init();
}

/// Extracts the service configuration from the process environment.
///
/// Keys are matched against the lowercased variable names, so the field
/// `urls_table` is read from `URLS_TABLE`.
///
/// # Errors
/// If a required variable is missing or a value has the wrong shape.
pub fn load_config<'a, Config: serde::Deserialize<'a>>()
-> Result<Config, figment::Error> {
    Figment::new().merge(Env::raw()).extract()
}

/// Initialize the application context with configuration from environment
/// variables and the default AWS provider chain.
///
/// # Returns
/// The application context built by the `ContextProvider` implementation.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables.
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, figment::Error>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config()?;

    let region_provider =
        RegionProviderChain::default_provider().or_else("us-east-1");
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;

    tracing::debug!("loaded configuration and AWS settings");

    Ok(A::new(config, aws_config).await)
}
