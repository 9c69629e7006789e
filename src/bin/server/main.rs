use anyhow::{Context, Result};
use bucket_gateway::{
    AppBuilder, AppConfig, BucketName, NotifierBackend, StorageBackend,
    adapters::{
        inbound::http::{middleware::DEFAULT_MAX_UPLOAD_BYTES, router::create_app},
        outbound::notification::DEFAULT_TWILIO_API_BASE,
    },
};
use clap::Parser;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "bucket-gateway")]
#[command(about = "HTTP gateway to list, upload, download and delete files in one bucket", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "SERVER_PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Storage backend type (s3 or memory)
    #[arg(long, env = "STORAGE_BACKEND", default_value = "s3")]
    storage_backend: String,

    /// Bucket holding the files
    #[arg(long, env = "S3_BUCKET")]
    bucket: String,

    /// S3 region
    #[arg(long, env = "S3_REGION", default_value = "us-east-1")]
    region: String,

    /// Endpoint of an S3-compatible service
    #[arg(long, env = "S3_ENDPOINT")]
    endpoint: Option<String>,

    /// S3 access key (falls back to AWS_ACCESS_KEY_ID)
    #[arg(long, env = "S3_ACCESS_KEY")]
    access_key: Option<String>,

    /// S3 secret key (falls back to AWS_SECRET_ACCESS_KEY)
    #[arg(long, env = "S3_SECRET_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Twilio account SID for upload notifications
    #[arg(long, env = "TWILIO_ACCOUNT_SID")]
    twilio_account_sid: Option<String>,

    /// Twilio auth token
    #[arg(long, env = "TWILIO_AUTH_TOKEN", hide_env_values = true)]
    twilio_auth_token: Option<String>,

    /// Phone number notifications are sent from
    #[arg(long, env = "TWILIO_PHONE_NUMBER")]
    twilio_phone_number: Option<String>,

    /// Phone number notifications are sent to
    #[arg(long, env = "RECIPIENT_PHONE_NUMBER")]
    recipient_phone_number: Option<String>,

    /// Twilio API root
    #[arg(long, env = "TWILIO_API_BASE", default_value = DEFAULT_TWILIO_API_BASE)]
    twilio_api_base: String,

    /// Largest accepted upload request body, in bytes
    #[arg(long, env = "MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        let bucket = BucketName::new(self.bucket.clone())
            .with_context(|| format!("Invalid bucket name: {}", self.bucket))?;

        let storage_backend = match self.storage_backend.as_str() {
            "memory" => StorageBackend::InMemory,
            "s3" => StorageBackend::S3 {
                region: self.region.clone(),
                endpoint: self.endpoint.clone(),
                access_key: self.access_key.clone(),
                secret_key: self.secret_key.clone(),
            },
            _ => anyhow::bail!("Unknown storage backend: {}", self.storage_backend),
        };

        let notifier_backend = NotifierBackend::from_twilio_settings(
            self.twilio_account_sid.clone(),
            self.twilio_auth_token.clone(),
            self.twilio_phone_number.clone(),
            self.recipient_phone_number.clone(),
            self.twilio_api_base.clone(),
        )?;

        Ok(AppConfig {
            bucket,
            storage_backend,
            notifier_backend,
            max_upload_bytes: self.max_upload_bytes,
        })
    }

    fn init_logging(&self) -> Result<()> {
        // RUST_LOG wins over --log-level when it is set
        let env_filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .context("Invalid log level")?;

        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }
}

async fn run(cli: Cli) -> Result<()> {
    info!("Starting bucket gateway");
    info!("Storage backend: {}", cli.storage_backend);
    info!("Bucket: {}", cli.bucket);

    let config = cli.to_app_config()?;
    match &config.notifier_backend {
        NotifierBackend::Disabled => warn!("Upload notifications disabled"),
        NotifierBackend::Twilio(twilio) => {
            info!("Upload notifications go to {}", twilio.to_number)
        }
    }

    let max_upload_bytes = config.max_upload_bytes;
    let app_services = AppBuilder::new(config.bucket.clone())
        .with_config(config)
        .build()
        .await
        .context("Failed to build application")?;

    let router = create_app(app_services.into_state(), max_upload_bytes);

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("Failed to start server")?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
