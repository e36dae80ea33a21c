use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};

// Import collaborator configs from their owning libraries
use database::mongodb::MongoConfig;
use media_store::CloudinaryConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application-specific configuration
/// Composes shared config components from the core libraries
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub mongodb: MongoConfig,
    pub cloudinary: CloudinaryConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env()?;
        let cloudinary = CloudinaryConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            mongodb,
            cloudinary,
            server,
            environment,
        })
    }
}
