use std::env;
use std::path::PathBuf;

use super::server_config::ServerConfig;

/// Route prefix under which stored photos are served.
pub const IMAGES_ROUTE: &str = "/images";

/// Where uploaded food photos live and how clients reach them.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub root_dir: PathBuf,
    pub public_base_url: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - IMAGE_STORAGE_DIR: directory for uploaded photos (default: "./storage")
    /// - IMAGE_PUBLIC_BASE_URL: URL prefix returned to clients
    ///   (default: "http://{SERVICE_IP}:{SERVICE_PORT}/images")
    pub fn from_env(server: &ServerConfig) -> Self {
        Self::from_values(
            env::var("IMAGE_STORAGE_DIR").ok(),
            env::var("IMAGE_PUBLIC_BASE_URL").ok(),
            server,
        )
    }

    fn from_values(
        root_dir: Option<String>,
        public_base_url: Option<String>,
        server: &ServerConfig,
    ) -> Self {
        Self {
            root_dir: PathBuf::from(root_dir.unwrap_or_else(|| "./storage".to_string())),
            public_base_url: public_base_url
                .unwrap_or_else(|| format!("{}{}", server.base_url(), IMAGES_ROUTE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server() -> ServerConfig {
        ServerConfig {
            ip: "127.0.0.1".to_string(),
            port: "8080".to_string(),
        }
    }

    #[test]
    fn should_default_to_local_directory_served_by_this_server() {
        let config = StorageConfig::from_values(None, None, &server());

        assert_eq!(config.root_dir, PathBuf::from("./storage"));
        assert_eq!(config.public_base_url, "http://127.0.0.1:8080/images");
    }

    #[test]
    fn should_use_explicit_values_when_present() {
        let config = StorageConfig::from_values(
            Some("/var/lib/pantry".to_string()),
            Some("https://cdn.example.com".to_string()),
            &server(),
        );

        assert_eq!(config.root_dir, PathBuf::from("/var/lib/pantry"));
        assert_eq!(config.public_base_url, "https://cdn.example.com");
    }
}
