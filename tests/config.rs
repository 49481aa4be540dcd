#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todos::api::cors_layer;
    use todos::libs::config::{Config, CorsConfig, ServerConfig, DB_FILE_NAME, DEFAULT_ALLOWED_ORIGINS};
    use todos::libs::data_storage::DataStorage;

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test]
    fn test_defaults_match_local_development() {
        let config = Config::default();

        assert_eq!(config.server.address(), "127.0.0.1:8000");
        assert!(config.database.path.is_none());
        assert_eq!(config.cors.allowed_origins, DEFAULT_ALLOWED_ORIGINS);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_keeps_other_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{"server": {"port": 9000}, "database": {"path": "/tmp/other.db"}}"#).unwrap();

        let config = Config::read_from(&ctx.config_path()).unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.database.resolve_path().unwrap(), PathBuf::from("/tmp/other.db"));
        assert_eq!(config.cors, CorsConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unparsable_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();
        assert!(Config::read_from(&ctx.config_path()).is_err());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_saved_config_reads_back(ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.server.port = 8080;
        config.cors.allowed_origins = vec!["https://todos.example".to_string()];

        config.save_to(&ctx.config_path()).unwrap();

        assert_eq!(Config::read_from(&ctx.config_path()).unwrap(), config);
    }

    #[test]
    fn test_invalid_listen_address_is_rejected() {
        let server = ServerConfig {
            host: "not a host".to_string(),
            port: 8000,
        };
        assert!(server.socket_addr().is_err());

        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
        };
        assert_eq!(server.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_invalid_cors_origin_is_rejected() {
        let cors = CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string(), "http://bad\norigin".to_string()],
        };
        assert!(cors_layer(&cors).is_err());
        assert!(cors_layer(&CorsConfig::default()).is_ok());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_base_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join("nested").join("data");
        let storage = DataStorage::at(&base);

        let path = storage.get_path(DB_FILE_NAME).unwrap();

        assert!(base.is_dir());
        assert_eq!(path, base.join(DB_FILE_NAME));
    }
}
