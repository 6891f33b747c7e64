    use super::*;
    use crate::buffer::EditTarget;
    use crate::test_support::app;

    #[test]
    fn init_writes_default_config_and_no_buffer() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::init(dir.path(), false)?;

        assert_eq!(store.read_config()?, WorkspaceConfig::default());
        assert!(store.read_buffer()?.is_none());
        assert!(store.require_remote().is_err());
        Ok(())
    }

    #[test]
    fn init_refuses_to_clobber_without_force() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::init(dir.path(), false)?;
        store.set_remote(RemoteConfig {
            base_url: "http://localhost:8080".to_string(),
            environment: "PROD".to_string(),
        })?;

        let err = LocalStore::init(dir.path(), false).expect_err("already exists");
        assert!(err.to_string().contains("--force"));

        let store = LocalStore::init(dir.path(), true)?;
        assert!(store.read_config()?.remote.is_none());
        Ok(())
    }

    #[test]
    fn discover_walks_up_from_nested_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        LocalStore::init(dir.path(), false)?;
        let nested = dir.path().join("a/b/c");
        fs::create_dir_all(&nested)?;

        let found = LocalStore::discover(&nested)?;
        assert_eq!(found.root(), LocalStore::store_dir(&dir.path().canonicalize()?));
        Ok(())
    }

    #[test]
    fn discover_without_workspace_fails() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let err = LocalStore::open(dir.path()).expect_err("no workspace");
        assert!(err.to_string().contains("portfolio init"));
        Ok(())
    }

    #[test]
    fn buffer_survives_a_round_trip_with_pending_edits() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::init(dir.path(), false)?;

        let mut buffer = EditBuffer::new();
        buffer.load(&[app("A", "C0"), app("B", "C1")]);
        buffer.upsert(app("A", "C5"), &EditTarget::Existing("A".to_string()))?;
        buffer.remove("B")?;
        store.write_buffer(&buffer)?;

        let restored = store.read_buffer()?.expect("buffer written");
        assert_eq!(restored, buffer);
        assert_eq!(restored.diff(), buffer.diff());

        store.clear_buffer()?;
        assert!(store.read_buffer()?.is_none());
        Ok(())
    }

    #[test]
    fn remote_settings_persist() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let store = LocalStore::init(dir.path(), false)?;
        let remote = RemoteConfig {
            base_url: "http://127.0.0.1:9000".to_string(),
            environment: "TEST".to_string(),
        };
        store.set_remote(remote.clone())?;
        assert_eq!(LocalStore::open(dir.path())?.require_remote()?, remote);
        Ok(())
    }

    #[test]
    fn environment_defaults_to_dev() -> Result<()> {
        let cfg: WorkspaceConfig =
            serde_json::from_str(r#"{"version":1,"remote":{"base_url":"http://x"}}"#)?;
        assert_eq!(cfg.remote.map(|r| r.environment).as_deref(), Some("DEV"));
        Ok(())
    }
