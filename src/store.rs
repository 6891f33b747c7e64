use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::buffer::EditBuffer;
use crate::model::{RemoteConfig, WorkspaceConfig};

const STORE_DIR: &str = ".portfolio";
const CONFIG_FILE: &str = "config.json";
const BUFFER_FILE: &str = "buffer.json";

/// The `.portfolio/` directory: remote settings plus the persisted edit
/// buffer, so an edit session can span several invocations.
#[derive(Clone, Debug)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn store_dir(workspace_root: &Path) -> PathBuf {
        workspace_root.join(STORE_DIR)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn open(workspace_root: &Path) -> Result<Self> {
        let root = Self::store_dir(workspace_root);
        if !root.is_dir() {
            return Err(anyhow!(
                "No {} directory found at {} (run `portfolio init`)",
                STORE_DIR,
                root.display()
            ));
        }
        Ok(Self { root })
    }

    /// Finds the nearest `.portfolio/` at or above `start`.
    pub fn discover(start: &Path) -> Result<Self> {
        let start = start
            .canonicalize()
            .with_context(|| format!("canonicalize {}", start.display()))?;
        for dir in start.ancestors() {
            if Self::store_dir(dir).is_dir() {
                return Self::open(dir);
            }
        }
        Err(anyhow!(
            "No {} directory found (run `portfolio init`)",
            STORE_DIR
        ))
    }

    pub fn init(workspace_root: &Path, force: bool) -> Result<Self> {
        let root = Self::store_dir(workspace_root);
        if root.exists() && !force {
            return Err(anyhow!(
                "{} already exists at {} (use --force to re-init)",
                STORE_DIR,
                root.display()
            ));
        }
        fs::create_dir_all(&root).with_context(|| format!("create {}", root.display()))?;

        let store = Self { root };
        store.write_config(&WorkspaceConfig::default())?;
        store.clear_buffer()?;
        Ok(store)
    }

    pub fn read_config(&self) -> Result<WorkspaceConfig> {
        let bytes = fs::read(self.root.join(CONFIG_FILE)).context("read config.json")?;
        let cfg: WorkspaceConfig = serde_json::from_slice(&bytes).context("parse config.json")?;
        if cfg.version != 1 {
            anyhow::bail!("unsupported workspace config version {}", cfg.version);
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &WorkspaceConfig) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(cfg).context("serialize config")?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes).context("write config.json")?;
        Ok(())
    }

    pub fn set_remote(&self, remote: RemoteConfig) -> Result<()> {
        let mut cfg = self.read_config()?;
        cfg.remote = Some(remote);
        self.write_config(&cfg)
    }

    pub fn require_remote(&self) -> Result<RemoteConfig> {
        self.read_config()?
            .remote
            .context("no remote configured (run `portfolio remote set --url ...`)")
    }

    /// The persisted buffer, or `None` before the first load.
    pub fn read_buffer(&self) -> Result<Option<EditBuffer>> {
        let path = self.root.join(BUFFER_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path).context("read buffer.json")?;
        let buffer = serde_json::from_slice(&bytes).context("parse buffer.json")?;
        Ok(Some(buffer))
    }

    pub fn write_buffer(&self, buffer: &EditBuffer) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(buffer).context("serialize buffer")?;
        write_atomic(&self.root.join(BUFFER_FILE), &bytes).context("write buffer.json")?;
        Ok(())
    }

    pub fn clear_buffer(&self) -> Result<()> {
        let path = self.root.join(BUFFER_FILE);
        if path.exists() {
            fs::remove_file(&path).with_context(|| format!("remove {}", path.display()))?;
        }
        Ok(())
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context("create parent directories")?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes).with_context(|| format!("write temp file {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/store_tests.rs"]
mod tests;
