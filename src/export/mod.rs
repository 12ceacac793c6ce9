use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{Catalog, Item, PublicUser};

/// Snapshot written by an admin export; passwords never leave the store
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument<'a> {
    pub users: Vec<PublicUser>,
    pub items: &'a [Item],
    pub export_date: DateTime<Utc>,
}

/// Writes catalog snapshots as dated JSON files into one directory
pub struct Exporter {
    export_dir: PathBuf,
}

impl Exporter {
    pub fn new<P: AsRef<Path>>(export_dir: P) -> Result<Self> {
        let export_dir = export_dir.as_ref().to_path_buf();
        fs::create_dir_all(&export_dir).context("Failed to create export directory")?;

        Ok(Self { export_dir })
    }

    pub fn export(&self, catalog: &Catalog) -> Result<PathBuf> {
        self.export_at(catalog, Utc::now())
    }

    /// Same-day exports overwrite each other
    pub fn export_at(&self, catalog: &Catalog, now: DateTime<Utc>) -> Result<PathBuf> {
        let document = ExportDocument {
            users: catalog.users.iter().map(PublicUser::from).collect(),
            items: &catalog.items,
            export_date: now,
        };
        let file_path = self.build_path(now);

        let json = serde_json::to_string_pretty(&document).context("Failed to serialize export")?;
        fs::write(&file_path, json)
            .with_context(|| format!("Failed to write export file {}", file_path.display()))?;

        info!(
            "Exported {} users and {} items to {}",
            document.users.len(),
            document.items.len(),
            file_path.display()
        );
        Ok(file_path)
    }

    fn build_path(&self, now: DateTime<Utc>) -> PathBuf {
        self.export_dir
            .join(format!("rateit-data-{}.json", now.format("%Y-%m-%d")))
    }
}
