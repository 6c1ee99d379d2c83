//! Export command handler

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use flockbook::{export_snapshot, Config, FarmStore};

use super::{report, summary_for, today};
use crate::ui::context::UiContext;

#[derive(Serialize)]
struct Exported {
    path: PathBuf,
    sheep: usize,
}

/// `--dir`, then `storage.export_dir`, then the current directory
fn export_dir(cli_dir: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_dir
        .or_else(|| config.storage.export_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn cmd_export(
    store: &FarmStore,
    ui: &UiContext,
    dir: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let dir = export_dir(dir, config);
    let path = export_snapshot(store.data(), &dir, today())?;

    let mut summary = summary_for("Backup written", false);
    summary.add_stat("File", path.display());
    summary.add_stat("Sheep", store.data().sheep.len());
    summary.with_next_step(format!(
        "Open it later with `flockbook --data {}`",
        path.display()
    ));
    let data = Exported {
        sheep: store.data().sheep.len(),
        path,
    };
    report(ui, "export", data, summary, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_beats_config_beats_cwd() {
        let mut config = Config::default();
        assert_eq!(export_dir(None, &config), PathBuf::from("."));

        config.storage.export_dir = Some(PathBuf::from("/srv/backups"));
        assert_eq!(export_dir(None, &config), PathBuf::from("/srv/backups"));
        assert_eq!(
            export_dir(Some(PathBuf::from("here")), &config),
            PathBuf::from("here")
        );
    }
}
