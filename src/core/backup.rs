use crate::config::Config;
use crate::errors::AppResult;
use crate::store::audit;
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    pub fn backup(cfg: &Config, dest_file: &str, compress: bool) -> AppResult<()> {
        let src = Path::new(&cfg.store);
        let dest = Path::new(dest_file);

        // Nothing to back up without a store slot.
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Entries store not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        // Existing destination needs an explicit go-ahead.
        if dest.exists() {
            warning(format!(
                "The file '{}' already exists. Overwrite? [y/N]:",
                dest.display()
            ));

            use std::io::{Write, stdin, stdout};

            let mut answer = String::new();
            print!("> ");
            stdout().flush().ok();
            stdin().read_line(&mut answer)?;

            let answer = answer.trim().to_lowercase();
            if !(answer == "y" || answer == "yes") {
                warning("Backup cancelled by user.");
                return Ok(());
            }
        }

        fs::copy(src, dest)?;
        success(format!("Backup created: {}", dest.display()));

        let final_path = if compress {
            let compressed = compress_backup(dest)?;

            if compressed != dest.to_path_buf() {
                if let Err(e) = fs::remove_file(dest) {
                    warning(format!("Failed to remove uncompressed backup: {}", e));
                }
            }

            compressed
        } else {
            dest.to_path_buf()
        };

        let audit_path = Config::audit_file_for(&cfg.store);
        if let Err(e) = audit::append(
            &audit_path,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        ) {
            warning(format!("Failed to write audit log: {}", e));
        }

        Ok(())
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path) -> AppResult<PathBuf> {
    let zip_path = path.with_extension("zip");
    let file = fs::File::create(&zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "backup.json".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    success(format!("Compressed: {}", zip_path.display()));

    Ok(zip_path)
}
