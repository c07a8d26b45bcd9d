//! Command implementations for the market status CLI

pub mod market_status;


use crate::{cli::types::DatabaseAlias, MktError, Result, DB_DIR_ENV_VAR};
use std::env;
use std::path::{Path, PathBuf};

/// Resolve the directory holding the database files.
///
/// Priority: explicit `--db-dir`, then `MKTSTATUS_DB_DIR`, then the directory
/// the executable lives in. Relative paths are made absolute against the
/// current directory.
pub fn resolve_db_dir(db_dir: Option<PathBuf>) -> Result<PathBuf> {
    let dir = match db_dir {
        Some(dir) => dir,
        None => match env::var_os(DB_DIR_ENV_VAR).filter(|v| !v.is_empty()) {
            Some(dir) => PathBuf::from(dir),
            None => install_dir()?,
        },
    };

    if dir.is_absolute() {
        Ok(dir)
    } else {
        Ok(env::current_dir()?.join(dir))
    }
}

fn install_dir() -> Result<PathBuf> {
    let exe = env::current_exe().map_err(MktError::InstallDir)?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        MktError::InstallDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })
}

/// Path of the alias's database file, which must already exist.
pub fn resolve_database_path(alias: DatabaseAlias, db_dir: &Path) -> Result<PathBuf> {
    let path = db_dir.join(alias.file_name());
    if !path.is_file() {
        return Err(MktError::DatabaseNotFound { path });
    }
    Ok(path)
}
