use std::path::Path;
use std::{env, fs};

use tracing::warn;

use crate::utils::constant::*;

/// Development credential bundle from `LOCAL_SECRET_FILE` or `LOCAL_SECRET`.
pub fn local_secret_payload() -> Option<String> {
    env_or_file(LOCAL_SECRET_FILE_VAR, LOCAL_SECRET_VAR)
}

/// Contents of the file named by `file_var` when that is set, otherwise the
/// value of `var`. Blank values count as unset.
pub fn env_or_file(file_var: &str, var: &str) -> Option<String> {
    let value = match env::var_os(file_var) {
        Some(path) => fs::read_to_string(&path)
            .inspect_err(|e| {
                warn!(path = %Path::new(&path).display(), error = %e, "Cannot read secret file")
            })
            .ok()?,
        None => env::var(var).ok()?,
    };

    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
