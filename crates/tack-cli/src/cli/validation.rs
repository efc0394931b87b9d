use std::path::PathBuf;

/// One `LOGICAL=FILE` argument of `tack manifest`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetSpec {
    /// Bundle or asset name substituted for `[name]`
    pub name: String,
    /// Extension substituted for `[ext]`, without the dot
    pub ext: String,
    /// File holding the asset's bytes
    pub file: PathBuf,
}

impl AssetSpec {
    /// Manifest key, `name.ext`
    pub fn logical(&self) -> String {
        tack_config::logical_name(&self.name, &self.ext)
    }
}

/// Parse and validate a `LOGICAL=FILE` pair.
///
/// The logical name must have the form `name.ext`, e.g. `main.js` or
/// `icons.css`, and must not contain path separators.
///
/// # Errors
///
/// Returns an error message if either side is malformed.
pub fn parse_asset(s: &str) -> Result<AssetSpec, String> {
    let Some((logical, file)) = s.split_once('=') else {
        return Err(format!("Expected LOGICAL=FILE, got '{}'", s));
    };

    if file.is_empty() {
        return Err(format!("Missing file for '{}'", logical));
    }

    if logical.contains('/') || logical.contains('\\') {
        return Err(format!(
            "Logical name cannot contain path separators: '{}'",
            logical
        ));
    }

    let Some((name, ext)) = logical.rsplit_once('.') else {
        return Err(format!(
            "Logical name needs an extension, e.g. main.js: '{}'",
            logical
        ));
    };

    if name.is_empty() || ext.is_empty() {
        return Err(format!(
            "Logical name must look like name.ext: '{}'",
            logical
        ));
    }

    Ok(AssetSpec {
        name: name.to_string(),
        ext: ext.to_string(),
        file: PathBuf::from(file),
    })
}
