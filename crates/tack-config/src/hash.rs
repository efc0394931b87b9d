//! Content hashing and stable module identifiers.
//!
//! Hashes are BLAKE3 hex digests. Output filenames embed a (possibly
//! truncated) digest of the artifact bytes; module identifiers embed a digest
//! of the module path relative to the project root.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use blake3::Hasher;

/// Default length of a hashed module identifier.
pub const MODULE_ID_LENGTH: usize = 4;

/// Full hex digest of `bytes`.
pub fn content_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Hex digest of `bytes` truncated to `len` characters (at least one).
pub fn short_hash(bytes: &[u8], len: usize) -> String {
    let mut digest = content_hash(bytes);
    digest.truncate(len.clamp(1, digest.len()));
    digest
}

/// Digest of several byte slices hashed in order, as if concatenated.
pub fn content_hash_all<'a>(parts: impl IntoIterator<Item = &'a [u8]>) -> String {
    let mut hasher = Hasher::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().to_hex().to_string()
}

/// Module path as the bundler sees it: relative to `root`, forward slashes,
/// prefixed with `./`.
pub fn relative_module_path(root: &Path, module: &Path) -> String {
    let relative = module.strip_prefix(root).unwrap_or(module);
    let joined = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .filter(|c| c != ".")
        .collect::<Vec<_>>()
        .join("/");
    format!("./{joined}")
}

/// Assigns short identifiers derived from module paths.
///
/// The identifier depends only on the module's own relative path, so adding
/// or removing unrelated modules leaves it unchanged. On a prefix collision the
/// identifier grows one character at a time until it is unique.
#[derive(Debug, Clone)]
pub struct ModuleIdAllocator {
    root: PathBuf,
    digest_length: usize,
    used: HashSet<String>,
    assigned: BTreeMap<String, String>,
}

impl ModuleIdAllocator {
    pub fn new(root: impl Into<PathBuf>, digest_length: usize) -> Self {
        Self {
            root: root.into(),
            digest_length: digest_length.max(1),
            used: HashSet::new(),
            assigned: BTreeMap::new(),
        }
    }

    /// Identifier for `module`; repeated calls return the same value.
    pub fn id_for(&mut self, module: &Path) -> String {
        let relative = relative_module_path(&self.root, module);
        if let Some(id) = self.assigned.get(&relative) {
            return id.clone();
        }

        let digest = content_hash(relative.as_bytes());
        let mut len = self.digest_length.min(digest.len());
        while len < digest.len() && self.used.contains(&digest[..len]) {
            len += 1;
        }

        let id = digest[..len].to_string();
        tracing::trace!(module = %relative, id = %id, "assigned module id");
        self.used.insert(id.clone());
        self.assigned.insert(relative, id.clone());
        id
    }

    /// Assign identifiers to a batch of modules in sorted path order, so
    /// collision resolution does not depend on discovery order.
    pub fn assign_sorted<P: AsRef<Path>>(&mut self, modules: &[P]) -> BTreeMap<String, String> {
        let mut relative: Vec<(String, &Path)> = modules
            .iter()
            .map(|m| (relative_module_path(&self.root, m.as_ref()), m.as_ref()))
            .collect();
        relative.sort_by(|a, b| a.0.cmp(&b.0));

        relative
            .into_iter()
            .map(|(key, path)| {
                let id = self.id_for(path);
                (key, id)
            })
            .collect()
    }

    /// All identifiers assigned so far, keyed by relative module path.
    pub fn assigned(&self) -> &BTreeMap<String, String> {
        &self.assigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_bytes_hash_identically() {
        assert_eq!(content_hash(b"body{}"), content_hash(b"body{}"));
        assert_ne!(content_hash(b"body{}"), content_hash(b"body{ }"));
    }

    #[test]
    fn short_hash_truncates() {
        assert_eq!(short_hash(b"x", 8).len(), 8);
        assert_eq!(short_hash(b"x", 0).len(), 1);
        assert_eq!(short_hash(b"x", 1000).len(), 64);
        assert!(content_hash(b"x").starts_with(&short_hash(b"x", 8)));
    }

    #[test]
    fn hash_all_matches_concatenation() {
        let parts: [&[u8]; 2] = [b"abc", b"def"];
        assert_eq!(content_hash_all(parts), content_hash(b"abcdef"));
    }

    #[test]
    fn relative_paths_use_dot_prefix() {
        let root = Path::new("/project");
        assert_eq!(
            relative_module_path(root, Path::new("/project/assets/main/index.js")),
            "./assets/main/index.js"
        );
        assert_eq!(
            relative_module_path(root, Path::new("./assets/polyfills.js")),
            "./assets/polyfills.js"
        );
    }

    #[test]
    fn ids_are_stable_across_unrelated_modules() {
        let mut first = ModuleIdAllocator::new("/p", MODULE_ID_LENGTH);
        let id = first.id_for(Path::new("/p/assets/main/index.js"));

        let mut second = ModuleIdAllocator::new("/p", MODULE_ID_LENGTH);
        second.id_for(Path::new("/p/assets/extra.js"));
        second.id_for(Path::new("/p/node_modules/ctrly/index.js"));
        assert_eq!(second.id_for(Path::new("/p/assets/main/index.js")), id);
        assert_eq!(id.len(), MODULE_ID_LENGTH);
    }

    #[test]
    fn repeated_requests_return_same_id() {
        let mut alloc = ModuleIdAllocator::new("/p", 1);
        let a = alloc.id_for(Path::new("/p/a.js"));
        assert_eq!(alloc.id_for(Path::new("/p/a.js")), a);
        assert_eq!(alloc.assigned().len(), 1);
    }

    #[test]
    fn collisions_extend_the_id() {
        // With one-character ids, 17 modules must collide at least once.
        let mut alloc = ModuleIdAllocator::new("/p", 1);
        let modules: Vec<PathBuf> = (0..17).map(|i| PathBuf::from(format!("/p/m{i}.js"))).collect();
        let ids = alloc.assign_sorted(&modules);
        let unique: HashSet<_> = ids.values().collect();
        assert_eq!(unique.len(), 17);
        assert!(ids.values().any(|id| id.len() > 1));
    }
}
