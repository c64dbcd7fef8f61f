use std::collections::BTreeMap;
use std::env;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::SystemTime;

use proc_macro2::Span;
use toml_edit::{Document, Item, Table};

/// Locate an accessible [`syn::Path`] for another crate as seen from the
/// caller's Cargo.toml.
///
/// This helper is intended for proc-macro code generation where the emitted
/// path must be valid from the invoking crate.
///
/// # Example
///
/// ```rust
/// # use vc_macro_utils::Manifest;
/// let p: syn::Path = Manifest::shared(|m| m.get_crate_path("vc_reflect"));
/// ```
///
/// The caller should store the result and call this once per proc-macro.
///
/// # Resolution rules
///
/// 1. If the requested crate is listed in `dependencies`, return `::crate_name`.
/// 2. If the requested crate name begins with `vc_` and the target crate
///    depends on the facade crate `vc_marshal`, return
///    `::vc_marshal::short_name` (e.g. `vc_reflect` -> `::vc_marshal::reflect`).
/// 3. Repeat step 1-2 in `dev-dependencies`.
/// 4. Otherwise, fall back to the absolute path `::crate_name`.
///
/// A renamed dependency (`alias = { package = "vc_reflect", .. }`) is found
/// by its `package` key and resolved as `::alias`.
///
/// ## Note
/// When a crate needs to reference itself, library code should use
/// `crate::...`, while doctests and other external code typically use the
/// absolute path `::crate_name`. Adding `extern crate self as vc_reflect;`
/// in the crate root makes both work.
#[derive(Debug)]
pub struct Manifest {
    /// `None` when the caller's manifest could not be located or parsed.
    pub manifest: Option<Document<Box<str>>>,
    pub modified_time: SystemTime,
}

const FACADE_NAME: &str = "vc_marshal";
const CRATE_PREFIX: &str = "vc_";

impl Manifest {
    // Try get `Cargo.toml` path.
    #[inline(never)]
    fn get_manifest_path() -> Option<PathBuf> {
        let mut path = PathBuf::from(env::var_os("CARGO_MANIFEST_DIR")?);
        path.push("Cargo.toml");
        path.exists().then_some(path)
    }

    // Try get `Cargo.toml` modified time.
    #[inline(never)]
    fn get_manifest_modified_time(path: &Path) -> Option<SystemTime> {
        std::fs::metadata(path)
            .and_then(|metadata| metadata.modified())
            .ok()
    }

    #[inline(never)]
    fn read_manifest(path: &Path) -> Option<Document<Box<str>>> {
        let manifest = std::fs::read_to_string(path).ok()?.into_boxed_str();
        Document::parse(manifest).ok()
    }

    // Build `::a::b` from segments. Cargo names may contain `-`.
    fn make_path(segments: &[&str]) -> syn::Path {
        let mut path = syn::Path {
            leading_colon: Some(Default::default()),
            segments: Default::default(),
        };
        for segment in segments {
            let ident = syn::Ident::new(&segment.replace('-', "_"), Span::call_site());
            path.segments.push(syn::PathSegment::from(ident));
        }
        path
    }

    // Returns the local name under which `package` is available.
    fn find_dep<'a>(deps: &'a Table, package: &str) -> Option<&'a str> {
        if let Some((key, _)) = deps.get_key_value(package) {
            return Some(key.get());
        }
        deps.iter().find_map(|(alias, item)| {
            let renamed = item
                .as_table_like()
                .and_then(|table| table.get("package"))
                .and_then(Item::as_str);
            (renamed == Some(package)).then_some(alias)
        })
    }

    fn find_in_deps(deps: &Table, name: &str) -> Option<syn::Path> {
        if let Some(local) = Self::find_dep(deps, name) {
            return Some(Self::make_path(&[local]));
        }
        let module = name.strip_prefix(CRATE_PREFIX)?;
        let facade = Self::find_dep(deps, FACADE_NAME)?;
        Some(Self::make_path(&[facade, module]))
    }

    /// Return a [`syn::Path`] for the package named `name` as resolved from this
    /// crate's Cargo.toml. See the top-level documentation for the resolution
    /// order.
    #[inline(never)]
    pub fn get_crate_path(&self, name: &str) -> syn::Path {
        let Some(manifest) = &self.manifest else {
            return Self::make_path(&[name]);
        };

        for table in ["dependencies", "dev-dependencies"] {
            if let Some(Item::Table(deps)) = manifest.get(table)
                && let Some(path) = Self::find_in_deps(deps, name)
            {
                return path;
            }
        }

        Self::make_path(&[name])
    }

    /// Obtain the [Manifest] of the caller's Cargo.toml and run `func` on it.
    ///
    /// Manifests are cached per path and re-read when their modified time
    /// changes. If the manifest cannot be located or parsed, `func` runs on
    /// an empty manifest, so every crate resolves to `::crate_name`.
    pub fn shared<R>(func: impl FnOnce(&Self) -> R) -> R {
        static MANIFESTS: RwLock<BTreeMap<PathBuf, Manifest>> = RwLock::new(BTreeMap::new());

        let Some(manifest_path) = Self::get_manifest_path() else {
            return func(&Self::empty());
        };
        let modified_time =
            Self::get_manifest_modified_time(&manifest_path).unwrap_or(SystemTime::UNIX_EPOCH);

        let manifests = MANIFESTS.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(manifest) = manifests.get(&manifest_path)
            && manifest.modified_time == modified_time
        {
            return func(manifest);
        }

        drop(manifests);

        let manifest = Manifest {
            manifest: Self::read_manifest(&manifest_path),
            modified_time,
        };

        let result = func(&manifest);

        MANIFESTS
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(manifest_path, manifest);

        result
    }

    #[inline]
    fn empty() -> Self {
        Self {
            manifest: None,
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use super::Manifest;
    use std::time::SystemTime;
    use toml_edit::Document;

    fn manifest(text: &str) -> Manifest {
        Manifest {
            manifest: Some(Document::parse(Box::<str>::from(text)).unwrap()),
            modified_time: SystemTime::UNIX_EPOCH,
        }
    }

    fn resolve(text: &str, name: &str) -> String {
        let path = manifest(text).get_crate_path(name);
        let segments: Vec<_> = path.segments.iter().map(|s| s.ident.to_string()).collect();
        format!("::{}", segments.join("::"))
    }

    #[test]
    fn direct_dependency() {
        let text = "[dependencies]\nvc_reflect = { path = \"../vc_reflect\" }\n";
        assert_eq!(resolve(text, "vc_reflect"), "::vc_reflect");
    }

    #[test]
    fn through_facade() {
        let text = "[dependencies]\nvc_marshal = \"0.0.1\"\n";
        assert_eq!(resolve(text, "vc_reflect"), "::vc_marshal::reflect");
    }

    #[test]
    fn renamed_dependency() {
        let text = "[dev-dependencies]\nrefl = { package = \"vc_reflect\", path = \"x\" }\n";
        assert_eq!(resolve(text, "vc_reflect"), "::refl");
    }

    #[test]
    fn fallback() {
        assert_eq!(resolve("[package]\nname = \"x\"\n", "vc_reflect"), "::vc_reflect");
        let path = Manifest::empty().get_crate_path("vc-reflect");
        assert!(path.leading_colon.is_some());
        assert_eq!(path.segments.len(), 1);
        assert_eq!(path.segments[0].ident, "vc_reflect");
    }
}
