//! Asset port - the contract every generated artifact implements
//!
//! An external resolver walks `dependencies()`, generates or loads each
//! upstream asset, and hands the results to `generate` through `Parents`.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;

use crate::domain::entities::AssetFile;
use crate::domain::ports::FileFetcher;
use crate::error::AssetResult;

/// Reference to an asset type, used to declare dependencies
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetId {
    name: &'static str,
    type_id: TypeId,
}

impl AssetId {
    pub fn of<A: Asset + 'static>() -> Self {
        let full = std::any::type_name::<A>();
        Self {
            name: full.rsplit("::").next().unwrap_or(full),
            type_id: TypeId::of::<A>(),
        }
    }

    /// Short type name of the referenced asset
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.name)
    }
}

/// A generated artifact
pub trait Asset {
    /// Human-readable label
    fn name(&self) -> &'static str;

    /// Upstream assets that must be generated or loaded before `generate`.
    /// The order is declarative only.
    fn dependencies(&self) -> Vec<AssetId>;

    /// Compute the artifact from resolved dependencies.
    ///
    /// On error the asset's file must stay unset.
    fn generate(&mut self, parents: &Parents) -> AssetResult<()>;
}

/// An asset whose output can be persisted and reloaded
pub trait WritableAsset: Asset {
    /// Current output, zero or one file
    fn files(&self) -> Vec<&AssetFile>;

    /// Reconstruct state from a previously persisted file.
    ///
    /// `Ok(false)` when no file exists. On error the asset's state is left
    /// untouched.
    fn load(&mut self, fetcher: &dyn FileFetcher) -> AssetResult<bool>;
}

/// Resolved dependencies, keyed by asset type
#[derive(Default)]
pub struct Parents {
    assets: HashMap<TypeId, Box<dyn Any>>,
}

impl Parents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resolved asset, replacing any previous one of the same type
    pub fn add<A: Asset + 'static>(&mut self, asset: A) {
        self.assets.insert(TypeId::of::<A>(), Box::new(asset));
    }

    /// Builder form of [`Parents::add`]
    pub fn with<A: Asset + 'static>(mut self, asset: A) -> Self {
        self.add(asset);
        self
    }

    pub fn get<A: Asset + 'static>(&self) -> Option<&A> {
        self.assets
            .get(&TypeId::of::<A>())
            .and_then(|asset| asset.downcast_ref::<A>())
    }

    pub fn contains(&self, id: &AssetId) -> bool {
        self.assets.contains_key(&id.type_id())
    }

    /// Declared dependencies that have not been resolved yet
    pub fn missing(&self, ids: &[AssetId]) -> Vec<AssetId> {
        ids.iter().filter(|id| !self.contains(id)).copied().collect()
    }
}
