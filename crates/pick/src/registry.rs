use std::collections::{BTreeMap, HashMap};

use gallery_common::{ExhibitId, Ray};

use crate::proxy::{Aabb, ProxyId};

/// Display metadata for an interactive exhibit, owned by the registry and
/// read by the UI collaborator when the exhibit is selected.
#[derive(Debug, Clone)]
pub struct Exhibit {
    pub id: ExhibitId,
    pub title: String,
    pub description: String,
    /// Capture-settings line shown under the description.
    pub metadata: String,
}

/// Registered exhibits plus the proxy→owner mapping.
///
/// The mapping is built once at registration time, so resolving a ray hit
/// back to its owning exhibit is a plain lookup, never a scene-graph walk.
/// The set is fixed after initialization; there is no unregister.
#[derive(Debug, Default)]
pub struct ExhibitRegistry {
    exhibits: BTreeMap<ExhibitId, Exhibit>,
    proxies: Vec<(ProxyId, Aabb)>,
    owner: HashMap<ProxyId, ExhibitId>,
    next_proxy: u64,
}

impl ExhibitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an exhibit with its hit proxies. An exhibit typically has
    /// several: the frame parts plus an oversized invisible collider box.
    pub fn register(&mut self, exhibit: Exhibit, proxies: impl IntoIterator<Item = Aabb>) {
        let id = exhibit.id;
        let mut count = 0;
        for aabb in proxies {
            let proxy = ProxyId(self.next_proxy);
            self.next_proxy += 1;
            self.proxies.push((proxy, aabb));
            self.owner.insert(proxy, id);
            count += 1;
        }
        self.exhibits.insert(id, exhibit);
        tracing::debug!(?id, proxies = count, "exhibit registered");
    }

    pub fn exhibit(&self, id: ExhibitId) -> Option<&Exhibit> {
        self.exhibits.get(&id)
    }

    pub fn exhibit_count(&self) -> usize {
        self.exhibits.len()
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    /// Owner of a hit proxy. Any proxy resolves to its owning exhibit.
    pub fn owner_of(&self, proxy: ProxyId) -> Option<ExhibitId> {
        self.owner.get(&proxy).copied()
    }

    /// Nearest proxy intersected by the ray, by intersection distance.
    /// Returns the owning exhibit. An empty registry simply yields `None`.
    pub fn raycast(&self, ray: &Ray) -> Option<(ExhibitId, f32)> {
        let mut best: Option<(ProxyId, f32)> = None;
        for (proxy, aabb) in &self.proxies {
            if let Some(t) = aabb.intersect_ray(ray) {
                if best.is_none_or(|(_, bt)| t < bt) {
                    best = Some((*proxy, t));
                }
            }
        }
        best.and_then(|(proxy, t)| self.owner_of(proxy).map(|id| (id, t)))
    }
}
