//! Host-supplied collaborators: resource lookup and the enumeration registry
//! consumed by `EnumField`.

use std::collections::HashMap;

use serde::Serialize;

use crate::tables::keyword_table;

keyword_table! {
    /// Resource family requested by a style value.
    pub enum ResourceKind {
        Texture => "texture",
        Font => "font",
        FontDefinition => "font definition",
        Cursor => "cursor",
    }
}

impl ResourceKind {
    /// Whether a resolved resource belongs to the family this request expects.
    pub fn accepts(self, resolved: &ResolvedResource) -> Option<&ResourceHandle> {
        match (self, resolved) {
            (ResourceKind::Texture | ResourceKind::Cursor, ResolvedResource::Texture(handle)) => {
                Some(handle)
            }
            (ResourceKind::Font | ResourceKind::FontDefinition, ResolvedResource::Font(handle)) => {
                Some(handle)
            }
            _ => None,
        }
    }
}

/// Opaque identifier of a loaded asset, as handed out by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ResourceHandle(String);

impl ResourceHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn id(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedResource {
    Texture(ResourceHandle),
    Font(ResourceHandle),
    NotFound,
}

pub trait ResourceResolver: Send + Sync {
    fn resolve(&self, kind: ResourceKind, path: &str) -> ResolvedResource;
}

/// Resolves nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullResolver;

impl ResourceResolver for NullResolver {
    fn resolve(&self, _kind: ResourceKind, _path: &str) -> ResolvedResource {
        ResolvedResource::NotFound
    }
}

/// In-memory resolver keyed by normalised path.
#[derive(Debug, Clone, Default)]
pub struct MapResolver {
    entries: HashMap<String, ResolvedResource>,
}

impl MapResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_texture(mut self, path: impl Into<String>, id: impl Into<String>) -> Self {
        self.entries.insert(
            path.into(),
            ResolvedResource::Texture(ResourceHandle::new(id)),
        );
        self
    }

    pub fn with_font(mut self, path: impl Into<String>, id: impl Into<String>) -> Self {
        self.entries
            .insert(path.into(), ResolvedResource::Font(ResourceHandle::new(id)));
        self
    }
}

impl ResourceResolver for MapResolver {
    fn resolve(&self, _kind: ResourceKind, path: &str) -> ResolvedResource {
        self.entries
            .get(path)
            .cloned()
            .unwrap_or(ResolvedResource::NotFound)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumMember {
    pub name: String,
    pub obsolete: bool,
}

impl EnumMember {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            obsolete: false,
        }
    }

    pub fn obsolete(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            obsolete: true,
        }
    }
}

/// Ordered enumeration members by type name.
pub trait EnumRegistry: Send + Sync {
    fn members(&self, type_name: &str) -> Option<&[EnumMember]>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticEnumRegistry {
    types: HashMap<String, Vec<EnumMember>>,
}

impl StaticEnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> &mut Self {
        self.types
            .insert(type_name.into(), members.into_iter().collect());
        self
    }

    pub fn with(
        mut self,
        type_name: impl Into<String>,
        members: impl IntoIterator<Item = EnumMember>,
    ) -> Self {
        self.register(type_name, members);
        self
    }
}

impl EnumRegistry for StaticEnumRegistry {
    fn members(&self, type_name: &str) -> Option<&[EnumMember]> {
        self.types.get(type_name).map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_must_match_the_request() {
        let texture = ResolvedResource::Texture(ResourceHandle::new("tex"));
        let font = ResolvedResource::Font(ResourceHandle::new("font"));
        assert!(ResourceKind::Texture.accepts(&texture).is_some());
        assert!(ResourceKind::Cursor.accepts(&texture).is_some());
        assert!(ResourceKind::FontDefinition.accepts(&font).is_some());
        assert!(ResourceKind::Texture.accepts(&font).is_none());
        assert!(ResourceKind::Font.accepts(&ResolvedResource::NotFound).is_none());
    }

    #[test]
    fn map_resolver_lookups() {
        let resolver = MapResolver::new()
            .with_texture("Textures/image", "tex-1")
            .with_font("Fonts/Main", "font-1");
        assert_eq!(
            resolver.resolve(ResourceKind::Texture, "Textures/image"),
            ResolvedResource::Texture(ResourceHandle::new("tex-1"))
        );
        assert_eq!(
            resolver.resolve(ResourceKind::Font, "missing"),
            ResolvedResource::NotFound
        );
        assert_eq!(
            NullResolver.resolve(ResourceKind::Font, "Fonts/Main"),
            ResolvedResource::NotFound
        );
    }

    #[test]
    fn registry_keeps_member_order() {
        let registry = StaticEnumRegistry::new().with(
            "Demo.Color",
            [EnumMember::obsolete("Old"), EnumMember::new("Red")],
        );
        let members = registry.members("Demo.Color").unwrap();
        assert_eq!(members[0].name, "Old");
        assert!(members[0].obsolete);
        assert_eq!(members[1], EnumMember::new("Red"));
        assert!(registry.members("Demo.Shape").is_none());
    }
}
