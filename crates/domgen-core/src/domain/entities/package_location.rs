use std::path::{Component, Path, PathBuf};

use crate::domain::{
    error::DomainError,
    value_objects::{DomainName, SourceRootMarker},
};

/// Where a package lives: the source root anchor plus the dotted namespace
/// below it.
///
/// `/work/shop/src/main/java/com/example/demo` with the default marker gives
/// root `/work/shop/src/main/java` and namespace `com.example.demo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    root: PathBuf,
    segments: Vec<String>,
}

impl PackageLocation {
    /// Derive the location from a selected path.
    ///
    /// The first run of components equal to `marker` anchors the tree.
    /// Everything after it becomes the namespace, one segment per component.
    pub fn derive(selected: &Path, marker: &SourceRootMarker) -> Result<Self, DomainError> {
        let components: Vec<Component<'_>> = selected.components().collect();
        let width = marker.len();

        let start = components
            .windows(width)
            .position(|window| {
                window
                    .iter()
                    .zip(marker.segments())
                    .all(|(c, seg)| {
                        matches!(c, Component::Normal(os) if os.to_str() == Some(seg.as_str()))
                    })
            })
            .ok_or_else(|| DomainError::MarkerNotFound {
                path: selected.display().to_string(),
                marker: marker.to_string(),
            })?;

        let anchor_end = start + width;
        let root: PathBuf = components[..anchor_end].iter().collect();

        let mut segments = Vec::with_capacity(components.len() - anchor_end);
        for component in &components[anchor_end..] {
            match component {
                Component::Normal(os) => {
                    let segment = os.to_str().ok_or_else(|| DomainError::InvalidPackageSegment {
                        path: selected.display().to_string(),
                        segment: os.to_string_lossy().into_owned(),
                    })?;
                    segments.push(segment.to_string());
                }
                other => {
                    return Err(DomainError::InvalidPackageSegment {
                        path: selected.display().to_string(),
                        segment: other.as_os_str().to_string_lossy().into_owned(),
                    });
                }
            }
        }

        Ok(Self { root, segments })
    }

    /// The anchor path, up to and including the marker.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Dotted namespace; empty when the selection is the marker itself.
    pub fn namespace(&self) -> String {
        self.segments.join(".")
    }

    /// `<root>/<namespace as path>`.
    pub fn package_dir(&self) -> PathBuf {
        let mut dir = self.root.clone();
        dir.extend(&self.segments);
        dir
    }

    /// `<root>/<namespace as path>/<CapitalizedDomainName>`.
    pub fn component_dir(&self, domain: &DomainName) -> PathBuf {
        self.package_dir().join(domain.capitalized())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn derive(path: &str) -> Result<PackageLocation, DomainError> {
        PackageLocation::derive(Path::new(path), &SourceRootMarker::default())
    }

    #[test]
    fn namespace_from_path_below_marker() {
        let loc = derive("/work/shop/src/main/java/com/example/demo").unwrap();
        assert_eq!(loc.namespace(), "com.example.demo");
        assert_eq!(loc.root(), Path::new("/work/shop/src/main/java"));
    }

    #[test]
    fn package_dir_rejoins_segments() {
        let loc = derive("/work/shop/src/main/java/com/example").unwrap();
        assert_eq!(
            loc.package_dir(),
            PathBuf::from("/work/shop/src/main/java/com/example")
        );
    }

    #[test]
    fn component_dir_uses_capitalized_name() {
        let loc = derive("/p/src/main/java/com/acme").unwrap();
        let name = DomainName::parse("orderItem").unwrap();
        assert_eq!(
            loc.component_dir(&name),
            PathBuf::from("/p/src/main/java/com/acme/OrderItem")
        );
    }

    #[test]
    fn trailing_separator_is_ignored() {
        let loc = derive("/p/src/main/java/com/acme/").unwrap();
        assert_eq!(loc.namespace(), "com.acme");
    }

    #[test]
    fn marker_itself_gives_empty_namespace() {
        let loc = derive("/p/src/main/java").unwrap();
        assert_eq!(loc.namespace(), "");
        assert!(loc.segments().is_empty());
        assert_eq!(loc.package_dir(), PathBuf::from("/p/src/main/java"));
    }

    #[test]
    fn missing_marker_is_error() {
        let err = derive("/p/src/test/java/com/acme").unwrap_err();
        assert!(matches!(err, DomainError::MarkerNotFound { .. }));
    }

    #[test]
    fn partial_segment_does_not_match() {
        assert!(derive("/p/mysrc/main/java/com").is_err());
        assert!(derive("/p/src/main/javax/com").is_err());
    }

    #[test]
    fn first_marker_occurrence_wins() {
        let loc = derive("/a/src/main/java/b/src/main/java/c").unwrap();
        assert_eq!(loc.root(), Path::new("/a/src/main/java"));
        assert_eq!(loc.namespace(), "b.src.main.java.c");
    }

    #[test]
    fn relative_paths_are_supported() {
        let loc = derive("src/main/java/com/example").unwrap();
        assert_eq!(loc.root(), Path::new("src/main/java"));
        assert_eq!(loc.namespace(), "com.example");
    }

    #[test]
    fn parent_dir_below_marker_is_rejected() {
        let err = derive("/p/src/main/java/com/../acme").unwrap_err();
        assert!(matches!(err, DomainError::InvalidPackageSegment { .. }));
    }

    #[test]
    fn custom_marker() {
        let marker = SourceRootMarker::parse("src/main/kotlin").unwrap();
        let loc = PackageLocation::derive(Path::new("/p/src/main/kotlin/io/app"), &marker).unwrap();
        assert_eq!(loc.namespace(), "io.app");
    }
}
