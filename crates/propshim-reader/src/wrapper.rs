//! Resolution of the value type hidden behind a lazy wrapper.
//!
//! The supported wrapper shapes form a closed table. Each shape knows the
//! original type it stands in for and the category reported to adapter
//! generation; anything outside the table needs an explicit `originalType`.

use propshim_model::{JvmType, MethodDeclaration, TypeRef, UpgradedPropertyType};

use crate::error::ReadFailure;

const FILE_TYPE: &str = "java.io.File";
const FILE_COLLECTION_TYPE: &str = "org.gradle.api.file.FileCollection";
const MAP_TYPE: &str = "java.util.Map";
const LIST_TYPE: &str = "java.util.List";
const SET_TYPE: &str = "java.util.Set";

/// The wrapper shapes the resolver understands.
///
/// # Example
///
/// ```
/// use propshim_reader::WrapperKind;
///
/// let kind = WrapperKind::from_class_name("org.gradle.api.provider.ListProperty");
/// assert_eq!(kind, Some(WrapperKind::ListProperty));
/// assert_eq!(WrapperKind::from_class_name("java.lang.String"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WrapperKind {
    /// Lazy reference to a single regular file.
    RegularFileProperty,
    /// Lazy reference to a single directory.
    DirectoryProperty,
    /// Lazy single value, unwrapped through its type argument.
    Property,
    /// Mutable collection of files.
    ConfigurableFileCollection,
    /// Lazy map.
    MapProperty,
    /// Lazy list.
    ListProperty,
    /// Lazy set.
    SetProperty,
}

impl WrapperKind {
    /// Every known wrapper shape.
    pub const ALL: [Self; 7] = [
        Self::RegularFileProperty,
        Self::DirectoryProperty,
        Self::Property,
        Self::ConfigurableFileCollection,
        Self::MapProperty,
        Self::ListProperty,
        Self::SetProperty,
    ];

    /// Binary name of the wrapper type.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::RegularFileProperty => "org.gradle.api.file.RegularFileProperty",
            Self::DirectoryProperty => "org.gradle.api.file.DirectoryProperty",
            Self::Property => "org.gradle.api.provider.Property",
            Self::ConfigurableFileCollection => "org.gradle.api.file.ConfigurableFileCollection",
            Self::MapProperty => "org.gradle.api.provider.MapProperty",
            Self::ListProperty => "org.gradle.api.provider.ListProperty",
            Self::SetProperty => "org.gradle.api.provider.SetProperty",
        }
    }

    /// Looks up a wrapper by binary class name.
    #[must_use]
    pub fn from_class_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.class_name() == name)
    }

    /// Classifies a declared type by its erasure.
    #[must_use]
    pub fn of(declared: &TypeRef) -> Option<Self> {
        declared.class_name().and_then(Self::from_class_name)
    }

    /// Category reported in property-upgrade metadata.
    #[must_use]
    pub const fn upgraded_type(self) -> UpgradedPropertyType {
        match self {
            Self::RegularFileProperty | Self::DirectoryProperty => {
                UpgradedPropertyType::FileSystemLocationProperty
            }
            Self::Property => UpgradedPropertyType::Property,
            Self::ConfigurableFileCollection => UpgradedPropertyType::ConfigurableFileCollection,
            Self::MapProperty => UpgradedPropertyType::MapProperty,
            Self::ListProperty => UpgradedPropertyType::ListProperty,
            Self::SetProperty => UpgradedPropertyType::SetProperty,
        }
    }

    /// Original type this wrapper replaced, given its type arguments.
    ///
    /// Returns `None` for a single-value wrapper without exactly one type
    /// argument.
    fn original_type(self, arguments: &[TypeRef]) -> Option<JvmType> {
        match (self, arguments) {
            (Self::RegularFileProperty | Self::DirectoryProperty, _) => {
                Some(JvmType::object(FILE_TYPE))
            }
            (Self::Property, [argument]) => Some(argument.erasure().clone()),
            (Self::Property, _) => None,
            (Self::ConfigurableFileCollection, _) => Some(JvmType::object(FILE_COLLECTION_TYPE)),
            (Self::MapProperty, _) => Some(JvmType::object(MAP_TYPE)),
            (Self::ListProperty, _) => Some(JvmType::object(LIST_TYPE)),
            (Self::SetProperty, _) => Some(JvmType::object(SET_TYPE)),
        }
    }
}

/// Category of a declared return type; shapes outside the table report
/// [`UpgradedPropertyType::Property`].
#[must_use]
pub fn upgraded_property_type(declared: &TypeRef) -> UpgradedPropertyType {
    WrapperKind::of(declared).map_or(UpgradedPropertyType::Property, WrapperKind::upgraded_type)
}

/// Resolves the original value type of `method`.
///
/// An explicit type always wins. Otherwise the declared return type is looked
/// up in the wrapper table.
///
/// # Errors
///
/// Returns [`ReadFailure::UnresolvedOriginalType`] when no explicit type was
/// given and the declared return type is not a supported wrapper shape.
pub fn resolve_original_type(
    method: &MethodDeclaration,
    explicit: Option<&JvmType>,
) -> Result<JvmType, ReadFailure> {
    if let Some(original) = explicit {
        return Ok(original.clone());
    }
    let declared = method.return_type();
    WrapperKind::of(declared)
        .and_then(|kind| kind.original_type(declared.arguments()))
        .ok_or_else(|| ReadFailure::UnresolvedOriginalType {
            method: method.qualified_signature(),
            declared: declared.to_string(),
        })
}
