/// Metadata types offered in the pull-by-type menu, in display order.
pub const CURATED_TYPES: &[&str] = &[
    "ApexClass",
    "ApexTrigger",
    "ApexPage",
    "ApexComponent",
    "LightningComponentBundle",
    "AuraDefinitionBundle",
    "LightningMessageChannel",
    "CustomObject",
    "CustomField",
    "Layout",
    "RecordType",
    "Flow",
    "FlowDefinition",
    "ValidationRule",
    "PermissionSet",
    "PermissionSetGroup",
    "Profile",
    "FlexiPage",
    "GlobalValueSet",
    "StaticResource",
    "CustomApplication",
    "CustomTab",
    "RemoteSiteSetting",
    "NamedCredential",
    "ConnectedApp",
    "EmailTemplate",
    "Report",
    "Dashboard",
    "ReportType",
    "Translations",
];

/// The catalog as owned strings, for the selection prompt.
#[must_use]
pub fn curated_types() -> Vec<String> {
    CURATED_TYPES.iter().map(ToString::to_string).collect()
}
