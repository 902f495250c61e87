//! Identifier derivation for generated sources.
//! Turns the project slug into Java class names and dotted package names
//! into directory segments.

use crate::constants::{APPLICATION_CLASS_SUFFIX, JAVA_EXTENSION};

/// Converts a kebab-case slug into PascalCase.
///
/// Splits on `-` and upper-cases the first character of every segment.
/// `"my-awesome-app"` becomes `"MyAwesomeApp"`.
pub fn to_pascal_case(slug: &str) -> String {
    slug.split('-')
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}

/// Splits a dotted package name into its directory segments.
pub fn package_to_path(package_name: &str) -> Vec<&str> {
    package_name.split('.').collect()
}

/// Default base package: the group id followed by the lowercased slug
/// with its dashes removed.
pub fn default_package_name(group_id: &str, project_name: &str) -> String {
    format!("{}.{}", group_id, project_name.to_lowercase().replace('-', ""))
}

/// Default database name: the lowercased slug with dashes turned into
/// underscores. Nothing else is rewritten.
pub fn default_db_name(project_name: &str) -> String {
    project_name.to_lowercase().replace('-', "_")
}

/// Name of the generated application class, e.g. `AcmeShopApplication`.
pub fn entry_point_class_name(project_name: &str) -> String {
    format!("{}{}", to_pascal_case(project_name), APPLICATION_CLASS_SUFFIX)
}

pub fn entry_point_file_name(project_name: &str) -> String {
    format!("{}.{}", entry_point_class_name(project_name), JAVA_EXTENSION)
}
