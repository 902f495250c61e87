//! System requirements check behind `jangular --test`.
//! Probes the tools a generated project needs and compares their versions.

use std::sync::LazyLock;

use log::{debug, warn};
use regex::Regex;
use semver::Version;

use crate::error::{Error, Result};
use crate::external::ExternalCommand;

static NODE_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid node pattern"));
static JAVA_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:version|openjdk)\s*["']?(\d+)(?:\.(\d+))?(?:\.(\d+))?"#)
        .expect("valid java pattern")
});
static ANGULAR_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Angular CLI:\s*(\d+)\.(\d+)\.(\d+)").expect("valid angular pattern")
});
static MAVEN_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Apache Maven\s+(\d+)\.(\d+)\.(\d+)").expect("valid maven pattern")
});
static MAVEN_JAVA_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)Java version:\s*(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid maven java pattern")
});

const MINIMUM_JAVA: Version = Version::new(21, 0, 0);

/// A tool a generated project depends on.
#[derive(Debug)]
pub struct Requirement {
    pub name: &'static str,
    pub probe: ExternalCommand,
    pub pattern: &'static LazyLock<Regex>,
    pub minimum: Version,
    /// The probe output also names the Java runtime the tool runs on
    pub reports_java: bool,
}

/// The tools checked by default: Node.js 16, Java 21, Angular CLI 17 and
/// any Maven.
pub fn default_requirements() -> Vec<Requirement> {
    vec![
        Requirement {
            name: "Node.js",
            probe: ExternalCommand::new("node", &["--version"]),
            pattern: &NODE_VERSION,
            minimum: Version::new(16, 0, 0),
            reports_java: false,
        },
        Requirement {
            name: "Java",
            probe: ExternalCommand::new("java", &["-version"]),
            pattern: &JAVA_VERSION,
            minimum: MINIMUM_JAVA,
            reports_java: false,
        },
        Requirement {
            name: "Angular CLI",
            probe: ExternalCommand::new("ng", &["version"]),
            pattern: &ANGULAR_VERSION,
            minimum: Version::new(17, 0, 0),
            reports_java: false,
        },
        Requirement {
            name: "Apache Maven",
            probe: ExternalCommand::new("mvn", &["--version"]),
            pattern: &MAVEN_VERSION,
            minimum: Version::new(0, 0, 0),
            reports_java: true,
        },
    ]
}

/// Extracts a `major[.minor[.patch]]` version from tool output.
/// Missing minor or patch parts count as zero.
pub fn parse_tool_version(output: &str, pattern: &Regex) -> Option<Version> {
    let caps = pattern.captures(output)?;
    let part = |i: usize| -> Option<u64> {
        match caps.get(i) {
            Some(m) => m.as_str().parse().ok(),
            None => Some(0),
        }
    };
    Some(Version::new(part(1)?, part(2)?, part(3)?))
}

/// Outcome of checking one requirement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    Ok(Version),
    Outdated(Version),
    Unrecognized,
    Missing,
}

/// Runs the requirement's probe once and returns its status together with
/// the probe output, if the tool could be started.
pub fn check_requirement(requirement: &Requirement) -> (CheckStatus, Option<String>) {
    match requirement.probe.output() {
        Ok(output) => (evaluate(requirement, &output), Some(output)),
        Err(e) => {
            debug!("{} probe failed: {}", requirement.name, e);
            (CheckStatus::Missing, None)
        }
    }
}

/// Compares a probe's output against the requirement's minimum version.
pub fn evaluate(requirement: &Requirement, output: &str) -> CheckStatus {
    match parse_tool_version(output, requirement.pattern) {
        Some(version) if version >= requirement.minimum => CheckStatus::Ok(version),
        Some(version) => CheckStatus::Outdated(version),
        None => CheckStatus::Unrecognized,
    }
}

/// The Java version named in a tool's output when its major version is
/// older than `minimum_java`.
pub fn outdated_runtime_java(output: &str, minimum_java: &Version) -> Option<Version> {
    parse_tool_version(output, &MAVEN_JAVA_VERSION).filter(|java| java.major < minimum_java.major)
}

/// Checks every requirement, printing one line per tool.
///
/// # Errors
/// * `Error::RequirementError` listing every tool that is missing, outdated
///   or whose version could not be determined
pub fn check_requirements(requirements: &[Requirement]) -> Result<()> {
    println!("Checking system requirements...");
    let mut failures = Vec::new();

    for requirement in requirements {
        let (status, output) = check_requirement(requirement);
        match status {
            CheckStatus::Ok(version) => {
                println!("{} {} detected.", requirement.name, version);
                let outdated = output
                    .filter(|_| requirement.reports_java)
                    .and_then(|output| outdated_runtime_java(&output, &MINIMUM_JAVA));
                if let Some(java) = outdated {
                    warn!(
                        "{} is using Java {java}, but Java {} is recommended. It might be using a different Java installation than your system default.",
                        requirement.name, MINIMUM_JAVA.major
                    );
                }
            }
            CheckStatus::Outdated(version) => failures.push(format!(
                "{} {} or higher is required (installed: {})",
                requirement.name, requirement.minimum, version
            )),
            CheckStatus::Unrecognized => failures
                .push(format!("could not determine the {} version", requirement.name)),
            CheckStatus::Missing => {
                failures.push(format!("{} is not installed or not in PATH", requirement.name))
            }
        }
    }

    if !failures.is_empty() {
        return Err(Error::RequirementError(failures.join("; ")));
    }
    println!("All requirements met!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn requirement(name: &str) -> Requirement {
        default_requirements().into_iter().find(|r| r.name == name).unwrap()
    }

    #[test]
    fn test_parse_java_versions() {
        let openjdk = "openjdk version \"21.0.2\" 2024-01-16\nOpenJDK Runtime Environment";
        assert_eq!(parse_tool_version(openjdk, &JAVA_VERSION), Some(Version::new(21, 0, 2)));

        let legacy = "java version \"1.8.0_292\"";
        assert_eq!(parse_tool_version(legacy, &JAVA_VERSION), Some(Version::new(1, 8, 0)));

        let short = "openjdk 17 2021-09-14";
        assert_eq!(parse_tool_version(short, &JAVA_VERSION), Some(Version::new(17, 0, 0)));
    }

    #[test]
    fn test_parse_angular_and_maven_versions() {
        let ng = "Angular CLI: 17.3.1\nNode: 20.11.0";
        assert_eq!(parse_tool_version(ng, &ANGULAR_VERSION), Some(Version::new(17, 3, 1)));

        let mvn = "Apache Maven 3.9.6 (bc0240f3)\nJava version: 17.0.9, vendor: Eclipse";
        assert_eq!(parse_tool_version(mvn, &MAVEN_VERSION), Some(Version::new(3, 9, 6)));
        assert_eq!(parse_tool_version(mvn, &MAVEN_JAVA_VERSION), Some(Version::new(17, 0, 9)));
    }

    #[test]
    fn test_evaluate() {
        let java = requirement("Java");
        assert_eq!(
            evaluate(&java, "openjdk version \"21.0.2\""),
            CheckStatus::Ok(Version::new(21, 0, 2))
        );
        assert_eq!(
            evaluate(&java, "openjdk version \"17.0.9\""),
            CheckStatus::Outdated(Version::new(17, 0, 9))
        );
        assert_eq!(evaluate(&java, "command not found"), CheckStatus::Unrecognized);

        let node = requirement("Node.js");
        assert_eq!(evaluate(&node, "v20.11.0\n"), CheckStatus::Ok(Version::new(20, 11, 0)));
    }

    #[test]
    fn test_only_maven_reports_its_java() {
        let reporting: Vec<&str> = default_requirements()
            .into_iter()
            .filter(|r| r.reports_java)
            .map(|r| r.name)
            .collect();
        assert_eq!(reporting, vec!["Apache Maven"]);
    }

    #[test]
    fn test_outdated_runtime_java() {
        let old = "Apache Maven 3.9.6\nJava version: 17.0.9, vendor: Eclipse";
        assert_eq!(outdated_runtime_java(old, &MINIMUM_JAVA), Some(Version::new(17, 0, 9)));

        let current = "Apache Maven 3.9.6\nJava version: 21.0.2, vendor: Eclipse";
        assert_eq!(outdated_runtime_java(current, &MINIMUM_JAVA), None);
        assert_eq!(outdated_runtime_java("Apache Maven 3.9.6", &MINIMUM_JAVA), None);
    }

    #[test]
    fn test_missing_tool_has_no_output() {
        let requirement = Requirement {
            name: "Missing",
            probe: ExternalCommand::new("jangular-definitely-not-a-program", &["--version"]),
            pattern: &MAVEN_VERSION,
            minimum: Version::new(1, 0, 0),
            reports_java: true,
        };
        assert_eq!(check_requirement(&requirement), (CheckStatus::Missing, None));
    }
}
