use std::{fmt, str::FromStr};

use thiserror::Error;

/// Name of a project to scaffold. Used as the output directory name and as
/// the replacement for the placeholder token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectName(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProjectNameError {
    #[error("empty project name")]
    Empty,

    #[error("unrecognised option {0}")]
    Flag(String),
}

impl ProjectName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = ProjectNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            Err(ProjectNameError::Empty)
        } else if s.starts_with('-') {
            Err(ProjectNameError::Flag(s.to_string()))
        } else {
            Ok(Self(s.to_string()))
        }
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_parses() {
        let name: ProjectName = "demo".parse().unwrap();
        assert_eq!(name.as_str(), "demo");
        assert_eq!(name.to_string(), "demo");
    }

    #[test]
    fn test_any_characters_allowed_after_first() {
        let name: ProjectName = "my-demo.v2".parse().unwrap();
        assert_eq!(name.as_str(), "my-demo.v2");
    }

    #[test]
    fn test_dash_prefix_rejected() {
        let err = "--bogus".parse::<ProjectName>().unwrap_err();
        assert_eq!(err, ProjectNameError::Flag("--bogus".to_string()));
        assert_eq!(err.to_string(), "unrecognised option --bogus");

        let err = "-x".parse::<ProjectName>().unwrap_err();
        assert_eq!(err.to_string(), "unrecognised option -x");
    }

    #[test]
    fn test_empty_rejected() {
        let err = "".parse::<ProjectName>().unwrap_err();
        assert_eq!(err, ProjectNameError::Empty);
        assert_eq!(err.to_string(), "empty project name");
    }

    #[test]
    fn test_error_converts_into_anyhow() {
        let err: anyhow::Error = "--bogus".parse::<ProjectName>().unwrap_err().into();
        assert_eq!(
            err.downcast_ref::<ProjectNameError>(),
            Some(&ProjectNameError::Flag("--bogus".to_string()))
        );
    }
}
