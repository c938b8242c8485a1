use std::fmt;
use std::str::FromStr;

use crate::Error;

pub mod job;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableReference<S = Box<str>> {
    pub project_id: S,
    pub dataset_id: S,
    pub table_id: S,
}

impl<S> TableReference<S> {
    #[inline]
    pub fn as_deref(&self) -> TableReference<&S::Target>
    where
        S: std::ops::Deref,
    {
        TableReference {
            project_id: self.project_id.deref(),
            dataset_id: self.dataset_id.deref(),
            table_id: self.table_id.deref(),
        }
    }

    #[inline]
    pub const fn dataset_reference(&self) -> DatasetReference<&S> {
        DatasetReference {
            project_id: &self.project_id,
            dataset_id: &self.dataset_id,
        }
    }
}

impl TableReference<&str> {
    #[inline]
    pub fn into_owned(self) -> TableReference {
        TableReference {
            project_id: self.project_id.into(),
            dataset_id: self.dataset_id.into(),
            table_id: self.table_id.into(),
        }
    }
}

/// Formats as the legacy fully qualified name, `project:dataset.table`.
impl<S: fmt::Display> fmt::Display for TableReference<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}.{}", self.project_id, self.dataset_id, self.table_id)
    }
}

/// Parses `project:dataset.table` or `project.dataset.table`. Domain scoped projects keep their
/// own colon, i.e `example.com:project:dataset.table`.
impl FromStr for TableReference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_table_path(s)? {
            (Some(project_id), dataset_id, table_id) => Ok(Self {
                project_id: project_id.into(),
                dataset_id: dataset_id.into(),
                table_id: table_id.into(),
            }),
            (None, _, _) => Err(Error::InvalidTablePath(s.into())),
        }
    }
}

/// Splits a table path into its (optional) project, dataset and table components.
pub(crate) fn split_table_path(path: &str) -> crate::Result<(Option<&str>, &str, &str)> {
    let invalid = || Error::InvalidTablePath(path.into());

    // split on the last colon, so domain scoped project ids ('example.com:project') stay intact
    let (project_id, rest) = match path.rsplit_once(':') {
        Some((project_id, rest)) => (Some(project_id), rest),
        None => (None, path),
    };

    let mut parts = rest.split('.');

    let (project_id, dataset_id, table_id) = match (parts.next(), parts.next(), parts.next()) {
        (Some(dataset_id), Some(table_id), None) => (project_id, dataset_id, table_id),
        // dotted form, the first component is the project
        (Some(dotted_project_id), Some(dataset_id), Some(table_id)) if project_id.is_none() => {
            (Some(dotted_project_id), dataset_id, table_id)
        }
        _ => return Err(invalid()),
    };

    if project_id.is_some_and(str::is_empty) || dataset_id.is_empty() || table_id.is_empty() {
        return Err(invalid());
    }

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok((project_id, dataset_id, table_id))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReference<S = Box<str>> {
    pub project_id: S,
    pub dataset_id: S,
}

impl<S> DatasetReference<S> {
    #[inline]
    pub fn into_table(self, table_id: S) -> TableReference<S> {
        TableReference {
            project_id: self.project_id,
            dataset_id: self.dataset_id,
            table_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_table_path() {
        let colon: TableReference = "proj:data.tbl".parse().unwrap();
        let dotted: TableReference = "proj.data.tbl".parse().unwrap();

        assert_eq!(colon, dotted);
        assert_eq!(&*colon.project_id, "proj");
        assert_eq!(&*colon.dataset_id, "data");
        assert_eq!(&*colon.table_id, "tbl");
        assert_eq!(colon.to_string(), "proj:data.tbl");
    }

    #[test]
    fn test_parse_domain_scoped_project() {
        let table: TableReference = "example.com:proj:data.tbl".parse().unwrap();

        assert_eq!(&*table.project_id, "example.com:proj");
        assert_eq!(&*table.dataset_id, "data");
        assert_eq!(&*table.table_id, "tbl");
        assert_eq!(table.to_string(), "example.com:proj:data.tbl");
        assert_eq!(table.to_string().parse::<TableReference>().unwrap(), table);

        assert!(matches!(
            split_table_path("example.com:proj.data.tbl"),
            Err(Error::InvalidTablePath(_))
        ));
    }

    #[test]
    fn test_parse_table_path_partial() {
        assert_eq!(split_table_path("data.tbl").unwrap(), (None, "data", "tbl"));

        // a fully qualified reference needs a project
        assert!(matches!(
            "data.tbl".parse::<TableReference>(),
            Err(Error::InvalidTablePath(_))
        ));
    }

    #[test]
    fn test_parse_table_path_invalid() {
        for path in [
            "",
            "tbl",
            ":data.tbl",
            "proj:data",
            "proj:a.b.c",
            "a.b.c.d",
            "proj:.tbl",
            "proj:data.",
            "..",
        ] {
            assert!(
                matches!(split_table_path(path), Err(Error::InvalidTablePath(_))),
                "expected '{path}' to be rejected"
            );
        }
    }

    #[test]
    fn test_dataset_reference_into_table() {
        let table = TableReference {
            project_id: "p",
            dataset_id: "d",
            table_id: "t",
        };

        let dataset = table.dataset_reference();
        assert_eq!(*dataset.project_id, "p");
        assert_eq!(*dataset.dataset_id, "d");

        let other = DatasetReference {
            project_id: "p",
            dataset_id: "d",
        }
        .into_table("other");
        assert_eq!(other.to_string(), "p:d.other");
    }
}
