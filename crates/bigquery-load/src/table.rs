use std::fmt;

use crate::resources::job::load::{CreateDisposition, JobConfigurationLoad, WriteDisposition};
use crate::resources::{DatasetReference, TableReference};

/// A reference to a BigQuery table.
///
/// Only holds the identifiers of the table, nothing about whether it exists or what it
/// contains. Built with [`BigQueryClient::open_table`], which scopes it to the client's
/// project.
///
/// The identifiers are fixed once built, but the dispositions can be changed freely up until
/// the table is used to build a job. Building a job copies them, so later changes have no
/// effect on jobs that were already built.
///
/// [`BigQueryClient::open_table`]: crate::BigQueryClient::open_table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    reference: TableReference,
    /// Defaults to [`CreateDisposition::CreateIfNeeded`].
    pub create_disposition: CreateDisposition,
    /// Defaults to [`WriteDisposition::WriteAppend`].
    pub write_disposition: WriteDisposition,
}

impl Table {
    pub(crate) fn new(
        project_id: impl Into<Box<str>>,
        dataset_id: impl Into<Box<str>>,
        table_id: impl Into<Box<str>>,
    ) -> Self {
        Self {
            reference: TableReference {
                project_id: project_id.into(),
                dataset_id: dataset_id.into(),
                table_id: table_id.into(),
            },
            create_disposition: CreateDisposition::CreateIfNeeded,
            write_disposition: WriteDisposition::WriteAppend,
        }
    }

    #[inline]
    pub fn project_id(&self) -> &str {
        &self.reference.project_id
    }

    #[inline]
    pub fn dataset_id(&self) -> &str {
        &self.reference.dataset_id
    }

    #[inline]
    pub fn table_id(&self) -> &str {
        &self.reference.table_id
    }

    #[inline]
    pub fn reference(&self) -> TableReference<&str> {
        self.reference.as_deref()
    }

    #[inline]
    pub fn dataset_reference(&self) -> DatasetReference<&str> {
        DatasetReference {
            project_id: self.project_id(),
            dataset_id: self.dataset_id(),
        }
    }

    pub fn with_create_disposition(mut self, create_disposition: CreateDisposition) -> Self {
        self.create_disposition = create_disposition;
        self
    }

    pub fn with_write_disposition(mut self, write_disposition: WriteDisposition) -> Self {
        self.write_disposition = write_disposition;
        self
    }

    pub fn create_never(self) -> Self {
        self.with_create_disposition(CreateDisposition::CreateNever)
    }

    pub fn write_truncate(self) -> Self {
        self.with_write_disposition(WriteDisposition::WriteTruncate)
    }

    pub(crate) fn customize_load(&self, conf: &mut JobConfigurationLoad) {
        conf.destination_table = Some(self.reference.clone());
        conf.create_disposition = Some(self.create_disposition);
        conf.write_disposition = Some(self.write_disposition);

        debug!(
            message = "set load job destination",
            table = %self,
            create_disposition = %self.create_disposition,
            write_disposition = %self.write_disposition,
        );
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reference, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BigQueryClient;

    #[test]
    fn test_disposition_builders() {
        let client = BigQueryClient::new("p");

        let table = client
            .open_table("d", "t")
            .with_create_disposition(CreateDisposition::CreateNever)
            .with_write_disposition(WriteDisposition::WriteEmpty);

        assert_eq!(table.create_disposition, CreateDisposition::CreateNever);
        assert_eq!(table.write_disposition, WriteDisposition::WriteEmpty);

        let shorthand = client.open_table("d", "t").create_never().write_truncate();
        assert_eq!(shorthand.create_disposition, CreateDisposition::CreateNever);
        assert_eq!(shorthand.write_disposition, WriteDisposition::WriteTruncate);

        // the identifiers are untouched
        assert_eq!(shorthand.reference(), table.reference());
    }

    #[test]
    fn test_dataset_reference() {
        let table = BigQueryClient::new("p").open_table("d", "t");
        let dataset = table.dataset_reference();

        assert_eq!(dataset.project_id, "p");
        assert_eq!(dataset.dataset_id, "d");
        assert_eq!(dataset.into_table("t"), table.reference());
    }
}
