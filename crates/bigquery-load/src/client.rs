use std::sync::Arc;

use crate::resources::job::load::JobConfigurationLoad;
use crate::resources::job::{Job, JobReference};
use crate::{Destination, Error, Source, Table};

/// Environment variables checked (in order) by [`BigQueryClient::from_env`].
pub const PROJECT_ID_ENV_VARS: &[&str] = &["GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"];

/// A handle scoped to a single project. Cheap to clone.
#[derive(Debug, Clone)]
pub struct BigQueryClient {
    inner: Arc<InnerClient>,
}

#[derive(Debug)]
struct InnerClient {
    project_id: Box<str>,
}

impl BigQueryClient {
    pub fn new(project_id: impl Into<Box<str>>) -> Self {
        Self {
            inner: Arc::new(InnerClient {
                project_id: project_id.into(),
            }),
        }
    }

    /// Builds a client for the project named by the first set, non-empty variable in
    /// [`PROJECT_ID_ENV_VARS`].
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup<F>(mut lookup: F) -> crate::Result<Self>
    where
        F: FnMut(&'static str) -> Result<String, std::env::VarError>,
    {
        for &key in PROJECT_ID_ENV_VARS {
            match lookup(key) {
                Ok(project_id) if !project_id.is_empty() => {
                    debug!(message = "found project id in env", var = key, %project_id);
                    return Ok(Self::new(project_id));
                }
                Ok(_) | Err(std::env::VarError::NotPresent) => (),
                Err(std::env::VarError::NotUnicode(invalid)) => {
                    warn!(message = "invalid unicode found in project id env var", var = key, ?invalid);
                }
            }
        }

        Err(Error::MissingProjectId)
    }

    #[inline]
    pub fn project_id(&self) -> &str {
        &self.inner.project_id
    }

    /// Builds a reference to a table in this client's project, with the default
    /// dispositions. Doesn't check whether the table (or dataset) exists.
    pub fn open_table(
        &self,
        dataset_id: impl Into<Box<str>>,
        table_id: impl Into<Box<str>>,
    ) -> Table {
        let table = Table::new(self.project_id(), dataset_id, table_id);
        debug!(message = "opened table", %table);
        table
    }

    /// Like [`open_table`], but from a single path. Accepts `project:dataset.table`,
    /// `project.dataset.table`, or `dataset.table` (which uses this client's project).
    ///
    /// [`open_table`]: Self::open_table
    pub fn open_table_path(&self, path: &str) -> crate::Result<Table> {
        let (project_id, dataset_id, table_id) = crate::resources::split_table_path(path)?;
        let project_id = project_id.unwrap_or(self.project_id());

        Ok(Table::new(project_id, dataset_id, table_id))
    }

    /// Assembles a load job reading from `src` into `dst`. The job snapshots both, so
    /// changing either afterwards won't affect it.
    pub fn load_job<Src, Dst>(&self, src: Src, dst: Dst) -> Job
    where
        Src: Source,
        Dst: Destination,
    {
        let mut conf = JobConfigurationLoad::default();

        src.customize_load_source(&mut conf);
        dst.customize_load_destination(&mut conf);

        let job = Job::from(conf).with_reference(JobReference::new(self.project_id().into()));

        debug!(message = "built load job", project_id = self.project_id());
        job
    }
}
