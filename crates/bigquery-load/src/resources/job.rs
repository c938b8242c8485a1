pub mod load;

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Job<S = Box<str>> {
    pub configuration: JobConfiguration<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_reference: Option<JobReference<S>>,
}

impl<S> From<load::JobConfigurationLoad<S>> for Job<S> {
    #[inline]
    fn from(value: load::JobConfigurationLoad<S>) -> Self {
        JobConfiguration::from(value).into_job()
    }
}

impl<S> Job<S> {
    pub fn with_reference(mut self, job_reference: JobReference<S>) -> Self {
        self.job_reference = Some(job_reference);
        self
    }

    /// Returns the load configuration, if this is a load job.
    pub fn load_config(&self) -> Option<&load::JobConfigurationLoad<S>> {
        match self.configuration.kind {
            JobConfigurationKind::Load(ref load) => Some(load),
        }
    }
}

/// Identifies a job. Only the project is required when inserting a new job, the service
/// generates an id if none is given.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobReference<S = Box<str>> {
    /// [Required] The ID of the project containing this job.
    pub project_id: S,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_id: Option<S>,
    /// The geographic location of the job. See details at
    /// https://cloud.google.com/bigquery/docs/locations#specifying_your_location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<S>,
}

impl<S> JobReference<S> {
    pub const fn new(project_id: S) -> Self {
        Self {
            project_id,
            job_id: None,
            location: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobType {
    Load,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfiguration<S = Box<str>> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_type: Option<JobType>,
    #[serde(flatten)]
    pub kind: JobConfigurationKind<S>,
}

impl<S> JobConfiguration<S> {
    /// Converts [self] into a [Job], with empty values for the fields in [Job]
    pub fn into_job(self) -> Job<S> {
        Job {
            job_reference: None,
            configuration: self,
        }
    }
}

impl<S> From<JobConfigurationKind<S>> for JobConfiguration<S> {
    #[inline]
    fn from(kind: JobConfigurationKind<S>) -> Self {
        JobConfiguration {
            job_type: Some(kind.job_type()),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
#[non_exhaustive]
pub enum JobConfigurationKind<S = Box<str>> {
    Load(load::JobConfigurationLoad<S>),
}

impl<S> JobConfigurationKind<S> {
    pub fn job_type(&self) -> JobType {
        match self {
            Self::Load(_) => JobType::Load,
        }
    }
}

impl<S> From<load::JobConfigurationLoad<S>> for JobConfigurationKind<S> {
    #[inline]
    fn from(value: load::JobConfigurationLoad<S>) -> Self {
        Self::Load(value)
    }
}

impl<S> From<load::JobConfigurationLoad<S>> for JobConfiguration<S> {
    #[inline]
    fn from(value: load::JobConfigurationLoad<S>) -> Self {
        JobConfigurationKind::from(value).into()
    }
}
