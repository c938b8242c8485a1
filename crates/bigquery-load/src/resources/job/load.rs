use std::fmt;
use std::str::FromStr;

use crate::error::DispositionKind;
use crate::resources::TableReference;
use crate::{Error, util};

/// Configuration for a load job. Starts out empty via [`Default`], and is filled in by a
/// [`Source`] and a [`Destination`].
///
/// [`Source`]: crate::Source
/// [`Destination`]: crate::Destination
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobConfigurationLoad<S = Box<str>> {
    // need to specify a default fn vec to avoid S needing Default
    #[serde(default = "Vec::new", skip_serializing_if = "Vec::is_empty")]
    pub source_uris: Vec<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_table: Option<TableReference<S>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_disposition: Option<CreateDisposition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub write_disposition: Option<WriteDisposition>,
    #[serde(flatten)]
    pub source_format: SourceFormat<S>,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub ignore_unknown_values: bool,
}

// cant use the derive(Default) impl since it places
// the unneeded bound S: Default
impl<S> Default for JobConfigurationLoad<S> {
    fn default() -> Self {
        Self {
            source_uris: Vec::new(),
            destination_table: None,
            create_disposition: None,
            write_disposition: None,
            source_format: SourceFormat::default(),
            ignore_unknown_values: false,
        }
    }
}

/// Specifies whether the destination table is created if it doesn't exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateDisposition {
    /// The table is created if it does not already exist. Tables are created atomically on
    /// successful completion of a job.
    #[default]
    CreateIfNeeded,
    /// The table must already exist, otherwise the job fails.
    CreateNever,
}

impl CreateDisposition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CreateIfNeeded => "CREATE_IF_NEEDED",
            Self::CreateNever => "CREATE_NEVER",
        }
    }
}

/// Specifies how existing data in the destination table is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WriteDisposition {
    /// Data is appended to any existing data, atomically on successful completion of a job.
    #[default]
    WriteAppend,
    /// Existing data is overwritten, atomically on successful completion of a job.
    WriteTruncate,
    /// The job fails if the destination table already contains data.
    WriteEmpty,
}

impl WriteDisposition {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::WriteAppend => "WRITE_APPEND",
            Self::WriteTruncate => "WRITE_TRUNCATE",
            Self::WriteEmpty => "WRITE_EMPTY",
        }
    }
}

macro_rules! impl_disposition_str {
    ($($name:ident ($kind:ident) => [$($variant:ident),* $(,)?]),* $(,)?) => {
        $(
            impl fmt::Display for $name {
                #[inline]
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }

            impl FromStr for $name {
                type Err = Error;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    $(
                        if s == Self::$variant.as_str() {
                            return Ok(Self::$variant);
                        }
                    )*

                    Err(Error::InvalidDisposition {
                        kind: DispositionKind::$kind,
                        value: s.into(),
                    })
                }
            }
        )*
    };
}

impl_disposition_str! {
    CreateDisposition(Create) => [CreateIfNeeded, CreateNever],
    WriteDisposition(Write) => [WriteAppend, WriteTruncate, WriteEmpty],
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SkipLeadingRows {
    #[default]
    Autodetect,
    Skip(usize),
}

impl SkipLeadingRows {
    #[inline]
    pub const fn is_autodetect(&self) -> bool {
        matches!(self, Self::Autodetect)
    }
}

impl serde::Serialize for SkipLeadingRows {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Autodetect => serializer.serialize_none(),
            Self::Skip(rows) => serializer.serialize_some(&rows),
        }
    }
}

impl<'de> serde::Deserialize<'de> for SkipLeadingRows {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match <Option<usize> as serde::Deserialize>::deserialize(deserializer)? {
            Some(rows) => Ok(Self::Skip(rows)),
            None => Ok(Self::Autodetect),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", tag = "sourceFormat")]
pub enum SourceFormat<S = Box<str>> {
    Csv(CsvOptions<S>),
    DatastoreBackup,
    NewlineDelimitedJson {
        #[serde(default, skip_serializing_if = "util::is_false")]
        autodetect: bool,
    },
    Avro,
    Parquet,
    Orc,
}

impl<S> Default for SourceFormat<S> {
    fn default() -> Self {
        Self::Csv(CsvOptions::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CsvOptions<S = Box<str>> {
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub allow_jagged_rows: bool,
    #[serde(default, skip_serializing_if = "SkipLeadingRows::is_autodetect")]
    pub skip_leading_rows: SkipLeadingRows,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub null_marker: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_delimiter: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<S>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bad_records: Option<usize>,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub autodetect: bool,
    #[serde(default, skip_serializing_if = "util::is_false")]
    pub allow_quoted_new_lines: bool,
}

impl<S> Default for CsvOptions<S> {
    fn default() -> Self {
        CsvOptions {
            allow_jagged_rows: false,
            skip_leading_rows: SkipLeadingRows::Autodetect,
            autodetect: true,
            null_marker: None,
            field_delimiter: None,
            quote: None,
            max_bad_records: None,
            allow_quoted_new_lines: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disposition_defaults() {
        assert_eq!(CreateDisposition::default(), CreateDisposition::CreateIfNeeded);
        assert_eq!(WriteDisposition::default(), WriteDisposition::WriteAppend);
    }

    #[test]
    fn test_disposition_strings_match_wire_format() {
        for disp in [CreateDisposition::CreateIfNeeded, CreateDisposition::CreateNever] {
            let json = serde_json::to_value(disp).unwrap();
            assert_eq!(json, serde_json::Value::from(disp.as_str()));
            assert_eq!(disp.to_string().parse::<CreateDisposition>().unwrap(), disp);
        }

        for disp in [
            WriteDisposition::WriteAppend,
            WriteDisposition::WriteTruncate,
            WriteDisposition::WriteEmpty,
        ] {
            let json = serde_json::to_value(disp).unwrap();
            assert_eq!(json, serde_json::Value::from(disp.as_str()));
            assert_eq!(disp.to_string().parse::<WriteDisposition>().unwrap(), disp);
        }
    }

    #[test]
    fn test_disposition_parse_rejects_unknown() {
        let err = "write_append".parse::<WriteDisposition>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDisposition {
                kind: DispositionKind::Write,
                ..
            }
        ));

        let err = "".parse::<CreateDisposition>().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidDisposition {
                kind: DispositionKind::Create,
                ..
            }
        ));
    }

    #[test]
    fn test_empty_config_serializes_only_source_format() {
        let conf = JobConfigurationLoad::<Box<str>>::default();
        let json = serde_json::to_value(&conf).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "sourceFormat": "CSV",
                "autodetect": true,
            })
        );
    }

    #[test]
    fn test_config_json() {
        let conf = JobConfigurationLoad {
            source_uris: vec!["gs://bucket/file.json"],
            source_format: SourceFormat::NewlineDelimitedJson { autodetect: false },
            destination_table: Some(TableReference {
                project_id: "p",
                dataset_id: "d",
                table_id: "t",
            }),
            write_disposition: Some(WriteDisposition::WriteTruncate),
            ..Default::default()
        };

        let json = serde_json::to_value(&conf).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "sourceUris": ["gs://bucket/file.json"],
                "destinationTable": {
                    "projectId": "p",
                    "datasetId": "d",
                    "tableId": "t",
                },
                "writeDisposition": "WRITE_TRUNCATE",
                "sourceFormat": "NEWLINE_DELIMITED_JSON",
            })
        );

        let parsed: JobConfigurationLoad = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.write_disposition, Some(WriteDisposition::WriteTruncate));
        assert_eq!(parsed.create_disposition, None);
        assert_eq!(
            parsed.destination_table.as_ref().map(TableReference::as_deref),
            Some(TableReference {
                project_id: "p",
                dataset_id: "d",
                table_id: "t",
            })
        );
    }
}
