use serde::{Deserialize, Deserializer, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
}

/// A repository, scoped to the project it was listed from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// A content-addressed manifest and the tags currently pointing at it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    pub digest: String,
    /// Harbor reports untagged artifacts with `"tags": null`.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: Vec<Tag>,
}

/// Copy of a single tagged artifact from one project/repository to another.
///
/// Absent fields decode as empty strings; the registry is left to reject incomplete references.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyRequest {
    pub src_project: String,
    pub src_repo: String,
    pub src_tag: String,
    pub dest_project: String,
    pub dest_repo: String,
    pub dest_tag: String,
}

/// Copy of every tagged artifact in a repository.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyRepositoryRequest {
    pub src_project: String,
    pub src_repo: String,
    pub dest_project: String,
    pub dest_repo: String,
}

/// Serde deserialization decorator to map `null` to an empty Vec.
fn null_as_empty<'de, D, T>(de: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(de)?.unwrap_or_default())
}
