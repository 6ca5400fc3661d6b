//! Source tree discovery and syllabus assembly.
//!
//! Layout under the source root:
//!
//! ```text
//! {year}/{cycle}/.preamble.toml
//! {year}/{cycle}/{ue_code}/.ue.toml
//! {year}/{cycle}/{ue_code}/{ecue_code}.toml
//! ```
//!
//! JSON and YAML documents are accepted wherever TOML is. The semester of a
//! UE is the third `-` segment of its code.

use super::schema::{EcueDocument, PreambleDocument, UeDocument};
use crate::model::{Cycle, Ecue, Preamble, Semester, Syllabus, Ue};
use crate::utils::config::{PREAMBLE_DOCUMENT_STEM, UE_DOCUMENT_STEM};
use crate::utils::error::LoadError;
use ignore::WalkBuilder;
use log::{debug, info};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Serialization of a source document, picked from its extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(DocumentFormat::Toml),
            "json" => Some(DocumentFormat::Json),
            "yml" | "yaml" => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }
}

/// Read and deserialize one document
pub fn read_document<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| LoadError::Layout(format!("unsupported document {}", path.display())))?;
    let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        DocumentFormat::Toml => toml::from_str(&raw).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Json => serde_json::from_str(&raw).map_err(|source| LoadError::Json {
            path: path.to_path_buf(),
            source,
        }),
        DocumentFormat::Yaml => serde_yaml::from_str(&raw).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[derive(Default)]
struct UeSources {
    ue: Option<(PathBuf, Ue)>,
    ecues: Vec<Ecue>,
}

#[derive(Default)]
struct CycleSources {
    preamble: Option<(PathBuf, Preamble)>,
    ues: BTreeMap<String, UeSources>,
}

type Sources = BTreeMap<String, BTreeMap<String, CycleSources>>;

/// Load every document under `root` and assemble the aggregated syllabus
///
/// **Public** - main entry point for document loading
///
/// # Errors
/// * `LoadError::Io` / `Toml` / `Json` / `Yaml` - a document cannot be read or parsed
/// * `LoadError::Invalid` - a document breaks a field constraint
/// * `LoadError::Layout` - a document sits where no document is expected
/// * `LoadError::MissingUe` - ECUEs without their UE document
/// * `LoadError::Duplicate` - two documents define the same code
pub fn load_syllabus(root: impl AsRef<Path>) -> Result<Syllabus, LoadError> {
    let root = root.as_ref();
    info!("Loading sources from: {}", root.display());

    let mut sources = Sources::new();
    let mut documents = 0usize;

    let walker = WalkBuilder::new(root)
        .standard_filters(false)
        .hidden(false)
        .follow_links(true)
        .sort_by_file_path(|a, b| a.cmp(b))
        .build();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.path();
        if DocumentFormat::from_path(path).is_none() {
            debug!("Skipping non-document file: {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let parts: Vec<String> = relative
            .iter()
            .map(|part| part.to_string_lossy().into_owned())
            .collect();
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        route_document(&mut sources, path, &parts, &stem)?;
        documents += 1;
    }
    debug!("Read {} documents", documents);

    let syllabus = assemble(sources)?;
    info!("Loaded {} cycles", syllabus.cycles().count());
    Ok(syllabus)
}

fn route_document(
    sources: &mut Sources,
    path: &Path,
    parts: &[String],
    stem: &str,
) -> Result<(), LoadError> {
    match parts {
        [year, cycle, _] if stem == PREAMBLE_DOCUMENT_STEM => {
            debug!("Loading preamble: {}", path.display());
            let doc: PreambleDocument = read_document(path)?;
            let slot = &mut cycle_sources(sources, year, cycle).preamble;
            if let Some((first, _)) = slot {
                return Err(LoadError::Layout(format!(
                    "two preambles for cycle {}: {} and {}",
                    cycle,
                    first.display(),
                    path.display()
                )));
            }
            *slot = Some((path.to_path_buf(), doc.into_preamble(cycle)));
        }
        [year, cycle, ue_code, _] if stem == UE_DOCUMENT_STEM => {
            debug!("Loading UE: {}", path.display());
            let doc: UeDocument = read_document(path)?;
            doc.validate(path)?;
            let slot = &mut ue_sources(sources, year, cycle, ue_code).ue;
            if let Some((first, _)) = slot {
                return Err(LoadError::Layout(format!(
                    "two UE documents for {}: {} and {}",
                    ue_code,
                    first.display(),
                    path.display()
                )));
            }
            *slot = Some((path.to_path_buf(), doc.into_ue(ue_code)));
        }
        [_, _, _, _] if stem.starts_with('.') => {
            debug!("Skipping hidden document: {}", path.display());
        }
        [year, cycle, ue_code, _] => {
            debug!("Loading ECUE: {}", path.display());
            let doc: EcueDocument = read_document(path)?;
            doc.validate(path)?;
            ue_sources(sources, year, cycle, ue_code)
                .ecues
                .push(doc.into_ecue(stem));
        }
        _ => {
            return Err(LoadError::Layout(format!(
                "document outside the year/cycle/UE layout: {}",
                path.display()
            )));
        }
    }
    Ok(())
}

fn cycle_sources<'a>(sources: &'a mut Sources, year: &str, cycle: &str) -> &'a mut CycleSources {
    sources
        .entry(year.to_string())
        .or_default()
        .entry(cycle.to_string())
        .or_default()
}

fn ue_sources<'a>(
    sources: &'a mut Sources,
    year: &str,
    cycle: &str,
    ue_code: &str,
) -> &'a mut UeSources {
    cycle_sources(sources, year, cycle)
        .ues
        .entry(ue_code.to_string())
        .or_default()
}

/// Semester code of a UE: third `-` segment of `{year}-{cycle}-{semester}-{ue}`
pub fn semester_of(ue_code: &str) -> Option<&str> {
    ue_code.split('-').nth(2).filter(|s| !s.is_empty())
}

fn assemble(sources: Sources) -> Result<Syllabus, LoadError> {
    let mut syllabus = Syllabus::new();

    for (year, cycles) in sources {
        for (code, found) in cycles {
            let cycle = assemble_cycle(&code, found)?;
            debug!(
                "Cycle {}/{}: {} semesters, {} UEs, {} ECUEs",
                year,
                code,
                cycle.semesters().len(),
                cycle.ue_count(),
                cycle.ecue_count()
            );
            syllabus.years.entry(year.clone()).or_default().push(cycle);
        }
    }
    Ok(syllabus)
}

fn assemble_cycle(code: &str, sources: CycleSources) -> Result<Cycle, LoadError> {
    let mut semesters: BTreeMap<String, Semester> = BTreeMap::new();

    for (ue_code, found) in sources.ues {
        let Some((_, mut ue)) = found.ue else {
            return Err(LoadError::MissingUe(ue_code));
        };

        let mut ecues = found.ecues;
        ecues.sort_by(|a, b| a.code.cmp(&b.code));
        for ecue in ecues {
            ue.add_ecue(ecue)?;
        }

        let semester = semester_of(&ue_code)
            .ok_or_else(|| LoadError::Layout(format!("UE code {} has no semester segment", ue_code)))?;
        semesters
            .entry(semester.to_string())
            .or_insert_with(|| Semester::new(semester))
            .add_ue(ue)?;
    }

    let mut cycle = Cycle::new(code);
    cycle.preamble = sources.preamble.map(|(_, preamble)| preamble);
    for semester in semesters.into_values() {
        cycle.add_semester(semester)?;
    }
    Ok(cycle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_format() {
        assert_eq!(DocumentFormat::from_path(Path::new("a/.ue.toml")), Some(DocumentFormat::Toml));
        assert_eq!(DocumentFormat::from_path(Path::new("a/X.json")), Some(DocumentFormat::Json));
        assert_eq!(DocumentFormat::from_path(Path::new("a/X.yml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a/.ue.yaml")), Some(DocumentFormat::Yaml));
        assert_eq!(DocumentFormat::from_path(Path::new("a/X.md")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("a/.gitkeep")), None);
    }

    #[test]
    fn test_semester_of() {
        assert_eq!(semester_of("23-PA-S1-MATH"), Some("S1"));
        assert_eq!(semester_of("MATH"), None);
    }
}
